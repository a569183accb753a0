//! Browser adapters: navigation, current path and backend origin.

use jogos_client::config::ApiConfig;
use jogos_core::route::{Navigator, parse_form_path};
use tracing::{error, info};

/// Navigates by assigning `window.location`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn push(&self, route: &str) {
        let Some(window) = web_sys::window() else {
            error!(route, "No window to navigate with");
            return;
        };
        info!(route, "Navigating");
        if let Err(e) = window.location().set_href(route) {
            error!(route, error = ?e, "Navigation failed");
        }
    }
}

/// The record id in the current URL, if any.
pub fn current_form_id() -> Option<String> {
    let path = web_sys::window()?.location().pathname().ok()?;
    parse_form_path(&path)
}

/// Backend location: `JOGOS_API_URL` at build time, otherwise `/api/` on
/// the page origin.
pub fn api_config() -> ApiConfig {
    if let Some(url) = option_env!("JOGOS_API_URL") {
        return ApiConfig::new(url);
    }
    let origin = web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default();
    ApiConfig::new(format!("{origin}/api/"))
}
