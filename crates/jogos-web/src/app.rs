//! Root application component for the web frontend.
//!
//! Reads the record id from the URL, spawns the page coroutine over the
//! HTTP backend and renders the form screen.

use dioxus::prelude::*;
use jogos_client::http_client::HttpGameApi;
use jogos_core::page::GameFormPage;
use jogos_ui::UiMessage;
use jogos_ui::app_logic::run_form_page;
use jogos_ui::components::game_form_screen::GameFormScreen;

use crate::browser::{BrowserNavigator, api_config, current_form_id};

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Root `<App>` component.
#[component]
pub fn App() -> Element {
    let id = use_signal(current_form_id);
    // Edit mode must paint as `Loading` before the coroutine handles `Open`.
    let page = use_signal(move || GameFormPage::opened(id.peek().clone()));

    // Components send UiMessage via the coroutine handle.
    let _coroutine = use_coroutine(move |rx: UnboundedReceiver<UiMessage>| {
        let mut page = page;

        async move {
            run_form_page(
                rx,
                move |snapshot: &GameFormPage| page.set(snapshot.clone()),
                HttpGameApi::new(api_config()),
                BrowserNavigator,
            )
            .await;
        }
    });

    rsx! {
        document::Stylesheet { href: MAIN_CSS }
        div { class: "min-h-screen bg-gray-900 text-white font-sans py-6",
            GameFormScreen { id: id(), page }
        }
    }
}
