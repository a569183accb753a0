//! Routing collaborator: listing route, form paths and navigation.

/// Where the page goes after a successful save or on "back".
pub const LISTING_ROUTE: &str = "/jogos";

const FORM_PREFIX: &str = "/jogos/form";

/// Navigation capability injected into the page.
///
/// Implementations live in the platform crate (e.g. `window.location` on
/// web); tests record the pushed routes.
pub trait Navigator {
    fn push(&self, route: &str);
}

impl<T: Navigator> Navigator for &T {
    fn push(&self, route: &str) {
        (**self).push(route)
    }
}

/// URL path of the form page, for creating (`None`) or editing a record.
pub fn form_path(id: Option<&str>) -> String {
    match id {
        Some(id) => format!("{FORM_PREFIX}/{id}"),
        None => FORM_PREFIX.to_string(),
    }
}

/// Extract the optional record id from a form page path.
///
/// Returns `None` for the create path, for an empty id segment, and for
/// paths that are not the form page at all.
pub fn parse_form_path(path: &str) -> Option<String> {
    let rest = path.trim_end_matches('/').strip_prefix(FORM_PREFIX)?;
    let id = rest.strip_prefix('/')?;
    if id.is_empty() || id.contains('/') {
        return None;
    }
    Some(id.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_path_has_no_id() {
        assert_eq!(parse_form_path("/jogos/form"), None);
        assert_eq!(parse_form_path("/jogos/form/"), None);
        assert_eq!(form_path(None), "/jogos/form");
    }

    #[test]
    fn edit_path_yields_id() {
        assert_eq!(parse_form_path("/jogos/form/42").as_deref(), Some("42"));
        assert_eq!(parse_form_path("/jogos/form/42/").as_deref(), Some("42"));
        assert_eq!(form_path(Some("7")), "/jogos/form/7");
    }

    #[test]
    fn unrelated_paths() {
        assert_eq!(parse_form_path("/jogos"), None);
        assert_eq!(parse_form_path("/jogos/formulario/1"), None);
        assert_eq!(parse_form_path("/jogos/form/1/extra"), None);
    }
}
