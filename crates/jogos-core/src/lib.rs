//! Framework-agnostic core of the game form page.
//!
//! Holds the record model, the form state controller, the preview rules,
//! the page controller (loader + submission handler) and the capability
//! traits ([`api::GameApi`], [`route::Navigator`]) that frontends inject.

pub mod api;
pub mod form;
pub mod page;
pub mod preview;
pub mod record;
pub mod route;
