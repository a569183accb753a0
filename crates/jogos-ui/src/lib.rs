//! Shared Dioxus UI for the game record form.
//!
//! This crate is platform-agnostic: it provides the form components, the
//! shared [`UiMessage`] type, and the page coroutine in [`app_logic`].
//! Platform crates supply the [`GameApi`](jogos_core::api::GameApi) and
//! [`Navigator`](jogos_core::route::Navigator) implementations.

pub mod app_logic;
pub mod components;

use jogos_core::form::Field;

/// Messages sent from UI components to the page coroutine.
#[derive(Debug, Clone, PartialEq)]
pub enum UiMessage {
    /// Show the page for an identifier (`None` = create).
    Open(Option<String>),
    /// A keystroke in one field.
    Edit { field: Field, value: String },
    /// A field lost focus.
    Blur(Field),
    /// Save the current values.
    Submit,
    /// Leave for the listing without saving.
    Back,
}
