//! The create/edit page: title, field rows, previews and actions.
//!
//! Sends [`UiMessage::Open`] whenever the `id` prop changes so the page
//! coroutine reloads without a full page refresh.

use dioxus::prelude::*;
use jogos_core::form::FIELDS;
use jogos_core::page::GameFormPage;
use jogos_core::preview::PreviewSlot;

use super::form_field::FormFieldRow;
use super::image_preview::ImagePreview;
use crate::UiMessage;

#[component]
pub fn GameFormScreen(id: Option<String>, page: Signal<GameFormPage>) -> Element {
    let coroutine = use_coroutine_handle::<UiMessage>();

    use_effect(use_reactive(&id, move |id| {
        coroutine.send(UiMessage::Open(id));
    }));

    let state = page.read();
    let title = state.mode().title();
    let loading = state.is_loading();
    let can_submit = state.can_submit();
    let foto = state.values().foto.clone();
    let cover = state.values().cover.clone();

    rsx! {
        div { class: "container mx-auto px-4",
            div { class: "flex justify-center items-center my-3 texto-custom",
                h2 { class: "text-2xl font-bold", "{title}" }
            }

            if loading {
                p { "Carregando..." }
            } else {
                form {
                    class: "my-3",
                    onsubmit: move |e| {
                        e.prevent_default();
                        coroutine.send(UiMessage::Submit);
                    },
                    div { class: "grid grid-cols-1 md:grid-cols-2 gap-6",
                        div {
                            for field in FIELDS {
                                FormFieldRow { key: "{field.name()}", field, page }
                            }
                            div { class: "flex justify-center items-center my-12 texto-custom",
                                h4 { class: "text-lg font-semibold", "PREVIEW DA FOTO E COVER →" }
                            }
                        }
                        div {
                            ImagePreview { slot: PreviewSlot::Photo, value: foto }
                            ImagePreview { slot: PreviewSlot::Cover, value: cover }
                        }
                    }

                    div { class: "flex justify-center gap-2 mt-6",
                        button {
                            class: "bg-emerald-600 hover:bg-emerald-500 disabled:opacity-50 text-white font-semibold rounded-lg px-4 py-2 transition",
                            r#type: "submit",
                            disabled: !can_submit,
                            "✔ Salvar"
                        }
                        button {
                            class: "bg-red-600 hover:bg-red-500 text-white font-semibold rounded-lg px-4 py-2 transition",
                            r#type: "button",
                            onclick: move |_| coroutine.send(UiMessage::Back),
                            "← Voltar"
                        }
                    }
                }
            }
        }
    }
}
