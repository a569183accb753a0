//! A single labelled form input with invalid-state feedback.

use dioxus::prelude::*;
use jogos_core::form::Field;
use jogos_core::page::GameFormPage;

use crate::UiMessage;

const INPUT_CLASS: &str = "bg-gray-700 rounded-lg px-4 py-2 text-white outline-none focus:ring-2 focus:ring-emerald-500 w-full";
const INVALID_CLASS: &str = "ring-2 ring-red-500";

#[component]
pub fn FormFieldRow(field: Field, page: Signal<GameFormPage>) -> Element {
    let coroutine = use_coroutine_handle::<UiMessage>();
    let state = page.read();
    let form = state.form();

    let name = field.name();
    let value = form.value(field).to_string();
    let invalid = form.is_invalid(field);
    let feedback = form.error(field).unwrap_or_default().to_string();
    let class = if invalid {
        format!("{INPUT_CLASS} {INVALID_CLASS}")
    } else {
        INPUT_CLASS.to_string()
    };

    rsx! {
        div { class: "flex flex-col gap-1 mb-4",
            label { class: "text-sm text-gray-400", r#for: "{name}",
                b { "{field.label()}" }
            }
            if let Some(rows) = field.rows() {
                textarea {
                    class: "{class}",
                    id: "{name}",
                    name: "{name}",
                    rows: "{rows}",
                    value: "{value}",
                    oninput: move |e| coroutine.send(UiMessage::Edit { field, value: e.value() }),
                    onblur: move |_| coroutine.send(UiMessage::Blur(field)),
                }
            } else {
                input {
                    class: "{class}",
                    r#type: "text",
                    id: "{name}",
                    name: "{name}",
                    placeholder: field.placeholder(),
                    value: "{value}",
                    oninput: move |e| coroutine.send(UiMessage::Edit { field, value: e.value() }),
                    onblur: move |_| coroutine.send(UiMessage::Blur(field)),
                }
            }
            if invalid {
                p { class: "text-red-400 text-sm", "{feedback}" }
            }
        }
    }
}
