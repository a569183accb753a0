//! Live image preview for the photo and cover URLs.

use dioxus::prelude::*;
use jogos_core::preview::{Preview, PreviewSlot, preview};

/// Render the preview for the current value of a URL field.
#[component]
pub fn ImagePreview(slot: PreviewSlot, value: String) -> Element {
    rsx! {
        div { class: "flex justify-center items-center mt-12",
            match preview(slot, &value) {
                Preview::Image { src, alt } => rsx! {
                    img { class: "imagem_produto_preview", src: "{src}", alt: "{alt}" }
                },
                Preview::Missing { message } => rsx! {
                    h2 { class: "text-2xl text-red-500 imagem_produto_preview_no_image", "{message}" }
                },
            }
        }
    }
}
