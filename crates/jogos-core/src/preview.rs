//! Image preview rules for the photo and cover fields.

/// Which preview pane is being rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewSlot {
    Photo,
    Cover,
}

impl PreviewSlot {
    fn alt(self) -> &'static str {
        match self {
            PreviewSlot::Photo => "Preview Foto",
            PreviewSlot::Cover => "Preview Cover",
        }
    }

    fn missing(self) -> &'static str {
        match self {
            PreviewSlot::Photo => "Sem Foto!",
            PreviewSlot::Cover => "Sem Capa!",
        }
    }
}

/// What a preview pane shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Preview<'a> {
    /// Render an image with the field value as its source.
    Image { src: &'a str, alt: &'static str },
    /// Render the "no image" fallback.
    Missing { message: &'static str },
}

/// Derive the preview for a field value.
///
/// The value is used verbatim: an invalid URL renders a broken image.
pub fn preview(slot: PreviewSlot, value: &str) -> Preview<'_> {
    if value.is_empty() {
        Preview::Missing {
            message: slot.missing(),
        }
    } else {
        Preview::Image {
            src: value,
            alt: slot.alt(),
        }
    }
}
