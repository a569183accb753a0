pub mod form_field;
pub mod game_form_screen;
pub mod image_preview;
