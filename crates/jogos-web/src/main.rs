mod app;
mod browser;

/// Debug builds also show the per-request `debug!` lines.
const LOG_LEVEL: tracing::Level = if cfg!(debug_assertions) {
    tracing::Level::DEBUG
} else {
    tracing::Level::INFO
};

fn main() {
    // Routes `tracing` to the browser console.
    let _ = dioxus::logger::init(LOG_LEVEL);
    dioxus::launch(app::App);
}
