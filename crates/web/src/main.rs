// =============================================================================
// TTM Painting Web - WASM Entry Point
// =============================================================================
// This is the main entry point for the WASM binary.
// Trunk compiles this and injects it into index.html.
// =============================================================================

use ttm_painting_web::{init_logging, App};

fn main() {
    init_logging();

    log::info!("Starting TTM Painting site...");

    leptos::mount::mount_to_body(App);
}
