use dioxus::launch;
use dioxus::prelude::*;
use dioxus_logger::tracing::{error, Level};

use billed_ui::config::DEFAULT_MOUNT_ID;
use billed_ui::interop;

fn main() {
    // Initialize logging for WASM
    wasm_logger::init(wasm_logger::Config::default());
    dioxus_logger::init(Level::INFO).ok();

    launch(App);
}

#[component]
fn App() -> Element {
    use_effect(|| {
        if let Err(e) = interop::boot() {
            error!("Failed to start router: {}", e);
        }
    });

    rsx! {
        div { id: DEFAULT_MOUNT_ID }
    }
}
