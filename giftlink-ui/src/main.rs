#[cfg(target_arch = "wasm32")]
use dioxus::launch;
#[cfg(target_arch = "wasm32")]
use dioxus::prelude::*;
#[cfg(target_arch = "wasm32")]
use dioxus_logger::tracing::Level;

#[cfg(target_arch = "wasm32")]
use giftlink_ui::{Route, SessionHandle};

#[cfg(target_arch = "wasm32")]
fn main() {
    // Initialize logging for WASM
    wasm_logger::init(wasm_logger::Config::default());
    dioxus_logger::init(Level::INFO).ok();

    launch(App);
}

#[cfg(target_arch = "wasm32")]
#[component]
fn App() -> Element {
    // Session token access goes through context so pages stay testable
    // against an in-memory store.
    use_context_provider(SessionHandle::browser);

    rsx! {
        Router::<Route> {}
    }
}

// The web renderer is the only entrypoint; native builds compile the
// library for unit tests.
#[cfg(not(target_arch = "wasm32"))]
fn main() {}
