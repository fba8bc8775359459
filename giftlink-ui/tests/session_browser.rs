//! Browser-side check of the sessionStorage-backed session store.
//! Runs under `wasm-pack test --headless` only.
#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use giftlink_ui::session::{SessionHandle, AUTH_TOKEN_KEY};

wasm_bindgen_test_configure!(run_in_browser);

fn session_storage() -> web_sys::Storage {
    web_sys::window()
        .and_then(|window| window.session_storage().ok().flatten())
        .expect("sessionStorage is available in the test browser")
}

#[wasm_bindgen_test]
fn browser_session_gates_on_auth_token() {
    let storage = session_storage();
    storage.remove_item(AUTH_TOKEN_KEY).unwrap();

    let session = SessionHandle::browser();
    assert!(!session.is_authenticated());

    storage.set_item(AUTH_TOKEN_KEY, "jwt-abc123").unwrap();
    assert!(session.is_authenticated());
    assert_eq!(session.token().as_deref(), Some("jwt-abc123"));

    storage.remove_item(AUTH_TOKEN_KEY).unwrap();
    assert!(!session.is_authenticated());
}
