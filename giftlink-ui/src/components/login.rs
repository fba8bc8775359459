use dioxus::prelude::*;

/// Redirect target for unauthenticated visits. Sign-in itself is handled
/// by the main GiftLink app shell, not this crate.
#[component]
pub fn Login() -> Element {
    rsx! {
        style { {LOGIN_STYLES} }

        div {
            class: "login-panel",
            h2 { "Sign in required" }
            p { "You need to be signed in to view gift details." }
        }
    }
}

const LOGIN_STYLES: &str = r#"
.login-panel {
    max-width: 28rem;
    margin: 4rem auto;
    padding: 2rem;
    border: 1px solid var(--border-color, #e2e8f0);
    border-radius: 0.5rem;
    text-align: center;
    background: white;
}

.login-panel h2 {
    margin-top: 0;
}

.login-panel p {
    color: var(--text-secondary, #475569);
}
"#;
