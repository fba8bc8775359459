use std::rc::Rc;

/// sessionStorage key the app shell writes the token under after login.
pub const AUTH_TOKEN_KEY: &str = "auth-token";

/// Read-only view of the browser session credential. Presence is a boolean
/// gate only; the token's content is never validated here.
pub trait SessionStore {
    fn token(&self) -> Option<String>;
}

/// The real store: browser sessionStorage.
pub struct BrowserSession;

impl SessionStore for BrowserSession {
    fn token(&self) -> Option<String> {
        web_sys::window()
            .and_then(|window| window.session_storage().ok().flatten())
            .and_then(|storage| storage.get_item(AUTH_TOKEN_KEY).ok().flatten())
    }
}

/// Cloneable handle handed out through Dioxus context.
#[derive(Clone)]
pub struct SessionHandle(Rc<dyn SessionStore>);

impl SessionHandle {
    pub fn browser() -> Self {
        Self::new(BrowserSession)
    }

    pub fn new(store: impl SessionStore + 'static) -> Self {
        Self(Rc::new(store))
    }

    pub fn token(&self) -> Option<String> {
        self.0.token()
    }

    /// A blank or whitespace-only token counts as absent.
    pub fn is_authenticated(&self) -> bool {
        self.token().is_some_and(|token| !token.trim().is_empty())
    }
}

// ============================================================================
// Tests
// ============================================================================
