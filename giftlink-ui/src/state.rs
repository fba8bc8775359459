use giftlink_types::Gift;

use crate::api::FetchError;

/// Render state of the gift detail page. Exactly one variant holds at a
/// time; within one activation the only transitions are
/// `Loading -> Error` and `Loading -> Loaded`. A fresh activation (the
/// product id changed) resets to `Loading`.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    Loading,
    Error(String),
    /// `Loaded(None)` is a successful response with a `null` body.
    Loaded(Option<Gift>),
}

impl ViewState {
    pub fn from_fetch(result: Result<Option<Gift>, FetchError>) -> Self {
        match result {
            Ok(gift) => ViewState::Loaded(gift),
            Err(e) => ViewState::Error(e.to_string()),
        }
    }

    /// Placeholder text shown instead of the detail card, if any.
    pub fn placeholder(&self) -> Option<String> {
        match self {
            ViewState::Loading => Some("Loading...".to_string()),
            ViewState::Error(message) => Some(format!("Error: {message}")),
            ViewState::Loaded(None) => Some("Gift not found".to_string()),
            ViewState::Loaded(Some(_)) => None,
        }
    }

    pub fn gift(&self) -> Option<&Gift> {
        match self {
            ViewState::Loaded(Some(gift)) => Some(gift),
            _ => None,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn lamp() -> Gift {
        serde_json::from_str(
            r#"{
                "name": "Lamp",
                "category": "Home",
                "condition": "Used",
                "dateAdded": "2023-01-01",
                "age": 2,
                "description": "Works fine"
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_loading_placeholder() {
        assert_eq!(ViewState::Loading.placeholder().as_deref(), Some("Loading..."));
        assert!(ViewState::Loading.gift().is_none());
    }

    #[test]
    fn test_http_status_error_placeholder() {
        let state = ViewState::from_fetch(Err(FetchError::Status(500)));
        assert_eq!(
            state.placeholder().as_deref(),
            Some("Error: Network response was not ok")
        );
        assert!(state.gift().is_none());
    }

    #[test]
    fn test_request_failure_placeholder_carries_message() {
        let state = ViewState::from_fetch(Err(FetchError::Request(
            "connection refused".to_string(),
        )));
        assert_eq!(
            state.placeholder().as_deref(),
            Some("Error: connection refused")
        );
    }

    #[test]
    fn test_null_body_renders_gift_not_found() {
        let state = ViewState::from_fetch(Ok(None));
        assert_eq!(state.placeholder().as_deref(), Some("Gift not found"));
        assert!(state.gift().is_none());
    }

    #[test]
    fn test_loaded_gift_has_no_placeholder() {
        let state = ViewState::from_fetch(Ok(Some(lamp())));
        assert!(state.placeholder().is_none());

        let gift = state.gift().unwrap();
        assert_eq!(gift.name, "Lamp");
        assert_eq!(gift.category, "Home");
        assert_eq!(gift.condition, "Used");
        assert_eq!(gift.date_added.to_display_date(), "1/1/2023");
        assert_eq!(gift.age, 2);
        assert_eq!(gift.description, "Works fine");
    }
}
