use dioxus::prelude::*;

use giftlink_types::Comment;

use crate::api::fetch_gift;
use crate::routes::Route;
use crate::session::SessionHandle;
use crate::state::ViewState;

/// The five placeholder comments shown under every gift. They are not
/// associated with any particular gift; there is no comments API yet.
pub fn placeholder_comments() -> Vec<Comment> {
    [
        ("John Doe", "I would like this!"),
        ("Jane Smith", "Just DMed you."),
        ("Alice Johnson", "I will take it if it's still available."),
        ("Mike Brown", "This is a good one!"),
        (
            "Sarah Wilson",
            "My family can use one. DM me if it is still available. Thank you!",
        ),
    ]
    .into_iter()
    .map(|(author, comment)| Comment {
        author: author.to_string(),
        comment: comment.to_string(),
    })
    .collect()
}

/// What one activation of the detail page does, decided purely from
/// authentication state: redirect away, or load the gift.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Activation {
    RedirectToLogin,
    Fetch,
}

fn plan_activation(authenticated: bool) -> Activation {
    if authenticated {
        Activation::Fetch
    } else {
        Activation::RedirectToLogin
    }
}

/// A fetch continuation applies its result only while the epoch it
/// captured is still the current one.
fn result_is_current(captured: u64, current: u64) -> bool {
    captured == current
}

#[component]
pub fn GiftDetail(product_id: String) -> Element {
    let mut state = use_signal(|| ViewState::Loading);
    // Liveness token: a fetch only applies its result while its epoch is
    // still the current one, so a response that lands after the product id
    // changed is dropped.
    let mut epoch = use_signal(|| 0u64);
    let nav = use_navigator();
    let session = use_context::<SessionHandle>();

    // Runs on mount and again whenever the product id changes.
    use_effect(use_reactive(&product_id, move |id| {
        let my_epoch = *epoch.peek() + 1;
        epoch.set(my_epoch);

        // Not signed in: redirect and skip the fetch entirely.
        if plan_activation(session.is_authenticated()) == Activation::RedirectToLogin {
            nav.push(Route::Login {});
            return;
        }

        state.set(ViewState::Loading);
        spawn(async move {
            let result = fetch_gift(&id).await;
            if let Err(e) = &result {
                dioxus_logger::tracing::error!("Failed to fetch gift {}: {}", id, e);
            }
            if result_is_current(my_epoch, *epoch.peek()) {
                state.set(ViewState::from_fetch(result));
            }
        });

        scroll_to_top();
    }));

    let placeholder = state.read().placeholder();
    let gift = state.read().gift().cloned();

    rsx! {
        style { {DETAIL_STYLES} }

        if let Some(text) = placeholder {
            div { class: "detail-placeholder", "{text}" }
        }

        if let Some(gift) = gift {
            div {
                class: "detail-container",

                button {
                    class: "back-button",
                    onclick: move |_| {
                        nav.go_back();
                    },
                    "Back"
                }

                div {
                    class: "gift-card",
                    div {
                        class: "gift-card-header",
                        h2 { class: "gift-title", "{gift.name}" }
                    }
                    div {
                        class: "gift-card-body",
                        div {
                            class: "gift-image-frame",
                            if let Some(image) = gift.image_url() {
                                img { class: "gift-image", src: "{image}", alt: "{gift.name}" }
                            } else {
                                div { class: "no-image", "No Image Available" }
                            }
                        }
                        p { strong { "Category: " } "{gift.category}" }
                        p { strong { "Condition: " } "{gift.condition}" }
                        p { strong { "Date Added: " } "{gift.date_added.to_display_date()}" }
                        p { strong { "Age (Years): " } "{gift.age}" }
                        p { strong { "Description: " } "{gift.description}" }
                    }
                }

                div {
                    class: "comments-section",
                    h3 { "Comments" }
                    for comment in placeholder_comments() {
                        CommentCard { comment }
                    }
                }
            }
        }
    }
}

#[component]
pub fn CommentCard(comment: Comment) -> Element {
    rsx! {
        div {
            class: "comment-card",
            p { class: "comment-author", strong { "{comment.author}:" } }
            p { class: "comment-text", "{comment.comment}" }
        }
    }
}

/// Reset the viewport to the top. Cosmetic, fire-and-forget.
fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

// Detail-page CSS
const DETAIL_STYLES: &str = r#"
.detail-placeholder {
    padding: 3rem 1rem;
    text-align: center;
    color: var(--text-secondary, #475569);
    font-size: 1.125rem;
}

.detail-container {
    max-width: 48rem;
    margin: 0 auto;
    padding: 2rem 1rem;
}

.back-button {
    margin-bottom: 1rem;
    padding: 0.5rem 1.25rem;
    background: var(--muted-bg, #64748b);
    color: white;
    border: none;
    border-radius: 0.375rem;
    cursor: pointer;
    font-size: 0.9375rem;
}

.back-button:hover {
    background: var(--muted-bg-hover, #475569);
}

.gift-card {
    border: 1px solid var(--border-color, #e2e8f0);
    border-radius: 0.5rem;
    overflow: hidden;
    background: white;
}

.gift-card-header {
    padding: 1rem 1.5rem;
    background: var(--accent-bg, #0d9488);
}

.gift-title {
    margin: 0;
    color: white;
    font-size: 1.5rem;
}

.gift-card-body {
    padding: 1.5rem;
}

.gift-card-body p {
    margin: 0.5rem 0;
}

.gift-image-frame {
    margin-bottom: 1.5rem;
}

.gift-image {
    max-width: 100%;
    border-radius: 0.375rem;
}

.no-image {
    display: flex;
    align-items: center;
    justify-content: center;
    height: 12rem;
    background: var(--placeholder-bg, #f1f5f9);
    color: var(--text-muted, #94a3b8);
    border-radius: 0.375rem;
    font-size: 1.125rem;
}

.comments-section {
    margin-top: 2rem;
}

.comment-card {
    margin-bottom: 1rem;
    padding: 1rem;
    border: 1px solid var(--border-color, #e2e8f0);
    border-radius: 0.5rem;
    background: white;
}

.comment-author {
    margin: 0 0 0.25rem 0;
}

.comment-text {
    margin: 0;
    color: var(--text-secondary, #475569);
}
"#;

// ============================================================================
// Tests
// ============================================================================
