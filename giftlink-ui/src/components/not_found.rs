use dioxus::prelude::*;

use crate::routes::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div {
            style: "padding: 4rem 1rem; text-align: center;",
            h2 { "404" }
            p { "No page at /{path}" }
            Link { to: Route::Login {}, "Go to sign in" }
        }
    }
}
