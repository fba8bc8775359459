use dioxus::prelude::*;

use crate::components::{GiftDetail, Login, NotFound};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/app/product/:product_id")]
    GiftDetail { product_id: String },

    #[redirect("/", || Route::Login {})]
    #[route("/app/login")]
    Login {},

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
