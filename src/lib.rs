//! Client-side storefront demo built with Dioxus.
//!
//! A login/signup flow, a paginated product listing fetched from the
//! dummyjson.com demo API, and an in-memory shopping cart shared across
//! views. Everything lives in the browser: no backend, no persistence,
//! and the cart resets on reload.

pub mod api;
pub mod cart;
pub mod components;
pub mod time;

use dioxus::prelude::*;

use components::cart_items::CartItems;
use components::home::Home;
use components::products::Products;
use components::signup::Signup;

/// Browser routes. Paths are case-sensitive and kept exactly as the
/// original site spelled them.
#[derive(Routable, Clone, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/Products")]
    Products {},
    #[route("/CartItems")]
    CartItems {},
    #[route("/Signup")]
    Signup {},
}

/// Application root: provides the cart store, then hands off to the
/// router. Every route is reachable without authentication.
#[component]
pub fn App() -> Element {
    use_context_provider(cart::CartStore::new);

    rsx! {
        Router::<Route> {}
    }
}
