use dioxus::prelude::*;

use crate::components::login::Login;

/// Landing page. The original site puts the login form straight on `/`.
#[component]
pub fn Home() -> Element {
    rsx! {
        Login {}
    }
}
