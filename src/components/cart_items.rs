use dioxus::prelude::*;

use crate::api::Product;
use crate::cart::use_cart;
use crate::time;
use crate::Route;

/// Simulated load time for the cart page. Not tied to any real work; the
/// cart is already in memory.
const LOAD_DELAY_MS: u64 = 1_000;

/// Cart route: read-only view of everything added so far.
#[component]
pub fn CartItems() -> Element {
    let cart = use_cart();
    let mut ready = use_signal(|| false);

    use_future(move || async move {
        time::sleep(LOAD_DELAY_MS).await;
        ready.set(true);
    });

    let body = if !ready() {
        rsx! {
            p { "Loading cart items..." }
        }
    } else if cart.count() == 0 {
        rsx! {
            p { "Your cart is empty." }
        }
    } else {
        rsx! {
            CartList { products: cart.products() }
        }
    };

    rsx! {
        div { class: "p-4",
            div { class: "flex justify-end",
                Link {
                    to: Route::Products {},
                    class: "bg-blue-600 text-white p-2 rounded",
                    "Go to Products"
                }
            }

            h1 { class: "text-2xl mb-4", "Cart Items" }

            {body}
        }
    }
}

/// One card per cart entry, in click order. Entries are unkeyed on
/// purpose: the same product may legitimately appear more than once.
#[component]
pub fn CartList(products: Vec<Product>) -> Element {
    rsx! {
        div { class: "grid grid-cols-1 md:grid-cols-3 gap-4",
            for product in products {
                div { class: "border p-4 rounded shadow-md",
                    img {
                        class: "w-full h-40 object-cover mb-4",
                        src: "{product.thumbnail}",
                        alt: "{product.title}",
                    }
                    h2 { class: "text-xl font-semibold", "{product.title}" }
                    p { class: "text-gray-500", "Price: ${product.price}" }
                    p { class: "text-sm", "{product.description}" }
                }
            }
        }
    }
}
