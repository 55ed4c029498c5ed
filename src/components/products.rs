use dioxus::prelude::*;

use crate::api::{self, ApiError, Product};
use crate::cart::use_cart;
use crate::Route;

/// Products shown per page. Pagination is purely client-side: the full
/// list is fetched once and re-sliced as the user pages through it.
pub const PAGE_SIZE: usize = 6;

pub fn total_pages(product_count: usize) -> usize {
    product_count.div_ceil(PAGE_SIZE)
}

/// The slice of `products` visible on 1-based `page`. Out-of-range pages
/// yield an empty slice rather than panicking.
pub fn page_slice(products: &[Product], page: usize) -> &[Product] {
    let start = page.saturating_sub(1) * PAGE_SIZE;
    let end = (start + PAGE_SIZE).min(products.len());
    products.get(start..end).unwrap_or_default()
}

/// Product listing route. Issues exactly one catalog fetch per mount; the
/// resource's pending/ok/err states drive what gets rendered, and the
/// fetch task is dropped with the view if the user navigates away.
#[component]
pub fn Products() -> Element {
    let products = use_resource(api::fetch_products);

    rsx! {
        div { class: "p-4",
            h1 { "Product Page Title" }
            {catalog_view(&products.read())}
        }
    }
}

/// One branch per catalog state: pending, failed, loaded.
pub fn catalog_view(state: &Option<Result<Vec<Product>, ApiError>>) -> Element {
    match state {
        None => rsx! {
            div { "Loading products..." }
        },
        Some(Err(err)) => rsx! {
            div { "Error: {err}" }
        },
        Some(Ok(all_products)) => rsx! {
            CartNav {}
            h1 { class: "text-2xl mb-4", "Products" }
            ProductGrid { products: all_products.clone() }
        },
    }
}

/// Shortcut to the cart view, labeled with the live entry count.
#[component]
fn CartNav() -> Element {
    let cart = use_cart();

    rsx! {
        div { class: "flex justify-end",
            Link {
                to: Route::CartItems {},
                class: "bg-blue-600 text-white p-2 rounded mb-4",
                "Cart Has {cart.count()} Items"
            }
        }
    }
}

/// The loaded listing: product cards for the current page and one
/// numbered button per page.
#[component]
pub fn ProductGrid(products: Vec<Product>) -> Element {
    let mut current_page = use_signal(|| 1_usize);

    rsx! {
        div { class: "grid grid-cols-1 sm:grid-cols-2 md:grid-cols-3 gap-4",
            for product in page_slice(&products, current_page()).iter().cloned() {
                ProductCard { key: "{product.id}", product }
            }
        }

        div { class: "pagination mt-6 flex justify-center",
            for page in 1..=total_pages(products.len()) {
                button {
                    class: if page == current_page() {
                        "py-2 px-4 mx-1 rounded bg-blue-500 text-white"
                    } else {
                        "py-2 px-4 mx-1 rounded bg-gray-200 text-black"
                    },
                    onclick: move |_| current_page.set(page),
                    "{page}"
                }
            }
        }
    }
}

#[component]
fn ProductCard(product: Product) -> Element {
    let mut cart = use_cart();
    let cart_entry = product.clone();

    rsx! {
        div { class: "border p-4 rounded shadow-md flex flex-col",
            img {
                class: "w-full h-40 object-cover mb-4",
                src: "{product.thumbnail}",
                alt: "{product.title}",
            }
            h2 { class: "text-xl font-semibold", "{product.title}" }
            p { class: "text-gray-500", "Price: ${product.price}" }
            p { class: "text-sm flex-grow", "{product.description}" }
            button {
                class: "mt-2 bg-green-600 text-white p-2 rounded",
                onclick: move |_| cart.add(cart_entry.clone()),
                "Add To Cart"
            }
        }
    }
}
