fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(storefront::App);
}
