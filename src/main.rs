use dioxus::prelude::*;

#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod carousel;
mod components;
mod decor;
mod error;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod playback;
mod settings;

use components::PageShell;

const PAGE_CSS: Asset = asset!("/assets/styling/page.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1",
        }
        document::Meta { name: "theme-color", content: "#0b0b12" }
        document::Stylesheet { href: PAGE_CSS }

        PageShell {}
    }
}
