//! Hydra Playground - browser dApp
//!
//! Connects a Polkadot wallet extension and funds an ink! contract that
//! forwards tokens from Pop to Hydration over XCM.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

mod app;
mod components;
mod pages;
mod services;
mod state;
mod utils;

use app::App;
use utils::constants::LOADING_ELEMENT_ID;

#[wasm_bindgen(start)]
pub fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Library crates log through `tracing`'s log feature, which lands here
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Hydra Playground starting");

    hide_loading_screen();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

/// Hide the static loading screen from index.html
fn hide_loading_screen() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::error!("No document available");
        return;
    };

    let Some(loading_element) = document.get_element_by_id(LOADING_ELEMENT_ID) else {
        log::debug!("Loading element not found");
        return;
    };

    if let Some(html_element) = loading_element.dyn_ref::<HtmlElement>() {
        if let Err(e) = html_element.class_list().add_1("hidden") {
            log::warn!("Failed to hide loading screen: {:?}", e);
        }
    }
    loading_element.set_attribute("style", "display: none !important;").ok();
}
