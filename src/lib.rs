#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod carousel;
pub mod contact;
pub mod portfolio;
pub mod state;
pub mod tab;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    // a second init (hot reload) is not worth panicking over
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(App);
}
