pub mod overlay;
pub mod session;

#[cfg(test)]
mod tests;

use wasm_bindgen::prelude::*;

pub use session::GameSession;

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    #[cfg(feature = "browser_log")]
    let _ = console_log::init_with_level(log::Level::Debug);
}

/// Crate version, for the frontend's about box
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").into()
}
