//! Stateless helpers for components that render outside the session
//! (card overlays, previews).

use std::collections::BTreeMap;

use fabo_core::log;
use fabo_core::{counter_badges, ActiveLayers, ActiveLayersView};
use wasm_bindgen::prelude::*;

/// Parse a turn response without touching any session
#[wasm_bindgen]
pub fn parse_game_state(text: &str) -> Result<JsValue, String> {
    let state = fabo_core::parse_game_state(text).map_err(|e| e.to_string())?;
    serde_wasm_bindgen::to_value(&state).map_err(|e| format!("{:?}", e))
}

/// Counter badges for a card's `countersMap`
#[wasm_bindgen]
pub fn counters_overlay(counters_js: JsValue) -> JsValue {
    log::debug("counters_overlay", "Building counter badges");
    let counters: BTreeMap<String, i32> =
        serde_wasm_bindgen::from_value(counters_js).unwrap_or_default();
    serde_wasm_bindgen::to_value(&counter_badges(&counters)).unwrap_or(JsValue::NULL)
}

/// Split an `activeLayers` object into static and reorderable cards
#[wasm_bindgen]
pub fn active_layers_view(layers_js: JsValue) -> JsValue {
    let layers: Option<ActiveLayers> = serde_wasm_bindgen::from_value(layers_js).unwrap_or_default();
    serde_wasm_bindgen::to_value(&ActiveLayersView::from_layers(layers.as_ref()))
        .unwrap_or(JsValue::NULL)
}
