//! Error types used by the crate.

use thiserror::Error;

/// Map service error type.
#[derive(Debug, Error)]
pub enum MapServiceError {
    /// The DOM element the map should be placed into does not exist.
    #[error("map container element `{0}` not found")]
    ContainerNotFound(String),
    /// The external mapping library (or a part of its API) is not loaded.
    #[error("mapping library is not available: {0}")]
    LibraryUnavailable(String),
    /// Error interacting with WASM runtime.
    #[error("wasm error: {0:?}")]
    Wasm(Option<String>),
    /// Map options could not be parsed.
    #[error("invalid map options")]
    Config(#[from] serde_json::Error),
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for MapServiceError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        MapServiceError::Wasm(Some(format!("{value:?}")))
    }
}

#[cfg(target_arch = "wasm32")]
impl From<serde_wasm_bindgen::Error> for MapServiceError {
    fn from(value: serde_wasm_bindgen::Error) -> Self {
        MapServiceError::Wasm(Some(value.to_string()))
    }
}

#[cfg(target_arch = "wasm32")]
impl From<MapServiceError> for wasm_bindgen::JsValue {
    fn from(value: MapServiceError) -> Self {
        js_sys::Error::new(&value.to_string()).into()
    }
}
