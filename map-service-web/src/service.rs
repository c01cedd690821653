use map_service::platform::web::{GoogleMap, GoogleMapsFactory, WebViewport};
use map_service::{MapHandleProvider, MapOptions};
use wasm_bindgen::prelude::*;

/// Owns the main map of the page.
///
/// Create one instance when the application starts and hand it to the code that needs the map.
#[wasm_bindgen]
pub struct GoogleMapService {
    provider: MapHandleProvider<GoogleMapsFactory, WebViewport>,
}

#[wasm_bindgen]
impl GoogleMapService {
    /// Creates a new service and initializes console logger.
    ///
    /// `options` is an optional object with the fields of [`MapOptions`], e.g.
    /// `{ containerId: "map", narrowZoom: 4 }`. The map itself is not created until
    /// [`GoogleMapService::init_map`] is called.
    #[wasm_bindgen(constructor)]
    pub fn new(options: JsValue) -> Result<GoogleMapService, JsValue> {
        init_logging();

        let options: MapOptions = if options.is_undefined() || options.is_null() {
            MapOptions::default()
        } else {
            serde_wasm_bindgen::from_value(options)?
        };
        log::debug!("Map service options: {options:?}");

        let provider = MapHandleProvider::with_options(
            GoogleMapsFactory::new()?,
            WebViewport::new()?,
            options,
        );

        Ok(Self { provider })
    }

    /// Creates the map in the container element. Calling it again replaces the map.
    #[wasm_bindgen(js_name = initMap)]
    pub fn init_map(&mut self) -> Result<(), JsValue> {
        self.provider.initialize().map_err(|err| {
            log::error!("Failed to initialize map: {err}");
            err.into()
        })
    }

    /// Returns the `google.maps.Map` instance, or `undefined` if `initMap()` was not called.
    #[wasm_bindgen(js_name = getMap)]
    pub fn get_map(&self) -> Option<GoogleMap> {
        self.provider.handle().cloned()
    }

    /// Whether the map has been created.
    #[wasm_bindgen(js_name = isInitialized)]
    pub fn is_initialized(&self) -> bool {
        self.provider.is_initialized()
    }
}

/// Debug builds log everything, including the computed map config; release builds log from `Info`.
fn log_level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}

fn init_logging() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log_level()).is_ok() {
        log::debug!("Logger is initialized");
    }
}
