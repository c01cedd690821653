//! Browser implementations for WASM32 (web) targets backed by the Google Maps JavaScript API.

use js_sys::Reflect;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, Window};

use crate::config::MapConfig;
use crate::error::MapServiceError;
use crate::factory::MapWidgetFactory;
use crate::viewport::Viewport;

#[wasm_bindgen]
extern "C" {
    /// Instance of `google.maps.Map`.
    #[wasm_bindgen(js_namespace = ["google", "maps"], js_name = Map)]
    #[derive(Debug, Clone)]
    pub type GoogleMap;

    #[wasm_bindgen(constructor, catch, js_namespace = ["google", "maps"], js_class = "Map")]
    fn new(container: &HtmlElement, options: &JsValue) -> Result<GoogleMap, JsValue>;

    /// Current zoom level of the map.
    #[wasm_bindgen(method, js_class = "Map", js_name = getZoom)]
    pub fn zoom(this: &GoogleMap) -> Option<f64>;

    /// DOM element the map was created in.
    #[wasm_bindgen(method, js_class = "Map", js_name = getDiv)]
    pub fn container(this: &GoogleMap) -> HtmlElement;
}

/// Viewport of the browser window, queried with `window.matchMedia`.
#[derive(Debug, Clone)]
pub struct WebViewport {
    window: Window,
}

impl WebViewport {
    /// Creates a viewport for the global `window`.
    pub fn new() -> Result<Self, MapServiceError> {
        let window = web_sys::window()
            .ok_or_else(|| MapServiceError::Wasm(Some("no global `window` exists".into())))?;
        Ok(Self { window })
    }
}

impl Viewport for WebViewport {
    fn matches_max_width(&self, max_width: u32) -> Result<bool, MapServiceError> {
        let query = format!("(max-width: {max_width}px)");
        let list = self.window.match_media(&query)?.ok_or_else(|| {
            MapServiceError::Wasm(Some(format!("matchMedia returned null for `{query}`")))
        })?;

        Ok(list.matches())
    }
}

/// Creates `google.maps.Map` widgets.
///
/// The Google Maps script must be loaded before [`MapWidgetFactory::create`] is called.
#[derive(Debug, Clone)]
pub struct GoogleMapsFactory {
    document: Document,
}

impl GoogleMapsFactory {
    /// Creates a factory working with the document of the global `window`.
    pub fn new() -> Result<Self, MapServiceError> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| MapServiceError::Wasm(Some("no document is available".into())))?;
        Ok(Self { document })
    }

    fn container(&self, container_id: &str) -> Result<HtmlElement, MapServiceError> {
        self.document
            .get_element_by_id(container_id)
            .ok_or_else(|| MapServiceError::ContainerNotFound(container_id.to_string()))?
            .dyn_into::<HtmlElement>()
            .map_err(|_| MapServiceError::ContainerNotFound(container_id.to_string()))
    }
}

impl MapWidgetFactory for GoogleMapsFactory {
    type Handle = GoogleMap;

    fn create(&self, container_id: &str, config: &MapConfig) -> Result<GoogleMap, MapServiceError> {
        let maps = maps_namespace()?;
        let container = self.container(container_id)?;
        let options = js_options(&maps, config)?;

        Ok(GoogleMap::new(&container, &options)?)
    }
}

fn maps_namespace() -> Result<JsValue, MapServiceError> {
    let google = Reflect::get(&js_sys::global(), &"google".into())?;
    if google.is_undefined() || google.is_null() {
        return Err(MapServiceError::LibraryUnavailable(
            "`google` is not defined".into(),
        ));
    }

    let maps = Reflect::get(&google, &"maps".into())?;
    if maps.is_undefined() || maps.is_null() {
        return Err(MapServiceError::LibraryUnavailable(
            "`google.maps` is not defined".into(),
        ));
    }

    let map_class = Reflect::get(&maps, &"Map".into())?;
    if !map_class.is_function() {
        return Err(MapServiceError::LibraryUnavailable(
            "`google.maps.Map` is not defined".into(),
        ));
    }

    Ok(maps)
}

fn maps_constant(maps: &JsValue, namespace: &str, key: &str) -> Result<JsValue, MapServiceError> {
    let values = Reflect::get(maps, &namespace.into())?;
    if values.is_undefined() {
        return Err(MapServiceError::LibraryUnavailable(format!(
            "`google.maps.{namespace}` is not defined"
        )));
    }

    let value = Reflect::get(&values, &key.into())?;
    if value.is_undefined() {
        return Err(MapServiceError::LibraryUnavailable(format!(
            "`google.maps.{namespace}.{key}` is not defined"
        )));
    }

    Ok(value)
}

/// Converts the config into a `MapOptions` JS object, replacing enum names with the values of
/// the corresponding `google.maps` constants.
fn js_options(maps: &JsValue, config: &MapConfig) -> Result<JsValue, MapServiceError> {
    let options = serde_wasm_bindgen::to_value(config)?;

    let control = &config.map_type_control_options;
    let style = maps_constant(maps, "MapTypeControlStyle", control.style.js_key())?;
    let position = maps_constant(maps, "ControlPosition", control.position.js_key())?;

    let control_options = Reflect::get(&options, &"mapTypeControlOptions".into())?;
    Reflect::set(&control_options, &"style".into(), &style)?;
    Reflect::set(&control_options, &"position".into(), &position)?;

    Ok(options)
}
