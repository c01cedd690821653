//! JavaScript bindings for [`map_service`].
//!
//! Build with `wasm-pack build map-service-web --target web` and use from the page:
//!
//! ```js
//! import init, { GoogleMapService } from "./pkg/map_service_web.js";
//!
//! await init();
//! const mapService = new GoogleMapService({ containerId: "google-map-main" });
//! mapService.initMap();
//! const map = mapService.getMap();
//! ```
//!
//! The Google Maps script must be loaded before `initMap()` is called.

#[cfg(target_arch = "wasm32")]
mod service;

#[cfg(target_arch = "wasm32")]
pub use service::GoogleMapService;
