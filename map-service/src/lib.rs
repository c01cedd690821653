//! `map-service` keeps a single handle to a map widget that lives outside of Rust, usually a
//! `google.maps.Map` instance created in the browser.
//!
//! The widget is not created until [`MapHandleProvider::initialize`] is called. At that moment the
//! provider looks at the viewport once, chooses the initial zoom level for narrow or wide screens,
//! and asks a [`MapWidgetFactory`] to build the widget inside a DOM container. After that the handle
//! can be obtained with [`MapHandleProvider::handle`].
//!
//! ```
//! use map_service::{FixedViewport, MapConfig, MapHandleProvider, MapServiceError, MapWidgetFactory};
//!
//! struct EchoFactory;
//!
//! impl MapWidgetFactory for EchoFactory {
//!     type Handle = MapConfig;
//!
//!     fn create(&self, _container_id: &str, config: &MapConfig) -> Result<MapConfig, MapServiceError> {
//!         Ok(config.clone())
//!     }
//! }
//!
//! let mut provider = MapHandleProvider::new(EchoFactory, FixedViewport::new(400));
//! assert!(provider.handle().is_none());
//!
//! provider.initialize().unwrap();
//! assert_eq!(provider.handle().unwrap().zoom, 3);
//! ```
//!
//! The provider does not render anything by itself. Tiles, markers, events and everything else stay
//! with the external widget, which can be reached through the handle.
//!
//! On `wasm32` targets the [`platform::web`] module provides the browser implementations:
//! `WebViewport` evaluates `window.matchMedia` and `GoogleMapsFactory` calls the `google.maps.Map`
//! constructor.

#![warn(clippy::unwrap_used)]
#![warn(missing_docs)]

pub mod config;
pub mod error;
mod factory;
pub mod geo;
pub mod platform;
mod provider;
pub mod viewport;

pub use config::{ControlPosition, MapConfig, MapOptions, MapTypeControlOptions, MapTypeControlStyle};
pub use error::MapServiceError;
pub use factory::MapWidgetFactory;
pub use geo::{GeoPoint, GeoPoint2d};
pub use provider::MapHandleProvider;
pub use viewport::{FixedViewport, Viewport, ViewportClass};
