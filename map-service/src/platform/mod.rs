//! Platform specific implementations of [`Viewport`](crate::Viewport) and
//! [`MapWidgetFactory`](crate::MapWidgetFactory).
//!
//! Outside of the browser there is no media query facility and no map widget to construct, so
//! native targets use [`FixedViewport`](crate::FixedViewport) and a caller provided factory.

#[cfg(target_arch = "wasm32")]
pub mod web;
