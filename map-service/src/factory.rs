use crate::config::MapConfig;
use crate::error::MapServiceError;

/// Constructs map widgets.
///
/// This is the seam to the external mapping library. In a browser it is implemented by
/// [`GoogleMapsFactory`](crate::platform::web::GoogleMapsFactory); tests substitute their own
/// implementations.
pub trait MapWidgetFactory {
    /// Handle to a constructed widget.
    type Handle;

    /// Creates a new widget inside the DOM element with the given id.
    fn create(&self, container_id: &str, config: &MapConfig)
        -> Result<Self::Handle, MapServiceError>;
}

impl<T: MapWidgetFactory + ?Sized> MapWidgetFactory for &T {
    type Handle = T::Handle;

    fn create(
        &self,
        container_id: &str,
        config: &MapConfig,
    ) -> Result<Self::Handle, MapServiceError> {
        (**self).create(container_id, config)
    }
}
