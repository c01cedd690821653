use crate::config::{MapConfig, MapOptions};
use crate::error::MapServiceError;
use crate::factory::MapWidgetFactory;
use crate::viewport::{Viewport, ViewportClass};

/// Owns the handle to the map widget and creates it on demand.
///
/// There is no global instance. Create one provider per page (or per map) and pass it to everything
/// that needs the map.
pub struct MapHandleProvider<F: MapWidgetFactory, V: Viewport> {
    factory: F,
    viewport: V,
    options: MapOptions,
    current: Option<Initialized<F::Handle>>,
}

struct Initialized<H> {
    handle: H,
    config: MapConfig,
}

impl<F: MapWidgetFactory, V: Viewport> MapHandleProvider<F, V> {
    /// Creates a new provider with default [`MapOptions`]. The map is not created until
    /// [`MapHandleProvider::initialize`] is called.
    pub fn new(factory: F, viewport: V) -> Self {
        Self::with_options(factory, viewport, MapOptions::default())
    }

    /// Creates a new provider with the given options.
    pub fn with_options(factory: F, viewport: V, options: MapOptions) -> Self {
        Self {
            factory,
            viewport,
            options,
            current: None,
        }
    }

    /// Creates the map widget and stores the handle to it.
    ///
    /// The viewport is checked once here. If it is resized afterwards, the zoom level of the
    /// created map is not recalculated.
    ///
    /// Every call creates a new widget and replaces the previously stored handle. If creation
    /// fails, the error is returned and the stored handle (if any) is left as it was.
    pub fn initialize(&mut self) -> Result<(), MapServiceError> {
        let class = ViewportClass::detect(&self.viewport, self.options.breakpoint())?;
        let config = self.options.config_for(class);
        log::debug!("Viewport is {class:?}, map config: {config:?}");

        let container_id = self.options.container_id();
        let handle = self.factory.create(container_id, &config)?;
        log::info!("Map created in container `{container_id}`");

        if self.current.is_some() {
            log::warn!("Map was already initialized, replacing the previous map handle");
        }

        self.current = Some(Initialized { handle, config });

        Ok(())
    }

    /// Returns the handle to the map, or `None` if the map has not been initialized yet.
    pub fn handle(&self) -> Option<&F::Handle> {
        self.current.as_ref().map(|current| &current.handle)
    }

    /// Returns true if [`MapHandleProvider::initialize`] has succeeded at least once.
    pub fn is_initialized(&self) -> bool {
        self.current.is_some()
    }

    /// Configuration the current map was created with.
    pub fn config(&self) -> Option<&MapConfig> {
        self.current.as_ref().map(|current| &current.config)
    }

    /// Options of the provider.
    pub fn options(&self) -> &MapOptions {
        &self.options
    }

    /// Widget factory used by the provider.
    pub fn factory(&self) -> &F {
        &self.factory
    }

    /// Viewport used by the provider.
    pub fn viewport(&self) -> &V {
        &self.viewport
    }
}
