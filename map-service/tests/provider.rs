use std::cell::RefCell;
use std::rc::Rc;

use assert_matches::assert_matches;
use map_service::geo::GeoPoint;
use map_service::{
    ControlPosition, FixedViewport, MapConfig, MapHandleProvider, MapOptions, MapServiceError,
    MapTypeControlStyle, MapWidgetFactory,
};

/// Widget created by the test factory.
#[derive(Debug)]
struct FakeMap {
    container_id: String,
    config: MapConfig,
}

/// Factory that remembers every widget it created and can be told which containers exist.
struct FakeMapsLibrary {
    containers: RefCell<Vec<String>>,
    created: RefCell<Vec<Rc<FakeMap>>>,
}

impl FakeMapsLibrary {
    fn with_containers(containers: &[&str]) -> Self {
        Self {
            containers: RefCell::new(containers.iter().map(|c| c.to_string()).collect()),
            created: RefCell::new(vec![]),
        }
    }

    fn remove_container(&self, container_id: &str) {
        self.containers.borrow_mut().retain(|c| c != container_id);
    }

    fn created_count(&self) -> usize {
        self.created.borrow().len()
    }
}

impl Default for FakeMapsLibrary {
    fn default() -> Self {
        Self::with_containers(&["google-map-main"])
    }
}

impl MapWidgetFactory for FakeMapsLibrary {
    type Handle = Rc<FakeMap>;

    fn create(
        &self,
        container_id: &str,
        config: &MapConfig,
    ) -> Result<Self::Handle, MapServiceError> {
        if !self.containers.borrow().iter().any(|c| c == container_id) {
            return Err(MapServiceError::ContainerNotFound(container_id.to_string()));
        }

        let map = Rc::new(FakeMap {
            container_id: container_id.to_string(),
            config: config.clone(),
        });
        self.created.borrow_mut().push(map.clone());

        Ok(map)
    }
}

/// Factory standing in for a page where the maps script has not been loaded.
struct MissingLibrary;

impl MapWidgetFactory for MissingLibrary {
    type Handle = ();

    fn create(&self, _container_id: &str, _config: &MapConfig) -> Result<(), MapServiceError> {
        Err(MapServiceError::LibraryUnavailable(
            "`google` is not defined".into(),
        ))
    }
}

fn initialized(width: u32) -> MapHandleProvider<FakeMapsLibrary, FixedViewport> {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut provider = MapHandleProvider::new(FakeMapsLibrary::default(), FixedViewport::new(width));
    provider.initialize().expect("failed to initialize map");
    provider
}

#[test]
fn narrow_viewport_gets_zoom_3() {
    let provider = initialized(400);
    let map = provider.handle().expect("map is not initialized");

    assert_eq!(map.config.zoom, 3);
}

#[test]
fn wide_viewport_gets_zoom_5() {
    let provider = initialized(800);
    let map = provider.handle().expect("map is not initialized");

    assert_eq!(map.config.zoom, 5);
}

#[test]
fn breakpoint_width_is_narrow() {
    assert_eq!(initialized(658).config().map(|c| c.zoom), Some(3));
    assert_eq!(initialized(659).config().map(|c| c.zoom), Some(5));
}

#[test]
fn handle_is_absent_before_initialization() {
    let provider = MapHandleProvider::new(FakeMapsLibrary::default(), FixedViewport::new(400));

    assert!(provider.handle().is_none());
    assert_eq!(provider.factory().created_count(), 0);
}

#[test]
fn center_does_not_depend_on_viewport() {
    for width in [1, 400, 658, 659, 800, 3840] {
        let provider = initialized(width);
        let map = provider.handle().expect("map is not initialized");

        assert_eq!(map.config.center.lat(), -28.397);
        assert_eq!(map.config.center.lon(), 132.644);
    }
}

#[test]
fn map_is_created_in_default_container_with_dropdown_control() {
    let provider = initialized(800);
    let map = provider.handle().expect("map is not initialized");

    assert_eq!(map.container_id, "google-map-main");
    assert_eq!(
        map.config.map_type_control_options.style,
        MapTypeControlStyle::DropdownMenu
    );
    assert_eq!(
        map.config.map_type_control_options.position,
        ControlPosition::TopRight
    );
}

#[test]
fn same_handle_is_returned_until_reinitialized() {
    let mut provider = initialized(800);

    let first = provider.handle().expect("map is not initialized").clone();
    let again = provider.handle().expect("map is not initialized");
    assert!(Rc::ptr_eq(&first, again));

    provider.initialize().expect("failed to initialize map");

    let second = provider.handle().expect("map is not initialized");
    assert!(!Rc::ptr_eq(&first, second));
    assert_eq!(provider.factory().created_count(), 2);
}

#[test]
fn old_handle_is_not_retrievable_after_reinitialization() {
    let mut provider = initialized(800);
    let first = provider.handle().expect("map is not initialized").clone();

    provider.initialize().expect("failed to initialize map");

    // One reference is held here, the other one by the factory's record of created maps.
    assert_eq!(Rc::strong_count(&first), 2);
    assert!(!Rc::ptr_eq(
        &first,
        provider.handle().expect("map is not initialized")
    ));
}

// The viewport is evaluated once, on initialization. Resizing does not reconfigure the existing
// map; only a new `initialize()` call picks up the new width.
#[test]
fn zoom_is_a_snapshot_of_the_viewport() {
    let mut provider = initialized(400);

    provider.viewport().set_width(1200);
    assert_eq!(provider.config().map(|c| c.zoom), Some(3));
    assert_eq!(provider.handle().map(|m| m.config.zoom), Some(3));

    provider.initialize().expect("failed to initialize map");
    assert_eq!(provider.config().map(|c| c.zoom), Some(5));
}

#[test]
fn missing_container_is_reported() {
    let mut provider = MapHandleProvider::new(
        FakeMapsLibrary::with_containers(&["other"]),
        FixedViewport::new(800),
    );

    assert_matches!(
        provider.initialize(),
        Err(MapServiceError::ContainerNotFound(id)) if id == "google-map-main"
    );
    assert!(provider.handle().is_none());
}

#[test]
fn missing_library_is_reported() {
    let mut provider = MapHandleProvider::new(MissingLibrary, FixedViewport::new(800));

    assert_matches!(
        provider.initialize(),
        Err(MapServiceError::LibraryUnavailable(_))
    );
    assert!(!provider.is_initialized());
}

#[test]
fn failed_reinitialization_keeps_previous_handle() {
    let mut provider = initialized(800);
    let first = provider.handle().expect("map is not initialized").clone();

    provider.factory().remove_container("google-map-main");
    assert_matches!(
        provider.initialize(),
        Err(MapServiceError::ContainerNotFound(_))
    );

    assert!(Rc::ptr_eq(
        &first,
        provider.handle().expect("map is not initialized")
    ));
    assert_eq!(provider.factory().created_count(), 1);
}

#[test]
fn factory_can_be_shared_between_providers() {
    let library = FakeMapsLibrary::with_containers(&["google-map-main", "overview"]);

    let mut main = MapHandleProvider::new(&library, FixedViewport::new(800));
    let mut overview = MapHandleProvider::with_options(
        &library,
        FixedViewport::new(800),
        MapOptions::default().with_container_id("overview"),
    );
    main.initialize().expect("failed to initialize map");
    overview.initialize().expect("failed to initialize map");

    assert_eq!(library.created_count(), 2);
    assert_eq!(
        overview.handle().map(|m| m.container_id.as_str()),
        Some("overview")
    );
    assert_eq!(
        main.handle().map(|m| m.container_id.as_str()),
        Some("google-map-main")
    );
}

#[test]
fn custom_options_are_used() {
    let options = MapOptions::from_json(
        r#"{"containerId": "map", "breakpoint": 1000, "narrowZoom": 7, "wideZoom": 9}"#,
    )
    .expect("invalid options");

    let mut provider = MapHandleProvider::with_options(
        FakeMapsLibrary::with_containers(&["map"]),
        FixedViewport::new(800),
        options,
    );
    provider.initialize().expect("failed to initialize map");

    let map = provider.handle().expect("map is not initialized");
    assert_eq!(map.container_id, "map");
    assert_eq!(map.config.zoom, 7);
}
