//! Map options and the configuration passed to the map widget.

use serde::{Deserialize, Serialize};

use crate::error::MapServiceError;
use crate::geo::GeoPoint2d;
use crate::viewport::{ViewportClass, DEFAULT_BREAKPOINT};

/// Id of the DOM element the map is created in, if not set otherwise.
pub const DEFAULT_CONTAINER_ID: &str = "google-map-main";
/// Initial map center: the middle of Australia.
pub const DEFAULT_CENTER: GeoPoint2d = GeoPoint2d::latlon(-28.397, 132.644);
/// Initial zoom level for narrow viewports.
pub const DEFAULT_NARROW_ZOOM: u8 = 3;
/// Initial zoom level for wide viewports.
pub const DEFAULT_WIDE_ZOOM: u8 = 5;

/// Visual style of the map type control.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MapTypeControlStyle {
    /// Let the widget decide.
    Default,
    /// Row of buttons.
    HorizontalBar,
    /// Drop-down menu.
    #[default]
    DropdownMenu,
}

impl MapTypeControlStyle {
    /// Name of the constant in the `google.maps.MapTypeControlStyle` namespace.
    pub fn js_key(&self) -> &'static str {
        match self {
            Self::Default => "DEFAULT",
            Self::HorizontalBar => "HORIZONTAL_BAR",
            Self::DropdownMenu => "DROPDOWN_MENU",
        }
    }
}

/// Placement of a control on the map.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[allow(missing_docs)]
pub enum ControlPosition {
    TopLeft,
    TopCenter,
    #[default]
    TopRight,
    LeftTop,
    LeftCenter,
    LeftBottom,
    RightTop,
    RightCenter,
    RightBottom,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl ControlPosition {
    /// Name of the constant in the `google.maps.ControlPosition` namespace.
    pub fn js_key(&self) -> &'static str {
        match self {
            Self::TopLeft => "TOP_LEFT",
            Self::TopCenter => "TOP_CENTER",
            Self::TopRight => "TOP_RIGHT",
            Self::LeftTop => "LEFT_TOP",
            Self::LeftCenter => "LEFT_CENTER",
            Self::LeftBottom => "LEFT_BOTTOM",
            Self::RightTop => "RIGHT_TOP",
            Self::RightCenter => "RIGHT_CENTER",
            Self::RightBottom => "RIGHT_BOTTOM",
            Self::BottomLeft => "BOTTOM_LEFT",
            Self::BottomCenter => "BOTTOM_CENTER",
            Self::BottomRight => "BOTTOM_RIGHT",
        }
    }
}

/// Options of the map type control.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct MapTypeControlOptions {
    /// Control style.
    pub style: MapTypeControlStyle,
    /// Control position.
    pub position: ControlPosition,
}

/// Configuration the map widget is created with.
///
/// Computed once by [`MapOptions::config_for`] when the map is initialized.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapConfig {
    /// Initial center of the map.
    pub center: GeoPoint2d,
    /// Initial zoom level.
    pub zoom: u8,
    /// Map type control settings.
    pub map_type_control_options: MapTypeControlOptions,
}

/// Settings of the map service.
///
/// All fields are optional when deserializing; missing ones take the default values. Unknown
/// fields are rejected.
///
/// ```
/// use map_service::MapOptions;
///
/// let options = MapOptions::from_json(r#"{"containerId": "map", "wideZoom": 6}"#).unwrap();
/// assert_eq!(options.container_id(), "map");
/// assert_eq!(options.wide_zoom(), 6);
/// assert_eq!(options.narrow_zoom(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct MapOptions {
    container_id: String,
    center: GeoPoint2d,
    narrow_zoom: u8,
    wide_zoom: u8,
    breakpoint: u32,
    control_style: MapTypeControlStyle,
    control_position: ControlPosition,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            container_id: DEFAULT_CONTAINER_ID.to_string(),
            center: DEFAULT_CENTER,
            narrow_zoom: DEFAULT_NARROW_ZOOM,
            wide_zoom: DEFAULT_WIDE_ZOOM,
            breakpoint: DEFAULT_BREAKPOINT,
            control_style: MapTypeControlStyle::DropdownMenu,
            control_position: ControlPosition::TopRight,
        }
    }
}

impl MapOptions {
    /// Parses options from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, MapServiceError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Id of the DOM element to create the map in.
    pub fn container_id(&self) -> &str {
        &self.container_id
    }

    /// Initial map center.
    pub fn center(&self) -> GeoPoint2d {
        self.center
    }

    /// Zoom level used for narrow viewports.
    pub fn narrow_zoom(&self) -> u8 {
        self.narrow_zoom
    }

    /// Zoom level used for wide viewports.
    pub fn wide_zoom(&self) -> u8 {
        self.wide_zoom
    }

    /// Largest viewport width that is still considered narrow.
    pub fn breakpoint(&self) -> u32 {
        self.breakpoint
    }

    /// Sets the id of the DOM element to create the map in.
    pub fn with_container_id(mut self, container_id: impl Into<String>) -> Self {
        self.container_id = container_id.into();
        self
    }

    /// Sets the initial map center.
    pub fn with_center(mut self, center: GeoPoint2d) -> Self {
        self.center = center;
        self
    }

    /// Sets the zoom levels for narrow and wide viewports.
    pub fn with_zoom_levels(mut self, narrow: u8, wide: u8) -> Self {
        self.narrow_zoom = narrow;
        self.wide_zoom = wide;
        self
    }

    /// Sets the breakpoint width.
    pub fn with_breakpoint(mut self, breakpoint: u32) -> Self {
        self.breakpoint = breakpoint;
        self
    }

    /// Sets style and position of the map type control.
    pub fn with_map_type_control(
        mut self,
        style: MapTypeControlStyle,
        position: ControlPosition,
    ) -> Self {
        self.control_style = style;
        self.control_position = position;
        self
    }

    /// Zoom level for the given viewport class.
    pub fn zoom_for(&self, class: ViewportClass) -> u8 {
        match class {
            ViewportClass::Narrow => self.narrow_zoom,
            ViewportClass::Wide => self.wide_zoom,
        }
    }

    /// Builds the widget configuration for the given viewport class.
    pub fn config_for(&self, class: ViewportClass) -> MapConfig {
        MapConfig {
            center: self.center,
            zoom: self.zoom_for(class),
            map_type_control_options: MapTypeControlOptions {
                style: self.control_style,
                position: self.control_position,
            },
        }
    }
}
