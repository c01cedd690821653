//! Geographic coordinates.

use serde::{Deserialize, Serialize};

/// Point on the surface of the Earth given in degrees.
pub trait GeoPoint {
    /// Latitude in degrees.
    fn lat(&self) -> f64;
    /// Longitude in degrees.
    fn lon(&self) -> f64;
}

/// 2d geographic point.
///
/// Serializes as `{"lat": .., "lng": ..}`, which is the `LatLngLiteral` shape expected by the
/// Google Maps API.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Deserialize, Serialize)]
pub struct GeoPoint2d {
    lat: f64,
    #[serde(rename = "lng", alias = "lon")]
    lon: f64,
}

impl GeoPoint2d {
    /// Creates a new point from latitude and longitude in degrees.
    pub const fn latlon(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

impl GeoPoint for GeoPoint2d {
    fn lat(&self) -> f64 {
        self.lat
    }

    fn lon(&self) -> f64 {
        self.lon
    }
}

/// Creates a new [`GeoPoint2d`] from latitude and longitude values (in degrees).
///
/// ```
/// use map_service::geo::GeoPoint;
/// use map_service::latlon;
///
/// let point = latlon!(-28.397, 132.644);
/// assert_eq!(point.lat(), -28.397);
/// ```
#[macro_export]
macro_rules! latlon {
    ($lat:expr, $lon:expr) => {
        $crate::geo::GeoPoint2d::latlon($lat, $lon)
    };
}
