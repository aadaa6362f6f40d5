//! Fixed-zoom Web Mercator projection between geographic and world pixel
//! coordinates
//!
//! The canvas addresses pixels in a single global raster whose total extent is
//! `chunk_size * 2^zoom` pixels per axis. The projection is the standard
//! spherical Mercator transform scaled to that raster.

use geo::Point;
use std::f64::consts::PI;

/// A world pixel coordinate in the global raster (real-valued)
pub type WorldPoint = Point<f64>;

/// Chunk edge length of the reference canvas, in pixels
pub const DEFAULT_CHUNK_SIZE: u32 = 4000;

/// Fixed raster zoom level of the reference canvas
pub const DEFAULT_ZOOM: u8 = 9;

/// Maximum latitude representable in Web Mercator
pub const MAX_LATITUDE: f64 = 85.05112878;

/// A geographic point in degrees
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    /// Latitude in degrees, strictly between -90 and 90
    pub lat: f64,
    /// Longitude in degrees
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Projection between geographic coordinates and the world pixel raster
///
/// Latitude at or beyond the poles is an unchecked precondition violation: the
/// Mercator log term diverges there. Callers must reject such input before
/// projecting; latitudes beyond [`MAX_LATITUDE`] are clamped with a warning so
/// the planner stays total on near-polar input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Projection {
    chunk_size: u32,
    zoom: u8,
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            zoom: DEFAULT_ZOOM,
        }
    }
}

impl Projection {
    pub fn new(chunk_size: u32, zoom: u8) -> Self {
        Self { chunk_size, zoom }
    }

    /// Total raster extent per axis, in pixels: `chunk_size * 2^zoom`
    #[inline]
    pub fn scale(&self) -> f64 {
        self.chunk_size as f64 * (1u64 << self.zoom) as f64
    }

    /// Project a geographic point onto the world pixel raster
    pub fn to_world(&self, geo: GeoPoint) -> WorldPoint {
        let lat = if geo.lat.abs() > MAX_LATITUDE {
            tracing::warn!(
                "Clamping latitude {} outside Web Mercator range to ±{}",
                geo.lat,
                MAX_LATITUDE
            );
            geo.lat.clamp(-MAX_LATITUDE, MAX_LATITUDE)
        } else {
            geo.lat
        };

        let scale = self.scale();
        let x = ((geo.lng + 180.0) / 360.0) * scale;
        let sin_lat = lat.to_radians().sin();
        let y = (0.5 - ((1.0 + sin_lat) / (1.0 - sin_lat)).ln() / (4.0 * PI)) * scale;

        Point::new(x, y)
    }

    /// Exact inverse of [`to_world`](Self::to_world)
    pub fn to_geo(&self, world: WorldPoint) -> GeoPoint {
        let scale = self.scale();
        let lng = (world.x() / scale) * 360.0 - 180.0;
        let n = PI - 2.0 * PI * (world.y() / scale);
        let lat = n.sinh().atan().to_degrees();
        GeoPoint::new(lat, lng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_world_origin() {
        let projection = Projection::default();
        let world = projection.to_world(GeoPoint::new(0.0, 0.0));
        // Equator/prime meridian sits at the raster center
        let half = projection.scale() / 2.0;
        assert!((world.x() - half).abs() < 1e-6);
        assert!((world.y() - half).abs() < 1e-6);
    }

    #[test]
    fn test_to_world_longitude_bounds() {
        let projection = Projection::default();
        let west = projection.to_world(GeoPoint::new(0.0, -180.0));
        assert!(west.x().abs() < 1e-6);

        let east = projection.to_world(GeoPoint::new(0.0, 180.0));
        assert!((east.x() - projection.scale()).abs() < 1e-6);
    }

    #[test]
    fn test_round_trip() {
        let projection = Projection::default();
        for &(lat, lng) in &[
            (51.5074, -0.1278),
            (-33.8688, 151.2093),
            (84.9, -179.9),
            (-84.9, 179.9),
            (0.0, 0.0),
        ] {
            let world = projection.to_world(GeoPoint::new(lat, lng));
            let geo = projection.to_geo(world);
            assert!((geo.lat - lat).abs() < 1e-6, "lat {lat} -> {}", geo.lat);
            assert!((geo.lng - lng).abs() < 1e-6, "lng {lng} -> {}", geo.lng);
        }
    }

    #[test]
    fn test_scale_follows_configuration() {
        assert_eq!(Projection::default().scale(), 4000.0 * 512.0);
        assert_eq!(Projection::new(1000, 9).scale(), 1000.0 * 512.0);
    }

    #[test]
    fn test_near_polar_latitude_is_clamped() {
        let projection = Projection::default();
        let clamped = projection.to_world(GeoPoint::new(89.0, 0.0));
        let limit = projection.to_world(GeoPoint::new(MAX_LATITUDE, 0.0));
        assert!((clamped.y() - limit.y()).abs() < 1e-9);
    }
}
