//! Viewer URL boundary
//!
//! The external map viewer addresses positions as
//! `https://<host>/?lat=<float>&lng=<float>&zoom=<int>`. This module produces
//! and parses that textual format; it is the only fallible surface of the
//! crate.

use crate::projection::GeoPoint;
use crate::{Result, RouteError};
use url::Url;

/// Host of the reference viewer
pub const DEFAULT_VIEWER_HOST: &str = "wplace.live";

/// Viewer zoom used for generated position links
pub const DEFAULT_LINK_ZOOM: u8 = 18;

/// Viewer URL for a geographic point on the reference host
pub fn viewer_url(geo: GeoPoint, zoom: u8) -> String {
    viewer_url_with_host(DEFAULT_VIEWER_HOST, geo, zoom)
}

/// Viewer URL for a geographic point on an arbitrary host
pub fn viewer_url_with_host(host: &str, geo: GeoPoint, zoom: u8) -> String {
    format!("https://{host}/?lat={}&lng={}&zoom={}", geo.lat, geo.lng, zoom)
}

/// Extract the geographic point from a viewer URL
///
/// Requires both `lat` and `lng` query parameters to be present and parse as
/// finite numbers; absence or non-finiteness is [`RouteError::MissingCoordinate`],
/// a malformed URL is [`RouteError::InvalidUrl`].
pub fn parse_viewer_url(input: &str) -> Result<GeoPoint> {
    let url = Url::parse(input)?;

    let mut lat: Option<f64> = None;
    let mut lng: Option<f64> = None;
    for (key, value) in url.query_pairs() {
        match key.as_ref() {
            "lat" => lat = value.parse().ok(),
            "lng" => lng = value.parse().ok(),
            _ => {}
        }
    }

    let lat = lat
        .filter(|v| v.is_finite())
        .ok_or(RouteError::MissingCoordinate("lat"))?;
    let lng = lng
        .filter(|v| v.is_finite())
        .ok_or(RouteError::MissingCoordinate("lng"))?;

    Ok(GeoPoint::new(lat, lng))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_and_parse_round_trip() {
        let url = viewer_url(GeoPoint::new(51.5074, -0.1278), DEFAULT_LINK_ZOOM);
        assert!(url.starts_with("https://wplace.live/?lat=51.5074&lng=-0.1278&zoom=18"));

        let geo = parse_viewer_url(&url).unwrap();
        assert_eq!(geo, GeoPoint::new(51.5074, -0.1278));
    }

    #[test]
    fn test_custom_host() {
        let url = viewer_url_with_host("viewer.example", GeoPoint::new(1.0, 2.0), 12);
        assert_eq!(url, "https://viewer.example/?lat=1&lng=2&zoom=12");
    }

    #[test]
    fn test_parse_accepts_extra_parameters_any_order() {
        let geo = parse_viewer_url("https://wplace.live/?zoom=11&lng=9.5&select=3&lat=-4.25").unwrap();
        assert_eq!(geo, GeoPoint::new(-4.25, 9.5));
    }

    #[test]
    fn test_parse_rejects_malformed_url() {
        assert!(matches!(
            parse_viewer_url("not a url"),
            Err(RouteError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_parse_rejects_missing_coordinate() {
        assert!(matches!(
            parse_viewer_url("https://wplace.live/?lat=10.0"),
            Err(RouteError::MissingCoordinate("lng"))
        ));
        assert!(matches!(
            parse_viewer_url("https://wplace.live/?lng=10.0&zoom=18"),
            Err(RouteError::MissingCoordinate("lat"))
        ));
    }

    #[test]
    fn test_parse_rejects_non_numeric_coordinate() {
        assert!(matches!(
            parse_viewer_url("https://wplace.live/?lat=abc&lng=1.0"),
            Err(RouteError::MissingCoordinate("lat"))
        ));
    }

    #[test]
    fn test_parse_rejects_non_finite_coordinate() {
        assert!(matches!(
            parse_viewer_url("https://wplace.live/?lat=inf&lng=1.0"),
            Err(RouteError::MissingCoordinate("lat"))
        ));
    }
}
