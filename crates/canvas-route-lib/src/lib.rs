//! Canvas Route Library - Slope-Constrained Route Planning on a Pixel Canvas
//!
//! This library converts geographic coordinates into the fixed pixel raster of a
//! tile-based canvas and plans two-segment polylines between raster points whose
//! segments are restricted to a small set of allowed slopes (the drawing
//! constraint of the canvas).
//!
//! # Architecture
//!
//! - **[`Projection`]**: fixed-zoom Web Mercator projection between lat/lng and
//!   world pixel coordinates
//! - **[`GridSpec`]**: decomposition of world pixels into chunk and tile block
//!   addresses
//! - **[`SlopeSet`]**: the allowed slopes, with tightest-bracket selection for an
//!   arbitrary target slope
//! - **[`Planner`]**: the two-segment polyline planner over world pixels
//! - **[`RouteAssembler`]**: end-to-end planning between two geographic points
//!
//! All computation is pure and synchronous: configuration is an immutable value
//! threaded through every call, every produced entity is an immutable snapshot,
//! and concurrent planning calls need no synchronization.

mod assembler;
mod grid;
mod planner;
mod projection;
mod slopes;
pub mod viewer_url;

// Public API exports
pub use assembler::{Config, Endpoint, GeoRoutePlan, RouteAssembler};
pub use grid::{BlockAddress, DEFAULT_CHUNK_MODULUS, DEFAULT_TILE_MODULUS, GridSpec, decompose};
pub use planner::{PlanOptions, Planner, RoutePlan, SegmentOrder};
pub use projection::{DEFAULT_ZOOM, GeoPoint, MAX_LATITUDE, Projection, WorldPoint};
pub use slopes::{SLOPE_MATCH_EPSILON, SlopeSet};

/// Error types for the planning crate
///
/// The taxonomy is narrow by design: all numeric computation is total (out of
/// range slopes are clamped, infeasible splits are clamped, degenerate
/// geometry produces a valid plan), so only the textual boundaries can fail.
#[derive(Debug, thiserror::Error)]
pub enum RouteError {
    #[error("invalid viewer URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("viewer URL has no finite `{0}` coordinate")]
    MissingCoordinate(&'static str),

    #[error("invalid slope set: {0}")]
    InvalidSlopeSet(String),
}

pub type Result<T> = std::result::Result<T, RouteError>;
