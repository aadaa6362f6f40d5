//! End-to-end route assembly between geographic points
//!
//! Composes the projection and the polyline planner, and annotates both input
//! endpoints with their raster decompositions for display and debugging.

use crate::grid::{BlockAddress, GridSpec};
use crate::planner::{PlanOptions, Planner, RoutePlan, SegmentOrder};
use crate::projection::{DEFAULT_ZOOM, GeoPoint, Projection, WorldPoint};
use crate::slopes::SlopeSet;

/// Configuration for route assembly
///
/// An immutable value captured by the assembler at construction; there is no
/// process-wide state.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    /// Chunk edge length in pixels. Default: 4000
    pub chunk_modulus: u32,
    /// Tile edge length in pixels, a strict subdivision of chunks.
    /// Default: 1000
    pub tile_modulus: u32,
    /// Fixed raster zoom level. Default: 9
    pub zoom: u8,
    /// Allowed segment slopes. Default: the 9-entry reciprocal ladder
    /// (`1/5` through `5`); [`SlopeSet::fine`] selects the 19-entry variant
    pub slope_set: SlopeSet,
    /// Segment ordering policy. Default: auto-select by endpoint error
    pub order: SegmentOrder,
    /// Round endpoints to integer pixels before planning. Default: true
    pub round_to_int: bool,
}

impl Default for Config {
    fn default() -> Self {
        let grid = GridSpec::default();
        Self {
            chunk_modulus: grid.chunk_modulus,
            tile_modulus: grid.tile_modulus,
            zoom: DEFAULT_ZOOM,
            slope_set: SlopeSet::standard(),
            order: SegmentOrder::default(),
            round_to_int: true,
        }
    }
}

/// A projected input endpoint with both raster decompositions
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Endpoint {
    pub geo: GeoPoint,
    pub world: WorldPoint,
    pub chunk: BlockAddress,
    pub tile: BlockAddress,
}

/// A route plan together with the projected inputs that produced it
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoRoutePlan {
    pub start: Endpoint,
    pub end: Endpoint,
    pub plan: RoutePlan,
}

/// Composes projection and planning into one call
#[derive(Debug, Clone)]
pub struct RouteAssembler {
    config: Config,
    projection: Projection,
    grid: GridSpec,
    planner: Planner,
}

impl RouteAssembler {
    pub fn new(config: Config) -> Self {
        let projection = Projection::new(config.chunk_modulus, config.zoom);
        let grid = GridSpec::new(config.chunk_modulus, config.tile_modulus);
        Self {
            config,
            projection,
            grid,
            planner: Planner::new(grid),
        }
    }

    #[inline]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[inline]
    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    /// Project a geographic point and annotate it with both decompositions
    pub fn endpoint(&self, geo: GeoPoint) -> Endpoint {
        let world = self.projection.to_world(geo);
        Endpoint {
            geo,
            world,
            chunk: self.grid.chunk_address(world),
            tile: self.grid.tile_address(world),
        }
    }

    /// Tile address of a geographic point (tile index plus pixel offset)
    pub fn tile_pixel(&self, geo: GeoPoint) -> BlockAddress {
        self.grid.tile_address(self.projection.to_world(geo))
    }

    /// Plan a slope-constrained route between two geographic points
    ///
    /// Adds no computation beyond projection + planning; the endpoint
    /// annotations are for display and debugging only.
    pub fn plan_between(&self, from: GeoPoint, to: GeoPoint) -> GeoRoutePlan {
        let start = self.endpoint(from);
        let end = self.endpoint(to);
        let plan = self.planner.plan(
            start.world,
            end.world,
            &self.config.slope_set,
            PlanOptions {
                order: self.config.order,
                round_to_int: self.config.round_to_int,
            },
        );
        GeoRoutePlan { start, end, plan }
    }

    /// Viewer URL for a world pixel, at the given viewer zoom
    pub fn viewer_url_for_world(&self, world: WorldPoint, zoom: u8) -> String {
        crate::viewer_url::viewer_url(self.projection.to_geo(world), zoom)
    }
}
