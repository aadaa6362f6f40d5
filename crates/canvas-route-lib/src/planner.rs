//! Two-segment slope-constrained polyline planner
//!
//! Approximates an arbitrary straight-line movement between two world pixels
//! with at most two segments, each running along an allowed slope. The planner
//! picks the tightest slope bracket for the required direction, solves a
//! closed-form integer split of the horizontal displacement between the two
//! slopes, and keeps whichever segment ordering lands closest to the requested
//! endpoint.
//!
//! The planner is total: every finite input produces a valid plan. Rounding
//! error that cannot be reconstructed exactly is reported as residual error,
//! never corrected.

use crate::grid::{BlockAddress, GridSpec};
use crate::slopes::{SLOPE_MATCH_EPSILON, SlopeSet};
use crate::WorldPoint;
use geo::{Coord, Point};
use smallvec::{SmallVec, smallvec};

/// Which bracket slope to run first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SegmentOrder {
    /// Pick the ordering whose endpoint lands closest to the target;
    /// ties favor running the lower slope first
    #[default]
    Auto,
    /// Lower bracket slope first
    AFirst,
    /// Upper bracket slope first
    BFirst,
}

/// Planner options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlanOptions {
    pub order: SegmentOrder,
    /// Round endpoints to integer pixels before planning (the integer split
    /// below requires it); disable only for diagnostic use, where the
    /// fractional runs are reported rounded to the nearest whole step
    pub round_to_int: bool,
}

impl Default for PlanOptions {
    fn default() -> Self {
        Self {
            order: SegmentOrder::Auto,
            round_to_int: true,
        }
    }
}

/// An immutable planned route between two world pixels
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoutePlan {
    /// First polyline vertex
    pub start: WorldPoint,
    /// The single direction change, absent for the vertical degenerate case
    pub bend: Option<WorldPoint>,
    /// Last polyline vertex (best-effort reconstruction of the target)
    pub end: WorldPoint,
    /// Chosen slope bracket `(a, b)` with `a <= b`, absent when no slope
    /// decomposition applies (zero horizontal displacement)
    pub slopes: Option<(f64, f64)>,
    /// Horizontal steps along the lower slope
    pub run_a: u64,
    /// Horizontal steps along the upper slope
    pub run_b: u64,
    /// 2 or 3 world vertices of the planned polyline
    pub polyline_world: SmallVec<[WorldPoint; 3]>,
    /// Chunk address of every polyline vertex
    pub polyline_chunks: SmallVec<[BlockAddress; 3]>,
    /// Tile address of every polyline vertex
    pub polyline_tiles: SmallVec<[BlockAddress; 3]>,
    /// `end - original target end`, per axis; nonzero whenever rounding or an
    /// inexact bracket kept the reconstruction from being exact
    pub residual_error: Coord<f64>,
}

/// One candidate segment ordering
struct Candidate {
    bend: WorldPoint,
    end: WorldPoint,
}

/// The two-segment polyline planner
#[derive(Debug, Clone, Copy, Default)]
pub struct Planner {
    grid: GridSpec,
}

impl Planner {
    pub fn new(grid: GridSpec) -> Self {
        Self { grid }
    }

    /// Plan a route from `start` to `end` under the allowed slopes
    pub fn plan(
        &self,
        start: WorldPoint,
        end: WorldPoint,
        slopes: &SlopeSet,
        options: PlanOptions,
    ) -> RoutePlan {
        let (mut x0, y0) = if options.round_to_int {
            (start.x().round(), start.y().round())
        } else {
            (start.x(), start.y())
        };
        let (mut x1, y1) = if options.round_to_int {
            (end.x().round(), end.y().round())
        } else {
            (end.x(), end.y())
        };

        // Normalize orientation so the working displacement runs rightward.
        // The flip is undone on output coordinates only.
        let mut flipped = false;
        if x1 < x0 {
            x0 = -x0;
            x1 = -x1;
            flipped = true;
        }

        let dx = (x1 - x0).abs();
        let dy = (y1 - y0).abs();

        let unflip = |x: f64| if flipped { -x } else { x };

        if dx == 0.0 {
            // Purely vertical: no slope decomposition possible or needed
            let s = Point::new(unflip(x0), y0);
            let e = Point::new(unflip(x1), y1);
            return self.assemble(s, None, e, None, 0, 0, end);
        }

        let target_slope = dy / dx;
        let (a, b) = slopes.bracket(target_slope);
        tracing::debug!(target_slope, a, b, "selected slope bracket");

        // Closed form of `a*run_a + b*run_b ≈ dy`, `run_a + run_b = dx`,
        // rounded to the nearest integer split and clamped into bounds.
        let run_b = if (b - a).abs() < SLOPE_MATCH_EPSILON {
            0.0
        } else {
            ((dy - a * dx) / (b - a)).round().clamp(0.0, dx)
        };
        let run_a = dx - run_b;

        let sgn_y = if y1 >= y0 { 1.0 } else { -1.0 };
        let sgn_x = if flipped { -1.0 } else { 1.0 };
        let start_w = Point::new(unflip(x0), y0);

        let a_first = Candidate {
            bend: Point::new(start_w.x() + sgn_x * run_a, y0 + sgn_y * (a * run_a)),
            end: Point::new(
                start_w.x() + sgn_x * (run_a + run_b),
                y0 + sgn_y * (a * run_a + b * run_b),
            ),
        };
        let b_first = Candidate {
            bend: Point::new(start_w.x() + sgn_x * run_b, y0 + sgn_y * (b * run_b)),
            end: Point::new(
                start_w.x() + sgn_x * (run_a + run_b),
                y0 + sgn_y * (b * run_b + a * run_a),
            ),
        };

        let chosen = match options.order {
            SegmentOrder::AFirst => a_first,
            SegmentOrder::BFirst => b_first,
            SegmentOrder::Auto => {
                let err_a = endpoint_error(&a_first, end);
                let err_b = endpoint_error(&b_first, end);
                tracing::trace!(err_a, err_b, "auto ordering by endpoint error");
                if err_a <= err_b { a_first } else { b_first }
            }
        };

        self.assemble(
            start_w,
            Some(chosen.bend),
            chosen.end,
            Some((a, b)),
            run_a.round() as u64,
            run_b.round() as u64,
            end,
        )
    }

    /// Attach block annotations and residual error to the chosen vertices
    #[allow(clippy::too_many_arguments)]
    fn assemble(
        &self,
        start: WorldPoint,
        bend: Option<WorldPoint>,
        end: WorldPoint,
        slopes: Option<(f64, f64)>,
        run_a: u64,
        run_b: u64,
        target_end: WorldPoint,
    ) -> RoutePlan {
        let polyline_world: SmallVec<[WorldPoint; 3]> = match bend {
            Some(bend) => smallvec![start, bend, end],
            None => smallvec![start, end],
        };
        let polyline_chunks = polyline_world
            .iter()
            .map(|p| self.grid.chunk_address(*p))
            .collect();
        let polyline_tiles = polyline_world
            .iter()
            .map(|p| self.grid.tile_address(*p))
            .collect();

        RoutePlan {
            start,
            bend,
            end,
            slopes,
            run_a,
            run_b,
            polyline_world,
            polyline_chunks,
            polyline_tiles,
            residual_error: Coord {
                x: end.x() - target_end.x(),
                y: end.y() - target_end.y(),
            },
        }
    }
}

/// Euclidean distance from a candidate's endpoint to the original target
fn endpoint_error(candidate: &Candidate, target: WorldPoint) -> f64 {
    (candidate.end.x() - target.x()).hypot(candidate.end.y() - target.y())
}
