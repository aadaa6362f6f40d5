//! Decomposition of world pixels into block addresses
//!
//! The canvas is addressed at two granularities at once: chunks (large blocks)
//! and tiles (small blocks, a strict subdivision of chunks). Both are the same
//! floor-division / true-modulo decomposition under a different modulus.

use crate::WorldPoint;

/// Default chunk modulus of the reference canvas, in pixels
pub const DEFAULT_CHUNK_MODULUS: u32 = 4000;

/// Default tile modulus of the reference canvas, in pixels
pub const DEFAULT_TILE_MODULUS: u32 = 1000;

/// A world pixel expressed as block index plus local pixel offset
///
/// Block indices may be negative; local offsets are always in `[0, modulus)`
/// regardless of the sign of the source coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlockAddress {
    pub block_x: i64,
    pub block_y: i64,
    pub local_x: u32,
    pub local_y: u32,
}

/// Decompose a world pixel under the given modulus
///
/// Total for any finite coordinate as long as `modulus > 0`. Fractional
/// coordinates floor to the containing integer pixel of the block.
pub fn decompose(world: WorldPoint, modulus: u32) -> BlockAddress {
    debug_assert!(modulus > 0, "block modulus must be positive");
    let m = modulus as f64;
    // rem_euclid rounds up to exactly `m` for values just below a multiple
    // of it, which would escape [0, modulus)
    let local = |v: f64| (v.rem_euclid(m).floor() as u32).min(modulus - 1);
    BlockAddress {
        block_x: (world.x() / m).floor() as i64,
        block_y: (world.y() / m).floor() as i64,
        local_x: local(world.x()),
        local_y: local(world.y()),
    }
}

/// The two concurrent block granularities of a canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridSpec {
    /// Chunk edge length in pixels
    pub chunk_modulus: u32,
    /// Tile edge length in pixels
    pub tile_modulus: u32,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            chunk_modulus: DEFAULT_CHUNK_MODULUS,
            tile_modulus: DEFAULT_TILE_MODULUS,
        }
    }
}

impl GridSpec {
    pub fn new(chunk_modulus: u32, tile_modulus: u32) -> Self {
        Self {
            chunk_modulus,
            tile_modulus,
        }
    }

    /// Address of a world pixel under the chunk modulus
    #[inline]
    pub fn chunk_address(&self, world: WorldPoint) -> BlockAddress {
        decompose(world, self.chunk_modulus)
    }

    /// Address of a world pixel under the tile modulus
    #[inline]
    pub fn tile_address(&self, world: WorldPoint) -> BlockAddress {
        decompose(world, self.tile_modulus)
    }
}
