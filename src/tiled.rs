//! Sparse, default-valued raster storage.
//!
//! [`TiledRaster`] splits the plane into square tiles that are only
//! allocated once a pixel inside them is written. Reads of unwritten pixels
//! return the default value, so the memory cost follows the written area
//! rather than the addressable extent.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::error::TraceError;

/// Side length of a tile, in pixels.
pub const TILE_SIZE: i32 = 64;

const TILE_LEN: usize = (TILE_SIZE * TILE_SIZE) as usize;

/// A raster addressed by signed absolute coordinates, backed by lazily
/// allocated tiles.
#[derive(Debug, Clone)]
pub struct TiledRaster<T> {
    default: T,
    tiles: HashMap<(i32, i32), Box<[T]>>,
}

impl<T: Copy> TiledRaster<T> {
    /// Creates an empty raster where every pixel reads as `default`.
    pub fn new(default: T) -> Self {
        Self {
            default,
            tiles: HashMap::new(),
        }
    }

    pub fn default_value(&self) -> T {
        self.default
    }

    /// Number of tiles that have been allocated so far.
    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    /// Reads the pixel at `(x, y)`. Never allocates.
    pub fn get(&self, x: i32, y: i32) -> T {
        let (key, index) = locate(x, y);
        self.tiles
            .get(&key)
            .map_or(self.default, |tile| tile[index])
    }

    /// Writes the pixel at `(x, y)`, allocating its tile if needed.
    pub fn set(&mut self, x: i32, y: i32, value: T) -> Result<(), TraceError> {
        self.update(x, y, |_| value)
    }

    /// Replaces the pixel at `(x, y)` with `f(old)`.
    pub fn update(&mut self, x: i32, y: i32, f: impl FnOnce(T) -> T) -> Result<(), TraceError> {
        let (key, index) = locate(x, y);
        let tile = match self.tiles.entry(key) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(allocate_tile(self.default, key)?),
        };
        tile[index] = f(tile[index]);
        Ok(())
    }

    /// Drops every tile, resetting all pixels to the default value.
    pub fn clear(&mut self) {
        self.tiles.clear();
    }
}

/// Splits an absolute coordinate into a tile key and an index inside it.
#[inline]
fn locate(x: i32, y: i32) -> ((i32, i32), usize) {
    let key = (x.div_euclid(TILE_SIZE), y.div_euclid(TILE_SIZE));
    let lx = x.rem_euclid(TILE_SIZE) as usize;
    let ly = y.rem_euclid(TILE_SIZE) as usize;
    (key, ly * TILE_SIZE as usize + lx)
}

fn allocate_tile<T: Copy>(default: T, (tile_x, tile_y): (i32, i32)) -> Result<Box<[T]>, TraceError> {
    let mut data = Vec::new();
    data.try_reserve_exact(TILE_LEN)
        .map_err(|_| TraceError::TileAllocation { tile_x, tile_y })?;
    data.resize(TILE_LEN, default);
    Ok(data.into_boxed_slice())
}
