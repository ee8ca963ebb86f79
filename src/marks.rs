//! Per-pixel bookkeeping of edges that already belong to a traced outline.

use crate::edge::Edge;
use crate::error::TraceError;
use crate::tiled::TiledRaster;

/// Visited-edge state for the pixels of a scan region, keyed by local
/// coordinates. Marks are never cleared during a trace.
pub trait EdgeMarks {
    fn has_mark(&self, x: i32, y: i32, edge: Edge) -> bool;

    fn set_mark(&mut self, x: i32, y: i32, edge: Edge) -> Result<(), TraceError>;
}

/// One mark byte per pixel of the region, allocated up front.
#[derive(Debug, Clone)]
pub struct DenseMarks {
    width: usize,
    marks: Vec<u8>,
}

impl DenseMarks {
    /// Allocates cleared marks for a `width` x `height` region.
    ///
    /// Fails with [`TraceError::MarkAllocation`] instead of aborting when
    /// the allocation cannot be satisfied.
    pub fn new(width: u32, height: u32) -> Result<Self, TraceError> {
        let exhausted = TraceError::MarkAllocation { width, height };
        let len = (width as usize)
            .checked_mul(height as usize)
            .ok_or_else(|| exhausted.clone())?;

        let mut marks = Vec::new();
        marks.try_reserve_exact(len).map_err(|_| exhausted)?;
        marks.resize(len, 0);

        Ok(Self {
            width: width as usize,
            marks,
        })
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> usize {
        y as usize * self.width + x as usize
    }
}

impl EdgeMarks for DenseMarks {
    #[inline]
    fn has_mark(&self, x: i32, y: i32, edge: Edge) -> bool {
        self.marks[self.index(x, y)] & edge.bit() != 0
    }

    #[inline]
    fn set_mark(&mut self, x: i32, y: i32, edge: Edge) -> Result<(), TraceError> {
        let index = self.index(x, y);
        self.marks[index] |= edge.bit();
        Ok(())
    }
}

/// Marks stored in a [`TiledRaster`], so memory follows the traced boundary
/// instead of the region size.
#[derive(Debug, Clone)]
pub struct SparseMarks {
    marks: TiledRaster<u8>,
}

impl SparseMarks {
    pub fn new() -> Self {
        Self {
            marks: TiledRaster::new(0),
        }
    }

    /// Tiles allocated so far.
    pub fn tile_count(&self) -> usize {
        self.marks.tile_count()
    }
}

impl Default for SparseMarks {
    fn default() -> Self {
        Self::new()
    }
}

impl EdgeMarks for SparseMarks {
    #[inline]
    fn has_mark(&self, x: i32, y: i32, edge: Edge) -> bool {
        self.marks.get(x, y) & edge.bit() != 0
    }

    fn set_mark(&mut self, x: i32, y: i32, edge: Edge) -> Result<(), TraceError> {
        self.marks.update(x, y, |mark| mark | edge.bit())
    }
}
