/// Errors that abort an outline trace.
///
/// Both variants signal resource exhaustion. The public entry points on
/// [`crate::OutlineGenerator`] turn them into an empty result and a logged
/// warning; the generic [`crate::trace_outlines`] hands them to the caller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TraceError {
    /// The dense edge mark array for the scan region could not be allocated.
    #[error("ran out of memory allocating {width}*{height} marks")]
    MarkAllocation { width: u32, height: u32 },

    /// A tile of a sparse raster could not be allocated.
    #[error("ran out of memory allocating tile ({tile_x}, {tile_y})")]
    TileAllocation { tile_x: i32, tile_y: i32 },
}
