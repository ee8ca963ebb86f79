//! Pixel-exact outline extraction for rasterized regions.
//!
//! A region of pixels is split into background (opacity equal to a chosen
//! default value) and foreground. [`OutlineGenerator`] walks the boundary
//! between the two along pixel edges and returns closed polygons with
//! integer corner vertices, one vertex per change of direction. Outer
//! boundaries and hole boundaries are told apart by where their trace
//! starts; simple mode keeps only the outer ones.
//!
//! Pixels can come from a dense byte buffer ([`FlatBuffer`]) or from any
//! store that can be queried by absolute coordinate ([`RandomAccess`]),
//! including a sparse [`TiledRaster`] and [image] views. The remaining
//! modules turn outlines into [imageproc] contours, measure them, and
//! render them for debugging.

mod colors;
pub mod contours;
pub mod drawing;
mod edge;
mod error;
mod generator;
pub mod geometry;
mod marks;
mod outline;
pub mod rect;
mod source;
mod tiled;
mod tracer;

pub use edge::{Edge, corner};
pub use error::TraceError;
pub use generator::OutlineGenerator;
pub use marks::{DenseMarks, EdgeMarks, SparseMarks};
pub use outline::Outline;
pub use source::{
    AccessorSource, FlatBuffer, ImageAccessor, OPACITY_OPAQUE, OPACITY_TRANSPARENT, OpacityChannel,
    PixelFormat, PixelSource, RandomAccess, Region,
};
pub use tiled::{TILE_SIZE, TiledRaster};
pub use tracer::{TraceState, find_start_edge, is_outline_edge, next_state, trace_outlines};
