//! The configured entry points for outline extraction.

use image::{GenericImageView, Pixel};

use crate::error::TraceError;
use crate::marks::{DenseMarks, SparseMarks};
use crate::outline::Outline;
use crate::source::{
    AccessorSource, FlatBuffer, ImageAccessor, OpacityChannel, PixelFormat, PixelSource,
    RandomAccess, Region,
};
use crate::tracer::trace_outlines;

/// Extracts pixel-edge outlines around every pixel whose opacity differs
/// from a background value.
///
/// Each call is self-contained: marks are allocated at the start and
/// released on return, and either every outline of the region is returned
/// or, if memory runs out, none is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutlineGenerator {
    default_opacity: u8,
    simple: bool,
}

impl OutlineGenerator {
    /// Pixels with opacity equal to `default_opacity` are background.
    pub fn new(default_opacity: u8) -> Self {
        Self {
            default_opacity,
            simple: false,
        }
    }

    pub fn default_opacity(&self) -> u8 {
        self.default_opacity
    }

    /// In simple mode only outer outlines are returned; hole outlines are
    /// dropped.
    pub fn set_simple_outline(&mut self, simple: bool) {
        self.simple = simple;
    }

    pub fn with_simple_outline(mut self, simple: bool) -> Self {
        self.simple = simple;
        self
    }

    pub fn simple_outline(&self) -> bool {
        self.simple
    }

    /// Traces a row-major buffer holding `region.width * region.height`
    /// pixels of the given format. Vertices are shifted by the region offset.
    ///
    /// Returns an empty list, after logging a warning, if the edge marks for
    /// the region cannot be allocated.
    ///
    /// # Panics
    ///
    /// Panics if `buffer` is too small for the region.
    pub fn outline_buffer(&self, buffer: &[u8], format: PixelFormat, region: Region) -> Vec<Outline> {
        recover(self.try_outline_buffer(buffer, format, region), region)
    }

    pub fn try_outline_buffer(
        &self,
        buffer: &[u8],
        format: PixelFormat,
        region: Region,
    ) -> Result<Vec<Outline>, TraceError> {
        let source = FlatBuffer::new(
            buffer,
            format,
            region.width,
            region.height,
            self.default_opacity,
        );
        self.try_outline_source(&source, region.x, region.y)
    }

    /// Traces `region` of a random access store, reading pixels at their
    /// absolute coordinates. Edge marks are kept sparse, so memory follows
    /// the length of the outlines rather than the area of the region.
    pub fn outline_accessor<A>(&self, accessor: &A, region: Region) -> Vec<Outline>
    where
        A: RandomAccess + ?Sized,
    {
        recover(self.try_outline_accessor(accessor, region), region)
    }

    pub fn try_outline_accessor<A>(&self, accessor: &A, region: Region) -> Result<Vec<Outline>, TraceError>
    where
        A: RandomAccess + ?Sized,
    {
        let source = AccessorSource::new(accessor, region, self.default_opacity);
        let mut marks = SparseMarks::new();
        trace_outlines(&source, &mut marks, region.x, region.y, self.simple)
    }

    /// Traces a whole image, reading opacity from `channel`.
    pub fn outline_image<I>(&self, image: &I, channel: OpacityChannel) -> Vec<Outline>
    where
        I: GenericImageView,
        I::Pixel: Pixel<Subpixel = u8>,
    {
        let (width, height) = image.dimensions();
        let accessor = ImageAccessor::new(image, channel);
        self.outline_accessor(&accessor, Region::from_size(width, height))
    }

    /// Traces any [`PixelSource`] with dense edge marks.
    pub fn outline_source<S>(&self, source: &S, x_offset: i32, y_offset: i32) -> Vec<Outline>
    where
        S: PixelSource + ?Sized,
    {
        let region = Region::new(x_offset, y_offset, source.width(), source.height());
        recover(self.try_outline_source(source, x_offset, y_offset), region)
    }

    pub fn try_outline_source<S>(
        &self,
        source: &S,
        x_offset: i32,
        y_offset: i32,
    ) -> Result<Vec<Outline>, TraceError>
    where
        S: PixelSource + ?Sized,
    {
        let mut marks = DenseMarks::new(source.width(), source.height())?;
        trace_outlines(source, &mut marks, x_offset, y_offset, self.simple)
    }
}

fn recover(result: Result<Vec<Outline>, TraceError>, region: Region) -> Vec<Outline> {
    result.unwrap_or_else(|err| {
        log::warn!(
            "OutlineGenerator: tracing {}*{} region at ({}, {}): {err}",
            region.width,
            region.height,
            region.x,
            region.y
        );
        Vec::new()
    })
}
