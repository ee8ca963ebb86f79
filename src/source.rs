//! Pixel classification backends.
//!
//! The tracer only needs to know whether a pixel of the scan region is
//! background. Two families of storage provide that answer:
//!
//! - [`FlatBuffer`] reads a contiguous, caller-owned byte buffer laid out
//!   row by row with a fixed [`PixelFormat`].
//! - [`AccessorSource`] queries a positionable [`RandomAccess`] store by
//!   absolute coordinate, such as a sparse [`TiledRaster`] or any
//!   [`image::GenericImageView`] through [`ImageAccessor`].

use image::{GenericImageView, Pixel};

use crate::tiled::TiledRaster;

/// Opacity value of a fully opaque pixel.
pub const OPACITY_OPAQUE: u8 = u8::MAX;

/// Opacity value of a fully transparent pixel.
pub const OPACITY_TRANSPARENT: u8 = 0;

/// The rectangle being traced: its size and the offset that maps local
/// pixel coordinates into the caller's coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Region {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Region {
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// A region of the given size at the origin.
    pub fn from_size(width: u32, height: u32) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Same size, different offset.
    pub fn translated(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.width, self.height)
    }
}

/// Read-only classification of the pixels of a scan region.
///
/// Coordinates are local to the region. [`PixelSource::is_background`] is
/// only called for coordinates that pass [`PixelSource::in_bounds`].
pub trait PixelSource {
    fn width(&self) -> u32;

    fn height(&self) -> u32;

    /// Whether the in-bounds pixel at `(x, y)` carries the background value.
    fn is_background(&self, x: i32, y: i32) -> bool;

    #[inline]
    fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width() && (y as u32) < self.height()
    }
}

/// Byte layout of one pixel in a flat buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PixelFormat {
    /// Bytes per pixel.
    pub pixel_size: usize,
    /// Byte index of the opacity channel inside a pixel, if there is one.
    /// Formats without alpha report every pixel as fully opaque.
    pub alpha_offset: Option<usize>,
}

impl PixelFormat {
    pub const fn new(pixel_size: usize, alpha_offset: Option<usize>) -> Self {
        Self {
            pixel_size,
            alpha_offset,
        }
    }

    /// A single opacity byte per pixel, as used by selection masks.
    pub const fn alpha8() -> Self {
        Self::new(1, Some(0))
    }

    pub const fn gray8() -> Self {
        Self::new(1, None)
    }

    pub const fn gray_alpha8() -> Self {
        Self::new(2, Some(1))
    }

    pub const fn rgb8() -> Self {
        Self::new(3, None)
    }

    pub const fn rgba8() -> Self {
        Self::new(4, Some(3))
    }

    /// Extracts the opacity of a single pixel.
    #[inline]
    pub fn opacity(&self, pixel: &[u8]) -> u8 {
        match self.alpha_offset {
            Some(offset) => pixel[offset],
            None => OPACITY_OPAQUE,
        }
    }
}

/// A dense, row-major pixel buffer owned by the caller.
#[derive(Debug, Clone, Copy)]
pub struct FlatBuffer<'a> {
    data: &'a [u8],
    format: PixelFormat,
    width: u32,
    height: u32,
    default_opacity: u8,
}

impl<'a> FlatBuffer<'a> {
    /// Wraps `data` as a `width` x `height` raster.
    ///
    /// # Panics
    ///
    /// Panics if the format is inconsistent or `data` is shorter than
    /// `width * height * format.pixel_size` bytes. Both are caller bugs.
    pub fn new(
        data: &'a [u8],
        format: PixelFormat,
        width: u32,
        height: u32,
        default_opacity: u8,
    ) -> Self {
        assert!(format.pixel_size > 0, "pixel_size must be positive");
        if let Some(offset) = format.alpha_offset {
            assert!(
                offset < format.pixel_size,
                "alpha_offset {offset} lies outside a {}-byte pixel",
                format.pixel_size
            );
        }
        let required = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(format.pixel_size));
        assert!(
            required.is_some_and(|required| data.len() >= required),
            "buffer of {} bytes is too small for a {width}x{height} region of {}-byte pixels",
            data.len(),
            format.pixel_size
        );

        Self {
            data,
            format,
            width,
            height,
            default_opacity,
        }
    }

    pub fn format(&self) -> PixelFormat {
        self.format
    }

    /// Opacity of the in-bounds pixel at `(x, y)`.
    #[inline]
    pub fn opacity(&self, x: i32, y: i32) -> u8 {
        let start = (y as usize * self.width as usize + x as usize) * self.format.pixel_size;
        self.format
            .opacity(&self.data[start..start + self.format.pixel_size])
    }
}

impl PixelSource for FlatBuffer<'_> {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn is_background(&self, x: i32, y: i32) -> bool {
        self.opacity(x, y) == self.default_opacity
    }
}

/// A pixel store that can be queried at arbitrary absolute coordinates.
///
/// Implementations need not be backed by contiguous memory and may cover an
/// area far larger than any scan region.
pub trait RandomAccess {
    /// Opacity of the pixel at absolute `(x, y)`.
    fn opacity_at(&self, x: i32, y: i32) -> u8;
}

impl RandomAccess for TiledRaster<u8> {
    #[inline]
    fn opacity_at(&self, x: i32, y: i32) -> u8 {
        self.get(x, y)
    }
}

/// Which channel of an [`image`] pixel is read as opacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OpacityChannel {
    /// The alpha channel; pixels without alpha are fully opaque.
    #[default]
    Alpha,
    /// The luma of the pixel, for grayscale masks.
    Luma,
}

/// Adapts an [`image::GenericImageView`] with `u8` subpixels to
/// [`RandomAccess`]. Coordinates outside the image read as `outside`.
#[derive(Debug, Clone, Copy)]
pub struct ImageAccessor<'a, I> {
    image: &'a I,
    channel: OpacityChannel,
    outside: u8,
}

impl<'a, I> ImageAccessor<'a, I>
where
    I: GenericImageView,
    I::Pixel: Pixel<Subpixel = u8>,
{
    pub fn new(image: &'a I, channel: OpacityChannel) -> Self {
        Self {
            image,
            channel,
            outside: OPACITY_TRANSPARENT,
        }
    }

    /// Reads the alpha channel of `image`.
    pub fn alpha(image: &'a I) -> Self {
        Self::new(image, OpacityChannel::Alpha)
    }

    /// Reads the luma of `image`, treating it as a mask.
    pub fn luma(image: &'a I) -> Self {
        Self::new(image, OpacityChannel::Luma)
    }

    /// Sets the value reported for coordinates outside the image.
    pub fn with_outside(mut self, outside: u8) -> Self {
        self.outside = outside;
        self
    }
}

impl<I> RandomAccess for ImageAccessor<'_, I>
where
    I: GenericImageView,
    I::Pixel: Pixel<Subpixel = u8>,
{
    fn opacity_at(&self, x: i32, y: i32) -> u8 {
        if x < 0 || y < 0 || !self.image.in_bounds(x as u32, y as u32) {
            return self.outside;
        }
        let pixel = self.image.get_pixel(x as u32, y as u32);
        match self.channel {
            OpacityChannel::Alpha => pixel.to_luma_alpha().0[1],
            OpacityChannel::Luma => pixel.to_luma().0[0],
        }
    }
}

/// Classifies the pixels of a [`Region`] of a [`RandomAccess`] store.
///
/// Local coordinates are shifted by the region offset before lookup.
#[derive(Debug, Clone, Copy)]
pub struct AccessorSource<'a, A: ?Sized> {
    accessor: &'a A,
    region: Region,
    default_opacity: u8,
}

impl<'a, A: RandomAccess + ?Sized> AccessorSource<'a, A> {
    pub fn new(accessor: &'a A, region: Region, default_opacity: u8) -> Self {
        Self {
            accessor,
            region,
            default_opacity,
        }
    }

    pub fn region(&self) -> Region {
        self.region
    }
}

impl<A: RandomAccess + ?Sized> PixelSource for AccessorSource<'_, A> {
    fn width(&self) -> u32 {
        self.region.width
    }

    fn height(&self) -> u32 {
        self.region.height
    }

    #[inline]
    fn is_background(&self, x: i32, y: i32) -> bool {
        self.accessor
            .opacity_at(x + self.region.x, y + self.region.y)
            == self.default_opacity
    }
}
