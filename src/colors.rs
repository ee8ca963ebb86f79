use image::Rgba;
use palette::{FromColor, Hsl, Srgb};

const SATURATION: f32 = 0.9;
const OUTER_LIGHTNESS: f32 = 0.5;
const HOLE_LIGHTNESS: f32 = 0.3;

/// Colour for outline `index` of `count`: hues are spread evenly around the
/// wheel, and holes get a darker shade of their hue.
pub(crate) fn outline_color(index: usize, count: usize, hole: bool, alpha: u8) -> Rgba<u8> {
    let hue = (index as f32 * 360.0) / count.max(1) as f32;
    let lightness = if hole { HOLE_LIGHTNESS } else { OUTER_LIGHTNESS };

    let hsl = Hsl::new(hue, SATURATION, lightness);
    let srgb: Srgb = Srgb::from_color(hsl);
    let srgb: Srgb<u8> = srgb.into_format();
    Rgba([srgb.red, srgb.green, srgb.blue, alpha])
}
