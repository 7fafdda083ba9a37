use image::{ImageBuffer, RgbaImage};
use serde::{Deserialize, Serialize};

/// How the editor's size control maps to output dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeMode {
    /// Fixed output width; height follows the source aspect ratio.
    Width,
    /// Fixed output height; width follows the source aspect ratio.
    Height,
    /// Percentage of the source dimensions.
    Scale,
}

/// Resolve output dimensions for a size control setting.
///
/// Both axes are clamped to at least 1, so extreme settings (tiny sources,
/// near-zero scale, aspect rounding) can never request an empty buffer.
pub fn resolve_target_size(src_w: u32, src_h: u32, mode: SizeMode, value: u32) -> (u32, u32) {
    let (w, h) = match mode {
        SizeMode::Width => {
            let h = (value as f32 * src_h as f32 / src_w as f32).round() as u32;
            (value, h)
        }
        SizeMode::Height => {
            let w = (value as f32 * src_w as f32 / src_h as f32).round() as u32;
            (w, value)
        }
        SizeMode::Scale => (
            (src_w as f32 * value as f32 / 100.0).round() as u32,
            (src_h as f32 * value as f32 / 100.0).round() as u32,
        ),
    };
    (w.max(1), h.max(1))
}

/// Resample to exactly `target_w` x `target_h` using nearest-neighbor
/// sampling.
///
/// Each output pixel copies a single source pixel with no interpolation, so
/// hard edges survive the size change. The same rule covers downscaling and
/// upscaling. Alpha travels with the sampled pixel. Target dimensions must
/// be at least 1; callers clamp via [`resolve_target_size`].
pub fn resample(source: &RgbaImage, target_w: u32, target_h: u32) -> RgbaImage {
    let (src_w, src_h) = source.dimensions();
    let scale_x = src_w as f32 / target_w as f32;
    let scale_y = src_h as f32 / target_h as f32;

    let mut out = ImageBuffer::new(target_w, target_h);
    for y in 0..target_h {
        let src_y = ((y as f32 * scale_y) as u32).min(src_h - 1);
        for x in 0..target_w {
            let src_x = ((x as f32 * scale_x) as u32).min(src_w - 1);
            out.put_pixel(x, y, *source.get_pixel(src_x, src_y));
        }
    }
    out
}
