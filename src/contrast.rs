use image::RgbaImage;

/// Linear contrast around the channel midpoint:
/// `out = clamp(0, 255, round((in - 128) * factor + 128))` for R, G and B.
/// Alpha is untouched.
///
/// A factor of 1.0 is the identity; the orchestrator skips the call in that
/// case, but the transform is correct for it regardless. The factor is
/// caller-validated to be positive.
pub fn apply_contrast(buf: &RgbaImage, factor: f32) -> RgbaImage {
    let mut out = buf.clone();
    for pixel in out.pixels_mut() {
        for channel in 0..3 {
            let v = (pixel[channel] as f32 - 128.0) * factor + 128.0;
            pixel[channel] = v.round().clamp(0.0, 255.0) as u8;
        }
    }
    out
}
