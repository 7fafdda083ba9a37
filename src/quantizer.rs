use image::RgbaImage;

/// Per-channel level count used to approximate `target_color_count` total
/// colors: the cube root of the request, rounded, never below 2.
///
/// The achieved distinct-color ceiling is `levels^3`, which can over- or
/// undershoot the request; the uniform grid trades exactness for stable,
/// predictable snapping. The floor of 2 also keeps the step divisor nonzero
/// for requests below 8, where the cube root rounds to 1.
pub fn quantization_levels(target_color_count: u32) -> u32 {
    ((target_color_count as f64).cbrt().round() as u32).max(2)
}

/// Snap every R, G and B channel to a uniform grid of
/// [`quantization_levels`] values spanning 0..=255. Alpha is untouched.
///
/// Quantizing an already-quantized buffer at the same level count returns
/// it unchanged.
pub fn quantize(buf: &RgbaImage, target_color_count: u32) -> RgbaImage {
    let levels = quantization_levels(target_color_count);
    let step = 255.0 / (levels - 1) as f32;

    let mut out = buf.clone();
    for pixel in out.pixels_mut() {
        for channel in 0..3 {
            let snapped = (pixel[channel] as f32 / step).round() * step;
            pixel[channel] = snapped.round().clamp(0.0, 255.0) as u8;
        }
    }
    out
}
