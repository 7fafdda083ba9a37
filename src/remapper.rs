use crate::color::ColorMapping;
use image::RgbaImage;

/// Apply an exact-color substitution table.
///
/// Pixels whose (R, G, B) matches a resolved mapping entry take that entry's
/// target color; all other pixels pass through. Alpha is untouched either
/// way. Each pixel is looked up exactly once, so chained entries (a -> b,
/// b -> c) do not cascade within a single pass.
///
/// An empty mapping, or one whose entries all fail to parse, is the
/// identity.
pub fn remap(buf: &RgbaImage, mapping: &ColorMapping) -> RgbaImage {
    let table = mapping.resolve();
    let mut out = buf.clone();
    if table.is_empty() {
        return out;
    }
    for pixel in out.pixels_mut() {
        if let Some(&(r, g, b)) = table.get(&(pixel[0], pixel[1], pixel[2])) {
            pixel[0] = r;
            pixel[1] = g;
            pixel[2] = b;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgba};

    #[test]
    fn test_empty_mapping_is_identity() {
        let src = ImageBuffer::from_fn(4, 4, |x, y| Rgba([(x * 60) as u8, (y * 60) as u8, 5, 255]));
        let out = remap(&src, &ColorMapping::new());
        assert_eq!(out.as_raw(), src.as_raw());
    }

    #[test]
    fn test_full_substitution_preserves_count() {
        let src = ImageBuffer::from_pixel(5, 3, Rgba([1, 2, 3, 255]));
        let mut mapping = ColorMapping::new();
        mapping.set("#010203", "#0a0b0c");
        let out = remap(&src, &mapping);
        assert!(out.pixels().all(|p| p.0 == [10, 11, 12, 255]));
        assert_eq!(out.pixels().count(), 15);
    }

    #[test]
    fn test_unmatched_colors_pass_through() {
        let mut src = RgbaImage::new(2, 1);
        src.put_pixel(0, 0, Rgba([0, 0, 0, 255]));
        src.put_pixel(1, 0, Rgba([9, 9, 9, 255]));
        let mut mapping = ColorMapping::new();
        mapping.set("#000000", "#ff0000");
        let out = remap(&src, &mapping);
        assert_eq!(out.get_pixel(0, 0).0, [255, 0, 0, 255]);
        assert_eq!(out.get_pixel(1, 0).0, [9, 9, 9, 255]);
    }

    #[test]
    fn test_entries_do_not_cascade() {
        let src = ImageBuffer::from_pixel(1, 1, Rgba([0, 0, 0, 255]));
        let mut mapping = ColorMapping::new();
        mapping.set("#000000", "#111111");
        mapping.set("#111111", "#222222");
        let out = remap(&src, &mapping);
        assert_eq!(out.get_pixel(0, 0).0, [17, 17, 17, 255]);
    }

    #[test]
    fn test_malformed_target_is_skipped() {
        let src = ImageBuffer::from_pixel(2, 2, Rgba([0, 0, 0, 255]));
        let mut mapping = ColorMapping::new();
        mapping.set("#000000", "definitely not hex");
        let out = remap(&src, &mapping);
        assert_eq!(out.as_raw(), src.as_raw());
    }

    #[test]
    fn test_lookup_ignores_alpha() {
        let mut src = RgbaImage::new(2, 1);
        src.put_pixel(0, 0, Rgba([0, 0, 0, 255]));
        src.put_pixel(1, 0, Rgba([0, 0, 0, 80]));
        let mut mapping = ColorMapping::new();
        mapping.set("#000000", "#ffffff");
        let out = remap(&src, &mapping);
        assert_eq!(out.get_pixel(0, 0).0, [255, 255, 255, 255]);
        assert_eq!(out.get_pixel(1, 0).0, [255, 255, 255, 80]);
    }
}
