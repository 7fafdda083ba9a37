//! Palette extraction: the frequency table of distinct colors in a buffer.

use crate::color::{to_hex, Rgb};
use image::RgbaImage;
use serde::Serialize;
use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

/// One distinct color and how many pixels carry it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaletteEntry {
    /// Canonical lowercase `#rrggbb` form.
    pub color: String,
    pub count: usize,
}

/// Count pixels per distinct (R, G, B) color in one row-major scan and sort
/// by count descending.
///
/// Equal counts keep first-seen scan order: counts accumulate into a vector
/// in discovery order and the sort is stable, so the palette for a given
/// buffer is fully reproducible. Alpha is ignored for color identity.
pub fn analyze(buf: &RgbaImage) -> Vec<PaletteEntry> {
    let mut slots: HashMap<Rgb, usize> = HashMap::new();
    let mut counts: Vec<(Rgb, usize)> = Vec::new();

    for pixel in buf.pixels() {
        let key = (pixel[0], pixel[1], pixel[2]);
        match slots.entry(key) {
            Entry::Occupied(slot) => counts[*slot.get()].1 += 1,
            Entry::Vacant(slot) => {
                slot.insert(counts.len());
                counts.push((key, 1));
            }
        }
    }

    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
        .into_iter()
        .map(|(rgb, count)| PaletteEntry {
            color: to_hex(rgb),
            count,
        })
        .collect()
}

/// Number of distinct (R, G, B) triples in the buffer, ignoring alpha.
///
/// Bounds the useful range of the color-count control and tells the
/// orchestrator when quantization would be pointless.
pub fn count_distinct(buf: &RgbaImage) -> usize {
    let mut seen: HashSet<Rgb> = HashSet::new();
    for pixel in buf.pixels() {
        seen.insert((pixel[0], pixel[1], pixel[2]));
    }
    seen.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgba, RgbaImage};

    #[test]
    fn test_counts_sum_to_pixel_count() {
        let src = ImageBuffer::from_fn(9, 7, |x, y| {
            Rgba([(x % 3) as u8 * 80, (y % 2) as u8 * 120, 0, 255])
        });
        let palette = analyze(&src);
        let total: usize = palette.iter().map(|e| e.count).sum();
        assert_eq!(total, 9 * 7);
    }

    #[test]
    fn test_sorted_by_count_descending() {
        let mut src = RgbaImage::new(3, 1);
        src.put_pixel(0, 0, Rgba([1, 1, 1, 255]));
        src.put_pixel(1, 0, Rgba([2, 2, 2, 255]));
        src.put_pixel(2, 0, Rgba([2, 2, 2, 255]));
        let palette = analyze(&src);
        assert_eq!(palette[0].color, "#020202");
        assert_eq!(palette[0].count, 2);
        assert_eq!(palette[1].color, "#010101");
        assert_eq!(palette[1].count, 1);
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        // Scan order: white, black, white, black (equal counts)
        let mut src = RgbaImage::new(2, 2);
        src.put_pixel(0, 0, Rgba([255, 255, 255, 255]));
        src.put_pixel(1, 0, Rgba([0, 0, 0, 255]));
        src.put_pixel(0, 1, Rgba([255, 255, 255, 255]));
        src.put_pixel(1, 1, Rgba([0, 0, 0, 255]));
        let palette = analyze(&src);
        assert_eq!(palette[0].color, "#ffffff");
        assert_eq!(palette[1].color, "#000000");
    }

    #[test]
    fn test_alpha_does_not_split_colors() {
        let mut src = RgbaImage::new(2, 1);
        src.put_pixel(0, 0, Rgba([5, 6, 7, 255]));
        src.put_pixel(1, 0, Rgba([5, 6, 7, 0]));
        let palette = analyze(&src);
        assert_eq!(palette.len(), 1);
        assert_eq!(palette[0].count, 2);
        assert_eq!(count_distinct(&src), 1);
    }

    #[test]
    fn test_count_distinct_matches_palette_len() {
        let src = ImageBuffer::from_fn(8, 8, |x, y| Rgba([(x * 30) as u8, (y * 30) as u8, 0, 255]));
        assert_eq!(count_distinct(&src), analyze(&src).len());
    }
}
