//! Pipeline orchestration.
//!
//! Stages run in a fixed order on a cached base buffer:
//!
//! ```text
//! source -> resample -> base buffer -> contrast -> quantize -> remap -> analyze
//! ```
//!
//! Every parameter change restarts from the base buffer, never from a
//! previous run's output: re-quantizing an already-quantized buffer at a
//! different level count compounds rounding error, so the base buffer is the
//! only valid starting point. [`Session`] owns that two-tier buffer model;
//! [`run`] is the stage composition itself.

use crate::color::ColorMapping;
use crate::contrast::apply_contrast;
use crate::palette::{self, PaletteEntry};
use crate::quantizer::quantize;
use crate::remapper::remap;
use crate::resampler::resample;
use image::RgbaImage;
use serde::{Deserialize, Serialize};
use tracing::debug;

// ============================================================================
// PARAMETERS
// ============================================================================

/// Snapshot of the transform controls for one pipeline run.
///
/// Built fresh by the caller on every interaction and consumed once; the
/// pipeline never retains it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineParameters {
    pub target_width: u32,
    pub target_height: u32,
    /// Linear contrast factor; 1.0 leaves the image unchanged.
    pub contrast: f32,
    /// Requested number of output colors, approximated by a uniform
    /// per-channel grid (see [`crate::quantizer`]).
    pub color_count: u32,
    pub mapping: ColorMapping,
}

impl Default for PipelineParameters {
    fn default() -> Self {
        Self {
            target_width: 64,
            target_height: 64,
            contrast: 1.0,
            color_count: 16,
            mapping: ColorMapping::new(),
        }
    }
}

/// Final buffer plus its palette statistics.
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    pub buffer: RgbaImage,
    /// Frequency-sorted distinct colors of `buffer`.
    pub palette: Vec<PaletteEntry>,
}

// ============================================================================
// STAGE COMPOSITION
// ============================================================================

/// Run the transform stages on a base buffer.
///
/// `target_width`/`target_height` in the parameters belong to the resampling
/// step that produced `base`; they are not reapplied here.
///
/// Stage skips:
/// - contrast at factor 1.0 (identity);
/// - quantization when the requested color count exceeds the colors actually
///   present (snapping could only disturb colors the request said to keep);
/// - remapping when the mapping has no entries.
///
/// Neither `base` nor the mapping is mutated, and identical inputs produce
/// bit-identical output.
pub fn run(base: &RgbaImage, params: &PipelineParameters) -> PipelineOutput {
    let working = if (params.contrast - 1.0).abs() > f32::EPSILON {
        apply_contrast(base, params.contrast)
    } else {
        base.clone()
    };

    let distinct = palette::count_distinct(&working);
    let working = if (params.color_count as usize) <= distinct {
        debug!(distinct, color_count = params.color_count, "quantizing");
        quantize(&working, params.color_count)
    } else {
        debug!(
            distinct,
            color_count = params.color_count,
            "quantization skipped"
        );
        working
    };

    let working = if params.mapping.is_empty() {
        working
    } else {
        remap(&working, &params.mapping)
    };

    let palette = palette::analyze(&working);
    PipelineOutput {
        buffer: working,
        palette,
    }
}

// ============================================================================
// SESSION
// ============================================================================

/// Owns a loaded source raster and its cached base buffer.
///
/// The base buffer is the resampled but otherwise untouched image. It is
/// re-derived only when a new image is loaded or the target size changes;
/// parameter tweaks (contrast, color count, remaps) rerun the transform
/// stages from the cached base without touching the source.
#[derive(Debug, Clone)]
pub struct Session {
    source: RgbaImage,
    base: RgbaImage,
    target: (u32, u32),
}

impl Session {
    /// Resample `source` to the target size and cache the result.
    pub fn new(source: RgbaImage, target_w: u32, target_h: u32) -> Self {
        let base = resample(&source, target_w, target_h);
        Self {
            source,
            base,
            target: (target_w, target_h),
        }
    }

    /// Replace the loaded image, keeping the current target size.
    pub fn load_image(&mut self, source: RgbaImage) {
        debug!(
            width = source.width(),
            height = source.height(),
            "loading image"
        );
        self.base = resample(&source, self.target.0, self.target.1);
        self.source = source;
    }

    /// Change the output size, re-deriving the base buffer from the source.
    /// A no-op when the size is unchanged.
    pub fn set_target_size(&mut self, target_w: u32, target_h: u32) {
        if (target_w, target_h) != self.target {
            self.target = (target_w, target_h);
            self.base = resample(&self.source, target_w, target_h);
        }
    }

    pub fn source(&self) -> &RgbaImage {
        &self.source
    }

    /// The resampled restart point for every transform run.
    pub fn base(&self) -> &RgbaImage {
        &self.base
    }

    pub fn target_size(&self) -> (u32, u32) {
        self.target
    }

    /// Run the pipeline for a parameter snapshot, re-resampling first if the
    /// snapshot's dimensions differ from the cached base.
    pub fn process(&mut self, params: &PipelineParameters) -> PipelineOutput {
        self.set_target_size(params.target_width, params.target_height);
        run(&self.base, params)
    }
}
