//! Project snapshot shapes.
//!
//! A saved project is a JSON record produced by the editor's serializer:
//! image dimensions, a row-major 2D array of `{r, g, b, a}` pixel objects,
//! and a parameter block. This module owns the shape of that record, the
//! reconstruction of a pixel buffer from it, and the conversion between the
//! stored parameter block and live [`PipelineParameters`]. Framing,
//! versioning and file I/O stay with the caller.

use crate::color::ColorMapping;
use crate::error::{PixelartError, Result};
use crate::pipeline::PipelineParameters;
use crate::resampler::SizeMode;
use image::RgbaImage;
use serde::{Deserialize, Serialize};

// ============================================================================
// RECORD SHAPES
// ============================================================================

/// One stored pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectPixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// Resolved output dimensions at save time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

/// Parameter block as stored in a project file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectParameters {
    pub size_mode: SizeMode,
    pub size_value: u32,
    pub color_count: u32,
    /// Distinct colors in the base buffer at save time; bounds the editor's
    /// color-count control when the project is reopened.
    pub max_colors: u32,
    pub contrast: f32,
    pub dimensions: Dimensions,
    pub color_mapping: ColorMapping,
}

/// Complete project record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectSnapshot {
    pub width: u32,
    pub height: u32,
    /// Row-major: `pixels[y][x]`.
    pub pixels: Vec<Vec<ProjectPixel>>,
    pub parameters: ProjectParameters,
}

// ============================================================================
// CONVERSIONS
// ============================================================================

/// Build a buffer from flat RGBA bytes, validating the length invariant.
///
/// The only way malformed flat data can enter the crate; every pipeline
/// stage works on already-valid buffers.
pub fn buffer_from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<RgbaImage> {
    let expected = width as usize * height as usize * 4;
    let actual = data.len();
    // from_raw alone would accept oversized containers
    if actual != expected {
        return Err(PixelartError::BufferShape {
            width,
            height,
            expected,
            actual,
        });
    }
    RgbaImage::from_raw(width, height, data).ok_or(PixelartError::BufferShape {
        width,
        height,
        expected,
        actual,
    })
}

impl ProjectParameters {
    /// Pipeline parameters for this record's saved state.
    pub fn to_pipeline(&self) -> PipelineParameters {
        PipelineParameters {
            target_width: self.dimensions.width,
            target_height: self.dimensions.height,
            contrast: self.contrast,
            color_count: self.color_count,
            mapping: self.color_mapping.clone(),
        }
    }
}

impl ProjectSnapshot {
    /// Rebuild the pixel buffer from the stored 2D pixel array.
    ///
    /// Fails with `BufferShape` when the array does not match the declared
    /// dimensions (ragged rows, wrong row count); that indicates a
    /// corrupted or hand-edited record, not user input to tolerate.
    pub fn to_buffer(&self) -> Result<RgbaImage> {
        if self.width == 0 || self.height == 0 {
            return Err(PixelartError::InvalidParameter(format!(
                "Project dimensions must be at least 1x1, got {}x{}",
                self.width, self.height
            )));
        }

        let expected = self.width as usize * self.height as usize * 4;
        if self.pixels.len() != self.height as usize
            || self.pixels.iter().any(|row| row.len() != self.width as usize)
        {
            let actual: usize = self.pixels.iter().map(|row| row.len() * 4).sum();
            return Err(PixelartError::BufferShape {
                width: self.width,
                height: self.height,
                expected,
                actual,
            });
        }

        let mut data = Vec::with_capacity(expected);
        for row in &self.pixels {
            for pixel in row {
                data.extend_from_slice(&[pixel.r, pixel.g, pixel.b, pixel.a]);
            }
        }
        buffer_from_raw(self.width, self.height, data)
    }

    /// Capture a buffer and its parameters as a saveable record.
    pub fn from_buffer(buf: &RgbaImage, parameters: ProjectParameters) -> Self {
        let (width, height) = buf.dimensions();
        let pixels = (0..height)
            .map(|y| {
                (0..width)
                    .map(|x| {
                        let p = buf.get_pixel(x, y);
                        ProjectPixel {
                            r: p[0],
                            g: p[1],
                            b: p[2],
                            a: p[3],
                        }
                    })
                    .collect()
            })
            .collect();
        Self {
            width,
            height,
            pixels,
            parameters,
        }
    }
}
