//! Pixel art conversion engine.
//!
//! Turns a decoded raster image into a reduced-resolution, reduced-palette
//! buffer through a deterministic pipeline: nearest-neighbor resampling,
//! linear contrast, uniform-grid color quantization, user-directed color
//! remapping, and palette extraction.
//!
//! The crate is UI-agnostic and keeps no ambient state: callers own the
//! source image, the parameter snapshots and the color mapping. [`Session`]
//! caches the resampled base buffer so that parameter changes rerun only the
//! transform stages, always from the same restart point.
//!
//! ```
//! use image::{Rgba, RgbaImage};
//! use pixelart_core::{PipelineParameters, Session};
//!
//! let source = RgbaImage::from_pixel(128, 128, Rgba([40, 80, 120, 255]));
//! let mut session = Session::new(source, 32, 32);
//!
//! let params = PipelineParameters {
//!     target_width: 32,
//!     target_height: 32,
//!     color_count: 8,
//!     ..Default::default()
//! };
//! let output = session.process(&params);
//! assert_eq!(output.buffer.dimensions(), (32, 32));
//! assert_eq!(output.palette.len(), 1);
//! ```

pub mod color;
pub mod contrast;
pub mod error;
pub mod palette;
pub mod pipeline;
pub mod project;
pub mod quantizer;
pub mod remapper;
pub mod resampler;

pub use color::{parse_hex, to_hex, ColorMapping, Rgb};
pub use contrast::apply_contrast;
pub use error::{PixelartError, Result};
pub use palette::{analyze, count_distinct, PaletteEntry};
pub use pipeline::{run, PipelineOutput, PipelineParameters, Session};
pub use project::{buffer_from_raw, Dimensions, ProjectParameters, ProjectPixel, ProjectSnapshot};
pub use quantizer::{quantization_levels, quantize};
pub use remapper::remap;
pub use resampler::{resample, resolve_target_size, SizeMode};
