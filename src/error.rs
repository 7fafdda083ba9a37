use thiserror::Error;

#[derive(Error, Debug)]
pub enum PixelartError {
    #[error("Buffer shape mismatch: {width}x{height} needs {expected} bytes, got {actual}")]
    BufferShape {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

pub type Result<T> = std::result::Result<T, PixelartError>;
