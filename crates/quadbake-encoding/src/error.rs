use std::fmt;

/// Configuration errors raised while deriving the encoding. None of these can
/// occur once an [`crate::EncodingFormat`] exists.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EncodingError {
    VertexStrideMismatch { format: usize, rasterizer: usize },
    QuadStrideMismatch { format: usize, rasterizer: usize },
    VertexTooSmall { stride: usize, required: usize },
    HeaderOverflow { bits: u32 },
}

impl fmt::Display for EncodingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodingError::VertexStrideMismatch { format, rasterizer } => write!(
                f,
                "quad vertex stride ({}) mismatched with rasterizer ({})",
                format, rasterizer
            ),
            EncodingError::QuadStrideMismatch { format, rasterizer } => write!(
                f,
                "quad stride ({}) mismatched with rasterizer ({})",
                format, rasterizer
            ),
            EncodingError::VertexTooSmall { stride, required } => write!(
                f,
                "vertex stride ({}) cannot hold the {} attribute words",
                stride, required
            ),
            EncodingError::HeaderOverflow { bits } => write!(
                f,
                "quad header encoding bit count ({}) exceeds integer bit length",
                bits
            ),
        }
    }
}

impl std::error::Error for EncodingError {}
