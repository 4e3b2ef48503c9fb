//! Bit-packed quad encoding: buffer layout, header codec, and the quad arena.
#![forbid(unsafe_code)]

pub mod buffer;
pub mod config;
pub mod error;
pub mod format;
pub mod geometry;
pub mod header;
pub mod layout;
pub mod vertex_format;

pub use buffer::QuadBuffer;
pub use config::EncodingConfig;
pub use error::EncodingError;
pub use format::EncodingFormat;
pub use geometry::GeometryFlags;
pub use header::{HeaderCodec, HeaderLayout};
pub use layout::{QuadLayout, RasterizerStrides};
pub use vertex_format::{VertexFormat, VertexFormatDesc};
