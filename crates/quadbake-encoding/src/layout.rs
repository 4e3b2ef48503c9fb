//! Word offsets and strides of a quad record inside a shared `u32` buffer.
//!
//! A record is `HEADER_STRIDE` header words followed by four vertices of
//! `vertex_stride` words each. Header layout is fixed; vertex stride comes
//! from the vertex format and is checked against the rasterizer once.

use crate::error::EncodingError;
use crate::vertex_format::{VANILLA_QUAD_STRIDE, VANILLA_VERTEX_STRIDE, VertexFormat};

pub const HEADER_BITS: usize = 0;
pub const HEADER_FACE_NORMAL: usize = 1;
pub const HEADER_COLOR_INDEX: usize = 2;
pub const HEADER_TAG: usize = 3;
pub const HEADER_STRIDE: usize = 4;

// Attribute offsets within a quad record, for vertex 0.
pub const VERTEX_X: usize = HEADER_STRIDE;
pub const VERTEX_Y: usize = HEADER_STRIDE + 1;
pub const VERTEX_Z: usize = HEADER_STRIDE + 2;
pub const VERTEX_COLOR: usize = HEADER_STRIDE + 3;
pub const VERTEX_U: usize = HEADER_STRIDE + 4;
pub const VERTEX_V: usize = VERTEX_U + 1;
pub const VERTEX_LIGHTMAP: usize = HEADER_STRIDE + 6;
pub const VERTEX_NORMAL: usize = HEADER_STRIDE + 7;

/// Words a vertex must span for the fixed attribute offsets above.
pub const VERTEX_ATTRIBUTE_WORDS: usize = VERTEX_NORMAL + 1 - HEADER_STRIDE;

pub const VERTICES_PER_QUAD: usize = 4;

/// Strides the rasterization path expects, independent of any vertex format.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct RasterizerStrides {
    pub vertex_stride: usize,
    pub quad_stride: usize,
}

impl RasterizerStrides {
    pub const VANILLA: RasterizerStrides = RasterizerStrides {
        vertex_stride: VANILLA_VERTEX_STRIDE,
        quad_stride: VANILLA_QUAD_STRIDE,
    };
}

impl Default for RasterizerStrides {
    fn default() -> Self {
        Self::VANILLA
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct QuadLayout {
    vertex_stride: usize,
    quad_stride: usize,
    quad_stride_bytes: usize,
    total_stride: usize,
    empty: Box<[u32]>,
}

impl QuadLayout {
    /// Derives all strides from `format` and checks them against `rasterizer`.
    pub fn new(
        format: &dyn VertexFormat,
        rasterizer: RasterizerStrides,
    ) -> Result<Self, EncodingError> {
        let vertex_stride = format.vertex_size_ints();
        if vertex_stride != rasterizer.vertex_stride {
            return Err(EncodingError::VertexStrideMismatch {
                format: vertex_stride,
                rasterizer: rasterizer.vertex_stride,
            });
        }
        if vertex_stride < VERTEX_ATTRIBUTE_WORDS {
            return Err(EncodingError::VertexTooSmall {
                stride: vertex_stride,
                required: VERTEX_ATTRIBUTE_WORDS,
            });
        }
        let quad_stride = vertex_stride * VERTICES_PER_QUAD;
        if quad_stride != rasterizer.quad_stride {
            return Err(EncodingError::QuadStrideMismatch {
                format: quad_stride,
                rasterizer: rasterizer.quad_stride,
            });
        }
        let total_stride = HEADER_STRIDE + quad_stride;
        Ok(Self {
            vertex_stride,
            quad_stride,
            quad_stride_bytes: quad_stride * 4,
            total_stride,
            empty: vec![0; total_stride].into_boxed_slice(),
        })
    }

    #[inline]
    pub fn vertex_stride(&self) -> usize {
        self.vertex_stride
    }

    #[inline]
    pub fn quad_stride(&self) -> usize {
        self.quad_stride
    }

    #[inline]
    pub fn quad_stride_bytes(&self) -> usize {
        self.quad_stride_bytes
    }

    #[inline]
    pub fn total_stride(&self) -> usize {
        self.total_stride
    }

    /// `total_stride` zero words, copied over a record to clear it.
    #[inline]
    pub fn empty(&self) -> &[u32] {
        &self.empty
    }

    /// Base index of the `quad_index`-th record in a buffer.
    #[inline]
    pub fn quad_base(&self, quad_index: usize) -> usize {
        quad_index * self.total_stride
    }

    /// Offset of vertex `vertex` relative to its record's attribute offsets.
    #[inline]
    pub fn vertex_offset(&self, vertex: usize) -> usize {
        assert!(vertex < VERTICES_PER_QUAD, "vertex {} out of range", vertex);
        vertex * self.vertex_stride
    }

    /// Absolute buffer index of an attribute (`VERTEX_X`..`VERTEX_NORMAL`) of one vertex.
    #[inline]
    pub fn attribute_index(&self, base: usize, vertex: usize, attribute: usize) -> usize {
        base + attribute + self.vertex_offset(vertex)
    }
}
