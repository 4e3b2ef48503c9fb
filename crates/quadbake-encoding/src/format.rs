//! The complete encoding: quad layout plus header codec, derived once.

use std::sync::OnceLock;

use quadbake_face::{FaceIndex, StandardFaces};

use crate::buffer::QuadBuffer;
use crate::error::EncodingError;
use crate::geometry::FLAG_BIT_COUNT;
use crate::header::{HeaderCodec, HeaderField};
use crate::layout::{QuadLayout, RasterizerStrides};
use crate::vertex_format::{VertexFormat, VertexFormatDesc};

/// Immutable encoding context handed to every buffer owner. Both the stride
/// checks and the 32-bit header budget are enforced in [`EncodingFormat::new`],
/// so a value of this type is always consistent with the rasterizer.
#[derive(Debug)]
pub struct EncodingFormat<I: FaceIndex = StandardFaces> {
    layout: QuadLayout,
    header: HeaderCodec<I>,
}

impl<I: FaceIndex> Clone for EncodingFormat<I> {
    fn clone(&self) -> Self {
        Self {
            layout: self.layout.clone(),
            header: self.header,
        }
    }
}

impl<I: FaceIndex> EncodingFormat<I> {
    pub fn new(
        format: &dyn VertexFormat,
        rasterizer: RasterizerStrides,
        geometry_bits: u32,
    ) -> Result<Self, EncodingError> {
        let header = HeaderCodec::<I>::new(geometry_bits)?;
        let layout = QuadLayout::new(format, rasterizer)?;
        let h = header.layout();
        log::info!(
            "quad encoding: vertex_stride={} quad_stride={} total_stride={}",
            layout.vertex_stride(),
            layout.quad_stride(),
            layout.total_stride(),
        );
        log::info!(
            "quad header: {}/32 bits (cull@{} light@{} normals@{} geometry@{}x{})",
            h.bits_used(),
            h.shift(HeaderField::CullFace),
            h.shift(HeaderField::LightFace),
            h.shift(HeaderField::NormalFlags),
            h.shift(HeaderField::GeometryFlags),
            h.geometry_bits(),
        );
        Ok(Self { layout, header })
    }

    #[inline]
    pub fn layout(&self) -> &QuadLayout {
        &self.layout
    }

    #[inline]
    pub fn header(&self) -> &HeaderCodec<I> {
        &self.header
    }

    pub fn new_buffer(&self, capacity_quads: usize) -> QuadBuffer {
        QuadBuffer::with_capacity(&self.layout, capacity_quads)
    }
}

impl EncodingFormat<StandardFaces> {
    /// Process-wide encoding for the stock vertex format and rasterizer.
    /// Initialized on first use and never recomputed.
    pub fn standard() -> &'static EncodingFormat {
        static STANDARD: OnceLock<EncodingFormat> = OnceLock::new();
        STANDARD.get_or_init(|| {
            let vf = VertexFormatDesc::position_color_texture_light_normal();
            match EncodingFormat::new(&vf, RasterizerStrides::VANILLA, FLAG_BIT_COUNT) {
                Ok(f) => f,
                Err(e) => panic!("stock quad encoding is inconsistent: {}", e),
            }
        })
    }
}
