//! Growable arena of quad records addressed by base index.

use quadbake_face::FaceIndex;
use quadbake_geom::{Vec3, face_normal, pack_normal, unpack_normal};

use crate::header::HeaderCodec;
use crate::layout::{
    HEADER_BITS, HEADER_COLOR_INDEX, HEADER_FACE_NORMAL, HEADER_TAG, QuadLayout, VERTEX_COLOR,
    VERTEX_LIGHTMAP, VERTEX_NORMAL, VERTEX_U, VERTEX_V, VERTEX_X, VERTEX_Y, VERTEX_Z,
};

/// Flat `u32` storage for many quads. Each record occupies `total_stride`
/// words starting at a base index that is a multiple of `total_stride`.
///
/// Accessors index the backing slice directly and panic on out-of-range
/// bases, like slice indexing. The buffer is not synchronized; concurrent
/// writers must be serialized by the owner.
#[derive(Clone, Debug)]
pub struct QuadBuffer {
    layout: QuadLayout,
    data: Vec<u32>,
}

impl QuadBuffer {
    pub fn new(layout: &QuadLayout) -> Self {
        Self::with_capacity(layout, 0)
    }

    pub fn with_capacity(layout: &QuadLayout, quads: usize) -> Self {
        Self {
            layout: layout.clone(),
            data: Vec::with_capacity(quads * layout.total_stride()),
        }
    }

    #[inline]
    pub fn layout(&self) -> &QuadLayout {
        &self.layout
    }

    /// Number of quads stored.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len() / self.layout.total_stride()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Appends a zeroed record and returns its base index.
    pub fn push_quad(&mut self) -> usize {
        let base = self.data.len();
        self.data.extend_from_slice(self.layout.empty());
        base
    }

    /// Appends a copy of a full record (`total_stride` words) and returns its base index.
    pub fn push_record(&mut self, record: &[u32]) -> usize {
        assert_eq!(record.len(), self.layout.total_stride(), "record length");
        let base = self.data.len();
        self.data.extend_from_slice(record);
        base
    }

    /// Zeroes one record in place.
    #[inline]
    pub fn clear_quad(&mut self, base: usize) {
        let end = base + self.layout.total_stride();
        self.data[base..end].copy_from_slice(self.layout.empty());
    }

    /// Drops every record, keeping the allocation for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.data.clear();
    }

    #[inline]
    pub fn quad(&self, base: usize) -> &[u32] {
        &self.data[base..base + self.layout.total_stride()]
    }

    #[inline]
    pub fn quad_mut(&mut self, base: usize) -> &mut [u32] {
        let end = base + self.layout.total_stride();
        &mut self.data[base..end]
    }

    /// Base indices of all stored records, in order.
    pub fn bases(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.data.len()).step_by(self.layout.total_stride())
    }

    #[inline]
    pub fn as_words(&self) -> &[u32] {
        &self.data
    }

    /// Raw bytes in native endianness, ready for upload.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.data)
    }

    // Header words

    #[inline]
    pub fn header(&self, base: usize) -> u32 {
        self.data[base + HEADER_BITS]
    }

    #[inline]
    pub fn set_header(&mut self, base: usize, bits: u32) {
        self.data[base + HEADER_BITS] = bits;
    }

    #[inline]
    pub fn face_normal(&self, base: usize) -> u32 {
        self.data[base + HEADER_FACE_NORMAL]
    }

    #[inline]
    pub fn set_face_normal(&mut self, base: usize, packed: u32) {
        self.data[base + HEADER_FACE_NORMAL] = packed;
    }

    /// Recomputes the packed face normal from the four corner positions.
    pub fn update_face_normal(&mut self, base: usize) -> Vec3 {
        let n = face_normal(
            self.pos(base, 0),
            self.pos(base, 1),
            self.pos(base, 2),
            self.pos(base, 3),
        );
        self.set_face_normal(base, pack_normal(n));
        n
    }

    #[inline]
    pub fn color_index(&self, base: usize) -> u32 {
        self.data[base + HEADER_COLOR_INDEX]
    }

    #[inline]
    pub fn set_color_index(&mut self, base: usize, index: u32) {
        self.data[base + HEADER_COLOR_INDEX] = index;
    }

    #[inline]
    pub fn tag(&self, base: usize) -> u32 {
        self.data[base + HEADER_TAG]
    }

    #[inline]
    pub fn set_tag(&mut self, base: usize, tag: u32) {
        self.data[base + HEADER_TAG] = tag;
    }

    // Vertex words

    #[inline]
    fn word(&self, base: usize, vertex: usize, attribute: usize) -> u32 {
        self.data[self.layout.attribute_index(base, vertex, attribute)]
    }

    #[inline]
    fn set_word(&mut self, base: usize, vertex: usize, attribute: usize, value: u32) {
        let i = self.layout.attribute_index(base, vertex, attribute);
        self.data[i] = value;
    }

    pub fn pos(&self, base: usize, vertex: usize) -> Vec3 {
        Vec3::new(
            f32::from_bits(self.word(base, vertex, VERTEX_X)),
            f32::from_bits(self.word(base, vertex, VERTEX_Y)),
            f32::from_bits(self.word(base, vertex, VERTEX_Z)),
        )
    }

    pub fn set_pos(&mut self, base: usize, vertex: usize, p: Vec3) {
        self.set_word(base, vertex, VERTEX_X, p.x.to_bits());
        self.set_word(base, vertex, VERTEX_Y, p.y.to_bits());
        self.set_word(base, vertex, VERTEX_Z, p.z.to_bits());
    }

    #[inline]
    pub fn color(&self, base: usize, vertex: usize) -> u32 {
        self.word(base, vertex, VERTEX_COLOR)
    }

    #[inline]
    pub fn set_color(&mut self, base: usize, vertex: usize, rgba: u32) {
        self.set_word(base, vertex, VERTEX_COLOR, rgba);
    }

    pub fn uv(&self, base: usize, vertex: usize) -> (f32, f32) {
        (
            f32::from_bits(self.word(base, vertex, VERTEX_U)),
            f32::from_bits(self.word(base, vertex, VERTEX_V)),
        )
    }

    pub fn set_uv(&mut self, base: usize, vertex: usize, u: f32, v: f32) {
        self.set_word(base, vertex, VERTEX_U, u.to_bits());
        self.set_word(base, vertex, VERTEX_V, v.to_bits());
    }

    #[inline]
    pub fn lightmap(&self, base: usize, vertex: usize) -> u32 {
        self.word(base, vertex, VERTEX_LIGHTMAP)
    }

    #[inline]
    pub fn set_lightmap(&mut self, base: usize, vertex: usize, light: u32) {
        self.set_word(base, vertex, VERTEX_LIGHTMAP, light);
    }

    #[inline]
    pub fn normal(&self, base: usize, vertex: usize) -> u32 {
        self.word(base, vertex, VERTEX_NORMAL)
    }

    #[inline]
    pub fn set_normal(&mut self, base: usize, vertex: usize, packed: u32) {
        self.set_word(base, vertex, VERTEX_NORMAL, packed);
    }

    /// The vertex's own normal if its normal flag is set, else the face normal.
    pub fn effective_normal<I: FaceIndex>(
        &self,
        codec: &HeaderCodec<I>,
        base: usize,
        vertex: usize,
    ) -> u32 {
        if codec.has_normal(self.header(base), vertex) {
            self.normal(base, vertex)
        } else {
            self.face_normal(base)
        }
    }

    /// Unpacked [`QuadBuffer::effective_normal`].
    pub fn vertex_normal<I: FaceIndex>(
        &self,
        codec: &HeaderCodec<I>,
        base: usize,
        vertex: usize,
    ) -> Vec3 {
        unpack_normal(self.effective_normal(codec, base, vertex))
    }
}
