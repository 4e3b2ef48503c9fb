//! Sub-field packing for the first word of a quad record.
//!
//! Bit layout, low to high:
//! `[cull face][light face][normal flags: 4][geometry flags][free]`
//!
//! Direction fields are sized from the face index's value count rounded up to
//! a power of two (7 values -> 3 bits). All encoders mask their input to the
//! field width instead of validating it, so every `u32` header and every input
//! yields a well-defined result; out-of-range values lose their high bits.

use std::marker::PhantomData;

use quadbake_face::{Face, FaceIndex, StandardFaces};

use crate::error::EncodingError;
use crate::geometry::FLAG_BIT_COUNT;

/// One normal-presence bit per vertex.
pub const NORMALS_COUNT: u32 = 4;
const NORMALS_MASK: u32 = (1 << NORMALS_COUNT) - 1;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum HeaderField {
    CullFace,
    LightFace,
    NormalFlags,
    GeometryFlags,
}

impl HeaderField {
    pub const ALL: [HeaderField; 4] = [
        HeaderField::CullFace,
        HeaderField::LightFace,
        HeaderField::NormalFlags,
        HeaderField::GeometryFlags,
    ];

    pub fn name(self) -> &'static str {
        match self {
            HeaderField::CullFace => "cull_face",
            HeaderField::LightFace => "light_face",
            HeaderField::NormalFlags => "normal_flags",
            HeaderField::GeometryFlags => "geometry_flags",
        }
    }
}

/// Shifts and masks of every header field, derived once from the value counts.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct HeaderLayout {
    direction_mask: u32,
    direction_bits: u32,
    cull_shift: u32,
    cull_inverse_mask: u32,
    light_shift: u32,
    light_inverse_mask: u32,
    normals_shift: u32,
    normals_inverse_mask: u32,
    geometry_bits: u32,
    geometry_shift: u32,
    geometry_mask: u32,
    geometry_inverse_mask: u32,
    bits_used: u32,
}

impl HeaderLayout {
    /// Lays out the header for `face_count` direction values (including the
    /// "no face" sentinel) and `geometry_bits` geometry flag bits.
    pub const fn new(face_count: u32, geometry_bits: u32) -> Result<Self, EncodingError> {
        let direction_mask = match face_count.checked_next_power_of_two() {
            Some(p) => p - 1,
            None => return Err(EncodingError::HeaderOverflow { bits: u32::MAX }),
        };
        let direction_bits = direction_mask.count_ones();
        let cull_shift = 0;
        let light_shift = cull_shift + direction_bits;
        let normals_shift = light_shift + direction_bits;
        let geometry_shift = normals_shift + NORMALS_COUNT;
        let bits_used = geometry_shift.saturating_add(geometry_bits);
        if bits_used > u32::BITS {
            return Err(EncodingError::HeaderOverflow { bits: bits_used });
        }
        let geometry_mask = low_mask(geometry_bits);
        Ok(Self {
            direction_mask,
            direction_bits,
            cull_shift,
            cull_inverse_mask: !(direction_mask << cull_shift),
            light_shift,
            light_inverse_mask: !(direction_mask << light_shift),
            normals_shift,
            normals_inverse_mask: !(NORMALS_MASK << normals_shift),
            geometry_bits,
            geometry_shift,
            geometry_mask,
            geometry_inverse_mask: !place(geometry_mask, geometry_shift),
            bits_used,
        })
    }

    #[inline]
    pub const fn direction_bits(&self) -> u32 {
        self.direction_bits
    }

    #[inline]
    pub const fn direction_mask(&self) -> u32 {
        self.direction_mask
    }

    #[inline]
    pub const fn geometry_bits(&self) -> u32 {
        self.geometry_bits
    }

    /// Total bits consumed by all fields.
    #[inline]
    pub const fn bits_used(&self) -> u32 {
        self.bits_used
    }

    /// First free bit; any future field (e.g. a material index) starts here.
    #[inline]
    pub const fn reserved_shift(&self) -> u32 {
        self.bits_used
    }

    pub const fn shift(&self, field: HeaderField) -> u32 {
        match field {
            HeaderField::CullFace => self.cull_shift,
            HeaderField::LightFace => self.light_shift,
            HeaderField::NormalFlags => self.normals_shift,
            HeaderField::GeometryFlags => self.geometry_shift,
        }
    }

    pub const fn width(&self, field: HeaderField) -> u32 {
        match field {
            HeaderField::CullFace | HeaderField::LightFace => self.direction_bits,
            HeaderField::NormalFlags => NORMALS_COUNT,
            HeaderField::GeometryFlags => self.geometry_bits,
        }
    }

    /// Mask of the bits `field` occupies, in place.
    pub const fn field_mask(&self, field: HeaderField) -> u32 {
        place(low_mask(self.width(field)), self.shift(field))
    }
}

/// `mask << shift`, or 0 when the field starts at bit 32 (a zero-width field
/// in a full header).
const fn place(mask: u32, shift: u32) -> u32 {
    match mask.checked_shl(shift) {
        Some(v) => v,
        None => 0,
    }
}

const fn low_mask(bits: u32) -> u32 {
    if bits >= u32::BITS {
        u32::MAX
    } else {
        (1 << bits) - 1
    }
}

/// Header layout for [`StandardFaces`] and the stock geometry flags.
pub const STANDARD_HEADER: HeaderLayout =
    match HeaderLayout::new(<StandardFaces as FaceIndex>::FACE_COUNT, FLAG_BIT_COUNT) {
        Ok(layout) => layout,
        Err(_) => panic!("standard quad header exceeds 32 bits"),
    };

/// Reads and writes header sub-fields, mapping direction indices through `I`.
pub struct HeaderCodec<I: FaceIndex = StandardFaces> {
    layout: HeaderLayout,
    _faces: PhantomData<fn() -> I>,
}

impl<I: FaceIndex> Clone for HeaderCodec<I> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<I: FaceIndex> Copy for HeaderCodec<I> {}

impl<I: FaceIndex> std::fmt::Debug for HeaderCodec<I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HeaderCodec").field("layout", &self.layout).finish()
    }
}

impl HeaderCodec<StandardFaces> {
    pub const STANDARD: HeaderCodec<StandardFaces> = HeaderCodec {
        layout: STANDARD_HEADER,
        _faces: PhantomData,
    };
}

impl<I: FaceIndex> HeaderCodec<I> {
    pub fn new(geometry_bits: u32) -> Result<Self, EncodingError> {
        Ok(Self {
            layout: HeaderLayout::new(I::FACE_COUNT, geometry_bits)?,
            _faces: PhantomData,
        })
    }

    #[inline]
    pub fn layout(&self) -> &HeaderLayout {
        &self.layout
    }

    #[inline]
    pub fn cull_face(&self, bits: u32) -> Option<Face> {
        let l = &self.layout;
        I::from_index((bits >> l.cull_shift) & l.direction_mask)
    }

    #[inline]
    pub fn with_cull_face(&self, bits: u32, face: Option<Face>) -> u32 {
        let l = &self.layout;
        (bits & l.cull_inverse_mask) | ((I::to_index(face) & l.direction_mask) << l.cull_shift)
    }

    #[inline]
    pub fn light_face(&self, bits: u32) -> Option<Face> {
        let l = &self.layout;
        I::from_index((bits >> l.light_shift) & l.direction_mask)
    }

    #[inline]
    pub fn with_light_face(&self, bits: u32, face: Option<Face>) -> u32 {
        let l = &self.layout;
        (bits & l.light_inverse_mask) | ((I::to_index(face) & l.direction_mask) << l.light_shift)
    }

    /// Bit `i` set means vertex `i` carries its own normal rather than the face normal.
    #[inline]
    pub fn normal_flags(&self, bits: u32) -> u32 {
        (bits >> self.layout.normals_shift) & NORMALS_MASK
    }

    /// Replaces the normal flags; bits above the low four are discarded.
    #[inline]
    pub fn with_normal_flags(&self, bits: u32, flags: u32) -> u32 {
        let l = &self.layout;
        (bits & l.normals_inverse_mask) | ((flags & NORMALS_MASK) << l.normals_shift)
    }

    #[inline]
    pub fn has_normal(&self, bits: u32, vertex: usize) -> bool {
        vertex < NORMALS_COUNT as usize && self.normal_flags(bits) & (1 << vertex) != 0
    }

    #[inline]
    pub fn geometry_flags(&self, bits: u32) -> u32 {
        bits.checked_shr(self.layout.geometry_shift).unwrap_or(0) & self.layout.geometry_mask
    }

    /// Replaces the geometry flags; bits past the declared width are discarded.
    #[inline]
    pub fn with_geometry_flags(&self, bits: u32, flags: u32) -> u32 {
        let l = &self.layout;
        (bits & l.geometry_inverse_mask) | place(flags & l.geometry_mask, l.geometry_shift)
    }
}
