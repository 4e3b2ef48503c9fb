//! Stock geometry classification bits stored in the header's geometry field.

/// Number of header bits reserved for geometry flags.
pub const FLAG_BIT_COUNT: u32 = 3;

/// Quad is a full face of the unit cube on its light face.
pub const CUBIC: u32 = 1;
/// Quad lies in a plane perpendicular to one axis.
pub const AXIS_ALIGNED: u32 = CUBIC << 1;
/// Quad is coplanar with its light face's block boundary.
pub const LIGHT_FACE: u32 = AXIS_ALIGNED << 1;

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct GeometryFlags(pub u32);

impl GeometryFlags {
    pub const NONE: GeometryFlags = GeometryFlags(0);

    #[inline]
    pub fn bits(self) -> u32 {
        self.0
    }

    #[inline]
    pub fn contains(self, flag: u32) -> bool {
        self.0 & flag == flag
    }

    #[inline]
    pub fn union(self, flag: u32) -> GeometryFlags {
        GeometryFlags(self.0 | flag)
    }
}

impl From<u32> for GeometryFlags {
    fn from(bits: u32) -> Self {
        GeometryFlags(bits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_fit_declared_width() {
        assert!(CUBIC | AXIS_ALIGNED | LIGHT_FACE < 1 << FLAG_BIT_COUNT);
    }

    #[test]
    fn union_and_contains() {
        let f = GeometryFlags::NONE.union(AXIS_ALIGNED).union(LIGHT_FACE);
        assert!(f.contains(AXIS_ALIGNED | LIGHT_FACE));
        assert!(!f.contains(CUBIC));
        assert_eq!(GeometryFlags::from(f.bits()), f);
    }
}
