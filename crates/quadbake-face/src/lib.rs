//! Cardinal face directions and their canonical integer indexing.
#![forbid(unsafe_code)]

/// One of the six axis-aligned faces of a block.
///
/// The "no face" case (a quad that is never culled, or has no preferred
/// light sample) is expressed as `Option<Face>::None` wherever a face is stored.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Face {
    PosX = 0,
    NegX = 1,
    NegZ = 2,
    PosZ = 3,
    PosY = 4,
    NegY = 5,
}

impl Face {
    pub const ALL: [Face; 6] = [
        Face::PosX,
        Face::NegX,
        Face::NegZ,
        Face::PosZ,
        Face::PosY,
        Face::NegY,
    ];

    pub const EAST: Face = Face::PosX;
    pub const WEST: Face = Face::NegX;
    pub const NORTH: Face = Face::NegZ;
    pub const SOUTH: Face = Face::PosZ;
    pub const UP: Face = Face::PosY;
    pub const DOWN: Face = Face::NegY;

    /// Returns the `[0..6)` index of this face.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Lower-case compass name (`east`, `west`, `north`, `south`, `up`, `down`).
    pub fn name(self) -> &'static str {
        match self {
            Face::PosX => "east",
            Face::NegX => "west",
            Face::NegZ => "north",
            Face::PosZ => "south",
            Face::PosY => "up",
            Face::NegY => "down",
        }
    }

    /// Parses a compass name. `none` (and `unknown`) parse to `Some(None)`.
    pub fn parse(s: &str) -> Option<Option<Face>> {
        let face = match s.to_ascii_lowercase().as_str() {
            "east" | "posx" | "+x" => Face::PosX,
            "west" | "negx" | "-x" => Face::NegX,
            "north" | "negz" | "-z" => Face::NegZ,
            "south" | "posz" | "+z" => Face::PosZ,
            "up" | "posy" | "+y" => Face::PosY,
            "down" | "negy" | "-y" => Face::NegY,
            "none" | "unknown" => return Some(None),
            _ => return None,
        };
        Some(Some(face))
    }
}

/// Maps faces (plus the "no face" sentinel) to small integers and back.
///
/// `from_index` must be total over `[0, FACE_COUNT.next_power_of_two())`;
/// every index past the six real faces decodes to `None`.
pub trait FaceIndex {
    /// Number of distinct values, including the "no face" sentinel.
    const FACE_COUNT: u32;

    fn to_index(face: Option<Face>) -> u32;

    fn from_index(index: u32) -> Option<Face>;
}

/// The canonical indexing: `Face as u32` for real faces, 6 for "no face".
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct StandardFaces;

pub const NULL_FACE_ID: u32 = 6;

impl FaceIndex for StandardFaces {
    const FACE_COUNT: u32 = NULL_FACE_ID + 1;

    #[inline]
    fn to_index(face: Option<Face>) -> u32 {
        match face {
            Some(f) => f as u32,
            None => NULL_FACE_ID,
        }
    }

    #[inline]
    fn from_index(index: u32) -> Option<Face> {
        Face::ALL.get(index as usize).copied()
    }
}
