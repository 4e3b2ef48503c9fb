use quadbake_face::Face;

/// Parses a `u32` given in decimal, `0x` hex or `0b` binary. `_` separators are allowed.
pub fn parse_u32(s: &str) -> Result<u32, String> {
    let cleaned: String = s.chars().filter(|&c| c != '_').collect();
    let lower = cleaned.to_ascii_lowercase();
    let parsed = if let Some(hex) = lower.strip_prefix("0x") {
        u32::from_str_radix(hex, 16)
    } else if let Some(bin) = lower.strip_prefix("0b") {
        u32::from_str_radix(bin, 2)
    } else {
        lower.parse::<u32>()
    };
    parsed.map_err(|e| format!("invalid number '{}': {}", s, e))
}

/// A face as given on the command line; `none` is the "no face" value.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FaceArg(pub Option<Face>);

pub fn parse_face(s: &str) -> Result<FaceArg, String> {
    Face::parse(s).map(FaceArg).ok_or_else(|| {
        format!(
            "unknown face '{}' (expected east, west, north, south, up, down or none)",
            s
        )
    })
}

pub fn face_name(face: Option<Face>) -> &'static str {
    face.map_or("none", Face::name)
}
