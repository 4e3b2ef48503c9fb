use proptest::prelude::*;
use quadbake_encoding::geometry::{AXIS_ALIGNED, CUBIC, FLAG_BIT_COUNT, LIGHT_FACE};
use quadbake_encoding::header::{HeaderField, HeaderLayout, STANDARD_HEADER};
use quadbake_encoding::{EncodingError, HeaderCodec};
use quadbake_face::{Face, FaceIndex, StandardFaces};

fn arb_face() -> impl Strategy<Value = Option<Face>> {
    prop_oneof![
        Just(None::<Face>),
        (0usize..6).prop_map(|i| Some(Face::ALL[i])),
    ]
}

const CODEC: HeaderCodec = HeaderCodec::STANDARD;

fn mask(field: HeaderField) -> u32 {
    STANDARD_HEADER.field_mask(field)
}

#[test]
fn north_then_up_packs_to_34() {
    let h = CODEC.with_cull_face(0, Some(Face::NORTH));
    let h = CODEC.with_light_face(h, Some(Face::UP));
    assert_eq!(h, 34);
    assert_eq!(CODEC.cull_face(h), Some(Face::NORTH));
    assert_eq!(CODEC.light_face(h), Some(Face::UP));

    let h2 = CODEC.with_geometry_flags(h, 0b0101);
    assert_eq!(h2 & 0b11_1111, 0b10_0010);
    assert_eq!(CODEC.cull_face(h2), Some(Face::NORTH));
    assert_eq!(CODEC.light_face(h2), Some(Face::UP));
    assert_eq!(CODEC.geometry_flags(h2), 0b101);
}

#[test]
fn zero_header_decodes_to_first_face() {
    // Index 0 is a real face; "no face" must be written explicitly.
    assert_eq!(CODEC.cull_face(0), Some(Face::ALL[0]));
    let h = CODEC.with_cull_face(0, None);
    assert_eq!(h, 6);
    assert_eq!(CODEC.cull_face(h), None);
}

#[test]
fn padding_index_decodes_to_no_face() {
    // Index 7 fits the 3-bit field but names no face.
    assert_eq!(CODEC.cull_face(0b111), None);
    assert_eq!(CODEC.light_face(0b111 << 3), None);
}

#[test]
fn stock_geometry_flags_fit_the_field() {
    let all = CUBIC | AXIS_ALIGNED | LIGHT_FACE;
    let h = CODEC.with_geometry_flags(0, all);
    assert_eq!(CODEC.geometry_flags(h), all);
    assert_eq!(STANDARD_HEADER.width(HeaderField::GeometryFlags), FLAG_BIT_COUNT);
}

#[test]
fn header_budget_overflow_is_reported() {
    let err = HeaderCodec::<StandardFaces>::new(32 - 10 + 1).unwrap_err();
    assert_eq!(err, EncodingError::HeaderOverflow { bits: 33 });
    assert!(err.to_string().contains("33"));
}

struct NineFaces;

impl FaceIndex for NineFaces {
    const FACE_COUNT: u32 = 9;

    fn to_index(face: Option<Face>) -> u32 {
        match face {
            Some(f) => f as u32 + 2,
            None => 0,
        }
    }

    fn from_index(index: u32) -> Option<Face> {
        index.checked_sub(2).and_then(|i| Face::ALL.get(i as usize).copied())
    }
}

#[test]
fn direction_width_follows_face_count() {
    let codec = HeaderCodec::<NineFaces>::new(2).unwrap();
    let l = codec.layout();
    assert_eq!(l.direction_bits(), 4);
    assert_eq!(l.shift(HeaderField::NormalFlags), 8);
    assert_eq!(l.bits_used(), 14);
    for f in Face::ALL {
        let h = codec.with_light_face(codec.with_cull_face(0, None), Some(f));
        assert_eq!(codec.cull_face(h), None);
        assert_eq!(codec.light_face(h), Some(f));
    }
}

// 16384 values need 14 bits per direction: 14 + 14 + 4 fills the word exactly.
struct WideFaces;

impl FaceIndex for WideFaces {
    const FACE_COUNT: u32 = 16384;

    fn to_index(face: Option<Face>) -> u32 {
        StandardFaces::to_index(face)
    }

    fn from_index(index: u32) -> Option<Face> {
        StandardFaces::from_index(index)
    }
}

#[test]
fn header_filling_all_32_bits_has_empty_geometry_field() {
    let codec = HeaderCodec::<WideFaces>::new(0).expect("32 bits is within budget");
    let l = codec.layout();
    assert_eq!(l.direction_bits(), 14);
    assert_eq!(l.shift(HeaderField::NormalFlags), 28);
    assert_eq!(l.shift(HeaderField::GeometryFlags), 32);
    assert_eq!(l.bits_used(), 32);
    assert_eq!(l.field_mask(HeaderField::GeometryFlags), 0);

    let h = codec.with_cull_face(u32::MAX, Some(Face::SOUTH));
    let h = codec.with_light_face(h, None);
    let h = codec.with_normal_flags(h, 0b1001);
    assert_eq!(codec.with_geometry_flags(h, u32::MAX), h);
    assert_eq!(codec.geometry_flags(h), 0);
    assert_eq!(codec.cull_face(h), Some(Face::SOUTH));
    assert_eq!(codec.light_face(h), None);
    assert_eq!(codec.normal_flags(h), 0b1001);
    assert_eq!(h >> 28, 0b1001);

    assert_eq!(
        HeaderLayout::new(WideFaces::FACE_COUNT, 1),
        Err(EncodingError::HeaderOverflow { bits: 33 })
    );
}

// Reports an index far outside the 3-bit direction field.
struct WildFaces;

impl FaceIndex for WildFaces {
    const FACE_COUNT: u32 = StandardFaces::FACE_COUNT;

    fn to_index(_face: Option<Face>) -> u32 {
        0xFFFF_FFFF
    }

    fn from_index(index: u32) -> Option<Face> {
        StandardFaces::from_index(index)
    }
}

proptest! {
    // Out-of-range direction indices keep only their low bits.
    #[test]
    fn direction_index_is_masked_to_field_width(h in any::<u32>(), f in arb_face()) {
        let codec = HeaderCodec::<WildFaces>::new(FLAG_BIT_COUNT).unwrap();
        let cull = mask(HeaderField::CullFace);
        let light = mask(HeaderField::LightFace);

        let out = codec.with_cull_face(h, f);
        prop_assert_eq!(out & cull, 0b111);
        prop_assert_eq!(out & !cull, h & !cull);

        let out = codec.with_light_face(h, f);
        prop_assert_eq!(out & light, 0b111 << 3);
        prop_assert_eq!(out & !light, h & !light);
        prop_assert_eq!(codec.light_face(out), None);
    }

    #[test]
    fn cull_face_round_trips_and_is_isolated(h in any::<u32>(), f in arb_face()) {
        let out = CODEC.with_cull_face(h, f);
        prop_assert_eq!(CODEC.cull_face(out), f);
        let m = mask(HeaderField::CullFace);
        prop_assert_eq!(out & !m, h & !m);
    }

    #[test]
    fn light_face_round_trips_and_is_isolated(h in any::<u32>(), f in arb_face()) {
        let out = CODEC.with_light_face(h, f);
        prop_assert_eq!(CODEC.light_face(out), f);
        let m = mask(HeaderField::LightFace);
        prop_assert_eq!(out & !m, h & !m);
    }

    #[test]
    fn normal_flags_round_trip_and_are_isolated(h in any::<u32>(), flags in 0u32..16) {
        let out = CODEC.with_normal_flags(h, flags);
        prop_assert_eq!(CODEC.normal_flags(out), flags);
        for v in 0..4 {
            prop_assert_eq!(CODEC.has_normal(out, v), flags & (1 << v) != 0);
        }
        let m = mask(HeaderField::NormalFlags);
        prop_assert_eq!(out & !m, h & !m);
    }

    // Bits above the field width are dropped, never spilled into neighbours.
    #[test]
    fn normal_flags_are_masked_to_four_bits(h in any::<u32>(), flags in any::<u32>()) {
        let out = CODEC.with_normal_flags(h, flags);
        prop_assert_eq!(CODEC.normal_flags(out), flags & 0xF);
        let m = mask(HeaderField::NormalFlags);
        prop_assert_eq!(out & !m, h & !m);
    }

    #[test]
    fn geometry_flags_round_trip_and_are_isolated(
        h in any::<u32>(),
        flags in 0u32..(1 << FLAG_BIT_COUNT),
    ) {
        let out = CODEC.with_geometry_flags(h, flags);
        prop_assert_eq!(CODEC.geometry_flags(out), flags);
        let m = mask(HeaderField::GeometryFlags);
        prop_assert_eq!(out & !m, h & !m);
    }

    // Every legal geometry width, with all four fields written in turn.
    #[test]
    fn fields_are_disjoint_for_every_geometry_width(
        width in 1u32..=(32 - 3 - 3 - 4),
        h in any::<u32>(),
        cull in arb_face(),
        light in arb_face(),
        normals in 0u32..16,
        geometry in any::<u32>(),
    ) {
        let codec = HeaderCodec::<StandardFaces>::new(width).unwrap();
        let l = codec.layout();
        let masks: Vec<u32> = HeaderField::ALL.iter().map(|&f| l.field_mask(f)).collect();
        for i in 0..masks.len() {
            prop_assert_eq!(masks[i].count_ones(), l.width(HeaderField::ALL[i]));
            for j in (i + 1)..masks.len() {
                prop_assert_eq!(masks[i] & masks[j], 0);
            }
        }
        prop_assert!(l.bits_used() <= 32);

        let geometry = geometry & ((1u64 << width) - 1) as u32;
        let out = codec.with_cull_face(h, cull);
        let out = codec.with_light_face(out, light);
        let out = codec.with_normal_flags(out, normals);
        let out = codec.with_geometry_flags(out, geometry);
        prop_assert_eq!(codec.cull_face(out), cull);
        prop_assert_eq!(codec.light_face(out), light);
        prop_assert_eq!(codec.normal_flags(out), normals);
        prop_assert_eq!(codec.geometry_flags(out), geometry);
        let all: u32 = masks.iter().fold(0, |acc, m| acc | m);
        prop_assert_eq!(out & !all, h & !all);
    }

    #[test]
    fn layouts_past_32_bits_are_rejected(width in 23u32..64) {
        prop_assert_eq!(
            HeaderLayout::new(StandardFaces::FACE_COUNT, width),
            Err(EncodingError::HeaderOverflow { bits: 10 + width })
        );
    }
}
