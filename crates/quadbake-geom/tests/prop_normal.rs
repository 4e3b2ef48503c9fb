use proptest::prelude::*;
use quadbake_geom::{Vec3, face_normal, pack_normal, unpack_normal};

fn approx(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() <= eps
}

fn arb_unit_vec3() -> impl Strategy<Value = Vec3> {
    (-1.0f32..=1.0, -1.0f32..=1.0, -1.0f32..=1.0)
        .prop_filter("non-degenerate", |(x, y, z)| x * x + y * y + z * z > 1e-4)
        .prop_map(|(x, y, z)| Vec3::new(x, y, z).normalized())
}

fn arb_point() -> impl Strategy<Value = Vec3> {
    (-16.0f32..16.0, -16.0f32..16.0, -16.0f32..16.0).prop_map(|(x, y, z)| Vec3::new(x, y, z))
}

proptest! {
    // Quantization error per component stays within one step of 1/127.
    #[test]
    fn packed_normal_within_quantization_step(n in arb_unit_vec3()) {
        let back = unpack_normal(pack_normal(n));
        let step = 1.0 / 127.0 + 1e-6;
        prop_assert!(approx(back.x, n.x, step));
        prop_assert!(approx(back.y, n.y, step));
        prop_assert!(approx(back.z, n.z, step));
    }

    // Packing never touches the top byte.
    #[test]
    fn packed_normal_leaves_top_byte_clear(
        x in -8.0f32..8.0,
        y in -8.0f32..8.0,
        z in -8.0f32..8.0,
    ) {
        prop_assert_eq!(pack_normal(Vec3::new(x, y, z)) >> 24, 0);
    }

    // The face normal is perpendicular to both diagonals of the quad.
    #[test]
    fn face_normal_is_orthogonal_to_diagonals(
        v0 in arb_point(),
        v1 in arb_point(),
        v2 in arb_point(),
        v3 in arb_point(),
    ) {
        let n = face_normal(v0, v1, v2, v3);
        let d0 = v2 - v0;
        let d1 = v3 - v1;
        prop_assume!(d0.cross(d1).length() > 1e-2);
        prop_assert!(approx(n.length(), 1.0, 1e-3));
        prop_assert!(n.dot(d0).abs() <= 1e-3 * d0.length().max(1.0));
        prop_assert!(n.dot(d1).abs() <= 1e-3 * d1.length().max(1.0));
    }
}
