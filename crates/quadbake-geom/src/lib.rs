//! Minimal geometry types for the quad encoding crates.
#![forbid(unsafe_code)]

use core::ops::{Add, Div, Mul, Neg, Sub};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };
    pub const UP: Vec3 = Vec3 {
        x: 0.0,
        y: 1.0,
        z: 0.0,
    };

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn dot(self, rhs: Vec3) -> f32 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    #[inline]
    pub fn cross(self, rhs: Vec3) -> Vec3 {
        Vec3 {
            x: self.y * rhs.z - self.z * rhs.y,
            y: self.z * rhs.x - self.x * rhs.z,
            z: self.x * rhs.y - self.y * rhs.x,
        }
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.dot(self).sqrt()
    }

    #[inline]
    pub fn normalized(self) -> Vec3 {
        let len = self.length();
        if len > 0.0 { self / len } else { self }
    }
}

impl Add for Vec3 {
    type Output = Vec3;
    #[inline]
    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;
    #[inline]
    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Neg for Vec3 {
    type Output = Vec3;
    #[inline]
    fn neg(self) -> Vec3 {
        Vec3::new(-self.x, -self.y, -self.z)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Vec3;
    #[inline]
    fn mul(self, rhs: f32) -> Vec3 {
        Vec3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Div<f32> for Vec3 {
    type Output = Vec3;
    #[inline]
    fn div(self, rhs: f32) -> Vec3 {
        Vec3::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

/// Unit normal of the plane through a quad's four corners, using its diagonals.
/// Degenerate quads yield a zero vector.
pub fn face_normal(v0: Vec3, v1: Vec3, v2: Vec3, v3: Vec3) -> Vec3 {
    (v2 - v0).cross(v3 - v1).normalized()
}

const NORMAL_SCALE: f32 = 127.0;

/// Packs a normal into one word: x, y, z as signed bytes in bits 0..24.
/// Components are clamped to `[-1, 1]`; the top byte is left zero.
#[inline]
pub fn pack_normal(n: Vec3) -> u32 {
    pack_component(n.x) | (pack_component(n.y) << 8) | (pack_component(n.z) << 16)
}

#[inline]
fn pack_component(c: f32) -> u32 {
    ((c.clamp(-1.0, 1.0) * NORMAL_SCALE) as i32 as u32) & 0xFF
}

/// Inverse of [`pack_normal`], up to the 1/127 quantization step.
#[inline]
pub fn unpack_normal(packed: u32) -> Vec3 {
    Vec3::new(
        unpack_component(packed),
        unpack_component(packed >> 8),
        unpack_component(packed >> 16),
    )
}

#[inline]
fn unpack_component(bits: u32) -> f32 {
    (bits as u8 as i8) as f32 / NORMAL_SCALE
}
