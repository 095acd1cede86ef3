//! Fixed-arity vector values with chained arithmetic.
//!
//! [`Vec2`] and [`Vec3`] are plain `Copy` values: every operation returns a
//! new vector, so expressions chain freely (`(a + b).scale(2.0).length()`).
//! They are independent of the matrix engine and share none of its state.

use std::ops::{Add, Mul, Neg, Sub};

/// A two-component vector with fields named `x` and `y`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn zero() -> Self {
        Self::new(0.0, 0.0)
    }

    /// Euclidean length.
    pub fn length(self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn dot(self, other: Vec2) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// The scalar (z-component) cross product of two planar vectors.
    pub fn cross(self, other: Vec2) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Scales each component independently.
    pub fn scale_xy(self, sx: f64, sy: f64) -> Vec2 {
        Vec2::new(self.x * sx, self.y * sy)
    }

    /// Uniform scaling; equivalent to `self * scalar`.
    pub fn scale(self, scalar: f64) -> Vec2 {
        self * scalar
    }

    /// A vector with the same direction and length 1. The zero vector has
    /// no direction and is returned unchanged.
    pub fn normalized(self) -> Vec2 {
        let len = self.length();
        if len == 0.0 {
            self
        } else {
            Vec2::new(self.x / len, self.y / len)
        }
    }

    /// Distance between the points the two vectors describe.
    pub fn distance(self, other: Vec2) -> f64 {
        (other - self).length()
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x - other.x, self.y - other.y)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;

    fn mul(self, scalar: f64) -> Vec2 {
        Vec2::new(self.x * scalar, self.y * scalar)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;

    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

/// A three-component vector with fields named `x`, `y`, and `z`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Euclidean length.
    pub fn length(self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    pub fn dot(self, other: Vec3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// The vector cross product; anti-commutative, perpendicular to both
    /// operands.
    pub fn cross(self, other: Vec3) -> Vec3 {
        Vec3::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Scales each component independently.
    pub fn scale_xyz(self, sx: f64, sy: f64, sz: f64) -> Vec3 {
        Vec3::new(self.x * sx, self.y * sy, self.z * sz)
    }

    /// Uniform scaling; equivalent to `self * scalar`.
    pub fn scale(self, scalar: f64) -> Vec3 {
        self * scalar
    }

    /// A vector with the same direction and length 1. The zero vector has
    /// no direction and is returned unchanged.
    pub fn normalized(self) -> Vec3 {
        let len = self.length();
        if len == 0.0 {
            self
        } else {
            Vec3::new(self.x / len, self.y / len, self.z / len)
        }
    }

    /// Distance between the points the two vectors describe.
    pub fn distance(self, other: Vec3) -> f64 {
        (other - self).length()
    }
}

impl Add for Vec3 {
    type Output = Vec3;

    fn add(self, other: Vec3) -> Vec3 {
        Vec3::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;

    fn sub(self, other: Vec3) -> Vec3 {
        Vec3::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl Mul<f64> for Vec3 {
    type Output = Vec3;

    fn mul(self, scalar: f64) -> Vec3 {
        Vec3::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

impl Neg for Vec3 {
    type Output = Vec3;

    fn neg(self) -> Vec3 {
        Vec3::new(-self.x, -self.y, -self.z)
    }
}
