//! Integer lattice coordinates for cubies and sticker normals.
//!
//! The cube is centered on the origin with cubie coordinates in `{-1, 0, 1}`
//! on each axis: x grows to the right, y grows toward the back and z grows
//! upward. Face normals are the six unit vectors of this lattice.

use std::ops::{Add, Mul, Neg, Sub};

/// A point or direction on the cube lattice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CubeCoord {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl CubeCoord {
    /// Center of the cube.
    pub const ORIGIN: Self = Self { x: 0, y: 0, z: 0 };

    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    pub const fn dot(&self, other: &Self) -> i32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub const fn cross(&self, other: &Self) -> Self {
        Self {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Rotate a quarter turn clockwise about a unit `axis`, as seen from the
    /// tip of the axis looking back at the origin.
    ///
    /// With Rodrigues' formula at -90 degrees this is `a(a·v) - a×v`.
    pub fn quarter_turn_about(&self, axis: &Self) -> Self {
        *axis * axis.dot(self) - axis.cross(self)
    }
}

impl Add for CubeCoord {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl Sub for CubeCoord {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        self + (-other)
    }
}

impl Neg for CubeCoord {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

impl Mul<i32> for CubeCoord {
    type Output = Self;

    #[inline]
    fn mul(self, k: i32) -> Self {
        Self {
            x: self.x * k,
            y: self.y * k,
            z: self.z * k,
        }
    }
}

impl std::fmt::Display for CubeCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const X: CubeCoord = CubeCoord::new(1, 0, 0);
    const Y: CubeCoord = CubeCoord::new(0, 1, 0);
    const Z: CubeCoord = CubeCoord::new(0, 0, 1);

    #[test]
    fn cross_is_right_handed() {
        assert_eq!(X.cross(&Y), Z);
        assert_eq!(Y.cross(&Z), X);
        assert_eq!(Z.cross(&X), Y);
    }

    #[test]
    fn quarter_turn_is_clockwise_from_above() {
        // Looking down from +z, front (-y) swings to the left (-x).
        let front = CubeCoord::new(0, -1, 1);
        assert_eq!(front.quarter_turn_about(&Z), CubeCoord::new(-1, 0, 1));
    }

    #[test]
    fn four_quarter_turns_are_identity() {
        let p = CubeCoord::new(1, -1, 1);
        for axis in [X, Y, Z, -X, -Y, -Z] {
            let mut q = p;
            for _ in 0..4 {
                q = q.quarter_turn_about(&axis);
            }
            assert_eq!(q, p);
        }
    }

    #[test]
    fn axis_is_fixed_by_rotation() {
        assert_eq!(Z.quarter_turn_about(&Z), Z);
        assert_eq!((-X).quarter_turn_about(&X), -X);
    }

    #[test]
    fn addition_subtraction() {
        let a = CubeCoord::new(1, 2, 3);
        let b = CubeCoord::new(4, -1, 2);
        assert_eq!(a + b, CubeCoord::new(5, 1, 5));
        assert_eq!(a - b, CubeCoord::new(-3, 3, 1));
        assert_eq!(a * 2, CubeCoord::new(2, 4, 6));
    }
}
