//! Geometry primitive: [`Vec2`].
//!
//! Node positions are only consumed for heuristic evaluation, so the type
//! stays small: subtraction, per-axis absolute value and lengths.

use std::ops::Sub;

// ---------------------------------------------------------------------------
// Vec2
// ---------------------------------------------------------------------------

/// A 2D position or displacement in world units.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    /// Create a new vector.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Component-wise absolute value.
    #[inline]
    pub fn abs(self) -> Self {
        Self::new(self.x.abs(), self.y.abs())
    }

    /// Euclidean length.
    #[inline]
    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Absolute per-axis displacement from `self` to `other`.
    ///
    /// This is the `(dx, dy)` pair handed to search heuristics.
    #[inline]
    pub fn delta(self, other: Vec2) -> Self {
        (other - self).abs()
    }

    /// Euclidean distance between two positions.
    #[inline]
    pub fn distance(self, other: Vec2) -> f32 {
        (other - self).length()
    }

    /// Whether both components are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

// --- trait impls for Vec2 ---

impl From<(f32, f32)> for Vec2 {
    #[inline]
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

impl Sub for Vec2 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn vec2_json_shape() {
        let v = Vec2::new(1.5, -2.0);
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, r#"{"x":1.5,"y":-2.0}"#);
    }
}
