// Copyright 2026 the Deboor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Points that can be blended by De Boor's algorithm.

use crate::{Point, Point3, Vec2};

/// A point in a fixed-dimension space that a B-spline can be built on.
///
/// De Boor's algorithm only ever combines two points at a time with
/// weights that sum to one, so that is the only arithmetic required.
///
/// ```
/// use deboor::{ControlPoint, Point};
///
/// let a = Point::new(0.0, 0.0);
/// let b = Point::new(4.0, 2.0);
/// assert_eq!(a.blend(b, 0.25), Point::new(1.0, 0.5));
/// ```
pub trait ControlPoint: Copy {
    /// Compute `(1 - a) * self + a * other`, one coordinate at a time.
    ///
    /// At `a == 0` the result is exactly `self`, and at `a == 1` it is
    /// exactly `other`, for finite inputs.
    fn blend(self, other: Self, a: f64) -> Self;

    /// Whether every coordinate is finite.
    fn is_finite(self) -> bool;
}

#[inline(always)]
fn blend1(x0: f64, x1: f64, a: f64) -> f64 {
    (1.0 - a) * x0 + a * x1
}

impl ControlPoint for f64 {
    #[inline]
    fn blend(self, other: f64, a: f64) -> f64 {
        blend1(self, other, a)
    }

    #[inline]
    fn is_finite(self) -> bool {
        Self::is_finite(self)
    }
}

impl ControlPoint for Point {
    #[inline]
    fn blend(self, other: Point, a: f64) -> Point {
        Point::new(blend1(self.x, other.x, a), blend1(self.y, other.y, a))
    }

    #[inline]
    fn is_finite(self) -> bool {
        Self::is_finite(self)
    }
}

impl ControlPoint for Vec2 {
    #[inline]
    fn blend(self, other: Vec2, a: f64) -> Vec2 {
        Vec2::new(blend1(self.x, other.x, a), blend1(self.y, other.y, a))
    }

    #[inline]
    fn is_finite(self) -> bool {
        Self::is_finite(self)
    }
}

impl ControlPoint for Point3 {
    #[inline]
    fn blend(self, other: Point3, a: f64) -> Point3 {
        Point3::new(
            blend1(self.x, other.x, a),
            blend1(self.y, other.y, a),
            blend1(self.z, other.z, a),
        )
    }

    #[inline]
    fn is_finite(self) -> bool {
        Self::is_finite(self)
    }
}

impl<const N: usize> ControlPoint for [f64; N] {
    #[inline]
    fn blend(self, other: [f64; N], a: f64) -> [f64; N] {
        let mut out = self;
        for (x, y) in out.iter_mut().zip(other) {
            *x = blend1(*x, y, a);
        }
        out
    }

    #[inline]
    fn is_finite(self) -> bool {
        self.iter().all(|x| x.is_finite())
    }
}

#[cfg(test)]
mod tests {
    use super::ControlPoint;
    use crate::{Point, Point3, Vec2};

    #[test]
    fn blend_endpoints_are_exact() {
        let a = Point::new(0.1, 0.7);
        let b = Point::new(1e10, -3.3);
        assert_eq!(a.blend(b, 0.0), a);
        assert_eq!(a.blend(b, 1.0), b);

        let a = [0.1, 0.2, 0.3, 0.4];
        let b = [9.0, 8.0, 7.0, 6.0];
        assert_eq!(a.blend(b, 0.0), a);
        assert_eq!(a.blend(b, 1.0), b);
    }

    #[test]
    fn blend_is_componentwise() {
        assert_eq!(2.0_f64.blend(4.0, 0.5), 3.0);
        assert_eq!(
            Vec2::new(0.0, 10.0).blend(Vec2::new(10.0, 0.0), 0.5),
            Vec2::new(5.0, 5.0)
        );
        assert_eq!(
            Point3::new(0.0, 0.0, 0.0).blend(Point3::new(4.0, 8.0, -4.0), 0.25),
            Point3::new(1.0, 2.0, -1.0)
        );
        assert_eq!([0.0, 2.0].blend([4.0, 6.0], 0.5), [2.0, 4.0]);
    }

    #[test]
    fn finiteness() {
        assert!(ControlPoint::is_finite(1.0_f64));
        assert!(!ControlPoint::is_finite(f64::NAN));
        assert!(!ControlPoint::is_finite(Point::new(0.0, f64::INFINITY)));
        assert!(!ControlPoint::is_finite(Point3::new(0.0, 0.0, f64::NAN)));
        assert!(!ControlPoint::is_finite([1.0, f64::NEG_INFINITY, 0.0]));
        assert!(ControlPoint::is_finite([0.0_f64; 0]));
    }
}
