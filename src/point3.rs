// Copyright 2026 the Deboor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A 3D point.

use core::fmt;

use crate::common::tolerance;
use crate::Point;

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// A 3D point.
///
/// Drawing exchange formats store spline control points in three
/// dimensions even for planar drawings; this type lets such curves be
/// evaluated without first dropping a coordinate.
#[derive(Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point3 {
    /// The x coordinate.
    pub x: f64,
    /// The y coordinate.
    pub y: f64,
    /// The z coordinate.
    pub z: f64,
}

impl Point3 {
    /// The point (0, 0, 0).
    pub const ORIGIN: Point3 = Point3::new(0., 0., 0.);

    /// Create a new `Point3` with the provided coordinates.
    #[inline(always)]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Point3 { x, y, z }
    }

    /// Project onto the xy plane.
    #[inline(always)]
    pub const fn to_point(self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Euclidean distance.
    #[inline]
    pub fn distance(self, other: Point3) -> f64 {
        let (dx, dy, dz) = (self.x - other.x, self.y - other.y, self.z - other.z);
        dx.hypot(dy).hypot(dz)
    }

    /// Is this point finite?
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Whether two points are within `accuracy` of each other.
    ///
    /// See [`Point::is_near`].
    pub fn is_near(self, other: Point3, accuracy: f64) -> bool {
        if !self.is_finite() || !other.is_finite() {
            return self == other;
        }
        let max = [self.x, self.y, self.z, other.x, other.y, other.z]
            .iter()
            .fold(0.0_f64, |m, c| m.max(c.abs()));
        self.distance(other) <= tolerance(max, accuracy)
    }
}

impl From<(f64, f64, f64)> for Point3 {
    #[inline(always)]
    fn from(v: (f64, f64, f64)) -> Point3 {
        Point3::new(v.0, v.1, v.2)
    }
}

impl From<Point3> for (f64, f64, f64) {
    #[inline(always)]
    fn from(v: Point3) -> (f64, f64, f64) {
        (v.x, v.y, v.z)
    }
}

impl From<Point> for Point3 {
    /// Lift a planar point onto the `z = 0` plane.
    #[inline(always)]
    fn from(p: Point) -> Point3 {
        Point3::new(p.x, p.y, 0.0)
    }
}

impl fmt::Debug for Point3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?}, {:?}, {:?})", self.x, self.y, self.z)
    }
}

impl fmt::Display for Point3 {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "(")?;
        fmt::Display::fmt(&self.x, formatter)?;
        write!(formatter, ", ")?;
        fmt::Display::fmt(&self.y, formatter)?;
        write!(formatter, ", ")?;
        fmt::Display::fmt(&self.z, formatter)?;
        write!(formatter, ")")
    }
}

#[cfg(feature = "mint")]
impl From<Point3> for mint::Point3<f64> {
    #[inline(always)]
    fn from(p: Point3) -> mint::Point3<f64> {
        mint::Point3 {
            x: p.x,
            y: p.y,
            z: p.z,
        }
    }
}

#[cfg(feature = "mint")]
impl From<mint::Point3<f64>> for Point3 {
    #[inline(always)]
    fn from(p: mint::Point3<f64>) -> Point3 {
        Point3::new(p.x, p.y, p.z)
    }
}
