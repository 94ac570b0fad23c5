// Copyright 2026 the Deboor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placing sampled curves in drawing units.

use core::ops::Mul;

use crate::{Line, Point, Vec2};

/// A uniform scale followed by a translation.
///
/// A point `p` maps to `scale * p + translation`. Sampled polylines are
/// usually built in curve coordinates and then moved into a drawing's units
/// with one of these.
///
/// Transforms compose like matrices: `a * b` applies `b` first, so
/// `TranslateScale::scale(2.0) * TranslateScale::translate(Vec2::new(1.0, 0.0))`
/// translates by (2, 0).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TranslateScale {
    translation: Vec2,
    scale: f64,
}

impl TranslateScale {
    /// The transform that leaves every point in place.
    pub const IDENTITY: TranslateScale = TranslateScale::scale(1.0);

    /// Scale by `scale`, then translate by `translation`.
    #[inline(always)]
    pub const fn new(translation: Vec2, scale: f64) -> TranslateScale {
        TranslateScale { translation, scale }
    }

    /// Scale about the origin.
    #[inline(always)]
    pub const fn scale(s: f64) -> TranslateScale {
        TranslateScale::new(Vec2::ZERO, s)
    }

    /// Translate without scaling.
    #[inline(always)]
    pub const fn translate(translation: Vec2) -> TranslateScale {
        TranslateScale::new(translation, 1.0)
    }

    /// The transform that undoes this one.
    ///
    /// A zero scale has no inverse and yields non-finite values.
    #[must_use]
    #[inline]
    pub fn inverse(self) -> TranslateScale {
        let s = self.scale.recip();
        TranslateScale::new(self.translation * -s, s)
    }

    /// Whether the scale and translation are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.translation.is_finite() && self.scale.is_finite()
    }
}

impl Default for TranslateScale {
    #[inline(always)]
    fn default() -> TranslateScale {
        TranslateScale::IDENTITY
    }
}

impl Mul<Point> for TranslateScale {
    type Output = Point;

    #[inline]
    fn mul(self, p: Point) -> Point {
        (self.scale * p.to_vec2()).to_point() + self.translation
    }
}

impl Mul for TranslateScale {
    type Output = TranslateScale;

    #[inline]
    fn mul(self, other: TranslateScale) -> TranslateScale {
        TranslateScale::new(
            self.translation + self.scale * other.translation,
            self.scale * other.scale,
        )
    }
}

impl Mul<Line> for TranslateScale {
    type Output = Line;

    #[inline]
    fn mul(self, line: Line) -> Line {
        Line::new(self * line.p0, self * line.p1)
    }
}
