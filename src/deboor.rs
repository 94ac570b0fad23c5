// Copyright 2026 the Deboor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! De Boor's algorithm.

use smallvec::SmallVec;

use crate::knots::check_sorted;
use crate::{find_span, multiplicity, BSplineError, ControlPoint};

/// Degrees up to this value blend without a heap allocation.
const INLINE_DEGREE: usize = 7;

/// Evaluate the B-spline curve defined by `points`, `knots` and `degree` at
/// parameter `u`.
///
/// This checks every input on every call. When evaluating the same curve
/// many times, build a [`BSpline`](crate::BSpline) once and call
/// [`BSpline::eval`](crate::BSpline::eval) instead.
///
/// ```
/// use deboor::{evaluate, Point};
///
/// let points = [Point::new(0.0, 0.0), Point::new(1.0, 2.0), Point::new(3.0, 3.0), Point::new(4.0, 0.0)];
/// let knots = [0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0];
/// assert_eq!(evaluate(&points, &knots, 0.0, 3), Ok(points[0]));
/// assert_eq!(evaluate(&points, &knots, 1.0, 3), Ok(points[3]));
/// assert_eq!(evaluate(&points, &knots, 0.5, 3), Ok(Point::new(2.0, 1.875)));
/// ```
///
/// # Errors
///
/// - [`BSplineError::InvalidDegree`] if there are no control points,
///   `degree >= points.len()`, or `knots.len() != points.len() + degree + 1`.
/// - [`BSplineError::KnotSpanNotFound`] if `u` is outside the domain, or
///   the knots are not finite and non-decreasing, or the parameter domain
///   is empty.
/// - [`BSplineError::NonFinitePoint`] if a control point is not finite.
/// - [`BSplineError::DegenerateBasis`] if blending meets a zero-length
///   knot interval.
pub fn evaluate<P: ControlPoint>(
    points: &[P],
    knots: &[f64],
    u: f64,
    degree: usize,
) -> Result<P, BSplineError> {
    validate(points, knots, degree).map_err(|e| e.at(u))?;
    let end = points.len();
    check_domain(knots, degree, end, u)?;
    let span = find_span(&knots[..=end], u)?;
    let s = multiplicity(knots, u, span);
    de_boor(points, knots, u, degree, span, s)
}

/// Blend control points down to the curve point at `u`.
///
/// `span` is the knot span containing `u` (see [`find_span`]) and
/// `multiplicity` the number of knots equal to `u` at that span (see
/// [`multiplicity`]). A knot of multiplicity `s` needs only `degree - s`
/// blending levels; multiplicities above `degree` are treated as `degree`,
/// which returns a control point directly.
///
/// The levels of the triangular table are swept in place over a single
/// buffer of `degree + 1` points, highest index first, so each entry still
/// holds the previous level when its neighbor reads it.
///
/// # Errors
///
/// - [`BSplineError::KnotSpanNotFound`] if `u` is not finite, or `span`
///   does not select `degree + 1` control points and the knots they need.
/// - [`BSplineError::DegenerateBasis`] if a blending denominator
///   `knots[i + degree - r + 1] - knots[i]` is zero.
/// - [`BSplineError::NonFinitePoint`] if the result would not be finite.
pub fn de_boor<P: ControlPoint>(
    points: &[P],
    knots: &[f64],
    u: f64,
    degree: usize,
    span: usize,
    multiplicity: usize,
) -> Result<P, BSplineError> {
    let p = degree;
    if !u.is_finite() || span < p || span >= points.len() || span + p >= knots.len() {
        return Err(BSplineError::span_not_found(u));
    }
    let s = multiplicity.min(p);
    let base = span - p;
    let mut d: SmallVec<[P; INLINE_DEGREE + 1]> = SmallVec::from_slice(&points[base..=span]);
    for r in 1..=p - s {
        for i in (base + r..=span - s).rev() {
            let denom = knots[i + p - r + 1] - knots[i];
            if denom == 0.0 {
                return Err(BSplineError::DegenerateBasis { index: i });
            }
            let a = (u - knots[i]) / denom;
            let j = i - base;
            d[j] = d[j - 1].blend(d[j], a);
        }
    }
    let result = d[p - s];
    if !result.is_finite() {
        let index = points[base..=span]
            .iter()
            .position(|pt| !pt.is_finite())
            .map_or(span, |j| base + j);
        return Err(BSplineError::NonFinitePoint { index });
    }
    Ok(result)
}

/// Check the shape and values of a curve definition.
pub(crate) fn validate<P: ControlPoint>(
    points: &[P],
    knots: &[f64],
    degree: usize,
) -> Result<(), BSplineError> {
    if degree >= points.len() || knots.len() != points.len() + degree + 1 {
        return Err(BSplineError::InvalidDegree {
            degree,
            control_points: points.len(),
            knots: knots.len(),
        });
    }
    check_sorted(knots)?;
    // The domain [knots[degree], knots[n + 1]] must contain a span.
    let end = points.len();
    if knots[degree] >= knots[end] {
        return Err(BSplineError::malformed_knots(end));
    }
    if let Some(index) = points.iter().position(|pt| !pt.is_finite()) {
        return Err(BSplineError::NonFinitePoint { index });
    }
    Ok(())
}

/// Check that `u` is in `[knots[degree], knots[end]]`, where `end` is the
/// number of control points.
#[inline]
pub(crate) fn check_domain(
    knots: &[f64],
    degree: usize,
    end: usize,
    u: f64,
) -> Result<(), BSplineError> {
    if knots[degree] <= u && u <= knots[end] {
        Ok(())
    } else {
        Err(BSplineError::span_not_found(u))
    }
}
