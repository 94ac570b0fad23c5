// Copyright 2026 the Deboor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! B-spline curves.

use core::ops::Range;

use alloc::vec::Vec;

use crate::deboor::{check_domain, validate};
use crate::knots::find_span_sorted;
use crate::{de_boor, multiplicity, BSplineError, ControlPoint};

/// A non-rational B-spline curve.
///
/// The curve is checked once on construction, so [`eval`](Self::eval) only
/// has to locate the parameter. A `BSpline` is never mutated after it is
/// built, and can be shared between threads and evaluated from all of them
/// at once.
///
/// ```
/// use deboor::{BSpline, Point};
///
/// let curve = BSpline::new(
///     vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0), Point::new(2.0, 0.0)],
///     vec![0.0, 0.0, 0.0, 1.0, 1.0, 1.0],
///     2,
/// )
/// .unwrap();
/// assert_eq!(curve.domain(), 0.0..1.0);
/// assert_eq!(curve.eval(0.5), Ok(Point::new(1.0, 0.5)));
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BSpline<P> {
    points: Vec<P>,
    knots: Vec<f64>,
    degree: usize,
}

impl<P: ControlPoint> BSpline<P> {
    /// Create a new curve of the given degree.
    ///
    /// # Errors
    ///
    /// Fails with [`BSplineError::InvalidDegree`] when the number of knots is
    /// not `points.len() + degree + 1` or `degree >= points.len()`, with
    /// [`BSplineError::KnotSpanNotFound`] when the knots are not finite and
    /// non-decreasing or leave an empty domain, and with
    /// [`BSplineError::NonFinitePoint`] when a control point is not finite.
    pub fn new(points: Vec<P>, knots: Vec<f64>, degree: usize) -> Result<Self, BSplineError> {
        validate(&points, &knots, degree)?;
        Ok(Self {
            points,
            knots,
            degree,
        })
    }

    /// Evaluate the curve at parameter `u`.
    ///
    /// `u` must lie within [`domain`](Self::domain), ends included.
    ///
    /// # Errors
    ///
    /// Fails with [`BSplineError::KnotSpanNotFound`] when `u` is outside the
    /// domain or not finite.
    pub fn eval(&self, u: f64) -> Result<P, BSplineError> {
        let end = self.points.len();
        check_domain(&self.knots, self.degree, end, u)?;
        let span = find_span_sorted(&self.knots[..=end], u);
        let s = multiplicity(&self.knots, u, span);
        de_boor(&self.points, &self.knots, u, self.degree, span, s)
    }

    /// The first point of the curve.
    ///
    /// For a clamped knot vector this is the first control point.
    ///
    /// # Errors
    ///
    /// Only fails if blending overflows to a non-finite value.
    pub fn start(&self) -> Result<P, BSplineError> {
        self.eval(self.domain().start)
    }

    /// The last point of the curve.
    ///
    /// For a clamped knot vector this is the last control point.
    ///
    /// # Errors
    ///
    /// Only fails if blending overflows to a non-finite value.
    pub fn end(&self) -> Result<P, BSplineError> {
        self.eval(self.domain().end)
    }
}

impl<P> BSpline<P> {
    /// The control points.
    #[inline]
    pub fn points(&self) -> &[P] {
        &self.points
    }

    /// The knot vector.
    #[inline]
    pub fn knots(&self) -> &[f64] {
        &self.knots
    }

    /// The polynomial degree of each segment.
    #[inline]
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// The range of parameters the curve is defined over, ends included.
    ///
    /// This is `knots[degree]..knots[n + 1]` for `n + 1` control points;
    /// the range where `degree + 1` basis functions are all defined. For a
    /// clamped knot vector it is the first knot to the last.
    #[inline]
    pub fn domain(&self) -> Range<f64> {
        self.knots[self.degree]..self.knots[self.points.len()]
    }

    /// Whether the first and last knots are each repeated `degree + 1`
    /// times, so the curve starts and ends on its end control points.
    pub fn is_clamped(&self) -> bool {
        let p = self.degree;
        let k = &self.knots;
        let m = k.len() - 1;
        k[..=p].iter().all(|&x| x == k[0]) && k[m - p..].iter().all(|&x| x == k[m])
    }

    /// Consume the curve, returning its control points, knots and degree.
    pub fn into_parts(self) -> (Vec<P>, Vec<f64>, usize) {
        (self.points, self.knots, self.degree)
    }
}

#[cfg(feature = "serde")]
impl<'de, P> serde::Deserialize<'de> for BSpline<P>
where
    P: ControlPoint + serde::Deserialize<'de>,
{
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        #[serde(rename = "BSpline")]
        struct Raw<P> {
            points: Vec<P>,
            knots: Vec<f64>,
            degree: usize,
        }
        let raw = Raw::<P>::deserialize(deserializer)?;
        Self::new(raw.points, raw.knots, raw.degree).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use crate::{BSpline, BSplineError, ControlPoint, Point};

    fn assert_near(p0: Point, p1: Point, epsilon: f64) {
        assert!((p1 - p0).hypot() < epsilon, "{p0:?} != {p1:?}");
    }

    fn knots_for_test() -> Vec<f64> {
        vec![0.0, 0.0, 0.0, 1.0, 2.0, 2.0, 3.0, 3.0, 3.0]
    }

    fn quadratic() -> BSpline<Point> {
        let pts = vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 3.0),
            Point::new(3.0, 4.0),
            Point::new(5.0, 1.0),
            Point::new(6.0, 5.0),
            Point::new(8.0, 0.0),
        ];
        BSpline::new(pts, knots_for_test(), 2).unwrap()
    }

    /// A clamped curve on `[0, 1]` with random control points and random
    /// interior knots kept away from the ends.
    fn random_clamped(rng: &mut StdRng, degree: usize, n_points: usize) -> BSpline<Point> {
        let pts = (0..n_points)
            .map(|_| Point::new(rng.random_range(-10.0..10.0), rng.random_range(-10.0..10.0)))
            .collect();
        let n_interior = n_points - degree - 1;
        let mut interior: Vec<f64> = (0..n_interior)
            .map(|_| rng.random_range(0.1..0.9))
            .collect();
        interior.sort_by(f64::total_cmp);
        let mut knots = vec![0.0; degree + 1];
        knots.extend(interior);
        knots.extend(core::iter::repeat(1.0).take(degree + 1));
        BSpline::new(pts, knots, degree).unwrap()
    }

    #[test]
    fn accessors() {
        let c = quadratic();
        assert_eq!(c.degree(), 2);
        assert_eq!(c.points().len(), 6);
        assert_eq!(c.knots(), &knots_for_test()[..]);
        assert_eq!(c.domain(), 0.0..3.0);
        assert!(c.is_clamped());
        let (pts, knots, degree) = c.clone().into_parts();
        assert_eq!(BSpline::new(pts, knots, degree), Ok(c));
    }

    #[test]
    fn endpoint_interpolation() {
        let c = quadratic();
        assert_eq!(c.eval(0.0), Ok(c.points()[0]));
        assert_eq!(c.eval(3.0), Ok(c.points()[5]));
        assert_eq!(c.start(), Ok(c.points()[0]));
        assert_eq!(c.end(), Ok(c.points()[5]));
    }

    #[test]
    fn matches_checked_evaluation() {
        let c = quadratic();
        for i in 0..=300 {
            let u = 3.0 * i as f64 / 300.0;
            assert_eq!(
                c.eval(u),
                crate::evaluate(c.points(), c.knots(), u, c.degree()),
                "u = {u}"
            );
        }
    }

    #[test]
    fn unclamped_curve() {
        let pts: Vec<f64> = (0..6).map(|i| i as f64).collect();
        let knots: Vec<f64> = (0..10).map(|i| i as f64).collect();
        let c = BSpline::new(pts, knots, 3).unwrap();
        assert!(!c.is_clamped());
        assert_eq!(c.domain(), 3.0..6.0);
        // Uniform cubic with linear control values reproduces a line.
        for i in 0..=30 {
            let u = 3.0 + 3.0 * i as f64 / 30.0;
            let v = c.eval(u).unwrap();
            assert!((v - (u - 2.0)).abs() < 1e-12, "u = {u}, v = {v}");
        }
        assert!((c.start().unwrap() - 1.0).abs() < 1e-12);
        assert!((c.end().unwrap() - 4.0).abs() < 1e-12);
        assert_eq!(
            c.eval(2.0),
            Err(BSplineError::KnotSpanNotFound {
                u: Some(2.0),
                knot: None
            })
        );
    }

    #[test]
    fn construction_errors() {
        assert!(matches!(
            BSpline::new(vec![0.0, 1.0], vec![0.0, 0.0, 1.0, 1.0], 2),
            Err(BSplineError::InvalidDegree { .. })
        ));
        assert_eq!(
            BSpline::new(vec![0.0, 1.0], vec![0.0, 0.0, f64::NAN, 1.0], 1),
            Err(BSplineError::KnotSpanNotFound {
                u: None,
                knot: Some(2)
            })
        );
        assert_eq!(
            BSpline::new(vec![0.0, f64::INFINITY], vec![0.0, 0.0, 1.0, 1.0], 1),
            Err(BSplineError::NonFinitePoint { index: 1 })
        );
    }

    #[test]
    fn degree_one_is_linear_interpolation() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..20 {
            let c = random_clamped(&mut rng, 1, 7);
            let (pts, knots) = (c.points(), c.knots());
            for _ in 0..50 {
                let u = rng.random_range(0.0..1.0);
                let k = knots.partition_point(|&x| x <= u) - 1;
                let t = (u - knots[k]) / (knots[k + 1] - knots[k]);
                let expected = pts[k - 1].blend(pts[k], t);
                assert_near(c.eval(u).unwrap(), expected, 1e-12);
            }
        }
    }

    #[test]
    fn stays_in_convex_hull() {
        // Partition of unity: blending each control point's indicator value
        // recovers its basis function, and those are non-negative and sum
        // to one over the span.
        let mut rng = StdRng::seed_from_u64(2);
        for degree in 1..=5 {
            let c = random_clamped(&mut rng, degree, degree + 6);
            let n = c.points().len();
            for _ in 0..50 {
                let u = rng.random_range(0.0..=1.0);
                let mut sum = 0.0;
                for j in 0..n {
                    let indicator: Vec<f64> =
                        (0..n).map(|i| if i == j { 1.0 } else { 0.0 }).collect();
                    let w = crate::evaluate(&indicator, c.knots(), u, degree).unwrap();
                    assert!(w >= -1e-12, "negative weight {w} at u = {u}");
                    sum += w;
                }
                assert!((sum - 1.0).abs() < 1e-12, "weights sum to {sum} at u = {u}");

                let p = c.eval(u).unwrap();
                let span = c.knots().partition_point(|&x| x <= u).min(n) - 1;
                let hull = &c.points()[span - degree..=span];
                let lo = hull.iter().fold(Point::new(f64::MAX, f64::MAX), |m, q| {
                    Point::new(m.x.min(q.x), m.y.min(q.y))
                });
                let hi = hull.iter().fold(Point::new(f64::MIN, f64::MIN), |m, q| {
                    Point::new(m.x.max(q.x), m.y.max(q.y))
                });
                assert!(p.x >= lo.x - 1e-9 && p.x <= hi.x + 1e-9, "{p:?} outside x hull");
                assert!(p.y >= lo.y - 1e-9 && p.y <= hi.y + 1e-9, "{p:?} outside y hull");
            }
        }
    }

    #[test]
    fn random_endpoints_are_exact() {
        let mut rng = StdRng::seed_from_u64(3);
        for degree in 1..=6 {
            let c = random_clamped(&mut rng, degree, degree + 4);
            let last = *c.points().last().unwrap();
            assert_eq!(c.eval(0.0), Ok(c.points()[0]));
            assert_eq!(c.eval(1.0), Ok(last));
            // Continuous approach to the upper bound.
            assert_near(c.eval(1.0 - 1e-12).unwrap(), last, 1e-8);
            assert_near(c.eval(1e-12).unwrap(), c.points()[0], 1e-8);
        }
    }

    #[test]
    fn concurrent_evaluation() {
        let c = quadratic();
        let expected: Vec<Point> = (0..=100).map(|i| c.eval(0.03 * i as f64).unwrap()).collect();
        std::thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(|| {
                    for (i, want) in expected.iter().enumerate() {
                        assert_eq!(c.eval(0.03 * i as f64).as_ref(), Ok(want));
                    }
                });
            }
        });
    }
}
