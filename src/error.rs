// Copyright 2026 the Deboor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported by B-spline evaluation.

use core::error::Error;
use core::fmt;

/// The reasons a B-spline evaluation can fail.
///
/// Every variant is a deterministic property of the inputs; retrying the
/// same call returns the same error. No variant is ever accompanied by a
/// partially computed point.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum BSplineError {
    /// The degree is inconsistent with the number of control points or knots.
    ///
    /// A curve of degree `p` with `n + 1` control points needs `n + p + 2`
    /// knots and `p <= n`.
    InvalidDegree {
        /// The requested degree.
        degree: usize,
        /// The number of control points supplied.
        control_points: usize,
        /// The number of knots supplied.
        knots: usize,
    },
    /// No knot span can be located.
    ///
    /// Either the parameter lies outside the curve's domain or is not
    /// finite, or the knot vector is malformed: it decreases or is not
    /// finite at some knot, or leaves an empty parameter domain.
    KnotSpanNotFound {
        /// The parameter being located; `None` when a curve is rejected on
        /// construction, before any parameter is given.
        u: Option<f64>,
        /// The first knot that makes the knot vector malformed, if any.
        knot: Option<usize>,
    },
    /// A zero-length knot interval was required as a blending denominator.
    DegenerateBasis {
        /// Index of the knot starting the zero-length interval.
        index: usize,
    },
    /// A control point has a NaN or infinite coordinate.
    NonFinitePoint {
        /// Index of the offending control point.
        index: usize,
    },
    /// The sampling options cannot produce a polyline.
    InvalidSampling,
}

impl fmt::Display for BSplineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDegree {
                degree,
                control_points,
                knots,
            } => write!(
                f,
                "Invalid degree {degree} for {control_points} control points and {knots} knots"
            ),
            Self::KnotSpanNotFound { u, knot } => {
                match u {
                    Some(u) => write!(f, "No knot span contains parameter {u}")?,
                    None => write!(f, "No knot span can be located")?,
                }
                match knot {
                    Some(k) => write!(f, ": knot vector is malformed at index {k}"),
                    None => Ok(()),
                }
            }
            Self::DegenerateBasis { index } => {
                write!(f, "Zero-length knot interval starting at index {index}")
            }
            Self::NonFinitePoint { index } => {
                write!(f, "Control point {index} is not finite")
            }
            Self::InvalidSampling => write!(f, "Invalid sampling options"),
        }
    }
}

impl Error for BSplineError {}

impl BSplineError {
    /// The parameter `u` is outside the domain.
    #[inline]
    pub(crate) fn span_not_found(u: f64) -> Self {
        Self::KnotSpanNotFound {
            u: Some(u),
            knot: None,
        }
    }

    /// The knot vector is malformed at knot `index`.
    #[inline]
    pub(crate) fn malformed_knots(index: usize) -> Self {
        Self::KnotSpanNotFound {
            u: None,
            knot: Some(index),
        }
    }

    /// Attach the parameter being evaluated to a span error that lacks one.
    #[must_use]
    pub(crate) fn at(self, u: f64) -> Self {
        match self {
            Self::KnotSpanNotFound { u: None, knot } => Self::KnotSpanNotFound { u: Some(u), knot },
            other => other,
        }
    }
}
