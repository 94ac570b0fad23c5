// Copyright 2026 the Deboor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Knot vector queries: span location and knot multiplicity.

use crate::BSplineError;

/// Find the knot span containing `u`.
///
/// Returns the index `i` with `knots[i] <= u < knots[i + 1]`. The domain
/// is closed at the top: when `u` equals the last knot, the result is the
/// start of the last span of non-zero length, so clamped knot vectors
/// (whose final knot is repeated) resolve to the span that ends at `u`.
///
/// ```
/// let knots = [0.0, 0.0, 0.0, 1.0, 2.0, 2.0, 3.0, 3.0, 3.0];
/// assert_eq!(deboor::find_span(&knots, 1.5), Ok(3));
/// assert_eq!(deboor::find_span(&knots, 3.0), Ok(5));
/// ```
///
/// # Errors
///
/// Returns [`BSplineError::KnotSpanNotFound`] if `u` is not finite or lies
/// outside `[knots[0], knots[last]]`, or if no span can be found because the
/// knot vector is malformed.
pub fn find_span(knots: &[f64], u: f64) -> Result<usize, BSplineError> {
    let not_found = BSplineError::span_not_found(u);
    let (Some(&first), Some(&last)) = (knots.first(), knots.last()) else {
        return Err(not_found);
    };
    if !(first <= u && u <= last) {
        return Err(not_found);
    }
    if let Some(i) = knots.windows(2).position(|w| w[0] <= u && u < w[1]) {
        return Ok(i);
    }
    if u == last {
        if let Some(i) = knots.windows(2).rposition(|w| w[0] < w[1]) {
            return Ok(i);
        }
    }
    Err(not_found)
}

/// Binary search version of [`find_span`] for knot vectors that are known
/// to be non-decreasing.
///
/// `u` must lie in `[knots[0], knots[last]]` and the knot vector must have
/// at least one span of non-zero length.
pub(crate) fn find_span_sorted(knots: &[f64], u: f64) -> usize {
    let last = knots.len() - 1;
    if u >= knots[last] {
        // The closed upper end; step back over the repeated final knots.
        let run = knots.partition_point(|&k| k < knots[last]);
        return run - 1;
    }
    knots.partition_point(|&k| k <= u) - 1
}

/// Count the knots equal to `u` in the run of equal knots containing `i`.
///
/// Returns 0 when `knots[i] != u` (or `i` is out of range), since
/// multiplicity only has meaning when the parameter lands on a knot. The
/// count is the same wherever `i` falls within the run.
///
/// ```
/// let knots = [0.0, 0.0, 0.0, 1.0, 2.0, 2.0, 3.0, 3.0, 3.0];
/// assert_eq!(deboor::multiplicity(&knots, 2.0, 4), 2);
/// assert_eq!(deboor::multiplicity(&knots, 2.0, 5), 2);
/// assert_eq!(deboor::multiplicity(&knots, 0.0, 1), 3);
/// assert_eq!(deboor::multiplicity(&knots, 1.5, 3), 0);
/// ```
pub fn multiplicity(knots: &[f64], u: f64, i: usize) -> usize {
    if knots.get(i) != Some(&u) {
        return 0;
    }
    let before = knots[..i].iter().rev().take_while(|&&k| k == u).count();
    let after = knots[i + 1..].iter().take_while(|&&k| k == u).count();
    before + 1 + after
}

/// Check that a knot vector is finite and non-decreasing.
///
/// # Errors
///
/// Returns [`BSplineError::KnotSpanNotFound`] naming the first knot that is
/// not finite or is smaller than its predecessor.
pub(crate) fn check_sorted(knots: &[f64]) -> Result<(), BSplineError> {
    if let Some(index) = knots.iter().position(|k| !k.is_finite()) {
        return Err(BSplineError::malformed_knots(index));
    }
    match knots.windows(2).position(|w| w[0] > w[1]) {
        Some(i) => Err(BSplineError::malformed_knots(i + 1)),
        None => Ok(()),
    }
}
