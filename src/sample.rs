// Copyright 2026 the Deboor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Uniform sampling of a curve into a polyline.

use alloc::vec::Vec;

use crate::{BSpline, BSplineError, ControlPoint, Line, Point};

/// Options for sampling a [`BSpline`] into points.
///
/// The number of samples is proportional to the number of control points,
/// since each control point adds roughly one segment's worth of shape.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SampleOpts {
    per_control_point: usize,
    end_nudge: f64,
}

impl Default for SampleOpts {
    fn default() -> Self {
        SampleOpts {
            per_control_point: 50,
            end_nudge: 0.01,
        }
    }
}

impl SampleOpts {
    /// Builder method for setting the number of samples per control point.
    #[must_use]
    pub fn with_per_control_point(mut self, n: usize) -> Self {
        self.per_control_point = n;
        self
    }

    /// Builder method for setting how far below the end of the domain the
    /// final sample is taken, as a fraction of one sampling step.
    ///
    /// Zero samples the end of the domain exactly. Values outside `[0, 1)`
    /// are rejected when sampling.
    #[must_use]
    pub fn with_end_nudge(mut self, nudge: f64) -> Self {
        self.end_nudge = nudge;
        self
    }

    /// The number of samples per control point.
    pub fn per_control_point(&self) -> usize {
        self.per_control_point
    }

    /// The offset of the final sample below the end of the domain, as a
    /// fraction of one sampling step.
    pub fn end_nudge(&self) -> f64 {
        self.end_nudge
    }

    fn check(&self) -> Result<(), BSplineError> {
        if self.per_control_point == 0 || !(0.0..1.0).contains(&self.end_nudge) {
            return Err(BSplineError::InvalidSampling);
        }
        Ok(())
    }
}

impl<P: ControlPoint> BSpline<P> {
    /// The parameters at which [`sample`](Self::sample) evaluates the curve,
    /// in increasing order.
    ///
    /// With `N = per_control_point * points().len()` and
    /// `step = (end - start) / N`, these are `start + i * step` for `i` in
    /// `0..N`, then `end - end_nudge * step`.
    ///
    /// # Errors
    ///
    /// Fails with [`BSplineError::InvalidSampling`] if `per_control_point`
    /// is zero or `end_nudge` is outside `[0, 1)`.
    pub fn sample_params(
        &self,
        opts: &SampleOpts,
    ) -> Result<impl Iterator<Item = f64>, BSplineError> {
        opts.check()?;
        let n = opts
            .per_control_point
            .checked_mul(self.points().len())
            .ok_or(BSplineError::InvalidSampling)?;
        let domain = self.domain();
        let step = (domain.end - domain.start) / n as f64;
        let last = domain.end - opts.end_nudge * step;
        let body = (0..n).map(move |i| domain.start + step * i as f64);
        Ok(body.chain(core::iter::once(last)))
    }

    /// Evaluate the curve at evenly spaced parameters.
    ///
    /// See [`sample_params`](Self::sample_params) for the parameters used.
    /// The points are returned in increasing parameter order.
    ///
    /// ```
    /// use deboor::{BSpline, SampleOpts};
    ///
    /// let line = BSpline::new(vec![0.0, 8.0], vec![0.0, 0.0, 1.0, 1.0], 1).unwrap();
    /// let opts = SampleOpts::default().with_per_control_point(2).with_end_nudge(0.0);
    /// assert_eq!(line.sample(&opts).unwrap(), vec![0.0, 2.0, 4.0, 6.0, 8.0]);
    /// ```
    ///
    /// # Errors
    ///
    /// Fails with [`BSplineError::InvalidSampling`] for unusable options, or
    /// with any error from [`eval`](Self::eval).
    pub fn sample(&self, opts: &SampleOpts) -> Result<Vec<P>, BSplineError> {
        self.sample_params(opts)?.map(|u| self.eval(u)).collect()
    }
}

impl BSpline<Point> {
    /// Approximate a planar curve by line segments joining consecutive
    /// [`sample`](Self::sample)s.
    ///
    /// # Errors
    ///
    /// Fails under the same conditions as [`sample`](Self::sample).
    pub fn to_lines(&self, opts: &SampleOpts) -> Result<Vec<Line>, BSplineError> {
        let pts = self.sample(opts)?;
        Ok(pts.windows(2).map(|w| Line::new(w[0], w[1])).collect())
    }
}
