// Copyright 2026 the Deboor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! B-spline curves, evaluated with De Boor's algorithm.
//!
//! A B-spline curve of degree `p` is defined by `n + 1` control points and
//! a non-decreasing knot vector of `n + p + 2` parameter values. Evaluating
//! the curve at a parameter happens in three steps:
//!
//! 1. [`find_span`] locates the knot interval containing the parameter,
//! 2. [`multiplicity`] counts how many knots sit exactly on the parameter,
//! 3. [`de_boor`] blends the `p + 1` control points that influence that
//!    interval down to a single point.
//!
//! [`evaluate`] runs all three with full input checking. [`BSpline`] checks
//! its inputs once on construction and is cheaper to evaluate repeatedly.
//! Every failure is reported as a [`BSplineError`]; no evaluation ever
//! returns a NaN or infinite point.
//!
//! Control points can be any [`ControlPoint`]: [`f64`], [`Point`], [`Vec2`],
//! [`Point3`] or an `[f64; N]` array.
//!
//! # Examples
//!
//! A single clamped cubic segment is a Bézier curve:
//! ```
//! use deboor::{BSpline, Point};
//!
//! let curve = BSpline::new(
//!     vec![
//!         Point::new(0.0, 0.0),
//!         Point::new(1.0, 2.0),
//!         Point::new(3.0, 3.0),
//!         Point::new(4.0, 0.0),
//!     ],
//!     vec![0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0],
//!     3,
//! )
//! .unwrap();
//! assert_eq!(curve.eval(0.0), Ok(Point::new(0.0, 0.0)));
//! assert_eq!(curve.eval(0.5), Ok(Point::new(2.0, 1.875)));
//! assert_eq!(curve.eval(1.0), Ok(Point::new(4.0, 0.0)));
//! ```
//!
//! Approximating a curve by line segments, then placing them in another
//! coordinate system:
//! ```
//! use deboor::{BSpline, Point, SampleOpts, TranslateScale, Vec2};
//!
//! let curve = BSpline::new(
//!     vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0), Point::new(2.0, 0.0)],
//!     vec![0.0, 0.0, 0.0, 1.0, 1.0, 1.0],
//!     2,
//! )
//! .unwrap();
//! let to_mm = TranslateScale::new(Vec2::new(100.0, 100.0), 25.4);
//! let lines: Vec<_> = curve
//!     .to_lines(&SampleOpts::default())?
//!     .into_iter()
//!     .map(|line| to_mm * line)
//!     .collect();
//! assert_eq!(lines.len(), 150);
//! assert_eq!(lines[0].p0, Point::new(100.0, 100.0));
//! # Ok::<(), deboor::BSplineError>(())
//! ```
//!
//! # Features
//!
//! This crate either uses the standard library or the [`libm`] crate for
//! math functionality. The `std` feature is enabled by default, but can be
//! disabled, as long as the `libm` feature is enabled. This is useful for
//! `no_std` environments. This crate still uses the `alloc` crate
//! regardless.
//!
//! The `mint` feature adds conversions to and from the [`mint`] types, and
//! `serde` and `schemars` derive serialization and JSON schemas for the
//! value types.
//!
//! [`libm`]: https://docs.rs/libm
//! [`mint`]: https://docs.rs/mint

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("deboor requires either the `std` or `libm` feature");

extern crate alloc;

mod bspline;
mod common;
mod control_point;
mod deboor;
mod error;
mod knots;
mod line;
mod point;
mod point3;
mod sample;
mod translate_scale;
mod vec2;

pub use crate::bspline::*;
pub use crate::control_point::*;
pub use crate::deboor::{de_boor, evaluate};
pub use crate::error::*;
pub use crate::knots::{find_span, multiplicity};
pub use crate::line::*;
pub use crate::point::*;
pub use crate::point3::*;
pub use crate::sample::*;
pub use crate::translate_scale::*;
pub use crate::vec2::*;
