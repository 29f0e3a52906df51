// Copyright 2025 the Ringlet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recursively rippled closed curves.
//!
//! The ringlet library generates a family of closed parametric curves built
//! by displacing a base unit circle along its local normal direction, once
//! per recursion level. The first two levels have closed-form trigonometric
//! solutions; higher levels are built numerically from the previous level's
//! finite-difference normal.
//!
//! # Examples
//!
//! Generating the default curve (order 2, `alpha` 0.3, `omega` 4):
//! ```
//! use ringlet::{Fractal, RippleParams};
//!
//! let fractal = Fractal::generate(RippleParams::default());
//! assert_eq!(fractal.curve.len(), 20000);
//! // The previous-order curve is returned for reference overlays.
//! assert_eq!(fractal.prev.len(), 20000);
//! ```
//!
//! With `alpha` at zero every ripple vanishes and the curve collapses to the
//! unit circle:
//! ```
//! use ringlet::{Fractal, Point, RippleParams};
//!
//! let params = RippleParams::new(0.0, 4.0, 3);
//! let fractal = Fractal::generate(params);
//! let start = fractal.curve[0];
//! assert!(start.distance(Point::new(1.0, 0.0)) < 1e-9);
//! ```
//!
//! # Features
//!
//! This crate either uses the standard library or the [`libm`] crate for
//! math functionality. The `std` feature is enabled by default, but can be
//! disabled, as long as the `libm` feature is enabled. This is useful for
//! `no_std` environments. However, note that the `libm` crate is not as
//! efficient as the standard library, and that this crate still uses the
//! `alloc` crate regardless.
//!
//! [`libm`]: https://docs.rs/libm

#![forbid(unsafe_code)]
#![deny(missing_docs, clippy::trivially_copy_pass_by_ref)]
#![warn(clippy::doc_markdown, rustdoc::broken_intra_doc_links)]
#![warn(clippy::semicolon_if_nothing_returned)]
#![warn(unused_qualifications)]
#![allow(clippy::unreadable_literal, clippy::many_single_char_names)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("ringlet requires either the `std` or `libm` feature");

extern crate alloc;

mod analytic;
pub mod common;
mod fractal;
mod params;
mod point;
mod sample;
pub mod svg;
mod vec2;

pub use crate::analytic::*;
pub use crate::fractal::*;
pub use crate::params::*;
pub use crate::point::*;
pub use crate::sample::*;
pub use crate::vec2::*;
