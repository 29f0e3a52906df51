// Copyright 2025 the Ringlet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The generic order-k ripple fractal generator.

use alloc::vec::Vec;

use crate::{analytic_order1, analytic_order2, param_samples, Point, RippleParams};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// A generated ripple fractal.
///
/// Both curves are sampled over the same parameter values (see
/// [`param_samples`]) and are closed: the first and last points coincide up
/// to roundoff.
#[derive(Clone, Debug, PartialEq)]
pub struct Fractal {
    /// The curve at the requested order.
    pub curve: Vec<Point>,
    /// The curve one order below, for reference overlays.
    ///
    /// Empty at order 1; there is no order-0 curve.
    pub prev: Vec<Point>,
}

impl Fractal {
    /// Generate the fractal for the given parameters.
    ///
    /// Orders 1 and 2 are exact ([`analytic_order1`], [`analytic_order2`]).
    /// For higher orders, each level `k` in `3..=order` displaces the
    /// previous level's curve along its discrete unit normal by the ripple
    /// `alpha^(k-1) · cos(omega^(k-1) · t)`. The normal comes from a forward
    /// finite difference that wraps around, preserving closure.
    ///
    /// The finite-difference normal is an approximation that accumulates
    /// discretization error with each level, and `omega^(k-1)` eventually
    /// outruns the fixed sample density. Both effects are part of the
    /// curve family's definition; an analytic derivative does not exist
    /// beyond order 2.
    ///
    /// This is a pure function of its parameters: identical parameters give
    /// bitwise-identical output. Degenerate inputs (zero-length tangent
    /// segments, or `alpha` ≥ 1 at order 2) propagate as NaN coordinates
    /// rather than errors.
    pub fn generate(params: RippleParams) -> Fractal {
        let RippleParams {
            alpha,
            omega,
            order,
        } = params;
        let t = param_samples(order);

        match order {
            0 | 1 => Fractal {
                curve: analytic_order1(alpha, omega, &t),
                prev: Vec::new(),
            },
            2 => Fractal {
                curve: analytic_order2(alpha, omega, &t),
                prev: analytic_order1(alpha, omega, &t),
            },
            _ => {
                let mut curve = analytic_order2(alpha, omega, &t);
                let mut prev = Vec::new();
                for k in 3..=order {
                    let amplitude = alpha.powi(k as i32 - 1);
                    let frequency = omega.powi(k as i32 - 1);
                    let next = displace_along_normal(&curve, |i| {
                        amplitude * (frequency * t[i]).cos()
                    });
                    prev = curve;
                    curve = next;
                }
                Fractal { curve, prev }
            }
        }
    }

    /// The largest absolute coordinate of the curve.
    ///
    /// Interactive callers size a square viewport to a small multiple of
    /// this. NaN coordinates are skipped.
    pub fn bounding_radius(&self) -> f64 {
        self.curve
            .iter()
            .map(|p| p.x.abs().max(p.y.abs()))
            .fold(0.0, f64::max)
    }
}

/// Displace every point of a closed sampled curve along its discrete unit
/// outward normal by `offset(i)`.
///
/// The tangent at sample `i` is the forward difference to sample `i + 1`,
/// with the last sample differencing against the first. Where consecutive
/// samples coincide the normal is NaN, and so is the displaced point.
fn displace_along_normal(curve: &[Point], offset: impl Fn(usize) -> f64) -> Vec<Point> {
    let n = curve.len();
    (0..n)
        .map(|i| {
            let tangent = curve[(i + 1) % n] - curve[i];
            let normal = tangent.turn_90_cw().normalize();
            curve[i] + normal * offset(i)
        })
        .collect()
}
