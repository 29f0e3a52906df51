// Copyright 2025 the Ringlet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Closed-form solutions for the first two recursion levels.
//!
//! Order 1 is a unit circle with a single cosine ripple. Order 2 displaces
//! the order-1 curve along its local normal, which is still available in
//! closed form because the order-1 derivative is analytic. No closed form
//! exists beyond order 2; see [`Fractal::generate`](crate::Fractal::generate)
//! for the numerical continuation.

use alloc::vec::Vec;

use crate::Point;

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// The exact order-1 curve sampled over `t`.
///
/// Each sample is a point of the unit circle with its radius modulated by a
/// cosine ripple of amplitude `alpha` and angular frequency `omega`:
///
/// ```text
/// x = cos(t) · (1 + alpha·cos(omega·t))
/// y = sin(t) · (1 + alpha·cos(omega·t))
/// ```
///
/// Total over all real inputs; no error cases.
pub fn analytic_order1(alpha: f64, omega: f64, t: &[f64]) -> Vec<Point> {
    t.iter()
        .map(|&t| {
            let (s, c) = t.sin_cos();
            let z = alpha * (omega * t).cos();
            Point::new(c * (1.0 + z), s * (1.0 + z))
        })
        .collect()
}

/// The exact order-2 curve sampled over `t`.
///
/// Displaces the order-1 curve along its analytic local normal by a second
/// ripple with amplitude `alpha²` and frequency `omega²`. The normalization
/// term can only vanish for `alpha` ≥ 1, in which case the affected samples
/// silently come out large or NaN; callers in the expected parameter range
/// (`alpha` < 1) never hit this.
pub fn analytic_order2(alpha: f64, omega: f64, t: &[f64]) -> Vec<Point> {
    let alpha2 = alpha * alpha;
    let omega2 = omega * omega;
    t.iter()
        .map(|&t| {
            let (s, c) = t.sin_cos();

            // Order-1 ripple and its derivative with respect to t.
            let z1 = alpha * (omega * t).cos();
            let z1p = -alpha * omega * (omega * t).sin();

            let z2 = alpha2 * (omega2 * t).cos();

            // Magnitude of the order-1 tangent, normalizing the offset.
            let n1 = (z1p * z1p + (1.0 + z1) * (1.0 + z1)).sqrt();

            let r = 1.0 + z1;
            let q = z2 / n1;
            Point::new(
                r * (1.0 + q) * c + q * z1p * s,
                -q * z1p * c + r * (1.0 + q) * s,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::param_samples;
    use core::f64::consts::{FRAC_PI_2, PI};

    fn assert_near(p: Point, q: Point) {
        assert!(p.distance(q) < 1e-12, "{p:?} != {q:?}");
    }

    #[test]
    fn order1_known_values() {
        let t = [0.0, FRAC_PI_2];
        let curve = analytic_order1(0.3, 4.0, &t);
        // cos(0)·(1 + 0.3·cos(0)) = 1.3.
        assert_near(curve[0], Point::new(1.3, 0.0));
        // At π/2 the ripple has completed a full period: sin(π/2)·1.3.
        assert_near(curve[1], Point::new(0.0, 1.3));
    }

    #[test]
    fn order1_matches_formula_pointwise() {
        let t = param_samples(1);
        let curve = analytic_order1(0.3, 4.0, &t);
        for (&t, &p) in t.iter().zip(&curve).step_by(97) {
            let z = 0.3 * (4.0 * t).cos();
            assert_near(p, Point::new(t.cos() * (1.0 + z), t.sin() * (1.0 + z)));
        }
    }

    #[test]
    fn order2_alpha_zero_is_unit_circle() {
        let t = param_samples(1);
        for (&t, &p) in t.iter().zip(&analytic_order2(0.0, 5.0, &t)).step_by(53) {
            assert_near(p, Point::new(t.cos(), t.sin()));
        }
    }

    #[test]
    fn order2_at_ripple_peak() {
        // At t = 0 both ripples peak: z1 = a, z1' = 0, z2 = a², n1 = 1 + a,
        // so the point sits at (1 + a)(1 + a²/(1 + a)) = 1 + a + a² on the
        // x axis.
        let a = 0.3;
        let curve = analytic_order2(a, 4.0, &[0.0]);
        assert_near(curve[0], Point::new(1.0 + a + a * a, 0.0));
    }

    #[test]
    fn order2_closes() {
        let t = param_samples(2);
        let curve = analytic_order2(0.3, 4.0, &t);
        assert!(curve[0].distance(*curve.last().unwrap()) < 1e-9);
    }

    #[test]
    fn order2_is_normal_offset_of_order1() {
        // The offset distance from the order-1 curve must be |z2| at every
        // sample, since displacement happens along a unit normal.
        let t = param_samples(1);
        let c1 = analytic_order1(0.4, 3.0, &t);
        let c2 = analytic_order2(0.4, 3.0, &t);
        for ((&t, &p1), &p2) in t.iter().zip(&c1).zip(&c2).step_by(71) {
            let z2 = 0.4 * 0.4 * (9.0 * t).cos();
            assert!(
                (p1.distance(p2) - z2.abs()).abs() < 1e-12,
                "offset magnitude mismatch at t = {t}"
            );
        }
    }

    #[test]
    fn order2_finite_at_half_turn() {
        // Sanity check away from the peaks.
        let curve = analytic_order2(0.3, 4.0, &[PI]);
        assert!(curve[0].is_finite());
    }
}
