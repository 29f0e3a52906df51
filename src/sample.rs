// Copyright 2025 the Ringlet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parameter sampling for curve generation.

use alloc::vec::Vec;
use core::f64::consts::TAU;

/// Number of parameter samples per recursion level.
///
/// Higher orders apply more finite-difference passes, so they get a
/// proportionally denser sample to keep the discretization noise bounded.
pub const SAMPLES_PER_ORDER: usize = 10_000;

/// Uniform samples of the curve parameter over one full turn.
///
/// Returns `SAMPLES_PER_ORDER * order` values spanning `[0, 2π]`, endpoint
/// included, so a sampled closed curve begins and ends at (nearly) the same
/// point.
pub fn param_samples(order: usize) -> Vec<f64> {
    let n = SAMPLES_PER_ORDER * order;
    let dt = TAU / (n as f64 - 1.0);
    let mut t: Vec<f64> = (0..n).map(|i| i as f64 * dt).collect();
    if let Some(last) = t.last_mut() {
        // Pin the endpoint; accumulated roundoff in `i * dt` would
        // otherwise leave it slightly off 2π.
        *last = TAU;
    }
    t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_count_scales_with_order() {
        for order in 1..=4 {
            assert_eq!(param_samples(order).len(), SAMPLES_PER_ORDER * order);
        }
    }

    #[test]
    fn spans_full_turn() {
        let t = param_samples(1);
        assert_eq!(t[0], 0.0);
        assert_eq!(*t.last().unwrap(), TAU);
    }

    #[test]
    fn uniform_spacing() {
        let t = param_samples(2);
        let dt = t[1] - t[0];
        for w in t.windows(2).take(1000) {
            assert!((w[1] - w[0] - dt).abs() < 1e-12, "spacing drifted");
        }
    }
}
