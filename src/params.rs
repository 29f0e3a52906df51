// Copyright 2025 the Ringlet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The three scalar parameters controlling a ripple fractal.

/// Parameters for generating a ripple fractal.
///
/// The generator itself accepts these values as-is; the clamping rules below
/// are applied by the stepping methods, which exist for interactive callers
/// that adjust one parameter at a time. Behavior outside the clamped ranges
/// is unspecified (see [`RippleParams::ALPHA_MIN`]).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RippleParams {
    /// Perturbation amplitude, scaled to `alpha^(k-1)` at recursion level `k`.
    pub alpha: f64,
    /// Perturbation angular frequency, scaled to `omega^(k-1)` at level `k`.
    pub omega: f64,
    /// Recursion depth; the number of perturbation layers applied to the
    /// base unit circle.
    pub order: usize,
}

impl RippleParams {
    /// The smallest `alpha` reachable by stepping.
    ///
    /// For `alpha` below 1 the order-2 normalization term is bounded away
    /// from zero; for `alpha` ≥ 1 it can vanish at isolated phase points,
    /// silently producing large or NaN coordinates. That range is accepted,
    /// not rejected.
    pub const ALPHA_MIN: f64 = 0.05;

    /// The increment applied by [`step_alpha`](RippleParams::step_alpha).
    pub const ALPHA_STEP: f64 = 0.05;

    /// The smallest `omega` reachable by stepping.
    pub const OMEGA_MIN: f64 = 1.0;

    /// The smallest meaningful recursion depth.
    pub const ORDER_MIN: usize = 1;

    /// Create parameters from raw values, unclamped.
    #[inline]
    pub const fn new(alpha: f64, omega: f64, order: usize) -> Self {
        RippleParams {
            alpha,
            omega,
            order,
        }
    }

    /// Step `alpha` up (`steps` > 0) or down, clamping at
    /// [`ALPHA_MIN`](RippleParams::ALPHA_MIN).
    #[inline]
    pub fn step_alpha(self, steps: i32) -> Self {
        let alpha = self.alpha + f64::from(steps) * Self::ALPHA_STEP;
        RippleParams {
            alpha: alpha.max(Self::ALPHA_MIN),
            ..self
        }
    }

    /// Step `omega` up or down by whole units, clamping at
    /// [`OMEGA_MIN`](RippleParams::OMEGA_MIN).
    #[inline]
    pub fn step_omega(self, steps: i32) -> Self {
        let omega = self.omega + f64::from(steps);
        RippleParams {
            omega: omega.max(Self::OMEGA_MIN),
            ..self
        }
    }

    /// Step the recursion depth up or down, clamping at
    /// [`ORDER_MIN`](RippleParams::ORDER_MIN).
    #[inline]
    pub fn step_order(self, steps: i32) -> Self {
        let order = self.order as i64 + i64::from(steps);
        RippleParams {
            order: order.max(Self::ORDER_MIN as i64) as usize,
            ..self
        }
    }

    /// Are all parameters finite?
    #[inline]
    pub fn is_finite(self) -> bool {
        self.alpha.is_finite() && self.omega.is_finite()
    }
}

impl Default for RippleParams {
    /// The initial interactive state: `alpha` 0.3, `omega` 4, order 2.
    #[inline]
    fn default() -> Self {
        RippleParams::new(0.3, 4.0, 2)
    }
}
