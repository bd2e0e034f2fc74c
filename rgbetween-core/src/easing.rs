//! Square easing of blend weights: quadratic near 0 and 1, linear in between.

use crate::config::{MAX_EASING, MIN_EASING};

/// Ease a weight in [0, 1].
///
/// The curve is quadratic on `(0, w_start]` and `(1 - w_end, 1]` and linear in
/// between. The constant `1 / (2 - (w_start + w_end))` makes the pieces meet
/// with matching slopes.
pub fn square_ease(value: f64, w_start: f64, w_end: f64) -> f64 {
    if value <= 0.0 {
        return 0.0;
    }
    if value > 1.0 {
        return 1.0;
    }

    let coeff = 1.0 / (2.0 - (w_start + w_end));

    if value <= w_start {
        let a = coeff / w_start;
        a * value * value
    } else if value <= 1.0 - w_end {
        let m = 2.0 * coeff;
        let k = -w_start * coeff;
        m * value + k
    } else {
        let a = -coeff / w_end;
        let d = 1.0 - value;
        a * d * d + 1.0
    }
}

/// Easing amount applied to every blend of a gradient.
///
/// An amount of 0 means plain linear blending. Amounts are kept in [0, 1].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Easing {
    amount: f64,
}

impl Easing {
    /// Create an easing, clamping `amount` into [0, 1] (NaN becomes 0).
    pub fn new(amount: f64) -> Self {
        let clamped = if amount.is_nan() {
            MIN_EASING
        } else {
            amount.clamp(MIN_EASING, MAX_EASING)
        };
        if clamped != amount {
            log::warn!("Easing amount {amount} outside [0, 1], using {clamped}");
        }
        Self { amount: clamped }
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn is_active(&self) -> bool {
        self.amount > 0.0
    }

    /// Blend weights `(a, b)` for local fraction `u`, summing to 1.
    ///
    /// Linear weights are `(1 - u, u)`. When active, both are eased with
    /// half the amount as start and end width, then renormalized.
    pub fn weights(&self, u: f64) -> (f64, f64) {
        let (a, b) = (1.0 - u, u);
        if !self.is_active() {
            return (a, b);
        }

        let w = self.amount / 2.0;
        let a = square_ease(a, w, w);
        let b = square_ease(b, w, w);
        let sum = a + b;
        (a / sum, b / sum)
    }
}
