//! Adaptive reward debiasing from per-trial history.
//!
//! A subject that favors one side collects more hits there; the engine
//! detects that imbalance and scales reward volume against it. Only hits
//! are counted, not attempts per side — the deployed task behaves this way
//! and the asymmetry is intentional, pending review by the task owners.
//!
//! The engine is stateless: every call recomputes the factors from the
//! caller-supplied [`TrialHistory`] snapshot.

use crate::types::{BiasFactors, TrialHistory};

/// Imbalance fraction above which reward scaling kicks in.
pub const DEFAULT_BIAS_THRESHOLD: f64 = 0.12;

/// Ceiling on either reward factor; degenerate divisions clamp here
/// instead of producing infinity.
pub const MAX_BIAS_FACTOR: f64 = 4.0;

pub struct BiasEngine {
    threshold: f64,
}

impl BiasEngine {
    /// Engine with the given imbalance threshold; values above 1 behave
    /// as 1 (the imbalance fraction never exceeds 1).
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Compute the reward factors for the current history.
    ///
    /// Mismatched or empty histories yield [`BiasFactors::NEUTRAL`]
    /// defensively rather than failing: a malformed snapshot should never
    /// stall the reward controller mid-session.
    pub fn reward_biases(&self, history: &TrialHistory) -> BiasFactors {
        let side = &history.side_chosen;
        let hit = &history.hit_outcome;
        if side.len() != hit.len() || side.is_empty() {
            return BiasFactors::NEUTRAL;
        }

        let mut left_hits: u32 = 0;
        let mut right_hits: u32 = 0;
        for (&left, &was_hit) in side.iter().zip(hit) {
            if was_hit {
                if left {
                    left_hits += 1;
                } else {
                    right_hits += 1;
                }
            }
        }

        let imbalance = left_hits.abs_diff(right_hits) as f64 / side.len() as f64;
        if imbalance < self.threshold.min(1.0) {
            return BiasFactors::NEUTRAL;
        }
        // Zero hits on both sides passes the gate only at threshold 0;
        // keep the 0/0 ratios out of the clamp.
        if left_hits == 0 && right_hits == 0 {
            return BiasFactors::NEUTRAL;
        }

        BiasFactors {
            left: clamped_ratio(left_hits, right_hits),
            right: clamped_ratio(right_hits, left_hits),
        }
    }
}

impl Default for BiasEngine {
    fn default() -> Self {
        Self::new(DEFAULT_BIAS_THRESHOLD)
    }
}

/// `num / den` clamped to [`MAX_BIAS_FACTOR`]. A zero divisor (the
/// numerator is positive here, callers guard 0/0) reads as "infinitely
/// biased" and clamps to the ceiling exactly.
fn clamped_ratio(num: u32, den: u32) -> f64 {
    if den == 0 {
        MAX_BIAS_FACTOR
    } else {
        (num as f64 / den as f64).min(MAX_BIAS_FACTOR)
    }
}

/// Fraction of `true` entries in a per-trial outcome record. Empty input
/// reads as 0; no NaN leaves this crate.
pub fn hit_rate(outcomes: &[bool]) -> f64 {
    if outcomes.is_empty() {
        return 0.0;
    }
    outcomes.iter().filter(|&&hit| hit).count() as f64 / outcomes.len() as f64
}
