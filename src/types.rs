//! Core parameter and result types shared across the task modules.
//!
//! These are the already-parsed records the host pipeline hands to this
//! crate. All of them derive serde traits so the host's session-file layer
//! can produce and log them without further translation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Invalid generator parameters. Every fallible operation in this crate
/// fails with one of these before producing any partial result.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ParamError {
    #[error("logarithm base must be positive and not 1, got {0}")]
    LogBase(f64),
    #[error("exponential base must be positive, got {0}")]
    ExpBase(f64),
}

/// Progression of |ILD| magnitudes across steps.
///
/// `step_size` is the separation between consecutive magnitudes (Linear),
/// the log/exponent scale factor otherwise. The step count lives in
/// [`LevelSpec`]; being unsigned, it needs no runtime validation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScalingMode {
    Linear { step_size: f64 },
    Logarithmic { step_size: f64, base: f64 },
    Exponential { step_size: f64, base: f64 },
}

impl ScalingMode {
    /// Check the base constraints: Logarithmic needs `base > 0 && base != 1`,
    /// Exponential needs `base > 0`, Linear is always valid.
    pub fn validate(&self) -> Result<(), ParamError> {
        match *self {
            ScalingMode::Linear { .. } => Ok(()),
            ScalingMode::Logarithmic { base, .. } => {
                if base <= 0.0 || base == 1.0 {
                    Err(ParamError::LogBase(base))
                } else {
                    Ok(())
                }
            }
            ScalingMode::Exponential { base, .. } => {
                if base <= 0.0 {
                    Err(ParamError::ExpBase(base))
                } else {
                    Ok(())
                }
            }
        }
    }
}

/// Which construction path the lateralized-array builder takes.
///
/// `Generated` runs the scaling function over all `2 * num_steps` indices.
/// `Explicit` mirrors an ascending non-negative magnitude list into its
/// negative and positive halves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LevelSpec {
    Generated { num_steps: usize, mode: ScalingMode },
    Explicit { magnitudes: Vec<f64> },
}

impl LevelSpec {
    pub fn validate(&self) -> Result<(), ParamError> {
        match self {
            LevelSpec::Generated { mode, .. } => mode.validate(),
            LevelSpec::Explicit { .. } => Ok(()),
        }
    }
}

/// Caller-assembled per-trial snapshot: which side was chosen (`true` =
/// left) and whether the trial was a hit, one entry each per trial.
///
/// The bias engine reads this fresh on every call and keeps no history of
/// its own; the host owns and extends the record across the session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrialHistory {
    pub side_chosen: Vec<bool>,
    pub hit_outcome: Vec<bool>,
}

impl TrialHistory {
    /// Append one trial outcome.
    pub fn record(&mut self, left_chosen: bool, hit: bool) {
        self.side_chosen.push(left_chosen);
        self.hit_outcome.push(hit);
    }

    pub fn len(&self) -> usize {
        self.side_chosen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.side_chosen.is_empty()
    }
}

/// Reward-volume scaling pair produced by the bias engine, `(1, 1)` when no
/// correction applies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BiasFactors {
    pub left: f64,
    pub right: f64,
}

impl BiasFactors {
    pub const NEUTRAL: BiasFactors = BiasFactors {
        left: 1.0,
        right: 1.0,
    };
}

impl Default for BiasFactors {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_validation() {
        assert!(ScalingMode::Linear { step_size: 0.0 }.validate().is_ok());
        assert!(ScalingMode::Logarithmic {
            step_size: 1.0,
            base: 10.0
        }
        .validate()
        .is_ok());
        assert_eq!(
            ScalingMode::Logarithmic {
                step_size: 1.0,
                base: 1.0
            }
            .validate(),
            Err(ParamError::LogBase(1.0))
        );
        assert_eq!(
            ScalingMode::Logarithmic {
                step_size: 1.0,
                base: -2.0
            }
            .validate(),
            Err(ParamError::LogBase(-2.0))
        );
        // A fractional base is fine for Exponential, zero is not.
        assert!(ScalingMode::Exponential {
            step_size: 1.0,
            base: 0.5
        }
        .validate()
        .is_ok());
        assert_eq!(
            ScalingMode::Exponential {
                step_size: 1.0,
                base: 0.0
            }
            .validate(),
            Err(ParamError::ExpBase(0.0))
        );
    }

    #[test]
    fn test_history_record() {
        let mut history = TrialHistory::default();
        assert!(history.is_empty());
        history.record(true, true);
        history.record(false, false);
        assert_eq!(history.len(), 2);
        assert_eq!(history.side_chosen, vec![true, false]);
        assert_eq!(history.hit_outcome, vec![true, false]);
    }

    #[test]
    fn test_spec_roundtrips_through_json() {
        let spec = LevelSpec::Generated {
            num_steps: 4,
            mode: ScalingMode::Logarithmic {
                step_size: 1.5,
                base: 2.0,
            },
        };
        let json = serde_json::to_string(&spec).unwrap();
        let back: LevelSpec = serde_json::from_str(&json).unwrap();
        assert_eq!(back, spec);

        let explicit: LevelSpec =
            serde_json::from_str(r#"{"explicit":{"magnitudes":[1.0,2.0,4.0]}}"#).unwrap();
        assert_eq!(
            explicit,
            LevelSpec::Explicit {
                magnitudes: vec![1.0, 2.0, 4.0]
            }
        );
    }
}
