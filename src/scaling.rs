//! The scaling function: maps a step index to one signed ILD level.
//!
//! The full array has `2N` entries: indices `[0, N)` form the negative
//! (left-louder) half, indices `[N, 2N)` the positive half. With `j = i - N`:
//!
//! | mode | lower half (i < N) | upper half |
//! |------|--------------------|------------|
//! | Linear | `-step*(N-i)` | `step*(j+1)` |
//! | Logarithmic | `-step*log_base(1+N-i)` | `step*log_base(j+2)` |
//! | Exponential | `-base^(step*(N-1-i))` | `base^(step*j)` |
//!
//! The halves are computed independently; under the logarithmic progression
//! they are not forced to be exact negations of each other. That asymmetry
//! matches the deployed task and is intentional.

use crate::types::{ParamError, ScalingMode};

/// Level at `index` in the lateralized array of `2 * num_steps` entries.
/// Callers must have validated `mode` first.
pub(crate) fn scaled_level(num_steps: usize, index: usize, mode: &ScalingMode) -> f64 {
    let n = num_steps;
    if index < n {
        let i = index;
        match *mode {
            ScalingMode::Linear { step_size } => -step_size * (n - i) as f64,
            ScalingMode::Logarithmic { step_size, base } => {
                -step_size * ((1 + n - i) as f64).log(base)
            }
            ScalingMode::Exponential { step_size, base } => {
                -base.powf(step_size * (n - 1 - i) as f64)
            }
        }
    } else {
        let j = index - n;
        match *mode {
            ScalingMode::Linear { step_size } => step_size * (j + 1) as f64,
            ScalingMode::Logarithmic { step_size, base } => step_size * ((j + 2) as f64).log(base),
            ScalingMode::Exponential { step_size, base } => base.powf(step_size * j as f64),
        }
    }
}

/// Generate the full lateralized level array: lower half (most negative
/// first) then upper half, exactly `2 * num_steps` entries. `num_steps = 0`
/// yields an empty vector.
pub fn generate_levels(num_steps: usize, mode: &ScalingMode) -> Result<Vec<f64>, ParamError> {
    mode.validate()?;
    Ok((0..num_steps * 2)
        .map(|i| scaled_level(num_steps, i, mode))
        .collect())
}
