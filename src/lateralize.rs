//! Lateralized-array builder: the full signed level array from either
//! generator parameters or an explicit magnitude list.
//!
//! The explicit path mirrors an ascending magnitude list, so its output
//! always satisfies `out[i] == -out[2N-1-i]`. The generated path delegates
//! to [`crate::scaling`] and inherits its (intentionally) independent halves.

use crate::scaling::generate_levels;
use crate::types::{LevelSpec, ParamError};

/// Mirror an ascending magnitude list `M` of length `N` into a `2N` signed
/// array: `out[i] = -M[N-1-i]` for the lower half, `out[N+j] = M[j]` for the
/// upper half.
pub fn mirror_magnitudes(magnitudes: &[f64]) -> Vec<f64> {
    let mut out = Vec::with_capacity(magnitudes.len() * 2);
    out.extend(magnitudes.iter().rev().map(|&m| -m));
    out.extend_from_slice(magnitudes);
    out
}

/// Build the lateralized level array for `spec`. Pure: same spec, same
/// array, no side effects beyond the returned value.
pub fn build_level_array(spec: &LevelSpec) -> Result<Vec<f64>, ParamError> {
    match spec {
        LevelSpec::Generated { num_steps, mode } => generate_levels(*num_steps, mode),
        LevelSpec::Explicit { magnitudes } => Ok(mirror_magnitudes(magnitudes)),
    }
}
