// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::{Array1, ArrayView1};

use crate::measures::error::MeasureError;

/// Scale factor applied to continuous fields under the block-alphabet policy.
pub const BLOCK_SCALE: f64 = 8.0;
/// Size of the fixed block alphabet; symbols live in `[0, BLOCK_ALPHABET)`.
pub const BLOCK_ALPHABET: i32 = 8;

/// Declared value domain of an input field.
///
/// The branch is an explicit caller decision, never inferred from the data:
/// a field of whole numbers may still be a continuous quantity, and only the
/// caller knows whether its values already *are* a symbol alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Discretization {
    /// Real-valued data to be mapped onto a finite alphabet.
    Continuous,
    /// Data already on a small integer alphabet; values pass through unchanged.
    PreDiscretized,
}

/// Min–max linear binning of real values onto the alphabet `[0, bins)`.
///
/// Values are scaled so the observed range `[min, max]` covers `[0, bins)`,
/// floored to an index and clipped to `bins - 1` to absorb floating rounding
/// at the upper edge. A constant or empty array collapses to the single
/// symbol `0`; downstream entropy of that distribution is exactly `0`.
pub fn discretize(values: ArrayView1<f64>, bins: usize) -> Result<Array1<i32>, MeasureError> {
    if bins == 0 {
        return Err(MeasureError::ZeroBins);
    }
    if values.is_empty() {
        return Ok(Array1::zeros(0));
    }

    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for &v in values.iter() {
        lo = lo.min(v);
        hi = hi.max(v);
    }
    if hi == lo {
        // Zero-variance input: single-bin collapse.
        return Ok(Array1::zeros(values.len()));
    }

    let span = hi - lo;
    let top = (bins - 1) as i32;
    Ok(values.mapv(|v| (((v - lo) / span * bins as f64) as i32).clamp(0, top)))
}

/// Map one field value onto the fixed 8-symbol block alphabet.
///
/// Continuous values are scaled by [`BLOCK_SCALE`] and clipped into
/// `[0, BLOCK_ALPHABET)`; pre-discretized values are the alphabet already
/// and pass through (truncated to integer).
pub fn discretize_block(value: f64, domain: Discretization) -> i32 {
    match domain {
        Discretization::Continuous => {
            ((value * BLOCK_SCALE) as i32).clamp(0, BLOCK_ALPHABET - 1)
        }
        Discretization::PreDiscretized => value as i32,
    }
}
