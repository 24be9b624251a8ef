// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::{ArrayView2, s};

use crate::measures::error::MeasureError;
use crate::measures::spatial::shannon_entropy;

/// Default partitions per axis for integration.
pub const INTEGRATION_PARTITIONS: usize = 4;
/// Default histogram bins for integration.
pub const INTEGRATION_BINS: usize = 16;
/// Default largest partition count for multiscale complexity.
pub const COMPLEXITY_MAX_SCALE: usize = 5;
/// Default histogram bins for multiscale complexity.
pub const COMPLEXITY_BINS: usize = 32;

/// Integration (Φ approximation): whole-field entropy minus the mean entropy
/// of its parts, in bits.
///
/// The field is split into an `n × n` grid of contiguous sub-regions of
/// `⌊H/n⌋ × ⌊W/n⌋` cells; leftover rows and columns at the far edge belong to
/// no sub-region. A positive value means the whole carries more
/// distinguishable structure than its decomposed parts average to — the
/// operational signature of emergence. Fields too small to produce any
/// non-empty sub-region yield `0.0`.
pub fn integration(
    field: ArrayView2<f64>,
    n_partitions: usize,
    bins: usize,
) -> Result<f64, MeasureError> {
    if n_partitions == 0 {
        return Err(MeasureError::ZeroPartitions);
    }
    let h_whole = shannon_entropy(field, bins)?;

    let (h, w) = field.dim();
    let part_h = h / n_partitions;
    let part_w = w / n_partitions;

    let mut h_parts_sum = 0.0;
    let mut n_parts = 0usize;
    for i in 0..n_partitions {
        for j in 0..n_partitions {
            let part = field.slice(s![
                i * part_h..(i + 1) * part_h,
                j * part_w..(j + 1) * part_w
            ]);
            if !part.is_empty() {
                h_parts_sum += shannon_entropy(part, bins)?;
                n_parts += 1;
            }
        }
    }

    if n_parts == 0 {
        return Ok(0.0);
    }
    Ok(h_whole - h_parts_sum / n_parts as f64)
}

/// Multiscale complexity: `Σ_{k=2}^{max_scale} |integration(field, k)|`.
///
/// Sums the magnitude of integration over a range of partition scales;
/// larger values indicate structure present across many spatial scales
/// (neither pure noise nor uniform order). `max_scale < 2` leaves an empty
/// sum and yields `0.0`.
pub fn multiscale_complexity(
    field: ArrayView2<f64>,
    max_scale: usize,
    bins: usize,
) -> Result<f64, MeasureError> {
    if bins == 0 {
        return Err(MeasureError::ZeroBins);
    }
    let mut complexity = 0.0;
    for k in 2..=max_scale {
        complexity += integration(field, k, bins)?.abs();
    }
    Ok(complexity)
}
