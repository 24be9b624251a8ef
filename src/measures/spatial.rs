// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::{Array1, ArrayView, ArrayView2, Dimension, Ix2};

use crate::measures::discretize::{Discretization, discretize, discretize_block};
use crate::measures::distribution::Pmf;
use crate::measures::entropy::{entropy, mutual_information};
use crate::measures::error::MeasureError;

/// Default histogram bins for single-cell field entropy.
pub const ENTROPY_BINS: usize = 64;
/// Default histogram bins per axis for spatial mutual information.
pub const SPATIAL_MI_BINS: usize = 32;
/// Default neighbour offset `(dy, dx)` for spatial mutual information.
pub const DEFAULT_OFFSET: (isize, isize) = (1, 0);
/// Default block side length for block entropy.
pub const BLOCK_SIZE: usize = 2;

/// Shannon entropy of a field's value distribution, in bits.
///
/// The field is flattened (any dimensionality is accepted), min–max binned
/// into `bins` symbols and the entropy of the resulting histogram returned.
/// An empty or constant field has entropy `0`.
pub fn shannon_entropy<D: Dimension>(
    field: ArrayView<'_, f64, D>,
    bins: usize,
) -> Result<f64, MeasureError> {
    if bins == 0 {
        return Err(MeasureError::ZeroBins);
    }
    if field.is_empty() {
        return Ok(0.0);
    }
    let flat = Array1::from_iter(field.iter().copied());
    let codes = discretize(flat.view(), bins)?;
    let pmf = Pmf::from_observations(&[codes.view()])?;
    Ok(entropy(&pmf))
}

/// Mutual information between each cell and its `(dy, dx)` neighbour, in bits.
///
/// The shifted copy is built with periodic wrap-around along both axes, and
/// the compared region is then trimmed to `(H-|dy|) × (W-|dx|)` so the
/// wrapped edge strip is excluded from the comparison. This hybrid policy —
/// neither fully toroidal nor fully bounded — is kept deliberately: changing
/// it changes the estimator's statistical properties. Both halves are
/// discretized independently with `bins` symbols. Offsets at least as large
/// as the field leave no overlap and yield `0`.
pub fn spatial_mutual_information(
    field: ArrayView2<f64>,
    offset: (isize, isize),
    bins: usize,
) -> Result<f64, MeasureError> {
    if bins == 0 {
        return Err(MeasureError::ZeroBins);
    }
    let (h, w) = field.dim();
    let (dy, dx) = offset;
    let (ady, adx) = (dy.unsigned_abs(), dx.unsigned_abs());
    if h == 0 || w == 0 || ady >= h || adx >= w {
        return Ok(0.0);
    }

    let rows = h - ady;
    let cols = w - adx;
    let mut x_vals = Vec::with_capacity(rows * cols);
    let mut y_vals = Vec::with_capacity(rows * cols);
    for i in 0..rows {
        for j in 0..cols {
            x_vals.push(field[(i, j)]);
            let si = (i as isize + dy).rem_euclid(h as isize) as usize;
            let sj = (j as isize + dx).rem_euclid(w as isize) as usize;
            y_vals.push(field[(si, sj)]);
        }
    }

    let x_codes = discretize(Array1::from(x_vals).view(), bins)?;
    let y_codes = discretize(Array1::from(y_vals).view(), bins)?;
    let joint = Pmf::from_observations(&[x_codes.view(), y_codes.view()])?;
    mutual_information(&joint)
}

/// Entropy of the distribution of k×k block patterns, in bits.
///
/// The field is partitioned into non-overlapping `block_size`-sided blocks
/// (remainder rows and columns that do not complete a block are skipped) and
/// each block's flattened symbol tuple is counted as one pattern. Continuous
/// fields are first mapped onto the fixed 8-symbol block alphabet; fields
/// declared [`Discretization::PreDiscretized`] use their own values as the
/// alphabet. Input must be 2D; anything else is a dimensionality error.
pub fn block_entropy<D: Dimension>(
    field: ArrayView<'_, f64, D>,
    block_size: usize,
    domain: Discretization,
) -> Result<f64, MeasureError> {
    if block_size == 0 {
        return Err(MeasureError::ZeroBlockSize);
    }
    let ndim = field.ndim();
    let field: ArrayView2<f64> = field
        .into_dimensionality::<Ix2>()
        .map_err(|_| MeasureError::NotTwoDimensional { ndim })?;

    let (h, w) = field.dim();
    let k = block_size;
    let mut patterns = Vec::new();
    let mut i = 0;
    while i + k <= h {
        let mut j = 0;
        while j + k <= w {
            let mut pattern = Vec::with_capacity(k * k);
            for bi in 0..k {
                for bj in 0..k {
                    pattern.push(discretize_block(field[(i + bi, j + bj)], domain));
                }
            }
            patterns.push(pattern);
            j += k;
        }
        i += k;
    }

    Ok(entropy(&Pmf::from_patterns(patterns)))
}
