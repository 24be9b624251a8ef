// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::{ArrayView1, s};

use crate::measures::discretize::discretize;
use crate::measures::distribution::Pmf;
use crate::measures::entropy::{entropy, mutual_information};
use crate::measures::error::MeasureError;
use crate::measures::spatial::shannon_entropy;

/// Default histogram bins for sequence entropy and active information storage.
pub const SEQUENCE_BINS: usize = 32;
/// Default histogram bins per variable for transfer entropy.
pub const TRANSFER_ENTROPY_BINS: usize = 16;
/// Default lag for the lagged temporal measures.
pub const DEFAULT_LAG: usize = 1;

/// Shannon entropy of a 1D sequence, in bits.
///
/// Identical to [`shannon_entropy`] applied to 1D data, with the temporal
/// default of 32 bins.
pub fn sequence_entropy(sequence: ArrayView1<f64>, bins: usize) -> Result<f64, MeasureError> {
    shannon_entropy(sequence, bins)
}

/// Active information storage `AIS = I(X_t ; X_{t-lag})`, in bits.
///
/// How much the present of a process tells you about its own past `lag`
/// steps back. The sequence is split into `current = x[lag..]` and
/// `past = x[..n-lag]`, both independently discretized, and their mutual
/// information returned. Sequences with `n <= lag` carry no usable pair and
/// yield `0.0` — "not enough data", not "no memory".
pub fn active_information_storage(
    sequence: ArrayView1<f64>,
    lag: usize,
    bins: usize,
) -> Result<f64, MeasureError> {
    if bins == 0 {
        return Err(MeasureError::ZeroBins);
    }
    let n = sequence.len();
    if n <= lag {
        return Ok(0.0);
    }

    let current = discretize(sequence.slice(s![lag..]), bins)?;
    let past = discretize(sequence.slice(s![..n - lag]), bins)?;
    let joint = Pmf::from_observations(&[current.view(), past.view()])?;
    mutual_information(&joint)
}

/// Transfer entropy from `source` to `target`, in bits.
///
/// Information the source's past provides about the target's future beyond
/// the target's own past, estimated via plug-in joint histograms:
///
/// ```text
/// TE(X→Y) = H(Yf, Yp) - H(Yf, Yp, Xp) + H(Yp, Xp) - H(Yp)
/// ```
///
/// with `Yf = y[lag..n]`, `Yp = y[..n-lag]`, `Xp = x[..n-lag]` and
/// `n = min(|x|, |y|)`, each variable independently min–max discretized into
/// `bins` symbols. This equals the conditional mutual information
/// `I(Yf ; Xp | Yp)`. The plug-in estimator has positive small-sample bias,
/// and its four-term sum can land slightly below zero on uncoupled data; the
/// result is clamped to `0` as a documented policy. A clamped zero does not
/// prove the true TE is zero. Sequences with `n <= lag` yield `0.0`.
pub fn transfer_entropy(
    source: ArrayView1<f64>,
    target: ArrayView1<f64>,
    lag: usize,
    bins: usize,
) -> Result<f64, MeasureError> {
    if bins == 0 {
        return Err(MeasureError::ZeroBins);
    }
    let n = source.len().min(target.len());
    if n <= lag {
        return Ok(0.0);
    }

    let y_future = discretize(target.slice(s![lag..n]), bins)?;
    let y_past = discretize(target.slice(s![..n - lag]), bins)?;
    let x_past = discretize(source.slice(s![..n - lag]), bins)?;

    let h_yf_yp = entropy(&Pmf::from_observations(&[y_future.view(), y_past.view()])?);
    let h_yf_yp_xp = entropy(&Pmf::from_observations(&[
        y_future.view(),
        y_past.view(),
        x_past.view(),
    ])?);
    let h_yp_xp = entropy(&Pmf::from_observations(&[y_past.view(), x_past.view()])?);
    let h_yp = entropy(&Pmf::from_observations(&[y_past.view()])?);

    let te = h_yf_yp - h_yf_yp_xp + h_yp_xp - h_yp;
    Ok(te.max(0.0))
}
