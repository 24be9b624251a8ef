// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::collections::BTreeMap;

use ndarray::{ArrayView1, ArrayView2};

use crate::measures::discretize::Discretization;
use crate::measures::emergence::{
    COMPLEXITY_BINS, COMPLEXITY_MAX_SCALE, INTEGRATION_BINS, INTEGRATION_PARTITIONS, integration,
    multiscale_complexity,
};
use crate::measures::error::MeasureError;
use crate::measures::spatial::{
    BLOCK_SIZE, DEFAULT_OFFSET, ENTROPY_BINS, SPATIAL_MI_BINS, block_entropy, shannon_entropy,
    spatial_mutual_information,
};
use crate::measures::temporal::{
    DEFAULT_LAG, SEQUENCE_BINS, active_information_storage, sequence_entropy,
};

/// Sequences at most this long are skipped by [`analyse`]; too few samples
/// for the temporal histograms to say anything.
pub const MIN_SEQUENCE_LEN: usize = 10;

/// Stable key vocabulary of a [`MeasureResult`].
pub mod keys {
    pub const SHANNON_ENTROPY: &str = "shannon_entropy";
    pub const SPATIAL_MI: &str = "spatial_MI";
    pub const BLOCK_ENTROPY_2X2: &str = "block_entropy_2x2";
    pub const INTEGRATION: &str = "integration";
    pub const COMPLEXITY: &str = "complexity";
    pub const TEMPORAL_ENTROPY: &str = "temporal_entropy";
    pub const ACTIVE_INFO_STORAGE: &str = "active_info_storage";
}

/// Result of one full analysis: measure name to scalar value, all entropy
/// family values in bits. Produced fresh per call.
pub type MeasureResult = BTreeMap<&'static str, f64>;

/// Run the full information-theoretic analysis of a field and, optionally,
/// an accompanying scalar sequence (order parameter, density, ...).
///
/// Computes, in this order and with the documented defaults: field entropy
/// (64 bins), spatial mutual information at offset `(1, 0)` (32 bins), 2×2
/// block entropy, integration over a 4×4 partition (16 bins) and multiscale
/// complexity up to scale 5 (32 bins). When a sequence longer than
/// [`MIN_SEQUENCE_LEN`] samples is supplied, sequence entropy and active
/// information storage (lag 1, 32 bins) are added under the temporal keys.
///
/// Pure function: identical inputs produce identical outputs, no side
/// effects, no shared state. Presentation (printing, classification labels)
/// belongs to the caller.
pub fn analyse(
    field: ArrayView2<f64>,
    sequence: Option<ArrayView1<f64>>,
) -> Result<MeasureResult, MeasureError> {
    let mut results = MeasureResult::new();

    results.insert(keys::SHANNON_ENTROPY, shannon_entropy(field, ENTROPY_BINS)?);
    results.insert(
        keys::SPATIAL_MI,
        spatial_mutual_information(field, DEFAULT_OFFSET, SPATIAL_MI_BINS)?,
    );
    results.insert(
        keys::BLOCK_ENTROPY_2X2,
        block_entropy(field, BLOCK_SIZE, Discretization::Continuous)?,
    );
    results.insert(
        keys::INTEGRATION,
        integration(field, INTEGRATION_PARTITIONS, INTEGRATION_BINS)?,
    );
    results.insert(
        keys::COMPLEXITY,
        multiscale_complexity(field, COMPLEXITY_MAX_SCALE, COMPLEXITY_BINS)?,
    );

    if let Some(seq) = sequence {
        if seq.len() > MIN_SEQUENCE_LEN {
            results.insert(keys::TEMPORAL_ENTROPY, sequence_entropy(seq, SEQUENCE_BINS)?);
            results.insert(
                keys::ACTIVE_INFO_STORAGE,
                active_information_storage(seq, DEFAULT_LAG, SEQUENCE_BINS)?,
            );
        }
    }

    Ok(results)
}
