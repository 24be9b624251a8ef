// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::collections::HashMap;

use ndarray::ArrayView1;

use crate::measures::error::MeasureError;

/// Sparse empirical probability mass function over tuples of alphabet indices.
///
/// Only tuples with a non-zero observed count are stored, so probabilities
/// iterate over the support directly and the `p > 0` filter of the entropy
/// sum holds by construction. Built fresh per measurement call and discarded
/// afterwards; nothing is shared between calls.
#[derive(Debug, Clone)]
pub struct Pmf {
    counts: HashMap<Vec<i32>, usize>,
    total: usize,
    arity: usize,
}

impl Pmf {
    /// Build a joint PMF by zipping equal-length index arrays row-wise and
    /// counting each distinct combined tuple.
    ///
    /// One array yields a marginal, two or three a joint distribution. Empty
    /// arrays produce an empty PMF (entropy `0`); arrays of differing length
    /// are a contract violation.
    pub fn from_observations(series: &[ArrayView1<i32>]) -> Result<Self, MeasureError> {
        let arity = series.len();
        let len = series.first().map_or(0, |s| s.len());
        for s in series {
            if s.len() != len {
                return Err(MeasureError::RaggedObservations {
                    expected: len,
                    got: s.len(),
                });
            }
        }

        let mut counts: HashMap<Vec<i32>, usize> = HashMap::new();
        for i in 0..len {
            let key: Vec<i32> = series.iter().map(|s| s[i]).collect();
            *counts.entry(key).or_insert(0) += 1;
        }
        Ok(Self {
            counts,
            total: len,
            arity,
        })
    }

    /// Build a 1-arity PMF over pre-formed symbol tuples, e.g. flattened
    /// k×k block patterns where each whole pattern is one symbol.
    pub fn from_patterns(patterns: Vec<Vec<i32>>) -> Self {
        let total = patterns.len();
        let mut counts: HashMap<Vec<i32>, usize> = HashMap::new();
        for pattern in patterns {
            *counts.entry(pattern).or_insert(0) += 1;
        }
        Self {
            counts,
            total,
            arity: 1,
        }
    }

    /// Number of variables the stored tuples range over.
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Total number of observations behind the distribution.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of distinct tuples in the support.
    pub fn support_size(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate over `(tuple, probability)` pairs of the support.
    pub fn iter(&self) -> impl Iterator<Item = (&[i32], f64)> + '_ {
        let n = self.total as f64;
        self.counts
            .iter()
            .map(move |(key, &cnt)| (key.as_slice(), cnt as f64 / n))
    }

    /// Probability of one tuple, `0` if it was never observed.
    pub fn probability(&self, key: &[i32]) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.counts.get(key).copied().unwrap_or(0) as f64 / self.total as f64
    }
}
