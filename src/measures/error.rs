// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use thiserror::Error;

/// Contract violations surfaced by the measure functions.
///
/// Degenerate numeric inputs are deliberately *not* errors: an empty or
/// constant array, or a sequence shorter than the requested lag, yields
/// `Ok(0.0)` and the caller must read that as "not enough data". Only
/// ill-defined requests are loud.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MeasureError {
    /// A histogram was requested with zero bins.
    #[error("bin count must be positive")]
    ZeroBins,

    /// Block entropy was requested with a zero-sided block.
    #[error("block size must be positive")]
    ZeroBlockSize,

    /// Integration was requested with a zero-count partition grid.
    #[error("partition count must be positive")]
    ZeroPartitions,

    /// A 2D-only measure received input of another dimensionality.
    #[error("expected a 2D field, got {ndim} dimension(s)")]
    NotTwoDimensional { ndim: usize },

    /// Joint observation arrays must align row-wise.
    #[error("observation arrays must have equal length ({expected} vs {got})")]
    RaggedObservations { expected: usize, got: usize },

    /// Mutual information is defined here for exactly two variables.
    #[error("mutual information requires an arity-2 joint PMF, got arity {0}")]
    WrongArity(usize),
}
