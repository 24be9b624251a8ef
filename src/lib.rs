// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # infodynamics
//!
//! Histogram-based information-theoretic measures for quantifying disorder,
//! structure and emergence in numeric fields and sequences produced by
//! simulations (cellular automata, reaction-diffusion, sandpiles, oscillator
//! networks, ...).
//!
//! ## Quick Start
//!
//! ```rust
//! use infodynamics::measures::report::analyse;
//! use ndarray::{Array1, Array2};
//!
//! // A 2D field from some simulation and a scalar order-parameter trace.
//! let field = Array2::from_shape_fn((32, 32), |(i, j)| ((i + j) % 2) as f64);
//! let trace = Array1::from_iter((0..64).map(|t| (t % 2) as f64));
//!
//! let report = analyse(field.view(), Some(trace.view())).unwrap();
//! assert!(report["spatial_MI"] > 0.9);
//! ```
//!
//! ## Measures
//!
//! | Group | Measure | Meaning |
//! |-------|---------|---------|
//! | Spatial | `shannon_entropy` | disorder of the value distribution |
//! | Spatial | `spatial_mutual_information` | neighbour coupling |
//! | Spatial | `block_entropy` | diversity of k×k local patterns |
//! | Temporal | `sequence_entropy` | unpredictability of a trace |
//! | Temporal | `active_information_storage` | memory of a process |
//! | Temporal | `transfer_entropy` | directed influence source → target |
//! | Emergence | `integration` | whole-field entropy minus mean part entropy |
//! | Emergence | `multiscale_complexity` | integration summed across scales |
//!
//! ## Architecture
//!
//! The crate is a stack of pure functions, leaves first:
//!
//! 1. **Discretizer**: min–max binning of real values onto a finite alphabet
//! 2. **Distribution**: sparse empirical PMFs from aligned symbol arrays
//! 3. **Entropy engine**: Shannon entropy and mutual information of PMFs
//! 4. **Measures**: spatial, temporal and emergence estimators
//! 5. **Report**: one orchestrated `analyse` call with documented defaults
//!
//! All estimates are plug-in histogram estimates in bits (base-2 logarithm).
//! Degenerate inputs (empty, constant, shorter than the lag) yield `0.0`;
//! contract violations (zero bins, non-2D input to block entropy) are
//! reported as [`measures::error::MeasureError`]. Nothing is cached and no
//! global state exists, so independent calls may run in parallel freely.

pub mod measures;
