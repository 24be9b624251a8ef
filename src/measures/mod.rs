// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

// Measures module: groups the estimator stack, leaves first, and exposes
// the commonly used items at the module root.

pub mod discretize;
pub mod distribution;
pub mod emergence;
pub mod entropy;
pub mod error;
pub mod report;
pub mod spatial;
pub mod temporal;

pub use discretize::{Discretization, discretize};
pub use distribution::Pmf;
pub use emergence::{integration, multiscale_complexity};
pub use entropy::{entropy, mutual_information};
pub use error::MeasureError;
pub use report::{MeasureResult, analyse};
pub use spatial::{block_entropy, shannon_entropy, spatial_mutual_information};
pub use temporal::{active_information_storage, sequence_entropy, transfer_entropy};
