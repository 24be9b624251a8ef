// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use approx::assert_abs_diff_eq;
use infodynamics::measures::error::MeasureError;
use infodynamics::measures::temporal::{
    DEFAULT_LAG, SEQUENCE_BINS, TRANSFER_ENTROPY_BINS, active_information_storage,
    sequence_entropy, transfer_entropy,
};
use ndarray::Array1;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rstest::rstest;

fn uniform_sequence(n: usize, seed: u64) -> Array1<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    Array1::from_iter((0..n).map(|_| rng.gen_range(0.0..1.0)))
}

fn alternating_sequence(n: usize) -> Array1<f64> {
    Array1::from_iter((0..n).map(|t| (t % 2) as f64))
}

#[test]
fn constant_sequence_has_zero_entropy() {
    let seq = Array1::from_elem(64, 1.5);
    assert_eq!(sequence_entropy(seq.view(), SEQUENCE_BINS).unwrap(), 0.0);
}

#[test]
fn alternating_sequence_has_one_bit_of_entropy() {
    let seq = alternating_sequence(64);
    assert_abs_diff_eq!(
        sequence_entropy(seq.view(), SEQUENCE_BINS).unwrap(),
        1.0,
        epsilon = 1e-12
    );
}

#[rstest]
#[case(0)]
#[case(3)]
#[case(5)]
fn too_short_sequences_store_nothing(#[case] n: usize) {
    // N <= lag: exactly 0.0, "not enough data" rather than "no structure".
    let seq = uniform_sequence(n, 7);
    assert_eq!(
        active_information_storage(seq.view(), 5, SEQUENCE_BINS).unwrap(),
        0.0
    );
}

#[rstest]
#[case(0)]
#[case(4)]
fn too_short_sequences_transfer_nothing(#[case] n: usize) {
    let x = uniform_sequence(n, 8);
    let y = uniform_sequence(n, 9);
    assert_eq!(
        transfer_entropy(x.view(), y.view(), 4, TRANSFER_ENTROPY_BINS).unwrap(),
        0.0
    );
}

#[test]
fn transfer_entropy_uses_the_shorter_series_length() {
    // min(len) <= lag even though the source alone is long enough.
    let x = uniform_sequence(100, 10);
    let y = uniform_sequence(3, 11);
    assert_eq!(
        transfer_entropy(x.view(), y.view(), 3, TRANSFER_ENTROPY_BINS).unwrap(),
        0.0
    );
}

#[test]
fn period_two_process_remembers_one_bit() {
    // The present of 0,1,0,1,... is fully determined by its lag-1 past.
    let seq = alternating_sequence(128);
    let ais = active_information_storage(seq.view(), DEFAULT_LAG, SEQUENCE_BINS).unwrap();
    assert_abs_diff_eq!(ais, 1.0, epsilon = 1e-12);
}

#[test]
fn iid_noise_remembers_almost_nothing() {
    let seq = uniform_sequence(5000, 21);
    let ais = active_information_storage(seq.view(), DEFAULT_LAG, SEQUENCE_BINS).unwrap();
    assert!(ais >= 0.0);
    assert!(ais < 0.3, "iid AIS should be near zero, got {ais}");
}

#[rstest]
#[case(42, 43, 1)]
#[case(44, 45, 2)]
#[case(46, 47, 5)]
fn transfer_entropy_is_non_negative(#[case] seed_x: u64, #[case] seed_y: u64, #[case] lag: usize) {
    let x = uniform_sequence(500, seed_x);
    let y = uniform_sequence(500, seed_y);
    let te = transfer_entropy(x.view(), y.view(), lag, TRANSFER_ENTROPY_BINS).unwrap();
    assert!(te >= 0.0);
}

#[test]
fn copied_source_drives_the_target() {
    // y[t] = x[t-1]: the source past determines the target future exactly,
    // while the reverse direction sees only independent noise.
    let n = 5000;
    let x = uniform_sequence(n, 314);
    let mut y = Array1::zeros(n);
    for t in 1..n {
        y[t] = x[t - 1];
    }

    let te_forward =
        transfer_entropy(x.view(), y.view(), DEFAULT_LAG, TRANSFER_ENTROPY_BINS).unwrap();
    let te_backward =
        transfer_entropy(y.view(), x.view(), DEFAULT_LAG, TRANSFER_ENTROPY_BINS).unwrap();

    assert!(
        te_forward > 2.0,
        "perfect coupling should transfer several bits, got {te_forward}"
    );
    assert!(
        te_backward < 1.5,
        "reverse direction should see only estimator bias, got {te_backward}"
    );
    assert!(te_forward > te_backward);
}

#[test]
fn zero_bins_is_a_contract_violation() {
    let seq = uniform_sequence(32, 1);
    assert_eq!(
        sequence_entropy(seq.view(), 0).unwrap_err(),
        MeasureError::ZeroBins
    );
    assert_eq!(
        active_information_storage(seq.view(), 1, 0).unwrap_err(),
        MeasureError::ZeroBins
    );
    assert_eq!(
        transfer_entropy(seq.view(), seq.view(), 1, 0).unwrap_err(),
        MeasureError::ZeroBins
    );
}
