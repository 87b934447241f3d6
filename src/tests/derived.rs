use crate::config::{C, F};
use crate::quantum_state::{frame_timestamp, normalize, QuantumState};
use ndarray::prelude::*;

const TOL: F = 1e-12;

fn sample_state() -> QuantumState {
    let psi = Array3::from_shape_fn((3, 3, 2), |(i, j, t)| {
        C::new(i as F + 0.5, j as F - 1.5 * t as F)
    });
    QuantumState { psi }
}

#[test]
fn probability_density_is_squared_modulus() {
    let state = sample_state();
    let density = state.probability_density();

    assert_eq!(density.dim(), state.psi.dim());
    for (psi_elem, density_elem) in state.psi.iter().zip(density.iter()) {
        assert!((density_elem - psi_elem.norm_sqr()).abs() < TOL);
        assert!(*density_elem >= 0.0);
    }
}

#[test]
fn real_and_imag_parts_reconstruct_the_state() {
    let state = sample_state();
    let real = state.real_part();
    let imag = state.imag_part();

    for ((index, psi_elem), (real_elem, imag_elem)) in state
        .psi
        .indexed_iter()
        .zip(real.iter().zip(imag.iter()))
    {
        assert_eq!(
            C::new(*real_elem, *imag_elem),
            *psi_elem,
            "mismatch at {index:?}"
        );
    }
}

#[test]
fn normalize_sums_to_one() {
    let normalized = normalize(array![0.5, 1.5, 2.0, 4.0]);
    assert!((normalized.sum() - 1.0).abs() < TOL);
}

#[test]
fn frame_timestamp_is_linear() {
    let dt: F = 5e-5;
    assert_eq!(frame_timestamp(0, dt), 0.0);
    assert_eq!(frame_timestamp(14, dt), 2.0 * frame_timestamp(7, dt));
}

#[test]
fn deviation_vanishes_for_a_conserving_state() {
    // exactly one unit-amplitude cell per timestep: total probability 1
    let mut psi: Array3<C> = Array::zeros((4, 4, 3));
    for t in 0..3 {
        psi[[1, 1 + t % 2, t]] = C::new(1.0, 0.0);
    }
    let state = QuantumState { psi };

    for deviation in state.probability_deviation() {
        assert!(deviation.abs() < TOL);
    }
}

#[test]
fn detection_profile_is_uniform_for_a_uniform_column() {
    let psi = Array3::from_elem((4, 4, 2), C::new(0.5, -0.5));
    let state = QuantumState { psi };

    let profile = state.detection_profile(0.8);
    assert!((profile.sum() - 1.0).abs() < TOL);
    for p in profile {
        assert!((p - 0.25).abs() < TOL);
    }
}

#[test]
fn detection_profile_reads_the_detector_column() {
    // side 4, x_position 0.8 -> column index 2; last timestep
    let mut psi: Array3<C> = Array::zeros((4, 4, 2));
    for (row, &density) in [1.0, 2.0, 3.0, 4.0].iter().enumerate() {
        psi[[row, 2, 1]] = C::new(F::sqrt(density), 0.0);
    }
    let state = QuantumState { psi };

    let profile = state.detection_profile(0.8);
    for (row, expected) in [0.1, 0.2, 0.3, 0.4].iter().enumerate() {
        assert!((profile[row] - expected).abs() < TOL);
    }
}
