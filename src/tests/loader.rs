use crate::arma::{self, ArmaError};
use crate::config::{C, F};
use crate::quantum_state::{LoadError, QuantumState};
use ndarray::prelude::*;
use std::io::Write;

#[test]
fn reshapes_and_pads_flattened_states() {
    // side 2, 3 timesteps
    let state_vectors =
        Array2::from_shape_fn((4, 3), |(cell, t)| C::new(cell as F + 1.0, t as F));
    let state = QuantumState::from_state_vectors(&state_vectors).unwrap();

    assert_eq!(state.psi.dim(), (4, 4, 3));
    assert_eq!(state.side(), 4);
    assert_eq!(state.timesteps(), 3);

    let zero = C::new(0.0, 0.0);
    for t in 0..3 {
        for k in 0..4 {
            assert_eq!(state.psi[[0, k, t]], zero);
            assert_eq!(state.psi[[3, k, t]], zero);
            assert_eq!(state.psi[[k, 0, t]], zero);
            assert_eq!(state.psi[[k, 3, t]], zero);
        }
        for i in 0..2 {
            for j in 0..2 {
                assert_eq!(state.psi[[i + 1, j + 1, t]], state_vectors[[i * 2 + j, t]]);
            }
        }
    }
}

#[test]
fn rejects_a_non_square_first_dimension() {
    let state_vectors: Array2<C> = Array::zeros((5, 2));
    let result = QuantumState::from_state_vectors(&state_vectors);
    assert!(matches!(result, Err(LoadError::NonSquareGrid(5))));
}

#[test]
fn arma_matrix_round_trip() {
    let matrix = Array2::from_shape_fn((3, 4), |(i, j)| C::new(i as F - 1.5, 2.0 * j as F));
    let path = std::env::temp_dir().join("qsviz_arma_round_trip.bin");
    let path = path.to_str().unwrap();

    arma::save_cx_mat(&matrix, path).unwrap();
    let loaded = arma::load_cx_mat(path).unwrap();
    assert_eq!(loaded, matrix);
}

#[test]
fn rejects_a_bad_magic_header() {
    let path = std::env::temp_dir().join("qsviz_bad_magic.bin");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "NOT_AN_ARMA_FILE").unwrap();
    writeln!(file, "1 1").unwrap();
    file.write_all(&[0u8; 16]).unwrap();
    drop(file);

    let result = arma::load_cx_mat(path.to_str().unwrap());
    assert!(matches!(result, Err(ArmaError::BadMagic(_))));
}

#[test]
fn loads_through_the_full_pipeline() {
    // 9 cells -> side 3 -> padded side 5
    let matrix = Array2::from_shape_fn((9, 2), |(cell, t)| {
        C::new(0.1 * cell as F, t as F - 0.5)
    });
    let path = std::env::temp_dir().join("qsviz_pipeline.bin");
    let path = path.to_str().unwrap();
    arma::save_cx_mat(&matrix, path).unwrap();

    let loaded = arma::load_cx_mat(path).unwrap();
    let state = QuantumState::from_state_vectors(&loaded).unwrap();
    assert_eq!(state.psi.dim(), (5, 5, 2));
    assert_eq!(state.psi[[2, 3, 1]], matrix[[1 * 3 + 2, 1]]);
}
