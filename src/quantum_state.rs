use crate::arma::{self, ArmaError};
use crate::config::{C, F};
use crate::macros::check_path;
use crate::scenario::Scenario;
use ndarray::prelude::*;
use ndarray_npy::{WriteNpyError, WriteNpyExt};
use rayon::prelude::*;
use std::fs::File;
use std::io::BufWriter;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Arma(#[from] ArmaError),
    #[error("first matrix dimension {0} is not a perfect square")]
    NonSquareGrid(usize),
}

/// Wavefunction amplitudes on a square spatial grid over time, indexed
/// (y, x, time). The spatial boundary carries one zero-padding cell per
/// side, so both spatial dimensions are the simulated grid side plus 2.
#[derive(Debug, Clone)]
pub struct QuantumState {
    pub psi: Array3<C>,
}

impl QuantumState {
    pub fn load(scenario: Scenario) -> Result<Self, LoadError> {
        let state_vectors = arma::load_cx_mat(&scenario.input_path())?;
        Self::from_state_vectors(&state_vectors)
    }

    /// Unflattens a (side², timesteps) matrix of state vectors into a
    /// (side+2, side+2, timesteps) array with zeroed spatial boundaries.
    pub fn from_state_vectors(state_vectors: &Array2<C>) -> Result<Self, LoadError> {
        let (cells, timesteps) = state_vectors.dim();
        let side = (cells as F).sqrt().round() as usize;
        if side * side != cells {
            return Err(LoadError::NonSquareGrid(cells));
        }

        let mut psi: Array3<C> = Array::zeros((side + 2, side + 2, timesteps));
        for t in 0..timesteps {
            for i in 0..side {
                for j in 0..side {
                    // each column is a row-major flattening of the grid
                    psi[[i + 1, j + 1, t]] = state_vectors[[i * side + j, t]];
                }
            }
        }
        Ok(Self { psi })
    }

    /// Padded side length of the spatial grid.
    pub fn side(&self) -> usize {
        self.psi.dim().0
    }

    pub fn timesteps(&self) -> usize {
        self.psi.dim().2
    }

    /// |ψ|² at every grid cell and timestep.
    pub fn probability_density(&self) -> Array3<F> {
        let mut density: Array3<F> = Array::zeros(self.psi.dim());
        density
            .axis_iter_mut(Axis(2))
            .zip(self.psi.axis_iter(Axis(2)))
            .par_bridge()
            .for_each(|(mut density_frame, psi_frame)| {
                density_frame
                    .iter_mut()
                    .zip(psi_frame.iter())
                    .for_each(|(density_elem, psi_elem)| {
                        *density_elem = psi_elem.norm_sqr();
                    })
            });
        density
    }

    pub fn real_part(&self) -> Array3<F> {
        self.psi.mapv(|psi_elem| psi_elem.re)
    }

    pub fn imag_part(&self) -> Array3<F> {
        self.psi.mapv(|psi_elem| psi_elem.im)
    }

    /// Total spatial probability minus one, per timestep. Near zero when
    /// the upstream simulation conserves probability.
    pub fn probability_deviation(&self) -> Array1<F> {
        self.probability_density()
            .sum_axis(Axis(0))
            .sum_axis(Axis(0))
            .mapv(|total| total - 1.0)
    }

    /// Column of |ψ|² nearest the fractional x position, at the final
    /// timestep, renormalized to a distribution over the vertical axis.
    pub fn detection_profile(&self, x_position: F) -> Array1<F> {
        let side = self.side();
        let column = (x_position * side as F - 1.0) as usize;
        let last = self.timesteps() - 1;
        let density = self.probability_density();
        normalize(density.slice(s![.., column, last]).to_owned())
    }

    pub fn save_probability_deviation_npy(&self, path: &str) -> Result<(), WriteNpyError> {
        check_path!(path);
        let writer = BufWriter::new(File::create(path)?);
        self.probability_deviation().write_npy(writer)?;
        Ok(())
    }

    pub fn save_detection_profile_npy(
        &self,
        x_position: F,
        path: &str,
    ) -> Result<(), WriteNpyError> {
        check_path!(path);
        let writer = BufWriter::new(File::create(path)?);
        self.detection_profile(x_position).write_npy(writer)?;
        Ok(())
    }
}

/// Divides an array by its own sum. Callers must guarantee a nonzero sum;
/// an all-zero input yields non-finite output.
pub fn normalize(mut array: Array1<F>) -> Array1<F> {
    let sum = array.sum();
    array /= sum;
    array
}

/// Physical time of a frame index under a fixed per-step duration.
pub fn frame_timestamp(frame: usize, dt: F) -> F {
    frame as F * dt
}
