use crate::config::{C, F};
use crate::macros::check_path;
use ndarray::prelude::*;
use ndarray::ShapeError;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Read, Write};
use thiserror::Error;

// header written by armadillo's cx_mat::save for complex<double> matrices
pub const CX_MAT_MAGIC: &str = "ARMA_MAT_BIN_FC016";

#[derive(Debug, Error)]
pub enum ArmaError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("not an armadillo complex matrix, header was {0:?}")]
    BadMagic(String),
    #[error("malformed armadillo dimension line {0:?}")]
    BadDims(String),
    #[error(transparent)]
    Shape(#[from] ShapeError),
}

/// Loads a complex matrix saved in the arma_binary format: a magic line,
/// a "rows cols" line, then column-major little-endian complex<double> data.
pub fn load_cx_mat(path: &str) -> Result<Array2<C>, ArmaError> {
    let mut reader = BufReader::new(File::open(path)?);

    let mut header = String::new();
    reader.read_line(&mut header)?;
    if header.trim_end() != CX_MAT_MAGIC {
        return Err(ArmaError::BadMagic(header.trim_end().to_string()));
    }

    let mut dims = String::new();
    reader.read_line(&mut dims)?;
    let mut fields = dims.split_whitespace();
    let (rows, cols) = match (
        fields.next().and_then(|s| s.parse::<usize>().ok()),
        fields.next().and_then(|s| s.parse::<usize>().ok()),
    ) {
        (Some(rows), Some(cols)) => (rows, cols),
        _ => return Err(ArmaError::BadDims(dims.trim_end().to_string())),
    };

    let mut data: Vec<C> = Vec::with_capacity(rows * cols);
    let mut buf = [0u8; 8];
    for _ in 0..rows * cols {
        reader.read_exact(&mut buf)?;
        let re = F::from_le_bytes(buf);
        reader.read_exact(&mut buf)?;
        let im = F::from_le_bytes(buf);
        data.push(C::new(re, im));
    }

    // the payload is column-major
    Ok(Array2::from_shape_vec((rows, cols).f(), data)?)
}

/// Writes a complex matrix in the same arma_binary format the simulator
/// produces. Counterpart of [`load_cx_mat`], used to build fixtures.
pub fn save_cx_mat(matrix: &Array2<C>, path: &str) -> Result<(), std::io::Error> {
    check_path!(path);
    let mut writer = BufWriter::new(File::create(path)?);
    let (rows, cols) = matrix.dim();
    writeln!(writer, "{CX_MAT_MAGIC}")?;
    writeln!(writer, "{rows} {cols}")?;
    for column in matrix.columns() {
        for value in column {
            writer.write_all(&value.re.to_le_bytes())?;
            writer.write_all(&value.im.to_le_bytes())?;
        }
    }
    Ok(())
}
