use rand::Rng;

use crate::error::{Error, Result};

/// Dense row-major matrix of `f32`.
///
/// The shape is fixed at construction; only the cell values change. Every row
/// holds exactly `cols` entries.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<Vec<f32>>,
}

impl Matrix {
    /// Zero-filled `rows x cols` matrix. Both dimensions must be at least 1.
    pub fn zeros(rows: usize, cols: usize) -> Result<Matrix> {
        check_shape("zeros", rows, cols)?;
        Ok(Matrix {
            rows,
            cols,
            data: vec![vec![0.0; cols]; rows],
        })
    }

    /// Builds a matrix from explicit rows. Fails on an empty or ragged input.
    pub fn from_rows(data: Vec<Vec<f32>>) -> Result<Matrix> {
        let rows = data.len();
        let cols = data.first().map_or(0, Vec::len);
        check_shape("from_rows", rows, cols)?;
        if let Some(bad) = data.iter().find(|row| row.len() != cols) {
            return Err(Error::DimensionMismatch {
                op: "from_rows",
                expected: (1, cols),
                actual: (1, bad.len()),
            });
        }
        Ok(Matrix { rows, cols, data })
    }

    /// Single-column matrix (N x 1). Fails when `values` is empty.
    pub fn as_column(values: &[f32]) -> Result<Matrix> {
        check_shape("as_column", values.len(), 1)?;
        Ok(Matrix {
            rows: values.len(),
            cols: 1,
            data: values.iter().map(|&v| vec![v]).collect(),
        })
    }

    /// Single-row matrix (1 x N). Fails when `values` is empty.
    pub fn as_row(values: &[f32]) -> Result<Matrix> {
        check_shape("as_row", 1, values.len())?;
        Ok(Matrix {
            rows: 1,
            cols: values.len(),
            data: vec![values.to_vec()],
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn get(&self, row: usize, col: usize) -> Result<f32> {
        self.check_bounds(row, col)?;
        Ok(self.data[row][col])
    }

    pub fn set(&mut self, row: usize, col: usize, value: f32) -> Result<()> {
        self.check_bounds(row, col)?;
        self.data[row][col] = value;
        Ok(())
    }

    /// Fills every cell with a value drawn uniformly from `[-scale, scale]`.
    ///
    /// `scale` must be finite and the span `2 * |scale|` must fit in an `f32`;
    /// otherwise the matrix is left untouched and a structure error returned.
    pub fn randomize<R: Rng + ?Sized>(&mut self, scale: f32, rng: &mut R) -> Result<()> {
        let scale = scale.abs();
        if !scale.is_finite() || !(scale * 2.0).is_finite() {
            return Err(Error::Structure(format!(
                "randomize scale must be finite with a finite span, got {scale}"
            )));
        }
        for row in &mut self.data {
            for cell in row.iter_mut() {
                *cell = rng.gen_range(-scale..=scale);
            }
        }
        Ok(())
    }

    /// Standard matrix product `a · b`.
    pub fn multiply(a: &Matrix, b: &Matrix) -> Result<Matrix> {
        if a.cols != b.rows {
            return Err(Error::DimensionMismatch {
                op: "multiply",
                expected: (a.cols, b.cols),
                actual: b.shape(),
            });
        }

        let mut res = Matrix::zeros(a.rows, b.cols)?;
        for i in 0..res.rows {
            for j in 0..res.cols {
                let mut sum = 0.0;
                for k in 0..a.cols {
                    sum += a.data[i][k] * b.data[k][j];
                }
                res.data[i][j] = sum;
            }
        }

        Ok(res)
    }

    pub fn add(&mut self, other: &Matrix) -> Result<()> {
        self.zip_in_place("add", other, |a, b| a + b)
    }

    pub fn subtract(&mut self, other: &Matrix) -> Result<()> {
        self.zip_in_place("subtract", other, |a, b| a - b)
    }

    /// Element-wise (Hadamard) product.
    pub fn hadamard(&mut self, other: &Matrix) -> Result<()> {
        self.zip_in_place("hadamard", other, |a, b| a * b)
    }

    pub fn scalar_multiply(&mut self, k: f32) {
        self.apply(|x| x * k);
    }

    pub fn scalar_add(&mut self, k: f32) {
        self.apply(|x| x + k);
    }

    pub fn map<F>(&self, functor: F) -> Matrix
    where
        F: Fn(f32) -> f32,
    {
        let mut res = self.clone();
        res.apply(functor);
        res
    }

    pub fn row(&self, i: usize) -> Result<Vec<f32>> {
        self.check_bounds(i, 0)?;
        Ok(self.data[i].clone())
    }

    pub fn column(&self, j: usize) -> Result<Vec<f32>> {
        self.check_bounds(0, j)?;
        Ok(self.data.iter().map(|row| row[j]).collect())
    }

    /// Row-major view of every cell.
    pub fn values(&self) -> impl Iterator<Item = f32> + '_ {
        self.data.iter().flat_map(|row| row.iter().copied())
    }

    pub(crate) fn values_mut(&mut self) -> impl Iterator<Item = &mut f32> + '_ {
        self.data.iter_mut().flat_map(|row| row.iter_mut())
    }

    fn apply<F>(&mut self, functor: F)
    where
        F: Fn(f32) -> f32,
    {
        for cell in self.values_mut() {
            *cell = functor(*cell);
        }
    }

    fn zip_in_place<F>(&mut self, op: &'static str, other: &Matrix, functor: F) -> Result<()>
    where
        F: Fn(f32, f32) -> f32,
    {
        if self.shape() != other.shape() {
            return Err(Error::DimensionMismatch {
                op,
                expected: self.shape(),
                actual: other.shape(),
            });
        }

        for (row, other_row) in self.data.iter_mut().zip(&other.data) {
            for (a, &b) in row.iter_mut().zip(other_row) {
                *a = functor(*a, b);
            }
        }
        Ok(())
    }

    fn check_bounds(&self, row: usize, col: usize) -> Result<()> {
        if row >= self.rows || col >= self.cols {
            return Err(Error::Bounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }
}

fn check_shape(op: &str, rows: usize, cols: usize) -> Result<()> {
    if rows == 0 || cols == 0 {
        return Err(Error::Structure(format!(
            "{op}: matrix needs at least one row and one column, got {rows}x{cols}"
        )));
    }
    Ok(())
}
