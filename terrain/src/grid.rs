use std::ops::Index;

use rayon::prelude::*;

use crate::error::{Result, TerrainError};

// 2D height grid stored row-major in a single buffer of length rows × cols.
// Cell (r, c) lives at `data[r * cols + c]` and covers the normalized
// coordinate (c / cols, r / rows).
#[derive(Debug, Clone, PartialEq)]
pub struct HeightGrid {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

// Validate a resolution and return its cell count.
fn check_dims(rows: usize, cols: usize) -> Result<usize> {
    if rows == 0 || cols == 0 {
        return Err(TerrainError::InvalidArgument(format!(
            "grid resolution must be positive, got {rows}x{cols}"
        )));
    }
    rows.checked_mul(cols).ok_or_else(|| {
        TerrainError::InvalidArgument(format!("grid resolution {rows}x{cols} is too large"))
    })
}

impl HeightGrid {
    /// All-zero grid.
    pub fn zeros(rows: usize, cols: usize) -> Result<Self> {
        let cells = check_dims(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            data: vec![0.0; cells],
        })
    }

    /// Build a grid by evaluating `f(row, col)` for every cell.
    ///
    /// Rows are filled in parallel. Each cell only depends on its own index,
    /// so the result is the same as filling the grid in a plain loop.
    pub fn from_fn<F>(rows: usize, cols: usize, f: F) -> Result<Self>
    where
        F: Fn(usize, usize) -> f64 + Sync,
    {
        let cells = check_dims(rows, cols)?;
        let mut data = vec![0.0; cells];
        data.par_chunks_mut(cols).enumerate().for_each(|(r, row)| {
            for (c, cell) in row.iter_mut().enumerate() {
                *cell = f(r, c);
            }
        });
        Ok(Self { rows, cols, data })
    }

    /// Build a grid from nested rows. All rows must have the same length.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, Vec::len);
        check_dims(n_rows, n_cols)?;
        if let Some(bad) = rows.iter().position(|row| row.len() != n_cols) {
            return Err(TerrainError::InvalidArgument(format!(
                "row {bad} has {} columns, expected {n_cols}",
                rows[bad].len()
            )));
        }
        Ok(Self {
            rows: n_rows,
            cols: n_cols,
            data: rows.into_iter().flatten().collect(),
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    // (rows, cols)
    pub fn dims(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.rows && col < self.cols {
            Some(self.data[row * self.cols + col])
        } else {
            None
        }
    }

    pub fn row(&self, row: usize) -> &[f64] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    // Flat row-major view, e.g. for handing to a physics engine heightfield
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.data.chunks(self.cols).map(<[f64]>::to_vec).collect()
    }

    // Smallest and largest cell value
    pub fn min_max(&self) -> (f64, f64) {
        self.data
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            })
    }

    pub(crate) fn ensure_same_dims(&self, other: &HeightGrid) -> Result<()> {
        if self.dims() != other.dims() {
            return Err(TerrainError::DimensionMismatch {
                expected: self.dims(),
                found: other.dims(),
            });
        }
        Ok(())
    }

    // Combine two same-shaped grids cell by cell.
    pub(crate) fn zip_map<F>(&self, other: &HeightGrid, f: F) -> Result<Self>
    where
        F: Fn(f64, f64) -> f64 + Sync,
    {
        self.ensure_same_dims(other)?;
        let data = self
            .data
            .par_iter()
            .zip(other.data.par_iter())
            .map(|(&a, &b)| f(a, b))
            .collect();
        Ok(Self {
            rows: self.rows,
            cols: self.cols,
            data,
        })
    }
}

impl Index<(usize, usize)> for HeightGrid {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({row}, {col}) out of bounds for {}x{} grid",
            self.rows,
            self.cols
        );
        &self.data[row * self.cols + col]
    }
}
