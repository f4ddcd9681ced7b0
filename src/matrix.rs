use crate::error::Error;

/// Dense row-major integer matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    pub data: Vec<i32>,
    pub rows: usize,
    pub cols: usize,
}

impl Matrix {
    /// Create a zero-filled matrix with the given dimensions.
    pub fn new(rows: usize, cols: usize) -> Self {
        Matrix {
            data: vec![0; rows * cols],
            rows,
            cols,
        }
    }

    /// Create a matrix from row-major cell data.
    pub fn from_vec(data: Vec<i32>, rows: usize, cols: usize) -> Result<Self, Error> {
        if data.len() != rows * cols {
            return Err(Error::CellCount {
                len: data.len(),
                rows,
                cols,
            });
        }
        Ok(Matrix { data, rows, cols })
    }

    /// Create a matrix where every row is `[1, 2, .., cols]`.
    ///
    /// This is the generator the reference system uses for both input
    /// matrices.
    pub fn column_ramp(rows: usize, cols: usize) -> Self {
        let data = (0..rows)
            .flat_map(|_| (0..cols).map(|j| j as i32 + 1))
            .collect();
        Matrix { data, rows, cols }
    }

    pub fn get(&self, row: usize, col: usize) -> Result<i32, Error> {
        if row >= self.rows || col >= self.cols {
            return Err(Error::CellOutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(self.data[row * self.cols + col])
    }

    pub fn set(&mut self, row: usize, col: usize, value: i32) -> Result<(), Error> {
        if row >= self.rows || col >= self.cols {
            return Err(Error::CellOutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        self.data[row * self.cols + col] = value;
        Ok(())
    }

    /// Borrow the contiguous cells of rows `[offset, offset + count)`.
    ///
    /// Rows are contiguous in row-major storage, so a row-block is a plain
    /// slice and scattering it involves no copy.
    pub fn row_block(&self, offset: usize, count: usize) -> Result<&[i32], Error> {
        let end = offset + count;
        if end > self.rows {
            return Err(Error::RowBlockOutOfBounds {
                offset,
                end,
                rows: self.rows,
            });
        }
        Ok(&self.data[offset * self.cols..end * self.cols])
    }

    /// Overwrite rows `[offset, offset + count)` with the given cells.
    pub fn write_rows(&mut self, offset: usize, count: usize, cells: &[i32]) -> Result<(), Error> {
        let end = offset + count;
        if end > self.rows {
            return Err(Error::RowBlockOutOfBounds {
                offset,
                end,
                rows: self.rows,
            });
        }
        if cells.len() != count * self.cols {
            return Err(Error::CellCount {
                len: cells.len(),
                rows: count,
                cols: self.cols,
            });
        }
        self.data[offset * self.cols..end * self.cols].copy_from_slice(cells);
        Ok(())
    }

    /// Dense product `self * other`.
    ///
    /// Canonical triple loop, accumulator zeroed per cell. Intentionally
    /// unblocked so the distribution logic stays the interesting part.
    pub fn multiply(&self, other: &Matrix) -> Result<Matrix, Error> {
        if self.cols != other.rows {
            return Err(Error::ShapeMismatch {
                left_rows: self.rows,
                left_cols: self.cols,
                right_rows: other.rows,
                right_cols: other.cols,
            });
        }

        let mut result = Matrix::new(self.rows, other.cols);
        for i in 0..self.rows {
            for k in 0..other.cols {
                let mut sum = 0;
                for j in 0..self.cols {
                    sum += self.data[i * self.cols + j] * other.data[j * other.cols + k];
                }
                result.data[i * other.cols + k] = sum;
            }
        }
        Ok(result)
    }
}
