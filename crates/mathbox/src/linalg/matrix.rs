use std::error::Error;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Index;

use crate::linalg::format::{format_value, SHOWN_EDGE, TRUNCATION_THRESHOLD};

/// An immutable dense matrix of `f64` values.
///
/// Elements live in a single contiguous buffer in row-major order: the
/// element at `(row, col)` is `data[row * cols + col]`, and
/// `rows * cols == data.len()` holds for the lifetime of the instance.
/// Every operation returns a freshly constructed matrix; nothing mutates an
/// existing one, so shared instances are safe to read from any thread.
///
/// Per-column display widths are measured once at construction and reused by
/// the [`Display`](fmt::Display) renderer, which right-aligns columns and
/// truncates matrices with 20 or more rows or columns.
#[derive(Clone, Debug)]
pub struct Matrix {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
    col_widths: Vec<usize>,
}

impl Matrix {
    /// Builds a matrix from a flat row-major buffer.
    ///
    /// Fails with [`MatrixError::InvalidShape`] unless both dimensions are
    /// positive and `rows * cols` equals the buffer length. Every fallible
    /// factory in this module funnels through this check.
    pub fn from_vec(data: Vec<f64>, rows: usize, cols: usize) -> Result<Self, MatrixError> {
        let len = data.len();
        let within_bounds = rows > 0 && cols > 0 && rows <= len && cols <= len;
        if !within_bounds || rows * cols != len {
            return Err(MatrixError::InvalidShape { rows, cols, len });
        }
        Ok(Self::from_parts(data, rows, cols))
    }

    /// Builds the `n`-by-`n` identity matrix. `n` must be positive.
    pub fn identity(n: usize) -> Result<Self, MatrixError> {
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            data[i * n + i] = 1.0;
        }
        Self::from_vec(data, n, n)
    }

    /// Constructor for buffers whose shape is already known to be valid.
    /// Measures the per-column display widths the renderer relies on.
    fn from_parts(data: Vec<f64>, rows: usize, cols: usize) -> Self {
        debug_assert_eq!(rows * cols, data.len());
        let mut col_widths = vec![0; cols];
        for (i, value) in data.iter().enumerate() {
            let width = format_value(*value).len();
            let col = i % cols;
            if width > col_widths[col] {
                col_widths[col] = width;
            }
        }
        Self {
            data,
            rows,
            cols,
            col_widths,
        }
    }

    pub fn nrows(&self) -> usize {
        self.rows
    }

    pub fn ncols(&self) -> usize {
        self.cols
    }

    /// The `(rows, cols)` pair.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// The backing row-major buffer.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Row-major offset of `(row, col)`. Every element access in this
    /// module goes through here; there is no second index formula to keep
    /// in sync.
    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Returns the element at `(row, col)`, or
    /// [`MatrixError::IndexOutOfRange`] when either index is out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Result<f64, MatrixError> {
        if row >= self.rows {
            return Err(MatrixError::IndexOutOfRange {
                axis: "row",
                index: row,
                extent: self.rows,
            });
        }
        if col >= self.cols {
            return Err(MatrixError::IndexOutOfRange {
                axis: "column",
                index: col,
                extent: self.cols,
            });
        }
        Ok(self.data[self.offset(row, col)])
    }

    fn elementwise(
        &self,
        other: &Matrix,
        op: &'static str,
        f: impl Fn(f64, f64) -> f64,
    ) -> Result<Matrix, MatrixError> {
        if self.shape() != other.shape() {
            return Err(MatrixError::DimensionMismatch {
                op,
                left: self.shape(),
                right: other.shape(),
            });
        }
        let data = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(a, b)| f(*a, *b))
            .collect();
        Ok(Matrix::from_parts(data, self.rows, self.cols))
    }

    /// Elementwise sum. Both operands must share a shape.
    pub fn sum(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        self.elementwise(other, "sum", |a, b| a + b)
    }

    /// Elementwise difference. Both operands must share a shape.
    pub fn subtract(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        self.elementwise(other, "subtract", |a, b| a - b)
    }

    /// Hadamard (elementwise) product. Both operands must share a shape.
    pub fn hadamard(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        self.elementwise(other, "hadamard-multiply", |a, b| a * b)
    }

    /// Matrix product. Requires `self.ncols() == other.nrows()`.
    ///
    /// Each output cell is the dot product of a row of `self` and a column
    /// of `other`, accumulated over ascending `k`; the traversal order is
    /// part of the contract so results are reproducible bit-for-bit.
    pub fn multiply(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        if self.cols != other.rows {
            return Err(MatrixError::DimensionMismatch {
                op: "multiply",
                left: self.shape(),
                right: other.shape(),
            });
        }
        let mut data = vec![0.0; self.rows * other.cols];
        for i in 0..self.rows {
            for j in 0..other.cols {
                let mut dot = 0.0;
                for k in 0..self.cols {
                    dot += self.data[self.offset(i, k)] * other.data[other.offset(k, j)];
                }
                data[i * other.cols + j] = dot;
            }
        }
        Ok(Matrix::from_parts(data, self.rows, other.cols))
    }

    /// Multiplies every element by `scalar`.
    pub fn scale(&self, scalar: f64) -> Matrix {
        let data = self.data.iter().map(|v| v * scalar).collect();
        Matrix::from_parts(data, self.rows, self.cols)
    }

    /// The transpose: element `(i, j)` of the result is `(j, i)` of `self`.
    pub fn transpose(&self) -> Matrix {
        let mut data = Vec::with_capacity(self.data.len());
        for col in 0..self.cols {
            for row in 0..self.rows {
                data.push(self.data[self.offset(row, col)]);
            }
        }
        Matrix::from_parts(data, self.cols, self.rows)
    }

    /// Surrounds the matrix with `layers` rings of zeros, growing both
    /// dimensions by `2 * layers`. `layers` must be at least 1.
    pub fn zero_pad(&self, layers: usize) -> Result<Matrix, MatrixError> {
        if layers == 0 {
            return Err(MatrixError::InvalidShape {
                rows: 0,
                cols: 0,
                len: self.data.len(),
            });
        }
        let new_rows = self.rows + 2 * layers;
        let new_cols = self.cols + 2 * layers;
        let mut data = vec![0.0; new_rows * new_cols];
        for row in 0..self.rows {
            let src = self.offset(row, 0);
            let dst = (row + layers) * new_cols + layers;
            data[dst..dst + self.cols].copy_from_slice(&self.data[src..src + self.cols]);
        }
        Ok(Matrix::from_parts(data, new_rows, new_cols))
    }

    /// Reinterprets the matrix as a single row, preserving element order.
    pub fn flatten(&self) -> Matrix {
        Matrix::from_parts(self.data.clone(), 1, self.data.len())
    }

    /// Lays the same flat sequence out under new dimensions. The new shape
    /// must cover exactly as many elements as the old one.
    pub fn reshape(&self, rows: usize, cols: usize) -> Result<Matrix, MatrixError> {
        Matrix::from_vec(self.data.clone(), rows, cols)
    }

    /// Copies row `row` out as a `1 x cols` matrix.
    pub fn row(&self, row: usize) -> Result<Matrix, MatrixError> {
        if row >= self.rows {
            return Err(MatrixError::IndexOutOfRange {
                axis: "row",
                index: row,
                extent: self.rows,
            });
        }
        let start = self.offset(row, 0);
        let values = self.data[start..start + self.cols].to_vec();
        Ok(Matrix::from_parts(values, 1, self.cols))
    }

    /// Copies column `col` out as a `rows x 1` matrix. The read strides by
    /// `cols` through the flat buffer.
    pub fn column(&self, col: usize) -> Result<Matrix, MatrixError> {
        if col >= self.cols {
            return Err(MatrixError::IndexOutOfRange {
                axis: "column",
                index: col,
                extent: self.cols,
            });
        }
        let values = (0..self.rows)
            .map(|row| self.data[self.offset(row, col)])
            .collect();
        Ok(Matrix::from_parts(values, self.rows, 1))
    }

    /// Whether the matrix equals its own transpose. Non-square matrices
    /// are never symmetric.
    pub fn is_symmetric(&self) -> bool {
        if self.rows != self.cols {
            return false;
        }
        for row in 0..self.rows {
            for col in (row + 1)..self.cols {
                if self.data[self.offset(row, col)] != self.data[self.offset(col, row)] {
                    return false;
                }
            }
        }
        true
    }

    fn format_row(&self, row: usize) -> String {
        let truncate = self.cols >= TRUNCATION_THRESHOLD;
        let mut out = String::from("[");
        let mut first = true;
        for col in 0..self.cols {
            if truncate && col >= SHOWN_EDGE && col < self.cols - SHOWN_EDGE {
                if col == SHOWN_EDGE {
                    out.push_str(" ...");
                }
                continue;
            }
            if !first {
                out.push(' ');
            }
            let value = format_value(self.data[self.offset(row, col)]);
            out.push_str(&format!("{:>width$}", value, width = self.col_widths[col]));
            first = false;
        }
        out.push(']');
        out
    }
}

impl fmt::Display for Matrix {
    /// Renders the matrix as bracketed rows with right-aligned columns.
    ///
    /// Rows past the first are indented one space so the columns line up
    /// under the opening bracket. Dimensions at or past
    /// [`TRUNCATION_THRESHOLD`] collapse to their first and last
    /// [`SHOWN_EDGE`] entries around a `...` marker.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let truncate = self.rows >= TRUNCATION_THRESHOLD;
        let mut lines = Vec::new();
        for row in 0..self.rows {
            if truncate && row >= SHOWN_EDGE && row < self.rows - SHOWN_EDGE {
                if row == SHOWN_EDGE {
                    lines.push(String::from(" ..."));
                }
                continue;
            }
            let indent = if row == 0 { "" } else { " " };
            lines.push(format!("{}{}", indent, self.format_row(row)));
        }
        write!(f, "[{}]", lines.join("\n"))
    }
}

impl PartialEq for Matrix {
    /// Matrices are equal iff their shapes and element sequences are equal.
    /// The display-width table is derived from the data and does not
    /// participate.
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows && self.cols == other.cols && self.data == other.data
    }
}

impl Hash for Matrix {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rows.hash(state);
        self.cols.hash(state);
        for value in &self.data {
            // +0.0 and -0.0 compare equal, so they must hash alike.
            let canonical = if *value == 0.0 { 0.0f64 } else { *value };
            canonical.to_bits().hash(state);
        }
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    /// Panicking convenience accessor; [`Matrix::get`] is the checked form.
    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        assert!(
            row < self.rows && col < self.cols,
            "matrix index ({}, {}) out of bounds for shape {}x{}",
            row,
            col,
            self.rows,
            self.cols
        );
        &self.data[self.offset(row, col)]
    }
}

/// Errors reported by matrix construction, access, and arithmetic.
///
/// All three are programmer errors surfaced synchronously to the caller; the
/// library never substitutes defaults or returns partial results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    /// The requested dimensions are not positive or do not multiply out to
    /// the buffer length. Zeroed dimension fields mean a size parameter
    /// that must be at least 1 was zero.
    InvalidShape {
        rows: usize,
        cols: usize,
        len: usize,
    },
    /// Operand shapes are incompatible for the named binary operation.
    DimensionMismatch {
        op: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },
    /// A row or column index fell outside the matrix's bounds.
    IndexOutOfRange {
        axis: &'static str,
        index: usize,
        extent: usize,
    },
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrixError::InvalidShape { rows, cols, len } => {
                if *rows == 0 || *cols == 0 {
                    write!(
                        f,
                        "matrix dimensions must be positive (requested {}x{})",
                        rows, cols
                    )
                } else {
                    write!(
                        f,
                        "cannot arrange a buffer of {} elements as a {}x{} matrix",
                        len, rows, cols
                    )
                }
            }
            MatrixError::DimensionMismatch { op, left, right } => write!(
                f,
                "cannot {} a {}x{} matrix with a {}x{} matrix",
                op, left.0, left.1, right.0, right.1
            ),
            MatrixError::IndexOutOfRange {
                axis,
                index,
                extent,
            } => write!(
                f,
                "{} index {} is out of bounds for a matrix with {} {}s",
                axis, index, extent, axis
            ),
        }
    }
}

impl Error for MatrixError {}
