//! Dense square integer matrix.

/// A dense n×n integer matrix stored in row-major order.
///
/// Used both for the three unit-cost matrices of an instance and for the
/// flow `storage` of a candidate solution.
///
/// # Examples
///
/// ```
/// use flowheur::model::SquareMatrix;
///
/// let mut m = SquareMatrix::new(3);
/// m.set(0, 2, 7);
/// assert_eq!(m.get(0, 2), 7);
/// assert_eq!(m.size(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SquareMatrix {
    data: Vec<i64>,
    size: usize,
}

impl SquareMatrix {
    /// Creates a matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0; size * size],
            size,
        }
    }

    /// Creates a matrix from an explicit row-major n×n grid.
    ///
    /// Returns `None` if the data length doesn't match `size * size`.
    pub fn from_grid(size: usize, data: Vec<i64>) -> Option<Self> {
        if data.len() != size * size {
            return None;
        }
        Some(Self { data, size })
    }

    /// Creates a matrix from a slice of equal-length rows.
    ///
    /// Returns `None` if any row's length differs from the row count.
    pub fn from_rows(rows: &[Vec<i64>]) -> Option<Self> {
        let size = rows.len();
        let mut data = Vec::with_capacity(size * size);
        for row in rows {
            if row.len() != size {
                return None;
            }
            data.extend_from_slice(row);
        }
        Some(Self { data, size })
    }

    /// Returns the entry at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, row: usize, col: usize) -> i64 {
        self.data[row * self.size + col]
    }

    /// Sets the entry at `(row, col)`.
    pub fn set(&mut self, row: usize, col: usize, value: i64) {
        self.data[row * self.size + col] = value;
    }

    /// Adds `delta` to the entry at `(row, col)`.
    pub fn add(&mut self, row: usize, col: usize, delta: i64) {
        self.data[row * self.size + col] += delta;
    }

    /// Number of rows (and columns).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns row `row` as a slice.
    pub fn row(&self, row: usize) -> &[i64] {
        &self.data[row * self.size..(row + 1) * self.size]
    }

    /// Overwrites row `row` with the given values.
    ///
    /// # Panics
    ///
    /// Panics if `values.len() != self.size()`.
    pub fn set_row(&mut self, row: usize, values: &[i64]) {
        assert_eq!(values.len(), self.size, "row length must match matrix size");
        self.data[row * self.size..(row + 1) * self.size].copy_from_slice(values);
    }

    /// Sum of the entries in row `row` (total outflow of a node, for a
    /// flow matrix).
    pub fn row_sum(&self, row: usize) -> i64 {
        self.row(row).iter().sum()
    }

    /// Sum of the entries in column `col` (total inflow of a node, for a
    /// flow matrix).
    pub fn col_sum(&self, col: usize) -> i64 {
        (0..self.size).map(|row| self.get(row, col)).sum()
    }

    /// True if every entry is zero.
    pub fn is_zero(&self) -> bool {
        self.data.iter().all(|&v| v == 0)
    }
}
