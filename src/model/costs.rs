//! The three cost dimensions of a problem instance.

use super::matrix::SquareMatrix;
use crate::network::NetworkError;

/// The three unit-cost matrices (dimensions A, B, C) of an instance.
///
/// Each entry is the cost of routing one unit of flow across that directed
/// edge under that dimension; a zero entry means the edge is not meaningful
/// under that dimension. The scalar cost of an edge is the sum across all
/// three dimensions.
///
/// # Examples
///
/// ```
/// use flowheur::model::{Costs, SquareMatrix};
///
/// let a = SquareMatrix::from_grid(2, vec![0, 3, 1, 0]).unwrap();
/// let b = SquareMatrix::new(2);
/// let c = SquareMatrix::from_grid(2, vec![0, 2, 0, 0]).unwrap();
/// let costs = Costs::new(a, b, c).unwrap();
/// assert_eq!(costs.combined(0, 1), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Costs {
    a: SquareMatrix,
    b: SquareMatrix,
    c: SquareMatrix,
}

impl Costs {
    /// Bundles three cost matrices.
    ///
    /// Fails with [`NetworkError::DimensionMismatch`] if the matrices do
    /// not share identical dimensions, or [`NetworkError::EmptyInput`] if
    /// they are zero-sized.
    pub fn new(a: SquareMatrix, b: SquareMatrix, c: SquareMatrix) -> Result<Self, NetworkError> {
        if a.size() != b.size() {
            return Err(NetworkError::DimensionMismatch {
                left: a.size(),
                right: b.size(),
            });
        }
        if a.size() != c.size() {
            return Err(NetworkError::DimensionMismatch {
                left: a.size(),
                right: c.size(),
            });
        }
        if a.size() == 0 {
            return Err(NetworkError::EmptyInput);
        }
        Ok(Self { a, b, c })
    }

    /// Number of vertices.
    pub fn size(&self) -> usize {
        self.a.size()
    }

    /// Combined unit cost of edge `(from, to)` across all three dimensions.
    pub fn combined(&self, from: usize, to: usize) -> i64 {
        self.a.get(from, to) + self.b.get(from, to) + self.c.get(from, to)
    }

    /// Cost matrix of dimension A.
    pub fn a(&self) -> &SquareMatrix {
        &self.a
    }

    /// Cost matrix of dimension B.
    pub fn b(&self) -> &SquareMatrix {
        &self.b
    }

    /// Cost matrix of dimension C.
    pub fn c(&self) -> &SquareMatrix {
        &self.c
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combined_sums_dimensions() {
        let a = SquareMatrix::from_grid(2, vec![0, 1, 2, 0]).unwrap();
        let b = SquareMatrix::from_grid(2, vec![0, 10, 0, 0]).unwrap();
        let c = SquareMatrix::from_grid(2, vec![0, 100, 0, 0]).unwrap();
        let costs = Costs::new(a, b, c).unwrap();
        assert_eq!(costs.combined(0, 1), 111);
        assert_eq!(costs.combined(1, 0), 2);
    }

    #[test]
    fn test_dimension_mismatch() {
        let a = SquareMatrix::new(3);
        let b = SquareMatrix::new(2);
        let c = SquareMatrix::new(3);
        let err = Costs::new(a, b, c).unwrap_err();
        assert_eq!(err, NetworkError::DimensionMismatch { left: 3, right: 2 });
    }

    #[test]
    fn test_empty_input() {
        let err = Costs::new(
            SquareMatrix::new(0),
            SquareMatrix::new(0),
            SquareMatrix::new(0),
        )
        .unwrap_err();
        assert_eq!(err, NetworkError::EmptyInput);
    }
}
