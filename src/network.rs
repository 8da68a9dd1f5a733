//! Admissible-edge network derived from the cost data.

use crate::model::{Costs, SquareMatrix};
use std::fmt;

/// Errors raised while constructing a [`Network`].
///
/// Both kinds are fatal for the instance at hand: the caller gets them
/// surfaced immediately and there is nothing to retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkError {
    /// Two matrices (or a matrix and the demand vector) disagree on the
    /// vertex count.
    DimensionMismatch { left: usize, right: usize },
    /// The instance has zero vertices.
    EmptyInput,
}

impl fmt::Display for NetworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkError::DimensionMismatch { left, right } => {
                write!(f, "dimension mismatch: {left} vs {right}")
            }
            NetworkError::EmptyInput => write!(f, "instance has zero vertices"),
        }
    }
}

impl std::error::Error for NetworkError {}

/// The admissible-edge mask of an instance.
///
/// `allowed[i][j]` is true iff the directed edge `(i, j)` is economically
/// meaningful in at least one cost dimension — a non-zero entry in at
/// least one of the three cost matrices. Built once per run and read-only
/// afterwards.
///
/// # Examples
///
/// ```
/// use flowheur::model::SquareMatrix;
/// use flowheur::network::Network;
///
/// let a = SquareMatrix::from_grid(2, vec![0, 3, 0, 0]).unwrap();
/// let b = SquareMatrix::new(2);
/// let c = SquareMatrix::from_grid(2, vec![0, 0, 4, 0]).unwrap();
/// let network = Network::build(&a, &b, &c).unwrap();
/// assert!(network.is_allowed(0, 1)); // non-zero in A
/// assert!(network.is_allowed(1, 0)); // non-zero in C
/// assert!(!network.is_allowed(0, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Network {
    size: usize,
    allowed: Vec<bool>,
}

impl Network {
    /// Derives the admissible-edge mask from the three cost matrices.
    ///
    /// Fails with [`NetworkError::DimensionMismatch`] if the matrices do
    /// not share identical dimensions, or [`NetworkError::EmptyInput`] if
    /// the vertex count is zero.
    pub fn build(
        a: &SquareMatrix,
        b: &SquareMatrix,
        c: &SquareMatrix,
    ) -> Result<Self, NetworkError> {
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
        let size = a.size();
        if size == 0 {
            return Err(NetworkError::EmptyInput);
        }

        let mut allowed = vec![false; size * size];
        for i in 0..size {
            for j in 0..size {
                allowed[i * size + j] =
                    a.get(i, j) != 0 || b.get(i, j) != 0 || c.get(i, j) != 0;
            }
        }
        Ok(Self { size, allowed })
    }

    /// Builds the mask from an already size-checked [`Costs`] bundle.
    pub fn from_costs(costs: &Costs) -> Self {
        Self::build(costs.a(), costs.b(), costs.c())
            .expect("Costs construction already validated dimensions")
    }

    /// Number of vertices.
    pub fn size(&self) -> usize {
        self.size
    }

    /// True if the directed edge `(from, to)` may carry flow.
    pub fn is_allowed(&self, from: usize, to: usize) -> bool {
        self.allowed[from * self.size + to]
    }

    /// Admissible heads of node `from`, in index order.
    pub fn allowed_from(&self, from: usize) -> impl Iterator<Item = usize> + '_ {
        (0..self.size).filter(move |&to| self.is_allowed(from, to))
    }

    /// Admissible tails into node `to`, in index order.
    pub fn allowed_into(&self, to: usize) -> impl Iterator<Item = usize> + '_ {
        (0..self.size).filter(move |&from| self.is_allowed(from, to))
    }

    /// Total number of admissible directed edges.
    pub fn edge_count(&self) -> usize {
        self.allowed.iter().filter(|&&a| a).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_build_dimension_mismatch() {
        let a = SquareMatrix::new(3);
        let b = SquareMatrix::new(3);
        let c = SquareMatrix::new(4);
        let err = Network::build(&a, &b, &c).unwrap_err();
        assert_eq!(err, NetworkError::DimensionMismatch { left: 3, right: 4 });
    }

    #[test]
    fn test_build_empty_input() {
        let z = SquareMatrix::new(0);
        assert_eq!(Network::build(&z, &z, &z).unwrap_err(), NetworkError::EmptyInput);
    }

    #[test]
    fn test_allowed_iterators_index_order() {
        let a = SquareMatrix::from_grid(3, vec![0, 1, 1, 0, 0, 0, 1, 0, 0]).unwrap();
        let z = SquareMatrix::new(3);
        let network = Network::build(&a, &z, &z).unwrap();
        assert_eq!(network.allowed_from(0).collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(network.allowed_into(0).collect::<Vec<_>>(), vec![2]);
        assert_eq!(network.edge_count(), 3);
    }

    #[test]
    fn test_error_display() {
        let err = NetworkError::DimensionMismatch { left: 2, right: 3 };
        assert_eq!(err.to_string(), "dimension mismatch: 2 vs 3");
        assert_eq!(NetworkError::EmptyInput.to_string(), "instance has zero vertices");
    }

    proptest! {
        /// An edge is admissible iff at least one dimension has a
        /// non-zero entry there, for every (i, j).
        #[test]
        fn prop_mask_matches_nonzero_entries(
            n in 1usize..6,
            seed_a in proptest::collection::vec(-3i64..4, 0..36),
            seed_b in proptest::collection::vec(-3i64..4, 0..36),
            seed_c in proptest::collection::vec(-3i64..4, 0..36),
        ) {
            let fill = |seed: &[i64]| {
                let mut m = SquareMatrix::new(n);
                for i in 0..n {
                    for j in 0..n {
                        let idx = i * n + j;
                        m.set(i, j, seed.get(idx).copied().unwrap_or(0));
                    }
                }
                m
            };
            let (a, b, c) = (fill(&seed_a), fill(&seed_b), fill(&seed_c));
            let network = Network::build(&a, &b, &c).unwrap();
            for i in 0..n {
                for j in 0..n {
                    let expected =
                        a.get(i, j) != 0 || b.get(i, j) != 0 || c.get(i, j) != 0;
                    prop_assert_eq!(network.is_allowed(i, j), expected);
                }
            }
        }
    }
}
