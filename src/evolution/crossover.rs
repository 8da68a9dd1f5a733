//! Recombination of two parent flow assignments.

use crate::model::{FlowSolution, SquareMatrix};
use rand::Rng;

/// How the child's flow matrix is assembled from two parents.
///
/// Both policies work row-by-row: a node's entire outgoing row comes
/// verbatim from one parent, so the child inherits non-negative flow
/// confined to admissible edges from whichever parent contributed the
/// row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CrossoverPolicy {
    /// Each row's parent is chosen by fair coin.
    #[default]
    RowUniform,

    /// Rows before a random split point come from the first parent, the
    /// rest from the second.
    RowOnePoint,
}

/// Produces one child by recombining two parents' storage matrices.
///
/// The child owns a fresh matrix (no shared backing store with either
/// parent), carries the first parent's demand copy, and is returned
/// unscored — callers evaluate it before any comparison.
///
/// # Panics
///
/// Panics if the parents' matrices differ in size.
pub fn crossover<R: Rng + ?Sized>(
    policy: CrossoverPolicy,
    parent1: &FlowSolution,
    parent2: &FlowSolution,
    rng: &mut R,
) -> FlowSolution {
    let n = parent1.storage().size();
    assert_eq!(
        n,
        parent2.storage().size(),
        "parents must share dimensions"
    );

    let mut storage = SquareMatrix::new(n);
    match policy {
        CrossoverPolicy::RowUniform => {
            for row in 0..n {
                let source = if rng.random_bool(0.5) { parent1 } else { parent2 };
                storage.set_row(row, source.storage().row(row));
            }
        }
        CrossoverPolicy::RowOnePoint => {
            let point = rng.random_range(0..n);
            for row in 0..n {
                let source = if row < point { parent1 } else { parent2 };
                storage.set_row(row, source.storage().row(row));
            }
        }
    }

    FlowSolution::unscored(storage, parent1.demand().to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn parent(n: usize, value: i64) -> FlowSolution {
        let mut storage = SquareMatrix::new(n);
        for i in 0..n {
            for j in 0..n {
                if i != j {
                    storage.set(i, j, value);
                }
            }
        }
        FlowSolution::unscored(storage, vec![0; n])
    }

    #[test]
    fn test_every_row_comes_from_a_parent() {
        let p1 = parent(4, 1);
        let p2 = parent(4, 2);
        let mut rng = StdRng::seed_from_u64(42);

        for policy in [CrossoverPolicy::RowUniform, CrossoverPolicy::RowOnePoint] {
            let child = crossover(policy, &p1, &p2, &mut rng);
            for row in 0..4 {
                let r = child.storage().row(row);
                assert!(
                    r == p1.storage().row(row) || r == p2.storage().row(row),
                    "{policy:?} produced a row from neither parent"
                );
            }
        }
    }

    #[test]
    fn test_one_point_is_a_prefix_suffix_split() {
        let p1 = parent(6, 1);
        let p2 = parent(6, 2);
        let mut rng = StdRng::seed_from_u64(3);
        let child = crossover(CrossoverPolicy::RowOnePoint, &p1, &p2, &mut rng);

        // Once a row comes from parent 2, all later rows must too.
        let mut seen_second = false;
        for row in 0..6 {
            let from_second = child.storage().row(row) == p2.storage().row(row);
            if seen_second {
                assert!(from_second, "parent-1 row after the split point");
            }
            seen_second |= from_second;
        }
    }

    #[test]
    fn test_child_is_unscored_and_independent() {
        let p1 = parent(3, 1);
        let p2 = parent(3, 2);
        let mut rng = StdRng::seed_from_u64(9);
        let child = crossover(CrossoverPolicy::RowUniform, &p1, &p2, &mut rng);

        assert!(!child.is_scored());
        assert_eq!(child.demand(), p1.demand());
    }

    #[test]
    fn test_uniform_mixes_both_parents_eventually() {
        let p1 = parent(5, 1);
        let p2 = parent(5, 2);
        let mut rng = StdRng::seed_from_u64(42);

        let mut saw_mixed = false;
        for _ in 0..20 {
            let child = crossover(CrossoverPolicy::RowUniform, &p1, &p2, &mut rng);
            let from_p1 = (0..5)
                .filter(|&row| child.storage().row(row) == p1.storage().row(row))
                .count();
            if from_p1 > 0 && from_p1 < 5 {
                saw_mixed = true;
                break;
            }
        }
        assert!(saw_mixed, "uniform crossover never mixed rows from both parents");
    }
}
