//! Candidate flow assignment.

use super::matrix::SquareMatrix;
use crate::network::Network;

/// A candidate solution: a flow assignment over the network.
///
/// `storage[i][j]` is the number of flow units sent from node `i` to node
/// `j`. The solution carries its own copy of the demand vector it was
/// built against and a scalar fitness (combined cost, lower is better).
///
/// A freshly derived solution starts *unscored*
/// ([`FlowSolution::UNSCORED`], the integer analogue of an infinite
/// fitness); the search engines score it via
/// [`crate::evaluation::score`] before it is compared against anything.
/// The storage matrix is immutable once wrapped, so a scored fitness can
/// never go stale — deriving a changed solution always goes through
/// [`FlowSolution::unscored`] with a fresh, independently owned matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlowSolution {
    storage: SquareMatrix,
    demand: Vec<i64>,
    fitness: i64,
}

impl FlowSolution {
    /// Sentinel fitness of a solution that has not been scored yet.
    pub const UNSCORED: i64 = i64::MAX;

    /// Wraps a finalized flow matrix and its demand vector, unscored.
    ///
    /// # Panics
    ///
    /// Panics if the demand length differs from the matrix dimension.
    pub fn unscored(storage: SquareMatrix, demand: Vec<i64>) -> Self {
        assert_eq!(
            storage.size(),
            demand.len(),
            "storage and demand must share dimensions"
        );
        Self {
            storage,
            demand,
            fitness: Self::UNSCORED,
        }
    }

    /// The flow matrix.
    pub fn storage(&self) -> &SquareMatrix {
        &self.storage
    }

    /// The demand vector this solution was built against.
    pub fn demand(&self) -> &[i64] {
        &self.demand
    }

    /// Current fitness ([`FlowSolution::UNSCORED`] if not yet scored).
    pub fn fitness(&self) -> i64 {
        self.fitness
    }

    /// Sets the fitness. Called by the evaluator after scoring.
    pub fn set_fitness(&mut self, fitness: i64) {
        self.fitness = fitness;
    }

    /// True once the solution has been scored.
    pub fn is_scored(&self) -> bool {
        self.fitness != Self::UNSCORED
    }

    /// Conservation residual at `node`: outflow minus inflow minus demand.
    ///
    /// Zero means the node is balanced.
    pub fn imbalance(&self, node: usize) -> i64 {
        self.storage.row_sum(node) - self.storage.col_sum(node) - self.demand[node]
    }

    /// True if the solution is feasible: every node balanced, every entry
    /// non-negative, and positive flow only on admissible edges.
    pub fn is_feasible(&self, network: &Network) -> bool {
        let n = self.storage.size();
        if n != network.size() {
            return false;
        }
        for node in 0..n {
            if self.imbalance(node) != 0 {
                return false;
            }
        }
        for from in 0..n {
            for to in 0..n {
                let flow = self.storage.get(from, to);
                if flow < 0 {
                    return false;
                }
                if flow > 0 && !network.is_allowed(from, to) {
                    return false;
                }
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Costs;

    fn full_network(n: usize) -> Network {
        // Off-diagonal ones in dimension A: every directed edge admissible.
        let mut a = SquareMatrix::new(n);
        for i in 0..n {
            for j in 0..n {
                if i != j {
                    a.set(i, j, 1);
                }
            }
        }
        let costs = Costs::new(a, SquareMatrix::new(n), SquareMatrix::new(n)).unwrap();
        Network::from_costs(&costs)
    }

    #[test]
    fn test_unscored_sentinel() {
        let s = FlowSolution::unscored(SquareMatrix::new(2), vec![0, 0]);
        assert!(!s.is_scored());
        assert_eq!(s.fitness(), FlowSolution::UNSCORED);
    }

    #[test]
    fn test_imbalance() {
        // 5 units from source (node 2) to node 0; node 0 wants 3.
        let mut storage = SquareMatrix::new(3);
        storage.set(2, 0, 5);
        let s = FlowSolution::unscored(storage, vec![-3, -2, 5]);
        assert_eq!(s.imbalance(0), -2); // received 2 too many
        assert_eq!(s.imbalance(1), 2); // received nothing
        assert_eq!(s.imbalance(2), 0);
    }

    #[test]
    fn test_feasible_star_assignment() {
        let mut storage = SquareMatrix::new(3);
        storage.set(2, 0, 3);
        storage.set(2, 1, 2);
        let s = FlowSolution::unscored(storage, vec![-3, -2, 5]);
        assert!(s.is_feasible(&full_network(3)));
    }

    #[test]
    fn test_infeasible_when_unbalanced() {
        let storage = SquareMatrix::new(3);
        let s = FlowSolution::unscored(storage, vec![-3, -2, 5]);
        assert!(!s.is_feasible(&full_network(3)));
    }

    #[test]
    fn test_infeasible_on_disallowed_edge() {
        // Self-loops carry zero cost in every dimension, so they are
        // disallowed; flow on one must fail feasibility even if balanced.
        let mut storage = SquareMatrix::new(3);
        storage.set(2, 0, 3);
        storage.set(2, 1, 2);
        storage.set(0, 0, 1);
        let s = FlowSolution::unscored(storage, vec![-3, -2, 5]);
        assert!(!s.is_feasible(&full_network(3)));
    }

    #[test]
    fn test_infeasible_on_negative_flow() {
        let mut storage = SquareMatrix::new(2);
        storage.set(0, 1, -1);
        storage.set(1, 0, -1);
        let s = FlowSolution::unscored(storage, vec![0, 0]);
        assert!(!s.is_feasible(&full_network(2)));
    }

    #[test]
    #[should_panic(expected = "storage and demand must share dimensions")]
    fn test_dimension_guard() {
        FlowSolution::unscored(SquareMatrix::new(2), vec![0, 0, 0]);
    }
}
