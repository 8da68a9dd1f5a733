//! Scalar fitness of a flow assignment.

use crate::model::{Costs, FlowSolution, SquareMatrix};

/// Computes the combined cost of a flow matrix:
/// `Σ storage[i][j] · (A + B + C)[i][j]` over every positive entry.
///
/// Pure and deterministic: the same storage against the same cost data
/// always yields the same fitness, and integer accumulation makes the
/// summation order irrelevant. Lower is better.
///
/// Admissibility is *not* validated here — flow sitting on a disallowed
/// edge is still costed. Feasibility is the search loop's concern, not
/// the evaluator's.
///
/// # Panics
///
/// Panics if `storage` and `costs` do not share dimensions.
pub fn evaluate(storage: &SquareMatrix, costs: &Costs) -> i64 {
    assert_eq!(
        storage.size(),
        costs.size(),
        "storage and cost matrices must share dimensions"
    );
    let n = storage.size();
    let mut fitness = 0i64;
    for from in 0..n {
        for to in 0..n {
            let flow = storage.get(from, to);
            if flow > 0 {
                fitness += flow * costs.combined(from, to);
            }
        }
    }
    fitness
}

/// Scores a solution in place: evaluates its storage and stores the
/// result as its fitness.
///
/// The engines call this immediately after a solution's storage is
/// finalized, before the solution is compared against any other.
pub fn score(solution: &mut FlowSolution, costs: &Costs) {
    let fitness = evaluate(solution.storage(), costs);
    solution.set_fitness(fitness);
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn uniform_costs(n: usize, unit: i64) -> Costs {
        let mut a = SquareMatrix::new(n);
        for i in 0..n {
            for j in 0..n {
                if i != j {
                    a.set(i, j, unit);
                }
            }
        }
        Costs::new(a, SquareMatrix::new(n), SquareMatrix::new(n)).unwrap()
    }

    #[test]
    fn test_zero_storage_costs_nothing() {
        let costs = uniform_costs(3, 7);
        assert_eq!(evaluate(&SquareMatrix::new(3), &costs), 0);
    }

    #[test]
    fn test_sums_all_three_dimensions() {
        let a = SquareMatrix::from_grid(2, vec![0, 1, 0, 0]).unwrap();
        let b = SquareMatrix::from_grid(2, vec![0, 10, 0, 0]).unwrap();
        let c = SquareMatrix::from_grid(2, vec![0, 100, 0, 0]).unwrap();
        let costs = Costs::new(a, b, c).unwrap();

        let mut storage = SquareMatrix::new(2);
        storage.set(0, 1, 3);
        assert_eq!(evaluate(&storage, &costs), 3 * 111);
    }

    #[test]
    fn test_flow_on_zero_cost_edge_is_counted_at_zero() {
        // A disallowed edge has zero cost in every dimension; flow there
        // is still summed, contributing nothing.
        let costs = uniform_costs(3, 5);
        let mut storage = SquareMatrix::new(3);
        storage.set(0, 0, 4); // self-loop, zero cost
        storage.set(0, 1, 2);
        assert_eq!(evaluate(&storage, &costs), 10);
    }

    #[test]
    fn test_score_sets_fitness() {
        let costs = uniform_costs(2, 3);
        let mut storage = SquareMatrix::new(2);
        storage.set(0, 1, 2);
        let mut solution = FlowSolution::unscored(storage, vec![-2, 2]);
        assert!(!solution.is_scored());
        score(&mut solution, &costs);
        assert_eq!(solution.fitness(), 6);
        assert!(solution.is_scored());
    }

    proptest! {
        /// Evaluating the same storage twice yields identical fitness.
        #[test]
        fn prop_evaluate_deterministic(
            n in 1usize..5,
            flows in proptest::collection::vec(0i64..20, 0..25),
            units in proptest::collection::vec(0i64..9, 0..25),
        ) {
            let fill = |seed: &[i64]| {
                let mut m = SquareMatrix::new(n);
                for i in 0..n {
                    for j in 0..n {
                        m.set(i, j, seed.get(i * n + j).copied().unwrap_or(0));
                    }
                }
                m
            };
            let storage = fill(&flows);
            let a = fill(&units);
            let costs =
                Costs::new(a, SquareMatrix::new(n), SquareMatrix::new(n)).unwrap();
            prop_assert_eq!(evaluate(&storage, &costs), evaluate(&storage, &costs));
        }
    }
}
