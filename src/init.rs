//! Initial flow assignment strategies.

use crate::model::{FlowSolution, SquareMatrix};
use crate::network::Network;

/// How the starting flow assignment is constructed.
///
/// All strategies produce non-negative flow confined to admissible edges.
/// `Direct` and `Proportional` aim for a conservation-satisfying start on
/// star-shaped masks around the source but may leave residual imbalance
/// when the mask is too sparse; such a start is returned as-is and scored
/// normally — repairing or discarding it is the search loop's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InitStrategy {
    /// All-zero storage. Infeasible unless the demand vector is all zero;
    /// a baseline the search has to build up from, not a valid start.
    Zero,

    /// Route each node's full requirement on its direct source edge
    /// (`source → node` for consumers, `node → source` for suppliers),
    /// visiting nodes in index order and skipping any node whose direct
    /// edge is not admissible.
    Direct,

    /// Split the source's total supply across all admissible outgoing
    /// source edges in proportion to each destination's demand magnitude;
    /// the integer-division remainder lands on the first admissible
    /// source edge.
    #[default]
    Proportional,
}

/// Produces a starting solution under the given strategy.
///
/// The result is unscored; callers evaluate it immediately. The last node
/// is taken as the source, matching the demand-vector convention.
///
/// # Panics
///
/// Panics if the demand length differs from the network dimension.
pub fn initialize(strategy: InitStrategy, demand: &[i64], network: &Network) -> FlowSolution {
    assert_eq!(
        demand.len(),
        network.size(),
        "demand and network must share dimensions"
    );
    let storage = match strategy {
        InitStrategy::Zero => SquareMatrix::new(network.size()),
        InitStrategy::Direct => direct(demand, network),
        InitStrategy::Proportional => proportional(demand, network),
    };
    FlowSolution::unscored(storage, demand.to_vec())
}

fn direct(demand: &[i64], network: &Network) -> SquareMatrix {
    let n = network.size();
    let source = n - 1;
    let mut storage = SquareMatrix::new(n);
    for node in 0..n {
        if node == source {
            continue;
        }
        let d = demand[node];
        if d < 0 && network.is_allowed(source, node) {
            storage.set(source, node, -d);
        } else if d > 0 && network.is_allowed(node, source) {
            storage.set(node, source, d);
        }
    }
    storage
}

fn proportional(demand: &[i64], network: &Network) -> SquareMatrix {
    let n = network.size();
    let source = n - 1;
    let mut storage = SquareMatrix::new(n);

    let supply = demand[source];
    if supply <= 0 {
        return storage;
    }
    let heads: Vec<usize> = network.allowed_from(source).filter(|&to| to != source).collect();
    let Some(&first) = heads.first() else {
        return storage;
    };

    let total_weight: i64 = heads.iter().map(|&to| demand[to].abs()).sum();
    if total_weight == 0 {
        storage.set(source, first, supply);
        return storage;
    }

    let mut distributed = 0i64;
    for &to in &heads {
        let share = supply * demand[to].abs() / total_weight;
        storage.set(source, to, share);
        distributed += share;
    }
    // Rounding remainder onto the first admissible edge.
    storage.add(source, first, supply - distributed);
    storage
}
