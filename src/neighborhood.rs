//! The local neighborhood move.

use crate::model::FlowSolution;
use crate::network::Network;
use rand::Rng;

/// Derives one candidate neighbor from `current` by a single stochastic
/// local move: pick a random admissible edge carrying positive flow and
/// shift one unit onto an alternate admissible edge sharing one endpoint.
/// The shared endpoint is chosen at random — keeping the tail preserves
/// that node's outflow, keeping the head preserves that node's inflow.
///
/// The candidate owns an independent copy of the flow matrix; `current`
/// is never mutated. The result never carries a negative entry and never
/// places flow on a disallowed edge. Conservation is *not* guaranteed to
/// survive the move — the engines' accept/reject rules filter candidates.
///
/// When no positive admissible edge exists, or the chosen edge has no
/// alternate on either axis, the candidate is an unchanged copy.
pub fn neighbor<R: Rng + ?Sized>(
    current: &FlowSolution,
    network: &Network,
    rng: &mut R,
) -> FlowSolution {
    let mut storage = current.storage().clone();
    let n = network.size();

    let donors: Vec<(usize, usize)> = (0..n)
        .flat_map(|from| (0..n).map(move |to| (from, to)))
        .filter(|&(from, to)| storage.get(from, to) > 0 && network.is_allowed(from, to))
        .collect();

    if let Some(&(from, to)) = pick(&donors, rng) {
        let along_row = rng.random_bool(0.5);
        let target = alternate(network, from, to, along_row, rng)
            .or_else(|| alternate(network, from, to, !along_row, rng));
        if let Some((new_from, new_to)) = target {
            storage.add(from, to, -1);
            storage.add(new_from, new_to, 1);
        }
    }

    FlowSolution::unscored(storage, current.demand().to_vec())
}

/// A random alternate admissible edge for `(from, to)` that keeps the
/// tail (row axis) or the head (column axis) fixed.
fn alternate<R: Rng + ?Sized>(
    network: &Network,
    from: usize,
    to: usize,
    along_row: bool,
    rng: &mut R,
) -> Option<(usize, usize)> {
    let candidates: Vec<(usize, usize)> = if along_row {
        network
            .allowed_from(from)
            .filter(|&new_to| new_to != to)
            .map(|new_to| (from, new_to))
            .collect()
    } else {
        network
            .allowed_into(to)
            .filter(|&new_from| new_from != from)
            .map(|new_from| (new_from, to))
            .collect()
    };
    pick(&candidates, rng).copied()
}

fn pick<'a, T, R: Rng + ?Sized>(items: &'a [T], rng: &mut R) -> Option<&'a T> {
    if items.is_empty() {
        None
    } else {
        Some(&items[rng.random_range(0..items.len())])
    }
}
