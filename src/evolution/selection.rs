//! Parent selection strategies.
//!
//! Selection determines which population members become parents for
//! reproduction. All strategies assume minimization (lower fitness =
//! better) over integer fitness values.

use crate::model::FlowSolution;
use rand::Rng;

/// Selection strategy for choosing parents.
///
/// # Examples
///
/// ```
/// use flowheur::evolution::Selection;
///
/// // Tournament with size 3 (moderate selection pressure)
/// let sel = Selection::Tournament(3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Selection {
    /// Tournament selection: pick `k` members at random, select the best.
    ///
    /// Higher `k` = stronger selection pressure; 2–5 is typical.
    Tournament(usize),

    /// Fitness-proportionate (roulette wheel) selection with inverse
    /// fitness transformation, since lower fitness is better.
    Roulette,

    /// Rank-based selection: probability proportional to rank position
    /// rather than raw fitness, avoiding roulette's scaling problems.
    Rank,
}

impl Default for Selection {
    fn default() -> Self {
        Selection::Tournament(3)
    }
}

impl Selection {
    /// Selects a parent index from the population.
    ///
    /// # Panics
    /// Panics if `population` is empty.
    pub fn select<R: Rng + ?Sized>(&self, population: &[FlowSolution], rng: &mut R) -> usize {
        assert!(!population.is_empty(), "cannot select from empty population");

        match self {
            Selection::Tournament(k) => tournament(population, *k, rng),
            Selection::Roulette => roulette(population, rng),
            Selection::Rank => rank(population, rng),
        }
    }
}

/// Tournament selection: pick k random members, return the best.
fn tournament<R: Rng + ?Sized>(population: &[FlowSolution], k: usize, rng: &mut R) -> usize {
    let k = k.max(1);
    let n = population.len();

    let mut best_idx = rng.random_range(0..n);
    for _ in 1..k {
        let idx = rng.random_range(0..n);
        if population[idx].fitness() < population[best_idx].fitness() {
            best_idx = idx;
        }
    }
    best_idx
}

/// Roulette wheel selection using inverse fitness transformation.
///
/// For minimization: weight_i = max_fitness - fitness_i + epsilon, so the
/// lowest-fitness member gets the highest weight.
fn roulette<R: Rng + ?Sized>(population: &[FlowSolution], rng: &mut R) -> usize {
    let n = population.len();
    if n == 1 {
        return 0;
    }

    let fitnesses: Vec<f64> = population.iter().map(|s| s.fitness() as f64).collect();
    let max_fitness = fitnesses.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

    let epsilon = 1e-10;
    let weights: Vec<f64> = fitnesses
        .iter()
        .map(|&f| (max_fitness - f + epsilon).max(epsilon))
        .collect();

    let total: f64 = weights.iter().sum();
    if total <= 0.0 {
        return rng.random_range(0..n);
    }

    let threshold = rng.random_range(0.0..total);
    let mut cumulative = 0.0;
    for (i, &w) in weights.iter().enumerate() {
        cumulative += w;
        if cumulative > threshold {
            return i;
        }
    }

    n - 1 // floating-point fallback
}

/// Rank-based selection using linear ranking over fitness order.
fn rank<R: Rng + ?Sized>(population: &[FlowSolution], rng: &mut R) -> usize {
    let n = population.len();
    if n == 1 {
        return 0;
    }

    // Integer fitness gives a total order; stable sort keeps ties
    // first-seen-first.
    let mut indexed: Vec<(usize, i64)> = population
        .iter()
        .enumerate()
        .map(|(i, s)| (i, s.fitness()))
        .collect();
    indexed.sort_by_key(|&(_, f)| f);

    // Linear ranking: rank 0 (best) gets weight n, the worst gets 1.
    let total: f64 = (n * (n + 1)) as f64 / 2.0;
    let threshold = rng.random_range(0.0..total);
    let mut cumulative = 0.0;

    for (rank, &(original_idx, _)) in indexed.iter().enumerate() {
        cumulative += (n - rank) as f64;
        if cumulative > threshold {
            return original_idx;
        }
    }

    indexed.last().expect("population has n >= 2 members").0 // fallback
}
