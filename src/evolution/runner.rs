//! Evolutionary loop execution.

use super::config::EvolutionConfig;
use super::crossover::crossover;
use crate::evaluation::score;
use crate::init::initialize;
use crate::model::{Costs, FlowSolution};
use crate::neighborhood::neighbor;
use crate::network::Network;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Result of an evolutionary run.
#[derive(Debug, Clone)]
pub struct EvolutionResult {
    /// The best member of the final ranked population. May be infeasible
    /// if the search never reached a conserving assignment; callers
    /// detect that with [`FlowSolution::is_feasible`].
    pub best: FlowSolution,

    /// Fitness of the best member (same as `best.fitness()`).
    pub best_fitness: i64,

    /// Number of generations executed.
    pub generations: usize,

    /// Ranked-best fitness per generation: the initial population's best,
    /// then one entry after each select/reproduce step.
    pub fitness_history: Vec<i64>,
}

/// Sorts the population ascending by fitness, best first.
///
/// The sort is stable: members with equal fitness keep their relative
/// order, so ties break first-seen-first.
pub fn rank(population: &mut [FlowSolution]) {
    population.sort_by_key(FlowSolution::fitness);
}

/// Executes the evolutionary search: populate, then rank and reproduce
/// for a configured number of generations.
///
/// Each generation the ranked population is reduced to its elites (the
/// best member always survives unmodified) and refilled to the invariant
/// population size: two parents are selected, recombined with probability
/// `crossover_rate` (otherwise the first parent is cloned), perturbed by
/// one neighborhood move with probability `mutation_rate`, and scored
/// before insertion — no member ever enters a comparison with a stale or
/// unset fitness.
///
/// # Usage
///
/// ```ignore
/// let result = EvolutionRunner::run(instance.demand(), &network, instance.costs(), &config);
/// println!("best fitness: {}", result.best_fitness);
/// ```
pub struct EvolutionRunner;

impl EvolutionRunner {
    /// Runs the evolutionary search.
    ///
    /// # Panics
    /// Panics if the configuration is invalid (call
    /// [`EvolutionConfig::validate`] first to get a descriptive error) or
    /// if `demand` and `network` disagree on the vertex count.
    pub fn run(
        demand: &[i64],
        network: &Network,
        costs: &Costs,
        config: &EvolutionConfig,
    ) -> EvolutionResult {
        config.validate().expect("invalid EvolutionConfig");

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        // Populate
        let mut population: Vec<FlowSolution> = (0..config.population_size)
            .map(|_| {
                let mut member = initialize(config.init, demand, network);
                score(&mut member, costs);
                member
            })
            .collect();

        let mut fitness_history = Vec::with_capacity(config.generations + 1);

        for _ in 0..config.generations {
            // Rank
            rank(&mut population);
            fitness_history.push(population[0].fitness());

            // Select / reproduce
            let elite_count = config.elite_count();
            let mut next_gen: Vec<FlowSolution> = population[..elite_count].to_vec();

            while next_gen.len() < config.population_size {
                let p1 = config.selection.select(&population, &mut rng);
                let p2 = config.selection.select(&population, &mut rng);

                let mut child = if rng.random_range(0.0..1.0) < config.crossover_rate {
                    crossover(config.crossover, &population[p1], &population[p2], &mut rng)
                } else {
                    population[p1].clone()
                };

                if rng.random_range(0.0..1.0) < config.mutation_rate {
                    child = neighbor(&child, network, &mut rng);
                }

                score(&mut child, costs);
                next_gen.push(child);
            }

            population = next_gen;
        }

        rank(&mut population);
        fitness_history.push(population[0].fitness());

        let best = population[0].clone();
        EvolutionResult {
            best_fitness: best.fitness(),
            best,
            generations: config.generations,
            fitness_history,
        }
    }
}
