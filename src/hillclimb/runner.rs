//! Hill-climbing execution loop.

use super::config::HillClimbConfig;
use crate::evaluation::score;
use crate::init::initialize;
use crate::model::{Costs, FlowSolution};
use crate::neighborhood::neighbor;
use crate::network::Network;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Result of a hill-climbing run.
#[derive(Debug, Clone)]
pub struct HillClimbResult {
    /// The best solution found across all restarts. May be infeasible if
    /// the search never reached a conserving assignment; callers detect
    /// that with [`FlowSolution::is_feasible`].
    pub best: FlowSolution,

    /// Fitness of the best solution (same as `best.fitness()`).
    pub best_fitness: i64,

    /// Total neighbor evaluations across all restarts.
    pub iterations: usize,

    /// Trace of the best-so-far fitness: the first restart's starting
    /// fitness, then one entry per accepted improvement of the
    /// cross-restart best.
    pub improvements: Vec<i64>,
}

/// Executes greedy local search with independent restarts.
///
/// Each restart initializes a fresh solution, scores it, and then runs
/// the configured number of iterations: generate one neighbor, score it,
/// and replace the current solution only on *strict* improvement — equal
/// fitness is rejected, worsening moves are never accepted, and an
/// accepted solution is never backtracked past. The accepted candidate
/// takes ownership as the new current solution; the previous one is
/// dropped, never aliased.
///
/// # Usage
///
/// ```ignore
/// let result = HillClimbRunner::run(instance.demand(), &network, instance.costs(), &config);
/// println!("best fitness: {}", result.best_fitness);
/// ```
pub struct HillClimbRunner;

impl HillClimbRunner {
    /// Runs the hill-climbing search.
    ///
    /// # Panics
    /// Panics if the configuration is invalid (call
    /// [`HillClimbConfig::validate`] first to get a descriptive error) or
    /// if `demand` and `network` disagree on the vertex count.
    pub fn run(
        demand: &[i64],
        network: &Network,
        costs: &Costs,
        config: &HillClimbConfig,
    ) -> HillClimbResult {
        config.validate().expect("invalid HillClimbConfig");

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        let mut best: Option<FlowSolution> = None;
        let mut improvements = Vec::new();
        let mut iterations = 0usize;

        for _ in 0..config.restarts {
            let mut x = initialize(config.init, demand, network);
            score(&mut x, costs);

            match &best {
                None => {
                    improvements.push(x.fitness());
                    best = Some(x.clone());
                }
                Some(b) if x.fitness() < b.fitness() => {
                    improvements.push(x.fitness());
                    best = Some(x.clone());
                }
                _ => {}
            }

            for _ in 0..config.generations {
                let mut candidate = neighbor(&x, network, &mut rng);
                score(&mut candidate, costs);
                iterations += 1;

                if candidate.fitness() < x.fitness() {
                    x = candidate;
                    let improved_best = best
                        .as_ref()
                        .is_some_and(|b| x.fitness() < b.fitness());
                    if improved_best {
                        improvements.push(x.fitness());
                        best = Some(x.clone());
                    }
                }
            }
        }

        let best = best.expect("validate ensures at least one restart");
        HillClimbResult {
            best_fitness: best.fitness(),
            best,
            iterations,
            improvements,
        }
    }
}
