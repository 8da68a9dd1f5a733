//! Evolutionary engine configuration.

use super::crossover::CrossoverPolicy;
use super::selection::Selection;
use crate::init::InitStrategy;

/// Configuration for the evolutionary engine.
///
/// # Defaults
///
/// ```
/// use flowheur::evolution::EvolutionConfig;
///
/// let config = EvolutionConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.generations, 500);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use flowheur::evolution::{EvolutionConfig, Selection};
///
/// let config = EvolutionConfig::default()
///     .with_population_size(200)
///     .with_selection(Selection::Tournament(5))
///     .with_mutation_rate(0.3)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvolutionConfig {
    /// Number of members in the population. Held invariant across
    /// generations.
    pub population_size: usize,

    /// Number of generations to run.
    pub generations: usize,

    /// Selection strategy for choosing parents.
    pub selection: Selection,

    /// Crossover policy for recombining two parents.
    pub crossover: CrossoverPolicy,

    /// Probability of applying crossover to a pair of parents (0.0–1.0).
    /// When not applied, the first parent is cloned.
    pub crossover_rate: f64,

    /// Probability of applying one neighborhood move to an offspring
    /// (0.0–1.0).
    pub mutation_rate: f64,

    /// Fraction of the population preserved as elites (0.0–1.0). At
    /// least one elite always survives unmodified, whatever the ratio.
    pub elite_ratio: f64,

    /// Initial flow assignment strategy for the first population.
    pub init: InitStrategy,

    /// Random seed for reproducibility. `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            generations: 500,
            selection: Selection::default(),
            crossover: CrossoverPolicy::default(),
            crossover_rate: 0.9,
            mutation_rate: 0.1,
            elite_ratio: 0.1,
            init: InitStrategy::default(),
            seed: None,
        }
    }
}

impl EvolutionConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the selection strategy.
    pub fn with_selection(mut self, sel: Selection) -> Self {
        self.selection = sel;
        self
    }

    /// Sets the crossover policy.
    pub fn with_crossover(mut self, policy: CrossoverPolicy) -> Self {
        self.crossover = policy;
        self
    }

    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the elite ratio.
    pub fn with_elite_ratio(mut self, ratio: f64) -> Self {
        self.elite_ratio = ratio.clamp(0.0, 1.0);
        self
    }

    /// Sets the initialization strategy.
    pub fn with_init(mut self, init: InitStrategy) -> Self {
        self.init = init;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of elites carried unchanged into the next generation.
    /// Never less than one: the best member always survives.
    pub fn elite_count(&self) -> usize {
        ((self.population_size as f64 * self.elite_ratio) as usize).max(1)
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.population_size < 2 {
            return Err("population_size must be at least 2".into());
        }
        if self.generations == 0 {
            return Err("generations must be at least 1".into());
        }
        if self.elite_count() >= self.population_size {
            return Err("elite_ratio too high: elites fill entire population".into());
        }
        if !(0.0..=1.0).contains(&self.crossover_rate) {
            return Err("crossover_rate must be in [0, 1]".into());
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err("mutation_rate must be in [0, 1]".into());
        }
        Ok(())
    }
}
