//! Hill-climbing configuration.

use crate::init::InitStrategy;

/// Configuration for the hill-climbing engine.
///
/// # Builder Pattern
///
/// ```
/// use flowheur::hillclimb::HillClimbConfig;
/// use flowheur::init::InitStrategy;
///
/// let config = HillClimbConfig::default()
///     .with_generations(2000)
///     .with_restarts(50)
///     .with_init(InitStrategy::Direct)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HillClimbConfig {
    /// Iterations per climb ("generations"); the sole termination
    /// mechanism of a single climb.
    pub generations: usize,

    /// Number of independent restarts. Each restart climbs from a fresh
    /// initial solution; restarts mitigate local optima and their order
    /// does not matter.
    pub restarts: usize,

    /// Initial flow assignment strategy for each restart.
    pub init: InitStrategy,

    /// Random seed for reproducibility. `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for HillClimbConfig {
    fn default() -> Self {
        Self {
            generations: 500,
            restarts: 10,
            init: InitStrategy::default(),
            seed: None,
        }
    }
}

impl HillClimbConfig {
    /// Sets the iteration budget per climb.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the number of independent restarts.
    pub fn with_restarts(mut self, n: usize) -> Self {
        self.restarts = n;
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

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.generations == 0 {
            return Err("generations must be at least 1".into());
        }
        if self.restarts == 0 {
            return Err("restarts must be at least 1".into());
        }
        Ok(())
    }
}
