//! Population-based evolutionary search.
//!
//! Each generation composes three operations in order: **populate** (first
//! generation only — build the initial population via the configured
//! initialization strategy), **rank** (stable ascending sort by fitness,
//! index 0 = best), and **select/reproduce** (elites survive unmodified,
//! remaining slots are refilled by selection, crossover, and mutation,
//! every new member scored before insertion). Population size is
//! invariant across generations.
//!
//! # Key Types
//!
//! - [`EvolutionConfig`]: population size, generations, selection and
//!   crossover policies, operator rates
//! - [`EvolutionRunner`]: executes the generational loop
//! - [`EvolutionResult`]: best solution plus per-generation fitness trace
//! - [`Selection`]: Tournament / Roulette / Rank parent selection
//! - [`CrossoverPolicy`]: row-wise recombination of two flow matrices

mod config;
mod crossover;
mod runner;
mod selection;

pub use config::EvolutionConfig;
pub use crossover::{crossover, CrossoverPolicy};
pub use runner::{rank, EvolutionResult, EvolutionRunner};
pub use selection::Selection;
