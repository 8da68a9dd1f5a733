//! Single-solution greedy local search with independent restarts.
//!
//! One climb holds a current solution and, for a fixed iteration budget,
//! repeatedly derives a neighbor ([`crate::neighborhood::neighbor`]),
//! scores it, and replaces the current solution only on strict
//! improvement. Worsening or equal-fitness moves are never accepted
//! (this is greedy local search, not simulated annealing), so plateau
//! drift is impossible and the retained fitness sequence is
//! non-increasing. Independent restarts from fresh initial solutions
//! mitigate local optima.

mod config;
mod runner;

pub use config::HillClimbConfig;
pub use runner::{HillClimbResult, HillClimbRunner};
