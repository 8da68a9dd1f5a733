//! Metaheuristic flow assignment over multi-cost supply networks.
//!
//! Searches for a low-cost flow assignment connecting a set of demand
//! nodes to one aggregate source node, where every potential edge carries
//! three independent unit-cost weights (dimensions A, B, C) combined into
//! a single scalar fitness. The crate is the optimization core only:
//! parsing instance files, loading configuration, and rendering the
//! network are the caller's collaborators.
//!
//! # Components
//!
//! - [`network`]: admissible-edge mask derived once from the cost data.
//! - [`init`]: feasible-flow initialization under three strategies.
//! - [`evaluation`]: the scalar cost (fitness) of a candidate assignment.
//! - [`neighborhood`]: the stochastic local move used by the engines.
//! - [`hillclimb`]: single-solution greedy local search with restarts.
//! - [`evolution`]: population-based search — populate, rank,
//!   select/reproduce with elitism.
//!
//! # Flow
//!
//! Build a [`network::Network`] from the cost matrices once, then hand
//! the demand vector, network, and costs to one of the two engines:
//!
//! ```
//! use flowheur::evolution::{EvolutionConfig, EvolutionRunner};
//! use flowheur::model::{Costs, Instance, SquareMatrix};
//! use flowheur::network::Network;
//!
//! // Two customers and the source; dimension A carries all edges.
//! let a = SquareMatrix::from_rows(&[
//!     vec![0, 1, 1],
//!     vec![1, 0, 1],
//!     vec![2, 3, 0],
//! ]).unwrap();
//! let b = SquareMatrix::new(3);
//! let c = SquareMatrix::new(3);
//! let costs = Costs::new(a, b, c).unwrap();
//! let instance = Instance::from_customer_demand(&[3, 2], costs).unwrap();
//!
//! let network = Network::from_costs(instance.costs());
//! let config = EvolutionConfig::default()
//!     .with_population_size(20)
//!     .with_generations(50)
//!     .with_seed(42);
//! let result = EvolutionRunner::run(instance.demand(), &network, instance.costs(), &config);
//!
//! assert!(result.best.is_scored());
//! // Feasibility of the returned best is the caller's check:
//! let _ = result.best.is_feasible(&network);
//! ```
//!
//! Everything runs single-threaded and synchronously; iteration and
//! generation counts are the sole termination mechanism.

pub mod evaluation;
pub mod evolution;
pub mod hillclimb;
pub mod init;
pub mod model;
pub mod neighborhood;
pub mod network;
