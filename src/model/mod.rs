//! Domain model: matrices, cost data, problem instances, and candidate
//! solutions.

mod costs;
mod instance;
mod matrix;
mod solution;

pub use costs::Costs;
pub use instance::Instance;
pub use matrix::SquareMatrix;
pub use solution::FlowSolution;
