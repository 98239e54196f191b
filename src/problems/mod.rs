//! Synthetic arithmetic dataset generator.

mod config;
mod generation;
mod output;
mod runner;
mod types;

pub use config::GeneratorConfig;
pub use generation::{generate_problem, generate_problems};
pub use output::{write_problems, write_problems_to};
pub use runner::{run_generator, GenerationSummary};
pub use types::{ArithmeticProblem, Operation, ProblemResult};
