//! Problem generator configuration.

use std::path::PathBuf;

use crate::constants::{DEFAULT_PROBLEMS_PATH, PROBLEM_COUNT, SAMPLE_PROBLEM_COUNT};

/// Configuration for a generator run.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Number of problems to generate
    pub count: usize,

    /// Destination CSV file (its directory must exist)
    pub output_path: PathBuf,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            count: PROBLEM_COUNT,
            output_path: PathBuf::from(DEFAULT_PROBLEMS_PATH),
            seed: None,
        }
    }
}

impl GeneratorConfig {
    /// Small seeded dataset, handy for quick inspection
    pub fn sample(output_path: PathBuf, seed: u64) -> Self {
        Self {
            count: SAMPLE_PROBLEM_COUNT,
            output_path,
            seed: Some(seed),
        }
    }
}
