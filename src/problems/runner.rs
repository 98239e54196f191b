//! Batch entry point: generate a dataset and write it out.

use std::collections::HashMap;
use std::path::PathBuf;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

use super::config::GeneratorConfig;
use super::generation::generate_problems;
use super::output::write_problems;
use super::types::Operation;
use crate::error::Result;

/// What a generator run produced.
#[derive(Debug, Clone)]
pub struct GenerationSummary {
    pub path: PathBuf,
    pub rows: usize,
    pub per_operation: HashMap<Operation, usize>,
    /// Rows whose result column holds the division-by-zero marker
    pub division_errors: usize,
}

/// Generates `config.count` problems and writes them to `config.output_path`.
pub fn run_generator(config: &GeneratorConfig) -> Result<GenerationSummary> {
    let mut rng = match config.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    let problems = generate_problems(config.count, &mut rng);
    write_problems(&config.output_path, &problems)?;

    let mut per_operation = HashMap::new();
    let mut division_errors = 0;
    for problem in &problems {
        *per_operation.entry(problem.operation).or_insert(0) += 1;
        if !problem.correct_result.is_numeric() {
            division_errors += 1;
        }
    }

    info!(
        path = %config.output_path.display(),
        rows = problems.len(),
        division_errors,
        "problem dataset written"
    );

    Ok(GenerationSummary {
        path: config.output_path.clone(),
        rows: problems.len(),
        per_operation,
        division_errors,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_generator_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = GeneratorConfig::sample(dir.path().join("ops.csv"), 1);

        let summary = run_generator(&config).unwrap();

        assert_eq!(summary.rows, 20);
        assert_eq!(summary.per_operation.values().sum::<usize>(), 20);
        // Generated operands are never zero
        assert_eq!(summary.division_errors, 0);
        let text = std::fs::read_to_string(&summary.path).unwrap();
        assert_eq!(text.lines().count(), 21);
    }

    #[test]
    fn test_run_generator_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ops.csv");
        std::fs::write(&path, "stale contents\n".repeat(50)).unwrap();

        run_generator(&GeneratorConfig::sample(path.clone(), 2)).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(!text.contains("stale"));
        assert_eq!(text.lines().count(), 21);
    }
}
