//! CSV serialization of a problem dataset.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::Serialize;

use super::types::{ArithmeticProblem, Operation};
use crate::error::Result;

#[derive(Serialize)]
struct ProblemRow {
    operation: Operation,
    operand_1: i64,
    operand_2: i64,
    correct_result: String,
}

impl From<&ArithmeticProblem> for ProblemRow {
    fn from(problem: &ArithmeticProblem) -> Self {
        Self {
            operation: problem.operation,
            operand_1: problem.operand_1,
            operand_2: problem.operand_2,
            correct_result: problem.correct_result.to_string(),
        }
    }
}

/// Writes the header row followed by one row per problem, in order.
pub fn write_problems_to<W: Write>(writer: W, problems: &[ArithmeticProblem]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    if problems.is_empty() {
        // serialize() only emits the header alongside the first record
        csv_writer.write_record(["operation", "operand_1", "operand_2", "correct_result"])?;
    }
    for problem in problems {
        csv_writer.serialize(ProblemRow::from(problem))?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Writes the dataset to `path`, replacing any existing file.
///
/// The parent directory must already exist.
pub fn write_problems(path: &Path, problems: &[ArithmeticProblem]) -> Result<()> {
    let file = File::create(path)?;
    write_problems_to(file, problems)
}
