use std::fmt;

use serde::Serialize;

use crate::constants::DIVISION_BY_ZERO_MARKER;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Operation {
    #[serde(rename = "SUM")]
    Sum,
    #[serde(rename = "SUB")]
    Sub,
    #[serde(rename = "MUL")]
    Mul,
    #[serde(rename = "DIV")]
    Div,
    #[serde(rename = "POW")]
    Pow,
}

impl Operation {
    pub const ALL: [Operation; 5] = [
        Operation::Sum,
        Operation::Sub,
        Operation::Mul,
        Operation::Div,
        Operation::Pow,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Operation::Sum => "SUM",
            Operation::Sub => "SUB",
            Operation::Mul => "MUL",
            Operation::Div => "DIV",
            Operation::Pow => "POW",
        }
    }

    /// Computes the exact result of `operand_1 <op> operand_2`.
    ///
    /// Division yields the real quotient, or the division-by-zero marker when
    /// the divisor is 0. A negative exponent yields a real result.
    pub fn apply(&self, operand_1: i64, operand_2: i64) -> ProblemResult {
        let a = operand_1 as i128;
        let b = operand_2 as i128;
        match self {
            Operation::Sum => ProblemResult::Integer(a + b),
            Operation::Sub => ProblemResult::Integer(a - b),
            Operation::Mul => ProblemResult::Integer(a * b),
            Operation::Div => {
                if operand_2 == 0 {
                    ProblemResult::DivisionByZero
                } else {
                    ProblemResult::Real(operand_1 as f64 / operand_2 as f64)
                }
            }
            Operation::Pow => match u32::try_from(operand_2)
                .ok()
                .and_then(|exp| a.checked_pow(exp))
            {
                Some(value) => ProblemResult::Integer(value),
                None => ProblemResult::Real((operand_1 as f64).powf(operand_2 as f64)),
            },
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The known-correct answer to a problem.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProblemResult {
    Integer(i128),
    Real(f64),
    /// Data marker for a zero divisor, never a numeric value.
    DivisionByZero,
}

impl ProblemResult {
    pub fn is_numeric(&self) -> bool {
        !matches!(self, ProblemResult::DivisionByZero)
    }
}

impl fmt::Display for ProblemResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProblemResult::Integer(value) => write!(f, "{}", value),
            // Whole quotients keep a fractional digit so they read as reals
            ProblemResult::Real(value) if value.is_finite() && value.fract() == 0.0 => {
                write!(f, "{:.1}", value)
            }
            ProblemResult::Real(value) => write!(f, "{}", value),
            ProblemResult::DivisionByZero => f.write_str(DIVISION_BY_ZERO_MARKER),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArithmeticProblem {
    pub operation: Operation,
    pub operand_1: i64,
    pub operand_2: i64,
    pub correct_result: ProblemResult,
}

impl ArithmeticProblem {
    pub fn new(operation: Operation, operand_1: i64, operand_2: i64) -> Self {
        Self {
            operation,
            operand_1,
            operand_2,
            correct_result: operation.apply(operand_1, operand_2),
        }
    }
}
