//! Random problem generation.

use rand::Rng;

use super::types::{ArithmeticProblem, Operation};
use crate::constants::{OPERAND_MAX, OPERAND_MIN, POW_EXPONENT_MAX};

/// Draws one problem: a uniform operation and two independent uniform operands.
///
/// A power whose exponent exceeds the cap gets a fresh exponent drawn from
/// `[1, POW_EXPONENT_MAX]`, so exponents stay uniform over that range.
pub fn generate_problem(rng: &mut impl Rng) -> ArithmeticProblem {
    let operation = Operation::ALL[rng.gen_range(0..Operation::ALL.len())];
    let operand_1 = rng.gen_range(OPERAND_MIN..=OPERAND_MAX);
    let mut operand_2 = rng.gen_range(OPERAND_MIN..=OPERAND_MAX);

    if operation == Operation::Pow && operand_2 > POW_EXPONENT_MAX {
        operand_2 = rng.gen_range(OPERAND_MIN..=POW_EXPONENT_MAX);
    }

    ArithmeticProblem::new(operation, operand_1, operand_2)
}

/// Generates `count` problems in generation order.
pub fn generate_problems(count: usize, rng: &mut impl Rng) -> Vec<ArithmeticProblem> {
    (0..count).map(|_| generate_problem(rng)).collect()
}
