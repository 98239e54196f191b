// Problem generator constants
pub const PROBLEM_COUNT: usize = 1000;
pub const OPERAND_MIN: i64 = 1;
pub const OPERAND_MAX: i64 = 1000;
pub const POW_EXPONENT_MAX: i64 = 10; // Larger exponents are redrawn from [1, 10]
pub const DIVISION_BY_ZERO_MARKER: &str = "Error: Division by zero";
pub const DEFAULT_PROBLEMS_PATH: &str = "./data/math_operations.csv";
pub const SAMPLE_PROBLEM_COUNT: usize = 20;
pub const SAMPLE_SEED: u64 = 42; // Used by `generate --sample` when no seed is given

// Creature roster constants
pub const DEFAULT_ROSTER_PATH: &str = "pokemon.csv";
pub const ROSTER_HEADERS: [&str; 8] = [
    "Name", "Type", "HP", "Attack", "Defense", "Sp. Atk", "Sp. Def", "Speed",
];

// Battle constants
pub const MIN_DAMAGE: u32 = 2;
pub const MIN_BATTLE_PARTICIPANTS: usize = 2;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pow_results_fit_in_i128() {
        // 1000^10 = 10^30, well below i128::MAX (~1.7 * 10^38)
        let largest = (OPERAND_MAX as i128).checked_pow(POW_EXPONENT_MAX as u32);
        assert!(largest.is_some());
    }

    #[test]
    fn test_roster_headers_are_unique() {
        let mut headers = ROSTER_HEADERS.to_vec();
        headers.sort();
        headers.dedup();
        assert_eq!(headers.len(), ROSTER_HEADERS.len());
    }
}
