//! Command-line configuration for the two entry points.

use std::path::PathBuf;

use crate::constants::{DEFAULT_ROSTER_PATH, SAMPLE_SEED};
use crate::error::{ArenaError, Result};
use crate::problems::GeneratorConfig;

/// Configuration for an interactive arena session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArenaConfig {
    /// Roster CSV loaded at start-up and written by "save"
    pub roster_path: PathBuf,

    /// Random seed for speed-tie coin flips (None = random)
    pub seed: Option<u64>,

    /// Log verbosity (0 = warnings, 1 = info, 2+ = debug)
    pub verbosity: u8,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            roster_path: PathBuf::from(DEFAULT_ROSTER_PATH),
            seed: None,
            verbosity: 0,
        }
    }
}

/// What the binary was asked to do.
#[derive(Debug, Clone)]
pub enum Invocation {
    Arena(ArenaConfig),
    Generate {
        config: GeneratorConfig,
        verbosity: u8,
    },
    Help,
    Version,
}

impl Invocation {
    pub fn verbosity(&self) -> u8 {
        match self {
            Invocation::Arena(config) => config.verbosity,
            Invocation::Generate { verbosity, .. } => *verbosity,
            Invocation::Help | Invocation::Version => 0,
        }
    }
}

pub const USAGE: &str = "\
Creature Arena - turn-based creature battles and arithmetic datasets

Usage:
  creature-arena [--roster PATH] [--seed N] [-v|-vv]
  creature-arena generate [--output PATH] [--count N] [--seed N] [--sample] [-v|-vv]

Options:
  --roster PATH   Creature roster CSV (default: pokemon.csv)
  --output PATH   Problem dataset CSV (default: ./data/math_operations.csv)
  --count N       Number of problems to generate (default: 1000)
  --seed N        Seed the random number generator
  --sample        Small reproducible dataset (20 rows, seed 42 unless --seed)
  -v, -vv         Log info / debug messages to stderr
  --version       Show version information
  --help          Show this help message";

/// Parses the arguments after the program name.
pub fn parse_args<S: AsRef<str>>(args: &[S]) -> Result<Invocation> {
    let mut args = args.iter().map(|s| s.as_ref());
    let mut arena = ArenaConfig::default();
    let mut generator = GeneratorConfig::default();
    let mut generate = false;
    let mut sample = false;
    let mut count = None;
    let mut verbosity = 0u8;
    let mut first = true;

    while let Some(arg) = args.next() {
        match arg {
            "generate" if first => generate = true,
            "--help" | "-h" => return Ok(Invocation::Help),
            "--version" | "-V" => return Ok(Invocation::Version),
            "-v" => verbosity = verbosity.saturating_add(1),
            "-vv" => verbosity = verbosity.saturating_add(2),
            "--seed" => {
                let seed = parse_number(arg, args.next())?;
                arena.seed = Some(seed);
                generator.seed = Some(seed);
            }
            "--roster" if !generate => arena.roster_path = PathBuf::from(value(arg, args.next())?),
            "--output" if generate => generator.output_path = PathBuf::from(value(arg, args.next())?),
            "--count" if generate => count = Some(parse_number(arg, args.next())? as usize),
            "--sample" if generate => sample = true,
            other => {
                return Err(ArenaError::InvalidArgument(format!(
                    "unexpected argument '{}'",
                    other
                )))
            }
        }
        first = false;
    }

    if generate {
        if sample {
            let seed = generator.seed.unwrap_or(SAMPLE_SEED);
            generator = GeneratorConfig::sample(generator.output_path, seed);
        }
        if let Some(count) = count {
            generator.count = count;
        }
        Ok(Invocation::Generate {
            config: generator,
            verbosity,
        })
    } else {
        arena.verbosity = verbosity;
        Ok(Invocation::Arena(arena))
    }
}

fn value<'a>(flag: &str, next: Option<&'a str>) -> Result<&'a str> {
    next.ok_or_else(|| ArenaError::InvalidArgument(format!("{} requires a value", flag)))
}

fn parse_number(flag: &str, next: Option<&str>) -> Result<u64> {
    let raw = value(flag, next)?;
    raw.parse::<u64>().map_err(|_| {
        ArenaError::InvalidArgument(format!("{} expects a number, got '{}'", flag, raw))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_args_runs_arena_with_defaults() {
        let args: [&str; 0] = [];
        match parse_args(&args).unwrap() {
            Invocation::Arena(config) => assert_eq!(config, ArenaConfig::default()),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_arena_options() {
        match parse_args(&["--roster", "team.csv", "--seed", "9", "-v"]).unwrap() {
            Invocation::Arena(config) => {
                assert_eq!(config.roster_path, PathBuf::from("team.csv"));
                assert_eq!(config.seed, Some(9));
                assert_eq!(config.verbosity, 1);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_generate_options() {
        let invocation =
            parse_args(&["generate", "--output", "out.csv", "--count", "50", "-vv"]).unwrap();
        assert_eq!(invocation.verbosity(), 2);
        match invocation {
            Invocation::Generate { config, .. } => {
                assert_eq!(config.output_path, PathBuf::from("out.csv"));
                assert_eq!(config.count, 50);
                assert!(config.seed.is_none());
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_generate_sample_preset() {
        match parse_args(&["generate", "--sample"]).unwrap() {
            Invocation::Generate { config, .. } => {
                assert_eq!(config.count, 20);
                assert_eq!(config.seed, Some(42));
                assert_eq!(config.output_path, PathBuf::from("./data/math_operations.csv"));
            }
            other => panic!("unexpected {:?}", other),
        }

        // Explicit values win regardless of flag order
        match parse_args(&["generate", "--count", "5", "--sample", "--seed", "7"]).unwrap() {
            Invocation::Generate { config, .. } => {
                assert_eq!(config.count, 5);
                assert_eq!(config.seed, Some(7));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_help_and_version() {
        assert!(matches!(parse_args(&["--help"]).unwrap(), Invocation::Help));
        assert!(matches!(parse_args(&["generate", "-V"]).unwrap(), Invocation::Version));
    }

    #[test]
    fn test_bad_arguments() {
        assert!(parse_args(&["--seed"]).is_err());
        assert!(parse_args(&["--seed", "abc"]).is_err());
        assert!(parse_args(&["--count", "5"]).is_err()); // generate-only flag
        assert!(parse_args(&["--roster", "a.csv", "generate"]).is_err());
        assert!(parse_args(&["battle"]).is_err());
        assert!(parse_args(&["--sample"]).is_err()); // generate-only flag
    }
}
