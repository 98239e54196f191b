use std::io;

use anyhow::Context;
use creature_arena::build_info;
use creature_arena::config::{parse_args, ArenaConfig, Invocation, USAGE};
use creature_arena::console::Console;
use creature_arena::problems::{run_generator, GeneratorConfig, Operation};
use creature_arena::CreatureStore;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let invocation = match parse_args(&args) {
        Ok(invocation) => invocation,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("Run 'creature-arena --help' for usage.");
            std::process::exit(1);
        }
    };

    init_logging(invocation.verbosity());

    match invocation {
        Invocation::Help => println!("{}", USAGE),
        Invocation::Version => println!("{}", build_info::version_string()),
        Invocation::Generate { config, .. } => generate(&config)?,
        Invocation::Arena(config) => arena(&config)?,
    }

    Ok(())
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(level.as_str()))
        .with_writer(io::stderr)
        .init();
}

fn generate(config: &GeneratorConfig) -> anyhow::Result<()> {
    let summary = run_generator(config).with_context(|| {
        format!(
            "could not write problems to {}",
            config.output_path.display()
        )
    })?;

    println!("CSV file saved at {} ({} rows)", summary.path.display(), summary.rows);
    for op in Operation::ALL {
        let count = summary.per_operation.get(&op).copied().unwrap_or(0);
        println!("  {}: {}", op, count);
    }
    if summary.division_errors > 0 {
        println!("  division by zero: {}", summary.division_errors);
    }
    Ok(())
}

fn arena(config: &ArenaConfig) -> anyhow::Result<()> {
    let mut store = CreatureStore::new();
    if store.load(&config.roster_path) {
        println!(
            "Loaded {} creatures from {}.",
            store.len(),
            config.roster_path.display()
        );
    } else {
        println!(
            "Could not load {}. Starting with an empty roster.",
            config.roster_path.display()
        );
    }

    let mut rng = match config.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());
    console
        .run(&mut store, &config.roster_path, &mut rng)
        .context("console I/O failed")?;
    Ok(())
}
