use npuzzle_rust::config::{Cli, Config};
use npuzzle_rust::puzzle;
use npuzzle_rust::solver::Solver;

use anyhow::Context;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .init();
    let cli = Cli::parse();

    let config = if let Some(config_file) = cli.config.as_ref() {
        let config_str = std::fs::read_to_string(config_file)?;
        Config::from_yaml_str(&config_str)
            .with_context(|| format!("error with config file: {config_file}"))?
    } else {
        info!("No config file specified, using default config");
        Config::default()
    }
    .override_from_command_line(&cli)?;

    let initial = puzzle::load_board(&config.puzzle_path)?;
    let n = initial.dimension();
    info!("Loaded {n}x{n} puzzle from {}", config.puzzle_path);

    let solver = Solver::new(initial);
    solver.stats().print();

    if !solver.is_solvable() {
        println!("No solution possible");
        return Ok(());
    }

    println!("Minimum number of moves = {}", solver.moves());
    if config.print_solution {
        if let Some(solution) = solver.solution() {
            for board in solution {
                println!("{board}");
            }
        }
    }

    Ok(())
}
