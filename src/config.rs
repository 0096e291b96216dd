use anyhow::{ensure, Result};
use clap::Parser;
use serde::Deserialize;

#[derive(Parser, Debug)]
#[command(
    name = "Rust N-Puzzle",
    about = "Optimal sliding puzzle solver implemented in Rust.",
    version = "1.0"
)]
pub struct Cli {
    #[arg(long, help = "Path to the YAML config file")]
    pub config: Option<String>,

    #[arg(long, help = "Path to the puzzle file")]
    pub puzzle_path: Option<String>,

    #[arg(long, help = "Print every board of the solution")]
    pub print_solution: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub puzzle_path: String,
    pub print_solution: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            puzzle_path: "puzzle_file/puzzle04.txt".to_string(),
            print_solution: true,
        }
    }
}

impl Config {
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    pub fn override_from_command_line(mut self, cli: &Cli) -> Result<Self> {
        if let Some(puzzle_path) = cli.puzzle_path.as_ref() {
            self.puzzle_path = puzzle_path.clone();
        }
        if let Some(print_solution) = cli.print_solution {
            self.print_solution = print_solution;
        }
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(!self.puzzle_path.is_empty(), "puzzle path must not be empty");
        Ok(())
    }
}
