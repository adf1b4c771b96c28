//! CLI entry point for nanotca.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use nanotca_cli::config::{Input, OutputFormat};
use nanotca_cli::demo;
use nanotca_cli::error::Error;
use nanotca_cli::run;

#[derive(Parser)]
#[command(name = "tca")]
#[command(about = "Transaction cost analysis: implementation shortfall breakdowns")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Cost the built-in sample transactions
    Demo,

    /// Cost every transaction in an input file
    Run {
        /// Path to transactions.toml
        #[arg(default_value = "transactions.toml")]
        input: PathBuf,

        /// Print JSON regardless of the file's output format
        #[arg(long)]
        json: bool,
    },

    /// Screen an input file for suspicious transactions without costing it
    Check {
        /// Path to transactions.toml
        #[arg(default_value = "transactions.toml")]
        input: PathBuf,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::Demo => run_demo(),
        Command::Run { input, json } => {
            let input = load_input(&input);
            let format = if json {
                OutputFormat::Json
            } else {
                input.output.format
            };
            run::analyze(&input.to_transactions())
                .and_then(|engine| run::render(&engine, format))
                .map(|out| print!("{out}"))
        }
        Command::Check { input } => {
            let input = load_input(&input);
            let report = run::check(&input.to_transactions());
            print!("{report}");
            if report.has_failures() {
                Err(Error::Validation(report.failures()))
            } else {
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        match &e {
            Error::Validation(_) => {
                eprintln!("\n{e}");
                process::exit(2);
            }
            Error::Engine(_) => {
                eprintln!("Error: {e}");
                process::exit(3);
            }
            _ => {
                eprintln!("Error: {e}");
                process::exit(1);
            }
        }
    }
}

fn load_input(path: &std::path::Path) -> Input {
    match Input::load(path) {
        Ok(input) => input,
        Err(e) => {
            eprintln!("Error loading input: {e}");
            process::exit(1);
        }
    }
}

fn run_demo() -> nanotca_cli::error::Result<()> {
    for (i, step) in demo::run_demo()?.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{}", step.title);
        print!("{}", step.table);
    }
    Ok(())
}
