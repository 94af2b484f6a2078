//! A command line interface to *OMOPSO* multi-objective optimizer.
//!

mod commands;

use clap::Command;
use commands::create_write_buffer;
use commands::solve::{get_solve_app, run_solve};
use std::process;

fn get_app() -> Command {
    Command::new("OMOPSO Optimizer")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Ilya Builuk <ilya.builuk@gmail.com>")
        .about("A command line interface to multi-objective particle swarm optimizer")
        .subcommand(get_solve_app())
}

fn main() {
    let matches = get_app().get_matches();

    let result = match matches.subcommand() {
        Some(("solve", solve_matches)) => run_solve(solve_matches, create_write_buffer),
        _ => {
            eprintln!("No subcommand was used. Use -h to print help information.");
            process::exit(1);
        }
    };

    if let Err(err) = result {
        eprintln!("{err}");
        process::exit(1);
    }
}
