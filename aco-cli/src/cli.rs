#[cfg(test)]
#[path = "../tests/unit/cli_test.rs"]
mod cli_test;

use crate::commands::solve::{get_solve_app, run_solve};
use crate::commands::create_write_buffer;
use clap::{ArgMatches, Command};
use std::process;

pub fn get_app() -> Command {
    Command::new("Ant Colony Tour Optimizer")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Ilya Builuk <ilya.builuk@gmail.com>")
        .about("A command line interface to ant colony optimizer of closed tours")
        .subcommand(get_solve_app())
}

pub fn run_subcommand(arg_matches: ArgMatches) {
    if let Err(err) = match arg_matches.subcommand() {
        Some(("solve", solve_matches)) => run_solve(solve_matches, create_write_buffer),
        _ => Err("no subcommand was used. Use -h to print help information.".into()),
    } {
        eprintln!("{err}");
        process::exit(1);
    }
}
