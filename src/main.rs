//! Thin binary entry point: the CLI lives in `cli/`, this file only
//! invokes it and turns an error into a message and a non-zero exit.

mod cli;

use colored::Colorize;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", format!("Error: {}", e).red());
        std::process::exit(1);
    }
}
