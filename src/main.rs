//! `loxi`: a tree-walking interpreter for a small Lox-family scripting
//! language, exposed as four subcommands over a single source file.

mod cli;

use std::fs;
use std::process::ExitCode;

use cli::{Cli, Commands, FileArgs};
use log::error;
use loxi::driver;

fn main() -> ExitCode {
    let args = match Cli::init() {
        Ok(args) => args,
        Err(err) => {
            eprint!("{err}");
            return ExitCode::from(1);
        }
    };

    simple_logger::init_with_level((&args.verbosity).into()).unwrap();

    let file = match &args.command {
        Commands::Tokenize(FileArgs { file })
        | Commands::Parse(FileArgs { file })
        | Commands::Evaluate(FileArgs { file })
        | Commands::Run(FileArgs { file }) => file,
    };

    let source = match fs::read_to_string(file) {
        Ok(source) => source,
        Err(err) => {
            error!("failed to read {}: {err}", file.display());
            return ExitCode::from(1);
        }
    };

    let exit_code = match args.command {
        Commands::Tokenize(_) => driver::tokenize(&source),
        Commands::Parse(_) => driver::parse(&source),
        Commands::Evaluate(_) => driver::evaluate(&source),
        Commands::Run(_) => driver::run(&source),
    };

    ExitCode::from(exit_code as u8)
}
