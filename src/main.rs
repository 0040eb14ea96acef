use std::{fs, process::ExitCode};

use albus::{Diagnostic, interpret, parse, tokenize};
use clap::Parser;

/// albus is a small expression-oriented scripting language.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treat CONTENTS as source text instead of a path to a script file.
    #[arg(short, long)]
    inline: bool,

    /// Print the token list and the parsed statements before evaluating.
    #[arg(short, long)]
    debug: bool,

    contents: String,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let source = if args.inline {
        args.contents
    } else {
        match fs::read_to_string(&args.contents) {
            Ok(source) => source,
            Err(_) => {
                eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                          &args.contents);
                return ExitCode::FAILURE;
            },
        }
    };

    match execute(&source, args.debug) {
        Ok(value) => {
            println!("{value}");
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}

fn execute(source: &str, debug: bool) -> Result<albus::Value, Diagnostic> {
    let tokens = tokenize(source)?;
    if debug {
        println!("\nTokens: ");
        for token in &tokens {
            println!("  {token}");
        }
        println!();
    }

    let program = parse(&tokens)?;
    if debug {
        for statement in &program {
            println!("{statement}");
        }
    }

    Ok(interpret(&program)?)
}
