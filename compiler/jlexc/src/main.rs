//! jlex command-line driver.
//!
//! `jlexc lex` dumps tokens, `jlexc check` reports lexical errors with
//! source snippets.

mod commands;
mod error;
mod tracing_setup;

use commands::{check_files, lex_files, CheckOptions, LexOptions};

fn main() {
    tracing_setup::init_tracing();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        return;
    }

    let result = match args[1].as_str() {
        "lex" => LexOptions::parse(&args[2..]).and_then(|options| lex_files(&options)),
        "check" => CheckOptions::parse(&args[2..]).and_then(|options| check_files(&options)),
        "help" | "--help" | "-h" => {
            print_usage();
            return;
        }
        "version" | "--version" | "-V" => {
            println!("jlexc {}", env!("CARGO_PKG_VERSION"));
            return;
        }
        other => Err(error::CliError::UnknownCommand(other.to_string())),
    };

    match result {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("error: {err}");
            if err.is_usage() {
                eprintln!();
                print_usage();
            }
            std::process::exit(2);
        }
    }
}

fn print_usage() {
    eprintln!("Usage: jlexc <command> <files...> [options]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  lex      Print the token stream of each file");
    eprintln!("  check    Report lexical errors; exits 1 if any are found");
    eprintln!("  help     Show this message");
    eprintln!("  version  Show the version");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --json                       (lex) Print tokens as JSON records");
    eprintln!("  --trivia                     (lex) Include whitespace and comments");
    eprintln!("  --recovery=line|semicolon    Where scanning resumes after a broken string");
    eprintln!("  --annotations                Accept `@` as punctuation");
    eprintln!("  --color=auto|always|never    (check) Colored snippets");
    eprintln!();
    eprintln!("Set RUST_LOG=jlex=trace to log recovery decisions.");
}
