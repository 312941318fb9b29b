//! OwO interpreter CLI.
//!
//! Hand-rolled argument handling over a small command set. No arguments
//! drops into the REPL.

use std::io;
use std::sync::Once;

use owoc::commands::{lex_file, parse_file, run_file};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Enable with `RUST_LOG=owo_parse=trace`
/// or similar.
fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        start_repl();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "repl" => {
            start_repl();
        }
        "run" => {
            if args.len() < 3 {
                eprintln!("Usage: owo run <file.owo>");
                std::process::exit(1);
            }
            run_file(&args[2]);
        }
        "parse" => {
            if args.len() < 3 {
                eprintln!("Usage: owo parse <file.owo>");
                std::process::exit(1);
            }
            parse_file(&args[2]);
        }
        "lex" => {
            if args.len() < 3 {
                eprintln!("Usage: owo lex <file.owo>");
                std::process::exit(1);
            }
            lex_file(&args[2]);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-v" => {
            println!("OwO interpreter {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            // If it looks like a file path, try to run it
            if std::path::Path::new(command)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("owo"))
            {
                run_file(command);
            } else {
                eprintln!("Unknown command: {command}");
                eprintln!();
                print_usage();
                std::process::exit(1);
            }
        }
    }
}

fn start_repl() {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut output = stdout.lock();

    if let Err(e) = owoc::repl::start(&mut input, &mut output) {
        eprintln!("repl error: {e}");
        std::process::exit(1);
    }
}

fn print_usage() {
    println!("OwO interpreter");
    println!();
    println!("Usage: owo [command] [options]");
    println!();
    println!("Commands:");
    println!("  repl                 Start an interactive session (default)");
    println!("  run <file.owo>       Evaluate an OwO program");
    println!("  parse <file.owo>     Parse a file and display the program");
    println!("  lex <file.owo>       Tokenize a file and display the tokens");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Examples:");
    println!("  owo                  # interactive session");
    println!("  owo run main.owo");
    println!("  owo main.owo         # same as `owo run main.owo`");
    println!("  owo lex main.owo");
}
