use std::{fs, io};

use clap::Parser;
use monkey::repl::{self, Mode};
use tracing_subscriber::EnvFilter;

/// monkey parses and evaluates integer and boolean expressions, either from a
/// script or line by line in an interactive loop.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells monkey to look at a file instead of a script.
    #[arg(short, long, requires = "contents")]
    file: bool,

    /// Prints the parsed program in canonical form instead of evaluating it.
    #[arg(short, long)]
    parse_only: bool,

    /// Logs parser and evaluator diagnostics to stderr.
    #[arg(short, long)]
    verbose: bool,

    /// The script to run. Starts the interactive loop when omitted.
    contents: Option<String>,
}

fn main() {
    let args = Args::parse();

    if args.verbose || std::env::var("RUST_LOG").is_ok() {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            EnvFilter::new("debug")
        };
        tracing_subscriber::fmt().with_env_filter(filter)
                                 .with_writer(io::stderr)
                                 .init();
    }

    let mode = if args.parse_only { Mode::Parse } else { Mode::Eval };

    let Some(contents) = args.contents else {
        if let Err(e) = repl::start(io::stdin().lock(), io::stdout().lock(), mode) {
            eprintln!("{e}");
            std::process::exit(1);
        }
        return;
    };

    let script = if args.file {
        fs::read_to_string(&contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{contents}'. Does it exist?");
            std::process::exit(1);
        })
    } else {
        contents
    };

    let (program, errors) = monkey::parse(&script);
    if !errors.is_empty() {
        if let Err(e) = repl::print_parse_errors(&mut io::stderr().lock(), &errors) {
            eprintln!("Failed to report syntax errors: {e}");
        }
        std::process::exit(1);
    }

    match mode {
        Mode::Parse => println!("{program}"),
        Mode::Eval => {
            let value = monkey::interpreter::evaluator::eval(&program);
            if value.is_error() {
                eprintln!("{value}");
                std::process::exit(1);
            }
            println!("{value}");
        },
    }
}
