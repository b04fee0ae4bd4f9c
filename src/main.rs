use std::{
    fs,
    io::{self, BufRead, Write},
    process,
};

use clap::{ArgAction, Parser};
use log::{LevelFilter, info};
use rcalc::{error::ValidationError, parse};

/// rcalc evaluates arithmetic expressions built from `+ - * /`, integers and
/// parentheses. Without an expression it starts an interactive session.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells rcalc to read expressions from a file, one per line, instead of
    /// taking a single expression.
    #[arg(short, long, requires = "contents")]
    file: bool,

    /// Prints the parsed tree, fully parenthesized, above each result.
    #[arg(short, long)]
    tree: bool,

    /// Raises the log level: -v info, -vv debug, -vvv trace. `RUST_LOG`
    /// overrides it.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    contents: Option<String>,
}

fn main() {
    let args = Args::parse();
    setup_logging(args.verbose);

    let Some(contents) = args.contents else {
        if let Err(e) = repl(args.tree) {
            eprintln!("Failed to read input: {e}");
            process::exit(1);
        }
        return;
    };

    if args.file {
        let script = fs::read_to_string(&contents).unwrap_or_else(|_| {
                         eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
                         process::exit(1);
                     });
        if !run_file(&script, args.tree) {
            process::exit(1);
        }
    } else {
        match render(&contents, args.tree) {
            Ok(output) => println!("{output}"),
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            },
        }
    }
}

fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::new().filter_level(level)
                              .parse_default_env()
                              .init();
}

/// Evaluates one expression and formats the result for printing.
fn render(expression: &str, show_tree: bool) -> Result<String, ValidationError> {
    let tree = parse(expression)?;
    let value = tree.evaluate();

    if show_tree {
        Ok(format!("{tree}\n{value}"))
    } else {
        Ok(value.to_string())
    }
}

/// Evaluates every non-blank line. Returns `false` if any line was rejected.
fn run_file(script: &str, show_tree: bool) -> bool {
    let mut ok = true;
    let mut evaluated = 0;

    for (number, line) in script.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        evaluated += 1;
        match render(line, show_tree) {
            Ok(output) => println!("{output}"),
            Err(e) => {
                eprintln!("Line {}: {e}", number + 1);
                ok = false;
            },
        }
    }

    info!("evaluated {evaluated} expressions");
    ok
}

fn repl(show_tree: bool) -> io::Result<()> {
    println!("Welcome to calculator!");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            println!("See you later!");
            return Ok(());
        };
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match render(&line, show_tree) {
            Ok(output) => println!("{output}"),
            Err(e) => println!("{e}"),
        }
    }
}
