use clap::Parser;
use rustyline::{error::ReadlineError, DefaultEditor};
use std::{fs, io::{self, IsTerminal, Read}, path::PathBuf, process::ExitCode};
use symdiff_compute::{differentiate, symbolic::expr::serialize};
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

/// Differentiates expressions written in prefix notation with respect to `x`, e.g. `(* 2 x)`.
///
/// With no expressions and no file, expressions are read line by line from standard input, or
/// from an interactive prompt if standard input is a terminal.
#[derive(Parser)]
#[command(name = "symdiff", version)]
struct Args {
    /// The expressions to differentiate
    #[arg(value_name = "EXPR")]
    exprs: Vec<String>,

    /// Read expressions from a file, one per line
    #[arg(short, long, value_name = "PATH", conflicts_with = "exprs")]
    file: Option<PathBuf>,

    /// Also print the simplification rules applied to each derivative
    #[arg(long)]
    steps: bool,

    /// Also print each derivative in infix notation
    #[arg(long)]
    infix: bool,
}

/// Differentiates the given input and prints the result, or reports the error to stderr.
///
/// Returns true if the input was differentiated successfully.
fn run(input: &str, args: &Args) -> bool {
    match differentiate(input) {
        Ok(derivation) => {
            println!("{}", serialize(&derivation.simplified));
            if args.infix {
                println!("  infix: {}", derivation.simplified.as_infix());
            }
            if args.steps {
                for step in &derivation.steps {
                    println!("  step: {}", step);
                }
            }
            true
        },
        Err(err) => {
            if let Err(io_err) = err.report_to_stderr("input", input) {
                error!(%io_err, "could not write error report");
            }
            false
        },
    }
}

/// Differentiates each non-blank line. Returns true if every line succeeded.
fn run_all<'a>(lines: impl IntoIterator<Item = &'a str>, args: &Args) -> bool {
    lines.into_iter()
        .filter(|line| !line.trim().is_empty())
        .fold(true, |ok, line| run(line, args) && ok)
}

/// Runs the interactive prompt until the user exits with Ctrl-D or Ctrl-C.
fn repl(args: &Args) -> bool {
    let mut rl = match DefaultEditor::new() {
        Ok(rl) => rl,
        Err(err) => {
            eprintln!("error: could not start the prompt: {}", err);
            return false;
        },
    };

    fn process_line(rl: &mut DefaultEditor, args: &Args) -> Result<(), ReadlineError> {
        let input = rl.readline("> ")?;
        if input.trim().is_empty() {
            return Ok(());
        }

        rl.add_history_entry(&input)?;

        run(&input, args);
        Ok(())
    }

    loop {
        if let Err(err) = process_line(&mut rl, args) {
            return match err {
                ReadlineError::Eof | ReadlineError::Interrupted => true,
                err => {
                    eprintln!("error: {}", err);
                    false
                },
            };
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let ok = if let Some(path) = &args.file {
        debug!(path = %path.display(), "reading expressions from file");
        match fs::read_to_string(path) {
            Ok(contents) => run_all(contents.lines(), &args),
            Err(err) => {
                eprintln!("error: could not read `{}`: {}", path.display(), err);
                false
            },
        }
    } else if !args.exprs.is_empty() {
        run_all(args.exprs.iter().map(String::as_str), &args)
    } else if !io::stdin().is_terminal() {
        debug!("reading expressions from stdin");
        let mut input = String::new();
        match io::stdin().read_to_string(&mut input) {
            Ok(_) => run_all(input.lines(), &args),
            Err(err) => {
                eprintln!("error: could not read stdin: {}", err);
                false
            },
        }
    } else {
        repl(&args)
    };

    if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
