mod error;

use error::Error;
use rustyline::{error::ReadlineError, DefaultEditor};
use std::io::{self, BufRead, IsTerminal};
use symalg_compute::symbolic::{differentiate, simplify};
use symalg_parser::parse;
use tracing_subscriber::EnvFilter;

/// The variable to differentiate with respect to, if none is given on the command line.
const DEFAULT_VARIABLE: &str = "x";

/// Parses the input and differentiates it, printing the tree of the input, the tree of its
/// derivative, and the simplified derivative.
fn run(input: &str, variable: &str) -> Result<(), Error> {
    let expr = parse(input).map_err(Error::Parse)?;
    println!("{}", expr.render_tree());

    let derivative = differentiate(&expr, variable).map_err(Error::Differentiate)?;
    println!("{}", derivative.render_tree());
    println!("d/d{} = {}", variable, simplify(&derivative).render_linear());
    Ok(())
}

/// Processes one line of input, printing the results or the error.
fn read_eval(input: &str, variable: &str) {
    if let Err(err) = run(input, variable) {
        err.report_to_stderr(input);
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let variable = std::env::args()
        .nth(1)
        .map(|arg| arg.to_ascii_lowercase())
        .unwrap_or_else(|| DEFAULT_VARIABLE.to_string());
    tracing::debug!(%variable, "differentiating with respect to variable");

    if !io::stdin().is_terminal() {
        // read expressions from stdin, one per line
        for line in io::stdin().lock().lines() {
            match line {
                Ok(input) if input.trim().is_empty() => (),
                Ok(input) => read_eval(&input, &variable),
                Err(err) => {
                    eprintln!("{}", err);
                    break;
                },
            }
        }
        return;
    }

    // run the repl / interactive mode
    let mut rl = match DefaultEditor::new() {
        Ok(rl) => rl,
        Err(err) => {
            eprintln!("{}", err);
            return;
        },
    };

    fn process_line(rl: &mut DefaultEditor, variable: &str) -> Result<(), ReadlineError> {
        let input = rl.readline("> ")?;
        if input.trim().is_empty() {
            return Ok(());
        }

        rl.add_history_entry(&input)?;

        read_eval(&input, variable);
        Ok(())
    }

    loop {
        if let Err(err) = process_line(&mut rl, &variable) {
            match err {
                ReadlineError::Eof | ReadlineError::Interrupted => (),
                _ => eprintln!("{}", err),
            }
            break;
        }
    }
}
