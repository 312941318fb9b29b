//! Interactive read-eval-print loop.
//!
//! One evaluator and one environment live for the whole session, so
//! bindings and function definitions persist from line to line.

use std::io::{self, BufRead, Write};

use owo_eval::{Evaluator, SharedEnv, Value};

use crate::eval_source;

const PROMPT: &str = ">> ";

/// Drive a session over the given reader and writer until end of input.
///
/// A line that fails to parse is reported and discarded; the environment
/// keeps whatever state earlier lines built up. `Null` results are not
/// echoed, so statements like bindings stay quiet.
pub fn start(input: &mut dyn BufRead, output: &mut dyn Write) -> io::Result<()> {
    let evaluator = Evaluator::new();
    let env = SharedEnv::new();

    let mut line = String::new();
    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(());
        }

        match eval_source(&line, &evaluator, &env) {
            Ok(Value::Null) => {}
            Ok(value) => writeln!(output, "{value}")?,
            Err(errors) => report_parse_errors(output, &errors)?,
        }
    }
}

fn report_parse_errors(output: &mut dyn Write, errors: &[String]) -> io::Result<()> {
    writeln!(output, "Woops! We ran into some wrong business here!")?;
    writeln!(output, " parser errors:")?;
    for message in errors {
        writeln!(output, "\t{message}")?;
    }
    Ok(())
}
