use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::{error::ParseError, interpreter::evaluator::eval};

/// The prompt written before each line is read.
pub const PROMPT: &str = ">> ";

/// What the loop prints for a line that parsed cleanly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Evaluate the line and print its value.
    #[default]
    Eval,
    /// Print the canonical form of the parsed line without evaluating it.
    Parse,
}

/// Runs the read-evaluate-print loop until `input` is exhausted.
///
/// Each line is parsed on its own. Lines with syntax errors print `ERROR`
/// followed by one tab-indented line per error and are not evaluated. Blank
/// lines are skipped.
///
/// # Errors
/// Returns any I/O error from reading `input` or writing `output`.
///
/// # Example
/// ```
/// use monkey::repl::{Mode, start};
///
/// let mut output = Vec::new();
/// start("5 + 5 * 2\n-true\n".as_bytes(), &mut output, Mode::Eval).unwrap();
///
/// assert_eq!(String::from_utf8(output).unwrap(),
///            ">> 15\n>> ERROR: unknown operator: -BOOLEAN\n>> ");
/// ```
pub fn start(input: impl BufRead, mut output: impl Write, mode: Mode) -> io::Result<()> {
    let mut lines = input.lines();

    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        let Some(line) = lines.next() else {
            return Ok(());
        };
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let (program, errors) = crate::parse(&line);
        if !errors.is_empty() {
            debug!(count = errors.len(), "line rejected");
            print_parse_errors(&mut output, &errors)?;
            continue;
        }

        match mode {
            Mode::Eval => writeln!(output, "{}", eval(&program))?,
            Mode::Parse => writeln!(output, "{program}")?,
        }
    }
}

/// Writes syntax errors in the loop's error format.
///
/// # Errors
/// Returns any I/O error from writing `output`.
pub fn print_parse_errors(output: &mut impl Write, errors: &[ParseError]) -> io::Result<()> {
    writeln!(output, "ERROR")?;
    for error in errors {
        writeln!(output, "\t{error}")?;
    }
    Ok(())
}
