//! Console driver: feeds stdin lines to a [`Session`] and prints its output

use crate::session::{Session, SessionError};
use contactbook_store::ContactStore;
use std::io::{BufRead, Write};

/// Run `session` until the user exits or input ends
///
/// # Errors
/// Returns error on storage failure or console I/O failure
pub fn run<S, R, W>(session: &mut Session<S>, mut input: R, mut output: W) -> Result<(), SessionError>
where
    S: ContactStore,
    R: BufRead,
    W: Write,
{
    write_lines(&mut output, &session.start())?;

    let mut line = String::new();
    while !session.is_finished() {
        write!(output, "{}", session.prompt())?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            tracing::debug!("input closed, leaving session");
            writeln!(output)?;
            break;
        }
        let entry = line.trim_end_matches(['\n', '\r']);
        let lines = session.step(entry)?;
        write_lines(&mut output, &lines)?;
    }
    output.flush()?;
    Ok(())
}

fn write_lines<W: Write>(output: &mut W, lines: &[String]) -> std::io::Result<()> {
    for line in lines {
        writeln!(output, "{line}")?;
    }
    Ok(())
}
