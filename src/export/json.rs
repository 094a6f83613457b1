use std::io::Write;

use crate::export::errors::ExportError;
use crate::generator::Quiz;

/// Pretty-printed JSON array of quizzes, decimals as canonical strings.
///
/// # Errors
///
/// Returns an error if serialization or writing to `out` fails.
pub fn render_json<W: Write>(quizzes: &[Quiz], out: &mut W) -> Result<(), ExportError> {
    serde_json::to_writer_pretty(&mut *out, quizzes)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}
