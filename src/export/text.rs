use std::io::Write;

use crate::export::errors::ExportError;
use crate::generator::Quiz;

/// Plain text: a `Quiz N` header, the variable assignments on one line,
/// then each equation in identifier form followed by its value form.
/// Quizzes are separated by a blank line.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn render_text<W: Write>(quizzes: &[Quiz], out: &mut W) -> Result<(), ExportError> {
    for (index, quiz) in quizzes.iter().enumerate() {
        if index > 0 {
            writeln!(out)?;
        }
        writeln!(out, "Quiz {}", index + 1)?;

        let assignments = quiz
            .variables
            .iter()
            .map(|variable| format!("{} = {}", variable.identifier, variable.value))
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(out, "{assignments}")?;

        for equation in &quiz.equations {
            writeln!(out, "{}", equation.identifiers)?;
            writeln!(out, "{}", equation.values)?;
        }
    }
    out.flush()?;
    Ok(())
}
