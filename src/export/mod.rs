//! Renders generated quizzes for the command line

mod errors;
mod json;
mod text;

pub use errors::ExportError;
pub use json::render_json;
pub use text::render_text;

use std::io::Write;

use crate::generator::Quiz;

/// Output formats supported by [`render`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExportFormat {
    #[default]
    Text,
    Json,
}

/// Writes `quizzes` to `out` in the chosen format.
///
/// # Errors
///
/// Returns an error if writing fails or the quizzes cannot be serialized.
pub fn render<W: Write>(
    format: ExportFormat,
    quizzes: &[Quiz],
    out: &mut W,
) -> Result<(), ExportError> {
    match format {
        ExportFormat::Text => render_text(quizzes, out),
        ExportFormat::Json => render_json(quizzes, out),
    }
}

#[cfg(test)]
mod tests;
