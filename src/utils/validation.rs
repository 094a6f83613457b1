use log::{debug, warn};

use crate::expression::{CLOSE_PARENTHESIS, EQUALS, OPEN_PARENTHESIS, Operand};
use crate::utils::errors::UtilsError;

/// # Errors
///
/// Returns an error if the identifier is blank or contains a character the
/// tree builder treats as structure (operator symbols, parentheses, `=`).
pub fn validate_identifier(identifier: &str) -> Result<(), UtilsError> {
    debug!("Validating identifier: '{}'", identifier);

    if identifier.trim().is_empty() {
        warn!("Identifier is blank");
        return Err(UtilsError::BlankIdentifier);
    }

    if let Some(symbol) = identifier.chars().find(|&c| {
        Operand::from_symbol(c).is_some()
            || c == OPEN_PARENTHESIS
            || c == CLOSE_PARENTHESIS
            || c == EQUALS
    }) {
        warn!(
            "Identifier '{}' contains reserved character '{}'",
            identifier, symbol
        );
        return Err(UtilsError::ReservedCharacter {
            identifier: identifier.to_string(),
            symbol,
        });
    }

    Ok(())
}
