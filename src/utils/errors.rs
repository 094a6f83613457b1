use thiserror::Error;

/// Errors that can occur in utility functions
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UtilsError {
    #[error("Identifier cannot be blank")]
    BlankIdentifier,
    #[error("Identifier '{identifier}' contains reserved character '{symbol}'")]
    ReservedCharacter { identifier: String, symbol: char },
}
