//! Utils module split into submodules

mod errors;
mod range;
mod validation;

pub use errors::UtilsError;
pub use range::Range;
pub use validation::validate_identifier;
