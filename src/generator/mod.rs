//! Random quiz generation with bounded retries at every level

mod attempts;
mod equation;
mod errors;
mod quiz;
mod types;
mod variables;

pub use attempts::{EQUATION_ATTEMPTS, QUIZ_ATTEMPTS, VARIABLE_ATTEMPTS, retry};
pub use equation::{EquationAssembler, HIDDEN_SOLUTION, substitute};
pub use errors::AttemptError;
pub use quiz::QuizGenerator;
pub use types::{Equation, Quiz, Variable};
pub use variables::VariableGenerator;
