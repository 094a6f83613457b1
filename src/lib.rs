//! Mathquiz - A library for generating randomized arithmetic quizzes
//!
//! Equations are assembled from randomly drawn variables and operators,
//! built into a tree with a fixed, non-standard operator precedence and
//! evaluated exactly while enforcing configurable validation rules.

pub mod config;
pub mod export;
pub mod expression;
pub mod generator;
pub mod utils;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// Re-export the main public API
pub use config::{Config, ConfigError, load_config, validate_config};
pub use export::{ExportError, ExportFormat, render};
pub use expression::{Decimal, ExpressionError, ExpressionEvaluator, ExpressionTreeBuilder};
pub use generator::{AttemptError, Equation, Quiz, QuizGenerator, Variable};

/// Generate the quizzes described by `config` using the thread-local
/// random number generator.
///
/// Units that keep failing their validation are left out, so the result
/// may contain fewer quizzes than `config.quiz.amount`. Validate the
/// config first with [`validate_config`] to catch mistakes that would
/// make every attempt fail.
///
/// # Examples
///
/// ```
/// use mathquiz::{Config, generate_quizzes};
///
/// let config: Config = serde_json::from_str(r#"{
///     "quiz": { "amount": 2 },
///     "variables": [
///         { "identifier": "a", "range": [1, 10] },
///         { "identifier": "b", "range": [1, 10] }
///     ],
///     "equations": [{
///         "operands": ["+"],
///         "variables": { "amount": 2, "combos": [["a", "b"]] }
///     }]
/// }"#).unwrap();
///
/// let quizzes = generate_quizzes(&config);
/// assert_eq!(quizzes.len(), 2);
/// ```
pub fn generate_quizzes(config: &Config) -> Vec<Quiz> {
    QuizGenerator::new(config).generate_quizzes(&mut rand::thread_rng())
}

/// Same as [`generate_quizzes`], but reproducible for a given `seed`.
pub fn generate_quizzes_seeded(config: &Config, seed: u64) -> Vec<Quiz> {
    QuizGenerator::new(config).generate_quizzes(&mut ChaCha8Rng::seed_from_u64(seed))
}
