use log::debug;

use crate::generator::errors::AttemptError;

pub const VARIABLE_ATTEMPTS: usize = 100;
pub const EQUATION_ATTEMPTS: usize = 100;
pub const QUIZ_ATTEMPTS: usize = 100;

/// Calls `attempt` until it succeeds, at most `limit` times.
///
/// Returns `None` once every attempt has failed; each failure is logged
/// with its reason.
pub fn retry<T>(
    unit: &str,
    limit: usize,
    mut attempt: impl FnMut() -> Result<T, AttemptError>,
) -> Option<T> {
    for number in 1..=limit {
        match attempt() {
            Ok(value) => return Some(value),
            Err(reason) => debug!("{} attempt {}/{} failed: {}", unit, number, limit, reason),
        }
    }
    None
}
