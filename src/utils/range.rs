use serde::{Deserialize, Serialize};

/// An inclusive `[min, max]` range as it appears in configuration.
///
/// Deserialized from a two-element array `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(T, T)", into = "(T, T)")]
pub struct Range<T: Clone> {
    pub min: T,
    pub max: T,
}

impl<T: Clone> Range<T> {
    pub fn new(min: T, max: T) -> Self {
        Self { min, max }
    }
}

impl<T: Clone + PartialOrd> Range<T> {
    pub fn contains(&self, value: &T) -> bool {
        &self.min <= value && value <= &self.max
    }

    pub fn is_empty(&self) -> bool {
        self.min > self.max
    }
}

impl<T: Clone> From<(T, T)> for Range<T> {
    fn from((min, max): (T, T)) -> Self {
        Self { min, max }
    }
}

impl<T: Clone> From<Range<T>> for (T, T) {
    fn from(range: Range<T>) -> Self {
        (range.min, range.max)
    }
}
