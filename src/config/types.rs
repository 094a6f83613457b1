use serde::{Deserialize, Serialize};

use crate::expression::{Decimal, Operand, ValidationRules};
use crate::utils::Range;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub quiz: QuizConfig,
    pub variables: Vec<VariableConfig>,
    pub equations: Vec<EquationConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct QuizConfig {
    pub amount: usize,
    /// Accepted for compatibility with existing profiles. Equations are
    /// always generated in declaration order.
    #[serde(default)]
    pub equation_order: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct VariableConfig {
    pub identifier: String,
    pub range: Range<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct EquationConfig {
    #[serde(default)]
    pub operands: Vec<Operand>,
    pub variables: EquationVariableConfig,
    #[serde(default)]
    pub mutation: MutationConfig,
    #[serde(default)]
    pub validate: ValidationRules,
    #[serde(default)]
    pub solution: SolutionConfig,
    #[serde(default)]
    pub substitution: Substitution,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct EquationVariableConfig {
    /// Number of variable tokens in the equation.
    pub amount: usize,
    /// Identifier lists that may appear together; one is picked per equation.
    pub combos: Vec<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct MutationConfig {
    pub enabled: bool,
    /// Probability in `[0, 1]` that an affected token is mutated.
    pub chance: f64,
    pub multiplier: Multiplier,
    pub amplifier: Range<i64>,
    pub affected_variables: Vec<String>,
}

impl Default for MutationConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            chance: 0.0,
            multiplier: Multiplier::One,
            amplifier: Range::new(1, 1),
            affected_variables: Vec::new(),
        }
    }
}

impl MutationConfig {
    pub fn affects(&self, identifier: &str) -> bool {
        self.enabled && self.affected_variables.iter().any(|v| v == identifier)
    }
}

/// Factor a mutated token is scaled by before amplification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub enum Multiplier {
    Quarter,
    Half,
    One,
}

impl Multiplier {
    /// Literal written into the expression, `None` when no wrapping applies.
    pub fn literal(self) -> Option<&'static str> {
        match self {
            Multiplier::Quarter => Some("0.25"),
            Multiplier::Half => Some("0.5"),
            Multiplier::One => None,
        }
    }
}

impl TryFrom<f64> for Multiplier {
    type Error = String;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if value == 0.25 {
            Ok(Multiplier::Quarter)
        } else if value == 0.5 {
            Ok(Multiplier::Half)
        } else if value == 1.0 {
            Ok(Multiplier::One)
        } else {
            Err(format!("invalid mutation multiplier {value}, expected 0.25, 0.5 or 1"))
        }
    }
}

impl From<Multiplier> for f64 {
    fn from(multiplier: Multiplier) -> Self {
        match multiplier {
            Multiplier::Quarter => 0.25,
            Multiplier::Half => 0.5,
            Multiplier::One => 1.0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct SolutionConfig {
    /// Inclusive bounds for the solution; unbounded when absent.
    pub range: Option<Range<Decimal>>,
    /// Render `?` instead of the solution.
    pub hide: bool,
}

/// How identifiers in the identifier-form expression are replaced by values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Substitution {
    /// Plain substring replacement, one identifier after the other. An
    /// identifier that is a substring of another one corrupts the latter.
    #[default]
    Literal,
    /// Only whole tokens between operators and parentheses are replaced.
    Token,
}
