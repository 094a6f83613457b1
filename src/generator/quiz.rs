use log::{debug, info, warn};
use rand::Rng;

use crate::config::Config;
use crate::generator::attempts::{EQUATION_ATTEMPTS, QUIZ_ATTEMPTS, retry};
use crate::generator::equation::EquationAssembler;
use crate::generator::errors::AttemptError;
use crate::generator::types::{Equation, Quiz, Variable};
use crate::generator::variables::VariableGenerator;

/// Runs the quiz, equation and variable retry levels for a whole config.
///
/// Generation never fails: every unit that runs out of attempts is logged
/// and left out, so the result may hold fewer quizzes than requested.
pub struct QuizGenerator<'a> {
    amount: usize,
    variables: VariableGenerator<'a>,
    assemblers: Vec<EquationAssembler<'a>>,
}

impl<'a> QuizGenerator<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self {
            amount: config.quiz.amount,
            variables: VariableGenerator::new(&config.variables),
            assemblers: config.equations.iter().map(EquationAssembler::new).collect(),
        }
    }

    pub fn generate_quizzes<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<Quiz> {
        info!(
            "Generating {} quizzes with {} equations each",
            self.amount,
            self.assemblers.len()
        );

        let mut quizzes = Vec::with_capacity(self.amount);
        for number in 1..=self.amount {
            match retry("Quiz", QUIZ_ATTEMPTS, || self.generate_quiz(rng)) {
                Some(quiz) => quizzes.push(quiz),
                None => warn!(
                    "Failed to generate quiz #{} of {} after {} attempts",
                    number, self.amount, QUIZ_ATTEMPTS
                ),
            }
        }

        info!("Generated {} of {} quizzes", quizzes.len(), self.amount);
        quizzes
    }

    /// A single quiz attempt with freshly drawn variables.
    ///
    /// # Errors
    ///
    /// Returns [`AttemptError::IncompleteQuiz`] when no variable or no
    /// equation survived its own retries.
    pub fn generate_quiz<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Quiz, AttemptError> {
        let variables = self.variables.generate(rng);
        if variables.is_empty() {
            return Err(AttemptError::IncompleteQuiz {
                variables: 0,
                equations: 0,
            });
        }
        let equations = self.generate_equations(&variables, rng);

        if equations.is_empty() {
            return Err(AttemptError::IncompleteQuiz {
                variables: variables.len(),
                equations: equations.len(),
            });
        }

        debug!(
            "Quiz attempt produced {} variables and {} equations",
            variables.len(),
            equations.len()
        );
        Ok(Quiz {
            variables,
            equations,
        })
    }

    fn generate_equations<R: Rng + ?Sized>(
        &self,
        variables: &[Variable],
        rng: &mut R,
    ) -> Vec<Equation> {
        let mut equations = Vec::with_capacity(self.assemblers.len());
        for (index, assembler) in self.assemblers.iter().enumerate() {
            match retry("Equation", EQUATION_ATTEMPTS, || {
                assembler.assemble(variables, rng)
            }) {
                Some(equation) => equations.push(equation),
                None => warn!(
                    "Failed to generate equation #{} after {} attempts",
                    index + 1,
                    EQUATION_ATTEMPTS
                ),
            }
        }
        equations
    }
}
