// Quiz session state: current question, progress and scoring

use rand::Rng;
use serde::Serialize;

use super::generator::{generate_questions, QuizConfig};
use super::question::Question;
use super::QuizError;

/// Progress information for frontend display
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuizProgress {
    /// Zero-based index of the current question
    pub index: usize,
    /// Number of questions in this quiz
    pub total: usize,
    /// Correct answers so far
    pub score: u32,
}

/// Result of answering one question
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnswerOutcome {
    /// Whether the selection was correct
    pub correct: bool,
    /// The correct letter
    pub correct_answer: String,
    /// For letter-to-image questions, the correct option filename
    pub correct_image: Option<String>,
    /// Score including this answer
    pub score: u32,
    /// Whether this was the last question
    pub finished: bool,
}

/// The current question plus progress, as shown to the frontend
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuizView {
    pub question: Question,
    pub prompt: String,
    pub progress: QuizProgress,
}

/// One quiz run
pub struct QuizSession {
    questions: Vec<Question>,
    index: usize,
    score: u32,
}

impl QuizSession {
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions,
            index: 0,
            score: 0,
        }
    }

    /// The question awaiting an answer, if any
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.index)
    }

    pub fn progress(&self) -> QuizProgress {
        QuizProgress {
            index: self.index,
            total: self.questions.len(),
            score: self.score,
        }
    }

    /// Judge a selection against the current question and advance
    pub fn answer(&mut self, selection: &str) -> Result<AnswerOutcome, QuizError> {
        let question = self
            .questions
            .get(self.index)
            .ok_or(QuizError::NoActiveQuestion)?;

        let correct = question.is_correct(selection);
        if correct {
            self.score += 1;
        }
        let outcome = AnswerOutcome {
            correct,
            correct_answer: question.answer().to_string(),
            correct_image: question.correct_option().map(|option| option.to_string()),
            score: self.score,
            finished: self.index + 1 >= self.questions.len(),
        };
        self.index += 1;
        Ok(outcome)
    }
}

/// Owner of the at-most-one active quiz run plus the persisted best score
pub struct QuizManager {
    config: QuizConfig,
    session: Option<QuizSession>,
    best_score: u32,
}

impl QuizManager {
    /// Create a manager with the default configuration
    pub fn new() -> Self {
        Self::with_config(QuizConfig::default())
    }

    /// Create a manager with a custom configuration
    pub fn with_config(config: QuizConfig) -> Self {
        Self {
            config,
            session: None,
            best_score: 0,
        }
    }

    /// Restore the persisted best score on app startup
    pub fn set_best_score(&mut self, best_score: u32) {
        self.best_score = best_score;
    }

    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    /// Whether a quiz is currently in progress
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// Start a fresh quiz, replacing any run in progress
    pub fn start<R: Rng>(&mut self, rng: &mut R) -> Result<QuizView, QuizError> {
        let questions = generate_questions(&self.config, rng)?;
        let session = QuizSession::new(questions);
        let question = session
            .current_question()
            .cloned()
            .ok_or(QuizError::NoActiveQuestion)?;
        let view = QuizView {
            prompt: question.prompt(),
            question,
            progress: session.progress(),
        };
        self.session = Some(session);
        Ok(view)
    }

    /// The current question and progress
    pub fn view(&self) -> Result<QuizView, QuizError> {
        let session = self.session.as_ref().ok_or(QuizError::NoActiveSession)?;
        let question = session
            .current_question()
            .cloned()
            .ok_or(QuizError::NoActiveQuestion)?;
        Ok(QuizView {
            prompt: question.prompt(),
            question,
            progress: session.progress(),
        })
    }

    /// Answer the current question
    ///
    /// When the quiz finishes the session is cleared and the best score is
    /// updated; the caller reads `finished` to react.
    pub fn answer(&mut self, selection: &str) -> Result<AnswerOutcome, QuizError> {
        let session = self.session.as_mut().ok_or(QuizError::NoActiveSession)?;
        let outcome = session.answer(selection)?;
        if outcome.finished {
            if outcome.score > self.best_score {
                self.best_score = outcome.score;
            }
            self.session = None;
        }
        Ok(outcome)
    }

    /// Number of questions a quiz runs for
    pub fn total_questions(&self) -> usize {
        self.config.total_questions
    }
}

impl Default for QuizManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
