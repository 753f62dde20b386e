//! Multiple-choice ASL quiz
//!
//! Questions come in two shapes over the same option contract: show a sign
//! image and ask for the letter, or show a letter and ask for the image.
//! The generator derives the letter set from the sign images on disk,
//! builds a shuffled half/half mix, and the session tracks progress and
//! score until the configured number of questions is answered.

mod generator;
mod question;
mod session;

use std::path::PathBuf;

pub use generator::{build_questions, generate_questions, list_sign_images, QuizConfig};
pub use question::{extract_letter_from_filename, Question};
pub use session::{AnswerOutcome, QuizManager, QuizProgress, QuizSession, QuizView};

/// Errors that can occur during quiz setup and play
#[derive(Debug, thiserror::Error)]
pub enum QuizError {
    /// The sign image directory could not be scanned
    #[error("Failed to read image directory {dir:?}: {source}")]
    ImageDirUnreadable {
        dir: PathBuf,
        source: std::io::Error,
    },

    /// The directory held no usable sign images
    #[error("No sign images found in {0:?}")]
    NoImages(PathBuf),

    /// Fewer questions could be built than the quiz needs
    #[error("Not enough questions generated: built {built}, need {needed}")]
    NotEnoughQuestions { built: usize, needed: usize },

    /// No quiz has been started (or the last one finished)
    #[error("No quiz is in progress")]
    NoActiveSession,

    /// The session has no question left to answer
    #[error("No question is awaiting an answer")]
    NoActiveQuestion,
}
