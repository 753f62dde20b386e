// Question variants for the ASL quiz
// A tagged union with a shared accessor contract, not an inheritance tree

use serde::Serialize;
use std::path::Path;

/// One quiz question
///
/// Options always contain the correct answer exactly once. For
/// letter-to-image questions the options are image filenames and
/// correctness is judged by the letter the selected file stands for.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Question {
    /// Show a sign image, ask which letter it represents
    #[serde(rename_all = "camelCase")]
    ImageToLetter {
        /// Filename of the sign image to display
        image: String,
        /// The letter the image stands for
        answer: String,
        /// Letter options, correct one included
        options: Vec<String>,
    },
    /// Show a letter, ask which image represents it
    #[serde(rename_all = "camelCase")]
    LetterToImage {
        /// The letter being asked about
        answer: String,
        /// Image filename options, correct one included
        options: Vec<String>,
    },
}

impl Question {
    /// The question text shown to the user
    pub fn prompt(&self) -> String {
        match self {
            Question::ImageToLetter { .. } => {
                "Which letter is represented by the image?".to_string()
            }
            Question::LetterToImage { answer, .. } => {
                format!("Which image represents the letter: {}?", answer)
            }
        }
    }

    /// The correct letter
    pub fn answer(&self) -> &str {
        match self {
            Question::ImageToLetter { answer, .. } => answer,
            Question::LetterToImage { answer, .. } => answer,
        }
    }

    /// The selectable options, in display order
    pub fn options(&self) -> &[String] {
        match self {
            Question::ImageToLetter { options, .. } => options,
            Question::LetterToImage { options, .. } => options,
        }
    }

    /// The main image to display, if this question has one
    pub fn image(&self) -> Option<&str> {
        match self {
            Question::ImageToLetter { image, .. } => Some(image),
            Question::LetterToImage { .. } => None,
        }
    }

    /// Judge a selected option
    ///
    /// Letter selections compare case-insensitively; image selections are
    /// reduced to the letter their filename stands for first.
    pub fn is_correct(&self, selection: &str) -> bool {
        match self {
            Question::ImageToLetter { answer, .. } => answer.eq_ignore_ascii_case(selection),
            Question::LetterToImage { answer, .. } => extract_letter_from_filename(selection)
                .map(|letter| letter.eq_ignore_ascii_case(answer))
                .unwrap_or(false),
        }
    }

    /// For letter-to-image questions, the option filename that is correct
    pub fn correct_option(&self) -> Option<&str> {
        match self {
            Question::ImageToLetter { .. } => None,
            Question::LetterToImage { answer, options } => options
                .iter()
                .find(|option| {
                    extract_letter_from_filename(option)
                        .map(|letter| letter.eq_ignore_ascii_case(answer))
                        .unwrap_or(false)
                })
                .map(|option| option.as_str()),
        }
    }
}

/// Extract the letter a sign image file stands for
///
/// `"A_test.jpg"` yields `A`; `del`/`space` basenames map to `DEL`/`SPACE`;
/// otherwise the first character of the part before the underscore, when it
/// is alphabetic, uppercased. Filenames naming no letter yield `None`.
pub fn extract_letter_from_filename(filename: &str) -> Option<String> {
    let name = Path::new(filename).file_name()?.to_str()?;
    let base = match name.rsplit_once('.') {
        Some((base, _ext)) => base,
        None => name,
    };
    let letter_part = match base.split_once('_') {
        Some((letter, _suffix)) => letter,
        None => base,
    };
    match letter_part.to_ascii_lowercase().as_str() {
        "" => None,
        "del" => Some("DEL".to_string()),
        "space" => Some("SPACE".to_string()),
        _ => {
            let first = letter_part.chars().next()?;
            first
                .is_ascii_alphabetic()
                .then(|| first.to_ascii_uppercase().to_string())
        }
    }
}

#[cfg(test)]
#[path = "question_test.rs"]
mod tests;
