// Question generation: derive the letter pool from the sign images on disk,
// then build a shuffled mix of image-to-letter and letter-to-image questions

use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::question::{extract_letter_from_filename, Question};
use super::QuizError;

/// Default directory holding the sign test images
pub const DEFAULT_IMAGES_DIR: &str = "assets/asl_alphabet_test";

/// Questions per quiz
pub const DEFAULT_TOTAL_QUESTIONS: usize = 10;

/// Options per question
pub const DEFAULT_NUM_OPTIONS: usize = 4;

/// Configuration for quiz generation
#[derive(Debug, Clone)]
pub struct QuizConfig {
    /// Directory scanned for sign images
    pub images_dir: PathBuf,
    /// Number of questions per quiz
    pub total_questions: usize,
    /// Number of options per question (correct answer included)
    pub num_options: usize,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            images_dir: PathBuf::from(DEFAULT_IMAGES_DIR),
            total_questions: DEFAULT_TOTAL_QUESTIONS,
            num_options: DEFAULT_NUM_OPTIONS,
        }
    }
}

/// Scan a directory for usable sign images
///
/// A file is usable when it has an image extension and its name stands for
/// a letter. The result is sorted so generation is deterministic for a
/// given RNG seed.
pub fn list_sign_images(dir: &Path) -> Result<Vec<String>, QuizError> {
    let entries = std::fs::read_dir(dir).map_err(|source| QuizError::ImageDirUnreadable {
        dir: dir.to_path_buf(),
        source,
    })?;

    let mut filenames: Vec<String> = entries
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .filter(|name| has_image_extension(name))
        .filter(|name| extract_letter_from_filename(name).is_some())
        .collect();
    filenames.sort();

    if filenames.is_empty() {
        return Err(QuizError::NoImages(dir.to_path_buf()));
    }
    Ok(filenames)
}

fn has_image_extension(name: &str) -> bool {
    Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            ext.eq_ignore_ascii_case("jpg")
                || ext.eq_ignore_ascii_case("jpeg")
                || ext.eq_ignore_ascii_case("png")
        })
        .unwrap_or(false)
}

/// Generate a full question set from the configured image directory
pub fn generate_questions<R: Rng>(
    config: &QuizConfig,
    rng: &mut R,
) -> Result<Vec<Question>, QuizError> {
    let filenames = list_sign_images(&config.images_dir)?;
    build_questions(&filenames, config, rng)
}

/// Build questions from an already-scanned filename list
///
/// Each distinct letter yields one question; roughly half become
/// image-to-letter, the rest letter-to-image. Wrong options are sampled
/// without replacement from the other letters (or their images), the
/// correct answer is inserted exactly once, and both the options and the
/// question order are shuffled before truncating to the configured total.
pub fn build_questions<R: Rng>(
    filenames: &[String],
    config: &QuizConfig,
    rng: &mut R,
) -> Result<Vec<Question>, QuizError> {
    // One representative image per letter
    let mut by_letter: BTreeMap<String, String> = BTreeMap::new();
    for name in filenames {
        if let Some(letter) = extract_letter_from_filename(name) {
            by_letter.entry(letter).or_insert_with(|| name.clone());
        }
    }

    let mut letters: Vec<String> = by_letter.keys().cloned().collect();
    letters.shuffle(rng);

    let image_question_count = letters.len() / 2;
    let mut questions = Vec::with_capacity(letters.len());

    for (i, letter) in letters.iter().enumerate() {
        let image = by_letter[letter].clone();
        let other_letters: Vec<String> = letters
            .iter()
            .filter(|other| *other != letter)
            .cloned()
            .collect();

        if i < image_question_count {
            let mut options = sample(&other_letters, config.num_options - 1, rng);
            options.push(letter.clone());
            options.shuffle(rng);
            questions.push(Question::ImageToLetter {
                image,
                answer: letter.clone(),
                options,
            });
        } else {
            let other_images: Vec<String> = other_letters
                .iter()
                .map(|other| by_letter[other].clone())
                .collect();
            let mut options = sample(&other_images, config.num_options - 1, rng);
            options.push(image);
            options.shuffle(rng);
            questions.push(Question::LetterToImage {
                answer: letter.clone(),
                options,
            });
        }
    }

    questions.shuffle(rng);
    questions.truncate(config.total_questions);

    if questions.len() < config.total_questions {
        return Err(QuizError::NotEnoughQuestions {
            built: questions.len(),
            needed: config.total_questions,
        });
    }
    Ok(questions)
}

fn sample<R: Rng>(pool: &[String], count: usize, rng: &mut R) -> Vec<String> {
    pool.choose_multiple(rng, count.min(pool.len()))
        .cloned()
        .collect()
}

#[cfg(test)]
#[path = "generator_test.rs"]
mod tests;
