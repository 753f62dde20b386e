use super::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn letters_fixture(count: usize) -> Vec<String> {
    ('A'..='Z')
        .take(count)
        .map(|letter| format!("{}_test.jpg", letter))
        .collect()
}

fn rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

#[test]
fn test_config_defaults() {
    let config = QuizConfig::default();
    assert_eq!(config.images_dir, PathBuf::from("assets/asl_alphabet_test"));
    assert_eq!(config.total_questions, 10);
    assert_eq!(config.num_options, 4);
}

#[test]
fn test_list_sign_images_filters_and_sorts() {
    let dir = tempfile::tempdir().unwrap();
    for name in ["B_test.jpg", "A_test.jpg", "del_test.jpg", "notes.txt", "1_test.jpg"] {
        std::fs::write(dir.path().join(name), b"x").unwrap();
    }

    let filenames = list_sign_images(dir.path()).unwrap();
    assert_eq!(filenames, vec!["A_test.jpg", "B_test.jpg", "del_test.jpg"]);
}

#[test]
fn test_list_sign_images_empty_dir_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        list_sign_images(dir.path()),
        Err(QuizError::NoImages(_))
    ));
}

#[test]
fn test_list_sign_images_missing_dir_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope");
    assert!(matches!(
        list_sign_images(&missing),
        Err(QuizError::ImageDirUnreadable { .. })
    ));
}

#[test]
fn test_build_questions_honors_count_and_option_size() {
    let filenames = letters_fixture(26);
    let config = QuizConfig::default();

    let questions = build_questions(&filenames, &config, &mut rng()).unwrap();

    assert_eq!(questions.len(), 10);
    for question in &questions {
        assert_eq!(question.options().len(), 4);
    }
}

#[test]
fn test_options_contain_the_correct_answer_exactly_once() {
    let filenames = letters_fixture(26);
    let config = QuizConfig::default();

    let questions = build_questions(&filenames, &config, &mut rng()).unwrap();

    for question in &questions {
        let hits = question
            .options()
            .iter()
            .filter(|option| question.is_correct(option))
            .count();
        assert_eq!(hits, 1, "options: {:?}", question.options());
    }
}

#[test]
fn test_half_of_the_questions_show_an_image() {
    let filenames = letters_fixture(6);
    let config = QuizConfig {
        total_questions: 6,
        ..Default::default()
    };

    let questions = build_questions(&filenames, &config, &mut rng()).unwrap();

    let with_image = questions.iter().filter(|q| q.image().is_some()).count();
    assert_eq!(with_image, 3);
    assert_eq!(questions.len() - with_image, 3);
}

#[test]
fn test_each_letter_appears_at_most_once() {
    let filenames = letters_fixture(26);
    let config = QuizConfig::default();

    let questions = build_questions(&filenames, &config, &mut rng()).unwrap();

    let mut answers: Vec<&str> = questions.iter().map(|q| q.answer()).collect();
    answers.sort();
    answers.dedup();
    assert_eq!(answers.len(), questions.len());
}

#[test]
fn test_too_few_letters_is_an_error() {
    let filenames = letters_fixture(3);
    let config = QuizConfig::default();

    let result = build_questions(&filenames, &config, &mut rng());
    assert!(matches!(
        result,
        Err(QuizError::NotEnoughQuestions { built: 3, needed: 10 })
    ));
}

#[test]
fn test_generation_is_deterministic_per_seed() {
    let filenames = letters_fixture(26);
    let config = QuizConfig::default();

    let first = build_questions(&filenames, &config, &mut rng()).unwrap();
    let second = build_questions(&filenames, &config, &mut rng()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_generate_questions_reads_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    for name in letters_fixture(12) {
        std::fs::write(dir.path().join(name), b"x").unwrap();
    }
    let config = QuizConfig {
        images_dir: dir.path().to_path_buf(),
        ..Default::default()
    };

    let questions = generate_questions(&config, &mut rng()).unwrap();
    assert_eq!(questions.len(), 10);
}
