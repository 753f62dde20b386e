use super::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn two_questions() -> Vec<Question> {
    vec![
        Question::ImageToLetter {
            image: "A_test.jpg".to_string(),
            answer: "A".to_string(),
            options: vec!["A".to_string(), "B".to_string()],
        },
        Question::LetterToImage {
            answer: "C".to_string(),
            options: vec!["C_test.jpg".to_string(), "D_test.jpg".to_string()],
        },
    ]
}

fn manager_with_images(dir: &tempfile::TempDir, total: usize) -> QuizManager {
    for letter in ('A'..='Z').take(total.max(4)) {
        std::fs::write(dir.path().join(format!("{}_test.jpg", letter)), b"x").unwrap();
    }
    QuizManager::with_config(QuizConfig {
        images_dir: dir.path().to_path_buf(),
        total_questions: total,
        ..Default::default()
    })
}

#[test]
fn test_session_walks_questions_in_order() {
    let mut session = QuizSession::new(two_questions());
    assert_eq!(session.progress().index, 0);
    assert_eq!(session.progress().total, 2);

    let first = session.current_question().unwrap().clone();
    assert_eq!(first.answer(), "A");

    session.answer("A").unwrap();
    assert_eq!(session.current_question().unwrap().answer(), "C");
}

#[test]
fn test_correct_answer_scores() {
    let mut session = QuizSession::new(two_questions());

    let outcome = session.answer("A").unwrap();
    assert!(outcome.correct);
    assert_eq!(outcome.score, 1);
    assert!(!outcome.finished);
    assert_eq!(outcome.correct_image, None);
}

#[test]
fn test_wrong_answer_reports_the_correct_one() {
    let mut session = QuizSession::new(two_questions());
    session.answer("A").unwrap();

    let outcome = session.answer("D_test.jpg").unwrap();
    assert!(!outcome.correct);
    assert_eq!(outcome.correct_answer, "C");
    assert_eq!(outcome.correct_image, Some("C_test.jpg".to_string()));
    assert_eq!(outcome.score, 1);
    assert!(outcome.finished);
}

#[test]
fn test_answer_past_the_end_is_an_error() {
    let mut session = QuizSession::new(two_questions());
    session.answer("A").unwrap();
    session.answer("C_test.jpg").unwrap();

    assert!(matches!(
        session.answer("A"),
        Err(QuizError::NoActiveQuestion)
    ));
}

#[test]
fn test_manager_requires_a_started_quiz() {
    let mut manager = QuizManager::new();
    assert!(!manager.is_active());
    assert!(matches!(manager.view(), Err(QuizError::NoActiveSession)));
    assert!(matches!(
        manager.answer("A"),
        Err(QuizError::NoActiveSession)
    ));
}

#[test]
fn test_manager_start_returns_the_first_question() {
    let dir = tempfile::tempdir().unwrap();
    let mut manager = manager_with_images(&dir, 5);

    let view = manager.start(&mut StdRng::seed_from_u64(7)).unwrap();
    assert_eq!(view.progress.index, 0);
    assert_eq!(view.progress.total, 5);
    assert!(manager.is_active());
}

#[test]
fn test_finishing_updates_best_score_and_clears_session() {
    let dir = tempfile::tempdir().unwrap();
    let mut manager = manager_with_images(&dir, 3);
    let mut rng = StdRng::seed_from_u64(7);

    manager.start(&mut rng).unwrap();
    let mut last = None;
    for _ in 0..3 {
        let view = manager.view().unwrap();
        // Always answer correctly
        let selection = match view.question.correct_option() {
            Some(image) => image.to_string(),
            None => view.question.answer().to_string(),
        };
        last = Some(manager.answer(&selection).unwrap());
    }

    let outcome = last.unwrap();
    assert!(outcome.finished);
    assert_eq!(outcome.score, 3);
    assert_eq!(manager.best_score(), 3);
    assert!(!manager.is_active());
}

#[test]
fn test_best_score_keeps_the_maximum() {
    let dir = tempfile::tempdir().unwrap();
    let mut manager = manager_with_images(&dir, 2);
    manager.set_best_score(2);
    let mut rng = StdRng::seed_from_u64(7);

    manager.start(&mut rng).unwrap();
    // Answer everything wrong: score 0 must not lower the best score
    for _ in 0..2 {
        manager.answer("definitely-wrong").unwrap();
    }
    assert_eq!(manager.best_score(), 2);
}

#[test]
fn test_restarting_replaces_the_session() {
    let dir = tempfile::tempdir().unwrap();
    let mut manager = manager_with_images(&dir, 4);
    let mut rng = StdRng::seed_from_u64(7);

    manager.start(&mut rng).unwrap();
    manager.answer("whatever").unwrap();
    let view = manager.start(&mut rng).unwrap();
    assert_eq!(view.progress.index, 0);
    assert_eq!(view.progress.score, 0);
}
