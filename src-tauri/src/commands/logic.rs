// Command implementation logic - testable functions separate from Tauri wrappers

use serde::Serialize;
use std::sync::{Arc, Mutex};

use crate::events::RecognitionEventEmitter;
use crate::navigation::{NavigationError, Scene, SceneManager};
use crate::quiz::{AnswerOutcome, QuizManager, QuizView};
use crate::recognition::RecognitionManager;

/// Information about the recognition session for frontend consumption
#[derive(Debug, Clone, Serialize)]
pub struct RecognitionStatusInfo {
    /// Whether a recognition session is active
    pub active: bool,
}

/// Implementation of navigate_to
///
/// Validates the requested transition first; a rejected request has no side
/// effects. Leaving the camera scene stops the recognition session BEFORE
/// the scene changes, so the process is never left running behind another
/// screen.
///
/// # Errors
/// Returns an error string if:
/// - The transition is not in the scene graph
/// - A state lock is poisoned
pub fn navigate_impl(
    nav: &Mutex<SceneManager>,
    recognition: &Mutex<RecognitionManager>,
    to: Scene,
) -> Result<Scene, String> {
    let mut nav_manager = nav
        .lock()
        .map_err(|e| format!("Failed to acquire lock: {}", e))?;

    let from = nav_manager.current();
    if !from.allowed_targets().contains(&to) {
        return Err(NavigationError::InvalidTransition { from, to }.to_string());
    }

    if from == Scene::Camera {
        let mut recognition_manager = recognition
            .lock()
            .map_err(|e| format!("Failed to acquire lock: {}", e))?;
        recognition_manager.stop();
    }

    nav_manager.request_transition(to).map_err(|e| e.to_string())
}

/// Implementation of current_scene
pub fn current_scene_impl(nav: &Mutex<SceneManager>) -> Result<Scene, String> {
    let manager = nav
        .lock()
        .map_err(|e| format!("Failed to acquire lock: {}", e))?;
    Ok(manager.current())
}

/// Implementation of start_recognition
///
/// Spawn failure has already been reported through the emitter by the
/// manager; the error string here is for the invoking frontend call.
pub fn start_recognition_impl(
    state: &Mutex<RecognitionManager>,
    emitter: Arc<dyn RecognitionEventEmitter>,
) -> Result<(), String> {
    let mut manager = state
        .lock()
        .map_err(|e| format!("Failed to acquire lock: {}", e))?;
    manager.start(emitter).map_err(|e| e.to_string())
}

/// Implementation of stop_recognition
pub fn stop_recognition_impl(state: &Mutex<RecognitionManager>) -> Result<(), String> {
    let mut manager = state
        .lock()
        .map_err(|e| format!("Failed to acquire lock: {}", e))?;
    manager.stop();
    Ok(())
}

/// Implementation of get_recognition_status
pub fn get_recognition_status_impl(
    state: &Mutex<RecognitionManager>,
) -> Result<RecognitionStatusInfo, String> {
    let manager = state
        .lock()
        .map_err(|e| format!("Failed to acquire lock: {}", e))?;
    Ok(RecognitionStatusInfo {
        active: manager.is_active(),
    })
}

/// Implementation of start_quiz
pub fn start_quiz_impl(state: &Mutex<QuizManager>) -> Result<QuizView, String> {
    let mut manager = state
        .lock()
        .map_err(|e| format!("Failed to acquire lock: {}", e))?;
    manager.start(&mut rand::thread_rng()).map_err(|e| e.to_string())
}

/// Implementation of current_question
pub fn current_question_impl(state: &Mutex<QuizManager>) -> Result<QuizView, String> {
    let manager = state
        .lock()
        .map_err(|e| format!("Failed to acquire lock: {}", e))?;
    manager.view().map_err(|e| e.to_string())
}

/// Implementation of submit_answer
pub fn submit_answer_impl(
    state: &Mutex<QuizManager>,
    selection: &str,
) -> Result<AnswerOutcome, String> {
    let mut manager = state
        .lock()
        .map_err(|e| format!("Failed to acquire lock: {}", e))?;
    manager.answer(selection).map_err(|e| e.to_string())
}

/// Implementation of get_quiz_best_score
pub fn get_quiz_best_score_impl(state: &Mutex<QuizManager>) -> Result<u32, String> {
    let manager = state
        .lock()
        .map_err(|e| format!("Failed to acquire lock: {}", e))?;
    Ok(manager.best_score())
}

#[cfg(test)]
#[path = "logic_test.rs"]
mod tests;
