// Tauri IPC commands module
// This file contains Tauri-specific wrappers and is excluded from coverage.
// The actual logic is in logic.rs which is fully tested.
#![cfg_attr(coverage_nightly, coverage(off))]

mod common;
pub mod logic;

pub use common::TauriEventEmitter;
pub use logic::RecognitionStatusInfo;
use logic::{
    current_question_impl, current_scene_impl, get_quiz_best_score_impl,
    get_recognition_status_impl, navigate_impl, start_quiz_impl, start_recognition_impl,
    stop_recognition_impl, submit_answer_impl,
};

use crate::emit_or_warn;
use crate::events::{current_timestamp, event_names, QuizFinishedPayload, SceneChangedPayload};
use crate::navigation::{Scene, SceneManager};
use crate::quiz::{AnswerOutcome, QuizManager, QuizView};
use crate::recognition::RecognitionManager;
use std::sync::{Arc, Mutex};
use tauri::{AppHandle, Emitter, State};
use tauri_plugin_store::StoreExt;

/// Type alias for navigation state
pub type NavigationState = Arc<Mutex<SceneManager>>;

/// Type alias for recognition manager state
pub type RecognitionState = Arc<Mutex<RecognitionManager>>;

/// Type alias for quiz manager state
pub type QuizState = Arc<Mutex<QuizManager>>;

/// Settings store file for persisted values
pub const SETTINGS_FILE: &str = "settings.json";

/// Store key for the persisted quiz best score
pub const BEST_SCORE_KEY: &str = "quiz.bestScore";

/// Switch to another scene
///
/// Leaving the camera view stops the recognition session before the scene
/// changes; the window-destroy hook in lib.rs carries the same semantics.
#[tauri::command]
pub fn navigate_to(
    app_handle: AppHandle,
    nav_state: State<'_, NavigationState>,
    recognition_state: State<'_, RecognitionState>,
    to: Scene,
) -> Result<Scene, String> {
    let scene = navigate_impl(nav_state.as_ref(), recognition_state.as_ref(), to)?;
    emit_or_warn!(
        app_handle,
        event_names::SCENE_CHANGED,
        SceneChangedPayload {
            scene,
            timestamp: current_timestamp(),
        }
    );
    Ok(scene)
}

/// Get the scene currently shown
#[tauri::command]
pub fn current_scene(nav_state: State<'_, NavigationState>) -> Result<Scene, String> {
    current_scene_impl(nav_state.as_ref())
}

/// Start a recognition session for the camera view
#[tauri::command]
pub fn start_recognition(
    app_handle: AppHandle,
    state: State<'_, RecognitionState>,
) -> Result<(), String> {
    let emitter = Arc::new(TauriEventEmitter::new(app_handle));
    start_recognition_impl(state.as_ref(), emitter)
}

/// Stop the active recognition session, if any
#[tauri::command]
pub fn stop_recognition(state: State<'_, RecognitionState>) -> Result<(), String> {
    stop_recognition_impl(state.as_ref())
}

/// Query whether a recognition session is active
#[tauri::command]
pub fn get_recognition_status(
    state: State<'_, RecognitionState>,
) -> Result<RecognitionStatusInfo, String> {
    get_recognition_status_impl(state.as_ref())
}

/// Start a fresh quiz and return the first question
#[tauri::command]
pub fn start_quiz(state: State<'_, QuizState>) -> Result<QuizView, String> {
    start_quiz_impl(state.as_ref())
}

/// Get the question currently awaiting an answer
#[tauri::command]
pub fn current_question(state: State<'_, QuizState>) -> Result<QuizView, String> {
    current_question_impl(state.as_ref())
}

/// Answer the current question
///
/// When this was the last question, a quiz_finished event is emitted and
/// the best score is persisted.
#[tauri::command]
pub fn submit_answer(
    app_handle: AppHandle,
    state: State<'_, QuizState>,
    selection: String,
) -> Result<AnswerOutcome, String> {
    let outcome = submit_answer_impl(state.as_ref(), &selection)?;

    if outcome.finished {
        let (total, best_score) = {
            let manager = state
                .lock()
                .map_err(|e| format!("Failed to acquire lock: {}", e))?;
            (manager.total_questions(), manager.best_score())
        };
        emit_or_warn!(
            app_handle,
            event_names::QUIZ_FINISHED,
            QuizFinishedPayload {
                score: outcome.score,
                total,
                best_score,
            }
        );
        persist_best_score(&app_handle, best_score);
    }

    Ok(outcome)
}

/// Get the best score across all completed quizzes
#[tauri::command]
pub fn get_quiz_best_score(state: State<'_, QuizState>) -> Result<u32, String> {
    get_quiz_best_score_impl(state.as_ref())
}

fn persist_best_score(app_handle: &AppHandle, best_score: u32) {
    match app_handle.store(SETTINGS_FILE) {
        Ok(store) => store.set(BEST_SCORE_KEY, serde_json::json!(best_score)),
        Err(e) => crate::warn!("Failed to persist best score: {}", e),
    }
}
