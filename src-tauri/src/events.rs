// Events delivered to the webview for frontend state updates
// Defines event payloads and emission traits for testability

use serde::Serialize;

use crate::navigation::Scene;

/// Event names as constants for consistency
pub mod event_names {
    pub const SCENE_CHANGED: &str = "scene_changed";
    pub const CAMERA_FRAME: &str = "camera_frame";
    pub const PREDICTION_UPDATED: &str = "prediction_updated";
    pub const TRANSLATION_UPDATED: &str = "translation_updated";
    pub const RECOGNITION_ERROR: &str = "recognition_error";
    pub const QUIZ_FINISHED: &str = "quiz_finished";
}

/// Payload for scene_changed event
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SceneChangedPayload {
    /// The scene that is now active
    pub scene: Scene,
    /// ISO 8601 timestamp of the transition
    pub timestamp: String,
}

/// Payload for camera_frame event
///
/// Carries the Base64 payload exactly as received from the recognition
/// process; the frontend renders it as a `data:<mime>;base64,<data>` URL.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CameraFramePayload {
    /// MIME type sniffed from the decoded bytes (e.g. "image/jpeg")
    pub mime: String,
    /// Base64-encoded image bytes
    pub data: String,
}

/// Payload for prediction_updated event
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PredictionPayload {
    /// Raw model prediction label
    pub label: String,
}

/// Payload for translation_updated event
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TranslationPayload {
    /// Accumulated translated text
    pub text: String,
}

/// Payload for recognition_error event
///
/// Surfaced to the user as a non-blocking notification; never fatal to the
/// application, only to the current recognition session.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RecognitionErrorPayload {
    /// Short human-readable title
    pub title: String,
    /// Descriptive error message
    pub message: String,
}

/// Payload for quiz_finished event
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuizFinishedPayload {
    /// Final score for the completed quiz
    pub score: u32,
    /// Number of questions asked
    pub total: usize,
    /// Best score seen so far, including this run
    pub best_score: u32,
}

/// Trait for emitting recognition events
/// Allows mocking in tests while using real Tauri AppHandle in production
pub trait RecognitionEventEmitter: Send + Sync {
    /// Emit camera_frame event
    fn emit_camera_frame(&self, payload: CameraFramePayload);

    /// Emit prediction_updated event
    fn emit_prediction(&self, payload: PredictionPayload);

    /// Emit translation_updated event
    fn emit_translation(&self, payload: TranslationPayload);

    /// Emit recognition_error event
    fn emit_recognition_error(&self, payload: RecognitionErrorPayload);
}

/// Trait for emitting navigation events
pub trait NavigationEventEmitter: Send + Sync {
    /// Emit scene_changed event
    fn emit_scene_changed(&self, payload: SceneChangedPayload);
}

/// Trait for emitting quiz events
pub trait QuizEventEmitter: Send + Sync {
    /// Emit quiz_finished event
    fn emit_quiz_finished(&self, payload: QuizFinishedPayload);
}

/// Get the current timestamp in ISO 8601 format
pub fn current_timestamp() -> String {
    chrono::Utc::now().to_rfc3339()
}

#[cfg(test)]
#[path = "events_test.rs"]
pub(crate) mod tests;
