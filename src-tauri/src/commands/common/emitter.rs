//! Tauri event emitter implementation.
//!
//! Provides TauriEventEmitter which implements all event emitter traits
//! for production use with Tauri's event system. Emitting an event hands
//! the payload to the webview event loop - the UI-owning context.

use tauri::{AppHandle, Emitter};

use crate::emit_or_warn;
use crate::events::{
    event_names, CameraFramePayload, NavigationEventEmitter, PredictionPayload,
    QuizEventEmitter, QuizFinishedPayload, RecognitionErrorPayload, RecognitionEventEmitter,
    SceneChangedPayload, TranslationPayload,
};

/// Tauri AppHandle-based event emitter for production use.
pub struct TauriEventEmitter {
    app_handle: AppHandle,
}

impl TauriEventEmitter {
    /// Create a new TauriEventEmitter with the given AppHandle.
    pub fn new(app_handle: AppHandle) -> Self {
        Self { app_handle }
    }
}

impl RecognitionEventEmitter for TauriEventEmitter {
    fn emit_camera_frame(&self, payload: CameraFramePayload) {
        emit_or_warn!(self.app_handle, event_names::CAMERA_FRAME, payload);
    }

    fn emit_prediction(&self, payload: PredictionPayload) {
        emit_or_warn!(self.app_handle, event_names::PREDICTION_UPDATED, payload);
    }

    fn emit_translation(&self, payload: TranslationPayload) {
        emit_or_warn!(self.app_handle, event_names::TRANSLATION_UPDATED, payload);
    }

    fn emit_recognition_error(&self, payload: RecognitionErrorPayload) {
        emit_or_warn!(self.app_handle, event_names::RECOGNITION_ERROR, payload);
    }
}

impl NavigationEventEmitter for TauriEventEmitter {
    fn emit_scene_changed(&self, payload: SceneChangedPayload) {
        emit_or_warn!(self.app_handle, event_names::SCENE_CHANGED, payload);
    }
}

impl QuizEventEmitter for TauriEventEmitter {
    fn emit_quiz_finished(&self, payload: QuizFinishedPayload) {
        emit_or_warn!(self.app_handle, event_names::QUIZ_FINISHED, payload);
    }
}

#[cfg(test)]
#[path = "emitter_test.rs"]
mod tests;
