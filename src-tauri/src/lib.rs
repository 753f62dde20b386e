// Learn more about Tauri commands at https://tauri.app/develop/calling-rust/

// Enable coverage attribute on nightly for explicit exclusions
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

mod commands;
mod events;
mod navigation;
mod quiz;
mod recognition;

use std::sync::{Arc, Mutex};
use tauri::Manager;
use tauri_plugin_log::{Target, TargetKind};
use tauri_plugin_store::StoreExt;

// Re-export log macros for use throughout the crate
pub use tauri_plugin_log::log::{debug, error, info, trace, warn};

/// Application entry point - starts the Tauri event loop.
/// Note: This function cannot be unit tested as it starts a GUI.
#[cfg_attr(coverage_nightly, coverage(off))]
#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .plugin(tauri_plugin_store::Builder::new().build())
        .plugin(
            tauri_plugin_log::Builder::new()
                .targets([
                    Target::new(TargetKind::Stdout),
                    Target::new(TargetKind::Webview),
                    Target::new(TargetKind::LogDir {
                        file_name: Some("handsign".to_string()),
                    }),
                ])
                .level(if cfg!(debug_assertions) {
                    tauri_plugin_log::log::LevelFilter::Debug
                } else {
                    tauri_plugin_log::log::LevelFilter::Info
                })
                .build(),
        )
        .setup(|app| {
            info!("Setting up handsign...");

            // Scene state for the app shell; every screen change goes
            // through navigate_to
            let navigation_state: commands::NavigationState =
                Arc::new(Mutex::new(navigation::SceneManager::new()));
            app.manage(navigation_state);

            // Recognition supervisor; a session starts when the camera
            // view is entered and stops on navigate-away or window close
            let recognition_state: commands::RecognitionState =
                Arc::new(Mutex::new(recognition::RecognitionManager::new()));
            app.manage(recognition_state);

            // Quiz state, restoring the persisted best score
            let best_score = app
                .store(commands::SETTINGS_FILE)
                .ok()
                .and_then(|store| store.get(commands::BEST_SCORE_KEY))
                .and_then(|v| v.as_u64())
                .unwrap_or(0) as u32;
            debug!("Restored quiz.bestScore from store: {}", best_score);
            let mut quiz_manager = quiz::QuizManager::new();
            quiz_manager.set_best_score(best_score);
            let quiz_state: commands::QuizState = Arc::new(Mutex::new(quiz_manager));
            app.manage(quiz_state);

            info!("Setup complete!");
            Ok(())
        })
        .on_window_event(|window, event| {
            if let tauri::WindowEvent::Destroyed = event {
                debug!("Window destroyed, cleaning up...");
                // Same semantics as navigating away from the camera view:
                // the session is torn down intentionally
                if let Some(state) = window
                    .app_handle()
                    .try_state::<commands::RecognitionState>()
                {
                    match state.lock() {
                        Ok(mut manager) => manager.stop(),
                        Err(e) => {
                            error!("Failed to acquire recognition lock during cleanup: {}", e)
                        }
                    }
                }
            }
        })
        .invoke_handler(tauri::generate_handler![
            commands::navigate_to,
            commands::current_scene,
            commands::start_recognition,
            commands::stop_recognition,
            commands::get_recognition_status,
            commands::start_quiz,
            commands::current_question,
            commands::submit_answer,
            commands::get_quiz_best_score
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
