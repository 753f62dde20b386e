// Scene state machine for the app shell
// Transition requests replace the original global current-screen reference

use serde::{Deserialize, Serialize};

/// Screens the application can show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Scene {
    /// Landing screen with the start button
    Home,
    /// Activity selection (camera vs. learn)
    Menu,
    /// Learn introduction screen
    Learn,
    /// Multiple-choice ASL quiz
    Quiz,
    /// Live camera view backed by the recognition process
    Camera,
}

impl Scene {
    /// Scenes reachable from this one
    pub fn allowed_targets(self) -> &'static [Scene] {
        match self {
            Scene::Home => &[Scene::Menu],
            Scene::Menu => &[Scene::Home, Scene::Learn, Scene::Camera],
            Scene::Learn => &[Scene::Menu, Scene::Quiz],
            Scene::Quiz => &[Scene::Learn],
            Scene::Camera => &[Scene::Menu],
        }
    }
}

/// Errors that can occur during navigation
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NavigationError {
    /// The requested transition is not in the scene graph
    #[error("Cannot navigate from {from:?} to {to:?}")]
    InvalidTransition { from: Scene, to: Scene },
}

/// Owner of the current scene
///
/// Controllers request transitions instead of mutating a shared screen
/// reference; invalid requests are rejected and leave the scene unchanged.
pub struct SceneManager {
    current: Scene,
}

impl SceneManager {
    /// Create a new SceneManager showing the home screen
    pub fn new() -> Self {
        Self {
            current: Scene::Home,
        }
    }

    /// The scene currently shown
    pub fn current(&self) -> Scene {
        self.current
    }

    /// Request a transition to `to`
    ///
    /// Returns the new scene on success. An invalid request returns
    /// `InvalidTransition` and the current scene is unchanged.
    pub fn request_transition(&mut self, to: Scene) -> Result<Scene, NavigationError> {
        if !self.current.allowed_targets().contains(&to) {
            return Err(NavigationError::InvalidTransition {
                from: self.current,
                to,
            });
        }
        self.current = to;
        Ok(self.current)
    }
}

impl Default for SceneManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "navigation_test.rs"]
mod tests;
