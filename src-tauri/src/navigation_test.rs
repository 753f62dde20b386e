use super::*;

#[test]
fn test_initial_scene_is_home() {
    let manager = SceneManager::new();
    assert_eq!(manager.current(), Scene::Home);
}

#[test]
fn test_home_to_menu_is_allowed() {
    let mut manager = SceneManager::new();
    assert_eq!(manager.request_transition(Scene::Menu), Ok(Scene::Menu));
    assert_eq!(manager.current(), Scene::Menu);
}

#[test]
fn test_home_to_camera_is_rejected() {
    let mut manager = SceneManager::new();
    let result = manager.request_transition(Scene::Camera);
    assert_eq!(
        result,
        Err(NavigationError::InvalidTransition {
            from: Scene::Home,
            to: Scene::Camera,
        })
    );
    // Scene is unchanged after a rejected request
    assert_eq!(manager.current(), Scene::Home);
}

#[test]
fn test_menu_reaches_camera_and_back() {
    let mut manager = SceneManager::new();
    manager.request_transition(Scene::Menu).unwrap();
    manager.request_transition(Scene::Camera).unwrap();
    assert_eq!(manager.current(), Scene::Camera);
    assert_eq!(manager.request_transition(Scene::Menu), Ok(Scene::Menu));
}

#[test]
fn test_learn_quiz_round_trip() {
    let mut manager = SceneManager::new();
    manager.request_transition(Scene::Menu).unwrap();
    manager.request_transition(Scene::Learn).unwrap();
    manager.request_transition(Scene::Quiz).unwrap();
    assert_eq!(manager.current(), Scene::Quiz);

    // Leaving the quiz returns to the learn screen, not home
    assert_eq!(manager.request_transition(Scene::Home).ok(), None);
    assert_eq!(manager.request_transition(Scene::Learn), Ok(Scene::Learn));
}

#[test]
fn test_camera_cannot_jump_to_quiz() {
    let mut manager = SceneManager::new();
    manager.request_transition(Scene::Menu).unwrap();
    manager.request_transition(Scene::Camera).unwrap();
    assert!(manager.request_transition(Scene::Quiz).is_err());
}

#[test]
fn test_self_transition_is_rejected() {
    let mut manager = SceneManager::new();
    assert!(manager.request_transition(Scene::Home).is_err());
}

#[test]
fn test_scene_serializes_camel_case() {
    let json = serde_json::to_string(&Scene::Camera).unwrap();
    assert_eq!(json, "\"camera\"");
    let back: Scene = serde_json::from_str("\"menu\"").unwrap();
    assert_eq!(back, Scene::Menu);
}
