//! The game's screens and how they link together
//!
//! ```text
//! start ──START!──▶ ingame ──(time up)──▶ postgame ──Continue──▶ start
//!   │
//!   └─Options─▶ options ──Controls──▶ controls
//!                  ▲  └──Back──▶ start       │
//!                  └────────Back─────────────┘
//! ```

pub mod fight;
pub mod menus;

pub use fight::FightScene;
pub use menus::Menu;

use crate::error::SceneResult;
use crate::scene::SceneManager;
use crate::settings::Settings;
use crate::ui::SharedFlag;

pub const START: &str = "start";
pub const OPTIONS: &str = "options";
pub const CONTROLS: &str = "controls";
pub const FIGHT: &str = "ingame";
pub const POSTGAME: &str = "postgame";

/// Build all five scenes for the current viewport and register them
///
/// Does not activate any scene.
pub fn register_default_scenes(
    manager: &mut SceneManager,
    settings: &Settings,
    show_fps: &SharedFlag,
) -> SceneResult<()> {
    let viewport = manager.viewport().size();
    let switcher = manager.switcher();

    manager.add_scene(menus::start_scene(viewport, &switcher))?;
    manager.add_scene(menus::options_scene(viewport, &switcher, show_fps))?;
    manager.add_scene(menus::controls_scene(viewport, &switcher))?;
    manager.add_scene(FightScene::new(viewport, settings, &switcher).into_scene(viewport))?;
    manager.add_scene(menus::after_fight_scene(viewport, &switcher))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use glam::Vec2;

    use super::*;
    use crate::error::SceneError;
    use crate::platform::{InputState, ManualClock, Viewport};

    fn registered() -> (SceneManager, SharedFlag) {
        let clock = Rc::new(ManualClock::new(0.0));
        let mut manager = SceneManager::new(Viewport::new(1200.0, 600.0), clock);
        let flag = SharedFlag::new(false);
        register_default_scenes(&mut manager, &Settings::default(), &flag).unwrap();
        (manager, flag)
    }

    #[test]
    fn test_all_scenes_registered() {
        let (manager, _) = registered();
        for name in [START, OPTIONS, CONTROLS, FIGHT, POSTGAME] {
            assert!(manager.contains(name), "{name} missing");
        }
        assert_eq!(manager.active_scene(), None);
    }

    #[test]
    fn test_registering_twice_fails() {
        let (mut manager, flag) = registered();
        let err = register_default_scenes(&mut manager, &Settings::default(), &flag).unwrap_err();
        assert_eq!(err, SceneError::DuplicateScene(START.to_string()));
    }

    #[test]
    fn test_start_button_enters_fight_after_one_tick() {
        let (mut manager, _) = registered();
        manager.change_scene(START).unwrap();

        let mut input = InputState::new();
        input.pointer_pressed(0, Vec2::new(600.0, 390.0));
        manager.update(&input).unwrap();
        assert_eq!(manager.active_scene(), Some(FIGHT));
    }

    #[test]
    fn test_options_toggle_shares_flag() {
        let (mut manager, flag) = registered();
        manager.change_scene(OPTIONS).unwrap();

        let mut input = InputState::new();
        input.pointer_pressed(0, Vec2::new(360.0, 390.0));
        manager.update(&input).unwrap();
        assert!(flag.get());
        assert_eq!(manager.active_scene(), Some(OPTIONS));
    }

    #[test]
    fn test_menu_round_trip() {
        let (mut manager, _) = registered();
        manager.change_scene(START).unwrap();

        let mut input = InputState::new();
        // Options, then Controls, then Back twice
        for (pos, expected) in [
            (Vec2::new(600.0, 510.0), OPTIONS),
            (Vec2::new(600.0, 390.0), CONTROLS),
            (Vec2::new(600.0, 510.0), OPTIONS),
            (Vec2::new(600.0, 510.0), START),
        ] {
            input.pointer_pressed(0, pos);
            manager.update(&input).unwrap();
            input.end_frame();
            assert_eq!(manager.active_scene(), Some(expected));
        }
    }
}
