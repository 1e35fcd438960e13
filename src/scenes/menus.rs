//! Button-only screens: title, options, controls and the post-game screen

use glam::Vec2;

use super::{CONTROLS, FIGHT, OPTIONS, POSTGAME, START};
use crate::scene::{Entity, Scene, SceneContent, SceneSwitcher};
use crate::ui::{Button, SharedFlag};

const MAIN_MENU_BACKGROUND: &str = "Pictures/MainMenu.png";

/// A screen made of buttons, drawn in list order
#[derive(Debug, Default)]
pub struct Menu {
    pub buttons: Vec<Button>,
}

impl Menu {
    pub fn new(buttons: Vec<Button>) -> Self {
        Self { buttons }
    }
}

impl SceneContent for Menu {
    fn entities(&self) -> Vec<&dyn Entity> {
        self.buttons.iter().map(|b| b as &dyn Entity).collect()
    }

    fn entities_mut(&mut self) -> Vec<&mut dyn Entity> {
        self.buttons
            .iter_mut()
            .map(|b| b as &mut dyn Entity)
            .collect()
    }
}

/// Every menu button is a sixth of the viewport on each axis
fn button_size(viewport: Vec2) -> Vec2 {
    viewport / 6.0
}

/// Upper row, centred
fn upper_slot(viewport: Vec2) -> Vec2 {
    Vec2::new(viewport.x / 2.0, viewport.y * 13.0 / 20.0)
}

/// Lower row, centred
fn lower_slot(viewport: Vec2) -> Vec2 {
    Vec2::new(viewport.x / 2.0, viewport.y * 17.0 / 20.0)
}

pub fn start_scene(viewport: Vec2, switcher: &SceneSwitcher) -> Scene {
    let size = button_size(viewport);
    let menu = Menu::new(vec![
        Button::scene_change(upper_slot(viewport), size, "START!", FIGHT, switcher),
        Button::scene_change(lower_slot(viewport), size, "Options", OPTIONS, switcher),
    ]);
    Scene::new(START, viewport, menu).with_background(MAIN_MENU_BACKGROUND)
}

/// `show_fps` is the flag the host reads to draw its FPS overlay
pub fn options_scene(viewport: Vec2, switcher: &SceneSwitcher, show_fps: &SharedFlag) -> Scene {
    let size = button_size(viewport);
    let fps_slot = Vec2::new(viewport.x * 3.0 / 10.0, viewport.y * 13.0 / 20.0);
    let menu = Menu::new(vec![
        Button::scene_change(upper_slot(viewport), size, "Controls", CONTROLS, switcher),
        Button::toggle(fps_slot, size, "Show FPS", show_fps),
        Button::scene_change(lower_slot(viewport), size, "Back", START, switcher),
    ]);
    Scene::new(OPTIONS, viewport, menu)
}

pub fn controls_scene(viewport: Vec2, switcher: &SceneSwitcher) -> Scene {
    let menu = Menu::new(vec![Button::scene_change(
        lower_slot(viewport),
        button_size(viewport),
        "Back",
        OPTIONS,
        switcher,
    )]);
    Scene::new(CONTROLS, viewport, menu)
}

pub fn after_fight_scene(viewport: Vec2, switcher: &SceneSwitcher) -> Scene {
    let menu = Menu::new(vec![Button::scene_change(
        lower_slot(viewport),
        button_size(viewport),
        "Continue",
        START,
        switcher,
    )]);
    Scene::new(POSTGAME, viewport, menu)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{DrawCommand, RecordingCanvas};

    const VIEWPORT: Vec2 = Vec2::new(1200.0, 600.0);

    #[test]
    fn test_start_layout() {
        let switcher = SceneSwitcher::new();
        let scene = start_scene(VIEWPORT, &switcher);
        assert_eq!(scene.name(), START);
        assert_eq!(scene.background(), Some(MAIN_MENU_BACKGROUND));

        let mut canvas = RecordingCanvas::new(VIEWPORT.x, VIEWPORT.y);
        scene.render(&mut canvas);
        assert!(matches!(
            &canvas.commands[1],
            DrawCommand::Image { src, .. } if src == MAIN_MENU_BACKGROUND
        ));
        assert_eq!(canvas.texts(), vec!["START!", "Options"]);
        // START! button body
        assert!(matches!(
            canvas.commands[2],
            DrawCommand::FillRect { min, size, .. }
                if min == Vec2::new(500.0, 340.0) && size == Vec2::new(200.0, 100.0)
        ));
    }

    #[test]
    fn test_options_buttons() {
        let switcher = SceneSwitcher::new();
        let flag = SharedFlag::new(true);
        let scene = options_scene(VIEWPORT, &switcher, &flag);
        let mut canvas = RecordingCanvas::new(VIEWPORT.x, VIEWPORT.y);
        scene.render(&mut canvas);
        assert_eq!(canvas.texts(), vec!["Controls", "Show FPS", "true", "Back"]);
    }

    #[test]
    fn test_single_button_screens() {
        let switcher = SceneSwitcher::new();
        for (scene, label) in [
            (controls_scene(VIEWPORT, &switcher), "Back"),
            (after_fight_scene(VIEWPORT, &switcher), "Continue"),
        ] {
            let mut canvas = RecordingCanvas::new(VIEWPORT.x, VIEWPORT.y);
            scene.render(&mut canvas);
            assert_eq!(canvas.texts(), vec![label]);
        }
    }
}
