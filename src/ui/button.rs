//! Clickable menu buttons
//!
//! A button is a rectangle, a label and an effect. Every pointer that selects
//! inside the rectangle during a tick fires the effect once; two pointers
//! selecting in the same tick fire it twice.

use glam::Vec2;

use super::flag::SharedFlag;
use crate::consts::OUTLINE_WIDTH;
use crate::renderer::{Canvas, Color, TextStyle};
use crate::scene::{Entity, Frame, SceneSwitcher};
use crate::sim::collision::point_rect_collision;
use crate::sim::Rect;

const LABEL_FONT: &str = "Comic Sans MS";

/// What a button does when selected
#[derive(Debug, Clone)]
pub enum ButtonEffect {
    /// Request the named scene
    ChangeScene {
        target: String,
        switcher: SceneSwitcher,
    },
    /// Flip a shared boolean
    Toggle(SharedFlag),
}

/// Labelled rectangle with an on-select effect
#[derive(Debug, Clone)]
pub struct Button {
    pub bounds: Rect,
    label: String,
    effect: ButtonEffect,
}

impl Button {
    pub fn new(center: Vec2, size: Vec2, label: impl Into<String>, effect: ButtonEffect) -> Self {
        Self {
            bounds: Rect::new(center, size, Color::BUTTON),
            label: label.into(),
            effect,
        }
    }

    /// Button that switches to the scene called `target`
    pub fn scene_change(
        center: Vec2,
        size: Vec2,
        label: impl Into<String>,
        target: impl Into<String>,
        switcher: &SceneSwitcher,
    ) -> Self {
        Self::new(
            center,
            size,
            label,
            ButtonEffect::ChangeScene {
                target: target.into(),
                switcher: switcher.clone(),
            },
        )
    }

    /// Button that flips `flag` and shows its value
    pub fn toggle(center: Vec2, size: Vec2, label: impl Into<String>, flag: &SharedFlag) -> Self {
        Self::new(center, size, label, ButtonEffect::Toggle(flag.clone()))
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn effect(&self) -> &ButtonEffect {
        &self.effect
    }

    /// Fire the effect
    pub fn trigger(&self) {
        match &self.effect {
            ButtonEffect::ChangeScene { target, switcher } => switcher.request(target.clone()),
            ButtonEffect::Toggle(flag) => {
                let value = flag.toggle();
                log::debug!("{} -> {}", self.label, value);
            }
        }
    }

    fn label_style(&self) -> TextStyle {
        let chars = self.label.chars().count().max(1) as f32;
        TextStyle::centered(self.bounds.size.x / chars, LABEL_FONT, Color::BLACK)
    }
}

impl Entity for Button {
    fn update(&mut self, frame: &Frame) {
        for pointer in &frame.input.pointers {
            if pointer.selecting && point_rect_collision(pointer.pos, &self.bounds) {
                self.trigger();
            }
        }
    }

    fn render(&self, canvas: &mut dyn Canvas) {
        let b = &self.bounds;
        let line_width = OUTLINE_WIDTH / canvas.pixel_ratio();
        let style = self.label_style();
        let max_width = Some(b.size.x);

        match &self.effect {
            ButtonEffect::ChangeScene { .. } => {
                b.render(canvas);
                canvas.stroke_rect(b.min(), b.size, Color::BLACK, line_width);
                canvas.fill_text(&self.label, b.center, &style, max_width);
            }
            ButtonEffect::Toggle(flag) => {
                let value = flag.get();
                let fill = if value { Color::GREEN } else { Color::DARK_RED };
                canvas.fill_rect(b.min(), b.size, fill);
                canvas.stroke_rect(b.min(), b.size, Color::BLACK, line_width);

                let offset = Vec2::new(0.0, b.size.y / 8.0);
                canvas.fill_text(&self.label, b.center - offset, &style, max_width);
                canvas.fill_text(&value.to_string(), b.center + offset, &style, max_width);
            }
        }
    }

    fn rescale_x(&mut self, old: f32, new: f32) {
        self.bounds.rescale_x(old, new);
    }

    fn rescale_y(&mut self, old: f32, new: f32) {
        self.bounds.rescale_y(old, new);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::InputState;
    use crate::renderer::{DrawCommand, RecordingCanvas};

    fn frame(input: &InputState) -> Frame<'_> {
        Frame::new(0.0, Vec2::new(800.0, 600.0), input)
    }

    fn start_button(switcher: &SceneSwitcher) -> Button {
        Button::scene_change(
            Vec2::new(400.0, 390.0),
            Vec2::new(120.0, 100.0),
            "START!",
            "ingame",
            switcher,
        )
    }

    #[test]
    fn test_selecting_pointer_inside_fires() {
        let switcher = SceneSwitcher::new();
        let mut button = start_button(&switcher);
        let mut input = InputState::new();

        // Hovering does nothing
        input.pointer_moved(0, Vec2::new(400.0, 390.0));
        button.update(&frame(&input));
        assert_eq!(switcher.pending(), 0);

        // Selecting outside does nothing
        input.pointer_pressed(0, Vec2::new(10.0, 10.0));
        button.update(&frame(&input));
        assert_eq!(switcher.pending(), 0);

        input.pointer_pressed(0, Vec2::new(420.0, 400.0));
        button.update(&frame(&input));
        assert_eq!(switcher.take(), vec!["ingame"]);
    }

    #[test]
    fn test_each_selecting_pointer_fires() {
        let flag = SharedFlag::new(false);
        let mut button = Button::toggle(Vec2::new(240.0, 390.0), Vec2::new(120.0, 100.0), "Show FPS", &flag);
        let mut input = InputState::new();
        input.pointer_pressed(0, Vec2::new(240.0, 390.0));
        input.pointer_pressed(1, Vec2::new(250.0, 380.0));
        input.pointer_pressed(2, Vec2::new(250.0, 380.0));

        button.update(&frame(&input));
        // Three toggles
        assert!(flag.get());
    }

    #[test]
    fn test_toggle_involution() {
        let flag = SharedFlag::new(true);
        let button = Button::toggle(Vec2::ZERO, Vec2::splat(10.0), "Show FPS", &flag);
        button.trigger();
        assert!(!flag.get());
        button.trigger();
        assert!(flag.get());
    }

    #[test]
    fn test_scene_change_render() {
        let switcher = SceneSwitcher::new();
        let button = start_button(&switcher);
        let mut canvas = RecordingCanvas::new(800.0, 600.0).with_pixel_ratio(2.0);
        button.render(&mut canvas);

        assert_eq!(canvas.commands.len(), 3);
        assert!(matches!(
            canvas.commands[1],
            DrawCommand::StrokeRect { line_width, .. } if line_width == 3.0
        ));
        match &canvas.commands[2] {
            DrawCommand::Text {
                text,
                style,
                max_width,
                ..
            } => {
                assert_eq!(text, "START!");
                assert_eq!(style.size, 20.0);
                assert_eq!(*max_width, Some(120.0));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_toggle_render_follows_flag() {
        let flag = SharedFlag::new(false);
        let button = Button::toggle(Vec2::new(100.0, 100.0), Vec2::new(80.0, 80.0), "Show FPS", &flag);
        let mut canvas = RecordingCanvas::new(800.0, 600.0);

        button.render(&mut canvas);
        assert!(matches!(
            canvas.commands[0],
            DrawCommand::FillRect { color, .. } if color == Color::DARK_RED
        ));
        assert_eq!(canvas.texts(), vec!["Show FPS", "false"]);

        flag.set(true);
        canvas.clear();
        button.render(&mut canvas);
        assert!(matches!(
            canvas.commands[0],
            DrawCommand::FillRect { color, .. } if color == Color::GREEN
        ));
        assert_eq!(canvas.texts(), vec!["Show FPS", "true"]);
    }
}
