//! Player-controlled fighter body
//!
//! Speeds are fractions of the viewport so a match plays the same at any
//! resolution. Collision response (landing, pushing, walls) is applied
//! afterwards by the fight scene.

use glam::Vec2;

use super::rect::Rect;
use crate::consts::{GRAVITY, JUMP_SPEED, WALK_SPEED};
use crate::renderer::Canvas;
use crate::scene::{Entity, Frame};
use crate::settings::Controls;

/// A fighter: a rectangular body with simple platformer physics
#[derive(Debug, Clone)]
pub struct Character {
    pub body: Rect,
    /// Vertical velocity in pixels per tick (+y is down)
    pub g_vel: f32,
    /// Input is ignored while false (before and after the match)
    pub can_move: bool,
    /// Standing on the floor as of the last physics pass
    pub grounded: bool,
    controls: Controls,
}

impl Character {
    pub fn new(center: Vec2, size: Vec2, controls: Controls) -> Self {
        let color = controls.fill();
        Self {
            body: Rect::new(center, size, color),
            g_vel: 0.0,
            can_move: false,
            grounded: false,
            controls,
        }
    }

    pub fn controls(&self) -> &Controls {
        &self.controls
    }

    /// Stop falling; called when the body was pushed out of the floor
    pub fn land(&mut self) {
        self.g_vel = 0.0;
        self.grounded = true;
    }
}

impl Entity for Character {
    fn load(&mut self, _frame: &Frame) {
        self.g_vel = 0.0;
        self.grounded = false;
        self.can_move = false;
    }

    fn update(&mut self, frame: &Frame) {
        let input = frame.input;
        // Re-established by the floor check after this update
        let was_grounded = std::mem::replace(&mut self.grounded, false);

        if self.can_move {
            let mut dir = 0.0;
            if input.is_key_down(&self.controls.left) {
                dir -= 1.0;
            }
            if input.is_key_down(&self.controls.right) {
                dir += 1.0;
            }
            self.body.center.x += dir * WALK_SPEED * frame.viewport.x;

            if was_grounded && input.is_key_down(&self.controls.jump) {
                self.g_vel = -JUMP_SPEED * frame.viewport.y;
            }
        }

        self.g_vel += GRAVITY * frame.viewport.y;
        self.body.center.y += self.g_vel;
    }

    fn render(&self, canvas: &mut dyn Canvas) {
        self.body.render(canvas);
    }

    fn rescale_x(&mut self, old: f32, new: f32) {
        self.body.rescale_x(old, new);
    }

    fn rescale_y(&mut self, old: f32, new: f32) {
        self.body.rescale_y(old, new);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::InputState;

    const VIEWPORT: Vec2 = Vec2::new(1600.0, 900.0);

    fn fighter() -> Character {
        Character::new(
            Vec2::new(400.0, 600.0),
            Vec2::new(90.0, 300.0),
            Controls::player_one(),
        )
    }

    #[test]
    fn test_gravity_applies_while_frozen() {
        let mut c = fighter();
        let input = InputState::new();
        let frame = Frame::new(0.0, VIEWPORT, &input);
        c.update(&frame);
        assert!(c.g_vel > 0.0);
        assert!(c.body.center.y > 600.0);
        assert_eq!(c.body.center.x, 400.0);
    }

    #[test]
    fn test_frozen_fighter_ignores_keys() {
        let mut c = fighter();
        let mut input = InputState::new();
        input.key_down("KeyD");
        c.update(&Frame::new(0.0, VIEWPORT, &input));
        assert_eq!(c.body.center.x, 400.0);
    }

    #[test]
    fn test_walk() {
        let mut c = fighter();
        c.can_move = true;
        let mut input = InputState::new();
        input.key_down("KeyA");
        c.update(&Frame::new(0.0, VIEWPORT, &input));
        assert!((c.body.center.x - (400.0 - WALK_SPEED * VIEWPORT.x)).abs() < 1e-3);

        // Opposite keys cancel
        input.key_down("KeyD");
        let x = c.body.center.x;
        c.update(&Frame::new(0.0, VIEWPORT, &input));
        assert_eq!(c.body.center.x, x);
    }

    #[test]
    fn test_jump_needs_ground() {
        let mut c = fighter();
        c.can_move = true;
        let mut input = InputState::new();
        input.key_down("KeyW");

        c.update(&Frame::new(0.0, VIEWPORT, &input));
        assert!(c.g_vel > 0.0, "airborne fighter cannot jump");

        c.land();
        c.update(&Frame::new(0.0, VIEWPORT, &input));
        assert!(c.g_vel < 0.0);
        assert!(!c.grounded);
    }

    #[test]
    fn test_load_freezes() {
        let mut c = fighter();
        c.can_move = true;
        c.g_vel = 12.0;
        let input = InputState::new();
        c.load(&Frame::new(0.0, VIEWPORT, &input));
        assert!(!c.can_move);
        assert_eq!(c.g_vel, 0.0);
    }
}
