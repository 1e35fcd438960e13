//! Static stage geometry (floor, walls)

use glam::Vec2;

use super::rect::Rect;
use crate::renderer::{Canvas, Color};
use crate::scene::Entity;

/// An immovable colored rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Block {
    pub rect: Rect,
}

impl Block {
    pub fn new(center: Vec2, size: Vec2, color: Color) -> Self {
        Self {
            rect: Rect::new(center, size, color),
        }
    }
}

impl Entity for Block {
    fn render(&self, canvas: &mut dyn Canvas) {
        self.rect.render(canvas);
    }

    fn rescale_x(&mut self, old: f32, new: f32) {
        self.rect.rescale_x(old, new);
    }

    fn rescale_y(&mut self, old: f32, new: f32) {
        self.rect.rescale_y(old, new);
    }
}
