//! Axis-aligned rectangle primitive
//!
//! Everything physical in a scene (floor, walls, fighters, buttons) is a
//! center-anchored box. Screen space: +x right, +y down.

use glam::Vec2;

use crate::renderer::{Canvas, Color};

/// Center-anchored axis-aligned box with a fill color
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub center: Vec2,
    pub size: Vec2,
    pub color: Color,
}

impl Rect {
    pub fn new(center: Vec2, size: Vec2, color: Color) -> Self {
        Self {
            center,
            size,
            color,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.center.x - self.size.x / 2.0
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.center.x + self.size.x / 2.0
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.center.y - self.size.y / 2.0
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.center.y + self.size.y / 2.0
    }

    /// Top-left corner
    #[inline]
    pub fn min(&self) -> Vec2 {
        self.center - self.size / 2.0
    }

    /// Inclusive point containment
    pub fn contains_point(&self, p: Vec2) -> bool {
        p.x >= self.left() && p.x <= self.right() && p.y >= self.top() && p.y <= self.bottom()
    }

    /// Stretch horizontally by `new / old`, keeping the layout proportional
    pub fn rescale_x(&mut self, old: f32, new: f32) {
        if let Some(ratio) = scale_ratio(old, new) {
            self.center.x *= ratio;
            self.size.x *= ratio;
        }
    }

    /// Stretch vertically by `new / old`
    pub fn rescale_y(&mut self, old: f32, new: f32) {
        if let Some(ratio) = scale_ratio(old, new) {
            self.center.y *= ratio;
            self.size.y *= ratio;
        }
    }

    /// Fill the bounds with the rectangle's color
    pub fn render(&self, canvas: &mut dyn Canvas) {
        canvas.fill_rect(self.min(), self.size, self.color);
    }
}

/// Ratio for a proportional remap
///
/// `None` when either size is degenerate, so layout never collapses to zero.
pub(crate) fn scale_ratio(old: f32, new: f32) -> Option<f32> {
    if old <= 0.0 || new <= 0.0 || old == new {
        None
    } else {
        Some(new / old)
    }
}
