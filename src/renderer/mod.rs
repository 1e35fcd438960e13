//! 2D canvas rendering
//!
//! Scenes draw through the [`Canvas`] trait. On the web it is backed by a
//! `CanvasRenderingContext2d`; everywhere else a [`RecordingCanvas`] captures the
//! draw commands so frames can be inspected headlessly.

#[cfg(target_arch = "wasm32")]
pub mod canvas2d;
pub mod recorder;

#[cfg(target_arch = "wasm32")]
pub use canvas2d::Canvas2d;
pub use recorder::{DrawCommand, RecordingCanvas};

use glam::Vec2;

/// RGBA color, 8 bits per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);
    pub const TRANSPARENT: Color = Color::rgba(0xFF, 0xFF, 0xFF, 0x00);
    /// Default button face
    pub const BUTTON: Color = Color::rgb(0x55, 0x55, 0x55);
    /// Toggle button, flag on
    pub const GREEN: Color = Color::rgb(0x00, 0x80, 0x00);
    /// Toggle button, flag off
    pub const DARK_RED: Color = Color::rgb(0x8B, 0x00, 0x00);
    /// Final-seconds countdown
    pub const ALARM: Color = Color::rgb(0xCC, 0x00, 0x00);
    /// Stage floor
    pub const FLOOR: Color = Color::rgb(0x92, 0x78, 0xF1);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xFF }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse `#RRGGBB` or `#RRGGBBAA`
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#')?;
        let channel = |i: usize| u8::from_str_radix(digits.get(i..i + 2)?, 16).ok();
        match digits.len() {
            6 => Some(Self::rgb(channel(0)?, channel(2)?, channel(4)?)),
            8 => Some(Self::rgba(channel(0)?, channel(2)?, channel(4)?, channel(6)?)),
            _ => None,
        }
    }

    /// CSS color string (`#RRGGBBAA`)
    pub fn css(&self) -> String {
        format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }

    pub fn is_transparent(&self) -> bool {
        self.a == 0
    }
}

/// Horizontal text anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    Left,
    #[default]
    Center,
    Right,
}

impl TextAlign {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        }
    }
}

/// Vertical text anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextBaseline {
    Top,
    #[default]
    Middle,
    Bottom,
}

impl TextBaseline {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextBaseline::Top => "top",
            TextBaseline::Middle => "middle",
            TextBaseline::Bottom => "bottom",
        }
    }
}

/// Font, size, color and anchoring for a text draw
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    /// Font size in CSS pixels
    pub size: f32,
    pub font: &'static str,
    pub color: Color,
    pub align: TextAlign,
    pub baseline: TextBaseline,
}

impl TextStyle {
    /// Text centered on its anchor point
    pub fn centered(size: f32, font: &'static str, color: Color) -> Self {
        Self {
            size,
            font,
            color,
            align: TextAlign::Center,
            baseline: TextBaseline::Middle,
        }
    }

    /// CSS font shorthand, e.g. `24px Arial`
    pub fn css_font(&self) -> String {
        format!("{}px {}", self.size, self.font)
    }
}

/// Immediate-mode 2D drawing surface
///
/// Coordinates are CSS pixels with the origin at the top-left corner.
pub trait Canvas {
    /// Drawable area in CSS pixels
    fn size(&self) -> Vec2;

    /// Device pixels per CSS pixel
    fn pixel_ratio(&self) -> f32;

    fn fill_rect(&mut self, min: Vec2, size: Vec2, color: Color);

    fn stroke_rect(&mut self, min: Vec2, size: Vec2, color: Color, line_width: f32);

    /// Draw the image at `src`, stretched to the given box
    fn draw_image(&mut self, src: &str, min: Vec2, size: Vec2);

    fn fill_text(&mut self, text: &str, pos: Vec2, style: &TextStyle, max_width: Option<f32>);
}
