//! Headless canvas that records every draw call

use glam::Vec2;

use super::{Canvas, Color, TextStyle};

/// A single recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillRect {
        min: Vec2,
        size: Vec2,
        color: Color,
    },
    StrokeRect {
        min: Vec2,
        size: Vec2,
        color: Color,
        line_width: f32,
    },
    Image {
        src: String,
        min: Vec2,
        size: Vec2,
    },
    Text {
        text: String,
        pos: Vec2,
        style: TextStyle,
        max_width: Option<f32>,
    },
}

/// Canvas that keeps a log of draw commands instead of rasterizing
#[derive(Debug, Clone)]
pub struct RecordingCanvas {
    size: Vec2,
    pixel_ratio: f32,
    pub commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
            pixel_ratio: 1.0,
            commands: Vec::new(),
        }
    }

    pub fn with_pixel_ratio(mut self, pixel_ratio: f32) -> Self {
        self.pixel_ratio = pixel_ratio;
        self
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.size = Vec2::new(width, height);
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Every string drawn so far, in draw order
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Canvas for RecordingCanvas {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn pixel_ratio(&self) -> f32 {
        self.pixel_ratio
    }

    fn fill_rect(&mut self, min: Vec2, size: Vec2, color: Color) {
        self.commands.push(DrawCommand::FillRect { min, size, color });
    }

    fn stroke_rect(&mut self, min: Vec2, size: Vec2, color: Color, line_width: f32) {
        self.commands.push(DrawCommand::StrokeRect {
            min,
            size,
            color,
            line_width,
        });
    }

    fn draw_image(&mut self, src: &str, min: Vec2, size: Vec2) {
        self.commands.push(DrawCommand::Image {
            src: src.to_string(),
            min,
            size,
        });
    }

    fn fill_text(&mut self, text: &str, pos: Vec2, style: &TextStyle, max_width: Option<f32>) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            pos,
            style: style.clone(),
            max_width,
        });
    }
}
