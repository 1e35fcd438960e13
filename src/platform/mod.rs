//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Wall-clock time
//! - Viewport dimensions
//! - Pointer and keyboard input, polled once per update

use std::cell::Cell;
use std::collections::HashSet;
use std::rc::Rc;

use glam::Vec2;

/// Millisecond wall clock
pub trait Clock {
    fn now_ms(&self) -> f64;
}

/// Real time: `Date.now()` in the browser, `SystemTime` natively
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[cfg(target_arch = "wasm32")]
    fn now_ms(&self) -> f64 {
        js_sys::Date::now()
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn now_ms(&self) -> f64 {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs_f64() * 1000.0)
            .unwrap_or(0.0)
    }
}

/// Clock whose time only moves when told to (headless runs and tests)
///
/// Clones share the same time.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<f64>>,
}

impl ManualClock {
    pub fn new(start_ms: f64) -> Self {
        Self {
            now: Rc::new(Cell::new(start_ms)),
        }
    }

    pub fn set(&self, ms: f64) {
        self.now.set(ms);
    }

    pub fn advance(&self, ms: f64) {
        self.now.set(self.now.get() + ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> f64 {
        self.now.get()
    }
}

/// Current viewport size in CSS pixels
///
/// Shared between the host, which writes it on resize, and the scene manager,
/// which reads it whenever a scene loads or unloads.
#[derive(Debug, Clone)]
pub struct Viewport {
    size: Rc<Cell<Vec2>>,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Rc::new(Cell::new(Vec2::new(width, height))),
        }
    }

    pub fn size(&self) -> Vec2 {
        self.size.get()
    }

    pub fn width(&self) -> f32 {
        self.size.get().x
    }

    pub fn height(&self) -> f32 {
        self.size.get().y
    }

    /// Store a new size, returning the previous one
    pub fn set(&self, width: f32, height: f32) -> Vec2 {
        self.size.replace(Vec2::new(width, height))
    }
}

/// A mouse cursor or touch point
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pointer {
    pub pos: Vec2,
    /// Pressed this frame
    pub selecting: bool,
}

/// Input gathered by the host between frames
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pub pointers: Vec<Pointer>,
    /// Held keys, as `KeyboardEvent.code` strings
    keys_down: HashSet<String>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move pointer `id`, growing the pointer list as needed
    pub fn pointer_moved(&mut self, id: usize, pos: Vec2) {
        self.pointer_mut(id).pos = pos;
    }

    /// Press pointer `id` at `pos`
    pub fn pointer_pressed(&mut self, id: usize, pos: Vec2) {
        let pointer = self.pointer_mut(id);
        pointer.pos = pos;
        pointer.selecting = true;
    }

    pub fn key_down(&mut self, code: &str) {
        self.keys_down.insert(code.to_string());
    }

    pub fn key_up(&mut self, code: &str) {
        self.keys_down.remove(code);
    }

    pub fn is_key_down(&self, code: &str) -> bool {
        self.keys_down.contains(code)
    }

    /// Clear one-shot selections after an update consumed them
    pub fn end_frame(&mut self) {
        for pointer in &mut self.pointers {
            pointer.selecting = false;
        }
    }

    fn pointer_mut(&mut self, id: usize) -> &mut Pointer {
        if self.pointers.len() <= id {
            self.pointers.resize(id + 1, Pointer::default());
        }
        &mut self.pointers[id]
    }
}
