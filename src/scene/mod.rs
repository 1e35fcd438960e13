//! Scene system
//!
//! A [`Scene`] is a named screen (menu, fight, results) owning a fixed set of
//! entities. The [`SceneManager`] keeps every scene alive for the whole session
//! and forwards per-frame calls to the single active one.
//!
//! ```text
//! SceneManager
//!   ├─ scenes: HashMap<String, Scene>
//!   ├─ active: Option<String>
//!   └─ switcher ──(cloned into buttons, match timer)
//!
//! update() → Scene::update() → Entity::update() for each entity
//!          → apply queued scene changes
//! ```

pub mod entity;
pub mod manager;
pub mod switcher;

pub use entity::{Entity, Frame};
pub use manager::SceneManager;
pub use switcher::SceneSwitcher;

use glam::Vec2;

use crate::renderer::{Canvas, Color};

/// The entities of one scene plus its scene-specific hooks
///
/// Implementors list their entities in draw order; groups may be returned as a
/// single entry. The list must not change after construction.
pub trait SceneContent {
    fn entities(&self) -> Vec<&dyn Entity>;

    fn entities_mut(&mut self) -> Vec<&mut dyn Entity>;

    /// Runs after every entity has been rescaled and loaded
    fn on_load(&mut self, _frame: &Frame) {}

    /// Runs after every entity has been updated
    fn after_update(&mut self, _frame: &Frame) {}
}

/// A named screen and the entities it owns
pub struct Scene {
    name: String,
    /// Viewport size when the scene was last unloaded (or built)
    last_size: Vec2,
    /// Image drawn stretched over the viewport before any entity
    background: Option<String>,
    content: Box<dyn SceneContent>,
}

impl Scene {
    /// `viewport` is the size the content was laid out for
    pub fn new(name: impl Into<String>, viewport: Vec2, content: impl SceneContent + 'static) -> Self {
        Self {
            name: name.into(),
            last_size: viewport,
            background: None,
            content: Box::new(content),
        }
    }

    pub fn with_background(mut self, src: impl Into<String>) -> Self {
        self.background = Some(src.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn last_size(&self) -> Vec2 {
        self.last_size
    }

    pub fn background(&self) -> Option<&str> {
        self.background.as_deref()
    }

    /// Catch the layout up with any resize since the last unload, then load
    pub fn load(&mut self, frame: &Frame) {
        let old = self.last_size;
        let new = frame.viewport;

        let mut entities = self.content.entities_mut();
        for e in entities.iter_mut() {
            e.rescale_x(old.x, new.x);
        }
        for e in entities.iter_mut() {
            e.rescale_y(old.y, new.y);
        }
        for e in entities.iter_mut() {
            e.load(frame);
        }

        self.content.on_load(frame);
    }

    /// Unload every entity and remember the viewport for the next load
    pub fn unload(&mut self, frame: &Frame) {
        for e in self.content.entities_mut() {
            e.unload();
        }
        self.last_size = frame.viewport;
    }

    pub fn update(&mut self, frame: &Frame) {
        for e in self.content.entities_mut() {
            e.update(frame);
        }
        self.content.after_update(frame);
    }

    /// Clear, draw the background, then entities in list order (later on top)
    pub fn render(&self, canvas: &mut dyn Canvas) {
        let size = canvas.size();
        canvas.fill_rect(Vec2::ZERO, size, Color::WHITE);
        if let Some(src) = &self.background {
            canvas.draw_image(src, Vec2::ZERO, size);
        }
        for e in self.content.entities() {
            e.render(canvas);
        }
    }

    pub fn update_x_scaling(&mut self, old: f32, new: f32) {
        for e in self.content.entities_mut() {
            e.rescale_x(old, new);
        }
    }

    pub fn update_y_scaling(&mut self, old: f32, new: f32) {
        for e in self.content.entities_mut() {
            e.rescale_y(old, new);
        }
    }
}

impl std::fmt::Debug for Scene {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scene")
            .field("name", &self.name)
            .field("last_size", &self.last_size)
            .field("background", &self.background)
            .finish_non_exhaustive()
    }
}
