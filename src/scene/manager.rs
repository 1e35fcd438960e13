//! Scene registry and active-scene state machine
//!
//! Scenes are registered once and stay alive for the whole session; switching
//! only unloads the old scene and loads the new one. Exactly one scene is active
//! after the first `change_scene`.

use std::collections::HashMap;
use std::rc::Rc;

use glam::Vec2;
use log::{debug, info, warn};

use super::{Frame, Scene, SceneSwitcher};
use crate::error::{SceneError, SceneResult};
use crate::platform::{Clock, InputState, Viewport};
use crate::renderer::Canvas;

/// Owns every scene and forwards frame calls to the active one
pub struct SceneManager {
    scenes: HashMap<String, Scene>,
    active: Option<String>,
    switcher: SceneSwitcher,
    viewport: Viewport,
    clock: Rc<dyn Clock>,
}

impl SceneManager {
    /// Creates a manager with no scenes and nothing active
    pub fn new(viewport: Viewport, clock: Rc<dyn Clock>) -> Self {
        Self {
            scenes: HashMap::new(),
            active: None,
            switcher: SceneSwitcher::new(),
            viewport,
            clock,
        }
    }

    /// Handle for entities that need to trigger scene changes
    ///
    /// Pass it to scene constructors; requests made through it are applied at
    /// the end of the next [`update`](Self::update).
    pub fn switcher(&self) -> SceneSwitcher {
        self.switcher.clone()
    }

    pub(crate) fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Registers a scene under its name
    pub fn add_scene(&mut self, scene: Scene) -> SceneResult<()> {
        let name = scene.name().to_string();
        if self.scenes.contains_key(&name) {
            warn!("Scene {:?} registered twice", name);
            return Err(SceneError::DuplicateScene(name));
        }
        debug!("Registered scene {:?}", name);
        self.scenes.insert(name, scene);
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.scenes.contains_key(name)
    }

    /// Name of the active scene, if any scene was entered yet
    pub fn active_scene(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Unload the active scene (if any), then load and activate `name`
    ///
    /// The target is checked before anything is unloaded, so an unknown name
    /// leaves the current scene running.
    pub fn change_scene(&mut self, name: &str) -> SceneResult<()> {
        if !self.scenes.contains_key(name) {
            return Err(SceneError::UnknownScene(name.to_string()));
        }

        let input = InputState::default();
        let frame = self.frame(&input);

        if let Some(current) = self.active.take() {
            if let Some(scene) = self.scenes.get_mut(&current) {
                scene.unload(&frame);
            }
            info!("Scene change: {} -> {}", current, name);
        } else {
            info!("Entering scene {}", name);
        }

        if let Some(scene) = self.scenes.get_mut(name) {
            scene.load(&frame);
        }
        self.active = Some(name.to_string());
        Ok(())
    }

    //--- Frame calls --------------------------------------------------------

    /// Update the active scene, then apply scene changes it requested
    pub fn update(&mut self, input: &InputState) -> SceneResult<()> {
        let frame = self.frame(input);
        self.active_mut()?.update(&frame);
        self.apply_transitions()
    }

    pub fn render(&self, canvas: &mut dyn Canvas) -> SceneResult<()> {
        self.active_ref()?.render(canvas);
        Ok(())
    }

    pub fn update_x_scaling(&mut self, old: f32, new: f32) -> SceneResult<()> {
        self.active_mut()?.update_x_scaling(old, new);
        Ok(())
    }

    pub fn update_y_scaling(&mut self, old: f32, new: f32) -> SceneResult<()> {
        self.active_mut()?.update_y_scaling(old, new);
        Ok(())
    }

    //--- Internal helpers ---------------------------------------------------

    fn frame<'a>(&self, input: &'a InputState) -> Frame<'a> {
        Frame::new(self.clock.now_ms(), self.viewport_size(), input)
    }

    fn viewport_size(&self) -> Vec2 {
        self.viewport.size()
    }

    fn active_ref(&self) -> SceneResult<&Scene> {
        let name = self.active.as_ref().ok_or(SceneError::NoActiveScene)?;
        self.scenes
            .get(name)
            .ok_or_else(|| SceneError::UnknownScene(name.clone()))
    }

    fn active_mut(&mut self) -> SceneResult<&mut Scene> {
        let name = self.active.as_ref().ok_or(SceneError::NoActiveScene)?;
        self.scenes
            .get_mut(name)
            .ok_or_else(|| SceneError::UnknownScene(name.clone()))
    }

    /// Apply queued requests in FIFO order
    fn apply_transitions(&mut self) -> SceneResult<()> {
        for name in self.switcher.take() {
            self.change_scene(&name)?;
        }
        Ok(())
    }
}
