//! Host-facing game facade
//!
//! Owns the scene manager and everything the host feeds it. The host only
//! forwards events into [`Game::input_mut`], calls [`Game::resize`] and drives
//! [`Game::frame`] once per animation frame.

use std::rc::Rc;

use glam::Vec2;

use crate::error::SceneResult;
use crate::platform::{Clock, InputState, Viewport};
use crate::renderer::{Canvas, Color, TextAlign, TextBaseline, TextStyle};
use crate::scene::SceneManager;
use crate::scenes::{START, register_default_scenes};
use crate::settings::Settings;
use crate::ui::SharedFlag;

const FPS_WINDOW: usize = 60;
const FPS_FONT_SIZE: f32 = 16.0;

/// Frame rate over the last [`FPS_WINDOW`] frames
#[derive(Debug, Clone)]
pub struct FpsCounter {
    frame_times: [f64; FPS_WINDOW],
    frame_index: usize,
    fps: u32,
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self {
            frame_times: [0.0; FPS_WINDOW],
            frame_index: 0,
            fps: 0,
        }
    }
}

impl FpsCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a frame timestamp and return the updated rate
    pub fn record(&mut self, time_ms: f64) -> u32 {
        self.frame_times[self.frame_index] = time_ms;
        self.frame_index = (self.frame_index + 1) % FPS_WINDOW;

        // The slot after the newest holds the oldest timestamp
        let oldest = self.frame_times[self.frame_index];
        if oldest > 0.0 {
            let elapsed = time_ms - oldest;
            if elapsed > 0.0 {
                self.fps = ((FPS_WINDOW - 1) as f64 * 1000.0 / elapsed).round() as u32;
            }
        }
        self.fps
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }
}

/// Game instance holding all state
pub struct Game {
    manager: SceneManager,
    input: InputState,
    viewport: Viewport,
    show_fps: SharedFlag,
    settings: Settings,
    fps: FpsCounter,
}

impl Game {
    /// Register every scene and enter the title screen
    pub fn new(settings: Settings, viewport: Viewport, clock: Rc<dyn Clock>) -> SceneResult<Self> {
        let show_fps = SharedFlag::new(settings.show_fps);
        let mut manager = SceneManager::new(viewport.clone(), clock);
        register_default_scenes(&mut manager, &settings, &show_fps)?;
        manager.change_scene(START)?;

        Ok(Self {
            manager,
            input: InputState::new(),
            viewport,
            show_fps,
            settings,
            fps: FpsCounter::new(),
        })
    }

    /// Run one update and draw the result
    ///
    /// `time_ms` is the host's frame timestamp and only feeds the FPS counter;
    /// game time comes from the clock given to [`Game::new`].
    pub fn frame(&mut self, canvas: &mut dyn Canvas, time_ms: f64) -> SceneResult<()> {
        self.manager.update(&self.input)?;
        self.input.end_frame();
        self.sync_settings();

        self.fps.record(time_ms);
        self.manager.render(canvas)?;
        if self.show_fps.get() {
            self.render_fps(canvas);
        }
        Ok(())
    }

    /// Store the new viewport size and rescale the active scene
    ///
    /// Inactive scenes catch up when they are next loaded. Empty sizes (a
    /// hidden canvas or minimised window) are ignored.
    pub fn resize(&mut self, width: f32, height: f32) -> SceneResult<()> {
        if width <= 0.0 || height <= 0.0 {
            log::debug!("Ignoring empty viewport {}x{}", width, height);
            return Ok(());
        }
        let old = self.viewport.set(width, height);
        if old == Vec2::new(width, height) {
            return Ok(());
        }
        log::debug!("Viewport {}x{} -> {}x{}", old.x, old.y, width, height);
        self.manager.update_x_scaling(old.x, width)?;
        self.manager.update_y_scaling(old.y, height)
    }

    pub fn input_mut(&mut self) -> &mut InputState {
        &mut self.input
    }

    pub fn active_scene(&self) -> Option<&str> {
        self.manager.active_scene()
    }

    pub fn manager(&self) -> &SceneManager {
        &self.manager
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn show_fps(&self) -> bool {
        self.show_fps.get()
    }

    pub fn fps(&self) -> u32 {
        self.fps.fps()
    }

    /// Persist the FPS toggle when a button flipped it
    fn sync_settings(&mut self) {
        let show_fps = self.show_fps.get();
        if show_fps != self.settings.show_fps {
            self.settings.show_fps = show_fps;
            self.settings.save();
        }
    }

    fn render_fps(&self, canvas: &mut dyn Canvas) {
        let style = TextStyle {
            size: FPS_FONT_SIZE,
            font: "Arial",
            color: Color::BLACK,
            align: TextAlign::Left,
            baseline: TextBaseline::Top,
        };
        let text = format!("FPS: {}", self.fps.fps());
        canvas.fill_text(&text, Vec2::new(8.0, 8.0), &style, None);
    }
}
