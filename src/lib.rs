//! Smash Sticks - A two-player stick figure brawler
//!
//! Core modules:
//! - `scene`: Scene manager, entity protocol and scene-change requests
//! - `scenes`: The game's screens (menus, fight stage, results)
//! - `sim`: Rectangles, collision and the fight entities
//! - `ui`: Menu buttons and shared flags
//! - `renderer`: Canvas abstraction (2D canvas on the web, recorder for tests)
//! - `platform`: Clock, viewport and input state fed by the host
//! - `game`: Facade the host drives once per frame

pub mod error;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod scene;
pub mod scenes;
pub mod settings;
pub mod sim;
pub mod ui;

pub use error::{SceneError, SceneResult};
pub use game::Game;
pub use scene::{Entity, Frame, Scene, SceneContent, SceneManager, SceneSwitcher};
pub use settings::{Controls, Settings};

/// Game configuration constants
///
/// Speeds and accelerations are fractions of the viewport per tick, so a
/// match plays the same at any window size.
pub mod consts {
    /// Countdown before fighters may move, in milliseconds
    pub const MATCH_LEAD_IN_MS: f64 = 3000.0;
    /// The match clock turns big and red below this many milliseconds
    pub const DRAMATIC_COUNTDOWN_MS: f64 = 5000.0;
    /// Compact match clock font size (device pixels)
    pub const COUNTDOWN_FONT_SIZE: f32 = 25.0;

    /// Downward acceleration, fraction of viewport height per tick²
    pub const GRAVITY: f32 = 1.0 / 1500.0;
    /// Jump impulse, fraction of viewport height per tick
    pub const JUMP_SPEED: f32 = 1.0 / 60.0;
    /// Walking speed, fraction of viewport width per tick
    pub const WALK_SPEED: f32 = 1.0 / 160.0;

    /// Button outline width (device pixels)
    pub const OUTLINE_WIDTH: f32 = 6.0;

    /// Stage geometry (CSS pixels)
    pub const FLOOR_HEIGHT: f32 = 100.0;
    pub const WALL_WIDTH: f32 = 100.0;
    pub const WALL_HEIGHT: f32 = 1920.0;
    /// Wall centre sits this far above the bottom edge
    pub const WALL_RISE: f32 = 250.0;
}
