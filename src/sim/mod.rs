//! Fight simulation: rectangles, collision and the match entities
//!
//! Everything here is pure game logic driven through [`crate::scene::Entity`].
//! Positions are in CSS pixels with +y pointing down.

pub mod block;
pub mod character;
pub mod collision;
pub mod rect;
pub mod timer;

pub use block::Block;
pub use character::Character;
pub use collision::{
    CONTACT_EPSILON, Sides, point_rect_collision, rect_rect_collision, rect_rect_eject,
};
pub use rect::Rect;
pub use timer::{MatchPhase, MatchTimer};
