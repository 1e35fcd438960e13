//! Menu widgets

pub mod button;
pub mod flag;

pub use button::{Button, ButtonEffect};
pub use flag::SharedFlag;
