//! Boolean shared between a toggle button and its readers

use std::cell::Cell;
use std::rc::Rc;

/// Reference-counted boolean cell
///
/// Clones observe and mutate the same value.
#[derive(Debug, Clone, Default)]
pub struct SharedFlag(Rc<Cell<bool>>);

impl SharedFlag {
    pub fn new(value: bool) -> Self {
        Self(Rc::new(Cell::new(value)))
    }

    pub fn get(&self) -> bool {
        self.0.get()
    }

    pub fn set(&self, value: bool) {
        self.0.set(value);
    }

    /// Flip the value, returning the new one
    pub fn toggle(&self) -> bool {
        let value = !self.0.get();
        self.0.set(value);
        value
    }
}
