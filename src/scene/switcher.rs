//! Scene transition requests
//!
//! Entities never hold the manager itself. They get a [`SceneSwitcher`] at
//! construction and queue requests through it; the manager drains the queue at
//! the end of its own update.

use std::cell::RefCell;
use std::rc::Rc;

/// FIFO of requested scene names
#[derive(Debug, Default)]
struct TransitionQueue {
    queue: Vec<String>,
}

impl TransitionQueue {
    fn push(&mut self, name: String) {
        self.queue.push(name);
    }

    fn len(&self) -> usize {
        self.queue.len()
    }

    /// Takes all requests, leaving the queue empty
    fn take(&mut self) -> Vec<String> {
        std::mem::take(&mut self.queue)
    }
}

/// Cloneable handle for requesting a scene change
///
/// Every clone feeds the same queue.
#[derive(Debug, Clone, Default)]
pub struct SceneSwitcher {
    queue: Rc<RefCell<TransitionQueue>>,
}

impl SceneSwitcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask for the scene called `name` to become active
    pub fn request(&self, name: impl Into<String>) {
        let name = name.into();
        log::debug!("Scene change to {:?} requested", name);
        self.queue.borrow_mut().push(name);
    }

    /// Number of requests not yet applied
    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    /// Drain requests in the order they were made
    pub(crate) fn take(&self) -> Vec<String> {
        self.queue.borrow_mut().take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_queue_in_order() {
        let switcher = SceneSwitcher::new();
        let button = switcher.clone();
        let timer = switcher.clone();

        button.request("ingame");
        timer.request("postgame");
        assert_eq!(switcher.pending(), 2);

        assert_eq!(switcher.take(), vec!["ingame", "postgame"]);
        assert_eq!(button.pending(), 0);
    }
}
