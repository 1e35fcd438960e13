//! Uniform update/render protocol for everything a scene owns
//!
//! Groups are entities too: `Vec<E>` and `Box<E>` forward every call to their
//! members, so a scene can hold single entities and (arbitrarily nested) groups
//! side by side and fan out over them without inspecting types.

use glam::Vec2;

use crate::platform::InputState;
use crate::renderer::Canvas;

/// Per-call snapshot of the outside world handed to entities
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    /// Wall-clock time in milliseconds
    pub now_ms: f64,
    /// Current viewport size in CSS pixels
    pub viewport: Vec2,
    pub input: &'a InputState,
}

impl<'a> Frame<'a> {
    pub fn new(now_ms: f64, viewport: Vec2, input: &'a InputState) -> Self {
        Self {
            now_ms,
            viewport,
            input,
        }
    }
}

/// Something that lives in a scene
///
/// Only `render` is required; the rest default to doing nothing.
pub trait Entity {
    /// The owning scene became active
    fn load(&mut self, _frame: &Frame) {}

    /// The owning scene stopped being active
    fn unload(&mut self) {}

    /// Called once per tick while the owning scene is active
    fn update(&mut self, _frame: &Frame) {}

    fn render(&self, canvas: &mut dyn Canvas);

    /// Viewport width changed from `old` to `new`
    fn rescale_x(&mut self, _old: f32, _new: f32) {}

    /// Viewport height changed from `old` to `new`
    fn rescale_y(&mut self, _old: f32, _new: f32) {}
}

impl<E: Entity> Entity for Vec<E> {
    fn load(&mut self, frame: &Frame) {
        for e in self.iter_mut() {
            e.load(frame);
        }
    }

    fn unload(&mut self) {
        for e in self.iter_mut() {
            e.unload();
        }
    }

    fn update(&mut self, frame: &Frame) {
        for e in self.iter_mut() {
            e.update(frame);
        }
    }

    fn render(&self, canvas: &mut dyn Canvas) {
        for e in self.iter() {
            e.render(canvas);
        }
    }

    fn rescale_x(&mut self, old: f32, new: f32) {
        for e in self.iter_mut() {
            e.rescale_x(old, new);
        }
    }

    fn rescale_y(&mut self, old: f32, new: f32) {
        for e in self.iter_mut() {
            e.rescale_y(old, new);
        }
    }
}

impl<E: Entity + ?Sized> Entity for Box<E> {
    fn load(&mut self, frame: &Frame) {
        (**self).load(frame);
    }

    fn unload(&mut self) {
        (**self).unload();
    }

    fn update(&mut self, frame: &Frame) {
        (**self).update(frame);
    }

    fn render(&self, canvas: &mut dyn Canvas) {
        (**self).render(canvas);
    }

    fn rescale_x(&mut self, old: f32, new: f32) {
        (**self).rescale_x(old, new);
    }

    fn rescale_y(&mut self, old: f32, new: f32) {
        (**self).rescale_y(old, new);
    }
}


#[cfg(test)]
mod tests {
    use super::probe::{CallLog, Probe};
    use super::*;
    use crate::renderer::RecordingCanvas;

    #[test]
    fn test_nested_groups_reach_every_leaf_once() {
        let log = CallLog::default();
        let mut tree: Vec<Box<dyn Entity>> = vec![
            Box::new(Probe::new("a", &log)),
            Box::new(vec![Probe::new("b", &log), Probe::new("c", &log)]),
            Box::new(vec![vec![Probe::new("d", &log)], vec![]]),
        ];

        tree.rescale_x(800.0, 1600.0);

        let calls = log.borrow();
        assert_eq!(
            *calls,
            vec!["a:x:800->1600", "b:x:800->1600", "c:x:800->1600", "d:x:800->1600"]
        );
    }

    #[test]
    fn test_group_render_keeps_declared_order() {
        let log = CallLog::default();
        let tree = vec![
            vec![Probe::new("back", &log)],
            vec![Probe::new("mid", &log), Probe::new("front", &log)],
        ];
        let mut canvas = RecordingCanvas::new(10.0, 10.0);
        tree.render(&mut canvas);
        assert_eq!(*log.borrow(), vec!["back:render", "mid:render", "front:render"]);
    }

    #[test]
    fn test_group_forwards_lifecycle() {
        let log = CallLog::default();
        let mut group = vec![Probe::new("p", &log)];
        let input = InputState::default();
        let frame = Frame::new(0.0, Vec2::new(100.0, 100.0), &input);
        group.load(&frame);
        group.update(&frame);
        group.unload();
        assert_eq!(*log.borrow(), vec!["p:load", "p:update", "p:unload"]);
    }
}
