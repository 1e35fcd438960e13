//! Rectangle collision detection and ejection
//!
//! Overlap is only reported when it is deeper than [`CONTACT_EPSILON`] on both
//! axes, so a rectangle that was just ejected and sits flush against the other
//! does not collide again.

use glam::Vec2;

use super::rect::Rect;

/// Overlap depth below which two rectangles are considered touching, not colliding
pub const CONTACT_EPSILON: f32 = 1e-3;

/// Faces of the fixed rectangle a mover may be pushed out through
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sides {
    pub left: bool,
    pub right: bool,
    pub top: bool,
    pub bottom: bool,
}

impl Sides {
    pub const ALL: Sides = Sides {
        left: true,
        right: true,
        top: true,
        bottom: true,
    };

    /// Left and right faces only
    pub const HORIZONTAL: Sides = Sides {
        left: true,
        right: true,
        top: false,
        bottom: false,
    };

    /// Top and bottom faces only
    pub const VERTICAL: Sides = Sides {
        left: false,
        right: false,
        top: true,
        bottom: true,
    };
}

impl Default for Sides {
    fn default() -> Self {
        Self::ALL
    }
}

/// Overlap extents of two rectangles per axis (negative means separated)
fn overlap(a: &Rect, b: &Rect) -> Vec2 {
    Vec2::new(
        a.right().min(b.right()) - a.left().max(b.left()),
        a.bottom().min(b.bottom()) - a.top().max(b.top()),
    )
}

/// Axis-aligned overlap test
pub fn rect_rect_collision(a: &Rect, b: &Rect) -> bool {
    let o = overlap(a, b);
    o.x > CONTACT_EPSILON && o.y > CONTACT_EPSILON
}

/// Is the point inside (or on the edge of) the rectangle
pub fn point_rect_collision(point: Vec2, rect: &Rect) -> bool {
    rect.contains_point(point)
}

/// Push `mover` out of `fixed`, leaving `fixed` untouched
///
/// Only exits through the faces enabled in `sides` are considered. With
/// `one_sided` the exit face on each axis is the one on the mover's side of
/// `fixed`'s center (a mover right of center always goes right, ties go
/// right/down); otherwise any enabled face may be used. Among the candidates the
/// smallest displacement wins.
///
/// Returns true if the mover was displaced.
pub fn rect_rect_eject(mover: &mut Rect, fixed: &Rect, sides: Sides, one_sided: bool) -> bool {
    if !rect_rect_collision(mover, fixed) {
        return false;
    }

    let to_left = fixed.left() - mover.right();
    let to_right = fixed.right() - mover.left();
    let to_top = fixed.top() - mover.bottom();
    let to_bottom = fixed.bottom() - mover.top();

    let (left, right, top, bottom) = if one_sided {
        let goes_right = mover.center.x >= fixed.center.x;
        let goes_down = mover.center.y >= fixed.center.y;
        (
            sides.left && !goes_right,
            sides.right && goes_right,
            sides.top && !goes_down,
            sides.bottom && goes_down,
        )
    } else {
        (sides.left, sides.right, sides.top, sides.bottom)
    };

    let candidates = [
        (left, Vec2::new(to_left, 0.0)),
        (right, Vec2::new(to_right, 0.0)),
        (top, Vec2::new(0.0, to_top)),
        (bottom, Vec2::new(0.0, to_bottom)),
    ];

    let best = candidates
        .iter()
        .filter(|(allowed, _)| *allowed)
        .map(|(_, d)| *d)
        .min_by(|a, b| {
            a.length_squared()
                .partial_cmp(&b.length_squared())
                .unwrap_or(std::cmp::Ordering::Equal)
        });

    match best {
        Some(displacement) => {
            mover.center += displacement;
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::Color;
    use proptest::prelude::*;

    fn rect(x: f32, y: f32, w: f32, h: f32) -> Rect {
        Rect::new(Vec2::new(x, y), Vec2::new(w, h), Color::BLACK)
    }

    #[test]
    fn test_collision_overlap_and_touch() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        assert!(rect_rect_collision(&a, &rect(5.0, 5.0, 10.0, 10.0)));
        // Flush edges only touch
        assert!(!rect_rect_collision(&a, &rect(10.0, 0.0, 10.0, 10.0)));
        assert!(!rect_rect_collision(&a, &rect(30.0, 0.0, 10.0, 10.0)));
    }

    #[test]
    fn test_point_collision() {
        let r = rect(0.0, 0.0, 10.0, 10.0);
        assert!(point_rect_collision(Vec2::new(4.0, -4.0), &r));
        assert!(!point_rect_collision(Vec2::new(6.0, 0.0), &r));
    }

    #[test]
    fn test_eject_lands_on_floor() {
        let floor = rect(500.0, 950.0, 1000.0, 100.0);
        // Bottom edge 60px into the floor
        let mut body = rect(300.0, 860.0, 50.0, 200.0);
        assert!(rect_rect_eject(&mut body, &floor, Sides::ALL, false));
        assert!((body.bottom() - floor.top()).abs() < 1e-3);
        assert_eq!(body.center.x, 300.0);
    }

    #[test]
    fn test_eject_respects_sides() {
        let fixed = rect(0.0, 0.0, 100.0, 100.0);
        // Mover mostly below: cheapest exit is the bottom, but only horizontal is allowed
        let mut mover = rect(10.0, 45.0, 20.0, 20.0);
        assert!(rect_rect_eject(&mut mover, &fixed, Sides::HORIZONTAL, false));
        assert_eq!(mover.center.y, 45.0);
        assert!((mover.left() - fixed.right()).abs() < 1e-3);
    }

    #[test]
    fn test_one_sided_pushes_away_from_center() {
        let fixed = rect(100.0, 0.0, 60.0, 60.0);
        // Deep overlap: the minimal exit would be leftward, one-sided goes right
        let mut mover = rect(105.0, 0.0, 60.0, 60.0);
        assert!(rect_rect_eject(&mut mover, &fixed, Sides::HORIZONTAL, true));
        assert!((mover.center.x - 160.0).abs() < 1e-3);

        let mut mover = rect(95.0, 0.0, 60.0, 60.0);
        assert!(rect_rect_eject(&mut mover, &fixed, Sides::HORIZONTAL, true));
        assert!((mover.center.x - 40.0).abs() < 1e-3);
    }

    #[test]
    fn test_eject_without_overlap_is_noop() {
        let fixed = rect(0.0, 0.0, 10.0, 10.0);
        let mut mover = rect(50.0, 0.0, 10.0, 10.0);
        assert!(!rect_rect_eject(&mut mover, &fixed, Sides::ALL, false));
        assert_eq!(mover.center, Vec2::new(50.0, 0.0));
    }

    #[test]
    fn test_no_allowed_sides_is_noop() {
        let fixed = rect(0.0, 0.0, 10.0, 10.0);
        let mut mover = rect(2.0, 0.0, 10.0, 10.0);
        let none = Sides {
            left: false,
            right: false,
            top: false,
            bottom: false,
        };
        assert!(!rect_rect_eject(&mut mover, &fixed, none, false));
        // One-sided right push with only the left face enabled also stays put
        let left_only = Sides {
            left: true,
            ..none
        };
        assert!(!rect_rect_eject(&mut mover, &fixed, left_only, true));
    }

    proptest! {
        #[test]
        fn test_eject_is_idempotent(
            mx in -200.0f32..200.0,
            my in -200.0f32..200.0,
            mw in 5.0f32..150.0,
            mh in 5.0f32..150.0,
            one_sided: bool,
        ) {
            let fixed = rect(0.0, 0.0, 120.0, 80.0);
            let mut mover = rect(mx, my, mw, mh);
            rect_rect_eject(&mut mover, &fixed, Sides::ALL, one_sided);
            prop_assert!(!rect_rect_collision(&mover, &fixed));

            let settled = mover.center;
            prop_assert!(!rect_rect_eject(&mut mover, &fixed, Sides::ALL, one_sided));
            prop_assert_eq!(mover.center, settled);
        }
    }
}
