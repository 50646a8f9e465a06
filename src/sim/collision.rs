//! Collision detection and bounce response for axis-aligned rectangles
//!
//! Every entity in the field is a rectangle, so collisions reduce to interval
//! overlap on both axes. Boundaries are inclusive: touching edges count.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in screen space (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub pos: DVec2,
    /// Width and height
    pub size: DVec2,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            pos: DVec2::new(x, y),
            size: DVec2::new(width, height),
        }
    }

    #[inline]
    pub fn left(&self) -> f64 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f64 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.pos.y + self.size.y
    }

    #[inline]
    pub fn center(&self) -> DVec2 {
        self.pos + self.size / 2.0
    }

    /// Inclusive interval overlap on both axes
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() <= other.right()
            && self.right() >= other.left()
            && self.top() <= other.bottom()
            && self.bottom() >= other.top()
    }
}

/// Penetration of one rectangle into another along each side
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlapDepths {
    /// Mover's right edge past the target's left edge
    pub left: f64,
    /// Target's right edge past the mover's left edge
    pub right: f64,
    /// Mover's bottom edge past the target's top edge
    pub top: f64,
    /// Target's bottom edge past the mover's top edge
    pub bottom: f64,
}

impl OverlapDepths {
    pub fn between(mover: &Rect, target: &Rect) -> Self {
        Self {
            left: mover.right() - target.left(),
            right: target.right() - mover.left(),
            top: mover.bottom() - target.top(),
            bottom: target.bottom() - mover.top(),
        }
    }

    #[inline]
    pub fn min_x(&self) -> f64 {
        self.left.min(self.right)
    }

    #[inline]
    pub fn min_y(&self) -> f64 {
        self.top.min(self.bottom)
    }
}

/// Which way a bounce flips the ball
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BounceAxis {
    /// Struck a vertical surface: mirror the horizontal component
    Horizontal,
    /// Struck a horizontal surface: mirror the vertical component
    Vertical,
}

impl BounceAxis {
    /// Pick the axis with the shallower penetration. Ties go vertical.
    pub fn from_depths(depths: &OverlapDepths) -> Self {
        if depths.min_x() < depths.min_y() {
            BounceAxis::Horizontal
        } else {
            BounceAxis::Vertical
        }
    }

    /// Reflect a heading (degrees) across this axis.
    ///
    /// Uses the sign-preserving remainder, so the result can be negative.
    #[inline]
    pub fn reflect(self, direction: f64) -> f64 {
        match self {
            BounceAxis::Horizontal => (180.0 - direction) % 360.0,
            BounceAxis::Vertical => (-direction) % 360.0,
        }
    }
}

/// Bounce axis for a mover overlapping a target
pub fn bounce_axis(mover: &Rect, target: &Rect) -> BounceAxis {
    BounceAxis::from_depths(&OverlapDepths::between(mover, target))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_overlap_inclusive_edges() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        // Sharing only the right edge still counts
        let b = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert!(a.overlaps(&b));

        let c = Rect::new(10.01, 0.0, 10.0, 10.0);
        assert!(!a.overlaps(&c));

        // Corner touch
        let d = Rect::new(10.0, 10.0, 5.0, 5.0);
        assert!(a.overlaps(&d));
    }

    #[test]
    fn test_overlap_depths() {
        let ball = Rect::new(95.0, 40.0, 30.0, 30.0);
        let brick = Rect::new(70.0, 50.0, 40.0, 20.0);
        let d = OverlapDepths::between(&ball, &brick);
        assert_eq!(d.left, 55.0);
        assert_eq!(d.right, 15.0);
        assert_eq!(d.top, 20.0);
        assert_eq!(d.bottom, 30.0);
        assert_eq!(d.min_x(), 15.0);
        assert_eq!(d.min_y(), 20.0);
        assert_eq!(BounceAxis::from_depths(&d), BounceAxis::Horizontal);
    }

    #[test]
    fn test_bounce_axis_tie_goes_vertical() {
        // Corner overlap of 5 on both axes
        let ball = Rect::new(0.0, 0.0, 30.0, 30.0);
        let brick = Rect::new(25.0, 25.0, 40.0, 20.0);
        let d = OverlapDepths::between(&ball, &brick);
        assert_eq!(d.min_x(), d.min_y());
        assert_eq!(bounce_axis(&ball, &brick), BounceAxis::Vertical);
    }

    #[test]
    fn test_reflect_keeps_sign() {
        assert_eq!(BounceAxis::Horizontal.reflect(200.0), -20.0);
        assert_eq!(BounceAxis::Horizontal.reflect(45.0), 135.0);
        assert_eq!(BounceAxis::Vertical.reflect(45.0), -45.0);
        assert_eq!(BounceAxis::Vertical.reflect(-45.0), 45.0);
        // -(-400) % 360
        assert_eq!(BounceAxis::Vertical.reflect(-400.0), 40.0);
    }

    fn rect_strategy() -> impl Strategy<Value = Rect> {
        (
            -1000.0..1000.0f64,
            -1000.0..1000.0f64,
            0.0..300.0f64,
            0.0..300.0f64,
        )
            .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
    }

    proptest! {
        #[test]
        fn overlap_is_symmetric(a in rect_strategy(), b in rect_strategy()) {
            prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
        }

        #[test]
        fn overlapping_rects_have_non_negative_depths(a in rect_strategy(), b in rect_strategy()) {
            if a.overlaps(&b) {
                let d = OverlapDepths::between(&a, &b);
                prop_assert!(d.min_x() >= 0.0);
                prop_assert!(d.min_y() >= 0.0);
            }
        }
    }
}
