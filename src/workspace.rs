//! The reachable workspace of a two-link arm: an annulus centred on the base.

use crate::geometry::{LinkLengths, Point2D};
use bevy_math::primitives::{Annulus, Measured2d};
use serde::{Deserialize, Serialize};

/// Where a target lies relative to the reachable annulus.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Reach {
    /// Within `|l1 - l2| <= d <= l1 + l2`; the inverse solver hits it exactly.
    Reachable,
    /// Farther than `l1 + l2`; the inverse solver returns the fully extended arm.
    BeyondReach,
    /// Closer than `|l1 - l2|`; the inverse solver returns the fully folded arm.
    InsideDeadZone,
    /// Target or lengths are NaN.
    Undefined,
}

/// Inner and outer radii of the region the end effector can reach.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Workspace {
    pub inner_radius: f64,
    pub outer_radius: f64,
}

impl Workspace {
    pub fn of(links: LinkLengths) -> Self {
        Self {
            inner_radius: links.min_reach(),
            outer_radius: links.max_reach(),
        }
    }

    pub fn classify(&self, target: Point2D) -> Reach {
        let d = target.norm();
        if d.is_nan() || self.inner_radius.is_nan() || self.outer_radius.is_nan() {
            Reach::Undefined
        } else if d > self.outer_radius {
            Reach::BeyondReach
        } else if d < self.inner_radius {
            Reach::InsideDeadZone
        } else {
            Reach::Reachable
        }
    }

    pub fn contains(&self, target: Point2D) -> bool {
        self.classify(target) == Reach::Reachable
    }

    /// Converts to the corresponding `bevy_math` primitive for drawing or measuring.
    ///
    /// Precision drops to `f32`.
    pub fn to_bevy_primitive(self) -> Annulus {
        Annulus::new(self.inner_radius as f32, self.outer_radius as f32)
    }

    /// Area of the annulus, in square arm units.
    pub fn area(&self) -> f32 {
        self.to_bevy_primitive().area()
    }
}
