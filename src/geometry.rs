//! Plain value types shared by the solvers, the workspace and the scene.

use crate::error::{ArmError, Result};
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Lengths of the two rigid links, in arbitrary "arm units".
///
/// Both are expected to be positive. [`LinkLengths::new`] does not check this;
/// the solvers let degenerate lengths surface as NaN. Use
/// [`LinkLengths::checked`] where bad input should be rejected up front.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LinkLengths {
    /// Length of the link attached to the base joint.
    pub l1: f64,
    /// Length of the link carrying the end effector.
    pub l2: f64,
}

impl Default for LinkLengths {
    fn default() -> Self {
        Self::new(10.0, 8.0)
    }
}

impl LinkLengths {
    pub const fn new(l1: f64, l2: f64) -> Self {
        Self { l1, l2 }
    }

    /// Builds link lengths, rejecting zero, negative or non-finite values.
    pub fn checked(l1: f64, l2: f64) -> Result<Self> {
        for (name, value) in [("l1", l1), ("l2", l2)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ArmError::InvalidLinkLength { name, value });
            }
        }
        Ok(Self::new(l1, l2))
    }

    /// Distance from the base to the end effector when the arm is fully extended.
    pub fn max_reach(&self) -> f64 {
        self.l1 + self.l2
    }

    /// Distance from the base to the end effector when the arm is fully folded.
    pub fn min_reach(&self) -> f64 {
        (self.l1 - self.l2).abs()
    }
}

/// Joint angles in radians.
///
/// `theta1` is measured from the world +X axis; `theta2` is measured relative
/// to the direction of the first link. Any real value is accepted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct JointAngles {
    pub theta1: f64,
    pub theta2: f64,
}

impl JointAngles {
    pub const fn new(theta1: f64, theta2: f64) -> Self {
        Self { theta1, theta2 }
    }

    pub fn from_degrees(theta1: f64, theta2: f64) -> Self {
        Self::new(theta1.to_radians(), theta2.to_radians())
    }

    /// Returns `(theta1, theta2)` in degrees.
    pub fn to_degrees(self) -> (f64, f64) {
        (self.theta1.to_degrees(), self.theta2.to_degrees())
    }

    pub fn is_finite(&self) -> bool {
        self.theta1.is_finite() && self.theta2.is_finite()
    }
}

/// A point in the arm plane. The base joint sits at the origin.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Distance from the origin.
    pub fn norm(&self) -> f64 {
        DVec2::from(*self).length()
    }

    pub fn distance(&self, other: Point2D) -> f64 {
        DVec2::from(*self).distance(other.into())
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<DVec2> for Point2D {
    fn from(v: DVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Point2D> for DVec2 {
    fn from(p: Point2D) -> Self {
        DVec2::new(p.x, p.y)
    }
}

impl From<(f64, f64)> for Point2D {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// The three joints of one arm configuration, base first.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ArmPose {
    pub base: Point2D,
    pub elbow: Point2D,
    pub end_effector: Point2D,
}

impl ArmPose {
    /// The two link segments as `(start, end)` pairs.
    pub fn links(&self) -> [(Point2D, Point2D); 2] {
        [(self.base, self.elbow), (self.elbow, self.end_effector)]
    }
}
