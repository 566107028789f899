//! Closed-form forward and inverse kinematics for a two-link planar arm.
//!
//! Both solvers are pure functions of their arguments. Neither validates its
//! inputs: unreachable targets are clamped onto the workspace boundary, and
//! degenerate geometry (a zero-length link) yields NaN for the caller to guard.

use crate::geometry::{ArmPose, JointAngles, LinkLengths, Point2D};

/// End-effector position for the given joint angles (radians) and link lengths.
///
/// The second link's angle is relative to the first link, so the end effector
/// lies at `theta1 + theta2` from the elbow.
pub fn forward_kinematics(theta1: f64, theta2: f64, l1: f64, l2: f64) -> Point2D {
    let x = l1 * theta1.cos() + l2 * (theta1 + theta2).cos();
    let y = l1 * theta1.sin() + l2 * (theta1 + theta2).sin();
    Point2D::new(x, y)
}

/// Cosine of the elbow angle that places the end effector at `(x, y)`, before clamping.
///
/// Falls outside `[-1, 1]` exactly when the target is outside the reachable annulus.
pub fn elbow_cosine(x: f64, y: f64, l1: f64, l2: f64) -> f64 {
    (x * x + y * y - l1 * l1 - l2 * l2) / (2.0 * l1 * l2)
}

/// Joint angles (radians) that place the end effector at `(x, y)`.
///
/// Returns the elbow-up branch only: `theta2` is the principal `acos` value in
/// `[0, π]`. Targets beyond reach produce the fully extended arm pointing at the
/// target; targets inside the inner dead zone produce the fully folded arm.
pub fn inverse_kinematics(x: f64, y: f64, l1: f64, l2: f64) -> JointAngles {
    let cos_theta2 = elbow_cosine(x, y, l1, l2);
    // `clamp` keeps NaN as NaN; infinities saturate.
    let clamped = cos_theta2.clamp(-1.0, 1.0);
    if cos_theta2.abs() > 1.0 {
        tracing::debug!(x, y, l1, l2, cos_theta2, "target outside workspace, clamping elbow");
    }
    let theta2 = clamped.acos();
    let theta1 = y.atan2(x) - (l2 * theta2.sin()).atan2(l1 + l2 * theta2.cos());
    JointAngles::new(theta1, theta2)
}

/// A two-link arm with fixed link lengths, rooted at the origin.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TwoLinkArm {
    pub links: LinkLengths,
}

impl TwoLinkArm {
    pub const fn new(links: LinkLengths) -> Self {
        Self { links }
    }

    /// End-effector position for `angles`.
    pub fn forward(&self, angles: JointAngles) -> Point2D {
        forward_kinematics(angles.theta1, angles.theta2, self.links.l1, self.links.l2)
    }

    /// Joint angles reaching `target`, clamped onto the workspace if needed.
    pub fn inverse(&self, target: Point2D) -> JointAngles {
        inverse_kinematics(target.x, target.y, self.links.l1, self.links.l2)
    }

    /// Position of the joint between the two links.
    pub fn elbow(&self, angles: JointAngles) -> Point2D {
        Point2D::new(
            self.links.l1 * angles.theta1.cos(),
            self.links.l1 * angles.theta1.sin(),
        )
    }

    /// All joint positions for `angles`.
    pub fn pose(&self, angles: JointAngles) -> ArmPose {
        ArmPose {
            base: Point2D::ORIGIN,
            elbow: self.elbow(angles),
            end_effector: self.forward(angles),
        }
    }
}
