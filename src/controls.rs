//! Mutable input state owned by the scene, and the slider-style controls that edit it.

use crate::error::{ArmError, Result};
use crate::geometry::{JointAngles, LinkLengths, Point2D};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One continuous input of the visualization.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Control {
    /// Base joint angle, in degrees.
    Theta1,
    /// Elbow joint angle relative to the first link, in degrees.
    Theta2,
    TargetX,
    TargetY,
    L1,
    L2,
}

impl Control {
    pub const ALL: [Control; 6] = [
        Control::Theta1,
        Control::Theta2,
        Control::TargetX,
        Control::TargetY,
        Control::L1,
        Control::L2,
    ];
}

impl fmt::Display for Control {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Control::Theta1 => "theta1",
            Control::Theta2 => "theta2",
            Control::TargetX => "target_x",
            Control::TargetY => "target_y",
            Control::L1 => "l1",
            Control::L2 => "l2",
        };
        f.write_str(name)
    }
}

/// Bounds and granularity of a slider.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ControlRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl ControlRange {
    pub const fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    pub fn validate(&self, control: Control) -> Result<()> {
        let finite = self.min.is_finite() && self.max.is_finite() && self.step.is_finite();
        if !finite || self.min > self.max || self.step <= 0.0 {
            return Err(ArmError::InvalidRange {
                control: control.to_string(),
                min: self.min,
                max: self.max,
                step: self.step,
            });
        }
        Ok(())
    }

    /// Snaps `value` to the nearest step counted from `min`, then clamps into range.
    ///
    /// The result is rounded to the decimal precision of `min` and `step`, so a
    /// step of `0.1` stores `3.1` rather than `3.1000000000000014`.
    pub fn snap(&self, value: f64) -> f64 {
        let steps = ((value - self.min) / self.step).round();
        let scale = 10f64.powi(decimal_places(self.step).max(decimal_places(self.min)));
        let snapped = ((self.min + steps * self.step) * scale).round() / scale;
        snapped.max(self.min).min(self.max)
    }
}

/// Number of decimal digits needed to write `x`, capped at 12.
fn decimal_places(x: f64) -> i32 {
    (0..=12)
        .find(|&d| {
            let scaled = x * 10f64.powi(d);
            (scaled - scaled.round()).abs() <= 1e-9 * scaled.abs().max(1.0)
        })
        .unwrap_or(12)
}

/// Slider ranges for every [`Control`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlRanges {
    pub theta1: ControlRange,
    pub theta2: ControlRange,
    pub target_x: ControlRange,
    pub target_y: ControlRange,
    pub l1: ControlRange,
    pub l2: ControlRange,
}

impl Default for ControlRanges {
    fn default() -> Self {
        let angle = ControlRange::new(-180.0, 180.0, 1.0);
        let target = ControlRange::new(-18.0, 18.0, 0.1);
        // Minimum stays positive so the solvers never see a zero-length link.
        let length = ControlRange::new(1.0, 18.0, 0.1);
        Self {
            theta1: angle,
            theta2: angle,
            target_x: target,
            target_y: target,
            l1: length,
            l2: length,
        }
    }
}

impl ControlRanges {
    pub fn get(&self, control: Control) -> &ControlRange {
        match control {
            Control::Theta1 => &self.theta1,
            Control::Theta2 => &self.theta2,
            Control::TargetX => &self.target_x,
            Control::TargetY => &self.target_y,
            Control::L1 => &self.l1,
            Control::L2 => &self.l2,
        }
    }

    pub fn validate(&self) -> Result<()> {
        Control::ALL
            .iter()
            .try_for_each(|&control| self.get(control).validate(control))
    }
}

/// The live values behind the controls. Angles are kept in degrees, as displayed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneState {
    pub theta1_deg: f64,
    pub theta2_deg: f64,
    pub target: Point2D,
    pub links: LinkLengths,
}

impl Default for SceneState {
    fn default() -> Self {
        Self {
            theta1_deg: 45.0,
            theta2_deg: 45.0,
            target: Point2D::new(10.0, 10.0),
            links: LinkLengths::default(),
        }
    }
}

impl SceneState {
    /// Forward-kinematics input converted to radians.
    pub fn joint_angles(&self) -> JointAngles {
        JointAngles::from_degrees(self.theta1_deg, self.theta2_deg)
    }

    pub fn value(&self, control: Control) -> f64 {
        match control {
            Control::Theta1 => self.theta1_deg,
            Control::Theta2 => self.theta2_deg,
            Control::TargetX => self.target.x,
            Control::TargetY => self.target.y,
            Control::L1 => self.links.l1,
            Control::L2 => self.links.l2,
        }
    }

    /// Applies a control change, snapped and clamped to its range.
    ///
    /// Non-finite input is rejected and leaves the state untouched.
    /// Returns the value actually stored.
    pub fn set(&mut self, ranges: &ControlRanges, control: Control, value: f64) -> Result<f64> {
        if !value.is_finite() {
            return Err(ArmError::NonFiniteInput {
                control: control.to_string(),
                value,
            });
        }
        let snapped = ranges.get(control).snap(value);
        let slot = match control {
            Control::Theta1 => &mut self.theta1_deg,
            Control::Theta2 => &mut self.theta2_deg,
            Control::TargetX => &mut self.target.x,
            Control::TargetY => &mut self.target.y,
            Control::L1 => &mut self.links.l1,
            Control::L2 => &mut self.links.l2,
        };
        *slot = snapped;
        tracing::trace!(%control, value, snapped, "control updated");
        Ok(snapped)
    }
}
