//! Headless render adapter that turns the control state into a backend-agnostic frame.
//!
//! The entry point is [`Scene`]. Configure it with a [`SceneConfig`], edit inputs
//! through [`Scene::set`], then call [`Scene::frame`] to run both solvers and
//! collect the draw commands a canvas backend would execute.
//!
//! Frames are expressed in canvas pixels: the arm base sits at the canvas centre
//! and the y axis points up in arm space but down on the canvas.

use crate::controls::{Control, ControlRanges, SceneState};
use crate::error::Result;
use crate::geometry::{ArmPose, JointAngles, Point2D};
use crate::solver::TwoLinkArm;
use crate::workspace::{Reach, Workspace};
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Stroke and fill colours used by the frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    LightGray,
    Blue,
    Red,
    Green,
    Purple,
}

/// Canvas geometry and stroke styling.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Canvas width in pixels.
    pub width: f64,
    /// Canvas height in pixels.
    pub height: f64,
    /// Pixels per arm unit.
    pub scale: f64,
    /// Stroke width for link segments.
    pub line_width: f64,
    /// Radius of the filled target marker, in pixels.
    pub marker_radius: f64,
    /// Slider ranges applied by [`Scene::set`].
    pub controls: ControlRanges,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            width: 400.0,
            height: 400.0,
            scale: 10.0,
            line_width: 2.0,
            marker_radius: 3.0,
            controls: ControlRanges::default(),
        }
    }
}

impl SceneConfig {
    /// Canvas position of the arm base.
    pub fn origin(&self) -> DVec2 {
        DVec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Maps an arm-space point to canvas pixels.
    pub fn to_canvas(&self, p: Point2D) -> Point2D {
        let o = self.origin();
        Point2D::new(o.x + p.x * self.scale, o.y - p.y * self.scale)
    }
}

/// A single drawing instruction, in canvas pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DrawCommand {
    Line {
        from: Point2D,
        to: Point2D,
        color: Color,
        width: f64,
    },
    FilledCircle {
        center: Point2D,
        radius: f64,
        color: Color,
    },
}

impl DrawCommand {
    fn is_finite(&self) -> bool {
        match self {
            Self::Line { from, to, .. } => from.is_finite() && to.is_finite(),
            Self::FilledCircle { center, .. } => center.is_finite(),
        }
    }
}

/// Text shown next to the canvas. Numbers carry two decimals.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Readout {
    pub end_effector_x: String,
    pub end_effector_y: String,
    pub theta1_deg: String,
    pub theta2_deg: String,
}

/// Everything produced by one recomputation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub width: f64,
    pub height: f64,
    /// Draw commands in paint order. Commands with non-finite coordinates are dropped.
    pub commands: Vec<DrawCommand>,
    /// Arm configuration driven by the joint-angle controls, in arm units.
    pub forward_pose: ArmPose,
    /// Arm configuration solved for the target, in arm units.
    pub inverse_pose: ArmPose,
    /// Angles returned by the inverse solver, in radians.
    pub inverse_angles: JointAngles,
    /// Reachability of the target for the current link lengths.
    pub target_reach: Reach,
    pub readout: Readout,
}

/// Owns the control state and recomputes frames from it.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    config: SceneConfig,
    state: SceneState,
}

impl Scene {
    /// Creates a scene with the default initial state.
    pub fn new(config: SceneConfig) -> Self {
        Self {
            config,
            state: SceneState::default(),
        }
    }

    /// Replaces the control state (builder pattern).
    ///
    /// The state is taken as-is; it is not snapped to the control ranges.
    pub fn with_state(mut self, state: SceneState) -> Self {
        self.state = state;
        self
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn state(&self) -> &SceneState {
        &self.state
    }

    /// Applies one control change; see [`SceneState::set`].
    pub fn set(&mut self, control: Control, value: f64) -> Result<f64> {
        self.state.set(&self.config.controls, control, value)
    }

    /// Runs both solvers on the current state and builds the frame.
    ///
    /// # Paint order
    ///
    /// 1. Axis cross through the base (light gray).
    /// 2. Forward arm: first link blue, second link red.
    /// 3. Inverse arm: first link green, second link purple.
    /// 4. Target marker (filled red circle).
    ///
    /// The two solvers are independent: the forward arm follows the angle
    /// controls, the inverse arm follows the target.
    pub fn frame(&self) -> Frame {
        let cfg = &self.config;
        let arm = TwoLinkArm::new(self.state.links);

        let forward_angles = self.state.joint_angles();
        let forward_pose = arm.pose(forward_angles);

        let inverse_angles = arm.inverse(self.state.target);
        let inverse_pose = arm.pose(inverse_angles);

        let target_reach = Workspace::of(self.state.links).classify(self.state.target);
        tracing::debug!(
            ?forward_angles,
            ?inverse_angles,
            ?target_reach,
            "recomputed frame"
        );

        let o = cfg.origin();
        let mut candidates = vec![
            DrawCommand::Line {
                from: Point2D::new(0.0, o.y),
                to: Point2D::new(cfg.width, o.y),
                color: Color::LightGray,
                width: 1.0,
            },
            DrawCommand::Line {
                from: Point2D::new(o.x, 0.0),
                to: Point2D::new(o.x, cfg.height),
                color: Color::LightGray,
                width: 1.0,
            },
        ];
        for (pose, colors) in [
            (forward_pose, [Color::Blue, Color::Red]),
            (inverse_pose, [Color::Green, Color::Purple]),
        ] {
            for ((from, to), color) in pose.links().into_iter().zip(colors) {
                candidates.push(DrawCommand::Line {
                    from: cfg.to_canvas(from),
                    to: cfg.to_canvas(to),
                    color,
                    width: cfg.line_width,
                });
            }
        }
        candidates.push(DrawCommand::FilledCircle {
            center: cfg.to_canvas(self.state.target),
            radius: cfg.marker_radius,
            color: Color::Red,
        });

        let mut commands = Vec::with_capacity(candidates.len());
        for cmd in candidates {
            if cmd.is_finite() {
                commands.push(cmd);
            } else {
                tracing::warn!(?cmd, "skipping draw command with non-finite coordinates");
            }
        }

        let (theta1_deg, theta2_deg) = inverse_angles.to_degrees();
        let readout = Readout {
            end_effector_x: format!("{:.2}", forward_pose.end_effector.x),
            end_effector_y: format!("{:.2}", forward_pose.end_effector.y),
            theta1_deg: format!("{:.2}", theta1_deg),
            theta2_deg: format!("{:.2}", theta2_deg),
        };

        Frame {
            width: cfg.width,
            height: cfg.height,
            commands,
            forward_pose,
            inverse_pose,
            inverse_angles,
            target_reach,
            readout,
        }
    }
}
