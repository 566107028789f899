//! # planar-arm
//!
//! Closed-form kinematics for a two-link planar arm, and a headless adapter that
//! turns slider-style inputs into canvas draw commands.
//!
//! The core is two pure functions: [`forward_kinematics`] maps joint angles to the
//! end-effector position, and [`inverse_kinematics`] maps a target back to joint
//! angles (elbow-up branch, clamped onto the reachable workspace). Neither
//! validates its inputs; degenerate link lengths surface as NaN.
//!
//! The [`Scene`] owns all mutable state, calls both solvers on every change and
//! produces a [`Frame`] that any 2D backend can paint.

pub mod config;
pub mod controls;
pub mod error;
pub mod geometry;
pub mod logger;
pub mod scene;
pub mod solver;
pub mod workspace;

pub use config::*;
pub use controls::*;
pub use error::*;
pub use geometry::*;
pub use scene::*;
pub use solver::*;
pub use workspace::*;
