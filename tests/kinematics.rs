// tests/kinematics.rs
use approx::assert_abs_diff_eq;
use planar_arm::{
    JointAngles, LinkLengths, Point2D, TwoLinkArm, forward_kinematics, inverse_kinematics,
};
use std::f64::consts::{PI, TAU};

const L1: f64 = 10.0;
const L2: f64 = 8.0;

fn assert_point_eq(actual: Point2D, expected: Point2D, eps: f64) {
    assert_abs_diff_eq!(actual.x, expected.x, epsilon = eps);
    assert_abs_diff_eq!(actual.y, expected.y, epsilon = eps);
}

#[test]
fn test_forward_straight_along_x() {
    let p = forward_kinematics(0.0, 0.0, L1, L2);
    assert_eq!(p, Point2D::new(18.0, 0.0));
}

#[test]
fn test_forward_straight_up() {
    let arm = TwoLinkArm::new(LinkLengths::new(L1, L2));
    let angles = JointAngles::from_degrees(90.0, 0.0);

    // Elbow sits at the tip of the first link, the end effector one more link up.
    assert_point_eq(arm.elbow(angles), Point2D::new(0.0, 10.0), 1e-9);
    assert_point_eq(arm.forward(angles), Point2D::new(0.0, 18.0), 1e-9);
}

#[test]
fn test_second_angle_is_relative_to_first_link() {
    // theta2 = 90 deg bends the forearm left of the first link, not of the world X axis.
    let p = forward_kinematics(PI / 2.0, PI / 2.0, L1, L2);
    assert_point_eq(p, Point2D::new(-8.0, 10.0), 1e-9);
}

#[test]
fn test_forward_is_periodic() {
    let eighth = 45f64.to_radians();
    for (t1, t2) in [(0.3, -1.2), (2.0, 2.5), (-3.0, 0.0), (eighth, eighth)] {
        let a = forward_kinematics(t1, t2, L1, L2);
        assert_point_eq(forward_kinematics(t1 + TAU, t2, L1, L2), a, 1e-9);
        assert_point_eq(forward_kinematics(t1, t2 + TAU, L1, L2), a, 1e-9);
    }
}

#[test]
fn test_inverse_round_trip_for_reachable_targets() {
    let targets = [
        (10.0, 10.0),
        (-5.0, 7.5),
        (0.0, -12.0),
        (3.0, 1.0),
        (-17.0, 0.5),
        (2.0, 0.0),
        (18.0, 0.0),
    ];
    for (x, y) in targets {
        let angles = inverse_kinematics(x, y, L1, L2);
        let reached = forward_kinematics(angles.theta1, angles.theta2, L1, L2);
        assert_point_eq(reached, Point2D::new(x, y), 1e-6);
    }
}

#[test]
fn test_inverse_returns_elbow_up_branch() {
    for (x, y) in [(10.0, 10.0), (-5.0, -7.5), (4.0, -3.0)] {
        let angles = inverse_kinematics(x, y, L1, L2);
        assert!((0.0..=PI).contains(&angles.theta2), "theta2 = {}", angles.theta2);
    }
}

#[test]
fn test_full_extension_and_full_fold() {
    let extended = inverse_kinematics(18.0, 0.0, L1, L2);
    assert_eq!(extended.theta2, 0.0);

    let folded = inverse_kinematics(2.0, 0.0, L1, L2);
    assert_eq!(folded.theta2, PI);
}

#[test]
fn test_unreachable_target_clamps_to_extended_arm() {
    let angles = inverse_kinematics(100.0, 0.0, L1, L2);
    assert_eq!(angles.theta2, 0.0);

    let reached = forward_kinematics(angles.theta1, angles.theta2, L1, L2);
    assert_abs_diff_eq!(reached.norm(), 18.0, epsilon = 1e-9);
    assert_point_eq(reached, Point2D::new(18.0, 0.0), 1e-9);
}

#[test]
fn test_unreachable_target_keeps_its_direction() {
    let target = Point2D::new(-30.0, 40.0);
    let arm = TwoLinkArm::new(LinkLengths::new(L1, L2));
    let reached = arm.forward(arm.inverse(target));

    let scale = 18.0 / target.norm();
    assert_point_eq(reached, Point2D::new(target.x * scale, target.y * scale), 1e-9);
}

#[test]
fn test_dead_zone_target_folds_arm() {
    // Distance 1 is inside the inner radius |10 - 8| = 2.
    let angles = inverse_kinematics(0.0, 1.0, L1, L2);
    assert_eq!(angles.theta2, PI);

    let reached = forward_kinematics(angles.theta1, angles.theta2, L1, L2);
    assert_abs_diff_eq!(reached.norm(), 2.0, epsilon = 1e-9);
    assert!(reached.y > 0.0);
}

#[test]
fn test_degenerate_geometry_yields_nan() {
    let angles = inverse_kinematics(0.0, 0.0, 0.0, 0.0);
    assert!(!angles.is_finite());
}
