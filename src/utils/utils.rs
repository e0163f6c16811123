//! Helper functions

use crate::kinematic_traits::{Joints, LinkPositions, Pose, Solutions};

/// Checks the solution for validity. All solutions returned by the solver are already
/// checked, this is for joints that come from elsewhere.
pub mod planar_kinematics {
    use crate::kinematic_traits::Joints;

    /// Checks if all elements in the array are finite
    pub fn is_valid(qs: &Joints) -> bool {
        qs.iter().all(|&q| q.is_finite())
    }
}

/// Convert array of f32's in degrees to Joints
/// that are array of f64's in radians
pub fn joints(angles: &[f32; 3]) -> Joints {
    angles.map(|angle| (angle as f64).to_radians())
}

/// Convert joints that are array of f64's in radians to
/// array of f32's in degrees
pub fn to_degrees(angles: &Joints) -> [f32; 3] {
    angles.map(|angle| angle.to_degrees() as f32)
}

/// Allows to specify joint values in degrees (converts to radians)
#[allow(dead_code)]
pub fn as_radians(degrees: [i32; 3]) -> Joints {
    std::array::from_fn(|i| (degrees[i] as f64).to_radians())
}

/// Transition cost between two joint configurations: the largest single joint rotation
/// (Chebyshev distance). Angles are compared as they are, without wrapping. A difference
/// that cannot be computed (NaN) counts as infinitely large.
pub fn transition_cost(from: &Joints, to: &Joints) -> f64 {
    from.iter()
        .zip(to.iter())
        .map(|(a, b)| {
            let delta = (a - b).abs();
            if delta.is_nan() { f64::INFINITY } else { delta }
        })
        .fold(0.0, f64::max)
}

/// Print joint values for all solutions, converting radians to degrees.
#[allow(dead_code)]
pub fn dump_solutions(solutions: &Solutions) {
    if solutions.is_empty() {
        println!("No solutions");
    }
    for solution in solutions {
        dump_joints(solution);
    }
}

/// Print joint values, converting radians to degrees.
#[allow(dead_code)]
pub fn dump_joints(joints: &Joints) {
    let mut row_str = String::new();
    for joint_idx in 0..3 {
        let computed = joints[joint_idx];
        row_str.push_str(&format!("{:7.2} ", computed.to_degrees()));
    }
    println!("[{}]", row_str.trim_end());
}

pub fn dump_pose(pose: &Pose) {
    println!(
        "x: {:.3}, y: {:.3}, psi: {:.2} deg",
        pose.x(), pose.y(), pose.psi.to_degrees()
    );
}

pub fn dump_links(links: &LinkPositions) {
    println!(
        "elbow: ({:.3}, {:.3}), wrist: ({:.3}, {:.3}), tcp: ({:.3}, {:.3})",
        links.elbow.x, links.elbow.y, links.wrist.x, links.wrist.y, links.tcp.x, links.tcp.y
    );
}

#[cfg(test)]
mod tests {
    use super::planar_kinematics::*;
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_is_valid_with_all_finite() {
        let qs = [0.0, 1.0, -PI];
        assert!(is_valid(&qs));
    }

    #[test]
    fn test_is_valid_with_nan() {
        let qs = [0.0, f64::NAN, 1.0];
        assert!(!is_valid(&qs));
    }

    #[test]
    fn test_is_valid_with_infinity() {
        let qs = [0.0, f64::INFINITY, 1.0];
        assert!(!is_valid(&qs));
    }

    #[test]
    fn test_transition_cost_is_max_not_sum() {
        let from = [0.0, 0.0, 0.0];
        let to = [0.3, -0.5, 0.4];
        assert_eq!(transition_cost(&from, &to), 0.5);
        assert_eq!(transition_cost(&to, &to), 0.0);
    }

    #[test]
    fn test_transition_cost_does_not_wrap() {
        let from = [PI - 0.1, 0.0, 0.0];
        let to = [-PI + 0.1, 0.0, 0.0];
        assert!((transition_cost(&from, &to) - (2.0 * PI - 0.2)).abs() < 1e-12);
    }

    #[test]
    fn test_transition_cost_nan_is_infinite() {
        let from = [0.0, f64::NAN, 0.0];
        assert_eq!(transition_cost(&from, &[0.0; 3]), f64::INFINITY);
    }

    #[test]
    fn test_degrees_round_trip() {
        let radians = as_radians([90, -45, 180]);
        assert_eq!(to_degrees(&radians), [90.0, -45.0, 180.0]);
        assert!((joints(&[90.0, 0.0, 0.0])[0] - PI / 2.0).abs() < 1e-6);
    }
}
