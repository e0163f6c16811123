//! Errors the solver and the straight line planner report to the caller

/// Failures surfaced by inverse kinematics. Single unreachable branches are not errors,
/// they only lose the selection; see [`crate::kinematic_traits::BranchSolution`].
#[derive(Debug, Clone, PartialEq)]
pub enum KinematicsError {
    /// No orientation of the sweep and neither elbow branch reaches the target.
    AllBranchesUnreachable { x: f64, y: f64 },
    /// The orientation sweep has no entries, so there is nothing to solve.
    EmptyOrientationSweep,
    /// A waypoint of a straight line move could not be reached and the planner
    /// was asked to abort.
    UnreachableWaypoint { index: usize, x: f64, y: f64 },
}

impl std::fmt::Display for KinematicsError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            KinematicsError::AllBranchesUnreachable { x, y } =>
                write!(f, "No feasible solution: ({:.3}, {:.3}) is unreachable for every orientation", x, y),
            KinematicsError::EmptyOrientationSweep =>
                write!(f, "Orientation sweep is empty"),
            KinematicsError::UnreachableWaypoint { index, x, y } =>
                write!(f, "Waypoint {} at ({:.3}, {:.3}) is unreachable", index, x, y),
        }
    }
}

impl std::error::Error for KinematicsError {}
