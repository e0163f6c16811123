//! Defines the kinematics trait and the data types shared by the solver and the planner

use crate::kinematics_error::KinematicsError;
use nalgebra::Point2;
use std::f64::consts::FRAC_PI_2;

/// Rotations of the three joints (θ1, θ2, θ3) in radians. θ2 and θ3 are relative to the
/// previous link. Values are not normalized into any range; the solver returns whatever
/// the closed form produces.
pub type Joints = [f64; 3];

/// All joints at zero, arm stretched along the x axis.
pub const JOINTS_AT_ZERO: Joints = [0.0; 3];

/// The starting configuration of the demonstrator arm: first link straight up, second
/// horizontal, third pointing down. For the 150/100/50 arm the end effector is at (100, 100).
pub const JOINTS_AT_HOME: Joints = [FRAC_PI_2, -FRAC_PI_2, -FRAC_PI_2];

/// A list of joint configurations, for instance both branches of one orientation.
pub type Solutions = Vec<Joints>;

/// Pose of the end effector in the plane: position and orientation `psi` (radians,
/// measured from the x axis). Always derived from joints or given as a target, never
/// normalized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub position: Point2<f64>,
    pub psi: f64,
}

impl Pose {
    pub fn new(x: f64, y: f64, psi: f64) -> Self {
        Pose {
            position: Point2::new(x, y),
            psi,
        }
    }

    pub fn x(&self) -> f64 {
        self.position.x
    }

    pub fn y(&self) -> f64 {
        self.position.y
    }
}

/// Cartesian positions of the link ends. The base joint is always at the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinkPositions {
    /// End of the first link (joint 2).
    pub elbow: Point2<f64>,
    /// End of the second link (joint 3).
    pub wrist: Point2<f64>,
    /// End of the third link, the end effector.
    pub tcp: Point2<f64>,
}

impl LinkPositions {
    /// Segments as (start, end) pairs, base to end effector. This is what a renderer
    /// draws.
    pub fn segments(&self) -> [(Point2<f64>, Point2<f64>); 3] {
        [
            (Point2::origin(), self.elbow),
            (self.elbow, self.wrist),
            (self.wrist, self.tcp),
        ]
    }
}

/// One of the two closed form solutions for the 2-link sub-chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElbowBranch {
    /// θ2 is the positive arccos value.
    Up,
    /// θ2 is the negative arccos value.
    Down,
}

impl ElbowBranch {
    /// Generation order of the branches. Ties during selection go to the earlier one.
    pub const ALL: [ElbowBranch; 2] = [ElbowBranch::Up, ElbowBranch::Down];

    pub fn sign(self) -> f64 {
        match self {
            ElbowBranch::Up => 1.0,
            ElbowBranch::Down => -1.0,
        }
    }
}

/// Outcome of solving a single branch for a single orientation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BranchSolution {
    Solved(Joints),
    /// The wrist point lies outside the annulus the first two links can reach.
    Unreachable,
}

impl BranchSolution {
    pub fn joints(&self) -> Option<Joints> {
        match self {
            BranchSolution::Solved(joints) => Some(*joints),
            BranchSolution::Unreachable => None,
        }
    }

    pub fn is_reachable(&self) -> bool {
        matches!(self, BranchSolution::Solved(_))
    }
}

/// A generated candidate: the orientation and branch it came from, and the outcome.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    pub psi: f64,
    pub branch: ElbowBranch,
    pub solution: BranchSolution,
}

pub trait Kinematics {
    /// Joint angles to the pose of the end effector.
    fn forward(&self, qs: &Joints) -> Pose;

    /// Joint angles to the positions of all link ends, for drawing or checking.
    fn forward_with_link_positions(&self, qs: &Joints) -> LinkPositions;

    /// Both branches for the given position and orientation, elbow up first.
    /// Unreachable branches are omitted, so the result has 0, 1 or 2 entries
    /// (both entries are identical at the fully stretched or folded boundary).
    fn inverse(&self, pose: &Pose) -> Solutions;

    /// Solves every orientation of the sweep with both branches and returns the solution
    /// whose largest single joint rotation away from `previous` is the smallest.
    /// Fails only if no orientation and no branch can reach the target.
    fn inverse_continuing(
        &self,
        target: &Point2<f64>,
        orientations: &[f64],
        previous: &Joints,
    ) -> Result<Joints, KinematicsError>;
}
