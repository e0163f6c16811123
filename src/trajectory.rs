//! Straight line stroke of the end effector

use crate::kinematic_traits::{Joints, Kinematics, LinkPositions};
use crate::kinematics_error::KinematicsError;
use crate::sweep::OrientationSweep;
use bitflags::bitflags;
use nalgebra::Point2;
use std::fmt;
use tracing::warn;

/// Number of waypoints per move the click-to-move demonstrator uses.
pub const DEFAULT_STEPS: usize = 21;

bitflags! {
    /// Flags that can be set on waypoints in the output
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct PathFlags: u32 {
        const NONE = 0b0000_0000;

        /// Position is a linear interpolation between the start and the target.
        const LIN_INTERP = 0b0000_0001;

        /// Position is the requested target, the last waypoint of the move.
        const TARGET =     0b0000_0010;

        /// The waypoint was unreachable and the joints of the previous waypoint were kept.
        /// The end effector is not at the requested position.
        const HELD =       0b0000_0100;
    }
}

/// What to do when a waypoint cannot be reached with any orientation of the sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnreachablePolicy {
    /// Stop planning and report the waypoint.
    #[default]
    Abort,
    /// Keep the previous joints and continue with the next waypoint.
    Hold,
}

/// Joints of one waypoint, with the position that was requested and the link positions
/// the joints actually produce.
#[derive(Clone, Copy)]
pub struct Waypoint {
    pub requested: Point2<f64>,
    pub joints: Joints,
    pub links: LinkPositions,
    pub flags: PathFlags,
}

impl fmt::Debug for Waypoint {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "{:?}: ({:.3}, {:.3}) θ [{:.2}, {:.2}, {:.2}] deg",
            self.flags,
            self.requested.x,
            self.requested.y,
            self.joints[0].to_degrees(),
            self.joints[1].to_degrees(),
            self.joints[2].to_degrees()
        )
    }
}

/// Linear interpolation between two positions. Returns `start` for `t < 0` and `end` for `t > 1`.
pub fn interpolate_position(start: &Point2<f64>, end: &Point2<f64>, t: f64) -> Point2<f64> {
    if t <= 0.0 {
        return *start;
    } else if t >= 1.0 {
        return *end;
    }
    *start + (*end - *start) * t
}

/// Positions of `steps` equal steps from `start` towards `end`. The start itself is not
/// included, the last position is exactly `end`. Zero steps count as one.
pub fn intermediate_positions(start: &Point2<f64>, end: &Point2<f64>, steps: usize) -> Vec<Point2<f64>> {
    let steps = steps.max(1);
    (1..=steps)
        .map(|i| interpolate_position(start, end, i as f64 / steps as f64))
        .collect()
}

/// Drives the end effector along straight lines, solving every waypoint with the
/// continuing solver and feeding the result back as the previous joints of the next one.
pub struct StraightLine<'a> {
    pub robot: &'a dyn Kinematics,

    /// Number of equal steps per move.
    pub steps: usize,

    /// Orientations searched at every waypoint.
    pub orientations: OrientationSweep,

    pub on_unreachable: UnreachablePolicy,
}

impl<'a> StraightLine<'a> {
    /// Planner with the demonstrator defaults: 21 steps, 256 orientations over the full
    /// circle, abort on unreachable waypoints.
    pub fn new(robot: &'a dyn Kinematics) -> Self {
        StraightLine {
            robot,
            steps: DEFAULT_STEPS,
            orientations: OrientationSweep::default(),
            on_unreachable: UnreachablePolicy::Abort,
        }
    }

    /// Plans the move from `start` to `target`, beginning with the arm at `current`.
    /// Waypoints must be solved strictly in order since each depends on the previous one.
    /// An empty plan is returned if the end effector is already at the target.
    pub fn plan(
        &self,
        start: &Point2<f64>,
        target: &Point2<f64>,
        current: &Joints,
    ) -> Result<Vec<Waypoint>, KinematicsError> {
        if start == target {
            return Ok(Vec::new());
        }

        let positions = intermediate_positions(start, target, self.steps);
        let last = positions.len() - 1;
        let mut previous = *current;
        let mut waypoints = Vec::with_capacity(positions.len());

        for (index, requested) in positions.into_iter().enumerate() {
            let mut flags = if index == last { PathFlags::TARGET } else { PathFlags::LIN_INTERP };

            match self.robot.inverse_continuing(&requested, &self.orientations, &previous) {
                Ok(joints) => previous = joints,
                Err(KinematicsError::AllBranchesUnreachable { x, y }) => match self.on_unreachable {
                    UnreachablePolicy::Abort => {
                        return Err(KinematicsError::UnreachableWaypoint { index, x, y });
                    }
                    UnreachablePolicy::Hold => {
                        warn!("Waypoint {} at ({:.3}, {:.3}) is unreachable, holding", index, x, y);
                        flags |= PathFlags::HELD;
                    }
                },
                Err(other) => return Err(other),
            }

            waypoints.push(Waypoint {
                requested,
                joints: previous,
                links: self.robot.forward_with_link_positions(&previous),
                flags,
            });
        }

        Ok(waypoints)
    }

    /// Plans consecutive moves through all `targets`. Each move starts where the end
    /// effector ended after the previous one (which differs from the requested target
    /// if the last waypoint was held).
    pub fn plan_through(
        &self,
        start: &Point2<f64>,
        targets: &[Point2<f64>],
        current: &Joints,
    ) -> Result<Vec<Waypoint>, KinematicsError> {
        let mut from = *start;
        let mut joints = *current;
        let mut all = Vec::new();
        for target in targets {
            let waypoints = self.plan(&from, target, &joints)?;
            if let Some(last) = waypoints.last() {
                from = last.links.tcp;
                joints = last.joints;
            }
            all.extend(waypoints);
        }
        Ok(all)
    }
}
