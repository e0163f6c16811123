use crate::kinematic_traits::{
    BranchSolution, Candidate, ElbowBranch, Joints, Kinematics, LinkPositions, Pose, Solutions,
};
use crate::kinematics_error::KinematicsError;
use crate::parameter_error::ParameterError;
use crate::parameters::planar_kinematics::Parameters;
use crate::utils::transition_cost;
use nalgebra::{Point2, Vector2};
use tracing::debug;

/// How far rounding may push the elbow cosine past ±1 for a wrist that lies on the
/// boundary of the reachable annulus.
const BOUNDARY_TOLERANCE: f64 = 32.0 * f64::EPSILON;

#[derive(Debug, Clone, Copy)]
pub struct PlanarKinematics {
    /// The parameters that were used to construct this solver
    parameters: Parameters,
}

impl PlanarKinematics {
    /// Creates a new `PlanarKinematics` instance with the given link lengths.
    pub fn new(parameters: Parameters) -> Self {
        PlanarKinematics { parameters }
    }

    /// Same as `new`, but rejects non-finite or non-positive link lengths.
    pub fn try_new(parameters: Parameters) -> Result<Self, ParameterError> {
        parameters.validate()?;
        Ok(Self::new(parameters))
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    /// Position of the wrist (end of the second link) when the end effector is at
    /// `target` with orientation `psi`: the third link is backed off along `psi`.
    pub fn wrist_for(&self, target: &Point2<f64>, psi: f64) -> Point2<f64> {
        *target - Vector2::new(psi.cos(), psi.sin()) * self.parameters.seg3
    }

    /// Closed form solution of one elbow branch for the given end effector position and
    /// orientation. The wrist must lie within the closed annulus of the first two links;
    /// a stretched or folded arm is valid even if rounding puts the wrist marginally outside.
    pub fn solve_branch(&self, target: &Point2<f64>, psi: f64, branch: ElbowBranch) -> BranchSolution {
        let p = &self.parameters;
        let wrist = self.wrist_for(target, psi);

        let cos_theta2 =
            (wrist.coords.norm_squared() - p.seg1 * p.seg1 - p.seg2 * p.seg2) / (2.0 * p.seg1 * p.seg2);
        // Negated test so that NaN from non-finite input is also unreachable.
        if !(cos_theta2.abs() <= 1.0 + BOUNDARY_TOLERANCE) {
            return BranchSolution::Unreachable;
        }

        let theta2 = branch.sign() * cos_theta2.clamp(-1.0, 1.0).acos();
        let theta1 = f64::atan2(wrist.y, wrist.x)
            - f64::atan2(p.seg2 * theta2.sin(), p.seg1 + p.seg2 * theta2.cos());
        let theta3 = psi - theta1 - theta2;

        BranchSolution::Solved([theta1, theta2, theta3])
    }

    /// Lazily enumerates candidates in selection order: orientations in sweep order,
    /// elbow up before elbow down for each.
    pub fn candidates<'a>(
        &'a self,
        target: Point2<f64>,
        orientations: &'a [f64],
    ) -> impl Iterator<Item = Candidate> + 'a {
        orientations.iter().flat_map(move |&psi| {
            ElbowBranch::ALL.into_iter().map(move |branch| Candidate {
                psi,
                branch,
                solution: self.solve_branch(&target, psi, branch),
            })
        })
    }
}

/// Picks the reachable candidate with the smallest Chebyshev distance to `previous`.
/// Only a strictly smaller cost replaces the current best, so the first generated
/// candidate wins ties.
pub(crate) fn select_closest<I>(candidates: I, previous: &Joints) -> Option<Candidate>
where
    I: IntoIterator<Item = Candidate>,
{
    let mut best: Option<(f64, Candidate)> = None;
    for candidate in candidates {
        let BranchSolution::Solved(joints) = candidate.solution else {
            continue;
        };
        // Infinite cost (non-finite previous joints) still beats having nothing.
        let cost = transition_cost(previous, &joints);
        match best {
            Some((best_cost, _)) if cost >= best_cost => {}
            _ => best = Some((cost, candidate)),
        }
    }
    best.map(|(_, candidate)| candidate)
}

impl Kinematics for PlanarKinematics {
    fn forward(&self, qs: &Joints) -> Pose {
        let links = self.forward_with_link_positions(qs);
        Pose {
            position: links.tcp,
            psi: qs[0] + qs[1] + qs[2],
        }
    }

    fn forward_with_link_positions(&self, qs: &Joints) -> LinkPositions {
        let p = &self.parameters;
        let q1 = qs[0];
        let q12 = qs[0] + qs[1];
        let psi = q12 + qs[2];

        let elbow = Point2::new(p.seg1 * q1.cos(), p.seg1 * q1.sin());
        let wrist = elbow + Vector2::new(p.seg2 * q12.cos(), p.seg2 * q12.sin());
        let tcp = wrist + Vector2::new(p.seg3 * psi.cos(), p.seg3 * psi.sin());

        LinkPositions { elbow, wrist, tcp }
    }

    fn inverse(&self, pose: &Pose) -> Solutions {
        ElbowBranch::ALL
            .into_iter()
            .filter_map(|branch| self.solve_branch(&pose.position, pose.psi, branch).joints())
            .collect()
    }

    fn inverse_continuing(
        &self,
        target: &Point2<f64>,
        orientations: &[f64],
        previous: &Joints,
    ) -> Result<Joints, KinematicsError> {
        if orientations.is_empty() {
            return Err(KinematicsError::EmptyOrientationSweep);
        }

        match select_closest(self.candidates(*target, orientations), previous) {
            Some(Candidate { psi, branch, solution: BranchSolution::Solved(joints) }) => {
                debug!(
                    "({:.3}, {:.3}): psi {:.4}, {:?} branch, cost {:.4}",
                    target.x, target.y, psi, branch, transition_cost(previous, &joints)
                );
                Ok(joints)
            }
            _ => {
                debug!("({:.3}, {:.3}) unreachable for {} orientations", target.x, target.y, orientations.len());
                Err(KinematicsError::AllBranchesUnreachable { x: target.x, y: target.y })
            }
        }
    }
}
