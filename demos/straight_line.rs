use nalgebra::Point2;
use rs_planar_kinematics::kinematic_traits::{Kinematics, JOINTS_AT_HOME};
use rs_planar_kinematics::kinematics_impl::PlanarKinematics;
use rs_planar_kinematics::parameters::planar_kinematics::Parameters;
use rs_planar_kinematics::trajectory::{StraightLine, UnreachablePolicy};

/// Moves the end effector of the demonstrator arm through a few targets, like clicking
/// on them one after another. The last target is out of reach, the arm holds there.
fn main() {
    let robot = PlanarKinematics::new(Parameters::demonstrator());
    let planner = StraightLine {
        on_unreachable: UnreachablePolicy::Hold,
        ..StraightLine::new(&robot)
    };

    let start = robot.forward(&JOINTS_AT_HOME).position;
    let targets = [
        Point2::new(150.0, 50.0),
        Point2::new(-100.0, 150.0),
        Point2::new(200.0, -50.0),
        Point2::new(0.0, 320.0),
    ];

    match planner.plan_through(&start, &targets, &JOINTS_AT_HOME) {
        Ok(waypoints) => {
            for waypoint in &waypoints {
                println!("{:?}", waypoint);
            }
        }
        Err(e) => println!("Planning failed: {}", e),
    }
}
