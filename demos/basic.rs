use nalgebra::Point2;
use rs_planar_kinematics::kinematic_traits::{Joints, Kinematics, Pose, JOINTS_AT_HOME};
use rs_planar_kinematics::kinematics_impl::PlanarKinematics;
use rs_planar_kinematics::parameters::planar_kinematics::Parameters;
use rs_planar_kinematics::sweep::OrientationSweep;
use rs_planar_kinematics::utils::{as_radians, dump_joints, dump_links, dump_pose, dump_solutions};

fn main() {
    let robot = PlanarKinematics::new(Parameters::demonstrator());
    let joints: Joints = as_radians([30, 45, -60]); // Joints are alias of [f64; 3]
    println!("\nInitial joints:");
    dump_joints(&joints);

    let pose: Pose = robot.forward(&joints);
    println!("\nPose and link positions:");
    dump_pose(&pose);
    dump_links(&robot.forward_with_link_positions(&joints));

    println!("\nBoth branches for this pose, elbow up first. The initial joints are one of them:");
    let solutions = robot.inverse(&pose); // Solutions is alias of Vec<Joints>
    dump_solutions(&solutions);

    println!("\nOrientation does not matter, search 256 of them and stay close to the home pose:");
    let sweep = OrientationSweep::default();
    match robot.inverse_continuing(&Point2::new(100.0, 100.0), &sweep, &JOINTS_AT_HOME) {
        Ok(joints) => dump_joints(&joints),
        Err(e) => println!("{}", e),
    }

    println!("\nOut of reach (maximal reach is {}):", robot.parameters().max_reach());
    match robot.inverse_continuing(&Point2::new(400.0, 0.0), &sweep, &JOINTS_AT_HOME) {
        Ok(joints) => dump_joints(&joints),
        Err(e) => println!("{}", e),
    }
}
