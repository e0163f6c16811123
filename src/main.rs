use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use nalgebra::Point2;
use rs_planar_kinematics::kinematic_traits::{Kinematics, JOINTS_AT_HOME};
use rs_planar_kinematics::kinematics_impl::PlanarKinematics;
use rs_planar_kinematics::parameters::planar_kinematics::Parameters;
use rs_planar_kinematics::sweep::{OrientationSweep, DEFAULT_SWEEP_SAMPLES};
use rs_planar_kinematics::trajectory::{PathFlags, StraightLine, UnreachablePolicy, DEFAULT_STEPS};
use rs_planar_kinematics::utils::{dump_joints, dump_links, dump_pose};

/// Plans a straight line move of the end effector of a 3R planar arm.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// YAML file with the link lengths. The 150/100/50 demonstrator arm is used if not given.
    #[arg(long)]
    params: Option<PathBuf>,

    /// Start position of the end effector. Defaults to where the home pose puts it.
    #[arg(long, num_args = 2, value_names = ["X", "Y"], allow_negative_numbers = true)]
    from: Option<Vec<f64>>,

    /// Target position of the end effector.
    #[arg(long, num_args = 2, value_names = ["X", "Y"], allow_negative_numbers = true, required = true)]
    to: Vec<f64>,

    /// Number of equal steps of the move.
    #[arg(long, default_value_t = DEFAULT_STEPS)]
    steps: usize,

    /// Number of candidate orientations over the full circle.
    #[arg(long, default_value_t = DEFAULT_SWEEP_SAMPLES)]
    sweep: usize,

    /// Keep the previous joints on unreachable waypoints instead of stopping.
    #[arg(long)]
    hold: bool,
}

fn point(values: &[f64]) -> Point2<f64> {
    Point2::new(values[0], values[1])
}

fn main() -> Result<()> {
    let args = Args::parse();

    let parameters = match &args.params {
        Some(path) => Parameters::from_yaml_file(path)
            .with_context(|| format!("Failed to load link lengths from {}", path.display()))?,
        None => Parameters::demonstrator(),
    };
    let robot = PlanarKinematics::try_new(parameters).context("Invalid link lengths")?;
    println!("Using:\n{}", parameters.to_yaml());

    let home = robot.forward(&JOINTS_AT_HOME);
    let start = args.from.as_deref().map(point).unwrap_or(home.position);
    let target = point(&args.to);

    let planner = StraightLine {
        steps: args.steps,
        orientations: OrientationSweep::full_circle(args.sweep),
        on_unreachable: if args.hold { UnreachablePolicy::Hold } else { UnreachablePolicy::Abort },
        ..StraightLine::new(&robot)
    };

    // Bring the arm from home onto the start of the line first if it is not already there.
    let waypoints = planner
        .plan_through(&home.position, &[start, target], &JOINTS_AT_HOME)
        .with_context(|| format!("Cannot move from ({}, {}) to ({}, {})", start.x, start.y, target.x, target.y))?;

    println!("Home pose:");
    dump_pose(&home);
    for waypoint in &waypoints {
        if waypoint.flags.contains(PathFlags::HELD) {
            println!("Held (unreachable): ({:.3}, {:.3})", waypoint.requested.x, waypoint.requested.y);
        }
        dump_joints(&waypoint.joints);
        dump_links(&waypoint.links);
    }
    if waypoints.is_empty() {
        println!("Already at the target");
    }
    Ok(())
}
