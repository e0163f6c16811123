#[cfg(test)]
mod tests {
    use nalgebra::Point2;
    use crate::kinematic_traits::{Kinematics, JOINTS_AT_HOME};
    use crate::kinematics_error::KinematicsError;
    use crate::kinematics_impl::PlanarKinematics;
    use crate::parameters::planar_kinematics::Parameters;
    use crate::sweep::OrientationSweep;
    use crate::trajectory::{PathFlags, StraightLine, UnreachablePolicy, DEFAULT_STEPS};
    use crate::utils::transition_cost;

    fn demonstrator() -> PlanarKinematics {
        PlanarKinematics::new(Parameters::demonstrator())
    }

    fn home_position(robot: &PlanarKinematics) -> Point2<f64> {
        robot.forward(&JOINTS_AT_HOME).position
    }

    #[test]
    fn test_home_is_demonstrator_start() {
        let robot = demonstrator();
        assert!((home_position(&robot) - Point2::new(100.0, 100.0)).norm() < 1e-9);
    }

    #[test]
    fn test_straight_move_is_continuous() {
        let robot = demonstrator();
        let planner = StraightLine::new(&robot);
        let start = home_position(&robot);

        for target in [Point2::new(150.0, 50.0), Point2::new(-100.0, 150.0), Point2::new(200.0, -50.0)] {
            let waypoints = planner.plan(&start, &target, &JOINTS_AT_HOME).expect("reachable line");
            assert_eq!(waypoints.len(), DEFAULT_STEPS);

            for (i, waypoint) in waypoints.iter().enumerate() {
                assert!((waypoint.links.tcp - waypoint.requested).norm() < 1e-7);
                let expected = if i == DEFAULT_STEPS - 1 { PathFlags::TARGET } else { PathFlags::LIN_INTERP };
                assert_eq!(waypoint.flags, expected);
                // Home is elbow down and there is room to stay so.
                assert!(waypoint.joints[1] < 0.0, "elbow flipped at waypoint {}", i);
            }
            assert_eq!(waypoints.last().map(|w| w.requested), Some(target));

            // The first step may reorient the effector into the sweep, after that the
            // joints only creep.
            for pair in waypoints[1..].windows(2) {
                let cost = transition_cost(&pair[0].joints, &pair[1].joints);
                assert!(cost < 0.2, "jump of {} rad between waypoints", cost);
            }
        }
    }

    #[test]
    fn test_unreachable_aborts() {
        let robot = demonstrator();
        let planner = StraightLine::new(&robot);
        let result = planner.plan(&home_position(&robot), &Point2::new(400.0, 0.0), &JOINTS_AT_HOME);
        match result {
            Err(KinematicsError::UnreachableWaypoint { index, x, y }) => {
                // The 14th waypoint is the first one further than 300 from the base.
                assert_eq!(index, 13);
                assert!((Point2::new(x, y) - Point2::new(0.0, 0.0)).norm() > 300.0);
            }
            other => panic!("Expected UnreachableWaypoint, got {:?}", other),
        }
    }

    #[test]
    fn test_unreachable_held() {
        let robot = demonstrator();
        let planner = StraightLine {
            on_unreachable: UnreachablePolicy::Hold,
            ..StraightLine::new(&robot)
        };
        let waypoints = planner
            .plan(&home_position(&robot), &Point2::new(400.0, 0.0), &JOINTS_AT_HOME)
            .expect("holding never fails on reach");
        assert_eq!(waypoints.len(), DEFAULT_STEPS);

        let last_reached = waypoints[12];
        assert!(!last_reached.flags.contains(PathFlags::HELD));
        for waypoint in &waypoints[13..] {
            assert!(waypoint.flags.contains(PathFlags::HELD));
            assert_eq!(waypoint.joints, last_reached.joints);
            assert_eq!(waypoint.links.tcp, last_reached.links.tcp);
        }
        assert!(waypoints[DEFAULT_STEPS - 1].flags.contains(PathFlags::TARGET));
    }

    #[test]
    fn test_already_at_target() {
        let robot = demonstrator();
        let planner = StraightLine::new(&robot);
        let start = home_position(&robot);
        let waypoints = planner.plan(&start, &start, &JOINTS_AT_HOME).expect("nothing to do");
        assert!(waypoints.is_empty());
    }

    #[test]
    fn test_plan_through_chains_moves() {
        let robot = demonstrator();
        let planner = StraightLine { steps: 10, ..StraightLine::new(&robot) };
        let targets = [Point2::new(150.0, 50.0), Point2::new(-100.0, 150.0)];
        let waypoints = planner
            .plan_through(&home_position(&robot), &targets, &JOINTS_AT_HOME)
            .expect("reachable");
        assert_eq!(waypoints.len(), 20);
        assert!((waypoints[9].links.tcp - targets[0]).norm() < 1e-7);
        assert!((waypoints[19].links.tcp - targets[1]).norm() < 1e-7);

        // The second move continues from the joints the first one ended with.
        let second = planner
            .plan(&waypoints[9].links.tcp, &targets[1], &waypoints[9].joints)
            .expect("reachable");
        assert_eq!(second[0].joints, waypoints[10].joints);
    }

    #[test]
    fn test_fixed_orientation_line() {
        let robot = demonstrator();
        let planner = StraightLine {
            steps: 5,
            orientations: OrientationSweep::fixed(0.0),
            ..StraightLine::new(&robot)
        };
        let waypoints = planner
            .plan(&Point2::new(200.0, 0.0), &Point2::new(200.0, 100.0), &[0.0, 0.5, -0.5])
            .expect("reachable");
        for waypoint in &waypoints {
            assert!(waypoint.joints.iter().sum::<f64>().abs() < 1e-12);
            assert!((waypoint.links.tcp - waypoint.requested).norm() < 1e-7);
        }
    }

    #[test]
    fn test_empty_sweep_is_reported() {
        let robot = demonstrator();
        let planner = StraightLine {
            orientations: OrientationSweep::from(Vec::new()),
            ..StraightLine::new(&robot)
        };
        let result = planner.plan(&home_position(&robot), &Point2::new(150.0, 50.0), &JOINTS_AT_HOME);
        assert_eq!(result.err(), Some(KinematicsError::EmptyOrientationSweep));
    }
}
