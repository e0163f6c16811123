//! Defines the link length data structure

pub mod planar_kinematics {
    use crate::parameter_error::ParameterError;

    /// Parameters for the arm. See [parameters_robots.rs](parameters_robots.rs) for concrete arms.
    #[derive(Debug, Clone, Copy, PartialEq)]
    /// Link lengths of the 3R planar chain. Fixed for the lifetime of a solver.
    pub struct Parameters {
        /// Length of the first link, from the base joint to joint 2 (the elbow).
        pub seg1: f64,

        /// Length of the second link, from the elbow to joint 3 (the wrist).
        pub seg2: f64,

        /// Length of the third link, from the wrist to the end effector.
        pub seg3: f64,
    }

    impl Parameters {
        /// Convert to string yaml representation (quick viewing, etc).
        pub fn to_yaml(&self) -> String {
            format!(
                "planar_kinematics_link_lengths:\n  \
              seg1: {}\n  \
              seg2: {}\n  \
              seg3: {}\n",
                self.seg1, self.seg2, self.seg3
            )
        }

        /// All lengths must be finite and strictly positive.
        pub fn validate(&self) -> Result<(), ParameterError> {
            for (name, value) in [("seg1", self.seg1), ("seg2", self.seg2), ("seg3", self.seg3)] {
                if !value.is_finite() || value <= 0.0 {
                    return Err(ParameterError::NonPositiveLength { name, value });
                }
            }
            Ok(())
        }

        /// Distance from the base the end effector reaches with the arm fully stretched.
        pub fn max_reach(&self) -> f64 {
            self.seg1 + self.seg2 + self.seg3
        }

        /// Inner and outer radius of the annulus the wrist (end of the second link)
        /// can be placed on. Both bounds are reachable.
        pub fn wrist_annulus(&self) -> (f64, f64) {
            ((self.seg1 - self.seg2).abs(), self.seg1 + self.seg2)
        }
    }

}
