//! Hardcoded link lengths for a few arms

pub mod planar_kinematics {
    use crate::parameters::planar_kinematics::Parameters;

    #[allow(dead_code)]
    impl Parameters {
        /// All lengths zero, a template to fill in. Does not pass `validate` as is.
        pub fn new() -> Self {
            Parameters {
                seg1: 0.0,
                seg2: 0.0,
                seg3: 0.0,
            }
        }

        /// The 150/100/50 arm of the click-to-move demonstrator. Units are canvas pixels.
        pub fn demonstrator() -> Self {
            Parameters {
                seg1: 150.0,
                seg2: 100.0,
                seg3: 50.0,
            }
        }

        /// Desktop pen plotter arm, meters. Equal first links, so the wrist
        /// can fold back onto the base.
        pub fn desktop_plotter() -> Self {
            Parameters {
                seg1: 0.12,
                seg2: 0.12,
                seg3: 0.035,
            }
        }

        /// Small SCARA-like pick and place arm seen from above, meters.
        pub fn pick_and_place() -> Self {
            Parameters {
                seg1: 0.325,
                seg2: 0.275,
                seg3: 0.080,
            }
        }
    }

    impl Default for Parameters {
        fn default() -> Self {
            Self::demonstrator()
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::parameters::planar_kinematics::Parameters;

    #[test]
    fn test_new_is_zeroed_template() {
        let template = Parameters::new();
        assert_eq!(template, Parameters { seg1: 0.0, seg2: 0.0, seg3: 0.0 });
        assert!(template.validate().is_err());

        let mut filled = Parameters::new();
        filled.seg1 = 2.0;
        filled.seg2 = 1.0;
        assert!(filled.validate().is_err());
        filled.seg3 = 0.5;
        assert!(filled.validate().is_ok());
    }

    #[test]
    fn test_presets_are_valid() {
        for parameters in [
            Parameters::demonstrator(),
            Parameters::desktop_plotter(),
            Parameters::pick_and_place(),
            Parameters::default(),
        ] {
            assert!(parameters.validate().is_ok(), "{:?}", parameters);
        }
    }
}
