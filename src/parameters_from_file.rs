//! Supports extracting link lengths from YAML file (optional)

use std::path::Path;
use yaml_rust2::{Yaml, YamlLoader};

use crate::parameter_error::ParameterError;
use crate::parameters::planar_kinematics::Parameters;

const SECTION: &str = "planar_kinematics_link_lengths";

impl Parameters {
    /// Read the arm configuration from YAML file. YAML file like this is supported:
    /// ```yaml
    /// # Click-to-move demonstrator
    /// planar_kinematics_link_lengths:
    ///   seg1: 150
    ///   seg2: 100
    ///   seg3: 50
    /// ```
    /// Integer and real values are both accepted. The lengths are validated.
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, ParameterError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Same as `from_yaml_file`, reading YAML text.
    pub fn from_yaml_str(contents: &str) -> Result<Self, ParameterError> {
        let docs = YamlLoader::load_from_str(contents)
            .map_err(|e| ParameterError::ParseError(format!("{}", e)))?;
        let doc = docs
            .first()
            .ok_or_else(|| ParameterError::ParseError("empty YAML document".to_string()))?;

        let section = &doc[SECTION];
        if section.is_badvalue() {
            return Err(ParameterError::MissingField(SECTION.to_string()));
        }

        let parameters = Parameters {
            seg1: read_length(section, "seg1")?,
            seg2: read_length(section, "seg2")?,
            seg3: read_length(section, "seg3")?,
        };
        parameters.validate()?;
        Ok(parameters)
    }
}

fn read_length(section: &Yaml, name: &str) -> Result<f64, ParameterError> {
    match &section[name] {
        Yaml::Integer(value) => Ok(*value as f64),
        Yaml::Real(text) => text.parse::<f64>().map_err(|_| {
            ParameterError::ParseError(format!("{} is not a number: {}", name, text))
        }),
        Yaml::BadValue => Err(ParameterError::MissingField(format!("{}.{}", SECTION, name))),
        other => Err(ParameterError::ParseError(format!(
            "{} must be a number (got {:?})",
            name, other
        ))),
    }
}
