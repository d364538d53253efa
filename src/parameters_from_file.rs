//! Supports extracting DH tables from YAML file (optional)

use std::path::Path;

use tracing::info;
use yaml_rust2::{Yaml, YamlLoader};

use crate::parameter_error::ParameterError;
use crate::parameters::DhTable;

const ROOT_KEY: &str = "dh_parameters";

impl DhTable {
    /// Read the DH table from YAML file. YAML file like this is supported:
    /// ```yaml
    /// # Desktop arm, lengths in mm, angles in degrees
    /// # Each row is [a, alpha, d, theta_offset]
    /// dh_parameters:
    ///   - [0, -90, 10, 0]
    ///   - [50, 0, 0, -90]
    ///   - [0, -90, 5, 0]
    ///   - [0, 90, 50, 0]
    ///   - [0, -90, 0, 0]
    ///   - [0, 0, 10, 180]
    /// ```
    /// Integer and real values are accepted. All values must be finite.
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, ParameterError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let table = Self::from_yaml_str(&contents)?;
        info!("Loaded DH table from {}", path.display());
        Ok(table)
    }

    /// Parse the DH table from YAML text, see [`DhTable::from_yaml_file`].
    pub fn from_yaml_str(contents: &str) -> Result<Self, ParameterError> {
        let docs = YamlLoader::load_from_str(contents)
            .map_err(|e| ParameterError::ParseError(format!("{}", e)))?;
        let doc = docs
            .first()
            .ok_or_else(|| ParameterError::ParseError("empty YAML document".to_string()))?;

        let rows = doc[ROOT_KEY]
            .as_vec()
            .ok_or_else(|| ParameterError::ParseError(format!("missing list '{}'", ROOT_KEY)))?;

        let rows = rows
            .iter()
            .enumerate()
            .map(|(i, row)| parse_row(i, row))
            .collect::<Result<Vec<_>, _>>()?;

        DhTable::from_rows(&rows)
    }
}

fn parse_row(index: usize, row: &Yaml) -> Result<Vec<f64>, ParameterError> {
    let values = row.as_vec().ok_or_else(|| {
        ParameterError::ParseError(format!("joint {} is not a list of numbers", index))
    })?;

    values
        .iter()
        .map(|v| {
            let x = as_number(v).ok_or_else(|| {
                ParameterError::ParseError(format!("joint {}: value {:?} is not a number", index, v))
            })?;
            if !x.is_finite() {
                return Err(ParameterError::InvalidConfiguration(format!(
                    "joint {}: value must be finite (got {})", index, x
                )));
            }
            Ok(x)
        })
        .collect()
}

fn as_number(v: &Yaml) -> Option<f64> {
    match v {
        Yaml::Integer(i) => Some(*i as f64),
        Yaml::Real(_) => v.as_f64(),
        _ => None,
    }
}
