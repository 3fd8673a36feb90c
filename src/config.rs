use std::{fs, path::Path};
use serde::{Deserialize, Serialize};

use crate::errors::FloorDataError;
use crate::graph_algos::SolverKind;


/// Which segments count towards a route's reported distance
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceMode {
    /// Only the walk between the solved mesh nodes
    /// The room -> nearest node legs are drawn but not counted
    #[default]
    MeshOnly,
    /// The full drawn polyline, room legs included
    IncludeRoomLegs,
}


/// Router settings, every field optional in the TOML file
///
/// ```toml
/// solver = "linear_scan"
/// distance = "include_room_legs"
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RouterConfig {
    pub solver: SolverKind,
    pub distance: DistanceMode,
}

impl RouterConfig {

    pub fn from_toml_str(toml: &str) -> Result<Self, FloorDataError> {
        Ok(toml::from_str(toml)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, FloorDataError> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_default() {
        let config = RouterConfig::from_toml_str("").unwrap();
        assert_eq!(config, RouterConfig::default());
        assert_eq!(config.solver, SolverKind::BinaryHeap);
        assert_eq!(config.distance, DistanceMode::MeshOnly);
    }

    #[test]
    fn test_full_config() {
        let config = RouterConfig::from_toml_str(
            "solver = \"linear_scan\"\ndistance = \"include_room_legs\"\n",
        )
        .unwrap();
        assert_eq!(config.solver, SolverKind::LinearScan);
        assert_eq!(config.distance, DistanceMode::IncludeRoomLegs);
    }

    #[test]
    fn test_from_path() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/router.toml");
        let config = RouterConfig::from_path(path).unwrap();
        assert_eq!(config.solver, SolverKind::LinearScan);
        assert_eq!(config.distance, DistanceMode::IncludeRoomLegs);

        let missing = RouterConfig::from_path("/nonexistent/router.toml");
        assert!(matches!(missing, Err(FloorDataError::Io(_))));
    }

    #[test]
    fn test_rejects_unknown_values() {
        assert!(matches!(
            RouterConfig::from_toml_str("solver = \"a_star\""),
            Err(FloorDataError::Toml(_))
        ));
        assert!(matches!(
            RouterConfig::from_toml_str("cache = true"),
            Err(FloorDataError::Toml(_))
        ));
    }
}
