//! # Simulation configuration
//!
//! Every field has a default, so a config only needs the values it changes.

use crate::error::{LifeError, Result};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// The run ends once this many generations have been computed.
    pub max_generations: usize,

    /// Seed for randomly generated grids.
    pub seed: u64,

    /// Probability of a cell starting alive in a randomly generated grid.
    pub density: f64,

    /// End the run as soon as a generation is identical to the previous one.
    pub stop_when_stable: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            max_generations: 1000,
            seed: 0,
            density: 0.3,
            stop_when_stable: true,
        }
    }
}

impl SimulationConfig {
    pub fn from_json(contents: &str) -> Result<Self> {
        let config: SimulationConfig = serde_json::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.density) {
            return Err(LifeError::InvalidConfig(format!(
                "density must be between 0 and 1, got {}",
                self.density
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn when_parsing_an_empty_object_the_defaults_are_used() {
        let config = SimulationConfig::from_json("{}").unwrap();

        assert_eq!(config, SimulationConfig::default());
    }

    #[test]
    fn when_parsing_partial_config_only_the_given_values_change() {
        let config =
            SimulationConfig::from_json(r#"{ "max_generations": 10, "density": 0.5 }"#).unwrap();

        assert_eq!(config.max_generations, 10);
        assert_eq!(config.density, 0.5);
        assert_eq!(config.seed, 0);
        assert!(config.stop_when_stable);
    }

    #[test]
    fn when_parsing_a_density_out_of_range_an_error_is_returned() {
        let result = SimulationConfig::from_json(r#"{ "density": 1.5 }"#);

        assert!(matches!(result, Err(LifeError::InvalidConfig(_))));
    }

    #[test]
    fn when_parsing_malformed_json_an_error_is_returned() {
        let result = SimulationConfig::from_json("{ max_generations");

        assert!(matches!(result, Err(LifeError::Serialization(_))));
    }
}
