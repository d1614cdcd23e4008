use serde::{Deserialize, Serialize};

use crate::model::TrafficError;

/// settings for a traffic-management run. any field missing from a configuration
/// file takes its default value.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(default)]
pub struct TrafficAppConfiguration {
    /// CSV file holding the stored observations
    pub observations_file: String,
    /// congestion level above which an observation counts as a congestion point
    pub congestion_threshold: f64,
    /// write the sample observations when the observations file holds no data
    pub seed_if_empty: bool,
}

impl Default for TrafficAppConfiguration {
    fn default() -> Self {
        Self {
            observations_file: String::from("observations.csv"),
            congestion_threshold: 0.7,
            seed_if_empty: false,
        }
    }
}

impl TryFrom<&String> for TrafficAppConfiguration {
    type Error = TrafficError;

    fn try_from(f: &String) -> Result<Self, Self::Error> {
        if f.ends_with(".toml") {
            let s = std::fs::read_to_string(f).map_err(|e| {
                TrafficError::ConfigurationError(format!("failure reading {f}: {e}"))
            })?;
            toml::from_str(&s).map_err(|e| {
                TrafficError::ConfigurationError(format!("failure decoding {f}: {e}"))
            })
        } else if f.ends_with(".json") {
            let s = std::fs::read_to_string(f).map_err(|e| {
                TrafficError::ConfigurationError(format!("failure reading {f}: {e}"))
            })?;
            serde_json::from_str(&s).map_err(|e| {
                TrafficError::ConfigurationError(format!("failure decoding {f}: {e}"))
            })
        } else {
            Err(TrafficError::ConfigurationError(format!(
                "unsupported file type: {f}"
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::TrafficAppConfiguration;

    #[test]
    fn test_partial_toml_uses_defaults() {
        let conf: TrafficAppConfiguration = toml::from_str("seed_if_empty = true")
            .expect("test invariant failed: could not decode toml");
        assert!(conf.seed_if_empty);
        assert_eq!(conf.congestion_threshold, 0.7);
        assert_eq!(conf.observations_file, "observations.csv");
    }

    #[test]
    fn test_unsupported_extension() {
        let result = TrafficAppConfiguration::try_from(&String::from("traffic.yaml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_read_json_file() {
        let path = std::env::temp_dir().join(format!(
            "traffic-management-conf-{}.json",
            std::process::id()
        ));
        std::fs::write(
            &path,
            r#"{ "observations_file": "a8.csv", "congestion_threshold": 0.5 }"#,
        )
        .expect("test invariant failed: could not write config");
        let filename = path.to_string_lossy().to_string();
        let conf = TrafficAppConfiguration::try_from(&filename);
        std::fs::remove_file(&path).expect("test invariant failed: could not remove config");
        let conf = conf.expect("json config should decode");
        assert_eq!(conf.observations_file, "a8.csv");
        assert_eq!(conf.congestion_threshold, 0.5);
        assert!(!conf.seed_if_empty);
    }
}
