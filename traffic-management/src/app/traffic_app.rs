use std::path::Path;

use clap::Parser;

use super::TrafficOperation;
use crate::{
    config::TrafficAppConfiguration,
    model::{seed, store::CsvObservationStore, TrafficError},
};

/// command line tool for storing road-segment traffic observations and estimating
/// their congestion and emissions
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct TrafficApp {
    #[command(subcommand)]
    pub op: TrafficOperation,
    /// path to a .toml or .json file with traffic-management settings
    #[arg(long, global = true)]
    pub configuration_file: Option<String>,
}

impl TrafficApp {
    pub fn configuration(&self) -> Result<TrafficAppConfiguration, TrafficError> {
        match &self.configuration_file {
            None => Ok(TrafficAppConfiguration::default()),
            Some(f) => {
                log::info!("reading traffic-management configuration from {f}");
                TrafficAppConfiguration::try_from(f)
            }
        }
    }

    /// opens the configured observations file and runs the selected operation.
    pub fn run(&self) -> Result<serde_json::Value, TrafficError> {
        let conf = self.configuration()?;
        let mut store = CsvObservationStore::open(Path::new(&conf.observations_file))?;
        if conf.seed_if_empty {
            seed::seed_if_empty(&mut store, chrono::Local::now().naive_local())?;
        }
        self.op.run(store, &conf)
    }
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use super::TrafficApp;
    use crate::{app::TrafficOperation, config::TrafficAppConfiguration};

    fn temp_file(name: &str, extension: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "traffic-management-app-{}-{}.{}",
            name,
            std::process::id(),
            extension
        ));
        let _ = std::fs::remove_file(&path);
        path
    }

    fn mock_app(name: &str, seed_if_empty: bool) -> (TrafficApp, PathBuf, PathBuf) {
        let observations_file = temp_file(name, "csv");
        let conf = TrafficAppConfiguration {
            observations_file: observations_file.to_string_lossy().to_string(),
            seed_if_empty,
            ..Default::default()
        };
        let conf_file = temp_file(name, "json");
        let conf_str = serde_json::to_string(&conf)
            .expect("test invariant failed: could not encode configuration");
        std::fs::write(&conf_file, conf_str)
            .expect("test invariant failed: could not write configuration");
        let app = TrafficApp {
            op: TrafficOperation::List {
                road_segment_id: None,
            },
            configuration_file: Some(conf_file.to_string_lossy().to_string()),
        };
        (app, conf_file, observations_file)
    }

    fn row_count(value: &serde_json::Value) -> usize {
        value
            .as_array()
            .expect("test invariant failed: listing should be an array")
            .len()
    }

    fn cleanup(paths: &[&Path]) {
        for path in paths {
            let _ = std::fs::remove_file(path);
        }
    }

    #[test]
    fn test_run_without_seeding_leaves_store_empty() {
        let (app, conf_file, observations_file) = mock_app("no-seed", false);
        let result = app.run();
        let file_created = observations_file.exists();
        cleanup(&[&conf_file, &observations_file]);

        let value = result.expect("run should succeed");
        assert_eq!(row_count(&value), 0);
        assert!(!file_created);
    }

    #[test]
    fn test_run_seeds_empty_store_once() {
        let (app, conf_file, observations_file) = mock_app("seed", true);
        let first = app.run();
        let second = app.run();
        cleanup(&[&conf_file, &observations_file]);

        let first = first.expect("first run should succeed");
        let second = second.expect("second run should succeed");
        assert_eq!(row_count(&first), 6);
        assert_eq!(row_count(&second), 6);
    }
}
