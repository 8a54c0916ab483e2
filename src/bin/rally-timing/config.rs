use rally_timing::{DataPaths, RoundingPolicy, Threshold};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize, Default)]
pub(crate) struct Config {
    #[serde(default)]
    pub threshold: Threshold,
    /// Overrides the default `CarRallyData` directory on the desktop.
    #[serde(default)]
    pub data_root: Option<PathBuf>,
}

impl Config {
    pub fn rounding_policy(&self) -> RoundingPolicy {
        RoundingPolicy::new(self.threshold)
    }

    pub fn data_paths(&self) -> rally_timing::Result<DataPaths> {
        match &self.data_root {
            Some(root) => Ok(DataPaths::from_root(root)),
            None => DataPaths::resolve(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Config;
    use std::io::Write;
    use tempfile::{tempdir, NamedTempFile};

    #[test]
    fn load_threshold_and_root() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "threshold = 40\ndata_root = \"/srv/rally\"").unwrap();

        let cfg: Config = confy::load_path(file.path()).unwrap();
        assert_eq!(cfg.threshold.seconds(), 40);
        assert_eq!(cfg.data_paths().unwrap().root(), std::path::Path::new("/srv/rally"));
    }

    #[test]
    fn missing_fields_use_defaults() {
        let file = NamedTempFile::new().unwrap();

        let cfg: Config = confy::load_path(file.path()).unwrap();
        assert_eq!(cfg.threshold.seconds(), 30);
        assert!(cfg.data_root.is_none());
    }

    #[test]
    fn missing_file_is_created_with_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("rally-timing.toml");

        let cfg: Config = confy::load_path(&path).unwrap();
        assert_eq!(cfg.rounding_policy().threshold().seconds(), 30);
        assert!(path.is_file());
    }

    #[test]
    fn threshold_out_of_range_is_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "threshold = 75").unwrap();

        let cfg: Result<Config, _> = confy::load_path(file.path());
        assert!(cfg.is_err());
    }
}
