use crate::{RallyError, Result};
use log::*;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Name of the data directory created under the user's desktop.
pub const DATA_DIR_NAME: &str = "CarRallyData";

/// Locations of the rally data files. Resolving the paths never touches the filesystem; the result directory is
/// created only through [`DataPaths::ensure_result_dir`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    root: PathBuf,
    fonts: PathBuf,
    images: PathBuf,
    rally_config: PathBuf,
    speed_chart: PathBuf,
    marshal_chart: PathBuf,
    marshals: PathBuf,
    result: PathBuf,
    marshal_data: PathBuf,
}

impl DataPaths {
    /// Resolves the data directory as `CarRallyData` on the user's desktop.
    pub fn resolve() -> Result<Self> {
        let desktop = dirs::desktop_dir().ok_or(RallyError::NoDataRoot)?;
        Ok(Self::from_root(desktop.join(DATA_DIR_NAME)))
    }

    /// Lays out the data paths under an explicit data directory.
    pub fn from_root<P>(root: P) -> Self
    where
        P: Into<PathBuf>,
    {
        let root = root.into();
        let assets = root.join("assets");
        let result = root.join("result");

        Self {
            fonts: assets.join("fonts"),
            images: assets.join("images"),
            rally_config: root.join("config.csv"),
            speed_chart: root.join("speed_chart.csv"),
            marshal_chart: root.join("marshal_chart.csv"),
            marshals: root.join("marshals"),
            marshal_data: result.join("marshal_data.csv"),
            result,
            root,
        }
    }

    /// Creates the result directory and its parents if they don't exist yet. Calling this repeatedly is harmless.
    pub fn ensure_result_dir(&self) -> Result<&Path> {
        if !self.result.is_dir() {
            debug!("Creating result directory {}", self.result.display());
        }

        fs::create_dir_all(&self.result)?;
        Ok(&self.result)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn fonts(&self) -> &Path {
        &self.fonts
    }

    pub fn images(&self) -> &Path {
        &self.images
    }

    /// The per-rally CSV describing the stage times.
    pub fn rally_config(&self) -> &Path {
        &self.rally_config
    }

    pub fn speed_chart(&self) -> &Path {
        &self.speed_chart
    }

    pub fn marshal_chart(&self) -> &Path {
        &self.marshal_chart
    }

    pub fn marshals(&self) -> &Path {
        &self.marshals
    }

    /// The result directory. It may not exist; see [`DataPaths::ensure_result_dir`].
    pub fn result(&self) -> &Path {
        &self.result
    }

    pub fn marshal_data(&self) -> &Path {
        &self.marshal_data
    }

    /// Every path paired with a short name, in a stable order.
    pub fn entries(&self) -> [(&'static str, &Path); 9] {
        [
            ("root", &self.root),
            ("fonts", &self.fonts),
            ("images", &self.images),
            ("rally config", &self.rally_config),
            ("speed chart", &self.speed_chart),
            ("marshal chart", &self.marshal_chart),
            ("marshals", &self.marshals),
            ("result", &self.result),
            ("marshal data", &self.marshal_data),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::DataPaths;
    use std::path::Path;
    use tempfile::tempdir;

    #[test]
    fn layout() {
        let paths = DataPaths::from_root("/data/CarRallyData");
        let root = Path::new("/data/CarRallyData");

        assert_eq!(paths.root(), root);
        assert_eq!(paths.fonts(), root.join("assets").join("fonts"));
        assert_eq!(paths.images(), root.join("assets").join("images"));
        assert_eq!(paths.rally_config(), root.join("config.csv"));
        assert_eq!(paths.speed_chart(), root.join("speed_chart.csv"));
        assert_eq!(paths.marshal_chart(), root.join("marshal_chart.csv"));
        assert_eq!(paths.marshals(), root.join("marshals"));
        assert_eq!(paths.result(), root.join("result"));
        assert_eq!(paths.marshal_data(), root.join("result").join("marshal_data.csv"));
    }

    #[test]
    fn resolving_has_no_side_effects() {
        let dir = tempdir().unwrap();
        let paths = DataPaths::from_root(dir.path().join("CarRallyData"));

        assert!(!paths.root().exists());
        assert!(!paths.result().exists());
    }

    #[test]
    fn ensure_result_dir_is_idempotent() {
        let dir = tempdir().unwrap();
        let paths = DataPaths::from_root(dir.path().join("CarRallyData"));

        let created = paths.ensure_result_dir().unwrap();
        assert!(created.is_dir());
        assert_eq!(created, paths.result());

        std::fs::write(paths.marshal_data(), "marshal,time\n").unwrap();
        paths.ensure_result_dir().unwrap();
        assert!(paths.marshal_data().is_file());
    }

    #[test]
    fn ensure_result_dir_fails_on_file() {
        let dir = tempdir().unwrap();
        let paths = DataPaths::from_root(dir.path());
        std::fs::write(paths.result(), "").unwrap();

        assert!(matches!(paths.ensure_result_dir(), Err(crate::RallyError::Io(_))));
    }

    #[test]
    fn entries_cover_every_path() {
        let paths = DataPaths::from_root("/data");
        let entries = paths.entries();

        assert_eq!(entries[0], ("root", Path::new("/data")));
        assert_eq!(entries[8].1, paths.marshal_data());
    }
}
