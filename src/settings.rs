use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::animation::Installation;
use crate::error::{Error, Result};

/// Headless driver settings.
///
/// Read from an optional JSON file given on the command line.
/// Fields use `#[serde(default)]` so a file only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriverSettings {
    pub installation: Installation,
    /// Frames to advance before exiting
    pub frames: u64,
    pub show_vertex_normals: bool,
    /// Capture every frame as JSON into this file
    pub output: Option<PathBuf>,
}

impl Default for DriverSettings {
    fn default() -> Self {
        Self {
            installation: Installation::Rotating,
            frames: 720,
            show_vertex_normals: false,
            output: None,
        }
    }
}

impl DriverSettings {
    pub fn from_json(contents: &str) -> Result<Self> {
        serde_json::from_str(contents).map_err(|e| Error::Settings(e.to_string()))
    }

    /// Load settings from `path`, falling back to defaults on any error.
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            log::info!("No settings file given, using defaults");
            return Self::default();
        };
        match std::fs::read_to_string(path) {
            Ok(contents) => match Self::from_json(&contents) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("{}, using defaults", e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!(
                    "Could not read settings file {} ({}), using defaults",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings =
            DriverSettings::from_json(r#"{ "installation": "Coupling", "frames": 10 }"#).unwrap();
        assert_eq!(settings.installation, Installation::Coupling);
        assert_eq!(settings.frames, 10);
        assert!(!settings.show_vertex_normals);
        assert!(settings.output.is_none());
    }

    #[test]
    fn test_invalid_json_is_settings_error() {
        let result = DriverSettings::from_json("{ not json");
        assert!(matches!(result, Err(Error::Settings(_))));
    }

    #[test]
    fn test_load_falls_back_to_defaults() {
        assert_eq!(DriverSettings::load(None), DriverSettings::default());
        let missing = Path::new("/nonexistent/solid-light/settings.json");
        assert_eq!(DriverSettings::load(Some(missing)), DriverSettings::default());
    }

    #[test]
    fn test_load_reads_file() {
        let path = std::env::temp_dir().join(format!(
            "solid-light-settings-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, r#"{ "show_vertex_normals": true, "output": "frames.json" }"#)
            .unwrap();
        let settings = DriverSettings::load(Some(&path));
        std::fs::remove_file(&path).unwrap();

        assert!(settings.show_vertex_normals);
        assert_eq!(settings.output, Some(PathBuf::from("frames.json")));
        assert_eq!(settings.installation, Installation::Rotating);
    }
}
