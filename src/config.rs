use std::fs;
use std::path::{self, Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::export::ExportOptions;

/// Persistent scene furniture created once at startup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FixtureConfig {
    pub ground_size: f32,
    pub light_intensity: f32,
    pub light_position: [f32; 3],
    pub camera_position: [f32; 3],
}

impl Default for FixtureConfig {
    fn default() -> Self {
        Self {
            ground_size: 40.0,
            light_intensity: 2.0,
            light_position: [10.0, 10.0, 10.0],
            camera_position: [5.0, 5.0, 10.0],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudioConfig {
    pub default_detail: f32,
    pub output_dir: PathBuf,
    /// File name without extension; delivery always appends `.obj`
    pub file_stem: String,
    pub export: ExportOptions,
    pub fixtures: FixtureConfig,
    /// Seeds cosmetic jitter so repeated runs produce identical files
    pub jitter_seed: Option<u64>,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            default_detail: 1.0,
            output_dir: PathBuf::from("."),
            file_stem: "model".to_string(),
            export: ExportOptions::default(),
            fixtures: FixtureConfig::default(),
            jitter_seed: None,
        }
    }
}

impl StudioConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let config = serde_json::from_str(text).context("Failed to parse config JSON")?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize config")
    }

    /// Point delivery at `output`.
    ///
    /// An existing directory, or a path ending in a separator, replaces
    /// `output_dir` and keeps `file_stem`. Anything else is split into
    /// directory and stem.
    pub fn set_output(&mut self, output: &Path) {
        let names_dir = output
            .to_str()
            .and_then(|text| text.chars().last())
            .map_or(false, path::is_separator);
        if names_dir || output.is_dir() {
            self.output_dir = output.to_path_buf();
            return;
        }

        if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
            self.output_dir = parent.to_path_buf();
        }
        if let Some(stem) = output.file_stem() {
            self.file_stem = stem.to_string_lossy().into_owned();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_uses_defaults() {
        let config = StudioConfig::from_json("{}").unwrap();
        assert_eq!(config, StudioConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = StudioConfig::from_json(
            r#"{ "default_detail": 2.5, "fixtures": { "ground_size": 10.0 }, "jitter_seed": 9 }"#,
        )
        .unwrap();
        assert_eq!(config.default_detail, 2.5);
        assert_eq!(config.fixtures.ground_size, 10.0);
        assert_eq!(config.fixtures.light_intensity, 2.0);
        assert_eq!(config.jitter_seed, Some(9));
        assert_eq!(config.file_stem, "model");
    }

    #[test]
    fn test_json_round_trip() {
        let mut config = StudioConfig::default();
        config.file_stem = "castle".to_string();
        let text = config.to_json().unwrap();
        assert_eq!(StudioConfig::from_json(&text).unwrap(), config);
    }

    #[test]
    fn test_load_missing_file_reports_path() {
        let err = StudioConfig::load("/definitely/not/here.json").unwrap_err();
        assert!(format!("{:#}", err).contains("not/here.json"));
    }

    #[test]
    fn test_malformed_json_is_error() {
        assert!(StudioConfig::from_json("{ nope").is_err());
    }

    #[test]
    fn test_set_output_splits_file_path() {
        let mut config = StudioConfig::default();
        config.set_output(Path::new("renders/castle.obj"));
        assert_eq!(config.output_dir, PathBuf::from("renders"));
        assert_eq!(config.file_stem, "castle");
    }

    #[test]
    fn test_set_output_bare_name_keeps_directory() {
        let mut config = StudioConfig::default();
        config.set_output(Path::new("tiger"));
        assert_eq!(config.output_dir, PathBuf::from("."));
        assert_eq!(config.file_stem, "tiger");
    }

    #[test]
    fn test_set_output_trailing_separator_is_directory() {
        let mut config = StudioConfig::default();
        config.set_output(Path::new("out/"));
        assert_eq!(config.output_dir, PathBuf::from("out/"));
        assert_eq!(config.file_stem, "model");
    }

    #[test]
    fn test_set_output_existing_directory() {
        let dir = std::env::temp_dir();
        let mut config = StudioConfig::default();
        config.set_output(&dir);
        assert_eq!(config.output_dir, dir);
        assert_eq!(config.file_stem, "model");
    }
}
