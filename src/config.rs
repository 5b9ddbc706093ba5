//! Runtime configuration for a labeling session.
//!
//! Every knob has a default matching the shipped behavior, so hosts can use
//! `Config::default()` and never touch a file; a YAML file with any subset
//! of the fields overrides them.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::BoxmarkError;

/// How the fit scale relates image and canvas dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FitMode {
    /// The whole image is visible; its larger relative dimension fills the
    /// canvas.
    Contain,
    /// The canvas is covered; the image's smaller relative dimension fills
    /// it and the rest is cropped.
    Cover,
}

/// Tunable parameters of the labeling core.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Lower zoom clamp, relative to the fit scale.
    pub min_zoom: f64,

    /// Upper zoom clamp, relative to the fit scale.
    pub max_zoom: f64,

    /// Fit policy applied when an image becomes active or the canvas
    /// resizes.
    pub fit_mode: FitMode,

    /// Extra factor on the fit scale; below 1.0 leaves a border around the
    /// fitted image.
    pub fit_margin: f64,

    /// Minimum drag extent in screen pixels; smaller drags produce no box.
    pub min_box_px: f64,

    /// Class id assigned to new boxes when the host has no class picker.
    pub default_class: u32,

    /// File extension for label files, without the dot.
    pub label_extension: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_zoom: 0.1,
            max_zoom: 8.0,
            fit_mode: FitMode::Contain,
            fit_margin: 1.0,
            min_box_px: 5.0,
            default_class: 0,
            label_extension: "txt".to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: &Path) -> Result<Self, BoxmarkError> {
        let text = fs::read_to_string(path)?;
        serde_yaml::from_str(&text).map_err(|source| BoxmarkError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.min_zoom, 0.1);
        assert_eq!(config.max_zoom, 8.0);
        assert_eq!(config.fit_mode, FitMode::Contain);
        assert_eq!(config.fit_margin, 1.0);
        assert_eq!(config.min_box_px, 5.0);
        assert_eq!(config.default_class, 0);
        assert_eq!(config.label_extension, "txt");
    }

    #[test]
    fn test_partial_yaml_overrides_defaults() {
        let temp = tempfile::tempdir().expect("create temp dir");
        let path = temp.path().join("boxmark.yaml");
        fs::write(&path, "max_zoom: 4.0\nfit_mode: cover\nmin_box_px: 2.0\n")
            .expect("write config");

        let config = Config::from_yaml_file(&path).expect("load config");
        assert_eq!(config.max_zoom, 4.0);
        assert_eq!(config.fit_mode, FitMode::Cover);
        assert_eq!(config.min_box_px, 2.0);
        // Untouched fields keep their defaults.
        assert_eq!(config.min_zoom, 0.1);
        assert_eq!(config.label_extension, "txt");
    }

    #[test]
    fn test_malformed_yaml_is_a_config_error() {
        let temp = tempfile::tempdir().expect("create temp dir");
        let path = temp.path().join("boxmark.yaml");
        fs::write(&path, "max_zoom: [nope\n").expect("write config");

        let err = Config::from_yaml_file(&path).unwrap_err();
        assert!(matches!(err, BoxmarkError::ConfigParse { .. }));
    }
}
