// Copyright (c) 2026, Verge Developers
// Licensed under the MIT License

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constant::DEFAULT_ALPHA;
use crate::error::VergeError;

/// Dataset-level settings for rasterizing polygon annotations
///
/// The config bundles the class mapping, the compositing order, and the
/// visualization color table. Class indices are u8 so masks can be written
/// as 8-bit grayscale images. Index 0 is the implicit background; a class
/// explicitly mapped to 0 is still drawn (at 0), unlike an unmapped class
/// which is skipped entirely.
///
/// # Examples
///
/// ```
/// use verge_core::config::DatasetConfig;
///
/// let config = DatasetConfig::default();
///
/// assert_eq!(config.class_map.get("road"), Some(&1));
/// assert_eq!(config.drawing_order[0], "road");
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// Class name to class index
    pub class_map: HashMap<String, u8>,

    /// Class names in compositing order, later names paint over earlier ones
    pub drawing_order: Vec<String>,

    /// Class index to RGB color, visualization only
    pub class_colors: HashMap<u8, [u8; 3]>,

    /// Weight of the colorized mask in the blended overlay
    #[serde(default = "default_alpha")]
    pub alpha: f32,
}

fn default_alpha() -> f32 {
    DEFAULT_ALPHA
}

impl Default for DatasetConfig {
    fn default() -> Self {
        DatasetConfig {
            class_map: HashMap::from([
                ("road".to_string(), 1),
                ("lm_solid".to_string(), 2),
                ("lm_dashed".to_string(), 3),
            ]),
            drawing_order: vec![
                "road".to_string(),
                "lm_solid".to_string(),
                "lm_dashed".to_string(),
            ],
            class_colors: HashMap::from([
                (0, [0, 0, 0]),
                (1, [255, 0, 0]),
                (2, [0, 255, 0]),
                (3, [255, 255, 0]),
            ]),
            alpha: DEFAULT_ALPHA,
        }
    }
}

impl DatasetConfig {
    /// Open a dataset config from a provided json path
    ///
    /// # Arguments
    ///
    /// * `path` - A path to a json file
    ///
    /// ```no_run
    /// use verge_core::config::DatasetConfig;
    /// let config = DatasetConfig::open("dataset.json");
    /// ```
    pub fn open<P: AsRef<Path>>(path: P) -> Result<DatasetConfig, VergeError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|err| VergeError::ConfigReadError(err.to_string()))?;

        let config: DatasetConfig = serde_json::from_str(&contents)
            .map_err(|err| VergeError::ConfigParseError(err.to_string()))?;

        config.validate()?;

        Ok(config)
    }

    /// Check that the config values are usable
    pub fn validate(&self) -> Result<(), VergeError> {
        if self.drawing_order.is_empty() {
            return Err(VergeError::ConfigError(
                "Drawing order must contain at least one class name".to_string(),
            ));
        }

        if !(0.0..=1.0).contains(&self.alpha) {
            return Err(VergeError::ConfigError(format!(
                "Alpha must be in [0, 1] but was {}",
                self.alpha
            )));
        }

        Ok(())
    }
}
