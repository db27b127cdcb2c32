use nord_dither::{DisplaySpec, DEFAULT_NOISE_AMOUNT};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Application configuration loaded from a YAML file.
///
/// Every field has a default, so an empty file (or none at all) yields the
/// stock Framework 13 setup reading `/input` and writing `/output`.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Directory scanned for photos
    pub input_dir: PathBuf,

    /// Directory receiving converted frames
    pub output_dir: PathBuf,

    /// Prepended to the input file stem to form the output name
    pub output_prefix: String,

    /// Panel width in pixels
    pub width: u32,

    /// Panel height in pixels
    pub height: u32,

    /// Noise amplitude as a fraction of 255
    pub noise_amount: f64,

    /// Seed for the run's random generator; entropy when absent
    pub seed: Option<u64>,

    /// Re-compress output PNGs with oxipng
    pub optimize_png: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("/input"),
            output_dir: PathBuf::from("/output"),
            output_prefix: "fm13_".to_string(),
            width: DisplaySpec::FRAMEWORK_13.width,
            height: DisplaySpec::FRAMEWORK_13.height,
            noise_amount: DEFAULT_NOISE_AMOUNT,
            seed: None,
            optimize_png: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from a YAML file, falling back to defaults when
    /// the file cannot be read or parsed.
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_yaml(&content) {
                Ok(config) => {
                    tracing::info!(
                        path = %path.display(),
                        input = %config.input_dir.display(),
                        output = %config.output_dir.display(),
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, path = %path.display(), "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, path = %path.display(), "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// Parse configuration from YAML text.
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        // An empty document deserializes to unit, not to a mapping
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    /// Resolve the configuration the way the binary does: defaults, then
    /// the YAML file (explicit path or `CONFIG_FILE`), then `INPUT_DIR` and
    /// `OUTPUT_DIR`.
    pub fn resolve(config_file: Option<&Path>) -> Self {
        let env_file = std::env::var_os("CONFIG_FILE").map(PathBuf::from);
        let mut config = match config_file.or(env_file.as_deref()) {
            Some(path) => Self::load(path),
            None => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok());
        config
    }

    /// Override the directories from environment-style lookups.
    ///
    /// Empty values are ignored.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = lookup("INPUT_DIR").filter(|v| !v.is_empty()) {
            self.input_dir = PathBuf::from(dir);
        }
        if let Some(dir) = lookup("OUTPUT_DIR").filter(|v| !v.is_empty()) {
            self.output_dir = PathBuf::from(dir);
        }
    }

    /// Target panel geometry.
    pub fn display(&self) -> DisplaySpec {
        DisplaySpec::new(self.width, self.height)
    }
}
