use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::TagPattern;
use crate::error::{Result, VerbumpError};

/// Settings file name looked up in the project root
pub const SETTINGS_FILE: &str = "verbump.toml";

/// Represents the complete configuration for verbump.
///
/// Every section is optional; missing values fall back to defaults.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Settings {
    #[serde(default)]
    pub metadata: MetadataConfig,

    #[serde(default)]
    pub behavior: BehaviorConfig,

    #[serde(default)]
    pub tag: TagConfig,
}

fn default_metadata_file() -> String {
    "package.json".to_string()
}

fn default_section() -> String {
    "verbump".to_string()
}

/// Where the version lives and where targets are listed.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct MetadataConfig {
    #[serde(default = "default_metadata_file")]
    pub file: String,

    /// Key of the metadata section holding `targets`
    #[serde(default = "default_section")]
    pub section: String,
}

impl Default for MetadataConfig {
    fn default() -> Self {
        MetadataConfig {
            file: default_metadata_file(),
            section: default_section(),
        }
    }
}

fn enabled() -> bool {
    true
}

fn default_remote() -> String {
    "origin".to_string()
}

/// Version-control defaults. Command-line flags override these.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct BehaviorConfig {
    #[serde(default = "enabled")]
    pub commit: bool,

    #[serde(default = "enabled")]
    pub push: bool,

    #[serde(default = "enabled")]
    pub tag: bool,

    #[serde(default = "default_remote")]
    pub remote: String,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        BehaviorConfig {
            commit: true,
            push: true,
            tag: true,
            remote: default_remote(),
        }
    }
}

fn default_tag_pattern() -> String {
    "v{version}".to_string()
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct TagConfig {
    #[serde(default = "default_tag_pattern")]
    pub pattern: String,
}

impl Default for TagConfig {
    fn default() -> Self {
        TagConfig {
            pattern: default_tag_pattern(),
        }
    }
}

impl Settings {
    pub fn tag_pattern(&self) -> Result<TagPattern> {
        TagPattern::new(self.tag.pattern.clone())
    }

    pub fn metadata_path(&self, root: &Path) -> PathBuf {
        root.join(&self.metadata.file)
    }
}

/// Loads settings from file or returns defaults.
///
/// Attempts to load settings in the following order:
/// 1. Custom path provided as parameter
/// 2. `verbump.toml` in the project root
/// 3. `.verbump.toml` in the user config directory
/// 4. Default settings if no file found
///
/// # Returns
/// * `Ok(Settings)` - Loaded or default settings
/// * `Err` - If a file exists but cannot be read or parsed
pub fn load_settings(config_path: Option<&Path>, root: &Path) -> Result<Settings> {
    let candidate = match config_path {
        Some(path) => Some(path.to_path_buf()),
        None => {
            let local = root.join(SETTINGS_FILE);
            if local.exists() {
                Some(local)
            } else {
                dirs::config_dir()
                    .map(|dir| dir.join(".verbump.toml"))
                    .filter(|path| path.exists())
            }
        }
    };

    let Some(path) = candidate else {
        return Ok(Settings::default());
    };

    let raw = fs::read_to_string(&path).map_err(|e| {
        VerbumpError::config(format!("cannot read '{}': {}", path.display(), e))
    })?;
    toml::from_str(&raw)
        .map_err(|e| VerbumpError::config(format!("cannot parse '{}': {}", path.display(), e)))
}
