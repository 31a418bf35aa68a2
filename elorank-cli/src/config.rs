/// Config file loading and creation for the elorank CLI.
///
/// Config lives at ~/.config/elorank/config.toml.
/// All fields are optional; CLI args override config values.
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::bail;

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ElorankConfig {
    pub base_rating: Option<i64>,
    pub k_factor: Option<f64>,
    pub state_file: Option<PathBuf>,
    pub extensions: Option<Vec<String>>,
}

const DEFAULT_CONFIG_TEMPLATE: &str = "\
# elorank configuration
# All values here can be overridden by CLI flags.

# Rating given to images that have never been compared
# base_rating = 1000

# Maximum rating change per comparison
# k_factor = 32.0

# Where ratings are stored. Relative paths are resolved against the image
# directory. Default: elo_image_results.json inside the image directory.
# state_file = \"elo_image_results.json\"

# File extensions treated as comparable items (case-insensitive)
# extensions = [\"png\", \"jpg\", \"jpeg\", \"bmp\", \"gif\"]
";

/// Returns the default config path: ~/.config/elorank/config.toml
pub fn config_path() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| bail("HOME environment variable not set"));
    PathBuf::from(home).join(".config").join("elorank").join("config.toml")
}

/// Parse config file contents.
pub fn parse_config(content: &str) -> Result<ElorankConfig, toml::de::Error> {
    toml::from_str(content)
}

/// Load config from a file path. Returns default (all None) if file doesn't exist.
pub fn load_config(path: &Path) -> ElorankConfig {
    match std::fs::read_to_string(path) {
        Ok(content) => parse_config(&content)
            .unwrap_or_else(|e| bail(format!("Failed to parse config at {}: {e}", path.display()))),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => ElorankConfig::default(),
        Err(e) => bail(format!("Failed to read config at {}: {e}", path.display())),
    }
}

/// Create the default config file. Errors if it already exists.
pub fn create_default_config(path: &Path) {
    if path.exists() {
        bail(format!("Config file already exists at {}", path.display()));
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .unwrap_or_else(|e| bail(format!("Failed to create directory {}: {e}", parent.display())));
    }

    std::fs::write(path, DEFAULT_CONFIG_TEMPLATE)
        .unwrap_or_else(|e| bail(format!("Failed to write config to {}: {e}", path.display())));
}
