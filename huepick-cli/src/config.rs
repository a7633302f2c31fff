/// Config file loading and creation for the huepick CLI.
///
/// Config lives at ~/.config/huepick/config.toml.
/// All fields are optional — CLI args override config values.
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::bail;

#[derive(Deserialize, Default)]
pub struct HuepickConfig {
    pub colors: Option<usize>,
    pub rounds: Option<usize>,
    pub batch_size: Option<usize>,
    pub top: Option<usize>,
    pub session: Option<String>,
}

const DEFAULT_CONFIG_TEMPLATE: &str = "\
# huepick configuration
# All values here can be overridden by CLI flags.

# Size of the generated candidate pool
# colors = 24

# Comparison rounds before a session completes
# rounds = 20

# Swatches shown per round
# batch_size = 10

# How many colors the final ranking lists
# top = 10

# Where session state is saved and resumed from
# session = \"huepick-session.json\"
";

/// Returns the default config path: ~/.config/huepick/config.toml
pub fn config_path() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| bail("HOME environment variable not set"));
    PathBuf::from(home)
        .join(".config")
        .join("huepick")
        .join("config.toml")
}

/// Load config from a file path. Returns default (all None) if file doesn't exist.
pub fn load_config(path: &Path) -> HuepickConfig {
    match std::fs::read_to_string(path) {
        Ok(content) => toml::from_str(&content)
            .unwrap_or_else(|e| bail(format!("Failed to parse config at {}: {e}", path.display()))),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => HuepickConfig::default(),
        Err(e) => bail(format!("Failed to read config at {}: {e}", path.display())),
    }
}

/// Create the default config file. Errors if it already exists.
pub fn create_default_config() -> PathBuf {
    let path = config_path();

    if path.exists() {
        bail(format!("Config file already exists at {}", path.display()));
    }

    // Create parent directories
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap_or_else(|e| {
            bail(format!(
                "Failed to create directory {}: {e}",
                parent.display()
            ))
        });
    }

    std::fs::write(&path, DEFAULT_CONFIG_TEMPLATE)
        .unwrap_or_else(|e| bail(format!("Failed to write config to {}: {e}", path.display())));

    path
}
