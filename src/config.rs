use crate::resources::ForgeConfig;
use crate::traversal::errors::{WayforgeError, WayforgeResult};
use std::fs;
use std::path::PathBuf;

pub mod range_types;

pub fn get_config_path() -> WayforgeResult<PathBuf> {
    let mut path = dirs::config_dir().ok_or(WayforgeError::ConfigDirNotFound)?;
    path.push("wayforge");
    fs::create_dir_all(&path)?;
    path.push("config.toml");
    Ok(path)
}

pub fn load_config() -> ForgeConfig {
    if let Ok(config_path) = get_config_path() {
        if let Ok(contents) = fs::read_to_string(&config_path) {
            if let Ok(config) = toml::from_str::<ForgeConfig>(&contents) {
                return config;
            }
        }
    }
    ForgeConfig::default()
}

pub fn save_config(config: &ForgeConfig) -> WayforgeResult<()> {
    let config_path = get_config_path()?;
    let contents = toml::to_string_pretty(config)?;
    fs::write(config_path, contents)?;
    Ok(())
}
