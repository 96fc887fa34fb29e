//! TOML configuration file I/O
//!
//! Handles loading and saving OTP profiles to/from TOML files
//! in the user's configuration directory.

use crate::config::OtpProfile;
use crate::error::{ConfigError, OathkeyError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Complete TOML configuration structure
///
/// Holds every registered OTP profile. Secrets live in the keyring, keyed
/// by profile name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileStore {
    #[serde(rename = "profile", default)]
    pub profiles: Vec<OtpProfile>,
}

impl ProfileStore {
    /// Look up a profile by name
    pub fn find(&self, name: &str) -> Option<&OtpProfile> {
        self.profiles.iter().find(|p| p.name == name)
    }

    /// Insert a profile, replacing any existing profile of the same name
    pub fn upsert(&mut self, profile: OtpProfile) {
        if let Some(existing) = self.profiles.iter_mut().find(|p| p.name == profile.name) {
            *existing = profile;
        } else {
            self.profiles.push(profile);
        }
    }

    /// Remove a profile by name, returning whether one was removed
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.profiles.len();
        self.profiles.retain(|p| p.name != name);
        self.profiles.len() != before
    }
}

/// Default configuration file name
const CONFIG_FILE_NAME: &str = "config.toml";

/// Get the default configuration directory
///
/// Returns ~/.config/oathkey, or OATHKEY_CONFIG_DIR environment variable if set
pub fn get_config_dir() -> Result<PathBuf, OathkeyError> {
    // Allow tests to override config directory via environment variable
    if let Ok(config_dir) = std::env::var("OATHKEY_CONFIG_DIR") {
        return Ok(PathBuf::from(config_dir));
    }

    let home = std::env::var("HOME").map_err(|_| {
        OathkeyError::Config(ConfigError::IoError {
            message: "HOME environment variable not set".to_string(),
        })
    })?;

    Ok(PathBuf::from(home).join(".config").join("oathkey"))
}

/// Get the default configuration file path
pub fn get_config_path() -> Result<PathBuf, OathkeyError> {
    let config_dir = get_config_dir()?;
    Ok(config_dir.join(CONFIG_FILE_NAME))
}

/// Check if a configuration file exists
pub fn config_exists() -> Result<bool, OathkeyError> {
    let config_path = get_config_path()?;
    Ok(config_path.exists())
}

/// Load the profile store from the default TOML file
///
/// A missing file is not an error: setup starts from an empty store.
pub fn load_store() -> Result<ProfileStore, OathkeyError> {
    let config_path = get_config_path()?;
    if !config_path.exists() {
        debug!("No config file at {:?}, starting with empty store", config_path);
        return Ok(ProfileStore::default());
    }
    load_store_from_path(&config_path)
}

/// Load the profile store from a specific TOML file
pub fn load_store_from_path<P: AsRef<Path>>(path: P) -> Result<ProfileStore, OathkeyError> {
    let contents = std::fs::read_to_string(&path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => OathkeyError::Config(ConfigError::LoadFailed {
            path: path.as_ref().to_string_lossy().to_string(),
        }),
        _ => OathkeyError::Config(ConfigError::IoError {
            message: format!("Failed to read config file: {}", e),
        }),
    })?;

    let store: ProfileStore = toml::from_str(&contents).map_err(|e| {
        OathkeyError::Config(ConfigError::ValidationError {
            message: format!("Failed to parse config file: {}", e),
        })
    })?;

    // Validate every loaded profile
    for profile in &store.profiles {
        profile
            .validate()
            .map_err(|e| OathkeyError::Config(ConfigError::ValidationError { message: e }))?;
    }

    Ok(store)
}

/// Save the profile store to the default TOML file
pub fn save_store(store: &ProfileStore) -> Result<(), OathkeyError> {
    let config_path = get_config_path()?;
    save_store_to_path(store, &config_path)
}

/// Save the profile store to a specific TOML file
pub fn save_store_to_path<P: AsRef<Path>>(
    store: &ProfileStore,
    path: P,
) -> Result<(), OathkeyError> {
    // Validate before saving
    for profile in &store.profiles {
        profile
            .validate()
            .map_err(|e| OathkeyError::Config(ConfigError::ValidationError { message: e }))?;
    }

    // Ensure config directory exists
    if let Some(parent) = path.as_ref().parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            OathkeyError::Config(ConfigError::IoError {
                message: format!("Failed to create config directory: {}", e),
            })
        })?;
    }

    let contents = toml::to_string_pretty(store)?;

    std::fs::write(&path, contents).map_err(|_| {
        OathkeyError::Config(ConfigError::SaveFailed {
            path: path.as_ref().to_string_lossy().to_string(),
        })
    })?;

    Ok(())
}
