use super::error::ConfigError;
use log::error;
use serde::Deserialize;
use std::{collections::HashMap, env::var, fs::read_to_string};

/// Secret store entry holding the Basic auth username
pub const NETWORK_ID: &str = "network_id";
/// Secret store entry holding the API secret
pub const API_PW: &str = "api_pw";
/// Secret store entry holding the API base URL
pub const URL: &str = "url";

/// Local source for credentials that were not passed in explicitly
pub trait SecretStore {
    fn secret(&self, key: &str) -> Option<String>;
}

impl SecretStore for HashMap<String, String> {
    fn secret(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

/// Read credentials from `{prefix}_NETWORK_ID`, `{prefix}_API_KEY` and `{prefix}_URL`
pub struct EnvStore {
    prefix: String,
}

impl EnvStore {
    pub fn new(prefix: &str) -> EnvStore {
        EnvStore {
            prefix: prefix.to_string(),
        }
    }
}

impl Default for EnvStore {
    fn default() -> Self {
        EnvStore::new("JAMF")
    }
}

impl SecretStore for EnvStore {
    fn secret(&self, key: &str) -> Option<String> {
        let suffix = match key {
            NETWORK_ID => "NETWORK_ID",
            API_PW => "API_KEY",
            URL => "URL",
            _ => return None,
        };

        var(format!("{}_{suffix}", self.prefix))
            .ok()
            .filter(|value| !value.is_empty())
    }
}

#[derive(Deserialize, Debug)]
struct SecretFile {
    jamf: HashMap<String, String>,
}

/// Credentials kept in the `[jamf]` table of a local TOML file
#[derive(Debug)]
pub struct TomlStore {
    entries: HashMap<String, String>,
}

impl TomlStore {
    /// Parse the provided secret file
    pub fn from_file(path: &str) -> Result<TomlStore, ConfigError> {
        let data = match read_to_string(path) {
            Ok(result) => result,
            Err(err) => {
                error!("[jamf] Failed to read secret file {path}: {err:?}");
                return Err(ConfigError::ReadFile);
            }
        };

        TomlStore::from_toml(&data)
    }

    pub fn from_toml(data: &str) -> Result<TomlStore, ConfigError> {
        let secrets: SecretFile = match toml::from_str(data) {
            Ok(result) => result,
            Err(err) => {
                error!("[jamf] Failed to parse secret file: {err:?}");
                return Err(ConfigError::BadToml);
            }
        };

        Ok(TomlStore {
            entries: secrets.jamf,
        })
    }
}

impl SecretStore for TomlStore {
    fn secret(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }
}
