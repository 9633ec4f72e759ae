use super::{
    error::ConfigError,
    store::{SecretStore, API_PW, NETWORK_ID, URL},
};
use log::error;
use serde::{Deserialize, Serialize};
use std::{fmt, fs::read_to_string, time::Duration};

/// Request timeout used when the config does not set one
const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Session settings. Any credential left out is looked up in a `SecretStore`
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct JamfConfig {
    /// Network id shown in the Jamf School API settings, used as Basic auth username
    pub network_id: Option<String>,
    pub api_key: Option<String>,
    /// `https://api.zuludesk.com/`, `https://apiv6.zuludesk.com/` or `https://<subdomain>.jamfcloud.com/api/`
    pub url: Option<String>,
    pub timeout_secs: Option<u64>,
}

/// Fully resolved credentials
#[derive(Clone, PartialEq)]
pub struct Credentials {
    pub network_id: String,
    pub api_key: String,
    pub url: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("network_id", &self.network_id)
            .field("api_key", &"<redacted>")
            .field("url", &self.url)
            .finish()
    }
}

impl JamfConfig {
    pub fn new(network_id: Option<&str>, api_key: Option<&str>, url: Option<&str>) -> JamfConfig {
        JamfConfig {
            network_id: network_id.map(str::to_string),
            api_key: api_key.map(str::to_string),
            url: url.map(str::to_string),
            timeout_secs: None,
        }
    }

    /// Parse a TOML config file
    pub fn from_file(path: &str) -> Result<JamfConfig, ConfigError> {
        let data = match read_to_string(path) {
            Ok(result) => result,
            Err(err) => {
                error!("[jamf] Failed to read config {path}: {err:?}");
                return Err(ConfigError::ReadFile);
            }
        };

        let config = match toml::from_str(&data) {
            Ok(result) => result,
            Err(err) => {
                error!("[jamf] Failed to parse config {path}: {err:?}");
                return Err(ConfigError::BadToml);
            }
        };

        Ok(config)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }

    /// Fill in missing credentials from the store.
    ///
    /// The network id and API secret are a pair: if either is missing both
    /// are taken from the store.
    pub fn resolve(&self, store: &dyn SecretStore) -> Result<Credentials, ConfigError> {
        let (network_id, api_key) = match (present(&self.network_id), present(&self.api_key)) {
            (Some(network_id), Some(api_key)) => (Some(network_id), Some(api_key)),
            _ => (
                present(&store.secret(NETWORK_ID)),
                present(&store.secret(API_PW)),
            ),
        };

        let url = match present(&self.url) {
            Some(url) => Some(url),
            None => present(&store.secret(URL)),
        };

        match (network_id, api_key, url) {
            (Some(network_id), Some(api_key), Some(url)) => Ok(Credentials {
                network_id,
                api_key,
                url: normalize_url(&url),
            }),
            (network_id, api_key, url) => {
                let missing: Vec<&str> = [
                    (NETWORK_ID, network_id.is_none()),
                    (API_PW, api_key.is_none()),
                    (URL, url.is_none()),
                ]
                .iter()
                .filter(|(_, absent)| *absent)
                .map(|(key, _)| *key)
                .collect();

                error!(
                    "[jamf] Missing {}. Provide them in the config or the secret store",
                    missing.join(", ")
                );
                Err(ConfigError::MissingCredentials)
            }
        }
    }
}

/// Empty or blank values count as unset
fn present(value: &Option<String>) -> Option<String> {
    value
        .as_ref()
        .filter(|text| !text.trim().is_empty())
        .cloned()
}

/// Strip trailing slashes so paths can be joined with `/`
pub(crate) fn normalize_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::{normalize_url, JamfConfig};
    use crate::credentials::store::TomlStore;
    use std::{collections::HashMap, path::PathBuf, time::Duration};

    fn store() -> HashMap<String, String> {
        HashMap::from([
            (String::from("network_id"), String::from("store-id")),
            (String::from("api_pw"), String::from("store-pw")),
            (String::from("url"), String::from("https://store.example.com/")),
        ])
    }

    #[test]
    fn test_resolve_explicit() {
        let config = JamfConfig::new(Some("id"), Some("pw"), Some("https://api.zuludesk.com/"));
        let creds = config.resolve(&store()).unwrap();
        assert_eq!(creds.network_id, "id");
        assert_eq!(creds.api_key, "pw");
        assert_eq!(creds.url, "https://api.zuludesk.com");
    }

    #[test]
    fn test_resolve_pair_from_store() {
        let config = JamfConfig::new(Some("id"), None, Some("https://api.zuludesk.com"));
        let creds = config.resolve(&store()).unwrap();
        assert_eq!(creds.network_id, "store-id");
        assert_eq!(creds.api_key, "store-pw");
        assert_eq!(creds.url, "https://api.zuludesk.com");
    }

    #[test]
    fn test_resolve_url_from_store() {
        let config = JamfConfig::new(Some("id"), Some("pw"), None);
        let creds = config.resolve(&store()).unwrap();
        assert_eq!(creds.network_id, "id");
        assert_eq!(creds.url, "https://store.example.com");
    }

    #[test]
    #[should_panic(expected = "MissingCredentials")]
    fn test_resolve_missing() {
        let config = JamfConfig::new(Some("id"), Some("pw"), None);
        let _ = config.resolve(&HashMap::new()).unwrap();
    }

    #[test]
    #[should_panic(expected = "MissingCredentials")]
    fn test_resolve_empty_values() {
        let config = JamfConfig::new(Some(""), Some(""), Some(""));
        let _ = config.resolve(&HashMap::new()).unwrap();
    }

    #[test]
    fn test_resolve_empty_values_from_store() {
        let config = JamfConfig::new(Some("id"), Some(" "), Some(""));
        let creds = config.resolve(&store()).unwrap();
        assert_eq!(creds.network_id, "store-id");
        assert_eq!(creds.api_key, "store-pw");
        assert_eq!(creds.url, "https://store.example.com");

        let empty_store = HashMap::from([
            (String::from("network_id"), String::new()),
            (String::from("api_pw"), String::from("pw")),
            (String::from("url"), String::from("https://api.zuludesk.com")),
        ]);
        assert!(JamfConfig::default().resolve(&empty_store).is_err());
    }

    #[test]
    fn test_resolve_from_toml_store() {
        let mut test_location = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        test_location.push("tests/test_data/secrets.toml");
        let store = TomlStore::from_file(test_location.to_str().unwrap()).unwrap();

        let creds = JamfConfig::default().resolve(&store).unwrap();
        assert_eq!(creds.network_id, "12345678");
        assert_eq!(creds.url, "https://example.jamfcloud.com/api");
        assert!(!format!("{creds:?}").contains("tomlsecret"));
    }

    #[test]
    fn test_config_from_file() {
        let mut test_location = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        test_location.push("tests/test_data/jamf.toml");

        let config = JamfConfig::from_file(test_location.to_str().unwrap()).unwrap();
        assert_eq!(config.network_id.as_deref(), Some("87654321"));
        assert!(config.api_key.is_none());
        assert_eq!(config.timeout(), Duration::from_secs(15));
        assert_eq!(JamfConfig::default().timeout(), Duration::from_secs(60));
    }

    #[test]
    #[should_panic(expected = "BadToml")]
    fn test_config_bad_file() {
        let mut test_location = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        test_location.push("tests/test_data/broken.toml");

        let _ = JamfConfig::from_file(test_location.to_str().unwrap()).unwrap();
    }

    #[test]
    fn test_normalize_url() {
        assert_eq!(normalize_url("https://api.zuludesk.com/"), "https://api.zuludesk.com");
        assert_eq!(normalize_url("https://api.zuludesk.com"), "https://api.zuludesk.com");
        assert_eq!(normalize_url(" https://a.jamfcloud.com/api// "), "https://a.jamfcloud.com/api");
    }
}
