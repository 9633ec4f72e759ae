use std::fmt;

#[derive(Debug)]
pub enum ConfigError {
    MissingCredentials,
    ReadFile,
    BadToml,
}

impl std::error::Error for ConfigError {}

impl fmt::Display for ConfigError {
    fn fmt<'a>(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingCredentials => write!(
                f,
                "Not enough info to initialize. Provide a network_id, api_pw and url"
            ),
            ConfigError::ReadFile => write!(f, "Could not read config file"),
            ConfigError::BadToml => write!(f, "Failed to parse TOML data"),
        }
    }
}
