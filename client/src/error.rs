use crate::credentials::error::ConfigError;
use std::fmt;

#[derive(Debug)]
pub enum JamfError {
    Config(ConfigError),
    ClientBuild,
    Request,
    BadResponse { status: u16, body: String },
    Deserialize,
    MissingKey(&'static str),
    InvalidCollectionType(String),
    InvalidSerialNumber(String),
    MissingField(&'static str),
    EmptyPayload,
}

impl std::error::Error for JamfError {}

impl fmt::Display for JamfError {
    fn fmt<'a>(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JamfError::Config(err) => write!(f, "Configuration error: {err}"),
            JamfError::ClientBuild => write!(f, "Could not create HTTP client"),
            JamfError::Request => write!(f, "Could not send request to Jamf School"),
            JamfError::BadResponse { status, body } => {
                write!(f, "Jamf School returned {status}: {body}")
            }
            JamfError::Deserialize => write!(f, "Could not deserialize Jamf School response"),
            JamfError::MissingKey(key) => write!(f, "Response did not contain {key}"),
            JamfError::InvalidCollectionType(value) => write!(
                f,
                "Collection type {value} is not one of none, article, list or runningTiles"
            ),
            JamfError::InvalidSerialNumber(value) => {
                write!(f, "Given serial number {value} is not a valid serial number")
            }
            JamfError::MissingField(field) => write!(f, "{field} is required"),
            JamfError::EmptyPayload => write!(f, "Nothing to update"),
        }
    }
}

impl From<ConfigError> for JamfError {
    fn from(err: ConfigError) -> Self {
        JamfError::Config(err)
    }
}
