//! Blocking client for the Jamf School (formerly Zuludesk) MDM API.
//!
//! ```no_run
//! use client::{EnvStore, JamfConfig, JamfSchool, DeviceFilter};
//!
//! let config = JamfConfig::new(None, None, Some("https://api.zuludesk.com/"));
//! let session = JamfSchool::new(&config, &EnvStore::default()).unwrap();
//! for device in session.list_devices(&DeviceFilter::default()).unwrap() {
//!     println!("{}", device.serial_number);
//! }
//! ```

pub mod credentials;
pub mod devices;
pub mod enrollment;
pub mod error;
pub mod locations;
pub mod profiles;
pub mod session;
pub mod users;
mod utils;

pub use credentials::{
    config::{Credentials, JamfConfig},
    error::ConfigError,
    store::{EnvStore, SecretStore, TomlStore},
};
pub use devices::{
    groups::NewDeviceGroup,
    list::{join_ids, DeviceFilter, EnrollType},
};
pub use enrollment::placeholders::PlaceholderUpdate;
pub use error::JamfError;
pub use session::JamfSchool;
pub use users::{
    create::{generate_password, GroupRef, NewUser},
    groups::NewUserGroup,
    list::{filter_by_location, UserFilter},
    similar::{similar_users, MatchMode},
};
