use crate::{
    credentials::{config::JamfConfig, store::SecretStore},
    error::JamfError,
};
use common::{locations::Location, users::User};
use log::{error, info};
use rand::{rngs::StdRng, SeedableRng};
use reqwest::blocking::{Client, RequestBuilder, Response};
use std::fmt;

const USER_AGENT: &str = concat!("jamfschool/", env!("CARGO_PKG_VERSION"));

/// Authenticated connection to one Jamf School instance.
///
/// Holds the base URL, the Basic auth pair and two transient caches
/// (locations and users). Nothing here is synchronized with the server
/// after it was loaded; use the `refresh_*` methods to reload.
pub struct JamfSchool {
    url: String,
    network_id: String,
    api_key: String,
    client: Client,
    pub(crate) locations: Vec<Location>,
    pub(crate) users: Option<Vec<User>>,
    pub(crate) rng: StdRng,
}

impl fmt::Debug for JamfSchool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JamfSchool")
            .field("url", &self.url)
            .field("network_id", &self.network_id)
            .field("locations", &self.locations.len())
            .field("users", &self.users.as_ref().map(Vec::len))
            .finish()
    }
}

impl JamfSchool {
    /// Resolve credentials, build the HTTP client and load the location list.
    ///
    /// Only missing credentials or a client that cannot be built are errors.
    /// A failing location request leaves the cache empty.
    pub fn new(config: &JamfConfig, store: &dyn SecretStore) -> Result<JamfSchool, JamfError> {
        let mut session = JamfSchool::connect(config, store)?;
        session.refresh_locations();
        Ok(session)
    }

    /// Same as `new` but without loading the location cache
    pub(crate) fn connect(
        config: &JamfConfig,
        store: &dyn SecretStore,
    ) -> Result<JamfSchool, JamfError> {
        let creds = config.resolve(store)?;

        let client = match Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout())
            .build()
        {
            Ok(result) => result,
            Err(err) => {
                error!("[jamf] Could not build HTTP client: {err:?}");
                return Err(JamfError::ClientBuild);
            }
        };

        info!("[jamf] Using Jamf School API at {}", creds.url);
        Ok(JamfSchool {
            url: creds.url,
            network_id: creds.network_id,
            api_key: creds.api_key,
            client,
            locations: Vec::new(),
            users: None,
            rng: StdRng::from_os_rng(),
        })
    }

    /// Replace the random source used for generated passwords
    pub fn with_rng_seed(mut self, seed: u64) -> JamfSchool {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.url, path.trim_start_matches('/'))
    }

    pub(crate) fn get(&self, path: &str) -> RequestBuilder {
        self.client
            .get(self.endpoint(path))
            .basic_auth(&self.network_id, Some(&self.api_key))
    }

    pub(crate) fn post(&self, path: &str) -> RequestBuilder {
        self.client
            .post(self.endpoint(path))
            .basic_auth(&self.network_id, Some(&self.api_key))
    }

    pub(crate) fn put(&self, path: &str) -> RequestBuilder {
        self.client
            .put(self.endpoint(path))
            .basic_auth(&self.network_id, Some(&self.api_key))
    }

    /// Send the request. Only transport failures are errors here
    pub(crate) fn send(&self, request: RequestBuilder, what: &str) -> Result<Response, JamfError> {
        match request.send() {
            Ok(result) => Ok(result),
            Err(err) => {
                error!("[jamf] Failed to send {what} request: {err:?}");
                Err(JamfError::Request)
            }
        }
    }
}
