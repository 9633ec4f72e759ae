use crate::{
    error::JamfError,
    session::JamfSchool,
    utils::response::{parse_list, read_body},
};
use common::{
    locations::Location,
    lookup::{find_by_id, find_by_name, NameMatch},
};
use log::{error, info};

impl JamfSchool {
    /// Request every location from `/locations`
    pub fn list_locations(&self) -> Result<Vec<Location>, JamfError> {
        let res = self.send(self.get("locations"), "location list")?;
        let body = read_body(res, "location list")?;
        parse_list(&body, "locations")
    }

    /// Reload the location cache. On failure the cache is emptied and the error logged
    pub fn refresh_locations(&mut self) {
        self.locations = match self.list_locations() {
            Ok(result) => {
                info!("[jamf] Cached {} locations", result.len());
                result
            }
            Err(err) => {
                error!("[jamf] Could not load locations: {err}");
                Vec::new()
            }
        };
    }

    /// Locations loaded when the session was created
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    pub fn find_location_by_id(&self, id: i64) -> Option<&Location> {
        find_by_id(&self.locations, id)
    }

    /// First cached location whose name contains the fragment, ignoring case
    pub fn find_location_by_name(&self, fragment: &str) -> Option<&Location> {
        find_by_name(&self.locations, fragment, NameMatch::ContainsIgnoreCase)
    }
}
