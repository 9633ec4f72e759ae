use crate::{
    error::JamfError,
    session::JamfSchool,
    utils::response::{parse_list, read_body},
};
use common::users::User;
use log::info;
use serde::Serialize;

/// Server side filters for the user list. Unset fields are not sent
#[derive(Debug, Serialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_trash: Option<bool>,
    /// Only users owning at least one device
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_device: Option<bool>,
    /// Comma separated user group ids
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member_of: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_id: Option<i64>,
}

/// Keep only users of the location.
///
/// `/users` does not reliably honor `locationId`, so callers that need a
/// single location apply this after the request.
pub fn filter_by_location(users: Vec<User>, location_id: i64) -> Vec<User> {
    let before = users.len();
    let kept: Vec<User> = users
        .into_iter()
        .filter(|user| user.location_id == Some(location_id))
        .collect();

    info!(
        "[jamf] Location {location_id} filter kept {} of {before} users",
        kept.len()
    );
    kept
}

impl JamfSchool {
    /// List users matching the filter as returned by the server
    pub fn list_users(&self, filter: &UserFilter) -> Result<Vec<User>, JamfError> {
        let res = self.send(self.get("users").query(filter), "user list")?;
        let body = read_body(res, "user list")?;
        parse_list(&body, "users")
    }

    /// List users and drop everyone the server returned from other locations
    pub fn list_users_at_location(
        &self,
        location_id: i64,
        filter: &UserFilter,
    ) -> Result<Vec<User>, JamfError> {
        let filter = UserFilter {
            location_id: Some(location_id),
            ..filter.clone()
        };
        let users = self.list_users(&filter)?;
        Ok(filter_by_location(users, location_id))
    }
}
