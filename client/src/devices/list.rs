use crate::{
    error::JamfError,
    session::JamfSchool,
    utils::response::{parse_list, read_body},
};
use common::devices::Device;
use log::{debug, warn};
use serde::Serialize;

/// Enrollment type filter accepted by `/devices`
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum EnrollType {
    Manual,
    DepPending,
    Ac2Pending,
    Dep,
    Ac2,
}

/// Server side filters for the device list. Unset fields are not sent
#[derive(Debug, Serialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DeviceFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_apps: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_trash: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_owner: Option<bool>,
    /// Owner user id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub managed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supervised: Option<bool>,
    /// Comma separated device group ids, see `join_ids`
    #[serde(rename = "groups", skip_serializing_if = "Option::is_none")]
    pub groups: Option<String>,
    /// Comma separated user group ids of the owner
    #[serde(rename = "ownergroups", skip_serializing_if = "Option::is_none")]
    pub owner_groups: Option<String>,
    #[serde(rename = "serialnumber", skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
    /// Model identifier such as `iPad3,4`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// Location id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<i64>,
    /// Owner name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "assettag", skip_serializing_if = "Option::is_none")]
    pub asset_tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enroll_type: Option<EnrollType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bootstrap_token_stored: Option<bool>,
}

/// Join ids the way the API expects list filters: `1,40,31`
pub fn join_ids(ids: &[i64]) -> String {
    ids.iter()
        .map(i64::to_string)
        .collect::<Vec<String>>()
        .join(",")
}

impl JamfSchool {
    /// List devices matching the filter.
    ///
    /// Malformed entries are logged and dropped. A non-200 answer is an error
    /// carrying the response body.
    pub fn list_devices(&self, filter: &DeviceFilter) -> Result<Vec<Device>, JamfError> {
        debug!("[jamf] Listing devices with filter {filter:?}");
        let res = self.send(self.get("devices").query(filter), "device list")?;
        let body = read_body(res, "device list")?;
        parse_list(&body, "devices")
    }

    /// UDID of the first device with the serial number
    pub fn device_udid(&self, serial_number: &str) -> Result<Option<String>, JamfError> {
        let filter = DeviceFilter {
            serial_number: Some(serial_number.to_string()),
            ..Default::default()
        };
        let devices = self.list_devices(&filter)?;
        if devices.len() > 1 {
            warn!(
                "[jamf] {} devices share serial number {serial_number}. Using the first",
                devices.len()
            );
        }

        Ok(devices.into_iter().next().map(|device| device.udid))
    }
}
