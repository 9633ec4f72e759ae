use crate::{
    error::JamfError,
    session::JamfSchool,
    utils::response::{created_id, parse_list, read_body, write_body},
};
use common::groups::{CollectionType, DeviceGroup};
use log::{error, info};
use serde::Serialize;
use std::str::FromStr;

/// Payload to create a static device group
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewDeviceGroup {
    pub name: String,
    pub location_id: i64,
    pub description: String,
    pub information: String,
    pub collection_type: CollectionType,
    pub shared: bool,
}

impl NewDeviceGroup {
    pub fn new(name: &str) -> NewDeviceGroup {
        NewDeviceGroup {
            name: name.to_string(),
            location_id: 0,
            description: String::new(),
            information: String::new(),
            collection_type: CollectionType::None,
            shared: false,
        }
    }

    /// Set the collection type from its API name.
    ///
    /// Only `none`, `article`, `list` and `runningTiles` are accepted
    pub fn with_collection_type(mut self, collection_type: &str) -> Result<NewDeviceGroup, JamfError> {
        self.collection_type = match CollectionType::from_str(collection_type) {
            Ok(result) => result,
            Err(value) => {
                error!("[jamf] Collection type {value} is not allowed for device groups");
                return Err(JamfError::InvalidCollectionType(value));
            }
        };
        Ok(self)
    }
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct GroupMembers<'a> {
    group_id: i64,
    udids: &'a [String],
}

impl JamfSchool {
    /// List every device group
    pub fn list_device_groups(&self) -> Result<Vec<DeviceGroup>, JamfError> {
        let res = self.send(self.get("devices/groups"), "device group list")?;
        let body = read_body(res, "device group list")?;
        // Documented as DeviceGroups, the live API answers with deviceGroups
        parse_list(&body, "deviceGroups")
    }

    /// Create a static device group and return its id
    pub fn create_device_group(&self, group: &NewDeviceGroup) -> Result<Option<i64>, JamfError> {
        let request = self.post("devices/groups").json(group);
        let res = self.send(request, "create device group")?;
        let body = match write_body(res, "create device group")? {
            Some(result) => result,
            None => return Ok(None),
        };

        let id = created_id(&body);
        info!("[jamf] Created device group {} with id {id:?}", group.name);
        Ok(id)
    }

    /// Add devices to a static device group
    pub fn add_devices_to_group(&self, group_id: i64, udids: &[String]) -> Result<bool, JamfError> {
        self.change_group_members("devices/groups/add", group_id, udids)
    }

    /// Remove devices from a static device group
    pub fn remove_devices_from_group(
        &self,
        group_id: i64,
        udids: &[String],
    ) -> Result<bool, JamfError> {
        self.change_group_members("devices/groups/remove", group_id, udids)
    }

    fn change_group_members(
        &self,
        path: &str,
        group_id: i64,
        udids: &[String],
    ) -> Result<bool, JamfError> {
        let payload = GroupMembers { group_id, udids };
        let res = self.send(self.post(path).json(&payload), "device group members")?;
        if write_body(res, "device group members")?.is_none() {
            error!("[jamf] Could not change members of device group {group_id}");
            return Ok(false);
        }
        Ok(true)
    }
}
