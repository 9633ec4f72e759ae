use crate::{
    lenient::{int_or_string, one_or_first},
    lookup::{Identified, Named},
};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// A device group as returned by `/devices/groups`
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DeviceGroup {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub information: Option<String>,
    pub is_smart_group: Option<bool>,
    #[serde(default, deserialize_with = "int_or_string")]
    pub location_id: Option<i64>,
    /// Number of member devices
    pub members: Option<i64>,
    pub shared: Option<bool>,
    pub image_url: Option<String>,
    #[serde(rename = "type")]
    pub group_type: Option<String>,
}

impl Identified for DeviceGroup {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Named for DeviceGroup {
    fn name(&self) -> &str {
        &self.name
    }
}

/// How a device group is presented in the Jamf Parent/Student apps
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum CollectionType {
    #[default]
    None,
    Article,
    List,
    RunningTiles,
}

impl CollectionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CollectionType::None => "none",
            CollectionType::Article => "article",
            CollectionType::List => "list",
            CollectionType::RunningTiles => "runningTiles",
        }
    }
}

impl FromStr for CollectionType {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "none" => Ok(CollectionType::None),
            "article" => Ok(CollectionType::Article),
            "list" => Ok(CollectionType::List),
            "runningTiles" => Ok(CollectionType::RunningTiles),
            _ => Err(value.to_string()),
        }
    }
}

impl fmt::Display for CollectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A user group as returned by `/users/groups`
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserGroup {
    pub id: i64,
    pub name: String,
    #[serde(default, deserialize_with = "int_or_string")]
    pub location_id: Option<i64>,
    pub description: Option<String>,
    pub user_count: Option<i64>,
    #[serde(default, deserialize_with = "one_or_first")]
    pub acl: Option<GroupAcl>,
    pub modified: Option<String>,
}

impl Identified for UserGroup {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Named for UserGroup {
    fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AclSetting {
    Allow,
    Deny,
    #[default]
    Inherit,
}

/// Per capability permissions of a user group.
///
/// Jamf School only evaluates `teacher` and `parent`; the self service
/// entries are carried along because the API still returns and accepts them.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct GroupAcl {
    pub self_service: AclSetting,
    pub self_service_info: AclSetting,
    pub self_service_location: AclSetting,
    pub self_service_clear_passcode: AclSetting,
    pub self_service_lock: AclSetting,
    pub self_service_wipe: AclSetting,
    pub self_service_unenroll: AclSetting,
    pub teacher: AclSetting,
    pub parent: AclSetting,
}

impl GroupAcl {
    /// Grant Jamf Teacher access and leave the Parent app inherited
    pub fn as_teacher(&mut self) {
        self.teacher = AclSetting::Allow;
        self.parent = AclSetting::Inherit;
    }
}
