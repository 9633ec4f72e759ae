use crate::{
    lenient::int_or_string,
    lookup::{Identified, Named},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct VppStatus {
    pub status: Option<String>,
}

/// A user account as returned by `/users`
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(default, deserialize_with = "int_or_string")]
    pub location_id: Option<i64>,
    pub status: Option<String>,
    pub device_count: Option<i64>,
    pub email: Option<String>,
    pub domain: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub group_ids: Option<Vec<i64>>,
    pub groups: Option<Vec<String>>,
    pub vpp: Option<Vec<VppStatus>>,
    pub teacher_groups: Option<Vec<Value>>,
    pub children: Option<Vec<Value>>,
    pub notes: Option<String>,
    pub modified: Option<String>,
    pub name: Option<String>,
    pub exclude: Option<Value>,
}

impl User {
    /// Full name as shown in the Jamf School web UI
    pub fn display_name(&self) -> String {
        if let Some(name) = &self.name {
            if !name.is_empty() {
                return name.clone();
            }
        }

        format!(
            "{} {}",
            self.first_name.as_deref().unwrap_or_default(),
            self.last_name.as_deref().unwrap_or_default()
        )
        .trim()
        .to_string()
    }
}

impl Identified for User {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Named for User {
    fn name(&self) -> &str {
        &self.username
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.username)
    }
}
