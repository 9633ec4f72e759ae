use crate::{
    lenient::{int_or_string, string_or_value},
    lookup::{Identified, Named},
};
use serde::{Deserialize, Serialize};

/// A configuration profile as returned by `/profiles`
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: i64,
    #[serde(default, deserialize_with = "int_or_string")]
    pub location_id: Option<i64>,
    pub identifier: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub platform: Option<String>,
    #[serde(rename = "type", default, deserialize_with = "string_or_value")]
    pub profile_type: Option<String>,
    #[serde(default, deserialize_with = "string_or_value")]
    pub status: Option<String>,
    pub days_of_the_week: Option<Vec<String>>,
    pub is_template: Option<bool>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub use_holidays: Option<bool>,
    pub restricted_weekend_use: Option<bool>,
}

impl Identified for Profile {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Named for Profile {
    fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }
}
