use crate::{
    lenient::string_or_number,
    lookup::{Identified, Named},
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A school (or the district itself) configured in Jamf School
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: i64,
    pub name: String,
    pub is_district: Option<bool>,
    pub street: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub street_number: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub postal_code: Option<String>,
    pub city: Option<String>,
    pub source: Option<String>,
    pub asm_identifier: Option<String>,
    pub school_number: Option<String>,
}

impl Identified for Location {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Named for Location {
    fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{: >4}: {: <30} {: <5}",
            self.id,
            self.name,
            self.school_number.as_deref().unwrap_or_default()
        )
    }
}
