use crate::{
    lenient::{int_or_string, string_or_number},
    lookup::Identified,
};
use serde::{Deserialize, Serialize};

/// An Automated Device Enrollment (DEP) placeholder as returned by `/dep`
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Placeholder {
    pub id: i64,
    pub serial_number: String,
    #[serde(default, deserialize_with = "int_or_string")]
    pub user_id: Option<i64>,
    #[serde(default, deserialize_with = "int_or_string")]
    pub location_id: Option<i64>,
    pub model: Option<String>,
    pub color: Option<String>,
    pub status: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub date_assigned: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub date_added: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub date_pushed: Option<String>,
    pub profile_name: Option<String>,
    pub placeholder_name: Option<String>,
    pub placeholder_device_name: Option<String>,
    pub device_name: Option<String>,
}

impl Identified for Placeholder {
    fn id(&self) -> i64 {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::Placeholder;
    use serde_json::json;

    #[test]
    fn test_placeholder_deserialize() {
        let placeholder: Placeholder = serde_json::from_value(json!({
            "id": 5468,
            "userId": 453,
            "locationId": 12345,
            "model": "Apple TV",
            "color": "Black",
            "serialNumber": "DY3QC7BCG9XX",
            "status": "empty",
            "dateAdded": 1505111388,
            "datePushed": 1505457703,
            "profileName": "",
            "placeholderName": "Test TV"
        }))
        .unwrap();

        assert_eq!(placeholder.serial_number, "DY3QC7BCG9XX");
        assert_eq!(placeholder.user_id, Some(453));
        assert_eq!(placeholder.date_added.as_deref(), Some("1505111388"));
        assert!(placeholder.date_assigned.is_none());
        assert!(placeholder.device_name.is_none());
    }

    #[test]
    #[should_panic(expected = "missing field `serialNumber`")]
    fn test_placeholder_missing_serial() {
        let _: Placeholder = serde_json::from_value(json!({"id": 1})).unwrap();
    }
}
