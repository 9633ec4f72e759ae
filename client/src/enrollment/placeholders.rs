//! Automated Device Enrollment (DEP) placeholders.
//!
//! Every `/dep` call must carry `X-Server-Protocol-Version: 3`. Without it
//! Jamf School answers 404 for endpoints that exist.

use crate::{
    error::JamfError,
    session::JamfSchool,
    utils::response::{parse_list, parse_record, read_body, vendor_message, write_body},
};
use common::{placeholders::Placeholder, serial::parse_serial_number};
use log::{error, info, warn};
use reqwest::{blocking::RequestBuilder, StatusCode};
use serde::Serialize;

const PROTOCOL_HEADER: &str = "X-Server-Protocol-Version";
const PROTOCOL_VERSION: &str = "3";

/// Changes applied to a placeholder upon enrollment. Unset fields are not sent
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlaceholderUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_name: Option<String>,
    /// Owner after enrollment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_ids: Option<Vec<i64>>,
    /// Enrollment profile. 0 unassigns the current profile
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_id: Option<i64>,
}

fn checked_serial(serial_number: &str) -> Result<String, JamfError> {
    match parse_serial_number(serial_number) {
        Some(result) => Ok(result),
        None => {
            error!("[jamf] Given serial number {serial_number} is not a valid serial number");
            Err(JamfError::InvalidSerialNumber(serial_number.to_string()))
        }
    }
}

impl JamfSchool {
    fn dep(&self, request: RequestBuilder) -> RequestBuilder {
        request.header(PROTOCOL_HEADER, PROTOCOL_VERSION)
    }

    /// List every DEP placeholder
    pub fn list_placeholders(&self) -> Result<Vec<Placeholder>, JamfError> {
        let res = self.send(self.dep(self.get("dep")), "placeholder list")?;
        let body = read_body(res, "placeholder list")?;
        parse_list(&body, "placeholders")
    }

    /// Placeholder for a serial number, `None` if Jamf School does not know it.
    ///
    /// A scanned barcode prefix `S` is stripped before the lookup
    pub fn placeholder(&self, serial_number: &str) -> Result<Option<Placeholder>, JamfError> {
        let serial = checked_serial(serial_number)?;
        let res = self.send(self.dep(self.get(&format!("dep/{serial}"))), "placeholder")?;

        if res.status() == StatusCode::NOT_FOUND {
            let body = res.text().unwrap_or_default();
            warn!("[jamf] {} for {serial}", vendor_message(&body));
            return Ok(None);
        }

        let body = read_body(res, "placeholder")?;
        parse_record(&body, "placeholder").map(Some)
    }

    /// Apply the update to the placeholder of the serial number
    pub fn update_placeholder(
        &self,
        serial_number: &str,
        update: &PlaceholderUpdate,
    ) -> Result<bool, JamfError> {
        let serial = checked_serial(serial_number)?;
        if *update == PlaceholderUpdate::default() {
            error!("[jamf] No changes given for placeholder {serial}");
            return Err(JamfError::EmptyPayload);
        }

        let request = self.dep(self.post(&format!("dep/{serial}"))).json(update);
        let res = self.send(request, "placeholder update")?;
        match write_body(res, "placeholder update")? {
            Some(body) => {
                info!("[jamf] {} for {serial}", vendor_message(&body));
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
