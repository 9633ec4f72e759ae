use crate::{
    error::JamfError,
    session::JamfSchool,
    utils::response::{parse_record, read_body, write_body},
};
use common::devices::Device;
use log::{error, info, warn};
use serde::Serialize;

#[derive(Serialize, Debug)]
struct OwnerRequest {
    /// User id as text. `"0"` removes the owner
    user: String,
}

#[derive(Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
struct DetailsRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    asset_tag: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    notes: Option<&'a str>,
}

impl JamfSchool {
    /// Full record of one device, optionally with its installed apps
    pub fn device_details(&self, udid: &str, include_apps: bool) -> Result<Device, JamfError> {
        let request = self
            .get(&format!("devices/{udid}"))
            .query(&[("includeApps", include_apps)]);
        let res = self.send(request, "device details")?;
        let body = read_body(res, "device details")?;
        parse_record(&body, "device")
    }

    /// Resolve the serial number to a UDID and fetch the device.
    ///
    /// Returns `None` when no device carries the serial number
    pub fn device_details_by_serial(
        &self,
        serial_number: &str,
        include_apps: bool,
    ) -> Result<Option<Device>, JamfError> {
        let udid = match self.device_udid(serial_number)? {
            Some(result) => result,
            None => {
                warn!("[jamf] No device with serial number {serial_number}");
                return Ok(None);
            }
        };

        self.device_details(&udid, include_apps).map(Some)
    }

    /// Make the user the owner of the device. A `user_id` of 0 removes the owner
    pub fn assign_owner(&self, udid: &str, user_id: i64) -> Result<bool, JamfError> {
        let payload = OwnerRequest {
            user: user_id.to_string(),
        };
        let request = self.put(&format!("devices/{udid}/owner")).json(&payload);
        let res = self.send(request, "assign owner")?;

        if write_body(res, "assign owner")?.is_none() {
            error!("[jamf] Failed to assign owner {user_id} to device {udid}");
            return Ok(false);
        }
        info!("[jamf] New owner for device {udid}: {user_id}");
        Ok(true)
    }

    /// Update asset tag and/or notes of a device. At least one must be set
    pub fn update_device_details(
        &self,
        udid: &str,
        asset_tag: Option<&str>,
        notes: Option<&str>,
    ) -> Result<bool, JamfError> {
        if asset_tag.is_none() && notes.is_none() {
            error!("[jamf] No details given to update device {udid}");
            return Err(JamfError::EmptyPayload);
        }

        let payload = DetailsRequest { asset_tag, notes };
        let request = self.post(&format!("devices/{udid}/details")).json(&payload);
        let res = self.send(request, "device details update")?;
        Ok(write_body(res, "device details update")?.is_some())
    }
}

#[cfg(test)]
mod tests {
    use crate::session::tests::{auth_header, mock_session};
    use httpmock::{
        Method::{GET, POST, PUT},
        MockServer,
    };
    use serde_json::json;
    use std::{fs::read_to_string, path::PathBuf};

    const UDID: &str = "a1b2c3d4e5f60718293a4b5c6d7e8f9012345678";

    fn fixture(name: &str) -> serde_json::Value {
        let mut test_location = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        test_location.push("tests/test_data");
        test_location.push(name);
        serde_json::from_str(&read_to_string(test_location).unwrap()).unwrap()
    }

    #[test]
    fn test_device_details() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path(format!("/devices/{UDID}"))
                .query_param("includeApps", "true")
                .header("authorization", auth_header());
            then.status(200).json_body(fixture("device_details.json"));
        });

        let session = mock_session(&server);
        let result = session.device_details(UDID, true).unwrap();
        mock.assert();
        assert_eq!(result.serial_number, "DMPLX1234567");
        assert_eq!(result.apps.unwrap()[0].name.as_deref(), Some("Keynote"));
    }

    #[test]
    #[should_panic(expected = "BadResponse")]
    fn test_device_details_unknown() {
        let server = MockServer::start();
        let _mock = server.mock(|when, then| {
            when.method(GET).path("/devices/unknown");
            then.status(404).json_body(json!({"code": 404, "message": "DeviceNotFound"}));
        });

        let session = mock_session(&server);
        let _ = session.device_details("unknown", false).unwrap();
    }

    #[test]
    fn test_device_details_by_serial() {
        let server = MockServer::start();
        let list = server.mock(|when, then| {
            when.method(GET)
                .path("/devices")
                .query_param("serialnumber", "DMPLX1234567");
            then.status(200).json_body(fixture("devices.json"));
        });
        let details = server.mock(|when, then| {
            when.method(GET)
                .path(format!("/devices/{UDID}"))
                .query_param("includeApps", "false");
            then.status(200).json_body(fixture("device_details.json"));
        });

        let session = mock_session(&server);
        let result = session
            .device_details_by_serial("DMPLX1234567", false)
            .unwrap()
            .unwrap();
        list.assert();
        details.assert();
        assert_eq!(result.udid, UDID);
    }

    #[test]
    fn test_assign_owner() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(PUT)
                .path(format!("/devices/{UDID}/owner"))
                .header("authorization", auth_header())
                .json_body(json!({"user": "42"}));
            then.status(200).json_body(json!({"code": 200, "message": "DeviceOwnerChanged"}));
        });

        let session = mock_session(&server);
        assert!(session.assign_owner(UDID, 42).unwrap());
        mock.assert();
    }

    #[test]
    fn test_assign_owner_rejected() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(PUT)
                .path(format!("/devices/{UDID}/owner"))
                .json_body(json!({"user": "0"}));
            then.status(404).json_body(json!({"code": 404, "message": "DeviceNotFound"}));
        });

        let session = mock_session(&server);
        assert!(!session.assign_owner(UDID, 0).unwrap());
        mock.assert();
    }

    #[test]
    fn test_update_device_details() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path(format!("/devices/{UDID}/details"))
                .json_body(json!({"assetTag": "INV-0042"}));
            then.status(200).json_body(json!({"code": 200, "message": "DeviceDetailsUpdated"}));
        });

        let session = mock_session(&server);
        assert!(session
            .update_device_details(UDID, Some("INV-0042"), None)
            .unwrap());
        mock.assert();
    }

    #[test]
    #[should_panic(expected = "EmptyPayload")]
    fn test_update_device_details_empty() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST);
            then.status(200);
        });

        let session = mock_session(&server);
        let result = session.update_device_details(UDID, None, None);
        mock.assert_hits(0);
        result.unwrap();
    }
}
