use crate::error::JamfError;
use log::{error, info, warn};
use reqwest::{blocking::Response, StatusCode};
use serde::{de::DeserializeOwned, Deserialize};
use serde_json::Value;

/// Error body Jamf School sends with rejected requests
#[derive(Deserialize, Debug, Default)]
pub(crate) struct VendorError {
    pub(crate) code: Option<Value>,
    pub(crate) message: Option<String>,
}

/// Format the vendor error body for logging. Falls back to the raw body
pub(crate) fn vendor_message(body: &str) -> String {
    let vendor: VendorError = match serde_json::from_str(body) {
        Ok(result) => result,
        Err(_err) => return body.to_string(),
    };

    match (vendor.code, vendor.message) {
        (Some(code), Some(message)) => format!("{code}: {message}"),
        (None, Some(message)) => message,
        _ => body.to_string(),
    }
}

/// Read the body of a response to a read request. Anything but 200 is an error
pub(crate) fn read_body(res: Response, what: &str) -> Result<String, JamfError> {
    let status = res.status();
    let body = match res.text() {
        Ok(result) => result,
        Err(err) => {
            error!("[jamf] Failed to read {what} response: {err:?}");
            return Err(JamfError::Request);
        }
    };

    if status != StatusCode::OK {
        error!("[jamf] {what} returned {status}: {body}");
        return Err(JamfError::BadResponse {
            status: status.as_u16(),
            body,
        });
    }
    Ok(body)
}

/// Read the body of a response to a write request.
///
/// A rejected write is logged with the vendor message and returns `None`
pub(crate) fn write_body(res: Response, what: &str) -> Result<Option<String>, JamfError> {
    let status = res.status();
    let body = match res.text() {
        Ok(result) => result,
        Err(err) => {
            error!("[jamf] Failed to read {what} response: {err:?}");
            return Err(JamfError::Request);
        }
    };

    if status != StatusCode::OK {
        error!("[jamf] {what} rejected ({status}): {}", vendor_message(&body));
        return Ok(None);
    }
    Ok(Some(body))
}

fn parse_value(body: &str) -> Result<Value, JamfError> {
    match serde_json::from_str(body) {
        Ok(result) => Ok(result),
        Err(err) => {
            error!("[jamf] Response is not JSON: {err:?}");
            Err(JamfError::Deserialize)
        }
    }
}

/// Decode the array stored under `key`.
///
/// Entries that do not fit the record type are logged and skipped so one bad
/// record does not hide the others.
pub(crate) fn parse_list<T: DeserializeOwned>(
    body: &str,
    key: &'static str,
) -> Result<Vec<T>, JamfError> {
    let mut value = parse_value(body)?;
    let entries = match value.get_mut(key).map(Value::take) {
        Some(Value::Array(entries)) => entries,
        Some(Value::Null) | None => {
            error!("[jamf] Response has no {key} list");
            return Err(JamfError::MissingKey(key));
        }
        Some(other) => {
            error!("[jamf] Expected {key} to be a list, got: {other}");
            return Err(JamfError::Deserialize);
        }
    };

    let total = entries.len();
    let mut records = Vec::with_capacity(total);
    for entry in entries {
        match serde_json::from_value::<T>(entry.clone()) {
            Ok(record) => records.push(record),
            Err(err) => warn!("[jamf] Skipping malformed {key} entry: {err}. Entry: {entry}"),
        }
    }

    if records.len() != total {
        info!(
            "[jamf] Parsed {} of {total} {key} entries",
            records.len()
        );
    }
    Ok(records)
}

/// Decode the single record stored under `key`
pub(crate) fn parse_record<T: DeserializeOwned>(
    body: &str,
    key: &'static str,
) -> Result<T, JamfError> {
    let mut value = parse_value(body)?;
    let entry = match value.get_mut(key).map(Value::take) {
        Some(Value::Null) | None => {
            error!("[jamf] Response has no {key}");
            return Err(JamfError::MissingKey(key));
        }
        Some(entry) => entry,
    };

    match serde_json::from_value(entry) {
        Ok(result) => Ok(result),
        Err(err) => {
            error!("[jamf] Could not deserialize {key}: {err:?}");
            Err(JamfError::Deserialize)
        }
    }
}

/// Id of a newly created resource, if the response carries one
pub(crate) fn created_id(body: &str) -> Option<i64> {
    let value: Value = serde_json::from_str(body).ok()?;
    match value.get("id")? {
        Value::Number(id) => id.as_i64(),
        Value::String(id) => id.parse().ok(),
        _ => None,
    }
}
