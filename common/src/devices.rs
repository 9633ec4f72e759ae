use crate::{
    lenient::{int_flag, int_or_string, one_or_first, string_or_number, string_or_value},
    users::VppStatus,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A managed device as returned by `/devices` and `/devices/{udid}`
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    #[serde(rename = "UDID")]
    pub udid: String,
    pub serial_number: String,
    #[serde(default, deserialize_with = "int_or_string")]
    pub location_id: Option<i64>,
    pub asset_tag: Option<String>,
    #[serde(rename = "class")]
    pub device_class: Option<String>,
    pub in_trash: Option<bool>,
    #[serde(default, deserialize_with = "one_or_first")]
    pub model: Option<DeviceModel>,
    #[serde(default, deserialize_with = "one_or_first")]
    pub os: Option<DeviceOs>,
    pub name: Option<String>,
    #[serde(default, deserialize_with = "one_or_first")]
    pub owner: Option<DeviceOwner>,
    pub is_managed: Option<bool>,
    pub is_supervised: Option<bool>,
    pub is_bootstrap_stored: Option<bool>,
    /// Documented as `deviceEnrollType`
    #[serde(alias = "deviceEnrollType")]
    pub enroll_type: Option<String>,
    /// Documented as `deviceDepProfile`
    #[serde(alias = "deviceDepProfile")]
    pub dep_profile: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub battery_level: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub total_capacity: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub available_capacity: Option<String>,
    pub has_passcode: Option<bool>,
    pub passcode_compliant: Option<bool>,
    pub hardware_encryption_enabled: Option<bool>,
    #[serde(rename = "iTunesStoreLoggedIn")]
    pub itunes_store_logged_in: Option<bool>,
    #[serde(rename = "iCloudBackupEnabled")]
    pub icloud_backup_enabled: Option<bool>,
    #[serde(rename = "iCloudBackupLatest")]
    pub icloud_backup_latest: Option<String>,
    pub group_ids: Option<Vec<i64>>,
    pub groups: Option<Vec<String>>,
    #[serde(rename = "WiFiMAC")]
    pub wifi_mac: Option<String>,
    #[serde(rename = "bluetoothMAC")]
    pub bluetooth_mac: Option<String>,
    #[serde(rename = "IPAddress")]
    pub ip_address: Option<String>,
    #[serde(default, deserialize_with = "one_or_first")]
    pub region: Option<DeviceRegion>,
    /// Only present when the installed apps were requested
    pub apps: Option<Vec<App>>,
    pub notes: Option<String>,
    pub last_checkin: Option<LastCheckin>,
    pub modified: Option<String>,
    pub network_information: Option<NetworkInformation>,
}

impl Device {
    /// Wi-Fi MAC address, preferring the network information block
    pub fn wifi_mac_address(&self) -> Option<&str> {
        if let Some(info) = &self.network_information {
            if let Some(mac) = &info.wifi_mac {
                return Some(mac);
            }
        }
        self.wifi_mac.as_deref()
    }
}

/// Return the first device with the provided serial number
pub fn find_by_serial<'a>(devices: &'a [Device], serial_number: &str) -> Option<&'a Device> {
    devices
        .iter()
        .find(|device| device.serial_number == serial_number)
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct DeviceModel {
    pub name: Option<String>,
    pub identifier: Option<String>,
    #[serde(rename = "type", default, deserialize_with = "string_or_value")]
    pub model_type: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct DeviceOs {
    pub prefix: Option<String>,
    pub version: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DeviceOwner {
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "int_or_string")]
    pub location_id: Option<i64>,
    pub in_trash: Option<bool>,
    pub device_count: Option<i64>,
    pub username: Option<String>,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub group_ids: Option<Vec<i64>>,
    pub groups: Option<Vec<String>>,
    pub teacher_groups: Option<Vec<Value>>,
    pub children: Option<Vec<Value>>,
    pub vpp: Option<Vec<VppStatus>>,
    pub notes: Option<String>,
    pub modified: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct DeviceRegion {
    #[serde(rename = "string")]
    pub name: Option<String>,
    pub coordinates: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct App {
    pub name: Option<String>,
    pub vendor: Option<String>,
    pub identifier: Option<String>,
    pub version: Option<String>,
    pub icon: Option<String>,
}

/// Last check-in is either a plain timestamp or a PHP style date object
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum LastCheckin {
    Detailed(CheckinDate),
    Text(String),
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct CheckinDate {
    pub date: Option<String>,
    pub timezone_type: Option<i64>,
    pub timezone: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct NetworkInformation {
    #[serde(rename = "IPAddress")]
    pub ip_address: Option<String>,
    #[serde(rename = "isNetworkTethered", default, deserialize_with = "int_flag")]
    pub is_network_tethered: Option<i64>,
    #[serde(rename = "BluetoothMAC")]
    pub bluetooth_mac: Option<String>,
    #[serde(rename = "WiFiMAC")]
    pub wifi_mac: Option<String>,
    #[serde(rename = "VoiceRoamingEnabled", default, deserialize_with = "int_flag")]
    pub voice_roaming_enabled: Option<i64>,
    #[serde(rename = "DataRoamingEnabled", default, deserialize_with = "int_flag")]
    pub data_roaming_enabled: Option<i64>,
    #[serde(rename = "PersonalHotspotEnabled", default, deserialize_with = "int_flag")]
    pub personal_hotspot_enabled: Option<i64>,
    #[serde(rename = "ServiceSubscription")]
    pub service_subscription: Option<Vec<ServiceSubscription>>,
}

/// Cellular subscription slot reported by the device
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ServiceSubscription {
    #[serde(rename = "CarrierSettingsVersion")]
    pub carrier_settings_version: Option<String>,
    #[serde(rename = "CurrentCarrierNetwork")]
    pub current_carrier_network: Option<String>,
    #[serde(rename = "CurrentMCC")]
    pub current_mcc: Option<String>,
    #[serde(rename = "CurrentMNC")]
    pub current_mnc: Option<String>,
    #[serde(rename = "EID")]
    pub eid: Option<String>,
    #[serde(rename = "ICCID")]
    pub iccid: Option<String>,
    #[serde(rename = "IMEI")]
    pub imei: Option<String>,
    #[serde(rename = "MEID")]
    pub meid: Option<String>,
    #[serde(rename = "IsDataPreferred")]
    pub is_data_preferred: Option<bool>,
    #[serde(rename = "IsRoaming")]
    pub is_roaming: Option<bool>,
    #[serde(rename = "IsVoicePreferred")]
    pub is_voice_preferred: Option<bool>,
    #[serde(rename = "Label")]
    pub label: Option<String>,
    #[serde(rename = "LabelID")]
    pub label_id: Option<String>,
    #[serde(rename = "PhoneNumber")]
    pub phone_number: Option<String>,
    #[serde(rename = "Slot")]
    pub slot: Option<String>,
}
