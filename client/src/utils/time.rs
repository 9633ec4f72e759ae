use chrono::Local;

/// Local time stamp written into the notes of created accounts
pub(crate) fn creation_timestamp() -> String {
    Local::now().format("%Y-%m-%d_%H-%M").to_string()
}
