/// Normalize a hardware serial number.
///
/// Serial numbers scanned from a box barcode carry a leading `S`, which is
/// dropped. The remainder must be 12 upper case alphanumeric characters.
pub fn parse_serial_number(input: &str) -> Option<String> {
    let trimmed = input.trim();
    let serial = trimmed.strip_prefix('S').unwrap_or(trimmed);

    if serial.len() != 12 {
        return None;
    }
    if !serial
        .chars()
        .all(|character| character.is_ascii_uppercase() || character.is_ascii_digit())
    {
        return None;
    }

    Some(serial.to_string())
}
