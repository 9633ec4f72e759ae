use log::error;

/// Prefixes dropped from names before the first token is taken
const NAME_PREFIXES: [&str; 2] = ["Dr. ", "von "];

/// Build a Jamf School login as `{prefix}-{first}{last}`.
///
/// Only the first space or hyphen separated token of each name is used and
/// German umlauts, `ß` and accented `e` are spelled out in ASCII. Returns an
/// empty string when any input is missing.
pub fn generate_username(
    location_prefix: Option<&str>,
    first_name: Option<&str>,
    last_name: Option<&str>,
) -> String {
    let inputs = [
        ("location_prefix", location_prefix),
        ("first_name", first_name),
        ("last_name", last_name),
    ];
    for (field, value) in inputs {
        if value.is_none() {
            error!("[jamf] {field} is required to create a jamf username string");
            return String::new();
        }
    }

    let prefix = transliterate(location_prefix.unwrap_or_default());
    let first = first_token(first_name.unwrap_or_default());
    let last = first_token(last_name.unwrap_or_default());

    transliterate(&format!("{prefix}-{first}{last}"))
}

/// Remove name prefixes and keep everything before the first space or hyphen
fn first_token(name: &str) -> String {
    let mut cleaned = name.to_string();
    for prefix in NAME_PREFIXES {
        cleaned = cleaned.replace(prefix, "");
    }

    cleaned
        .split([' ', '-'])
        .next()
        .unwrap_or_default()
        .to_string()
}

/// Spell out characters that are not allowed in a login
fn transliterate(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    for character in value.chars() {
        match character {
            'ä' => result.push_str("ae"),
            'ü' => result.push_str("ue"),
            'ö' => result.push_str("oe"),
            'Ä' => result.push_str("Ae"),
            'Ü' => result.push_str("Ue"),
            'Ö' => result.push_str("Oe"),
            'ß' => result.push_str("ss"),
            'é' | 'è' | 'ê' => result.push('e'),
            _ => result.push(character),
        }
    }
    result
}
