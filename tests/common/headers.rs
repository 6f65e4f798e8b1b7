#![allow(dead_code)]

use pankh_gatekeeper::Headers;
use pankh_gatekeeper::constants::header;

/// Case-insensitive lookup, as a browser would read the response.
pub fn header_value<'a>(headers: &'a Headers, name: &str) -> Option<&'a str> {
    headers
        .get(name)
        .or_else(|| {
            headers
                .iter()
                .find_map(|(key, value)| key.eq_ignore_ascii_case(name).then_some(value))
        })
        .map(String::as_str)
}

pub fn has_header(headers: &Headers, name: &str) -> bool {
    header_value(headers, name).is_some()
}

pub fn allow_origin(headers: &Headers) -> Option<&str> {
    header_value(headers, header::ACCESS_CONTROL_ALLOW_ORIGIN)
}

/// True only for the exact value browsers accept.
pub fn is_credentialed(headers: &Headers) -> bool {
    header_value(headers, header::ACCESS_CONTROL_ALLOW_CREDENTIALS) == Some("true")
}

/// `Vary` entries in emission order.
pub fn vary_entries(headers: &Headers) -> Vec<&str> {
    header_value(headers, header::VARY)
        .map(|value| value.split(',').map(str::trim).filter(|entry| !entry.is_empty()).collect())
        .unwrap_or_default()
}
