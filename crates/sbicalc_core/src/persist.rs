//! Flat key/value persistence of assumption sets, as used by shareable links.

use crate::catalog::Field;
use crate::model::{Assumptions, RawInputs};

/// Shortest decimal text that parses back to `value`
fn format_value(value: f64) -> String {
    // Display for f64 is round-trip exact and never uses exponent notation
    let text = value.to_string();
    if text == "-0" { "0".to_string() } else { text }
}

/// One `(key, value)` pair per field in catalog order, skipping unavailable
/// values
#[must_use]
pub fn to_query_pairs(assumptions: &Assumptions) -> Vec<(String, String)> {
    Field::ALL
        .into_iter()
        .filter_map(|field| {
            let value = assumptions.get(field);
            value
                .is_finite()
                .then(|| (field.key().to_string(), format_value(value)))
        })
        .collect()
}

/// `key=value&key=value` form of [`to_query_pairs`]
#[must_use]
pub fn to_query_string(assumptions: &Assumptions) -> String {
    to_query_pairs(assumptions)
        .into_iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join("&")
}

/// Decode `%XX` escapes and `+` as space; malformed escapes are kept verbatim
fn percent_decode(text: &str) -> String {
    let bytes = text.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => out.push(b' '),
            b'%' if i + 2 < bytes.len() => {
                let escaped = std::str::from_utf8(&bytes[i + 1..i + 3])
                    .ok()
                    .and_then(|hex| u8::from_str_radix(hex, 16).ok());
                match escaped {
                    Some(byte) => {
                        out.push(byte);
                        i += 2;
                    }
                    None => out.push(b'%'),
                }
            }
            byte => out.push(byte),
        }
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

/// Raw inputs carried by a query string.
///
/// Accepts an optional leading `?`. Unknown keys and empty values are
/// ignored; returns `None` when no known field was present.
#[must_use]
pub fn parse_query_string(query: &str) -> Option<RawInputs> {
    let query = query.strip_prefix('?').unwrap_or(query);
    let raw: RawInputs = query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .filter_map(|(key, value)| {
            let key = percent_decode(key);
            let value = percent_decode(value);
            (Field::from_key(&key).is_some() && !value.trim().is_empty()).then_some((key, value))
        })
        .collect();
    (!raw.is_empty()).then_some(raw)
}

/// Catalog default text for every field
#[must_use]
pub fn default_inputs() -> RawInputs {
    Field::ALL
        .into_iter()
        .map(|field| (field.key().to_string(), field.spec().default_value.to_string()))
        .collect()
}

/// Overlay `raw` on the catalog defaults. Keys that name no field are dropped.
#[must_use]
pub fn merge_with_defaults(raw: &RawInputs) -> RawInputs {
    let mut merged = default_inputs();
    for (key, value) in raw {
        if Field::from_key(key).is_some() {
            merged.insert(key.clone(), value.clone());
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_string_uses_catalog_order() {
        let query = to_query_string(&Assumptions::default());
        assert!(query.starts_with("sbiOrbitAltitudeKm=300&averageAccelerationG=15&"));
        assert!(query.ends_with("&launchLearningPercent=95"));
        assert_eq!(query.split('&').count(), Field::ALL.len());
    }

    #[test]
    fn test_pairs_skip_unavailable_values() {
        let a = Assumptions::default().with(Field::SalvoSize, f64::NAN);
        let pairs = to_query_pairs(&a);
        assert_eq!(pairs.len(), Field::ALL.len() - 1);
        assert!(pairs.iter().all(|(key, _)| key != "salvoSize"));
    }

    #[test]
    fn test_parse_query_string() {
        let raw = parse_query_string("?salvoSize=12&bogus=3&flyoutTimeSeconds=&maxDeltaVKmPerS=7.5")
            .unwrap();
        assert_eq!(raw.len(), 2);
        assert_eq!(raw.get("salvoSize").map(String::as_str), Some("12"));
        assert_eq!(raw.get("maxDeltaVKmPerS").map(String::as_str), Some("7.5"));
    }

    #[test]
    fn test_parse_query_string_decodes_escapes() {
        let raw = parse_query_string("payloadCapacityPerVehicleKg=45%2C000").unwrap();
        assert_eq!(
            raw.get("payloadCapacityPerVehicleKg").map(String::as_str),
            Some("45,000")
        );
    }

    #[test]
    fn test_parse_query_string_without_known_keys() {
        assert!(parse_query_string("").is_none());
        assert!(parse_query_string("?").is_none());
        assert!(parse_query_string("foo=1&bar=2").is_none());
        assert!(parse_query_string("salvoSize=").is_none());
    }

    #[test]
    fn test_merge_with_defaults() {
        let mut raw = RawInputs::default();
        raw.insert("salvoSize".into(), "4".into());
        raw.insert("unknown".into(), "1".into());
        let merged = merge_with_defaults(&raw);
        assert_eq!(merged.len(), Field::ALL.len());
        assert_eq!(merged.get("salvoSize").map(String::as_str), Some("4"));
        assert_eq!(merged.get("thrusterIspSeconds").map(String::as_str), Some("240"));
    }
}
