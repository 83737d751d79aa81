//! YAML scenario files.
//!
//! A scenario file is a flat mapping of field key to value:
//!
//! ```yaml
//! sbiOrbitAltitudeKm: 300
//! salvoSize: 2
//! payloadCapacityPerVehicleKg: "45,000"
//! ```
//!
//! Values may be numbers or text; text goes through the same parser as
//! every other input source. Unknown keys are ignored with a warning.

use std::collections::BTreeMap;
use std::path::Path;

use color_eyre::eyre::WrapErr;
use sbicalc_core::{Assumptions, Field, RawInputs};
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
enum ScenarioValue {
    Number(f64),
    Text(String),
}

impl ScenarioValue {
    fn into_text(self) -> String {
        match self {
            ScenarioValue::Number(value) => value.to_string(),
            ScenarioValue::Text(text) => text,
        }
    }
}

/// Parse scenario YAML into raw field text
pub fn parse_scenario(yaml: &str) -> Result<RawInputs, serde_saphyr::Error> {
    let entries: BTreeMap<String, Option<ScenarioValue>> = serde_saphyr::from_str(yaml)?;

    let mut raw = RawInputs::default();
    for (key, value) in entries {
        if Field::from_key(&key).is_none() {
            tracing::warn!(key = %key, "Ignoring unknown scenario field");
            continue;
        }
        // An empty value stays empty so validation names the field
        raw.insert(key, value.map(ScenarioValue::into_text).unwrap_or_default());
    }
    Ok(raw)
}

/// Load a scenario file from disk
pub fn load_scenario(path: &Path) -> color_eyre::Result<RawInputs> {
    let yaml = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read scenario file {}", path.display()))?;
    let raw = parse_scenario(&yaml)
        .wrap_err_with(|| format!("Failed to parse scenario file {}", path.display()))?;

    tracing::info!(path = %path.display(), fields = raw.len(), "Loaded scenario file");
    Ok(raw)
}

/// Write validated assumptions as a scenario file
pub fn save_scenario(path: &Path, assumptions: &Assumptions) -> color_eyre::Result<()> {
    let yaml = serde_saphyr::to_string(assumptions).wrap_err("Failed to serialize scenario")?;
    std::fs::write(path, yaml)
        .wrap_err_with(|| format!("Failed to write scenario file {}", path.display()))?;

    tracing::info!(path = %path.display(), "Saved scenario file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sbicalc_core::normalize;
    use sbicalc_core::persist::merge_with_defaults;

    #[test]
    fn test_numbers_and_text_values() {
        let raw = parse_scenario(
            "sbiOrbitAltitudeKm: 450\naverageAccelerationG: 12.5\npayloadCapacityPerVehicleKg: \"60,000\"\n",
        )
        .unwrap();
        assert_eq!(raw.get("sbiOrbitAltitudeKm").map(String::as_str), Some("450"));
        assert_eq!(raw.get("averageAccelerationG").map(String::as_str), Some("12.5"));
        assert_eq!(
            raw.get("payloadCapacityPerVehicleKg").map(String::as_str),
            Some("60,000")
        );
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let raw = parse_scenario("salvoSize: 3\nwarpFactor: 9\n").unwrap();
        assert_eq!(raw.len(), 1);
        assert!(raw.contains_key("salvoSize"));
    }

    #[test]
    fn test_empty_value_reaches_validation() {
        let raw = parse_scenario("salvoSize:\n").unwrap();
        let normalized = normalize(&merge_with_defaults(&raw));
        assert_eq!(
            normalized.errors.messages(),
            vec!["Salvo size must be at least one missile."]
        );
    }

    #[test]
    fn test_load_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_scenario(&dir.path().join("missing.yaml")).is_err());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scenario.yaml");
        let assumptions = Assumptions::default().with(Field::SalvoSize, 4.0);

        save_scenario(&path, &assumptions).unwrap();
        let raw = load_scenario(&path).unwrap();
        assert_eq!(raw.len(), Field::ALL.len());

        let loaded = normalize(&raw).into_result().unwrap();
        assert_eq!(loaded, assumptions);
    }
}
