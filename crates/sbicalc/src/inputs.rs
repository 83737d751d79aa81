//! Input assembly.
//!
//! Sources are layered in a fixed order, later sources overriding earlier
//! ones: catalog defaults, scenario file, query string, `--set` overrides.
//! The merged text is then normalized in one pass so every validation
//! message is reported together.

use std::path::Path;

use color_eyre::eyre::{WrapErr, bail};
use sbicalc_core::persist::{default_inputs, parse_query_string};
use sbicalc_core::{Assumptions, Field, RawInputs, normalize};

use crate::scenario_file::load_scenario;

/// Merge every input source over the catalog defaults
pub fn assemble(
    scenario: Option<&Path>,
    query: Option<&str>,
    sets: &[(String, String)],
) -> color_eyre::Result<RawInputs> {
    let mut raw = default_inputs();

    if let Some(path) = scenario {
        raw.extend(load_scenario(path)?);
    }

    if let Some(query) = query {
        match parse_query_string(query) {
            Some(values) => {
                tracing::debug!(fields = values.len(), "Applying query string");
                raw.extend(values);
            }
            None => tracing::warn!("Query string names no known fields; ignoring it"),
        }
    }

    for (key, value) in sets {
        if Field::from_key(key).is_none() {
            bail!("Unknown field `{key}`. Run `sbicalc fields` to list the field keys.");
        }
        raw.insert(key.clone(), value.clone());
    }

    Ok(raw)
}

/// Normalize merged inputs, failing with every validation message
pub fn resolve(raw: &RawInputs) -> color_eyre::Result<Assumptions> {
    let normalized = normalize(raw);
    if !normalized.is_valid() {
        tracing::warn!(errors = normalized.errors.len(), "Scenario inputs failed validation");
    }
    normalized
        .into_result()
        .wrap_err("Scenario inputs are invalid")
}
