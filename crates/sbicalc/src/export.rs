//! Sweep export to CSV or JSON.

use std::path::{Path, PathBuf};

use color_eyre::eyre::{WrapErr, bail};
use sbicalc_core::SweepResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }

    fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "csv" => Some(ExportFormat::Csv),
            "json" => Some(ExportFormat::Json),
            _ => None,
        }
    }
}

/// `<metric>-vs-<field>-<YYYY-MM-DD>`, without extension
pub fn default_file_stem(result: &SweepResult, date: jiff::civil::Date) -> String {
    format!("{}-vs-{}-{date}", result.metric.key(), result.field)
}

/// Choose the export destination.
///
/// A directory receives a dated default file name in CSV; anything else must
/// carry a `.csv` or `.json` extension.
pub fn resolve_target(path: &Path, result: &SweepResult) -> color_eyre::Result<(PathBuf, ExportFormat)> {
    if path.is_dir() {
        let today = jiff::Zoned::now().date();
        let format = ExportFormat::Csv;
        let name = format!("{}.{}", default_file_stem(result, today), format.extension());
        return Ok((path.join(name), format));
    }

    match ExportFormat::from_path(path) {
        Some(format) => Ok((path.to_path_buf(), format)),
        None => bail!(
            "Cannot infer export format from {}; use a .csv or .json extension",
            path.display()
        ),
    }
}

/// Two columns named by the field and metric keys, one row per sample
pub fn to_csv(result: &SweepResult) -> color_eyre::Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record([result.field, result.metric.key()])?;
    for point in &result.points {
        writer.write_record([point.x.to_string(), point.y.to_string()])?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|err| err.into_error())
        .wrap_err("Failed to flush CSV")?;
    String::from_utf8(bytes).wrap_err("CSV output is not UTF-8")
}

pub fn to_json(result: &SweepResult) -> color_eyre::Result<String> {
    serde_json::to_string_pretty(result).wrap_err("Failed to serialize sweep")
}

/// Write `result` under `path`, returning the file actually written
pub fn export_sweep(path: &Path, result: &SweepResult) -> color_eyre::Result<PathBuf> {
    let (target, format) = resolve_target(path, result)?;
    let contents = match format {
        ExportFormat::Csv => to_csv(result)?,
        ExportFormat::Json => to_json(result)?,
    };
    std::fs::write(&target, contents)
        .wrap_err_with(|| format!("Failed to write {}", target.display()))?;

    tracing::info!(
        path = %target.display(),
        format = format.extension(),
        points = result.points.len(),
        "Exported sweep"
    );
    Ok(target)
}
