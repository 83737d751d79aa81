//! Plain-text rendering of scenario reports, catalogs and sweeps.
//!
//! Unavailable quantities render as `--`.

use sbicalc_core::{Catalog, FieldSpec, MetricsReport, SamplePoint, SweepResult};

const UNAVAILABLE: &str = "--";

/// Group the integer digits of an already formatted number with commas
fn group_thousands(formatted: &str) -> String {
    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac)) => (int_part, Some(frac)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(formatted.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    match frac_part {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Format with a fixed number of decimals and thousands separators
pub fn format_number(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return UNAVAILABLE.to_string();
    }
    let rounded = format!("{value:.decimals$}");
    // Avoid "-0" and "-0.0" for values that round to zero
    let rounded = match rounded.strip_prefix('-') {
        Some(rest) if rest.chars().all(|c| c == '0' || c == '.') => rest.to_string(),
        _ => rounded,
    };
    group_thousands(&rounded)
}

fn with_unit(value: f64, decimals: usize, unit: &str) -> String {
    if !value.is_finite() {
        return UNAVAILABLE.to_string();
    }
    format!("{} {unit}", format_number(value, decimals))
}

/// Compact USD from a value in millions: `$850.0M`, `$104.43B`
pub fn format_usd_millions(value: f64) -> String {
    if !value.is_finite() {
        return UNAVAILABLE.to_string();
    }
    if value.abs() >= 1000.0 {
        format!("${}B", format_number(value / 1000.0, 2))
    } else {
        format!("${}M", format_number(value, 1))
    }
}

/// Kilograms below one tonne, tonnes above
pub fn format_mass(kg: f64) -> String {
    if !kg.is_finite() {
        return UNAVAILABLE.to_string();
    }
    if kg >= 1000.0 {
        with_unit(kg / 1000.0, 1, "t")
    } else {
        with_unit(kg, 1, "kg")
    }
}

/// A value of the given field at the field's own precision
pub fn format_field_value(spec: &FieldSpec, value: f64) -> String {
    format_number(value, spec.decimals() as usize)
}

fn section(out: &mut String, title: &str, rows: &[(&str, String)]) {
    let width = rows.iter().map(|(label, _)| label.chars().count()).max().unwrap_or(0);
    out.push_str(&format!("{title}\n"));
    for (label, value) in rows {
        out.push_str(&format!("  {label:<width$}  {value}\n"));
    }
    out.push('\n');
}

/// Render the full scenario report
pub fn render_report(report: &MetricsReport) -> String {
    let r = report;
    let mut out = String::new();

    section(
        &mut out,
        "Cost",
        &[
            ("Total system cost", format_usd_millions(r.total_system_cost_million)),
            ("Non-recurring development", format_usd_millions(r.non_recurring_million)),
            ("Interceptor procurement", format_usd_millions(r.total_procurement_cost_million)),
            ("Launch", format_usd_millions(r.total_launch_cost_million)),
            ("Operations and support", format_usd_millions(r.operations_cost_million)),
            ("Launch campaign (per generation)", format_usd_millions(r.launch_campaign_cost_million)),
            ("Average interceptor unit cost", format_usd_millions(r.average_procurement_unit_cost_million)),
            ("Average launch cost", format_usd_millions(r.average_launch_cost_million)),
            ("Cumulative production cost", format_usd_millions(r.production_cost_million)),
        ],
    );

    section(
        &mut out,
        "Interceptor",
        &[
            ("Interceptor mass", format_mass(r.interceptor_mass_kg)),
            ("Dry mass", format_mass(r.interceptor_dry_mass_kg)),
            ("Kill vehicle propellant", format_mass(r.kill_vehicle_propellant_mass_kg)),
            ("Interceptor propellant", format_mass(r.interceptor_propellant_mass_kg)),
            ("ΔV margin after divert", with_unit(r.delta_v_margin_km_per_s, 2, "km/s")),
        ],
    );

    let flyout_range = match &r.flyout_range_message {
        Some(message) => message.clone(),
        None => with_unit(r.interceptor_flyout_range_km, 1, "km"),
    };
    section(
        &mut out,
        "Kinematics and coverage",
        &[
            ("Average acceleration", with_unit(r.average_acceleration_g, 1, "g")),
            ("", with_unit(r.average_acceleration_m_s2, 1, "m/s²")),
            ("Time to max velocity", with_unit(r.time_to_reach_max_velocity_seconds, 0, "s")),
            ("Flyout time", with_unit(r.flyout_time_seconds, 0, "s")),
            ("Flyout range", flyout_range),
            ("Coverage radius", with_unit(r.coverage_radius_km, 1, "km")),
            ("Earth coverage", with_unit(r.earth_coverage_sq_km, 0, "km²")),
            ("SBI orbit altitude", with_unit(r.sbi_orbit_altitude_km, 0, "km")),
            ("Intercept altitude", with_unit(r.intercept_altitude_km, 0, "km")),
            ("Max latitude coverage", with_unit(r.max_latitude_coverage_deg, 1, "deg")),
        ],
    );

    section(
        &mut out,
        "Constellation",
        &[
            ("Interceptors per threat", format_number(r.interceptors_per_threat, 0)),
            ("Interceptors per salvo", format_number(r.interceptors_per_salvo, 0)),
            (
                "Composite kill probability",
                with_unit(r.composite_kill_probability_percent, 1, "%"),
            ),
            (
                "Requested composite Pk",
                with_unit(r.requested_composite_kill_probability_percent, 1, "%"),
            ),
            ("Constellation size", format_number(r.constellation_size, 0)),
            ("Generations", format_number(r.interceptor_replacements, 0)),
            ("Total interceptors", format_number(r.total_interceptors, 0)),
            ("Interceptors per year", format_number(r.interceptors_per_year, 1)),
            ("SBI life expectancy", with_unit(r.sbi_life_expectancy_years, 0, "yrs")),
            ("Cost estimate period", with_unit(r.cost_estimate_period_years, 0, "yrs")),
        ],
    );

    section(
        &mut out,
        "Launch",
        &[
            ("Interceptors per launch", format_number(r.interceptors_per_launch, 0)),
            ("Launches per generation", format_number(r.launch_count, 0)),
            ("Payload utilization", format_mass(r.payload_utilization_kg)),
            ("", with_unit(r.payload_utilization_percent, 1, "%")),
            ("Total payload to orbit", format_mass(r.total_payload_to_orbit_kg)),
        ],
    );

    out.truncate(out.trim_end().len());
    out.push('\n');
    out
}

/// Render the field catalog grouped by section
pub fn render_fields(catalog: &Catalog) -> String {
    let mut out = String::new();
    for section in sbicalc_core::Section::ALL {
        out.push_str(&format!("{}\n", section.title()));
        for spec in catalog.section_fields(section) {
            let bound = |b: Option<f64>| b.map_or_else(|| "-".to_string(), |v| format_field_value(spec, v));
            out.push_str(&format!(
                "  {:<36} {:<40} default {:<8} range {}..{} step {}\n",
                spec.key,
                spec.label_with_unit(),
                spec.default_value,
                bound(spec.min),
                bound(spec.max),
                spec.step,
            ));
        }
    }
    out
}

fn render_point(out: &mut String, spec: &FieldSpec, point: &SamplePoint) {
    out.push_str(&format!(
        "  {:>14}  {:>16}\n",
        format_field_value(spec, point.x),
        format_number(point.y, 2),
    ));
}

/// Render a sweep as a two-column table
pub fn render_sweep(spec: &FieldSpec, result: &SweepResult) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{} vs {} ({} points, step {})\n",
        result.metric.label(),
        spec.label_with_unit(),
        result.points.len(),
        spec.step,
    ));
    if let Some(warning) = &result.warning {
        out.push_str(&format!("warning: {warning}\n"));
    }
    out.push_str(&format!("  {:>14}  {:>16}\n", spec.key, result.metric.key()));
    for point in &result.points {
        render_point(&mut out, spec, point);
    }
    out.push_str(&format!(
        "x domain {}..{}  y domain {}..{}\n",
        format_number(result.x_domain.min, spec.decimals() as usize),
        format_number(result.x_domain.max, spec.decimals() as usize),
        format_number(result.y_domain.min, 2),
        format_number(result.y_domain.max, 2),
    ));
    out
}

/// Render the readout for the sample nearest a probe value
pub fn render_probe(spec: &FieldSpec, result: &SweepResult, probe: f64) -> String {
    match result.nearest(probe) {
        Some(point) => format!(
            "Nearest to {}: {} = {}, {} = {}\n",
            format_field_value(spec, probe),
            spec.label,
            format_field_value(spec, point.x),
            result.metric.label(),
            format_number(point.y, 2),
        ),
        None => format!("Nearest to {}: {UNAVAILABLE}\n", format_field_value(spec, probe)),
    }
}
