//! Subcommand execution.
//!
//! Results go to the supplied writer; diagnostics go through `tracing`.

use std::io::Write;

use color_eyre::eyre::{WrapErr, eyre};
use sbicalc_core::persist::to_query_string;
use sbicalc_core::{
    Assumptions, Catalog, SweepLimits, SweepRequest, SweepResult, default_range, evaluate, sweep,
};

use crate::cli::{Args, Command, SweepArgs};
use crate::export::export_sweep;
use crate::inputs::{assemble, resolve};
use crate::report::{format_field_value, render_fields, render_probe, render_report, render_sweep};
use crate::scenario_file::save_scenario;

/// Run the selected subcommand
pub fn execute(args: &Args, out: &mut impl Write) -> color_eyre::Result<()> {
    let catalog = Catalog::standard();

    if let Command::Fields = args.command {
        out.write_all(render_fields(&catalog).as_bytes())?;
        return Ok(());
    }

    let raw = assemble(args.scenario.as_deref(), args.query.as_deref(), &args.sets)?;
    let assumptions = resolve(&raw)?;

    match &args.command {
        Command::Run { json } => run(&assumptions, *json, out),
        Command::Sweep(sweep_args) => run_sweep(&catalog, &assumptions, sweep_args, out),
        Command::Link => {
            writeln!(out, "?{}", to_query_string(&assumptions))?;
            Ok(())
        }
        Command::Save { path } => {
            save_scenario(path, &assumptions)?;
            writeln!(out, "{}", path.display())?;
            Ok(())
        }
        Command::Fields => Ok(()),
    }
}

fn run(assumptions: &Assumptions, json: bool, out: &mut impl Write) -> color_eyre::Result<()> {
    let report = evaluate(assumptions);

    let unavailable = report.unavailable();
    if !unavailable.is_empty() {
        tracing::warn!(count = unavailable.len(), metrics = ?unavailable, "Some metrics are unavailable");
    }
    tracing::info!(
        total_cost_billion = report.total_system_cost_billion,
        constellation = report.constellation_size,
        "Scenario evaluated"
    );

    if json {
        let text = serde_json::to_string_pretty(&report).wrap_err("Failed to serialize report")?;
        writeln!(out, "{text}")?;
    } else {
        out.write_all(render_report(&report).as_bytes())?;
    }
    Ok(())
}

/// Build the request, filling missing endpoints from the scenario value
fn sweep_request(catalog: &Catalog, assumptions: &Assumptions, args: &SweepArgs) -> SweepRequest {
    let (start, end) = match catalog.field(&args.field) {
        Some(spec) if args.start.is_none() || args.end.is_none() => {
            let (low, high) = default_range(spec, Some(assumptions));
            (
                args.start.clone().unwrap_or_else(|| low.to_string()),
                args.end.clone().unwrap_or_else(|| high.to_string()),
            )
        }
        _ => (
            args.start.clone().unwrap_or_default(),
            args.end.clone().unwrap_or_default(),
        ),
    };

    let defaults = SweepLimits::default();
    SweepRequest::new(args.field.clone(), args.metric, start, end).with_limits(SweepLimits {
        max_steps: args.max_steps.unwrap_or(defaults.max_steps),
        max_points: args.max_points.unwrap_or(defaults.max_points),
    })
}

fn run_sweep(
    catalog: &Catalog,
    assumptions: &Assumptions,
    args: &SweepArgs,
    out: &mut impl Write,
) -> color_eyre::Result<()> {
    let request = sweep_request(catalog, assumptions, args);
    tracing::info!(
        field = %request.field,
        metric = %request.metric,
        start = %request.range_start,
        end = %request.range_end,
        "Starting sweep"
    );

    let result = sweep(catalog, Some(assumptions), &request)
        .wrap_err_with(|| format!("Cannot sweep {}", request.field))?;
    report_sweep(catalog, &result, args, out)
}

fn report_sweep(
    catalog: &Catalog,
    result: &SweepResult,
    args: &SweepArgs,
    out: &mut impl Write,
) -> color_eyre::Result<()> {
    let spec = catalog
        .field(result.field)
        .ok_or_else(|| eyre!("Sweep returned unknown field {}", result.field))?;

    if let Some(warning) = &result.warning {
        tracing::warn!(skipped = result.skipped, "{warning}");
    }
    tracing::info!(
        points = result.points.len(),
        first = %format_field_value(spec, result.x_range.min),
        last = %format_field_value(spec, result.x_range.max),
        "Sweep complete"
    );

    if args.json {
        let text = serde_json::to_string_pretty(result).wrap_err("Failed to serialize sweep")?;
        writeln!(out, "{text}")?;
    } else {
        out.write_all(render_sweep(spec, result).as_bytes())?;
    }

    if let Some(probe) = args.probe {
        out.write_all(render_probe(spec, result, probe).as_bytes())?;
    }

    if let Some(path) = &args.export {
        let written = export_sweep(path, result)?;
        writeln!(out, "Exported to {}", written.display())?;
    }
    Ok(())
}
