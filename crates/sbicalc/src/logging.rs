use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging to stderr.
///
/// Stdout carries command results only, so diagnostics never mix with
/// exported or piped data. The level can be controlled via the `level`
/// parameter or the `RUST_LOG` environment variable.
pub fn init_logging(level: &str) -> color_eyre::Result<()> {
    let default_filter = format!("sbicalc={level},sbicalc_core=warn");
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false),
        )
        .try_init()?;

    tracing::debug!(level, "Logging initialized");
    Ok(())
}
