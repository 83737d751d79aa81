use clap::Parser;
use sbicalc::{Args, execute, init_logging};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    init_logging(&args.log_level)?;

    let mut stdout = std::io::stdout().lock();
    execute(&args, &mut stdout)?;

    tracing::debug!("Command finished");
    Ok(())
}
