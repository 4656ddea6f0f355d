use anyhow::Result;
use clap::Parser;
use project_packer::cli::Cli;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let _cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    project_packer::run()?;
    Ok(())
}
