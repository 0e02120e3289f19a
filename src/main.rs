use anyhow::{Context, Result};
use clap::Parser;
use std::{
    fs::File,
    io::{self, BufWriter},
    path::PathBuf,
};
use tracing_subscriber::EnvFilter;

use quintic_motion::{profile, ProfileConfig};

#[derive(Parser)]
#[command(
    name = "quintic-profile",
    about = "Print and export a quintic motion profile"
)]
struct Cli {
    /// Path to the configuration file (TOML or JSON). The reference 100 mm / 5 s
    /// profile is used when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Destination of the comma-separated export.
    #[arg(long, default_value = "motion_profile.csv")]
    output: PathBuf,

    /// Append a jerk column to the export.
    #[arg(long)]
    jerk: bool,

    /// Skip the console trace.
    #[arg(long)]
    quiet: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading profile from {}", path.display());
            ProfileConfig::from_file(path)?
        }
        None => ProfileConfig::default(),
    };
    if cli.jerk {
        config.export.jerk_column = true;
    }
    config.validate()?;

    let file = File::create(&cli.output)
        .with_context(|| format!("failed to create {}", cli.output.display()))?;
    let mut table = BufWriter::new(file);

    let report = if cli.quiet {
        profile::run(&config, &mut io::sink(), &mut table)?
    } else {
        profile::run(&config, &mut io::stdout().lock(), &mut table)?
    };

    tracing::info!(
        "{} exported ({} rows)",
        cli.output.display(),
        report.rows
    );
    Ok(())
}
