// src/bin/cli.rs
use challenge_tracker::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    cli::run_from_env()?;
    Ok(())
}
