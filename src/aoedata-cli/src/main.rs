mod extract;
mod paths;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

/// Produce the units/buildings/techs JSON snapshots for an Age of
/// Empires II: Definitive Edition installation.
///
/// Always builds both asset sets: the base game and the Return of Rome
/// mode. Artifacts land under ./data/.
#[derive(Parser)]
#[command(name = "aoedata")]
#[command(about = "Update data files for DE and RoR", long_about = None)]
struct Cli {
    /// Root of the game installation
    aoe2_dir: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    for variant in paths::variants(&cli.aoe2_dir) {
        extract::process(&variant)?;
    }

    Ok(())
}
