//! Snapshot build command handler.
//!
//! Runs one variant end to end: load the three inputs, build the
//! dataset, then write the artifact. The write happens only after the
//! whole dataset is serialized, so a failed build never leaves a
//! partial file behind.

use std::fs;

use anyhow::{Context, Result};

use aoedata::{ConstTable, DatFile, Dataset, StringTable};

use crate::paths::Variant;

/// Build and write the snapshot for one asset variant.
pub fn process(variant: &Variant) -> Result<()> {
    let strings = StringTable::load(&variant.strings)
        .with_context(|| format!("Failed to read string table {}", variant.strings.display()))?;

    let consts = match &variant.rms {
        Some(path) => Some(
            ConstTable::load(path)
                .with_context(|| format!("Failed to read RMS definitions {}", path.display()))?,
        ),
        None => None,
    };

    let dat = DatFile::parse(&variant.dat)
        .with_context(|| format!("Failed to parse archive {}", variant.dat.display()))?;

    let dataset = Dataset::build(&dat, &strings, consts.as_ref())
        .with_context(|| format!("Failed to build {} dataset", variant.label))?;
    let json = dataset.to_json().context("Failed to serialize dataset")?;

    if let Some(parent) = variant.target.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(&variant.target, json)
        .with_context(|| format!("Failed to write {}", variant.target.display()))?;

    println!(
        "{}: {} units/buildings, {} techs -> {}",
        variant.label,
        dataset.units_buildings.len(),
        dataset.techs.len(),
        variant.target.display()
    );
    Ok(())
}
