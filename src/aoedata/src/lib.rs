//! # aoedata
//!
//! Age of Empires II: Definitive Edition dataset snapshot library.
//!
//! This library provides functionality to:
//! - Load the decoded Genie archive object graph (units, civs, techs)
//! - Parse the game's key-value localization string table
//! - Scan random-map-script definitions for object-id constants
//! - Normalize units, buildings and techs into a flat, localizable schema
//! - Serialize the combined dataset as stable, tab-indented JSON
//!
//! ## Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let dat = aoedata::DatFile::parse(Path::new("empires2_x2_p1.dat"))?;
//! let strings = aoedata::StringTable::load(Path::new("key-value-strings-utf8.txt"))?;
//! let consts = aoedata::ConstTable::load(Path::new("random_map.def"))?;
//!
//! let dataset = aoedata::Dataset::build(&dat, &strings, Some(&consts))?;
//! println!("{}", dataset.to_json()?);
//! # Ok(())
//! # }
//! ```

pub mod dat;
pub mod dataset;
pub mod normalize;
pub mod rms;
pub mod round;
pub mod strings;

// Re-export commonly used items
#[doc(inline)]
pub use dat::{Armour, Civ, CombatStats, Creatable, DatError, DatFile, ResourceCost, Tech, Unit};
#[doc(inline)]
pub use dataset::{Dataset, DatasetError};
#[doc(inline)]
pub use normalize::{tech_entry, unit_entry, Cost, TechEntry, UnitEntry};
#[doc(inline)]
pub use rms::ConstTable;
#[doc(inline)]
pub use round::{round_float, Rounded};
#[doc(inline)]
pub use strings::{StringTable, StringTableError};
