//! Dataset assembly and serialization.
//!
//! Ties the pieces together: normalize every unit and tech out of the
//! archive graph, then enrich each record with its localized name and
//! (units only) its random-map-script constant.

use std::io::Write;

use indexmap::IndexMap;
use serde::Serialize;
use thiserror::Error;

use crate::dat::DatFile;
use crate::normalize::{tech_entry, unit_entry, TechEntry, UnitEntry};
use crate::rms::ConstTable;
use crate::strings::StringTable;

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("archive graph contains no civilizations")]
    NoCivilizations,
}

/// The complete snapshot: units and buildings keyed by decimal base id,
/// techs keyed by decimal list position. Insertion order follows the
/// archive and is preserved through serialization.
#[derive(Debug, Clone, Serialize)]
pub struct Dataset {
    pub units_buildings: IndexMap<String, UnitEntry>,
    pub techs: IndexMap<String, TechEntry>,
}

impl Dataset {
    /// Build the snapshot from a decoded archive graph.
    ///
    /// Units come from the first civilization's list (definitions are
    /// shared across factions); unused `null` slots contribute nothing.
    /// Every tech position contributes an entry, blank or not. The
    /// constant table is optional: without it every `rms_const` stays
    /// `null` and the lookup is skipped.
    pub fn build(
        dat: &DatFile,
        strings: &StringTable,
        consts: Option<&ConstTable>,
    ) -> Result<Dataset, DatasetError> {
        let civ = dat.civs.first().ok_or(DatasetError::NoCivilizations)?;

        let mut units_buildings = IndexMap::new();
        for unit in civ.units.iter().flatten() {
            units_buildings.insert(unit.base_id.to_string(), unit_entry(unit));
        }

        let mut techs = IndexMap::new();
        for (tid, tech) in dat.techs.iter().enumerate() {
            techs.insert(tid.to_string(), tech_entry(tech));
        }

        let mut dataset = Dataset {
            units_buildings,
            techs,
        };
        dataset.enrich(strings, consts);
        Ok(dataset)
    }

    /// Fill in the enrichment fields on every record. Final mutation
    /// before serialization.
    fn enrich(&mut self, strings: &StringTable, consts: Option<&ConstTable>) {
        for (base_id, entry) in &mut self.units_buildings {
            entry.localised_name = strings.get(entry.language_file_name).to_string();
            if let Some(consts) = consts {
                entry.rms_const = consts.get(base_id).map(str::to_string);
            }
        }
        for entry in self.techs.values_mut() {
            entry.localised_name = strings.get(entry.language_file_name).to_string();
        }
    }

    /// Serialize as tab-indented JSON, keys in insertion order, non-ASCII
    /// written literally.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        let mut buf = Vec::new();
        self.write_json(&mut buf)?;
        // Serializer output is valid UTF-8.
        Ok(String::from_utf8(buf).expect("serialized JSON is UTF-8"))
    }

    /// Serialize tab-indented JSON into a writer.
    pub fn write_json<W: Write>(&self, writer: W) -> Result<(), serde_json::Error> {
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"\t");
        let mut ser = serde_json::Serializer::with_formatter(writer, formatter);
        self.serialize(&mut ser)
    }
}
