//! Decoded Genie archive object graph.
//!
//! The proprietary `empires2_x2_p1.dat` binary is decoded by an external
//! Genie decoder; this module defines the slice of its object graph that
//! the snapshot consumes, plus the binding that reads the decoder's
//! dumped graph (raw-deflate-compressed JSON, plain JSON accepted).
//!
//! Only the fields the normalization step reads are modeled. Everything
//! else in the archive is the decoder's business.

use std::fs;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("incompatible archive graph: {0}")]
    Format(#[from] serde_json::Error),
}

/// One resource cost entry: resource type code and amount.
///
/// Type codes: 0 food, 1 wood, 2 stone, 3 gold.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceCost {
    #[serde(rename = "type")]
    pub kind: i32,
    pub amount: i32,
}

/// One armor entry: armor class code and amount. Class 3 is pierce.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Armour {
    #[serde(rename = "class")]
    pub class: i32,
    pub amount: i32,
}

/// Combat-stats sub-block, present only on units capable of combat.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CombatStats {
    pub armours: Vec<Armour>,
    pub displayed_attack: i32,
    pub displayed_melee_armour: i32,
}

/// Creatable sub-block, present only on units that can be produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Creatable {
    pub resource_costs: Vec<ResourceCost>,
}

/// One unit or building definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Unit {
    pub base_id: i32,
    pub hit_points: i32,
    pub line_of_sight: f64,
    pub garrison_capacity: i32,
    #[serde(rename = "type")]
    pub kind: i32,
    #[serde(rename = "class")]
    pub class: i32,
    pub language_dll_name: i64,
    pub language_dll_help: i64,
    pub name: String,
    #[serde(default)]
    pub type_50: Option<CombatStats>,
    #[serde(default)]
    pub creatable: Option<Creatable>,
}

/// One faction's unit list. Unused slots are `null` in the graph and
/// stay `None` here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Civ {
    pub units: Vec<Option<Unit>>,
}

/// One technology definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tech {
    pub resource_costs: Vec<ResourceCost>,
    pub language_dll_name: i64,
    pub language_dll_help: i64,
    pub name: String,
}

/// The decoded archive graph: per-faction unit lists and the ordered
/// technology list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatFile {
    pub civs: Vec<Civ>,
    pub techs: Vec<Tech>,
}

impl DatFile {
    /// Read a decoded archive graph from disk.
    ///
    /// The dump convention matches the archive itself: raw deflate around
    /// the payload. Uncompressed dumps starting with `{` are accepted
    /// as-is. Anything else (including a native Genie binary fed here by
    /// mistake) fails with [`DatError::Format`].
    pub fn parse(path: &Path) -> Result<Self, DatError> {
        let raw = fs::read(path)?;
        let payload = if raw.first() == Some(&b'{') {
            raw
        } else {
            let mut inflated = Vec::new();
            flate2::read::DeflateDecoder::new(raw.as_slice()).read_to_end(&mut inflated)?;
            inflated
        };
        Ok(serde_json::from_slice(&payload)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn graph_json() -> &'static str {
        r#"{
            "civs": [{"units": [null, {
                "base_id": 4,
                "hit_points": 30,
                "line_of_sight": 6.0,
                "garrison_capacity": 0,
                "type": 70,
                "class": 0,
                "language_dll_name": 5083,
                "language_dll_help": 26083,
                "name": "ARCHR",
                "type_50": {
                    "armours": [{"class": 3, "amount": 0}],
                    "displayed_attack": 4,
                    "displayed_melee_armour": 0
                },
                "creatable": {
                    "resource_costs": [{"type": 1, "amount": 25}, {"type": 3, "amount": 45}]
                }
            }]}],
            "techs": [{
                "resource_costs": [{"type": 0, "amount": 100}],
                "language_dll_name": 7071,
                "language_dll_help": 107071,
                "name": "Fletching"
            }]
        }"#
    }

    #[test]
    fn test_parse_plain_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("graph.json");
        fs::write(&path, graph_json()).unwrap();

        let dat = DatFile::parse(&path).unwrap();
        assert_eq!(dat.civs.len(), 1);
        assert!(dat.civs[0].units[0].is_none());
        let archer = dat.civs[0].units[1].as_ref().unwrap();
        assert_eq!(archer.base_id, 4);
        assert_eq!(archer.type_50.as_ref().unwrap().displayed_attack, 4);
        assert_eq!(dat.techs[0].name, "Fletching");
    }

    #[test]
    fn test_parse_deflated_graph() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empires2_x2_p1.dat");
        let mut encoder =
            flate2::write::DeflateEncoder::new(Vec::new(), flate2::Compression::default());
        encoder.write_all(graph_json().as_bytes()).unwrap();
        fs::write(&path, encoder.finish().unwrap()).unwrap();

        let dat = DatFile::parse(&path).unwrap();
        assert_eq!(dat.techs.len(), 1);
    }

    #[test]
    fn test_optional_blocks_default_to_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("graph.json");
        fs::write(
            &path,
            r#"{"civs": [{"units": [{
                "base_id": 83, "hit_points": 25, "line_of_sight": 2.0,
                "garrison_capacity": 0, "type": 80, "class": 3,
                "language_dll_name": 5075, "language_dll_help": 79234,
                "name": "HOUS"
            }]}], "techs": []}"#,
        )
        .unwrap();

        let dat = DatFile::parse(&path).unwrap();
        let house = dat.civs[0].units[0].as_ref().unwrap();
        assert!(house.type_50.is_none());
        assert!(house.creatable.is_none());
    }

    #[test]
    fn test_corrupt_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("garbage.dat");
        fs::write(&path, b"not an archive at all").unwrap();
        assert!(DatFile::parse(&path).is_err());
    }

    #[test]
    fn test_missing_file_is_fatal() {
        let err = DatFile::parse(Path::new("/nonexistent/graph.dat")).unwrap_err();
        assert!(matches!(err, DatError::Io(_)));
    }
}
