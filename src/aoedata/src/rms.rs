//! Random-map-script constant extraction.
//!
//! `random_map.def` declares a symbolic `#const` name for every object id
//! the map scripting language can place. Only the object-type section of
//! the file is relevant; it is bracketed by marker comments whose exact
//! wording has drifted across content updates, so several marker pairs
//! are recognized.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;

use regex::Regex;

/// Markers that open the object-type region. Substring match per line.
const REGION_OPENERS: &[&str] = &["OBJECT TYPES", "DLC_AUTUMNTREE ", "DLC_BOULDER_A "];

/// Markers that close the object-type region.
const REGION_CLOSERS: &[&str] = &["Effect Constants", "DLC_BAOBABFOREST ", "DLC_ROCK "];

/// Object id (as the literal digit string from the file) to symbolic
/// constant name.
///
/// Earlier declarations are authoritative: content updates append
/// overrides, so the first writer wins for a given id. Contrast with
/// [`crate::StringTable`], where the last writer wins.
#[derive(Debug, Clone, Default)]
pub struct ConstTable {
    entries: HashMap<String, String>,
}

impl ConstTable {
    /// Load and scan a scripting-definition file from disk.
    pub fn load(path: &Path) -> Result<Self, io::Error> {
        Ok(Self::parse(&fs::read_to_string(path)?))
    }

    /// Scan definition text for `#const NAME <digits>` declarations.
    ///
    /// A single region flag is folded over the lines: any opener marker
    /// sets it, any closer marker clears it (opener checked first, so a
    /// line carrying both ends up outside). The region may open and close
    /// several times; declarations only count while inside it. The
    /// pattern is anchored at the start of the line and the name must be
    /// uppercase letters and underscores only.
    pub fn parse(text: &str) -> Self {
        let pattern = Regex::new(r"^#const\s+([A-Z_]+)\s+(\d+)").unwrap();
        let mut entries: HashMap<String, String> = HashMap::new();
        let mut active = false;
        for line in text.lines() {
            if REGION_OPENERS.iter().any(|m| line.contains(m)) {
                active = true;
            }
            if REGION_CLOSERS.iter().any(|m| line.contains(m)) {
                active = false;
            }
            if active {
                if let Some(caps) = pattern.captures(line) {
                    entries
                        .entry(caps[2].to_string())
                        .or_insert_with(|| caps[1].to_string());
                }
            }
        }
        ConstTable { entries }
    }

    /// Look up the symbolic name for an object id. Missing ids yield `None`.
    pub fn get(&self, id: &str) -> Option<&str> {
        self.entries.get(id).map(String::as_str)
    }

    /// Number of constants in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table holds no constants.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_scoped_extraction() {
        let table = ConstTable::parse(
            "/* OBJECT TYPES */\n\
             #const ARCHER 4\n\
             /* Effect Constants */\n\
             #const SWORDSMAN 74\n\
             #const ARCHER 4\n",
        );
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("4"), Some("ARCHER"));
        assert_eq!(table.get("74"), None);
    }

    #[test]
    fn test_first_writer_wins_across_reopenings() {
        let table = ConstTable::parse(
            "OBJECT TYPES\n\
             #const ARCHER 4\n\
             Effect Constants\n\
             DLC_AUTUMNTREE \n\
             #const ARCHER_OVERRIDE 4\n\
             #const KNIGHT 38\n\
             DLC_ROCK \n",
        );
        assert_eq!(table.get("4"), Some("ARCHER"));
        assert_eq!(table.get("38"), Some("KNIGHT"));
    }

    #[test]
    fn test_pattern_is_anchored_and_uppercase_only() {
        let table = ConstTable::parse(
            "OBJECT TYPES\n\
             \t#const INDENTED 1\n\
             #const lowercase 2\n\
             #const MIXED_ok 3\n\
             #const VALID_NAME 9\n",
        );
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("9"), Some("VALID_NAME"));
    }

    #[test]
    fn test_opener_checked_before_closer() {
        // A line carrying both markers leaves the region closed.
        let table = ConstTable::parse(
            "OBJECT TYPES and Effect Constants\n\
             #const ARCHER 4\n",
        );
        assert!(table.is_empty());
    }

    #[test]
    fn test_nothing_outside_region() {
        let table = ConstTable::parse("#const ARCHER 4\n");
        assert!(table.is_empty());
    }

    #[test]
    fn test_load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("random_map.def");
        fs::write(&path, "OBJECT TYPES\n#const VILLAGER 83\n").unwrap();
        let table = ConstTable::load(&path).unwrap();
        assert_eq!(table.get("83"), Some("VILLAGER"));
    }
}
