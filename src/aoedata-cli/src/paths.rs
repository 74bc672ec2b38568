//! Input and output path derivation for the two asset variants.

use std::path::{Path, PathBuf};

/// One asset variant: the base Definitive Edition install, or the
/// Return of Rome mode nested inside it.
pub struct Variant {
    pub label: &'static str,
    pub dat: PathBuf,
    pub strings: PathBuf,
    /// Only the base game ships a random-map definition file; the
    /// Return of Rome build runs without constants.
    pub rms: Option<PathBuf>,
    pub target: PathBuf,
}

/// Both variant builds for a game installation root, in run order.
pub fn variants(game_dir: &Path) -> Vec<Variant> {
    let ror_root = game_dir.join("modes").join("Pompeii");
    vec![
        Variant {
            label: "DE",
            dat: game_dir
                .join("resources")
                .join("_common")
                .join("dat")
                .join("empires2_x2_p1.dat"),
            strings: game_dir
                .join("resources")
                .join("en")
                .join("strings")
                .join("key-value")
                .join("key-value-strings-utf8.txt"),
            rms: Some(
                game_dir
                    .join("resources")
                    .join("_common")
                    .join("drs")
                    .join("gamedata_x2")
                    .join("random_map.def"),
            ),
            target: PathBuf::from("data").join("units_buildings_techs.de.json"),
        },
        Variant {
            label: "RoR",
            dat: ror_root
                .join("resources")
                .join("_common")
                .join("dat")
                .join("empires2_x2_p1.dat"),
            strings: ror_root
                .join("resources")
                .join("en")
                .join("strings")
                .join("key-value")
                .join("key-value-pompeii-strings-utf8.txt"),
            rms: None,
            target: PathBuf::from("data").join("units_buildings_techs.ror.json"),
        },
    ]
}
