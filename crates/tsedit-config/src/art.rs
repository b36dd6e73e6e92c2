//! Artwork definitions from `art.ini` / `artfs.ini`

use tsedit_ini::{Foundation, Section};

use crate::Result;
use crate::layered::{FieldReader, ReadFromSection};

/// How one object type is drawn.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArtConfig {
    /// Graphics file to use instead of the object's own ID
    pub image: Option<String>,
    /// Graphics are theater specific
    pub theater: bool,
    /// Graphics file name carries a theater letter
    pub new_theater: bool,
    pub voxel: bool,
    pub remapable: bool,
    pub normalized: bool,
    pub terrain_palette: bool,
    pub alt_palette: bool,
    /// Building footprint in cells
    pub foundation: Foundation,
    pub height: i32,
    /// Infantry animation sequence section
    pub sequence: Option<String>,
}

impl ArtConfig {
    /// Graphics file name for an object with the given ID.
    pub fn image_or<'a>(&'a self, id: &'a str) -> &'a str {
        self.image.as_deref().unwrap_or(id)
    }
}

impl ReadFromSection for ArtConfig {
    fn read_from(&mut self, section: &Section) -> Result<()> {
        let r = FieldReader::new(section);
        let updated = Self {
            image: r.optional_string("Image", self.image.as_deref()),
            theater: r.bool("Theater", self.theater)?,
            new_theater: r.bool("NewTheater", self.new_theater)?,
            voxel: r.bool("Voxel", self.voxel)?,
            remapable: r.bool("Remapable", self.remapable)?,
            normalized: r.bool("Normalized", self.normalized)?,
            terrain_palette: r.bool("TerrainPalette", self.terrain_palette)?,
            alt_palette: r.bool("AltPalette", self.alt_palette)?,
            foundation: r.foundation("Foundation", self.foundation)?,
            height: r.int("Height", self.height)?,
            sequence: r.optional_string("Sequence", self.sequence.as_deref()),
        };
        *self = updated;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use pretty_assertions::assert_eq;
    use tsedit_ini::ParsedConfig;

    #[test]
    fn reads_present_fields() {
        let config =
            ParsedConfig::parse("[GAPOWR]\nFoundation=2x2\nHeight=3\nRemapable=yes\nImage=GAPOWRUP\n")
                .unwrap();

        let mut art = ArtConfig::default();
        art.read_from(config.section("GAPOWR").unwrap()).unwrap();

        assert_eq!(art.foundation, Foundation::new(2, 2));
        assert_eq!(art.height, 3);
        assert!(art.remapable);
        assert_eq!(art.image_or("GAPOWR"), "GAPOWRUP");
        assert!(!art.voxel);
    }

    #[test]
    fn second_source_only_overrides_its_keys() {
        let base = ParsedConfig::parse("[GAPOWR]\nFoundation=2x2\nHeight=3\n").unwrap();
        let firestorm = ParsedConfig::parse("[GAPOWR]\nHeight=4\n").unwrap();

        let mut art = ArtConfig::default();
        art.read_from(base.section("GAPOWR").unwrap()).unwrap();
        art.read_from(firestorm.section("GAPOWR").unwrap()).unwrap();

        assert_eq!(art.height, 4);
        assert_eq!(art.foundation, Foundation::new(2, 2));
    }

    #[test]
    fn failed_read_leaves_object_untouched() {
        let config = ParsedConfig::parse("[X]\nHeight=5\nVoxel=perhaps\n").unwrap();
        let mut art = ArtConfig {
            height: 1,
            ..ArtConfig::default()
        };

        let err = art.read_from(config.section("X").unwrap()).unwrap_err();

        assert!(matches!(err, Error::Field { ref section, .. } if section == "X"));
        // Height preceded the bad key but must not have been applied
        assert_eq!(art.height, 1);
    }
}
