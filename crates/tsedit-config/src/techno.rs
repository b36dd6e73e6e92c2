//! Unit, infantry, aircraft and building rules from `rules.ini` / `firestrm.ini`

use tsedit_ini::Section;

use crate::Result;
use crate::layered::{FieldReader, ReadFromSection};

/// Rules of one techno type. Only the fields the editor displays are read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TechnoRules {
    pub name: String,
    /// Localization key of the in-game name
    pub ui_name: Option<String>,
    /// Art section to use instead of the type's own ID
    pub image: Option<String>,
    pub strength: i32,
    pub cost: i32,
    /// -1 means the type is never buildable
    pub tech_level: i32,
    pub owner: Vec<String>,
    pub armor: String,
    pub speed: i32,
    pub naval: bool,
}

impl Default for TechnoRules {
    fn default() -> Self {
        Self {
            name: String::new(),
            ui_name: None,
            image: None,
            strength: 0,
            cost: 0,
            tech_level: -1,
            owner: Vec::new(),
            armor: "none".to_string(),
            speed: 0,
            naval: false,
        }
    }
}

impl TechnoRules {
    pub fn is_buildable(&self) -> bool {
        self.tech_level >= 0
    }

    /// Whether the named house may build this type.
    pub fn is_owned_by(&self, house: &str) -> bool {
        self.owner.iter().any(|o| o.eq_ignore_ascii_case(house))
    }
}

impl ReadFromSection for TechnoRules {
    fn read_from(&mut self, section: &Section) -> Result<()> {
        let r = FieldReader::new(section);
        let updated = Self {
            name: r.string("Name", &self.name),
            ui_name: r.optional_string("UIName", self.ui_name.as_deref()),
            image: r.optional_string("Image", self.image.as_deref()),
            strength: r.int("Strength", self.strength)?,
            cost: r.int("Cost", self.cost)?,
            tech_level: r.int("TechLevel", self.tech_level)?,
            owner: r.list("Owner", &self.owner),
            armor: r.string("Armor", &self.armor),
            speed: r.int("Speed", self.speed)?,
            naval: r.bool("Naval", self.naval)?,
        };
        *self = updated;
        Ok(())
    }
}
