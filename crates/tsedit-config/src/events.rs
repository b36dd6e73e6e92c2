//! Trigger event type catalog
//!
//! Each section of the catalog file describes one trigger event type:
//!
//! ```text
//! [EnteredBy]
//! IDOverride=1
//! Name=Entered by...
//! Description=Triggers when an object of the given house enters the tag.
//! P1Type=House
//! P2Type=Unused
//! P3Type=WaypointZZ
//! P3PresetOptions=0,1,2
//! ```
//!
//! An event always has exactly four parameter slots. The first two are the
//! default parameters, the last two are additional parameters that only some
//! events use.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use tsedit_ini::value::parse_list;
use tsedit_ini::{ParsedConfig, Section};

use crate::layered::{FieldReader, ReadFromSection};
use crate::{Error, Result};

/// Number of parameter slots of every event type.
pub const PARAM_SLOTS: usize = 4;

/// Slots before this index are default parameters.
pub const DEFAULT_PARAM_SLOTS: usize = 2;

/// Display name given to waypoint parameters that declare none.
pub const WAYPOINT_PARAM_NAME: &str = "Waypoint";

macro_rules! param_types {
    ($($variant:ident),+ $(,)?) => {
        /// Value type of an event parameter.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum EventParamType {
            $($variant),+
        }

        impl EventParamType {
            /// All known type tags, in declaration order.
            pub const ALL: &'static [EventParamType] = &[$(EventParamType::$variant),+];

            /// Tag as written in the catalog.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),+
                }
            }
        }
    };
}

param_types!(
    Unused,
    Unknown,
    Integer,
    Boolean,
    Float,
    Text,
    House,
    HouseType,
    Team,
    TeamType,
    TechnoType,
    BuildingType,
    Trigger,
    Tag,
    LocalVariable,
    GlobalVariable,
    Waypoint,
    WaypointZZ,
    Speech,
    Sound,
    Movie,
    Theme,
    Animation,
);

impl EventParamType {
    pub fn is_waypoint(&self) -> bool {
        matches!(self, Self::Waypoint | Self::WaypointZZ)
    }
}

/// Tags match ignoring ASCII case. Any other tag is rejected.
impl FromStr for EventParamType {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or(())
    }
}

impl fmt::Display for EventParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One parameter slot of an event type.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EventParam {
    /// The event takes no parameter in this slot
    #[default]
    Unused,
    Typed {
        kind: EventParamType,
        /// Label shown instead of the type name
        name_override: Option<String>,
        /// Fixed choices offered to the user, never empty when present
        presets: Option<Vec<String>>,
    },
}

impl EventParam {
    pub fn is_unused(&self) -> bool {
        matches!(self, Self::Unused)
    }

    pub fn kind(&self) -> EventParamType {
        match self {
            Self::Unused => EventParamType::Unused,
            Self::Typed { kind, .. } => *kind,
        }
    }

    pub fn name_override(&self) -> Option<&str> {
        match self {
            Self::Unused => None,
            Self::Typed { name_override, .. } => name_override.as_deref(),
        }
    }

    pub fn presets(&self) -> Option<&[String]> {
        match self {
            Self::Unused => None,
            Self::Typed { presets, .. } => presets.as_deref(),
        }
    }

    /// Label for the parameter editor: the override, or the type tag.
    pub fn display_name(&self) -> &str {
        self.name_override().unwrap_or(self.kind().as_str())
    }
}

/// Description of one trigger event type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventType {
    pub id: u32,
    pub name: String,
    pub description: String,
    /// Whether the editor offers this event for new triggers
    pub available: bool,
    pub parameters: [EventParam; PARAM_SLOTS],
}

impl EventType {
    /// Create an event type with no parameters.
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            available: true,
            parameters: Default::default(),
        }
    }

    /// Number of used slots among the default parameters.
    pub fn default_param_count(&self) -> usize {
        self.parameters[..DEFAULT_PARAM_SLOTS]
            .iter()
            .filter(|p| !p.is_unused())
            .count()
    }

    /// Number of used slots among the additional parameters.
    pub fn additional_param_count(&self) -> usize {
        self.parameters[DEFAULT_PARAM_SLOTS..]
            .iter()
            .filter(|p| !p.is_unused())
            .count()
    }

    fn read_param(section: &Section, slot: usize) -> Result<EventParam> {
        let n = slot + 1;
        let Some(tag) = section.get(&format!("P{n}Type")) else {
            return Ok(EventParam::Unused);
        };

        let kind: EventParamType = tag.parse().map_err(|_| Error::UnknownParamType {
            section: section.name().to_string(),
            slot: n,
            tag: tag.to_string(),
        })?;
        if kind == EventParamType::Unused {
            return Ok(EventParam::Unused);
        }

        let name_override = section
            .get(&format!("P{n}Name"))
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .or_else(|| kind.is_waypoint().then(|| WAYPOINT_PARAM_NAME.to_string()));

        let presets = section
            .get(&format!("P{n}PresetOptions"))
            .map(parse_list)
            .filter(|options| !options.is_empty());

        Ok(EventParam::Typed {
            kind,
            name_override,
            presets,
        })
    }
}

/// Reads `IDOverride`, `Name`, `Description`, `Available` and the four
/// parameter slots.
///
/// Unlike the scalar fields, the parameter slots are rebuilt from the section
/// on every read: a slot without a `P{n}Type` key becomes [`EventParam::Unused`].
impl ReadFromSection for EventType {
    fn read_from(&mut self, section: &Section) -> Result<()> {
        let r = FieldReader::new(section);

        let id = match section.get("IDOverride") {
            Some(value) => value.trim().parse::<u32>().map_err(|_| {
                Error::field(
                    section.name(),
                    tsedit_ini::Error::conversion("IDOverride", value, "a non-negative integer"),
                )
            })?,
            None => self.id,
        };

        let mut parameters: [EventParam; PARAM_SLOTS] = Default::default();
        for (slot, param) in parameters.iter_mut().enumerate() {
            *param = Self::read_param(section, slot)?;
        }

        let updated = Self {
            id,
            name: r.string("Name", &self.name),
            description: r.string("Description", &self.description),
            available: r.bool("Available", self.available)?,
            parameters,
        };
        *self = updated;
        Ok(())
    }
}

/// All known event types, keyed by ID.
#[derive(Debug, Clone, Default)]
pub struct EventTypeRegistry {
    events: BTreeMap<u32, EventType>,
}

impl EventTypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the registry from a catalog, one event type per section.
    ///
    /// An event's ID defaults to the position of its section and can be
    /// replaced with `IDOverride`. If two sections end up with the same ID,
    /// the later one replaces the earlier.
    pub fn from_config(config: &ParsedConfig) -> Result<Self> {
        let mut registry = Self::new();
        for (index, section) in config.iter().enumerate() {
            let id = u32::try_from(index).unwrap_or(u32::MAX);
            let mut event = EventType::new(id, section.name());
            event.read_from(section)?;
            registry.register(event);
        }
        tracing::debug!(count = registry.len(), "Loaded trigger event types");
        Ok(registry)
    }

    /// Add an event type, replacing any event with the same ID.
    pub fn register(&mut self, event: EventType) {
        if let Some(previous) = self.events.insert(event.id, event) {
            tracing::warn!(
                id = previous.id,
                replaced = %previous.name,
                "Duplicate event type ID, keeping the later declaration"
            );
        }
    }

    pub fn get(&self, id: u32) -> Option<&EventType> {
        self.events.get(&id)
    }

    /// Find an event type by name, ignoring case.
    pub fn find_by_name(&self, name: &str) -> Option<&EventType> {
        self.events
            .values()
            .find(|e| e.name.eq_ignore_ascii_case(name))
    }

    /// Event types in ascending ID order.
    pub fn iter(&self) -> impl Iterator<Item = &EventType> {
        self.events.values()
    }

    /// Event types the editor offers for new triggers.
    pub fn available(&self) -> impl Iterator<Item = &EventType> {
        self.events.values().filter(|e| e.available)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
