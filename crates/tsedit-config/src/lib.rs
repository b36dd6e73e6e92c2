//! Game configuration for tsedit
//!
//! Ties file resolution and INI parsing together into the configuration model
//! the editor works with:
//!
//! - **Aggregate**: [`GameConfig`] holds the six game configuration files,
//!   with the editor's art overrides folded into `artfs.ini`
//! - **Typed objects**: [`ArtConfig`] and [`TechnoRules`] read themselves from
//!   sections, layering base and Firestorm sources
//! - **Event catalog**: [`EventTypeRegistry`] describes trigger event types
//!
//! # Example
//!
//! ```ignore
//! use tsedit_config::{GameConfigLoader, TechnoRules};
//! use tsedit_fs::SourceResolver;
//!
//! let loader = GameConfigLoader::new(SourceResolver::new("/games/ts"), "Config");
//! let config = loader.load()?;
//! let e1: Option<TechnoRules> = config.techno("E1")?;
//! ```

pub mod art;
pub mod error;
pub mod events;
pub mod game;
pub mod layered;
pub mod settings;
pub mod techno;

pub use art::ArtConfig;
pub use error::{Error, Result};
pub use events::{EventParam, EventParamType, EventType, EventTypeRegistry};
pub use game::{ART_OVERRIDES_FILE, ConfigFile, EVENTS_FILE, GameConfig, GameConfigLoader};
pub use layered::{FieldReader, ReadFromSection};
pub use settings::EditorSettings;
pub use techno::TechnoRules;
