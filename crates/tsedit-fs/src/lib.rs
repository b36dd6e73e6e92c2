//! Game file resolution for tsedit
//!
//! Locates logical game files either as loose files in the game directory or
//! as entries inside archive providers, and offers the small set of I/O
//! helpers the rest of the workspace builds on.

pub mod archive;
pub mod error;
pub mod io;
pub mod source;
pub mod store;
pub mod text;

pub use archive::{ArchiveProvider, ArchiveSet, MemoryArchive};
pub use error::{Error, Result};
pub use source::{ResolvedSource, SourceOrigin, SourceResolver};
pub use store::SettingsStore;
pub use text::decode_text;
