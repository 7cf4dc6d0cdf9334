use std::path::PathBuf;

use crate::canvas::ItemId;

/// A drawing call could not be completed this tick.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum SurfaceError {
    /// Surface has no usable size yet (initial layout, minimized window).
    #[error("surface not ready ({width}x{height})")]
    NotReady { width: f32, height: f32 },

    #[error("unknown canvas item {0:?}")]
    UnknownItem(ItemId),
}

/// The quote source could not be used; callers fall back to built-in quotes.
#[derive(thiserror::Error, Debug)]
pub enum SourceError {
    #[error("failed to read quote file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no quotes found in {0:?}")]
    Empty(PathBuf),
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("variant registered as {registered:?} reports name {reported:?}")]
    NameMismatch { registered: String, reported: String },

    #[error("variant name must not be empty")]
    EmptyName,

    #[error("variant {0:?} is already registered")]
    Duplicate(String),

    #[error("no screensavers registered")]
    Empty,

    #[error("unknown variant {name:?} (available: {available})")]
    Unknown { name: String, available: String },
}
