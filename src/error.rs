//! Error types for the navigator, the deck loader and the command script.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NavigatorError {
    #[error("a slide deck needs at least one slide")]
    EmptyDeck,
}

#[derive(Debug, Error)]
pub enum DeckError {
    #[error("Failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid deck manifest {path:?}: {source}")]
    Manifest {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("Slide {index} references missing image {path:?}")]
    MissingImage { index: usize, path: PathBuf },
    #[error("No slides found in {0:?}")]
    NoSlides(PathBuf),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScriptError {
    #[error("Unknown command '{0}'")]
    UnknownCommand(String),
    #[error("Invalid argument in '{0}'")]
    InvalidArgument(String),
}
