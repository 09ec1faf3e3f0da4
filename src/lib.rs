//! Narrative - a linear slide presentation driven by a debounced navigator.
//!
//! The navigator core ([`navigator`]) is independent of any window system:
//! frontends feed it [`input::Command`]s and receive [`presenter::Frame`]s
//! through an injected [`presenter::Presenter`]. The raylib frontend lives in
//! `gui` behind the `gui` feature.

pub mod constants;
pub mod deck;
pub mod error;
pub mod headless;
pub mod input;
pub mod navigator;
pub mod presenter;
pub mod slide;
pub mod state;

#[cfg(feature = "gui")]
pub mod gui;

pub use deck::Deck;
pub use error::{DeckError, NavigatorError, ScriptError};
pub use input::{Command, Control, Key, ScriptStep};
pub use navigator::{Ignored, NavigatorConfig, Outcome, SlideNavigator};
pub use presenter::{Frame, Presenter, Recorder};
pub use slide::Slide;
pub use state::{NavigatorState, TransitionState};
