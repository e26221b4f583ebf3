//! Breadcrumb path navigator.
//!
//! The library holds the toolkit-agnostic core: the path model, hint
//! resolution against a [`io::FileSystem`], and the [`NavigatorController`]
//! state machine that renderers drive with [`NavEvent`]s.

pub mod config;
pub mod entry;
pub mod error;
pub mod io;
pub mod message;
pub mod model;
pub mod state;

pub use error::{ConfigError, InvalidPathError};
pub use message::{Change, NavEvent};
pub use model::{CommitTrigger, DisplayMode};
pub use state::{ListenerId, NavigatorController, PathModel};
