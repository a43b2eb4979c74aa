//! ccl - a headless gallery for the ccl widget library
//!
//! Builds one of every widget, replays JSON gesture scripts through them and
//! writes settled PNG snapshots.

mod app;
mod config;
mod message;
mod script;

pub use app::{Gallery, GalleryError, Result, MAX_PAINT_PASSES};
pub use config::{ConfigError, ConfigSource, GalleryConfig, LogLevel, CONFIG_VERSION};
pub use message::{Message, WidgetId};
pub use script::{Script, ScriptError, ScriptStep};
