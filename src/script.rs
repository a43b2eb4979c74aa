//! Gesture scripts replayed by the gallery.
//!
//! A script is a JSON array of steps:
//!
//! ```json
//! [
//!   { "widget": "listbox", "gesture": { "tap": { "position": { "x": 10, "y": 60 } } } },
//!   { "widget": "grid", "gesture": { "pan": { "phase": "running", "total_x": -40, "total_y": 0 } } }
//! ]
//! ```

use std::path::{Path, PathBuf};

use ccl_ui::Gesture;
use serde::Deserialize;

use crate::message::WidgetId;

/// One gesture addressed to one widget.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptStep {
    pub widget: WidgetId,
    pub gesture: Gesture,
}

#[derive(Deserialize)]
struct RawStep {
    widget: String,
    gesture: Gesture,
}

/// An ordered list of steps.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Script {
    steps: Vec<ScriptStep>,
}

impl Script {
    pub fn new(steps: Vec<ScriptStep>) -> Self {
        Self { steps }
    }

    /// Parse a script, resolving widget names.
    pub fn from_json(json: &str) -> Result<Self, ScriptError> {
        let raw: Vec<RawStep> = serde_json::from_str(json)?;
        let steps = raw
            .into_iter()
            .enumerate()
            .map(|(step, raw)| {
                let widget =
                    WidgetId::from_name(&raw.widget).ok_or(ScriptError::UnknownWidget { step, name: raw.widget })?;
                Ok(ScriptStep {
                    widget,
                    gesture: raw.gesture,
                })
            })
            .collect::<Result<Vec<_>, ScriptError>>()?;
        Ok(Self { steps })
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ScriptError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ScriptError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let script = Self::from_json(&json)?;
        log::info!("Loaded {} script steps from {:?}", script.len(), path);
        Ok(script)
    }

    pub fn steps(&self) -> &[ScriptStep] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// Errors that can occur when loading a script.
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("Failed to parse script: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Step {step}: unknown widget '{name}'")]
    UnknownWidget { step: usize, name: String },

    #[error("Failed to read script {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use ccl_ui::PanPhase;

    #[test]
    fn test_parse_steps() {
        let json = r#"[
            { "widget": "listbox", "gesture": { "tap": { "position": { "x": 10, "y": 60 } } } },
            { "widget": "radio_group", "gesture": { "pan": { "phase": "completed", "total_x": 0, "total_y": -30 } } }
        ]"#;
        let script = Script::from_json(json).unwrap();
        assert_eq!(
            script.steps(),
            &[
                ScriptStep {
                    widget: WidgetId::Listbox,
                    gesture: Gesture::tap(10.0, 60.0),
                },
                ScriptStep {
                    widget: WidgetId::RadioGroup,
                    gesture: Gesture::pan(PanPhase::Completed, 0.0, -30.0),
                },
            ]
        );
    }

    #[test]
    fn test_unknown_widget() {
        let json = r#"[
            { "widget": "button", "gesture": { "tap": { "position": { "x": 1, "y": 1 } } } },
            { "widget": "slider", "gesture": { "tap": { "position": { "x": 1, "y": 1 } } } }
        ]"#;
        match Script::from_json(json) {
            Err(ScriptError::UnknownWidget { step, name }) => {
                assert_eq!(step, 1);
                assert_eq!(name, "slider");
            }
            other => panic!("expected unknown widget, got {:?}", other),
        }
    }

    #[test]
    fn test_bad_gesture_is_parse_error() {
        let json = r#"[{ "widget": "button", "gesture": { "swipe": {} } }]"#;
        assert!(matches!(Script::from_json(json), Err(ScriptError::Parse(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");
        assert!(matches!(Script::load(&path), Err(ScriptError::Io { .. })));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("script.json");
        std::fs::write(&path, "[]").unwrap();
        assert!(Script::load(&path).unwrap().is_empty());
    }
}
