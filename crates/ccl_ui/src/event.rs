//! Gesture events delivered to widgets.

use ccl_canvas::Point;
use serde::{Deserialize, Serialize};

/// Phase of a pan gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanPhase {
    Started,
    Running,
    Completed,
    Canceled,
}

/// Gestures in the widget's local coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gesture {
    /// A single tap.
    Tap { position: Point },
    /// A pan update. Totals are cumulative since the gesture started.
    Pan {
        phase: PanPhase,
        total_x: f32,
        total_y: f32,
    },
}

impl Gesture {
    pub fn tap(x: f32, y: f32) -> Self {
        Gesture::Tap {
            position: Point::new(x, y),
        }
    }

    pub fn pan(phase: PanPhase, total_x: f32, total_y: f32) -> Self {
        Gesture::Pan {
            phase,
            total_x,
            total_y,
        }
    }
}
