//! Widget state types for stateful widgets

use serde::{Deserialize, Serialize};

use crate::event::PanPhase;

/// Two-frame tap feedback for button-family widgets.
///
/// A tap moves to `PressedVisual`; the next paint shows the pressed look
/// once and falls back to `Idle`, asking for one more paint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TapFlash {
    #[default]
    Idle,
    PressedVisual,
}

impl TapFlash {
    /// Register a qualifying tap
    pub fn press(&mut self) {
        *self = TapFlash::PressedVisual;
    }

    pub fn is_pressed(&self) -> bool {
        matches!(self, TapFlash::PressedVisual)
    }

    /// Called once per paint. Returns whether the pressed visual should be
    /// drawn in this pass and resets to `Idle`.
    pub fn take(&mut self) -> bool {
        std::mem::take(self).is_pressed()
    }
}

/// Expansion state of a tree node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpandState {
    #[default]
    Collapsed,
    Expanded,
}

impl ExpandState {
    pub fn is_expanded(&self) -> bool {
        matches!(self, ExpandState::Expanded)
    }

    pub fn toggled(self) -> Self {
        match self {
            ExpandState::Collapsed => ExpandState::Expanded,
            ExpandState::Expanded => ExpandState::Collapsed,
        }
    }
}

/// Pan gesture tracking.
///
/// Gesture sources report totals since the gesture started; the viewport
/// wants the increment since the previous update.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PanGesture {
    /// Not panning
    #[default]
    Idle,
    /// Panning, with the totals seen in the previous update
    Panning { last_total: (f32, f32) },
}

impl PanGesture {
    pub fn is_panning(&self) -> bool {
        matches!(self, PanGesture::Panning { .. })
    }

    /// Feed one update; returns the next state and the incremental delta.
    ///
    /// A `Running` update without a prior `Started` is treated as the start
    /// of a gesture at zero. `Completed` and `Canceled` end the gesture
    /// without moving; whatever offset was reached stands.
    pub fn advance(self, phase: PanPhase, total_x: f32, total_y: f32) -> (PanGesture, (f32, f32)) {
        match phase {
            PanPhase::Started => (
                PanGesture::Panning {
                    last_total: (total_x, total_y),
                },
                (0.0, 0.0),
            ),
            PanPhase::Running => {
                let (lx, ly) = match self {
                    PanGesture::Panning { last_total } => last_total,
                    PanGesture::Idle => (0.0, 0.0),
                };
                (
                    PanGesture::Panning {
                        last_total: (total_x, total_y),
                    },
                    (total_x - lx, total_y - ly),
                )
            }
            PanPhase::Completed | PanPhase::Canceled => (PanGesture::Idle, (0.0, 0.0)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flash_shows_once() {
        let mut flash = TapFlash::default();
        assert!(!flash.take());

        flash.press();
        assert!(flash.is_pressed());
        assert!(flash.take());
        assert!(!flash.take());
        assert_eq!(flash, TapFlash::Idle);
    }

    #[test]
    fn test_expand_toggle_is_reversible() {
        let s = ExpandState::Collapsed;
        assert_eq!(s.toggled().toggled(), s);
        assert!(s.toggled().is_expanded());
    }

    #[test]
    fn test_pan_totals_become_increments() {
        let g = PanGesture::Idle;
        let (g, d) = g.advance(PanPhase::Started, 0.0, 0.0);
        assert_eq!(d, (0.0, 0.0));
        let (g, d) = g.advance(PanPhase::Running, 5.0, 10.0);
        assert_eq!(d, (5.0, 10.0));
        let (g, d) = g.advance(PanPhase::Running, 3.0, 25.0);
        assert_eq!(d, (-2.0, 15.0));
        let (g, d) = g.advance(PanPhase::Completed, 0.0, 0.0);
        assert_eq!(d, (0.0, 0.0));
        assert!(!g.is_panning());
    }

    #[test]
    fn test_running_without_start_counts_from_zero() {
        let (g, d) = PanGesture::Idle.advance(PanPhase::Running, 0.0, 40.0);
        assert_eq!(d, (0.0, 40.0));
        assert!(g.is_panning());
    }

    #[test]
    fn test_new_gesture_after_cancel_restarts() {
        let (g, _) = PanGesture::Idle.advance(PanPhase::Running, 0.0, 40.0);
        let (g, _) = g.advance(PanPhase::Canceled, 0.0, 0.0);
        let (_, d) = g.advance(PanPhase::Running, 0.0, 10.0);
        assert_eq!(d, (0.0, 10.0));
    }
}
