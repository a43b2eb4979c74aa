//! Scroll offsets and their bounds.
//!
//! Everything here is a pure function of its inputs: callers pass the
//! current [`Viewport`] in and get the next one back together with a
//! repaint flag.
//!
//! Offsets are `f64` pixels. Item geometry stays `f32`; positions are only
//! narrowed once they are relative to the pane, so offsets deep into large
//! content keep whole-pixel precision.

use crate::event::PanPhase;
use crate::state::PanGesture;

/// How far an axis may scroll.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollBound {
    /// Scroll until the last of `count` items of size `extent` sits at the
    /// start of the pane: `max = (count - 1) * extent`.
    LastItemAtOrigin { count: usize, extent: f32 },
    /// Scroll until the end of the content meets the end of the pane:
    /// `max = max(0, content - viewport)`.
    ContentFit { content: f32, viewport: f32 },
}

impl ScrollBound {
    pub fn max_offset(&self) -> f64 {
        let max = match *self {
            ScrollBound::LastItemAtOrigin { count, extent } => count.saturating_sub(1) as f64 * f64::from(extent),
            ScrollBound::ContentFit { content, viewport } => f64::from(content) - f64::from(viewport),
        };
        // f64::max drops NaN
        max.max(0.0)
    }
}

/// Clamp an offset into `[0, max_offset]`. NaN resolves to 0.
pub fn clamp_offset(offset: f64, max_offset: f64) -> f64 {
    if offset.is_nan() {
        return 0.0;
    }
    offset.clamp(0.0, max_offset.max(0.0))
}

/// Result of applying a delta to one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scrolled {
    pub offset: f64,
    /// Offset moved, so the viewport needs repainting
    pub repaint: bool,
}

/// `clamp(offset + delta, 0, max_offset)`.
pub fn scroll(offset: f64, delta: f64, max_offset: f64) -> Scrolled {
    let next = clamp_offset(offset + delta, max_offset);
    Scrolled {
        offset: next,
        repaint: next != offset,
    }
}

/// Per-axis maximum offsets.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollLimits {
    pub max_x: f64,
    pub max_y: f64,
}

impl ScrollLimits {
    pub fn new(max_x: f64, max_y: f64) -> Self {
        Self { max_x, max_y }
    }

    pub fn vertical(max_y: f64) -> Self {
        Self { max_x: 0.0, max_y }
    }
}

/// Scroll position of a widget plus the pan gesture in progress.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub offset_x: f64,
    pub offset_y: f64,
    pan: PanGesture,
}

/// A new viewport and whether it needs repainting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportUpdate {
    pub viewport: Viewport,
    pub repaint: bool,
}

impl Viewport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn at(offset_x: f64, offset_y: f64) -> Self {
        Self {
            offset_x,
            offset_y,
            pan: PanGesture::Idle,
        }
    }

    pub fn is_panning(&self) -> bool {
        self.pan.is_panning()
    }

    /// Apply one pan update against `limits`.
    pub fn apply_pan(self, phase: PanPhase, total_x: f32, total_y: f32, limits: ScrollLimits) -> ViewportUpdate {
        let (pan, (dx, dy)) = self.pan.advance(phase, total_x, total_y);
        let x = scroll(self.offset_x, f64::from(dx), limits.max_x);
        let y = scroll(self.offset_y, f64::from(dy), limits.max_y);

        if matches!(phase, PanPhase::Completed | PanPhase::Canceled) {
            log::debug!("Viewport: pan {:?} at ({}, {})", phase, x.offset, y.offset);
        }

        ViewportUpdate {
            viewport: Viewport {
                offset_x: x.offset,
                offset_y: y.offset,
                pan,
            },
            repaint: x.repaint || y.repaint,
        }
    }

    /// Re-clamp after content or viewport size changed.
    pub fn reclamp(self, limits: ScrollLimits) -> ViewportUpdate {
        let offset_x = clamp_offset(self.offset_x, limits.max_x);
        let offset_y = clamp_offset(self.offset_y, limits.max_y);
        ViewportUpdate {
            repaint: offset_x != self.offset_x || offset_y != self.offset_y,
            viewport: Viewport {
                offset_x,
                offset_y,
                pan: self.pan,
            },
        }
    }

    /// Keep the offsets, forget any pan in progress.
    pub fn end_pan(self) -> Self {
        Viewport::at(self.offset_x, self.offset_y)
    }

    /// Back to the origin, dropping any pan in progress.
    pub fn reset(self) -> ViewportUpdate {
        let viewport = Viewport::default();
        ViewportUpdate {
            repaint: viewport != self,
            viewport,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_item_at_origin_bound() {
        let bound = ScrollBound::LastItemAtOrigin { count: 10, extent: 25.0 };
        assert_eq!(bound.max_offset(), 225.0);
        assert_eq!(ScrollBound::LastItemAtOrigin { count: 0, extent: 25.0 }.max_offset(), 0.0);
    }

    #[test]
    fn test_content_fit_bound_never_negative() {
        let bound = ScrollBound::ContentFit {
            content: 50.0,
            viewport: 200.0,
        };
        assert_eq!(bound.max_offset(), 0.0);
    }

    #[test]
    fn test_scroll_clamps_both_ends() {
        assert_eq!(scroll(0.0, 40.0, 225.0).offset, 40.0);
        assert_eq!(scroll(200.0, 40.0, 225.0).offset, 225.0);
        assert_eq!(scroll(10.0, -40.0, 225.0).offset, 0.0);
    }

    #[test]
    fn test_extreme_deltas_converge_to_bounds() {
        let mut offset = 100.0;
        for _ in 0..3 {
            offset = scroll(offset, f64::INFINITY, 225.0).offset;
            assert_eq!(offset, 225.0);
        }
        for _ in 0..3 {
            offset = scroll(offset, f64::NEG_INFINITY, 225.0).offset;
            assert_eq!(offset, 0.0);
        }
        assert_eq!(scroll(offset, f64::MAX, 225.0).offset, 225.0);
    }

    #[test]
    fn test_scroll_at_bound_requests_no_repaint() {
        let s = scroll(225.0, 10.0, 225.0);
        assert_eq!(s.offset, 225.0);
        assert!(!s.repaint);
        assert!(scroll(0.0, 1.0, 225.0).repaint);
    }

    #[test]
    fn test_nan_offset_resolves_to_zero() {
        assert_eq!(clamp_offset(f64::NAN, 100.0), 0.0);
        assert_eq!(scroll(10.0, f64::NAN, 100.0).offset, 0.0);
    }

    #[test]
    fn test_apply_pan_uses_increments() {
        let limits = ScrollLimits::vertical(225.0);
        let v = Viewport::new();
        let u = v.apply_pan(PanPhase::Started, 0.0, 0.0, limits);
        assert!(!u.repaint);
        let u = u.viewport.apply_pan(PanPhase::Running, 0.0, 30.0, limits);
        assert_eq!(u.viewport.offset_y, 30.0);
        let u = u.viewport.apply_pan(PanPhase::Running, 0.0, 40.0, limits);
        assert_eq!(u.viewport.offset_y, 40.0);
        assert!(u.repaint);
        let u = u.viewport.apply_pan(PanPhase::Completed, 0.0, 0.0, limits);
        assert_eq!(u.viewport.offset_y, 40.0);
        assert!(!u.viewport.is_panning());
    }

    #[test]
    fn test_horizontal_pan_ignored_when_axis_is_locked() {
        let u = Viewport::new().apply_pan(PanPhase::Running, 50.0, 0.0, ScrollLimits::vertical(100.0));
        assert_eq!(u.viewport.offset_x, 0.0);
        assert!(!u.repaint);
    }

    #[test]
    fn test_reclamp_after_content_shrinks() {
        let v = Viewport::at(0.0, 200.0);
        let u = v.reclamp(ScrollLimits::vertical(50.0));
        assert_eq!(u.viewport.offset_y, 50.0);
        assert!(u.repaint);
        assert!(!u.viewport.reclamp(ScrollLimits::vertical(50.0)).repaint);
    }

    #[test]
    fn test_end_pan_keeps_offsets() {
        let limits = ScrollLimits::vertical(225.0);
        let u = Viewport::new().apply_pan(PanPhase::Running, 0.0, 60.0, limits);
        assert!(u.viewport.is_panning());
        let v = u.viewport.end_pan();
        assert!(!v.is_panning());
        assert_eq!(v.offset_y, 60.0);

        // A fresh gesture starts from zero, not from the old total
        let u = v.apply_pan(PanPhase::Running, 0.0, 10.0, limits);
        assert_eq!(u.viewport.offset_y, 70.0);
    }

    #[test]
    fn test_large_offsets_move_by_single_pixels() {
        let max = ScrollBound::LastItemAtOrigin {
            count: 2_000_000,
            extent: 25.0,
        }
        .max_offset();
        assert_eq!(max, 49_999_975.0);
        let s = scroll(max - 10.0, 1.0, max);
        assert_eq!(s.offset, max - 9.0);
        assert!(s.repaint);
    }

    #[test]
    fn test_reset() {
        let u = Viewport::at(10.0, 20.0).reset();
        assert_eq!(u.viewport, Viewport::default());
        assert!(u.repaint);
    }
}
