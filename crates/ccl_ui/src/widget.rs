//! Widget capability traits and related types

use ccl_canvas::{Canvas, Rect, Size};

use crate::event::Gesture;

/// What a widget wants after handling a gesture.
#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub enum EventResult<M> {
    /// Nothing happened
    None,
    /// State changed, repaint requested
    Redraw,
    /// Notification only, visuals unchanged
    Message(M),
    /// Notification and repaint
    RedrawWithMessage(M),
}

impl<M> EventResult<M> {
    /// Build from a repaint flag and an optional message.
    pub fn from_parts(redraw: bool, message: Option<M>) -> Self {
        match (redraw, message) {
            (true, Some(msg)) => EventResult::RedrawWithMessage(msg),
            (false, Some(msg)) => EventResult::Message(msg),
            (true, None) => EventResult::Redraw,
            (false, None) => EventResult::None,
        }
    }

    pub fn needs_redraw(&self) -> bool {
        matches!(self, EventResult::Redraw | EventResult::RedrawWithMessage(_))
    }

    pub fn message(&self) -> Option<&M> {
        match self {
            EventResult::Message(msg) | EventResult::RedrawWithMessage(msg) => Some(msg),
            _ => None,
        }
    }

    pub fn into_message(self) -> Option<M> {
        match self {
            EventResult::Message(msg) | EventResult::RedrawWithMessage(msg) => Some(msg),
            _ => None,
        }
    }

    pub fn map<N>(self, f: impl FnOnce(M) -> N) -> EventResult<N> {
        match self {
            EventResult::None => EventResult::None,
            EventResult::Redraw => EventResult::Redraw,
            EventResult::Message(msg) => EventResult::Message(f(msg)),
            EventResult::RedrawWithMessage(msg) => EventResult::RedrawWithMessage(f(msg)),
        }
    }
}

/// Result of a paint pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum PaintOutcome {
    /// The widget is showing its resting visual
    Settled,
    /// Paint again; a transient visual was shown this pass
    Invalidate,
}

impl PaintOutcome {
    pub fn needs_repaint(self) -> bool {
        self == PaintOutcome::Invalidate
    }
}

/// Something that paints itself onto a canvas.
pub trait Paintable {
    fn size(&self) -> Size;

    fn resize(&mut self, size: Size);

    /// Repaint from scratch. Paint never changes content or selection.
    fn paint(&mut self, canvas: &mut dyn Canvas) -> PaintOutcome;

    /// The widget's local bounds.
    fn bounds(&self) -> Rect {
        Rect::from_size(self.size())
    }
}

/// Something that turns gestures into state changes and messages.
pub trait HitTestable<M> {
    fn on_gesture(&mut self, gesture: &Gesture) -> EventResult<M>;
}

/// A complete widget.
pub trait Widget<M>: Paintable + HitTestable<M> {}

impl<M, T: Paintable + HitTestable<M>> Widget<M> for T {}
