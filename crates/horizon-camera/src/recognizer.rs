//! Platform-neutral gesture recognition.
//!
//! Folds a raw pointer stream into the drag and pinch gestures the orbit
//! camera consumes. At most two pointers are tracked; extra fingers are
//! ignored until one of the tracked pair lifts.

use tracing::trace;

use horizon_common::Vec2;

use crate::events::{PointerAction, PointerEvent};

/// Smallest two-finger span (pixels) from which a scale ratio is taken.
const MIN_SPAN: f64 = 1e-6;

/// A recognized gesture. Each pointer event yields at most one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    /// First pointer landed.
    TouchDown,
    /// Single-pointer drag step. Deltas follow the scroll-distance
    /// convention (previous minus current); `position` is the current
    /// pointer location in pixels.
    Scroll { dx: f64, dy: f64, position: Vec2 },
    /// Two pointers are down with a usable span between them.
    PinchBegin,
    /// The span changed. `scale_factor` is cumulative since the begin:
    /// current span divided by the span at [`Gesture::PinchBegin`].
    PinchUpdate { scale_factor: f64 },
    /// Dropped below two pointers.
    PinchEnd,
    /// Last pointer lifted.
    TouchUp,
}

#[derive(Debug, Clone, Copy)]
struct TrackedPointer {
    id: u64,
    position: Vec2,
}

/// Incremental drag/pinch recognizer.
///
/// Feed every pointer event through [`GestureRecognizer::handle`] in
/// arrival order. The recognizer is purely mechanical: it never decides
/// what a gesture means, only that one happened.
#[derive(Debug, Default)]
pub struct GestureRecognizer {
    pointers: Vec<TrackedPointer>,
    pinch_base_span: Option<f64>,
}

impl GestureRecognizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// True while two pointers are down and the pinch has begun.
    pub fn is_pinching(&self) -> bool {
        self.pinch_base_span.is_some()
    }

    /// Feed one pointer event; returns at most one recognized gesture.
    pub fn handle(&mut self, event: PointerEvent) -> Option<Gesture> {
        match event.action {
            PointerAction::Down => self.on_down(event),
            PointerAction::Move => self.on_move(event),
            PointerAction::Up => self.on_up(event),
        }
    }

    fn on_down(&mut self, event: PointerEvent) -> Option<Gesture> {
        if self.tracked_index(event.pointer_id).is_some() {
            // Repeated down for a pointer we already track: position update only.
            self.update_position(event.pointer_id, event.position);
            return None;
        }
        match self.pointers.len() {
            0 => {
                self.pointers.push(TrackedPointer {
                    id: event.pointer_id,
                    position: event.position,
                });
                Some(Gesture::TouchDown)
            }
            1 => {
                self.pointers.push(TrackedPointer {
                    id: event.pointer_id,
                    position: event.position,
                });
                let span = self.span();
                if span >= MIN_SPAN {
                    self.pinch_base_span = Some(span);
                    Some(Gesture::PinchBegin)
                } else {
                    // Both fingers on the same pixel. Wait for them to
                    // separate before calling it a pinch.
                    None
                }
            }
            _ => {
                trace!("ignoring extra pointer {}", event.pointer_id);
                None
            }
        }
    }

    fn on_move(&mut self, event: PointerEvent) -> Option<Gesture> {
        let previous = self.update_position(event.pointer_id, event.position)?;
        match self.pointers.len() {
            1 => Some(Gesture::Scroll {
                dx: previous.x - event.position.x,
                dy: previous.y - event.position.y,
                position: event.position,
            }),
            2 => {
                let span = self.span();
                match self.pinch_base_span {
                    Some(base) => Some(Gesture::PinchUpdate {
                        scale_factor: span / base,
                    }),
                    None if span >= MIN_SPAN => {
                        self.pinch_base_span = Some(span);
                        Some(Gesture::PinchBegin)
                    }
                    None => None,
                }
            }
            _ => None,
        }
    }

    fn on_up(&mut self, event: PointerEvent) -> Option<Gesture> {
        let index = self.tracked_index(event.pointer_id)?;
        self.pointers.remove(index);
        match self.pointers.len() {
            1 => {
                // The survivor keeps dragging; only the pinch ends, and
                // only if it actually began.
                let was_pinching = self.pinch_base_span.take().is_some();
                was_pinching.then_some(Gesture::PinchEnd)
            }
            0 => {
                self.pinch_base_span = None;
                Some(Gesture::TouchUp)
            }
            _ => None,
        }
    }

    fn tracked_index(&self, id: u64) -> Option<usize> {
        self.pointers.iter().position(|p| p.id == id)
    }

    fn update_position(&mut self, id: u64, position: Vec2) -> Option<Vec2> {
        let pointer = self.pointers.iter_mut().find(|p| p.id == id)?;
        let previous = pointer.position;
        pointer.position = position;
        Some(previous)
    }

    fn span(&self) -> f64 {
        (self.pointers[0].position - self.pointers[1].position).length()
    }
}
