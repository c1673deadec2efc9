//! Gesture-driven orbit camera for the horizon viewer.
//!
//! Raw pointer events stream in from the embedding platform. The
//! [`recognizer`] turns them into drags and pinches, and the
//! [`orbit::OrbitCamera`] applies those gestures: drags rotate an
//! orientation offset (optionally pivoting around a tracked target),
//! pinches zoom by narrowing the field of view inside a bounded window,
//! and the render loop reads a ready view matrix every frame.

pub mod events;
pub mod listener;
pub mod orbit;
pub mod recognizer;
pub mod strategy;
pub mod target;

pub use events::{PointerAction, PointerEvent};
pub use listener::{CameraListener, NullListener};
pub use orbit::{OrbitCamera, ZoomBounds};
pub use recognizer::{Gesture, GestureRecognizer};
pub use strategy::{ArcballRotation, DelegatedRotation, RotationStrategy};
pub use target::{PointTarget, Target};
