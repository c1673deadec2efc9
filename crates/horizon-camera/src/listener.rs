//! Gesture callbacks.

/// Observer for camera gesture activity.
///
/// Every method has an empty default body; implement only the hooks you
/// care about. Callbacks run synchronously on the input thread after the
/// camera has released its internal locks, so an implementation may call
/// back into the camera.
pub trait CameraListener: Send + Sync {
    /// Single-pointer drag step, deltas in the scroll-distance
    /// convention (previous minus current).
    fn on_scroll(&self, _dx: f64, _dy: f64) {}

    /// Pinch progress with the cumulative scale factor since the begin.
    fn on_scale(&self, _scale_factor: f64) {}

    fn on_scale_begin(&self) {}

    fn on_scale_end(&self) {}

    /// First pointer landed.
    fn on_event_start(&self) {}

    /// Last pointer lifted.
    fn on_event_end(&self) {}
}

/// Listener that ignores everything. Installed by default so the camera
/// never has to check for a missing listener.
pub struct NullListener;

impl NullListener {
    pub fn new() -> Self {
        Self
    }
}

impl Default for NullListener {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraListener for NullListener {}
