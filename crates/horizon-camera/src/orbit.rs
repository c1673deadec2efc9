//! The orbit camera controller.
//!
//! One thread feeds pointer or gesture input while a render thread reads
//! the view matrix and field of view. Drags build an orientation offset,
//! committed into the baseline when the gesture ends. Pinches narrow or
//! widen the field of view inside a bounded window, always relative to
//! the value captured when the pinch began. When a pivot target is set,
//! the offset rotation is applied around the target's world position.

use std::sync::{Arc, Mutex, Weak};

use tracing::{debug, trace, warn};

use horizon_common::math::matrix;
use horizon_common::{Mat4, Quaternion, Vec2, Vec3};
use horizon_config::{CameraConfig, RotationMode};

use crate::events::PointerEvent;
use crate::listener::{CameraListener, NullListener};
use crate::recognizer::{Gesture, GestureRecognizer};
use crate::strategy::{ArcballRotation, DelegatedRotation, RotationStrategy};
use crate::target::Target;

/// Field of view a bare [`OrbitCamera::new`] starts with, in degrees.
const DEFAULT_FOV_DEGREES: f64 = 45.0;

/// Window the pinch zoom operates in, in degrees of vertical field of
/// view. Bounds may be passed in either order; construction normalizes
/// them so `low <= high` always holds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomBounds {
    low: f64,
    high: f64,
}

impl ZoomBounds {
    pub fn new(a: f64, b: f64) -> Self {
        if a <= b {
            Self { low: a, high: b }
        } else {
            Self { low: b, high: a }
        }
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    pub fn clamp(&self, fov_degrees: f64) -> f64 {
        fov_degrees.clamp(self.low, self.high)
    }
}

impl Default for ZoomBounds {
    fn default() -> Self {
        Self {
            low: 30.0,
            high: 50.0,
        }
    }
}

/// Where the gesture state machine currently is. Pinching and rotating
/// are mutually exclusive; a pinch wins over a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum GesturePhase {
    #[default]
    Idle,
    Rotating,
    Scaling,
}

struct Frustum {
    fov_degrees: f64,
    /// Field of view captured when the current pinch began. Pinch
    /// updates scale this, never the live value, so a clamped zoom does
    /// not creep when the fingers keep moving.
    baseline_fov: f64,
}

struct ViewState {
    /// Committed orientation from finished drags.
    baseline: Quaternion,
    /// In-progress orientation of the active drag.
    pending: Quaternion,
    eye: Vec3,
    look_at: Vec3,
    up: Vec3,
    target: Option<Weak<dyn Target>>,
    /// Last matrix handed out. Returned again when the target is gone
    /// or the fresh composition goes non-finite.
    last_good: Mat4,
}

struct GestureState {
    phase: GesturePhase,
    recognizer: GestureRecognizer,
    /// Screen point the active drag started at.
    drag_origin: Vec2,
    viewport: Vec2,
}

/// Gesture-driven orbit camera.
///
/// All methods take `&self`; interior state lives behind mutexes so an
/// `Arc<OrbitCamera>` can be shared between the input and render
/// threads. Listener callbacks fire after every internal lock has been
/// released.
pub struct OrbitCamera {
    frustum: Mutex<Frustum>,
    zoom: ZoomBounds,
    view: Mutex<ViewState>,
    gesture: Mutex<GestureState>,
    strategy: Mutex<Arc<dyn RotationStrategy>>,
    listener: Mutex<Arc<dyn CameraListener>>,
}

impl OrbitCamera {
    pub fn new(eye: Vec3, look_at: Vec3, up: Vec3) -> Self {
        Self::with_settings(eye, look_at, up, DEFAULT_FOV_DEGREES, ZoomBounds::default())
    }

    pub fn with_settings(
        eye: Vec3,
        look_at: Vec3,
        up: Vec3,
        fov_degrees: f64,
        zoom: ZoomBounds,
    ) -> Self {
        let initial = matrix::look_at_rh(eye, look_at, up);
        Self {
            frustum: Mutex::new(Frustum {
                fov_degrees,
                baseline_fov: fov_degrees,
            }),
            zoom,
            view: Mutex::new(ViewState {
                baseline: Quaternion::IDENTITY,
                pending: Quaternion::IDENTITY,
                eye,
                look_at,
                up,
                target: None,
                last_good: initial,
            }),
            gesture: Mutex::new(GestureState {
                phase: GesturePhase::Idle,
                recognizer: GestureRecognizer::new(),
                drag_origin: Vec2::ZERO,
                viewport: Vec2::new(1.0, 1.0),
            }),
            strategy: Mutex::new(Arc::new(DelegatedRotation)),
            listener: Mutex::new(Arc::new(NullListener)),
        }
    }

    /// Build a camera from the viewer configuration.
    pub fn from_config(config: &CameraConfig) -> Self {
        let eye = Vec3::new(config.eye[0], config.eye[1], config.eye[2]);
        let look_at = Vec3::new(config.look_at[0], config.look_at[1], config.look_at[2]);
        let up = Vec3::new(config.up[0], config.up[1], config.up[2]);
        let zoom = ZoomBounds::new(config.fov_min_degrees, config.fov_max_degrees);

        let camera = Self::with_settings(eye, look_at, up, config.fov_degrees, zoom);
        let strategy: Arc<dyn RotationStrategy> = match config.rotation {
            RotationMode::Delegated => Arc::new(DelegatedRotation),
            RotationMode::Arcball => Arc::new(ArcballRotation),
        };
        camera.set_rotation_strategy(strategy);

        debug!(
            "camera configured: fov {} in [{}, {}], {:?} rotation",
            config.fov_degrees,
            camera.zoom.low,
            camera.zoom.high,
            config.rotation
        );
        camera
    }

    // ===== Frustum =====

    pub fn field_of_view(&self) -> f64 {
        self.frustum.lock().unwrap().fov_degrees
    }

    /// Set the field of view directly, in degrees.
    ///
    /// Also moves the pinch baseline so a later pinch zooms relative to
    /// this value. Deliberately unclamped: the zoom window governs
    /// pinch-driven changes only.
    pub fn set_field_of_view(&self, fov_degrees: f64) {
        let mut frustum = self.frustum.lock().unwrap();
        frustum.baseline_fov = fov_degrees;
        frustum.fov_degrees = fov_degrees;
    }

    pub fn zoom_bounds(&self) -> ZoomBounds {
        self.zoom
    }

    // ===== View =====

    pub fn eye(&self) -> Vec3 {
        self.view.lock().unwrap().eye
    }

    pub fn look_at(&self) -> Vec3 {
        self.view.lock().unwrap().look_at
    }

    pub fn set_look_at(&self, look_at: Vec3) {
        self.view.lock().unwrap().look_at = look_at;
    }

    /// Committed and in-progress drag rotation combined.
    pub fn orientation_offset(&self) -> Quaternion {
        let view = self.view.lock().unwrap();
        view.baseline * view.pending
    }

    /// Pivot future rotation around `target` and aim at it right away.
    ///
    /// Only a weak handle is kept. When the last strong handle drops,
    /// [`OrbitCamera::view_matrix`] fails closed on the previous matrix
    /// until the camera is retargeted or cleared.
    pub fn set_target(&self, target: &Arc<dyn Target>) {
        let mut view = self.view.lock().unwrap();
        view.look_at = target.world_position();
        view.target = Some(Arc::downgrade(target));
    }

    pub fn clear_target(&self) {
        self.view.lock().unwrap().target = None;
    }

    /// Current pivot target, if one is set and still alive.
    pub fn target(&self) -> Option<Arc<dyn Target>> {
        self.view.lock().unwrap().target.as_ref()?.upgrade()
    }

    /// Compute the current view matrix.
    ///
    /// With a live target the drag rotation pivots around the target's
    /// world position; without one it rotates about the look-at origin.
    /// If the target has been dropped, or the composition goes
    /// non-finite, the last good matrix is returned instead so the
    /// render loop always has something usable.
    pub fn view_matrix(&self) -> Mat4 {
        let mut view = self.view.lock().unwrap();

        let base = matrix::look_at_rh(view.eye, view.look_at, view.up);
        let offset = matrix::rotation(view.baseline * view.pending);

        let composed = match &view.target {
            Some(handle) => match handle.upgrade() {
                Some(target) => {
                    let pivot = target.world_position();
                    let m = matrix::mul(&base, &matrix::translation(pivot));
                    let m = matrix::mul(&m, &offset);
                    matrix::mul(&m, &matrix::translation(-pivot))
                }
                None => {
                    warn!("orbit target dropped, keeping last view matrix");
                    return view.last_good;
                }
            },
            None => matrix::mul(&base, &offset),
        };

        if !matrix::is_finite(&composed) {
            warn!("view matrix went non-finite, keeping last");
            return view.last_good;
        }

        view.last_good = composed;
        composed
    }

    // ===== Input =====

    /// Surface size in pixels, used to normalize drag coordinates.
    /// Degenerate sizes are clamped to one pixel.
    pub fn set_viewport(&self, width: f64, height: f64) {
        let mut gesture = self.gesture.lock().unwrap();
        gesture.viewport = Vec2::new(width.max(1.0), height.max(1.0));
    }

    pub fn set_listener(&self, listener: Arc<dyn CameraListener>) {
        *self.listener.lock().unwrap() = listener;
    }

    pub fn set_rotation_strategy(&self, strategy: Arc<dyn RotationStrategy>) {
        *self.strategy.lock().unwrap() = strategy;
    }

    pub fn is_rotating(&self) -> bool {
        self.gesture.lock().unwrap().phase == GesturePhase::Rotating
    }

    pub fn is_scaling(&self) -> bool {
        self.gesture.lock().unwrap().phase == GesturePhase::Scaling
    }

    /// Feed one raw pointer event through the built-in recognizer.
    pub fn handle_pointer(&self, event: PointerEvent) {
        let gesture = self.gesture.lock().unwrap().recognizer.handle(event);
        if let Some(gesture) = gesture {
            self.handle_gesture(gesture);
        }
    }

    /// Apply an already recognized gesture.
    ///
    /// [`OrbitCamera::handle_pointer`] ends up here; headless drivers
    /// and tests may inject gestures directly. Out-of-order gestures
    /// are tolerated: anything that does not fit the current phase is
    /// logged and dropped without corrupting state.
    pub fn handle_gesture(&self, gesture: Gesture) {
        match gesture {
            Gesture::TouchDown => self.on_touch_down(),
            Gesture::Scroll { dx, dy, position } => self.on_scroll(dx, dy, position),
            Gesture::PinchBegin => self.on_pinch_begin(),
            Gesture::PinchUpdate { scale_factor } => self.on_pinch_update(scale_factor),
            Gesture::PinchEnd => self.on_pinch_end(),
            Gesture::TouchUp => self.on_touch_up(),
        }
    }

    fn on_touch_down(&self) {
        trace!("touch down");
        self.notify(|listener| listener.on_event_start());
    }

    fn on_pinch_begin(&self) {
        self.gesture.lock().unwrap().phase = GesturePhase::Scaling;
        {
            let mut frustum = self.frustum.lock().unwrap();
            frustum.baseline_fov = frustum.fov_degrees;
        }
        debug!("pinch begin");
        self.notify(|listener| listener.on_scale_begin());
    }

    fn on_pinch_update(&self, scale_factor: f64) {
        if self.gesture.lock().unwrap().phase != GesturePhase::Scaling {
            warn!("pinch update outside a pinch, ignoring");
            return;
        }
        if !scale_factor.is_finite() || scale_factor <= 0.0 {
            warn!("ignoring degenerate pinch factor {scale_factor}");
            return;
        }
        {
            let mut frustum = self.frustum.lock().unwrap();
            frustum.fov_degrees = self.zoom.clamp(frustum.baseline_fov / scale_factor);
        }
        self.notify(|listener| listener.on_scale(scale_factor));
    }

    fn on_pinch_end(&self) {
        let was_scaling = {
            let mut gesture = self.gesture.lock().unwrap();
            let was = gesture.phase == GesturePhase::Scaling;
            gesture.phase = GesturePhase::Idle;
            was
        };
        if was_scaling {
            debug!("pinch end at fov {}", self.field_of_view());
            self.notify(|listener| listener.on_scale_end());
        } else {
            warn!("pinch end without a matching begin");
        }
    }

    fn on_scroll(&self, dx: f64, dy: f64, position: Vec2) {
        let (origin, viewport) = {
            let mut gesture = self.gesture.lock().unwrap();
            match gesture.phase {
                GesturePhase::Scaling => {
                    // Two fingers own the event stream; stray drag
                    // deltas during a pinch are noise.
                    trace!("drag suppressed during pinch");
                    return;
                }
                GesturePhase::Idle => {
                    gesture.phase = GesturePhase::Rotating;
                    gesture.drag_origin = Vec2::new(position.x + dx, position.y + dy);
                    trace!("rotation started at {:?}", gesture.drag_origin);
                }
                GesturePhase::Rotating => {}
            }
            (gesture.drag_origin, gesture.viewport)
        };

        // The strategy sees the whole drag so far, origin to current.
        let strategy = self.strategy.lock().unwrap().clone();
        let pending = strategy.rotate(origin, position, viewport);
        self.view.lock().unwrap().pending = pending;

        self.notify(|listener| listener.on_scroll(dx, dy));
    }

    fn on_touch_up(&self) {
        let was_rotating = {
            let mut gesture = self.gesture.lock().unwrap();
            let was = gesture.phase == GesturePhase::Rotating;
            gesture.phase = GesturePhase::Idle;
            was
        };
        if was_rotating {
            let mut view = self.view.lock().unwrap();
            view.baseline = (view.baseline * view.pending).normalized();
            view.pending = Quaternion::IDENTITY;
            trace!("rotation committed");
        }
        self.notify(|listener| listener.on_event_end());
    }

    fn notify<F: FnOnce(&dyn CameraListener)>(&self, callback: F) {
        let listener = self.listener.lock().unwrap().clone();
        callback(listener.as_ref());
    }
}
