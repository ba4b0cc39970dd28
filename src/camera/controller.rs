//! The orbit-camera controller.
//!
//! One controller instance drives one target transform. Per tick it runs
//! four stages in order: display/device binding refresh, pointer
//! sampling, drag tracking into the orbit angle, and a dirty-gated
//! transform commit. Discrete steps and reset are plain method calls the
//! host makes between ticks.

use glam::{Vec2, Vec3};

use crate::camera::state::{DragSession, OrbitState};
use crate::display::{DeviceBinding, DisplayHost, PointerSource};
use crate::error::TurntableError;
use crate::input::TouchPhase;
use crate::options::Options;
use crate::transform::Transform;

/// Per-frame orbit-camera controller.
///
/// Converts pointer drags and discrete step commands into an accumulated
/// horizontal orbit angle, committed to the target transform's yaw once
/// per tick when it changed.
///
/// # Usage
///
/// ```
/// use glam::Vec3;
/// use turntable::{Options, OrbitCameraController, Transform};
///
/// let pivot = Transform::from_position(Vec3::new(0.0, 1.0, 4.0));
/// let mut controller =
///     OrbitCameraController::attach(Some(&pivot), Options::default())
///         .unwrap();
/// controller.rotate_right();
/// assert!(controller.angle() > 0.0);
/// ```
#[derive(Debug)]
pub struct OrbitCameraController {
    options: Options,
    orbit: OrbitState,
    drag: DragSession,
    binding: DeviceBinding,
    /// Pivot local position captured at attach, restored verbatim on reset.
    pivot_initial_position: Vec3,
}

impl OrbitCameraController {
    /// Attach the controller, capturing the pivot's initial local position
    /// as the reset baseline.
    ///
    /// `pivot` is the result of the host's entity lookup. A missing pivot
    /// is a structural error and fails immediately — the controller would
    /// have no baseline to reset to.
    ///
    /// # Errors
    ///
    /// [`TurntableError::MissingPivot`] when `pivot` is `None`.
    pub fn attach(
        pivot: Option<&Transform>,
        options: Options,
    ) -> Result<Self, TurntableError> {
        let pivot = pivot.ok_or(TurntableError::MissingPivot)?;
        log::debug!(
            "controller attached; pivot baseline {}",
            pivot.local_position
        );
        Ok(Self {
            options,
            orbit: OrbitState::new(),
            drag: DragSession::new(),
            binding: DeviceBinding::new(),
            pivot_initial_position: pivot.local_position,
        })
    }

    /// Activation hook: resolve the display and pointer dispatcher before
    /// the first tick. Does not signal downstream.
    pub fn activate<H: DisplayHost>(&mut self, host: &H) {
        self.binding.resolve(host, &self.options.display.name);
    }

    /// Per-tick update: binding refresh → pointer sampling → commit.
    ///
    /// `_dt` is the host loop's elapsed time; it is the tick trigger
    /// only. The orbit is input-driven, not time-driven.
    pub fn update<H: DisplayHost>(
        &mut self,
        _dt: f32,
        host: &mut H,
        target: &mut Transform,
    ) {
        self.binding.refresh(host, &self.options.display.name);
        self.sample_input(host);
        self.commit(target);
    }

    /// Accumulated orbit angle in radians.
    #[must_use]
    pub const fn angle(&self) -> f32 {
        self.orbit.angle()
    }

    /// Whether a drag is currently in progress.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.drag.is_active()
    }

    /// The current display/pointer binding.
    #[must_use]
    pub const fn binding(&self) -> &DeviceBinding {
        &self.binding
    }

    /// Accumulate a pre-scaled orbit delta.
    ///
    /// Only the horizontal component affects the orbit; the vertical
    /// component is reserved for vertical orbit and intentionally unused.
    /// Hosts may call this directly to feed synthetic drags.
    pub fn orbit(&mut self, delta: Vec2) {
        self.orbit.accumulate(delta);
    }

    /// Step the orbit one increment to the left.
    ///
    /// Independent of drag state; additive per call.
    pub fn rotate_left(&mut self) {
        self.orbit.step(-self.options.camera.step_angle);
    }

    /// Step the orbit one increment to the right.
    ///
    /// Independent of drag state; additive per call.
    pub fn rotate_right(&mut self) {
        self.orbit.step(self.options.camera.step_angle);
    }

    /// Restore the attach-time baseline.
    ///
    /// The pivot returns to its captured local position and re-orients to
    /// look at the origin with +Y up; the target returns to identity; the
    /// angle zeroes and any in-progress drag is abandoned. The rotation is
    /// written directly here, so no commit is forced.
    ///
    /// Callable at any time, including mid-drag.
    pub fn reset(&mut self, target: &mut Transform, pivot: &mut Transform) {
        pivot.local_position = self.pivot_initial_position;
        pivot.look_at(Vec3::ZERO, Vec3::Y);
        target.local_position = Vec3::ZERO;
        target.local_rotation = Vec3::ZERO;

        self.orbit.reset_angle();
        self.drag.release();
    }

    /// Choose exactly one input channel for this tick.
    fn sample_input<H: DisplayHost>(&mut self, host: &H) {
        if host.platform().touch_first() {
            self.sample_touch(host);
        } else {
            self.sample_mouse(host);
        }
    }

    fn sample_mouse<H: DisplayHost>(&mut self, host: &H) {
        if self.binding.source() != PointerSource::Mouse {
            return;
        }
        let Some(display) = self.binding.display() else {
            return;
        };
        let Some(mouse) = host.mouse_state(display) else {
            return;
        };

        if mouse.primary_down {
            self.drag_sample(mouse.position);
        } else {
            self.drag.release();
        }
    }

    fn sample_touch<H: DisplayHost>(&mut self, host: &H) {
        if self.binding.source() != PointerSource::Touch {
            return;
        }
        let Some(display) = self.binding.display() else {
            return;
        };
        let Some(touch) = host.touch_state(display) else {
            return;
        };
        // Zero points is a no-op tick, not a release.
        let Some(point) = touch.primary() else {
            return;
        };

        match point.phase {
            TouchPhase::Pressed => self.drag_sample(point.position),
            TouchPhase::Released => self.drag.release(),
        }
    }

    /// Feed one held pointer sample through the drag tracker.
    fn drag_sample(&mut self, position: Vec2) {
        if let Some(delta) = self.drag.track(position) {
            self.orbit
                .accumulate(delta * self.options.camera.orbit_sensitivity);
        }
    }

    /// Write `-angle` into the target's yaw, if the angle changed since
    /// the last commit. The only transform mutation outside
    /// [`Self::reset`].
    fn commit(&mut self, target: &mut Transform) {
        if !self.orbit.dirty() {
            return;
        }
        let mut rotation = target.local_rotation;
        rotation.y = -self.orbit.angle();
        target.local_rotation = rotation;
        self.orbit.mark_committed();
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::display::DisplayId;
    use crate::input::{MouseState, Platform, TouchPoint, TouchState};

    const EPS: f32 = 1e-6;

    struct MockHost {
        platform: Platform,
        display: Option<DisplayId>,
        mouse: Option<MouseState>,
        touch: Option<TouchState>,
        stale_marks: u32,
    }

    impl MockHost {
        fn desktop_with_mouse() -> Self {
            Self {
                platform: Platform::Desktop,
                display: Some(DisplayId(1)),
                mouse: Some(MouseState {
                    primary_down: false,
                    position: Vec2::ZERO,
                }),
                touch: None,
                stale_marks: 0,
            }
        }

        fn mobile_with_touch() -> Self {
            Self {
                platform: Platform::Mobile,
                display: Some(DisplayId(1)),
                mouse: None,
                touch: Some(TouchState::default()),
                stale_marks: 0,
            }
        }

        fn press(&mut self, x: f32, y: f32) {
            self.mouse = Some(MouseState {
                primary_down: true,
                position: Vec2::new(x, y),
            });
        }

        fn release(&mut self) {
            if let Some(mouse) = &mut self.mouse {
                mouse.primary_down = false;
            }
        }

        fn touch_point(&mut self, x: f32, y: f32, phase: TouchPhase) {
            self.touch = Some(TouchState {
                points: vec![TouchPoint {
                    position: Vec2::new(x, y),
                    phase,
                }],
            });
        }
    }

    impl DisplayHost for MockHost {
        fn active_display(&self, _name: &str) -> Option<DisplayId> {
            self.display
        }

        fn platform(&self) -> Platform {
            self.platform
        }

        fn mouse_state(&self, _display: DisplayId) -> Option<MouseState> {
            self.mouse
        }

        fn touch_state(&self, _display: DisplayId) -> Option<TouchState> {
            self.touch.clone()
        }

        fn mark_display_stale(&mut self) {
            self.stale_marks += 1;
        }
    }

    fn rig() -> (OrbitCameraController, Transform, Transform) {
        let pivot = Transform::from_position(Vec3::new(0.0, 1.2, 3.4));
        let controller =
            OrbitCameraController::attach(Some(&pivot), Options::default())
                .unwrap();
        (controller, Transform::IDENTITY, pivot)
    }

    fn tick(
        controller: &mut OrbitCameraController,
        host: &mut MockHost,
        target: &mut Transform,
    ) {
        controller.update(1.0 / 60.0, host, target);
    }

    #[test]
    fn attach_without_pivot_is_fatal() {
        let result = OrbitCameraController::attach(None, Options::default());
        assert!(matches!(result, Err(TurntableError::MissingPivot)));
    }

    #[test]
    fn drag_accumulates_scaled_horizontal_deltas() {
        let (mut controller, mut target, _pivot) = rig();
        let mut host = MockHost::desktop_with_mouse();
        controller.activate(&host);

        host.press(100.0, 50.0);
        tick(&mut controller, &mut host, &mut target);
        assert!(controller.angle().abs() < EPS);

        host.press(90.0, 60.0);
        tick(&mut controller, &mut host, &mut target);
        assert!((controller.angle() - 0.05).abs() < EPS);

        host.press(70.0, 0.0);
        tick(&mut controller, &mut host, &mut target);
        assert!((controller.angle() - 0.15).abs() < EPS);
        assert!((target.local_rotation.y + 0.15).abs() < EPS);
    }

    #[test]
    fn release_and_repress_reseeds_the_baseline() {
        let (mut controller, mut target, _pivot) = rig();
        let mut host = MockHost::desktop_with_mouse();
        controller.activate(&host);

        host.press(100.0, 0.0);
        tick(&mut controller, &mut host, &mut target);
        host.press(90.0, 0.0);
        tick(&mut controller, &mut host, &mut target);
        assert!((controller.angle() - 0.05).abs() < EPS);

        host.release();
        tick(&mut controller, &mut host, &mut target);
        assert!(!controller.is_dragging());

        // The new press seeds at x=50; no 90→50 delta leaks in.
        host.press(50.0, 0.0);
        tick(&mut controller, &mut host, &mut target);
        assert!((controller.angle() - 0.05).abs() < EPS);

        host.press(40.0, 0.0);
        tick(&mut controller, &mut host, &mut target);
        assert!((controller.angle() - 0.1).abs() < EPS);
    }

    #[test]
    fn vertical_motion_never_reaches_the_transform() {
        let (mut controller, mut target, _pivot) = rig();
        target.local_rotation.x = 0.3;
        let mut host = MockHost::desktop_with_mouse();
        controller.activate(&host);

        host.press(100.0, 10.0);
        tick(&mut controller, &mut host, &mut target);
        host.press(100.0, 300.0);
        tick(&mut controller, &mut host, &mut target);

        assert!(controller.angle().abs() < EPS);
        assert!((target.local_rotation.x - 0.3).abs() < EPS);
        assert!(target.local_rotation.y.abs() < EPS);
    }

    #[test]
    fn steps_round_trip_and_mark_dirty() {
        let (mut controller, mut target, _pivot) = rig();
        let mut host = MockHost::desktop_with_mouse();
        controller.activate(&host);

        controller.rotate_left();
        assert!((controller.angle() + 0.1).abs() < EPS);
        tick(&mut controller, &mut host, &mut target);
        assert!((target.local_rotation.y - 0.1).abs() < EPS);

        controller.rotate_right();
        assert!(controller.angle().abs() < EPS);
        tick(&mut controller, &mut host, &mut target);
        assert!(target.local_rotation.y.abs() < EPS);
    }

    #[test]
    fn commit_is_gated_by_the_dirty_flag() {
        let (mut controller, mut target, _pivot) = rig();
        let mut host = MockHost::desktop_with_mouse();
        controller.activate(&host);

        controller.rotate_left();
        tick(&mut controller, &mut host, &mut target);
        assert!((target.local_rotation.y - 0.1).abs() < EPS);

        // No input mutation since the last commit: the sentinel survives.
        target.local_rotation.y = 123.0;
        tick(&mut controller, &mut host, &mut target);
        assert_eq!(target.local_rotation.y, 123.0);
    }

    #[test]
    fn touch_channel_mirrors_mouse_logic() {
        let (mut controller, mut target, _pivot) = rig();
        let mut host = MockHost::mobile_with_touch();
        controller.activate(&host);

        host.touch_point(100.0, 0.0, TouchPhase::Pressed);
        tick(&mut controller, &mut host, &mut target);
        assert!(controller.angle().abs() < EPS);

        host.touch_point(90.0, 0.0, TouchPhase::Pressed);
        tick(&mut controller, &mut host, &mut target);
        assert!((controller.angle() - 0.05).abs() < EPS);

        host.touch_point(90.0, 0.0, TouchPhase::Released);
        tick(&mut controller, &mut host, &mut target);
        assert!(!controller.is_dragging());

        host.touch_point(50.0, 0.0, TouchPhase::Pressed);
        tick(&mut controller, &mut host, &mut target);
        assert!((controller.angle() - 0.05).abs() < EPS);
    }

    #[test]
    fn empty_touch_set_is_a_no_op_tick() {
        let (mut controller, mut target, _pivot) = rig();
        let mut host = MockHost::mobile_with_touch();
        controller.activate(&host);

        host.touch_point(100.0, 0.0, TouchPhase::Pressed);
        tick(&mut controller, &mut host, &mut target);
        host.touch_point(90.0, 0.0, TouchPhase::Pressed);
        tick(&mut controller, &mut host, &mut target);
        assert!((controller.angle() - 0.05).abs() < EPS);

        // Points vanish without a release: not a release, nothing changes.
        host.touch = Some(TouchState::default());
        tick(&mut controller, &mut host, &mut target);
        assert!(controller.is_dragging());
        assert!((controller.angle() - 0.05).abs() < EPS);
    }

    #[test]
    fn extra_touch_points_are_ignored() {
        let (mut controller, mut target, _pivot) = rig();
        let mut host = MockHost::mobile_with_touch();
        controller.activate(&host);

        host.touch_point(100.0, 0.0, TouchPhase::Pressed);
        tick(&mut controller, &mut host, &mut target);

        host.touch = Some(TouchState {
            points: vec![
                TouchPoint {
                    position: Vec2::new(90.0, 0.0),
                    phase: TouchPhase::Pressed,
                },
                TouchPoint {
                    position: Vec2::new(9999.0, 9999.0),
                    phase: TouchPhase::Pressed,
                },
            ],
        });
        tick(&mut controller, &mut host, &mut target);
        assert!((controller.angle() - 0.05).abs() < EPS);
    }

    #[test]
    fn only_one_channel_runs_per_tick() {
        // Both dispatchers present, desktop platform: only the mouse
        // channel executes, so the pressed touch point is never consumed.
        let (mut controller, mut target, _pivot) = rig();
        let mut host = MockHost::desktop_with_mouse();
        host.touch = Some(TouchState {
            points: vec![TouchPoint {
                position: Vec2::new(10.0, 0.0),
                phase: TouchPhase::Pressed,
            }],
        });
        controller.activate(&host);

        tick(&mut controller, &mut host, &mut target);
        tick(&mut controller, &mut host, &mut target);
        assert!(!controller.is_dragging());
        assert!(controller.angle().abs() < EPS);
    }

    #[test]
    fn reset_restores_baseline_from_any_state() {
        let (mut controller, mut target, mut pivot) = rig();
        let initial_pivot_position = pivot.local_position;
        let mut host = MockHost::desktop_with_mouse();
        controller.activate(&host);

        host.press(100.0, 0.0);
        tick(&mut controller, &mut host, &mut target);
        host.press(60.0, 0.0);
        tick(&mut controller, &mut host, &mut target);
        controller.rotate_right();
        tick(&mut controller, &mut host, &mut target);

        pivot.local_position = Vec3::new(9.0, 9.0, 9.0);
        pivot.local_rotation = Vec3::new(1.0, 2.0, 3.0);

        // Mid-drag reset: every baseline restored, drag abandoned.
        controller.reset(&mut target, &mut pivot);
        assert!(controller.angle().abs() < EPS);
        assert!(!controller.is_dragging());
        assert_eq!(target.local_position, Vec3::ZERO);
        assert_eq!(target.local_rotation, Vec3::ZERO);
        assert_eq!(pivot.local_position, initial_pivot_position);
        assert!(
            (pivot.forward()
                - (-initial_pivot_position).normalize())
            .length()
                < 1e-4
        );

        // The abandoned drag does not leak a delta into the next press.
        host.press(10.0, 0.0);
        tick(&mut controller, &mut host, &mut target);
        assert!(controller.angle().abs() < EPS);
    }

    #[test]
    fn reset_does_not_force_a_recommit() {
        let (mut controller, mut target, mut pivot) = rig();
        let mut host = MockHost::desktop_with_mouse();
        controller.activate(&host);

        // Drain the attach-time dirty flag.
        tick(&mut controller, &mut host, &mut target);

        controller.reset(&mut target, &mut pivot);
        target.local_rotation.y = 5.0;
        tick(&mut controller, &mut host, &mut target);
        assert_eq!(target.local_rotation.y, 5.0);
    }

    #[test]
    fn display_loss_degrades_to_no_op_and_recovers() {
        let (mut controller, mut target, _pivot) = rig();
        let mut host = MockHost::desktop_with_mouse();
        controller.activate(&host);
        assert_eq!(controller.binding().source(), PointerSource::Mouse);

        host.display = None;
        host.press(100.0, 0.0);
        tick(&mut controller, &mut host, &mut target);
        assert_eq!(host.stale_marks, 1);
        assert_eq!(controller.binding().source(), PointerSource::None);
        assert!(!controller.is_dragging());

        // The display comes back: rebinds and input flows again.
        host.display = Some(DisplayId(1));
        tick(&mut controller, &mut host, &mut target);
        assert_eq!(host.stale_marks, 2);
        assert!(controller.is_dragging());
    }
}
