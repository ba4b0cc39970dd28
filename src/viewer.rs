//! Standalone demo window backed by winit.
//!
//! The viewer owns a two-transform rig (a controlled root plus a camera
//! pivot child), implements [`DisplayHost`] from accumulated window
//! events, and drives the controller once per redraw. There is no
//! rendering here — the committed yaw is surfaced through debug logging.
//!
//! ```no_run
//! # use turntable::viewer::Viewer;
//! Viewer::builder()
//!     .with_title("Turntable demo")
//!     .build()
//!     .run()
//!     .unwrap();
//! ```

use glam::{Vec2, Vec3};
use winit::{
    application::ApplicationHandler,
    event::{ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::{Window, WindowId},
};

use crate::{
    camera::OrbitCameraController,
    display::{DisplayHost, DisplayId},
    error::TurntableError,
    input::{MouseState, OrbitCommand, Platform, TouchPoint, TouchState},
    options::Options,
    transform::Transform,
    util::tick::TickClock,
};

/// How often the viewer logs the committed yaw, in ticks.
const YAW_LOG_INTERVAL: u64 = 120;

/// Camera pivot offset used by the demo rig: slightly above and behind
/// the model, matching a typical turntable framing.
const PIVOT_OFFSET: Vec3 = Vec3::new(0.0, 1.5, 4.0);

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    options: Option<Options>,
    title: String,
}

impl ViewerBuilder {
    /// Create a builder with sensible defaults (title "Turntable",
    /// default options).
    fn new() -> Self {
        Self {
            options: None,
            title: "Turntable".into(),
        }
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Set the window title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        Viewer {
            options: self.options.unwrap_or_default(),
            title: self.title,
        }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A standalone window that drives an orbit-camera rig from live pointer
/// input.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to
/// enter the event loop.
pub struct Viewer {
    options: Options,
    title: String,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Open the window and run the event loop. Blocks until the window is
    /// closed.
    ///
    /// # Errors
    ///
    /// [`TurntableError::Viewer`] when the event loop cannot be created
    /// or exits abnormally; [`TurntableError::MissingPivot`] is
    /// structurally impossible here but still surfaced if rig
    /// construction fails.
    pub fn run(self) -> Result<(), TurntableError> {
        let event_loop = EventLoop::new()
            .map_err(|e| TurntableError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let rig = Rig::assemble(self.options.clone())?;
        let mut app = ViewerApp {
            window: None,
            host: WinitHost::new(Platform::current()),
            rig,
            clock: TickClock::new(),
            options: self.options,
            title: self.title,
            ticks: 0,
        };

        event_loop
            .run_app(&mut app)
            .map_err(|e| TurntableError::Viewer(e.to_string()))
    }
}

// ── Rig ──────────────────────────────────────────────────────────────────

/// The demo scene: a controlled root transform with a camera pivot child.
struct Rig {
    root: Transform,
    pivot: Transform,
    controller: OrbitCameraController,
}

impl Rig {
    fn assemble(options: Options) -> Result<Self, TurntableError> {
        let root = Transform::IDENTITY;
        let mut pivot = Transform::from_position(PIVOT_OFFSET);
        pivot.look_at(Vec3::ZERO, Vec3::Y);

        let controller =
            OrbitCameraController::attach(Some(&pivot), options)?;
        Ok(Self {
            root,
            pivot,
            controller,
        })
    }

    fn apply(&mut self, command: OrbitCommand) {
        match command {
            OrbitCommand::RotateLeft => self.controller.rotate_left(),
            OrbitCommand::RotateRight => self.controller.rotate_right(),
            OrbitCommand::Reset => {
                self.controller.reset(&mut self.root, &mut self.pivot);
            }
        }
    }
}

// ── Winit-backed display host ────────────────────────────────────────────

/// Accumulates raw window events into the per-tick snapshots the
/// controller samples.
struct WinitHost {
    platform: Platform,
    active_display: Option<DisplayId>,
    mouse: Option<MouseState>,
    /// Touch points keyed by winit touch id; pruned after each tick.
    touches: Vec<(u64, TouchPoint)>,
    touch_seen: bool,
}

impl WinitHost {
    fn new(platform: Platform) -> Self {
        Self {
            platform,
            active_display: None,
            // A desktop host always exposes a mouse dispatcher; its state
            // just starts idle.
            mouse: (!platform.touch_first()).then(|| MouseState {
                primary_down: false,
                position: Vec2::ZERO,
            }),
            touches: Vec::new(),
            touch_seen: platform.touch_first(),
        }
    }

    fn set_cursor(&mut self, position: Vec2) {
        if let Some(mouse) = &mut self.mouse {
            mouse.position = position;
        }
    }

    fn set_primary_button(&mut self, down: bool) {
        if let Some(mouse) = &mut self.mouse {
            mouse.primary_down = down;
        }
    }

    fn upsert_touch(&mut self, id: u64, point: TouchPoint) {
        self.touch_seen = true;
        if let Some(entry) =
            self.touches.iter_mut().find(|(tid, _)| *tid == id)
        {
            entry.1 = point;
        } else {
            self.touches.push((id, point));
        }
    }

    /// Drop points that reported `Released`; the dispatcher surfaces a
    /// release for exactly one tick.
    fn prune_released(&mut self) {
        self.touches.retain(|(_, point)| {
            point.phase == crate::input::TouchPhase::Pressed
        });
    }

    fn refresh_display(&mut self, window: &Window) {
        self.active_display = window
            .current_monitor()
            .and_then(|monitor| monitor.name())
            .map(|name| DisplayId::from_name(&name));
    }
}

impl DisplayHost for WinitHost {
    fn active_display(&self, _name: &str) -> Option<DisplayId> {
        // winit exposes no display-by-name registry; the active monitor
        // of the viewer window stands in for the named display.
        self.active_display
    }

    fn platform(&self) -> Platform {
        self.platform
    }

    fn mouse_state(&self, _display: DisplayId) -> Option<MouseState> {
        self.mouse
    }

    fn touch_state(&self, _display: DisplayId) -> Option<TouchState> {
        self.touch_seen.then(|| TouchState {
            points: self
                .touches
                .iter()
                .map(|(_, point)| *point)
                .collect(),
        })
    }

    fn mark_display_stale(&mut self) {
        log::debug!("active display changed; downstream state is stale");
    }
}

// ── Event loop glue ──────────────────────────────────────────────────────

struct ViewerApp {
    window: Option<Window>,
    host: WinitHost,
    rig: Rig,
    clock: TickClock,
    options: Options,
    title: String,
    ticks: u64,
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        let attrs = Window::default_attributes().with_title(&self.title);
        match event_loop.create_window(attrs) {
            Ok(window) => {
                self.host.refresh_display(&window);
                self.rig.controller.activate(&self.host);
                window.request_redraw();
                self.window = Some(window);
            }
            Err(e) => {
                log::error!("window creation failed: {e}");
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::RedrawRequested => {
                let Some(window) = &self.window else {
                    return;
                };
                self.host.refresh_display(window);

                let dt = self.clock.tick();
                self.rig.controller.update(
                    dt,
                    &mut self.host,
                    &mut self.rig.root,
                );
                self.host.prune_released();

                self.ticks += 1;
                if self.ticks % YAW_LOG_INTERVAL == 0 {
                    log::debug!(
                        "yaw {:+.3} rad ({:.0} ticks/s)",
                        self.rig.root.local_rotation.y,
                        self.clock.rate()
                    );
                }
                window.request_redraw();
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.host.set_cursor(Vec2::new(
                    position.x as f32,
                    position.y as f32,
                ));
            }

            WindowEvent::MouseInput { button, state, .. } => {
                if button == winit::event::MouseButton::Left {
                    self.host
                        .set_primary_button(state == ElementState::Pressed);
                }
            }

            WindowEvent::Touch(touch) => {
                self.host.upsert_touch(
                    touch.id,
                    TouchPoint {
                        position: Vec2::new(
                            touch.location.x as f32,
                            touch.location.y as f32,
                        ),
                        phase: touch.phase.into(),
                    },
                );
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed {
                    if let PhysicalKey::Code(code) = event.physical_key {
                        let key = format!("{code:?}");
                        if let Some(command) =
                            self.options.keybindings.lookup(&key)
                        {
                            self.rig.apply(command);
                        }
                    }
                }
            }

            _ => (),
        }
    }
}
