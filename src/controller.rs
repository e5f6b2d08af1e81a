//! High-level controller for pattern lock surfaces.
//!
//! The [`PatternLockController`] owns the gesture state machine and exposes
//! ready-made handlers for the callbacks of the `PatternLock` Slint component.
//!
//! # Example
//!
//! ```ignore
//! use slint_pattern_lock::{CallbackObserver, GestureConfig, PatternLockController};
//!
//! slint::include_modules!();
//!
//! fn main() {
//!     let window = MainWindow::new().unwrap();
//!     let ctrl = PatternLockController::new(GestureConfig::new().with_auto_link(true)).unwrap();
//!     let w = window.as_weak();
//!
//!     window.set_node_states(ctrl.node_states());
//!     window.on_resized(ctrl.resize_callback());
//!     window.on_pointer_down(ctrl.pointer_down_callback());
//!     window.on_pointer_move(ctrl.pointer_move_callback());
//!     window.on_pointer_up(ctrl.pointer_up_callback());
//!     window.on_pointer_cancel(ctrl.pointer_cancel_callback());
//!     window.on_node_rect_x(ctrl.node_rect_x_callback());
//!     window.on_node_rect_y(ctrl.node_rect_y_callback());
//!     window.on_node_rect_size(ctrl.node_rect_size_callback());
//!
//!     // Push line commands and geometry changes to the UI
//!     ctrl.on_redraw(move |ctrl| {
//!         if let Some(w) = w.upgrade() {
//!             w.set_path_commands(ctrl.path_commands());
//!             w.set_layout_version(ctrl.layout_version());
//!         }
//!     });
//!
//!     ctrl.set_gesture_callback(
//!         CallbackObserver::new().on_gesture_finished(|seq| println!("pattern: {:?}", seq)),
//!     );
//!
//!     // Initial layout; `changed width` does not fire for the initial size
//!     window.invoke_request_layout();
//!     window.run().unwrap();
//! }
//! ```

use crate::config::GestureConfig;
use crate::emitter::{CallbackEmitter, GestureObserver};
use crate::error::Result;
use crate::feedback::FeedbackSink;
use crate::gesture::{GestureEvent, GestureState, GestureStateMachine, PointerEvent};
use crate::hit_test::Rect;
use crate::path::generate_pattern_path;
use crate::state::{Node, NODE_COUNT};
use slint::{Model, ModelRc, SharedString, VecModel};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

type RedrawHook = Rc<RefCell<Option<Rc<dyn Fn(&PatternLockController)>>>>;

/// Controller that drives a pattern lock from Slint callbacks.
///
/// This provides a high-level API that handles:
/// - Layout of the nine nodes when the component is resized
/// - Pointer handling and node selection
/// - Slint models for the per-node `selected` flags and the current sequence
/// - Line path commands for the connecting lines
/// - Observer and feedback dispatch
///
/// Observers run after the controller has updated its own state, so they may
/// read from the controller. Observers and feedback sinks run while the
/// emitter is borrowed: calling any `handle_*` method, or registering,
/// clearing or replacing observers or feedback from inside a notification
/// panics. Defer such work with `slint::Timer::single_shot`. The redraw hook
/// is released before it runs, so it may call [`on_redraw`](Self::on_redraw).
///
/// Clone this controller to share it across callbacks.
#[derive(Clone)]
pub struct PatternLockController {
    machine: Rc<RefCell<GestureStateMachine>>,
    emitter: Rc<RefCell<CallbackEmitter>>,
    node_states: Rc<VecModel<bool>>,
    sequence: Rc<VecModel<i32>>,
    path_commands: Rc<RefCell<SharedString>>,
    layout_version: Rc<Cell<i32>>,
    redraw: RedrawHook,
}

impl PatternLockController {
    /// Create a controller, validating the configuration.
    pub fn new(config: GestureConfig) -> Result<Self> {
        Ok(Self {
            machine: Rc::new(RefCell::new(GestureStateMachine::new(config)?)),
            emitter: Rc::new(RefCell::new(CallbackEmitter::new())),
            node_states: Rc::new(VecModel::from(vec![false; NODE_COUNT])),
            sequence: Rc::new(VecModel::default()),
            path_commands: Rc::new(RefCell::new(SharedString::new())),
            layout_version: Rc::new(Cell::new(0)),
            redraw: Rc::new(RefCell::new(None)),
        })
    }

    // === Registration ===

    /// Replace the gesture observer.
    pub fn set_gesture_callback<O: GestureObserver + 'static>(&self, observer: O) {
        self.emitter.borrow_mut().set_observer(observer);
    }

    /// Add another gesture observer; observers are notified in the order added.
    pub fn add_gesture_observer<O: GestureObserver + 'static>(&self, observer: O) {
        let mut emitter = self.emitter.borrow_mut();
        emitter.add_observer(observer);
        tracing::debug!(observers = emitter.observer_count(), "gesture observer added");
    }

    /// Remove every gesture observer.
    pub fn clear_gesture_callbacks(&self) {
        let mut emitter = self.emitter.borrow_mut();
        tracing::debug!(removed = emitter.observer_count(), "gesture observers cleared");
        emitter.clear_observers();
    }

    /// Number of registered gesture observers
    pub fn gesture_observer_count(&self) -> usize {
        self.emitter.borrow().observer_count()
    }

    /// Set the sink that receives node selection changes.
    pub fn set_feedback<F: FeedbackSink + 'static>(&self, feedback: F) {
        self.emitter.borrow_mut().set_feedback(feedback);
    }

    /// Called whenever the lines or the node geometry need repainting.
    pub fn on_redraw(&self, f: impl Fn(&PatternLockController) + 'static) {
        *self.redraw.borrow_mut() = Some(Rc::new(f));
    }

    // === State accessors ===

    pub fn state(&self) -> GestureState {
        self.machine.borrow().state()
    }

    /// Node numbers selected so far
    pub fn sequence(&self) -> Vec<u8> {
        self.machine.borrow().sequence().to_vec()
    }

    pub fn config(&self) -> GestureConfig {
        *self.machine.borrow().config()
    }

    /// Bounds of the node at a zero-based index, once laid out
    pub fn node_rect(&self, index: usize) -> Option<Rect> {
        self.machine
            .borrow()
            .grid()
            .nodes()
            .get(index)
            .and_then(Node::bounds)
    }

    /// Per-node `selected` flags, index = number - 1
    pub fn node_states(&self) -> ModelRc<bool> {
        ModelRc::from(self.node_states.clone())
    }

    /// Current sequence as a Slint model
    pub fn sequence_model(&self) -> ModelRc<i32> {
        ModelRc::from(self.sequence.clone())
    }

    /// SVG commands for the connecting lines and the rubber band
    pub fn path_commands(&self) -> SharedString {
        self.path_commands.borrow().clone()
    }

    /// Incremented after every successful layout
    pub fn layout_version(&self) -> i32 {
        self.layout_version.get()
    }

    // === Direct handlers ===

    /// Lay the nodes out for a new component size.
    ///
    /// Returns `Ok(false)` without doing anything if the size is unchanged.
    pub fn handle_resize(&self, width: f32, height: f32) -> Result<bool> {
        let container = Rect::new(0.0, 0.0, width, height);
        {
            let mut machine = self.machine.borrow_mut();
            if machine.grid().container() == Some(container) {
                return Ok(false);
            }
            machine.layout(container)?;
        }
        self.layout_version.set(self.layout_version.get() + 1);
        self.refresh_path();
        self.request_redraw();
        Ok(true)
    }

    pub fn handle_pointer_down(&self, x: f32, y: f32) {
        self.handle_pointer(PointerEvent::Down { x, y });
    }

    pub fn handle_pointer_move(&self, x: f32, y: f32) {
        self.handle_pointer(PointerEvent::Move { x, y });
    }

    pub fn handle_pointer_up(&self) {
        self.handle_pointer(PointerEvent::Up);
    }

    pub fn handle_pointer_cancel(&self) {
        self.handle_pointer(PointerEvent::Cancel);
    }

    /// Run one pointer event through the state machine and notify everyone.
    ///
    /// Down and move events that arrive before the first successful layout
    /// are dropped.
    pub fn handle_pointer(&self, event: PointerEvent) -> Vec<GestureEvent> {
        let events = {
            let mut machine = self.machine.borrow_mut();
            if matches!(event, PointerEvent::Down { .. } | PointerEvent::Move { .. })
                && !machine.grid().is_laid_out()
            {
                tracing::warn!(?event, "pointer event before layout ignored");
                return Vec::new();
            }
            machine.process(event)
        };

        for event in &events {
            if let GestureEvent::NodeStateChanged(change) = event {
                self.node_states
                    .set_row_data(usize::from(change.number - 1), change.selected);
            }
        }
        self.machine.borrow().selection().sync_to_model(&self.sequence);
        self.refresh_path();

        self.emitter.borrow_mut().dispatch(&events);
        self.request_redraw();
        events
    }

    fn refresh_path(&self) {
        let commands = generate_pattern_path(&self.machine.borrow().segments());
        *self.path_commands.borrow_mut() = commands.into();
    }

    fn request_redraw(&self) {
        let redraw = self.redraw.borrow().clone();
        if let Some(redraw) = redraw {
            redraw(self);
        }
    }

    // === Callback factories ===

    /// Returns a callback for `resized`; layout errors are logged.
    pub fn resize_callback(&self) -> impl Fn(f32, f32) {
        let ctrl = self.clone();
        move |width, height| {
            if let Err(err) = ctrl.handle_resize(width, height) {
                tracing::error!(%err, width, height, "pattern lock layout failed");
            }
        }
    }

    /// Returns a callback for `pointer-down`.
    pub fn pointer_down_callback(&self) -> impl Fn(f32, f32) {
        let ctrl = self.clone();
        move |x, y| ctrl.handle_pointer_down(x, y)
    }

    /// Returns a callback for `pointer-move`.
    pub fn pointer_move_callback(&self) -> impl Fn(f32, f32) {
        let ctrl = self.clone();
        move |x, y| ctrl.handle_pointer_move(x, y)
    }

    /// Returns a callback for `pointer-up`.
    pub fn pointer_up_callback(&self) -> impl Fn() {
        let ctrl = self.clone();
        move || ctrl.handle_pointer_up()
    }

    /// Returns a callback for `pointer-cancel`.
    pub fn pointer_cancel_callback(&self) -> impl Fn() {
        let ctrl = self.clone();
        move || ctrl.handle_pointer_cancel()
    }

    /// Returns a callback for `node-rect-x(index, layout-version)`.
    pub fn node_rect_x_callback(&self) -> impl Fn(i32, i32) -> f32 {
        self.node_rect_callback(|r| r.x)
    }

    /// Returns a callback for `node-rect-y(index, layout-version)`.
    pub fn node_rect_y_callback(&self) -> impl Fn(i32, i32) -> f32 {
        self.node_rect_callback(|r| r.y)
    }

    /// Returns a callback for `node-rect-size(index, layout-version)`.
    pub fn node_rect_size_callback(&self) -> impl Fn(i32, i32) -> f32 {
        self.node_rect_callback(|r| r.width)
    }

    fn node_rect_callback(&self, field: fn(&Rect) -> f32) -> impl Fn(i32, i32) -> f32 {
        let ctrl = self.clone();
        move |index, _version| {
            usize::try_from(index)
                .ok()
                .and_then(|i| ctrl.node_rect(i))
                .map_or(0.0, |r| field(&r))
        }
    }
}
