//! Test harness for the pattern lock window.
//!
//! Builds `tests/ui/test.slint`, wires every callback to a
//! [`PatternLockController`] with callback tracking, and provides helpers for
//! simulating user interactions.

#![allow(dead_code)]

use super::CallbackTracker;
use slint::{
    platform::{PointerEventButton, WindowEvent},
    ComponentHandle, LogicalPosition, LogicalSize, Model,
};
use slint_pattern_lock::{GestureConfig, LayoutConfig, PatternLockController};

// Include the compiled UI from build.rs
slint::include_modules!();

/// Edge length of the test window
pub const WINDOW_SIZE: f32 = 300.0;

/// Initialize the testing backend for this thread.
/// With init_no_event_loop(), each test thread can have its own backend instance.
/// Uses thread_local to ensure each thread only initializes once.
fn init_testing_backend() {
    use std::cell::Cell;
    thread_local! {
        static INITIALIZED: Cell<bool> = const { Cell::new(false) };
    }

    INITIALIZED.with(|init| {
        if !init.get() {
            i_slint_backend_testing::init_no_event_loop();
            init.set(true);
        }
    });
}

/// Test harness for a 300x300 pattern lock.
pub struct PatternLockTestHarness {
    pub window: MainWindow,
    pub ctrl: PatternLockController,
    pub tracker: CallbackTracker,
}

impl PatternLockTestHarness {
    /// Harness with auto-link enabled and nodes tiled edge to edge.
    pub fn new() -> Self {
        Self::with_config(
            GestureConfig::new()
                .with_auto_link(true)
                .with_layout(LayoutConfig::tiled(0.0, 0.0)),
        )
    }

    pub fn with_config(config: GestureConfig) -> Self {
        let harness = Self::without_layout(config);
        harness.window.invoke_request_layout();
        harness
    }

    /// Fully wired window whose initial `request-layout` has not run yet.
    pub fn without_layout(config: GestureConfig) -> Self {
        init_testing_backend();
        let window = MainWindow::new().unwrap();
        window
            .window()
            .set_size(LogicalSize::new(WINDOW_SIZE, WINDOW_SIZE));
        let ctrl = PatternLockController::new(config).unwrap();
        let tracker = CallbackTracker::new();
        let w = window.as_weak();

        window.set_node_states(ctrl.node_states());

        // Geometry
        window.on_resized(ctrl.resize_callback());
        window.on_node_rect_x(ctrl.node_rect_x_callback());
        window.on_node_rect_y(ctrl.node_rect_y_callback());
        window.on_node_rect_size(ctrl.node_rect_size_callback());

        // Pointer input
        window.on_pointer_down({
            let ctrl = ctrl.clone();
            let tracker = tracker.clone();
            move |x, y| {
                tracker.pointer_down.borrow_mut().push((x, y));
                ctrl.handle_pointer_down(x, y);
            }
        });
        window.on_pointer_move(ctrl.pointer_move_callback());
        window.on_pointer_up({
            let ctrl = ctrl.clone();
            let tracker = tracker.clone();
            move || {
                *tracker.pointer_up.borrow_mut() += 1;
                ctrl.handle_pointer_up();
            }
        });
        window.on_pointer_cancel(ctrl.pointer_cancel_callback());

        // Repaint lines and node geometry
        ctrl.on_redraw(move |ctrl| {
            if let Some(w) = w.upgrade() {
                w.set_path_commands(ctrl.path_commands());
                w.set_layout_version(ctrl.layout_version());
            }
        });

        ctrl.set_gesture_callback(tracker.observer());
        ctrl.set_feedback(tracker.feedback());

        Self {
            window,
            ctrl,
            tracker,
        }
    }

    /// Process all pending events and render a frame.
    pub fn pump_events(&self) {
        slint::platform::update_timers_and_animations();
    }

    /// Center of a node by number (1..=9) in window coordinates.
    pub fn node_center(&self, number: u8) -> (f32, f32) {
        self.ctrl
            .node_rect(usize::from(number - 1))
            .expect("grid is laid out")
            .center()
    }

    /// Selected flags as currently bound to the window.
    pub fn window_node_states(&self) -> Vec<bool> {
        self.window.get_node_states().iter().collect()
    }

    // === Mouse event helpers ===

    /// Simulate mouse down at the given position.
    pub fn mouse_down(&self, x: f32, y: f32) {
        self.window
            .window()
            .dispatch_event(WindowEvent::PointerPressed {
                position: LogicalPosition::new(x, y),
                button: PointerEventButton::Left,
            });
        self.pump_events();
    }

    /// Simulate mouse move to the given position.
    pub fn mouse_move(&self, x: f32, y: f32) {
        self.window
            .window()
            .dispatch_event(WindowEvent::PointerMoved {
                position: LogicalPosition::new(x, y),
            });
        self.pump_events();
    }

    /// Simulate mouse up at the given position.
    pub fn mouse_up(&self, x: f32, y: f32) {
        self.window
            .window()
            .dispatch_event(WindowEvent::PointerReleased {
                position: LogicalPosition::new(x, y),
                button: PointerEventButton::Left,
            });
        self.pump_events();
    }

    /// Simulate a drag through the centers of the given nodes, then release.
    pub fn draw_pattern(&self, numbers: &[u8]) {
        let Some((&first, rest)) = numbers.split_first() else {
            return;
        };
        let (x, y) = self.node_center(first);
        self.mouse_down(x, y);
        let mut last = (x, y);
        for &number in rest {
            last = self.node_center(number);
            self.mouse_move(last.0, last.1);
        }
        self.mouse_up(last.0, last.1);
    }
}

impl Default for PatternLockTestHarness {
    fn default() -> Self {
        Self::new()
    }
}
