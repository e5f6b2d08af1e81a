//! Common test utilities for integration tests.

#![allow(dead_code)]

pub mod harness;

use slint_pattern_lock::{FeedbackSink, GestureObserver, Haptics, NodeAnimator, NodeStateChange};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

/// Tracks callback invocations for testing.
///
/// Each field records calls to the corresponding callback with their arguments.
#[derive(Default, Clone)]
pub struct CallbackTracker {
    /// Sequence passed to each on_node_connected call
    pub node_connected: Rc<RefCell<Vec<Vec<u8>>>>,
    /// Sequence passed to each on_gesture_finished call
    pub gesture_finished: Rc<RefCell<Vec<Vec<u8>>>>,
    /// Every node state change delivered to feedback
    pub state_changes: Rc<RefCell<Vec<NodeStateChange>>>,
    /// (pointer x, pointer y) for each pointer-down from the UI
    pub pointer_down: Rc<RefCell<Vec<(f32, f32)>>>,
    /// Count of pointer-up calls from the UI
    pub pointer_up: Rc<RefCell<usize>>,
}

impl CallbackTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all recorded callbacks.
    pub fn clear(&self) {
        self.node_connected.borrow_mut().clear();
        self.gesture_finished.borrow_mut().clear();
        self.state_changes.borrow_mut().clear();
        self.pointer_down.borrow_mut().clear();
        *self.pointer_up.borrow_mut() = 0;
    }

    /// Observer that records into this tracker.
    pub fn observer(&self) -> TrackingObserver {
        TrackingObserver(self.clone())
    }

    /// Feedback sink that records into this tracker.
    pub fn feedback(&self) -> TrackingFeedback {
        TrackingFeedback(self.clone())
    }
}

pub struct TrackingObserver(CallbackTracker);

impl GestureObserver for TrackingObserver {
    fn on_node_connected(&mut self, sequence: &[u8]) {
        self.0.node_connected.borrow_mut().push(sequence.to_vec());
    }

    fn on_gesture_finished(&mut self, sequence: &[u8]) {
        self.0.gesture_finished.borrow_mut().push(sequence.to_vec());
    }
}

pub struct TrackingFeedback(CallbackTracker);

impl FeedbackSink for TrackingFeedback {
    fn node_state_changed(&mut self, change: NodeStateChange) {
        self.0.state_changes.borrow_mut().push(change);
    }
}

/// Haptic device that records pulses
#[derive(Default, Clone)]
pub struct RecordingHaptics(pub Rc<RefCell<Vec<Duration>>>);

impl Haptics for RecordingHaptics {
    fn pulse(&mut self, duration: Duration) {
        self.0.borrow_mut().push(duration);
    }
}

/// Animator that records (node, started) pairs
#[derive(Default, Clone)]
pub struct RecordingAnimator(pub Rc<RefCell<Vec<(u8, bool)>>>);

impl NodeAnimator for RecordingAnimator {
    fn start(&mut self, number: u8) {
        self.0.borrow_mut().push((number, true));
    }

    fn stop(&mut self, number: u8) {
        self.0.borrow_mut().push((number, false));
    }
}
