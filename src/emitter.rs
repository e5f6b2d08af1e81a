//! Delivery of gesture events to observers and feedback collaborators.

use crate::feedback::{FeedbackSink, NoFeedback};
use crate::gesture::GestureEvent;

/// Observer of pattern input.
///
/// Both methods receive the whole sequence selected so far, not just the
/// newest node.
pub trait GestureObserver {
    /// A node was appended to the pattern
    fn on_node_connected(&mut self, _sequence: &[u8]) {}

    /// The pointer was released over a non-empty pattern
    fn on_gesture_finished(&mut self, _sequence: &[u8]) {}
}

/// Observer built from two closures.
///
/// # Example
///
/// ```ignore
/// let observer = CallbackObserver::new()
///     .on_node_connected(|seq| println!("so far: {:?}", seq))
///     .on_gesture_finished(|seq| check_pattern(seq));
/// controller.set_gesture_callback(observer);
/// ```
#[derive(Default)]
pub struct CallbackObserver {
    connected: Option<Box<dyn FnMut(&[u8])>>,
    finished: Option<Box<dyn FnMut(&[u8])>>,
}

impl CallbackObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_node_connected(mut self, f: impl FnMut(&[u8]) + 'static) -> Self {
        self.connected = Some(Box::new(f));
        self
    }

    pub fn on_gesture_finished(mut self, f: impl FnMut(&[u8]) + 'static) -> Self {
        self.finished = Some(Box::new(f));
        self
    }
}

impl GestureObserver for CallbackObserver {
    fn on_node_connected(&mut self, sequence: &[u8]) {
        if let Some(f) = &mut self.connected {
            f(sequence);
        }
    }

    fn on_gesture_finished(&mut self, sequence: &[u8]) {
        if let Some(f) = &mut self.finished {
            f(sequence);
        }
    }
}

/// Routes [`GestureEvent`]s to observers and to the feedback sink.
///
/// Observers are called in registration order and each sees every event.
/// The emitter holds no gesture state of its own.
pub struct CallbackEmitter {
    observers: Vec<Box<dyn GestureObserver>>,
    feedback: Box<dyn FeedbackSink>,
}

impl Default for CallbackEmitter {
    fn default() -> Self {
        Self::new()
    }
}

impl CallbackEmitter {
    pub fn new() -> Self {
        Self {
            observers: Vec::new(),
            feedback: Box::new(NoFeedback),
        }
    }

    /// Replace all observers with a single one
    pub fn set_observer<O: GestureObserver + 'static>(&mut self, observer: O) {
        self.observers.clear();
        self.observers.push(Box::new(observer));
    }

    /// Add an observer after the existing ones
    pub fn add_observer<O: GestureObserver + 'static>(&mut self, observer: O) {
        self.observers.push(Box::new(observer));
    }

    pub fn clear_observers(&mut self) {
        self.observers.clear();
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    pub fn set_feedback<F: FeedbackSink + 'static>(&mut self, feedback: F) {
        self.feedback = Box::new(feedback);
    }

    /// Deliver events in order
    pub fn dispatch(&mut self, events: &[GestureEvent]) {
        for event in events {
            match event {
                GestureEvent::NodeStateChanged(change) => {
                    self.feedback.node_state_changed(*change);
                }
                GestureEvent::NodeConnected(sequence) => {
                    for observer in &mut self.observers {
                        observer.on_node_connected(sequence);
                    }
                }
                GestureEvent::GestureFinished(sequence) => {
                    for observer in &mut self.observers {
                        observer.on_gesture_finished(sequence);
                    }
                }
                GestureEvent::GestureCancelled => {}
            }
        }
    }
}
