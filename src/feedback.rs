//! Haptic and animation feedback for node selection.
//!
//! The core never looks up devices itself. Hosts inject a [`FeedbackSink`];
//! [`PatternFeedback`] is a ready-made sink that applies the usual policy on
//! top of a [`Haptics`] device and a [`NodeAnimator`].
//!
//! # Example
//!
//! ```ignore
//! use slint_pattern_lock::{FeedbackConfig, PatternFeedback};
//!
//! let feedback = PatternFeedback::new(config.feedback, MyVibrator, MyAnimator);
//! controller.set_feedback(feedback);
//! ```

use crate::config::FeedbackConfig;
use crate::state::NodeStateChange;
use std::time::Duration;

/// Receives every change of a node's `selected` flag.
pub trait FeedbackSink {
    fn node_state_changed(&mut self, change: NodeStateChange);
}

/// Sink that ignores all changes
#[derive(Debug, Clone, Copy, Default)]
pub struct NoFeedback;

impl FeedbackSink for NoFeedback {
    fn node_state_changed(&mut self, _change: NodeStateChange) {}
}

/// A device able to produce a short vibration
pub trait Haptics {
    fn pulse(&mut self, duration: Duration);
}

/// Plays the enter animation of a node and stops it again
pub trait NodeAnimator {
    fn start(&mut self, number: u8);
    fn stop(&mut self, number: u8);
}

/// No-op animator for hosts without node animations
impl NodeAnimator for () {
    fn start(&mut self, _number: u8) {}
    fn stop(&mut self, _number: u8) {}
}

/// Feedback policy for the pattern lock.
///
/// - Selecting a node starts its animation when `animate` is set.
/// - Selecting a node pulses the haptic device when `haptics_enabled` is set,
///   except for nodes inserted by auto-link.
/// - Deselecting a node stops its animation.
pub struct PatternFeedback<H, A = ()> {
    config: FeedbackConfig,
    haptics: H,
    animator: A,
}

impl<H: Haptics, A: NodeAnimator> PatternFeedback<H, A> {
    pub fn new(config: FeedbackConfig, haptics: H, animator: A) -> Self {
        Self {
            config,
            haptics,
            animator,
        }
    }

    pub fn haptics(&self) -> &H {
        &self.haptics
    }

    pub fn animator(&self) -> &A {
        &self.animator
    }
}

impl<H: Haptics, A: NodeAnimator> FeedbackSink for PatternFeedback<H, A> {
    fn node_state_changed(&mut self, change: NodeStateChange) {
        if change.selected {
            if self.config.animate {
                self.animator.start(change.number);
            }
            if self.config.haptics_enabled && !change.auto_linked {
                self.haptics.pulse(self.config.pulse);
            }
        } else if self.config.animate {
            self.animator.stop(change.number);
        }
    }
}
