//! # Slint Pattern Lock Library
//!
//! A 3x3 "pattern lock" gesture surface for Slint. The user drags a pointer
//! across nine nodes to draw an ordered, non-repeating sequence; the library
//! reports every connected node and the finished pattern.
//!
//! ## Features
//!
//! - **Gesture Core** - Hit-testing with touch slop, selection path and lifecycle
//!   in a plain Rust state machine, independent of any UI toolkit
//! - **Auto-Link** - Nodes passed over between two aligned nodes are connected
//!   automatically
//! - **Injected Feedback** - Haptics and node animations are supplied by the host,
//!   with auto-linked nodes flagged so they can skip the haptic pulse
//! - **Slint Integration** - A controller with ready-made callbacks and models for
//!   the `PatternLock` component
//!
//! ## Quick Start
//!
//! ```slint
//! import { PatternLock } from "@slint-pattern-lock/pattern-lock.slint";
//!
//! export component MainWindow inherits Window {
//!     PatternLock {
//!         // Wire callbacks to a PatternLockController
//!     }
//! }
//! ```
//!
//! ## Rust Helpers
//!
//! - [`PatternLockController`] - Shared controller for Slint callbacks
//! - [`GestureStateMachine`] - Toolkit-independent gesture recognition
//! - [`Grid`] - Node geometry, layout and hit-testing
//! - [`node_between`] - Middle node between two aligned nodes
//! - [`CallbackEmitter`] - Observer and feedback dispatch
//! - [`PatternFeedback`] - Haptic/animation policy for node selection

pub mod config;
pub mod controller;
pub mod emitter;
pub mod error;
pub mod feedback;
pub mod gesture;
pub mod grid;
pub mod links;
pub mod path;
pub mod selection;
pub mod state;

pub use config::{FeedbackConfig, GestureConfig, LayoutConfig, LayoutMode, DEFAULT_PULSE};
pub use controller::PatternLockController;
pub use emitter::{CallbackEmitter, CallbackObserver, GestureObserver};
pub use error::{PatternLockError, Result};
pub use feedback::{FeedbackSink, Haptics, NoFeedback, NodeAnimator, PatternFeedback};
pub use gesture::{GestureEvent, GestureState, GestureStateMachine, PointerEvent};
pub use grid::Grid;
pub use hit_test::{find_node_at, NodeGeometry, Rect};
pub use links::node_between;
pub use path::{generate_pattern_path, pattern_segments, Segment};
pub use selection::SelectionPath;
pub use state::{Node, NodeStateChange, NODE_COUNT};
