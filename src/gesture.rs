//! Gesture recognition: turns pointer events into node selections.
//!
//! [`GestureStateMachine`] owns the [`Grid`], the live [`SelectionPath`] and
//! the pointer position. Each call to [`process`](GestureStateMachine::process)
//! returns the [`GestureEvent`]s the input produced, in order.
//!
//! # State Machine
//!
//! ```text
//!   Idle --down/move--> Tracking --down/move--> Tracking
//!     ^                    |
//!     +-------up/cancel----+
//! ```
//!
//! Completion is instantaneous: `Up` emits `GestureFinished` with the full
//! path and returns to `Idle` with every node deselected. `Cancel` resets the
//! same way but emits `GestureCancelled` instead.
//!
//! # Invariants
//!
//! 1. The path never contains a node twice.
//! 2. A node is selected if and only if it is on the path.
//! 3. In `Idle` the path is empty and there is no pointer position.
//! 4. `NodeConnected` and `GestureFinished` always carry the whole path so far.

use crate::config::GestureConfig;
use crate::error::Result;
use crate::grid::Grid;
use crate::hit_test::Rect;
use crate::links::node_between;
use crate::path::{pattern_segments, Segment};
use crate::selection::SelectionPath;
use crate::state::NodeStateChange;

/// Raw pointer input, in the container's coordinate space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down { x: f32, y: f32 },
    Move { x: f32, y: f32 },
    Up,
    Cancel,
}

/// Lifecycle of the surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GestureState {
    #[default]
    Idle,
    Tracking,
}

/// Observable result of processing a pointer event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GestureEvent {
    /// A node's `selected` flag flipped
    NodeStateChanged(NodeStateChange),
    /// A node was appended; carries the whole path so far
    NodeConnected(Vec<u8>),
    /// The pointer was released over a non-empty path
    GestureFinished(Vec<u8>),
    /// The host aborted the gesture; nothing is reported to observers
    GestureCancelled,
}

/// Pattern lock state machine.
///
/// Single-threaded: events must be processed one at a time in arrival order,
/// and layout must not run concurrently with [`process`](Self::process).
#[derive(Debug, Clone)]
pub struct GestureStateMachine {
    config: GestureConfig,
    grid: Grid,
    path: SelectionPath,
    pointer: Option<(f32, f32)>,
    state: GestureState,
}

impl GestureStateMachine {
    /// Create a machine, validating the configuration.
    pub fn new(config: GestureConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            grid: Grid::new(),
            path: SelectionPath::new(),
            pointer: None,
            state: GestureState::Idle,
        })
    }

    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn state(&self) -> GestureState {
        self.state
    }

    /// Current pointer position, only while tracking
    pub fn pointer(&self) -> Option<(f32, f32)> {
        self.pointer
    }

    pub fn selection(&self) -> &SelectionPath {
        &self.path
    }

    /// Node numbers selected so far, in order
    pub fn sequence(&self) -> &[u8] {
        self.path.as_slice()
    }

    /// Recompute node bounds for a new container size.
    pub fn layout(&mut self, container: Rect) -> Result<()> {
        self.grid.layout(container, &self.config.layout)
    }

    /// Lines to draw: center to center along the path, then to the pointer.
    pub fn segments(&self) -> Vec<Segment> {
        let centers = self
            .path
            .iter()
            .filter_map(|number| self.grid.node(number).and_then(|n| n.center()));
        pattern_segments(centers, self.pointer)
    }

    /// Feed one pointer event through the state machine.
    ///
    /// # Panics
    /// If a `Down` or `Move` arrives before the grid has been laid out.
    pub fn process(&mut self, event: PointerEvent) -> Vec<GestureEvent> {
        match event {
            PointerEvent::Down { x, y } | PointerEvent::Move { x, y } => self.track(x, y),
            PointerEvent::Up => self.finish(),
            PointerEvent::Cancel => self.cancel(),
        }
    }

    fn track(&mut self, x: f32, y: f32) -> Vec<GestureEvent> {
        assert!(self.grid.is_laid_out(), "pointer tracked before layout");
        if self.state == GestureState::Idle {
            tracing::debug!(x, y, "pattern gesture started");
            self.state = GestureState::Tracking;
        }
        self.pointer = Some((x, y));

        let mut events = Vec::new();
        let Some(hit) = self.grid.hit_test(x, y, self.config.touch_slop) else {
            return events;
        };
        if self.grid.is_selected(hit) {
            return events;
        }

        if self.config.auto_link {
            if let Some(middle) = self.path.last().and_then(|last| node_between(last, hit)) {
                if !self.grid.is_selected(middle) {
                    tracing::trace!(middle, from = ?self.path.last(), to = hit, "auto-linking node");
                    self.select(middle, true, &mut events);
                }
            }
        }
        self.select(hit, false, &mut events);
        events
    }

    fn select(&mut self, number: u8, auto_linked: bool, events: &mut Vec<GestureEvent>) {
        self.grid.set_selected(number, true);
        self.path.push(number);
        tracing::trace!(number, auto_linked, "node selected");

        events.push(GestureEvent::NodeStateChanged(NodeStateChange {
            number,
            selected: true,
            auto_linked,
        }));
        events.push(GestureEvent::NodeConnected(self.path.to_vec()));
    }

    fn finish(&mut self) -> Vec<GestureEvent> {
        let mut events = Vec::new();
        if !self.path.is_empty() {
            let sequence = self.path.to_vec();
            tracing::debug!(?sequence, "pattern gesture finished");
            events.push(GestureEvent::GestureFinished(sequence));
        }
        self.reset(&mut events);
        events
    }

    fn cancel(&mut self) -> Vec<GestureEvent> {
        let mut events = Vec::new();
        if self.state == GestureState::Tracking {
            tracing::debug!(discarded = self.path.len(), "pattern gesture cancelled");
            events.push(GestureEvent::GestureCancelled);
        }
        self.reset(&mut events);
        events
    }

    fn reset(&mut self, events: &mut Vec<GestureEvent>) {
        for number in self.path.take() {
            events.push(GestureEvent::NodeStateChanged(NodeStateChange {
                number,
                selected: false,
                auto_linked: false,
            }));
        }
        self.grid.reset();
        self.pointer = None;
        self.state = GestureState::Idle;
    }
}
