//! Configuration for the gesture surface.
//!
//! All values are fixed at construction time. The core only interprets the
//! hit-test slop, the auto-link flag and the layout sizing; feedback settings
//! are forwarded untouched to [`PatternFeedback`](crate::PatternFeedback).

use crate::error::{PatternLockError, Result};
use std::time::Duration;

/// Default haptic pulse length.
pub const DEFAULT_PULSE: Duration = Duration::from_millis(20);

/// How node rectangles are sized inside the container.
///
/// `node_size` and the `padding`/`spacing` pair are mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutConfig {
    /// Explicit node edge length; nodes are centered in their cells
    pub node_size: Option<f32>,
    /// Inset between the container edge and the outer nodes
    pub padding: Option<f32>,
    /// Gap between neighbouring nodes
    pub spacing: Option<f32>,
}

/// Resolved sizing mode after validation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LayoutMode {
    /// Each node is `node_size` wide, centered in its third of the container
    Fixed { node_size: f32 },
    /// Node size is derived from the container, padding and spacing
    Tiled { padding: f32, spacing: f32 },
}

impl LayoutConfig {
    /// Nodes of a fixed size centered in their cells.
    pub fn fixed(node_size: f32) -> Self {
        Self {
            node_size: Some(node_size),
            ..Self::default()
        }
    }

    /// Nodes tiled edge to edge with the given padding and spacing.
    pub fn tiled(padding: f32, spacing: f32) -> Self {
        Self {
            node_size: None,
            padding: Some(padding),
            spacing: Some(spacing),
        }
    }

    /// Validate the sizing fields and resolve the layout mode.
    pub fn mode(&self) -> Result<LayoutMode> {
        match self.node_size {
            Some(_) if self.padding.is_some() || self.spacing.is_some() => {
                Err(PatternLockError::ConflictingSizing)
            }
            Some(node_size) => {
                let node_size = check_dimension("node size", node_size)?;
                if node_size == 0.0 {
                    return Err(PatternLockError::InvalidDimension {
                        name: "node size",
                        value: node_size,
                    });
                }
                Ok(LayoutMode::Fixed { node_size })
            }
            None => Ok(LayoutMode::Tiled {
                padding: check_dimension("padding", self.padding.unwrap_or(0.0))?,
                spacing: check_dimension("spacing", self.spacing.unwrap_or(0.0))?,
            }),
        }
    }
}

fn check_dimension(name: &'static str, value: f32) -> Result<f32> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(PatternLockError::InvalidDimension { name, value })
    }
}

/// Settings forwarded to the feedback collaborator.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FeedbackConfig {
    /// Pulse the haptic device when a node is touched directly
    pub haptics_enabled: bool,
    /// Length of each haptic pulse
    pub pulse: Duration,
    /// Play the enter animation on selected nodes
    pub animate: bool,
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            haptics_enabled: false,
            pulse: DEFAULT_PULSE,
            animate: false,
        }
    }
}

/// Immutable configuration of a gesture surface.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GestureConfig {
    /// Distance added on every side of a node's bounds for hit-testing
    pub touch_slop: f32,
    /// Insert the node lying between two connected nodes
    pub auto_link: bool,
    pub layout: LayoutConfig,
    pub feedback: FeedbackConfig,
}

impl GestureConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_touch_slop(mut self, touch_slop: f32) -> Self {
        self.touch_slop = touch_slop;
        self
    }

    pub fn with_auto_link(mut self, auto_link: bool) -> Self {
        self.auto_link = auto_link;
        self
    }

    pub fn with_layout(mut self, layout: LayoutConfig) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_feedback(mut self, feedback: FeedbackConfig) -> Self {
        self.feedback = feedback;
        self
    }

    /// Check every field the core interprets.
    pub fn validate(&self) -> Result<()> {
        check_dimension("touch slop", self.touch_slop)?;
        self.layout.mode()?;
        Ok(())
    }
}
