//! Static 3x3 geometry of the pattern lock.
//!
//! [`Grid`] owns the nine [`Node`]s for the lifetime of the surface. Only
//! their bounds (on [`layout`](Grid::layout)) and their `selected` flags change.

use crate::config::{LayoutConfig, LayoutMode};
use crate::error::{PatternLockError, Result};
use crate::hit_test::{find_node_at, Rect};
use crate::state::{Node, NODE_COUNT};

/// Nine nodes in row-major order, index = number - 1
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    nodes: [Node; NODE_COUNT],
    container: Option<Rect>,
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    pub fn new() -> Self {
        Self {
            nodes: std::array::from_fn(|i| Node::new(i as u8 + 1)),
            container: None,
        }
    }

    /// Assign each node's rectangle inside `container`.
    ///
    /// The surface is square: nodes are placed in a `min(width, height)` square
    /// anchored at the container's top-left corner. On error the previous
    /// geometry is kept.
    ///
    /// # Modes
    /// * Fixed node size - each node is centered in its third of the square
    /// * Tiled - node size is `(side - 2*padding - 2*spacing) / 3`, nodes are
    ///   placed left-to-right, top-to-bottom with `spacing` between them
    pub fn layout(&mut self, container: Rect, config: &LayoutConfig) -> Result<()> {
        let Rect { x, y, width, height } = container;
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(PatternLockError::DegenerateContainer { width, height });
        }

        let side = width.min(height);
        let cell = side / 3.0;

        // Node i along an axis starts at offset + i * step
        let (node_size, offset, step) = match config.mode()? {
            LayoutMode::Fixed { node_size } => {
                if node_size > cell {
                    return Err(PatternLockError::NodeTooLarge {
                        node_size,
                        cell_size: cell,
                    });
                }
                (node_size, (cell - node_size) / 2.0, cell)
            }
            LayoutMode::Tiled { padding, spacing } => {
                let node_size = (side - padding * 2.0 - spacing * 2.0) / 3.0;
                if node_size <= 0.0 {
                    return Err(PatternLockError::DegenerateNodeSize { node_size });
                }
                (node_size, padding, node_size + spacing)
            }
        };

        for node in &mut self.nodes {
            node.set_bounds(Rect::new(
                x + offset + node.col() as f32 * step,
                y + offset + node.row() as f32 * step,
                node_size,
                node_size,
            ));
        }
        self.container = Some(container);

        tracing::debug!(?container, node_size, "pattern grid laid out");
        Ok(())
    }

    /// True once [`layout`](Self::layout) has succeeded at least once
    pub fn is_laid_out(&self) -> bool {
        self.container.is_some()
    }

    /// Container the current geometry was computed for
    pub fn container(&self) -> Option<Rect> {
        self.container
    }

    /// Number of the first node whose bounds, grown by `slop`, contain the point.
    ///
    /// # Panics
    /// If called before the grid has been laid out.
    pub fn hit_test(&self, x: f32, y: f32, slop: f32) -> Option<u8> {
        assert!(self.is_laid_out(), "hit_test called before layout");
        find_node_at(x, y, self.nodes.iter(), slop)
    }

    /// Clear `selected` on every node
    pub fn reset(&mut self) {
        for node in &mut self.nodes {
            node.set_selected(false);
        }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Look up a node by its 1-based number
    pub fn node(&self, number: u8) -> Option<&Node> {
        usize::from(number)
            .checked_sub(1)
            .and_then(|index| self.nodes.get(index))
    }

    pub fn node_at(&self, row: usize, col: usize) -> Option<&Node> {
        if row < 3 && col < 3 {
            self.nodes.get(row * 3 + col)
        } else {
            None
        }
    }

    /// True if the two nodes touch horizontally, vertically or diagonally
    pub fn is_adjacent(&self, a: u8, b: u8) -> bool {
        match (self.node(a), self.node(b)) {
            (Some(a), Some(b)) => {
                let dr = a.row().abs_diff(b.row());
                let dc = a.col().abs_diff(b.col());
                dr.max(dc) == 1
            }
            _ => false,
        }
    }

    pub fn is_selected(&self, number: u8) -> bool {
        self.node(number).is_some_and(Node::is_selected)
    }

    /// Set a node's flag, returning `true` if it changed
    pub(crate) fn set_selected(&mut self, number: u8, selected: bool) -> bool {
        let index = usize::from(number) - 1;
        self.nodes[index].set_selected(selected)
    }
}
