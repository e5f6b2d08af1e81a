use crate::hit_test::{NodeGeometry, Rect};

/// Number of nodes on the surface
pub const NODE_COUNT: usize = 9;

/// One of the nine selectable cells.
///
/// `number` runs 1..=9 in row-major order starting at the top-left. Bounds are
/// assigned by [`Grid::layout`](crate::Grid::layout) and stay `None` until then.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Node {
    number: u8,
    bounds: Option<Rect>,
    selected: bool,
}

impl Node {
    pub(crate) fn new(number: u8) -> Self {
        debug_assert!((1..=NODE_COUNT as u8).contains(&number));
        Self {
            number,
            bounds: None,
            selected: false,
        }
    }

    pub fn number(&self) -> u8 {
        self.number
    }

    /// Zero-based grid index
    pub fn index(&self) -> usize {
        usize::from(self.number - 1)
    }

    pub fn row(&self) -> usize {
        self.index() / 3
    }

    pub fn col(&self) -> usize {
        self.index() % 3
    }

    pub fn bounds(&self) -> Option<Rect> {
        self.bounds
    }

    pub fn center(&self) -> Option<(f32, f32)> {
        self.bounds.map(|b| b.center())
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub(crate) fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = Some(bounds);
    }

    /// Update the flag, returning `true` if it actually changed
    pub(crate) fn set_selected(&mut self, selected: bool) -> bool {
        let changed = self.selected != selected;
        self.selected = selected;
        changed
    }
}

impl NodeGeometry for &Node {
    fn number(&self) -> u8 {
        self.number
    }

    fn bounds(&self) -> Rect {
        self.bounds.unwrap_or_default()
    }
}

/// Report of a node's `selected` flag flipping.
///
/// `auto_linked` is set when the node was inserted between two connected nodes
/// rather than touched directly; feedback collaborators use it to skip the
/// haptic pulse for such mid-nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeStateChange {
    pub number: u8,
    pub selected: bool,
    pub auto_linked: bool,
}
