use slint::{Model, VecModel};

/// Ordered, duplicate-free list of the nodes selected during one gesture.
///
/// Insertion order is selection order. The path only grows while a gesture
/// is tracked and is cleared in one step when it ends.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionPath {
    numbers: Vec<u8>,
}

impl SelectionPath {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a node, returning `false` if it is already on the path
    pub fn push(&mut self, number: u8) -> bool {
        if self.contains(number) {
            return false;
        }
        self.numbers.push(number);
        true
    }

    pub fn contains(&self, number: u8) -> bool {
        self.numbers.contains(&number)
    }

    pub fn last(&self) -> Option<u8> {
        self.numbers.last().copied()
    }

    /// Node numbers in selection order
    pub fn as_slice(&self) -> &[u8] {
        &self.numbers
    }

    pub fn to_vec(&self) -> Vec<u8> {
        self.numbers.clone()
    }

    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.numbers.iter().copied()
    }

    /// Remove every node, returning them in selection order
    pub fn take(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.numbers)
    }

    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }

    /// Sync the path to a Slint `VecModel` of node numbers
    pub fn sync_to_model(&self, model: &VecModel<i32>) {
        // Update existing rows or add new ones
        for (i, &number) in self.numbers.iter().enumerate() {
            let value = i32::from(number);
            if i < model.row_count() {
                if model.row_data(i) != Some(value) {
                    model.set_row_data(i, value);
                }
            } else {
                model.push(value);
            }
        }
        // Remove excess rows
        while model.row_count() > self.numbers.len() {
            model.remove(model.row_count() - 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_path_is_empty() {
        let path = SelectionPath::new();
        assert!(path.is_empty());
        assert_eq!(path.len(), 0);
        assert_eq!(path.last(), None);
    }

    #[test]
    fn test_push_keeps_selection_order() {
        let mut path = SelectionPath::new();
        assert!(path.push(3));
        assert!(path.push(1));
        assert!(path.push(2));
        assert_eq!(path.as_slice(), &[3, 1, 2]);
        assert_eq!(path.last(), Some(2));
    }

    #[test]
    fn test_push_rejects_duplicates() {
        let mut path = SelectionPath::new();
        path.push(5);
        path.push(6);
        assert!(!path.push(5));
        assert_eq!(path.as_slice(), &[5, 6]);
    }

    #[test]
    fn test_take_empties_path() {
        let mut path = SelectionPath::new();
        path.push(1);
        path.push(9);
        assert_eq!(path.take(), vec![1, 9]);
        assert!(path.is_empty());
    }

    #[test]
    fn test_sync_to_model_matches_path() {
        let model = VecModel::from(vec![7, 8, 9, 4]);
        let mut path = SelectionPath::new();
        path.push(1);
        path.push(5);

        path.sync_to_model(&model);
        assert_eq!(model.iter().collect::<Vec<_>>(), vec![1, 5]);

        path.push(9);
        path.sync_to_model(&model);
        assert_eq!(model.iter().collect::<Vec<_>>(), vec![1, 5, 9]);

        assert_eq!(path.take(), vec![1, 5, 9]);
        path.sync_to_model(&model);
        assert_eq!(model.row_count(), 0);
    }
}
