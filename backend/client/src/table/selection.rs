use std::collections::BTreeSet;

/// Row selection over a table of `row_count` rows. Indices are 0-based and
/// anything past the last row is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    row_count: usize,
    selected: BTreeSet<usize>,
}

impl Selection {
    pub fn new(row_count: usize) -> Self {
        Self {
            row_count,
            selected: BTreeSet::new(),
        }
    }

    pub fn with_rows(row_count: usize, rows: impl IntoIterator<Item = usize>) -> Self {
        let mut selection = Self::new(row_count);
        for row in rows {
            selection.select(row);
        }

        selection
    }

    pub fn select(&mut self, row: usize) {
        if row < self.row_count {
            self.selected.insert(row);
        }
    }

    pub fn toggle(&mut self, row: usize) {
        if row >= self.row_count {
            return;
        }

        if !self.selected.remove(&row) {
            self.selected.insert(row);
        }
    }

    pub fn select_all(&mut self) {
        self.selected = (0..self.row_count).collect();
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn is_selected(&self, row: usize) -> bool {
        self.selected.contains(&row)
    }

    pub fn is_all_selected(&self) -> bool {
        self.row_count > 0 && self.selected.len() == self.row_count
    }

    /// Some rows but not all of them.
    pub fn is_some_selected(&self) -> bool {
        !self.selected.is_empty() && !self.is_all_selected()
    }

    pub fn selected(&self) -> impl Iterator<Item = usize> + '_ {
        self.selected.iter().copied()
    }
}
