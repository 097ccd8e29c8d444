//! Selection state shared by the list screens

/// Cursor over a list of `len` items
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected_index: Option<usize>,
}

impl SelectionState {
    /// Create a new selection state with no selection
    pub fn new() -> Self {
        Self {
            selected_index: None,
        }
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected_index
    }

    /// Select a specific index if it is in bounds
    pub fn select(&mut self, index: usize, len: usize) {
        if index < len {
            self.selected_index = Some(index);
        }
    }

    pub fn deselect(&mut self) {
        self.selected_index = None;
    }

    /// Move the cursor up, stopping at the first item
    pub fn select_previous(&mut self, len: usize) {
        match self.selected_index {
            Some(index) if index > 0 => self.selected_index = Some(index - 1),
            None if len > 0 => self.selected_index = Some(0),
            _ => {}
        }
    }

    /// Move the cursor down, stopping at the last item
    pub fn select_next(&mut self, len: usize) {
        match self.selected_index {
            Some(index) if index + 1 < len => self.selected_index = Some(index + 1),
            None if len > 0 => self.selected_index = Some(0),
            _ => {}
        }
    }

    pub fn select_first(&mut self, len: usize) {
        if len > 0 {
            self.selected_index = Some(0);
        }
    }

    pub fn select_last(&mut self, len: usize) {
        if len > 0 {
            self.selected_index = Some(len - 1);
        }
    }

    /// Keep the cursor in bounds after the list shrank or grew
    pub fn clamp(&mut self, len: usize) {
        self.selected_index = match (self.selected_index, len) {
            (_, 0) => None,
            (Some(index), len) if index >= len => Some(len - 1),
            (index, _) => index,
        };
    }

    /// Select the first item of a freshly replaced list
    pub fn reset(&mut self, len: usize) {
        self.selected_index = if len > 0 { Some(0) } else { None };
    }
}
