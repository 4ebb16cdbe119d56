//! Selection owner that records the updates it receives

use model_selector::{Selection, SelectionOwner, SelectionUpdate};

/// Owner that counts transactional updates
#[derive(Debug, Default)]
pub struct RecordingOwner {
    pub selection: Selection,
    pub updates: Vec<SelectionUpdate>,
}

impl RecordingOwner {
    pub fn with(provider: Option<&str>, model: Option<&str>) -> Self {
        Self {
            selection: Selection::new(provider.map(str::to_string), model.map(str::to_string)),
            updates: Vec::new(),
        }
    }
}

impl SelectionOwner for RecordingOwner {
    fn selection(&self) -> &Selection {
        &self.selection
    }

    fn set_selection(&mut self, update: &SelectionUpdate) {
        self.updates.push(update.clone());
        self.selection.apply(update);
    }
}
