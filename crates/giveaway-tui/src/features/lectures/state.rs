use giveaway_core::saphira::{Lecture, sort_lectures_desc};

#[derive(Debug, Clone)]
pub struct LecturesState {
    pub items: Vec<Lecture>,
    pub visible: bool,
}

impl Default for LecturesState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            visible: true,
        }
    }
}

impl LecturesState {
    /// Appends `fetched` and restores descending id order.
    pub fn merge(&mut self, fetched: Vec<Lecture>) {
        self.items.extend(fetched);
        sort_lectures_desc(&mut self.items);
    }

    pub fn toggle_visible(&mut self) {
        self.visible = !self.visible;
    }
}
