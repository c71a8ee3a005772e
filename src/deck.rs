use std::cell::Cell;

use html::Id;
use input_core::NavigationApi;

/// Stand-in presentation for the native demo: steps `Id(1)..=Id(len)` in a
/// line, with a cursor.
pub struct DemoDeck {
    len: usize,
    current: Cell<usize>,
}

impl DemoDeck {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            current: Cell::new(0),
        }
    }

    fn move_to(&self, index: usize) -> bool {
        if index >= self.len || index == self.current.get() {
            return false;
        }
        self.current.set(index);
        log::info!("step {}/{}", index + 1, self.len);
        true
    }
}

impl NavigationApi for DemoDeck {
    type Target = Id;

    fn next(&self) -> bool {
        self.move_to(self.current.get() + 1)
    }

    fn prev(&self) -> bool {
        match self.current.get().checked_sub(1) {
            Some(index) => self.move_to(index),
            None => false,
        }
    }

    fn goto(&self, target: &Id) -> bool {
        match (target.0 as usize).checked_sub(1) {
            Some(index) => self.move_to(index),
            None => false,
        }
    }
}
