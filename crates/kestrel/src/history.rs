//! Back/forward history for the headless renderer

use url::Url;

/// Visited pages with a cursor
#[derive(Debug, Default)]
pub struct History {
    entries: Vec<Url>,
    /// Index of the current entry; meaningless while `entries` is empty
    cursor: usize,
}

impl History {
    pub fn current(&self) -> Option<&Url> {
        self.entries.get(self.cursor)
    }

    pub fn can_go_back(&self) -> bool {
        !self.entries.is_empty() && self.cursor > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    /// Visit a new page, dropping anything ahead of the cursor
    pub fn push(&mut self, url: Url) {
        if !self.entries.is_empty() {
            self.entries.truncate(self.cursor + 1);
        }
        self.entries.push(url);
        self.cursor = self.entries.len() - 1;
    }

    pub fn back(&mut self) -> Option<&Url> {
        if !self.can_go_back() {
            return None;
        }
        self.cursor -= 1;
        self.current()
    }

    pub fn forward(&mut self) -> Option<&Url> {
        if !self.can_go_forward() {
            return None;
        }
        self.cursor += 1;
        self.current()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
