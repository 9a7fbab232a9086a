use serde::{Deserialize, Serialize};

/// Only the first few media items get a selectable thumbnail; the rest are
/// reachable through next/prev.
pub const THUMBNAIL_LIMIT: usize = 8;

/// Position within one record's media list. `index` is `None` exactly when
/// the list is empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Carousel {
    index: Option<usize>,
    len: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self {
            index: (len > 0).then_some(0),
            len,
        }
    }

    pub fn index(&self) -> Option<usize> {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn next(&mut self) {
        if let Some(index) = self.index {
            self.index = Some((index + 1) % self.len);
        }
    }

    pub fn prev(&mut self) {
        if let Some(index) = self.index {
            self.index = Some((index + self.len - 1) % self.len);
        }
    }

    /// Jumps to a thumbnail. Positions without a thumbnail are ignored.
    pub fn select(&mut self, position: usize) -> bool {
        if position >= self.thumbnail_count() {
            return false;
        }
        self.index = Some(position);
        true
    }

    pub fn thumbnail_count(&self) -> usize {
        self.len.min(THUMBNAIL_LIMIT)
    }

    /// `"2/4"`, or `"0/0"` for an empty list.
    pub fn counter_label(&self) -> String {
        match self.index {
            Some(index) => format!("{}/{}", index + 1, self.len),
            None => "0/0".to_string(),
        }
    }

    /// Re-anchors a restored carousel onto a media list of `len` items.
    pub fn reconcile(&mut self, len: usize) {
        self.len = len;
        self.index = match (self.index, len) {
            (_, 0) => None,
            (Some(index), _) if index < len => Some(index),
            _ => Some(0),
        };
    }
}
