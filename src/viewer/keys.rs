use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Key {
    Escape,
    Other,
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        match value.trim() {
            "Escape" | "Esc" | "escape" => Self::Escape,
            _ => Self::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListenerId(pub u64);

/// Wherever keyboard listeners actually live (a document, a terminal, a test).
pub trait KeyListenerHost {
    fn install(&mut self, key: Key) -> ListenerId;
    /// Returns `false` when `id` was not registered.
    fn remove(&mut self, id: ListenerId) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
struct Registration {
    id: ListenerId,
    key: Key,
}

/// In-process listener registry used by sessions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyListeners {
    next_id: u64,
    active: Vec<Registration>,
}

impl KeyListeners {
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    pub fn is_listening(&self, key: Key) -> bool {
        self.active.iter().any(|r| r.key == key)
    }

    pub fn contains(&self, id: ListenerId) -> bool {
        self.active.iter().any(|r| r.id == id)
    }

    /// Drops every registration except a single one for `keep`, and moves the
    /// id counter past it.
    pub fn retain_only(&mut self, keep: Option<ListenerId>) {
        let mut kept = false;
        self.active.retain(|r| {
            if kept || Some(r.id) != keep {
                return false;
            }
            kept = true;
            true
        });
        if let Some(ListenerId(id)) = keep.filter(|_| kept) {
            self.next_id = self.next_id.max(id);
        }
    }

    fn fresh_id(&mut self) -> ListenerId {
        let mut candidate = match self.next_id.checked_add(1) {
            Some(next) if !self.contains(ListenerId(next)) => next,
            _ => 1,
        };
        while self.contains(ListenerId(candidate)) {
            candidate += 1;
        }
        self.next_id = candidate;
        ListenerId(candidate)
    }
}

impl KeyListenerHost for KeyListeners {
    fn install(&mut self, key: Key) -> ListenerId {
        let id = self.fresh_id();
        self.active.push(Registration { id, key });
        id
    }

    fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.active.len();
        self.active.retain(|r| r.id != id);
        self.active.len() != before
    }
}
