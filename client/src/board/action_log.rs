use std::collections::HashSet;

use tufia_shared::{ActionId, EMPTY_ACTION_ID};

/// Ids of remote actions that have already been applied to the local board.
///
/// Id `0` marks an unused ring slot: it is never recorded and never reported
/// as seen.
#[derive(Clone, Debug, Default)]
pub struct ActionLog {
    seen: HashSet<ActionId>,
}

impl ActionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `action_id`, returning true if it was not seen before
    pub fn mark_seen(&mut self, action_id: ActionId) -> bool {
        if action_id == EMPTY_ACTION_ID {
            return false;
        }
        self.seen.insert(action_id)
    }

    pub fn has_seen(&self, action_id: ActionId) -> bool {
        action_id != EMPTY_ACTION_ID && self.seen.contains(&action_id)
    }

    pub fn reset(&mut self) {
        self.seen.clear();
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}
