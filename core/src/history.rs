//! The address-bar stand-in. [`FragmentHistory`] is the only persisted,
//! externally observable navigation state: a list of fragment entries plus a
//! cursor, with browser push/back/forward semantics. [`sync_fragment`] is the
//! HistorySync adapter: stateless, pure event-to-call.

use crate::router::ViewRouter;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FragmentHistory {
    entries: Vec<String>,
    cursor: usize,
}

impl FragmentHistory {
    /// Seed the history with the load fragment (or an empty entry when the
    /// page was opened without one).
    pub fn with_initial(fragment: Option<&str>) -> Self {
        Self {
            entries: vec![fragment.unwrap_or_default().to_string()],
            cursor: 0,
        }
    }

    /// The fragment the cursor is on.
    pub fn current(&self) -> &str {
        &self.entries[self.cursor]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Push a new entry, dropping anything forward of the cursor first, the
    /// way a browser does. Pushing the fragment that is already current is a
    /// no-op so a sync echo never disturbs the stack.
    pub fn push(&mut self, fragment: &str) {
        if self.current() == fragment {
            return;
        }
        self.entries.truncate(self.cursor + 1);
        self.entries.push(fragment.to_string());
        self.cursor = self.entries.len() - 1;
    }

    /// Move the cursor back one entry. Returns whether it moved.
    pub fn back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Move the cursor forward one entry. Returns whether it moved.
    pub fn forward(&mut self) -> bool {
        if self.cursor + 1 >= self.entries.len() {
            return false;
        }
        self.cursor += 1;
        true
    }
}

/// Resolve the router's current fragment against the deck and drive the
/// router with it. Runs at load and after every history cursor move. The
/// existence check is a precondition here, not delegated to the router's
/// no-op tolerance; empty or unmatched fragments leave the active state
/// exactly as it was.
pub fn sync_fragment(router: &mut ViewRouter) {
    let fragment = router.history().current();
    let Some(id) = fragment.strip_prefix('#').filter(|id| !id.is_empty()) else {
        return;
    };
    let id = crate::deck::SectionId::from(id);
    if router.deck().contains(&id) {
        router.switch_section(&id);
    }
}
