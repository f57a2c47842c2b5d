//! The view router owns the single "active section" state and is its only
//! mutator. Everything the rendering surface shows (sidebar markers, the
//! visible panel, the channel label, the scroll offset) is a projection of
//! [`RouterState`], never an independent source of truth.

use crate::deck::Deck;
use crate::deck::SectionId;
use crate::history::FragmentHistory;

/// Sidebar entry, one-to-one with a section. Holds the section id only; the
/// section itself is looked up in the deck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub section_id: SectionId,
    pub active: bool,
}

/// The router's typed state. At most one section is active at any time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouterState {
    active: Option<SectionId>,
    scroll_offset: usize,
    channel_label: String,
}

impl RouterState {
    pub fn active(&self) -> Option<&SectionId> {
        self.active.as_ref()
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    pub fn channel_label(&self) -> &str {
        &self.channel_label
    }
}

/// Created at startup, mutated only through its own methods, lives for the
/// whole session.
#[derive(Debug, Clone)]
pub struct ViewRouter {
    deck: Deck,
    state: RouterState,
    nav_items: Vec<NavItem>,
    history: FragmentHistory,
}

impl ViewRouter {
    /// Build the router over `deck`, seeding the history with the load
    /// fragment. The deck's pre-marked initial section (if any) is rendered
    /// active; resolving the load fragment against the deck is the job of
    /// [`crate::history::sync_fragment`], which the composition root runs
    /// right after construction.
    pub fn new(deck: Deck, load_fragment: Option<&str>) -> Self {
        let nav_items = deck
            .sections()
            .iter()
            .map(|s| NavItem {
                section_id: s.id.clone(),
                active: false,
            })
            .collect();
        let mut router = Self {
            state: RouterState {
                active: None,
                scroll_offset: 0,
                channel_label: String::new(),
            },
            nav_items,
            history: FragmentHistory::with_initial(load_fragment),
            deck,
        };
        if let Some(initial) = router.deck.initial().cloned() {
            router.mark_active(&initial);
            if let Some(title) = router.deck.title(&initial) {
                router.state.channel_label = title.to_string();
            }
        }
        router
    }

    /// Switch the active section. Unknown ids are a silent no-op; a cosmetic
    /// navigation failure must never interrupt the page. For a known id the
    /// six effects below run synchronously, in order, with no suspension
    /// point, so no other input can interleave with them.
    pub fn switch_section(&mut self, id: &SectionId) {
        if !self.deck.contains(id) {
            return;
        }
        // 1. Clear the active designation everywhere.
        for item in &mut self.nav_items {
            item.active = false;
        }
        self.state.active = None;
        // 2. + 3. Mark the matching sidebar entry and the section itself.
        self.mark_active(id);
        // 4. Reset the content viewport.
        self.state.scroll_offset = 0;
        // 5. Channel label, only when the deck carries a title for this id.
        if let Some(title) = self.deck.title(id) {
            self.state.channel_label = title.to_string();
        }
        // 6. Address entry, without disturbing back/forward on a sync echo.
        self.history.push(&format!("#{id}"));
    }

    /// Move the history cursor back one entry (the back-button analog). The
    /// caller follows up with [`crate::history::sync_fragment`].
    pub fn history_back(&mut self) -> bool {
        self.history.back()
    }

    /// Forward counterpart of [`Self::history_back`].
    pub fn history_forward(&mut self) -> bool {
        self.history.forward()
    }

    /// Scroll the content viewport. Goes through the router so RouterState
    /// keeps a single mutator; `max` is the largest offset the rendering
    /// surface can currently show.
    pub fn scroll_by(&mut self, delta: isize, max: usize) {
        let current = self.state.scroll_offset as isize;
        self.state.scroll_offset = current.saturating_add(delta).clamp(0, max as isize) as usize;
    }

    pub fn state(&self) -> &RouterState {
        &self.state
    }

    pub fn active_id(&self) -> Option<&SectionId> {
        self.state.active.as_ref()
    }

    pub fn active_section(&self) -> Option<&crate::deck::Section> {
        self.state.active.as_ref().and_then(|id| self.deck.get(id))
    }

    pub fn nav_items(&self) -> &[NavItem] {
        &self.nav_items
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn history(&self) -> &FragmentHistory {
        &self.history
    }

    /// Set the active marks for `id` without touching scroll, label, or
    /// history. Used for the pre-marked initial render and steps 2–3 of a
    /// switch. Tolerates a sidebar entry that does not exist.
    fn mark_active(&mut self, id: &SectionId) {
        if let Some(item) = self.nav_items.iter_mut().find(|i| &i.section_id == id) {
            item.active = true;
        }
        self.state.active = Some(id.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::Message;
    use crate::deck::Section;
    use pretty_assertions::assert_eq;

    fn section(id: &str, title: Option<&str>) -> Section {
        Section {
            id: SectionId::from(id),
            title: title.map(str::to_string),
            messages: vec![Message {
                author: "vibebot".to_string(),
                body: format!("body of {id}"),
                reveal: false,
            }],
        }
    }

    fn test_router() -> ViewRouter {
        let deck = Deck::from_sections(
            vec![
                section("welcome", Some("# welcome")),
                section("features", Some("# features")),
                section("faq", Some("# faq")),
            ],
            Some(SectionId::from("welcome")),
        )
        .unwrap();
        ViewRouter::new(deck, None)
    }

    fn active_nav_ids(router: &ViewRouter) -> Vec<&str> {
        router
            .nav_items()
            .iter()
            .filter(|i| i.active)
            .map(|i| i.section_id.as_str())
            .collect()
    }

    #[test]
    fn switch_activates_exactly_one_item_and_section() {
        let mut router = test_router();
        router.switch_section(&SectionId::from("features"));

        assert_eq!(active_nav_ids(&router), vec!["features"]);
        assert_eq!(router.active_id(), Some(&SectionId::from("features")));
        assert_eq!(router.state().channel_label(), "# features");
        assert_eq!(router.history().current(), "#features");
    }

    #[test]
    fn unknown_id_is_a_complete_noop() {
        let mut router = test_router();
        router.switch_section(&SectionId::from("features"));
        let state_before = router.state().clone();
        let history_before = router.history().clone();

        router.switch_section(&SectionId::from("doesnotexist"));

        assert_eq!(router.state(), &state_before);
        assert_eq!(router.history(), &history_before);
        assert_eq!(active_nav_ids(&router), vec!["features"]);
    }

    #[test]
    fn switch_resets_scroll_offset() {
        let mut router = test_router();
        router.scroll_by(7, 50);
        assert_eq!(router.state().scroll_offset(), 7);

        router.switch_section(&SectionId::from("faq"));
        assert_eq!(router.state().scroll_offset(), 0);
    }

    #[test]
    fn scroll_clamps_to_bounds() {
        let mut router = test_router();
        router.scroll_by(-3, 50);
        assert_eq!(router.state().scroll_offset(), 0);
        router.scroll_by(100, 10);
        assert_eq!(router.state().scroll_offset(), 10);
    }

    #[test]
    fn untitled_section_leaves_label_unchanged() {
        let deck = Deck::from_sections(
            vec![section("home", Some("# home")), section("bare", None)],
            Some(SectionId::from("home")),
        )
        .unwrap();
        let mut router = ViewRouter::new(deck, None);
        assert_eq!(router.state().channel_label(), "# home");

        router.switch_section(&SectionId::from("bare"));
        assert_eq!(router.active_id(), Some(&SectionId::from("bare")));
        assert_eq!(router.state().channel_label(), "# home");
    }

    #[test]
    fn initial_render_uses_premarked_section_without_history_write() {
        let router = test_router();
        assert_eq!(active_nav_ids(&router), vec!["welcome"]);
        assert_eq!(router.state().channel_label(), "# welcome");
        // No switch has happened; the seeded (empty) load entry is intact.
        assert_eq!(router.history().current(), "");
        assert_eq!(router.history().len(), 1);
    }

    #[test]
    fn deck_without_initial_starts_with_no_active_section() {
        let deck = Deck::from_sections(vec![section("a", None), section("b", None)], None).unwrap();
        let router = ViewRouter::new(deck, None);
        assert_eq!(router.active_id(), None);
        assert!(active_nav_ids(&router).is_empty());
    }

    #[test]
    fn consecutive_switches_keep_single_active_marker() {
        let mut router = test_router();
        for id in ["features", "faq", "welcome", "faq"] {
            router.switch_section(&SectionId::from(id));
            assert_eq!(active_nav_ids(&router), vec![id]);
        }
    }
}
