//! Left/right keyboard traversal over the ordered section list. Stateless:
//! it reads the active ordinal through the router and calls back into
//! [`ViewRouter::switch_section`].

use crate::router::ViewRouter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavDirection {
    Prev,
    Next,
}

/// Index a prev/next press lands on. `active` is the ordinal of the active
/// section, or `None` when nothing is active; that case is deliberately
/// folded into the modular arithmetic as index −1 (so `Next` wraps to the
/// first section and `Prev` to the second-to-last), matching the reviewed
/// index-lookup-miss behavior.
pub fn target_index(active: Option<usize>, len: usize, direction: NavDirection) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let i = active.map_or(-1, |i| i as i64);
    let delta: i64 = match direction {
        NavDirection::Prev => -1,
        NavDirection::Next => 1,
    };
    Some((i + delta).rem_euclid(len as i64) as usize)
}

/// Switch to the previous/next section relative to the active one.
pub fn navigate(router: &mut ViewRouter, direction: NavDirection) {
    let active = router
        .active_id()
        .and_then(|id| router.deck().position(id));
    let Some(index) = target_index(active, router.deck().len(), direction) else {
        return;
    };
    if let Some(section) = router.deck().section_at(index) {
        let id = section.id.clone();
        router.switch_section(&id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::Deck;
    use crate::deck::Section;
    use crate::deck::SectionId;
    use pretty_assertions::assert_eq;

    fn deck(ids: &[&str], initial: Option<&str>) -> Deck {
        Deck::from_sections(
            ids.iter()
                .map(|id| Section {
                    id: SectionId::from(*id),
                    title: None,
                    messages: Vec::new(),
                })
                .collect(),
            initial.map(SectionId::from),
        )
        .unwrap()
    }

    #[test]
    fn next_and_prev_wrap_modulo_len() {
        assert_eq!(target_index(Some(0), 4, NavDirection::Next), Some(1));
        assert_eq!(target_index(Some(3), 4, NavDirection::Next), Some(0));
        assert_eq!(target_index(Some(0), 4, NavDirection::Prev), Some(3));
        assert_eq!(target_index(Some(2), 4, NavDirection::Prev), Some(1));
    }

    #[test]
    fn no_active_section_falls_through_as_minus_one() {
        assert_eq!(target_index(None, 5, NavDirection::Next), Some(0));
        assert_eq!(target_index(None, 5, NavDirection::Prev), Some(3));
        // Degenerate single-section deck still lands somewhere valid.
        assert_eq!(target_index(None, 1, NavDirection::Prev), Some(0));
    }

    #[test]
    fn empty_list_navigates_nowhere() {
        assert_eq!(target_index(None, 0, NavDirection::Next), None);
    }

    #[test]
    fn n_presses_right_return_to_the_start() {
        let mut router = ViewRouter::new(deck(&["a", "b", "c", "d"], Some("b")), None);
        for _ in 0..4 {
            navigate(&mut router, NavDirection::Next);
        }
        assert_eq!(router.active_id(), Some(&SectionId::from("b")));
    }

    #[test]
    fn left_then_right_is_an_identity() {
        let mut router = ViewRouter::new(deck(&["a", "b", "c"], Some("a")), None);
        navigate(&mut router, NavDirection::Prev);
        assert_eq!(router.active_id(), Some(&SectionId::from("c")));
        navigate(&mut router, NavDirection::Next);
        assert_eq!(router.active_id(), Some(&SectionId::from("a")));
    }

    #[test]
    fn navigation_with_nothing_active_activates_a_section() {
        let mut router = ViewRouter::new(deck(&["a", "b", "c"], None), None);
        navigate(&mut router, NavDirection::Next);
        assert_eq!(router.active_id(), Some(&SectionId::from("a")));

        let mut router = ViewRouter::new(deck(&["a", "b", "c"], None), None);
        navigate(&mut router, NavDirection::Prev);
        assert_eq!(router.active_id(), Some(&SectionId::from("b")));
    }
}
