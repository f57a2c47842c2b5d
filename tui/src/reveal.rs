//! Entrance animations: one-shot reveal effects triggered the first time
//! content becomes visible in the viewport. Two variants, both idempotent by
//! construction: a staggered reveal over a panel's ordered message list, and
//! a fade-up applied to individual messages tagged for it. Nothing here ever
//! reverses; re-marking a revealed element is harmless.

use std::collections::HashMap;
use std::collections::HashSet;
use std::time::Duration;
use std::time::Instant;

use ratatui::layout::Rect;
use vibeconnect_core::SectionId;

use crate::tui::FrameRequester;

/// An element counts as visible once this share of it intersects the
/// viewport.
pub const VISIBILITY_THRESHOLD: f32 = 0.1;

/// Delay between consecutive elements of a staggered reveal.
pub const STAGGER_STEP: Duration = Duration::from_millis(90);

/// Fraction of `element` covered by `viewport`.
pub fn intersection_ratio(element: Rect, viewport: Rect) -> f32 {
    let element_area = element.area();
    if element_area == 0 {
        return 0.0;
    }
    element.intersection(viewport).area() as f32 / element_area as f32
}

pub fn is_visible(element: Rect, viewport: Rect) -> bool {
    intersection_ratio(element, viewport) >= VISIBILITY_THRESHOLD
}

/// How many elements of a staggered run of `len` are revealed `elapsed`
/// after it started. The first element shows immediately; each later one
/// waits a delay proportional to its position.
pub fn staggered_revealed(elapsed: Duration, len: usize) -> usize {
    let steps = (elapsed.as_millis() / STAGGER_STEP.as_millis()) as usize;
    steps.saturating_add(1).min(len)
}

pub struct EntranceAnimator {
    enabled: bool,
    /// Start instant of the staggered run per panel, recorded the first time
    /// the panel is observed visible. Never removed, so a revisit replays
    /// nothing.
    stagger_started: HashMap<SectionId, Instant>,
    /// Fade-up one-shots that have fired, keyed by (panel, message index).
    fired: HashSet<(SectionId, usize)>,
    frame_requester: FrameRequester,
}

impl EntranceAnimator {
    pub fn new(enabled: bool, frame_requester: FrameRequester) -> Self {
        Self {
            enabled,
            stagger_started: HashMap::new(),
            fired: HashSet::new(),
            frame_requester,
        }
    }

    /// Observe the visible panel before a draw: start its staggered run if
    /// this is the first sighting, fire fade-ups whose rects cross the
    /// visibility threshold, and keep frames coming while the stagger is
    /// still in flight. `message_rects` carries every message's rect in the
    /// panel's content space alongside its reveal tag, and `viewport` is the
    /// window onto that same space.
    pub fn observe_panel(
        &mut self,
        section_id: &SectionId,
        message_rects: &[(Rect, bool)],
        viewport: Rect,
        now: Instant,
    ) {
        if !self.enabled {
            return;
        }
        let started = *self
            .stagger_started
            .entry(section_id.clone())
            .or_insert(now);
        for (idx, (rect, reveal_tagged)) in message_rects.iter().enumerate() {
            if *reveal_tagged && is_visible(*rect, viewport) {
                self.fired.insert((section_id.clone(), idx));
            }
        }
        if staggered_revealed(now.saturating_duration_since(started), message_rects.len())
            < message_rects.len()
        {
            self.frame_requester.schedule_frame_in(STAGGER_STEP);
        }
    }

    /// Number of messages of `section_id` the stagger has revealed by `now`.
    /// Panels never observed (and the animator when disabled) show
    /// everything.
    pub fn revealed_count(&self, section_id: &SectionId, len: usize, now: Instant) -> usize {
        if !self.enabled {
            return len;
        }
        match self.stagger_started.get(section_id) {
            Some(started) => staggered_revealed(now.saturating_duration_since(*started), len),
            None => len,
        }
    }

    /// Whether the fade-up for message `idx` of `section_id` has fired.
    /// Untagged messages never consult this; disabled animations report
    /// everything as settled.
    pub fn has_fired(&self, section_id: &SectionId, idx: usize) -> bool {
        !self.enabled || self.fired.contains(&(section_id.clone(), idx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn id(s: &str) -> SectionId {
        SectionId::from(s)
    }

    #[test]
    fn ratio_straddles_the_ten_percent_gate() {
        let viewport = Rect::new(0, 0, 10, 10);
        // 1 of 8 rows visible: 12.5%, above the gate.
        let barely_in = Rect::new(0, 9, 10, 8);
        assert!(intersection_ratio(barely_in, viewport) > VISIBILITY_THRESHOLD);
        assert!(is_visible(barely_in, viewport));
        // 1 of 12 rows visible: ~8.3%, below it.
        let barely_out = Rect::new(0, 9, 10, 12);
        assert!(intersection_ratio(barely_out, viewport) < VISIBILITY_THRESHOLD);
        assert!(!is_visible(barely_out, viewport));
        // Fully outside.
        assert_eq!(intersection_ratio(Rect::new(0, 20, 10, 4), viewport), 0.0);
    }

    #[test]
    fn zero_area_element_is_never_visible() {
        let viewport = Rect::new(0, 0, 10, 10);
        assert!(!is_visible(Rect::new(0, 0, 0, 0), viewport));
    }

    #[test]
    fn stagger_reveals_one_element_per_step() {
        assert_eq!(staggered_revealed(Duration::ZERO, 4), 1);
        assert_eq!(staggered_revealed(STAGGER_STEP, 4), 2);
        assert_eq!(staggered_revealed(STAGGER_STEP * 3, 4), 4);
        // Never past the end.
        assert_eq!(staggered_revealed(STAGGER_STEP * 100, 4), 4);
        assert_eq!(staggered_revealed(Duration::ZERO, 0), 0);
    }

    #[test]
    fn fade_up_fires_once_and_stays_fired() {
        let mut animator = EntranceAnimator::new(true, FrameRequester::test_dummy());
        let viewport = Rect::new(0, 0, 20, 10);
        let rects = [(Rect::new(0, 2, 20, 2), true)];
        let t0 = Instant::now();

        assert!(!animator.has_fired(&id("features"), 0));
        animator.observe_panel(&id("features"), &rects, viewport, t0);
        assert!(animator.has_fired(&id("features"), 0));

        // Scrolled out of view afterwards: no reversal.
        let off_screen = [(Rect::new(0, 30, 20, 2), true)];
        animator.observe_panel(&id("features"), &off_screen, viewport, t0);
        assert!(animator.has_fired(&id("features"), 0));
    }

    #[test]
    fn untagged_messages_never_enter_the_fired_set() {
        let mut animator = EntranceAnimator::new(true, FrameRequester::test_dummy());
        let viewport = Rect::new(0, 0, 20, 10);
        let rects = [(Rect::new(0, 0, 20, 2), false)];
        animator.observe_panel(&id("faq"), &rects, viewport, Instant::now());
        assert!(!animator.has_fired(&id("faq"), 0));
    }

    #[test]
    fn stagger_run_starts_on_first_observation_only() {
        let mut animator = EntranceAnimator::new(true, FrameRequester::test_dummy());
        let viewport = Rect::new(0, 0, 20, 10);
        let rects = [(Rect::new(0, 0, 20, 1), false), (Rect::new(0, 1, 20, 1), false)];
        let t0 = Instant::now();

        animator.observe_panel(&id("welcome"), &rects, viewport, t0);
        assert_eq!(animator.revealed_count(&id("welcome"), 2, t0), 1);
        // A much later re-observation does not restart the run.
        let later = t0 + STAGGER_STEP * 10;
        animator.observe_panel(&id("welcome"), &rects, viewport, later);
        assert_eq!(animator.revealed_count(&id("welcome"), 2, later), 2);
    }

    #[test]
    fn disabled_animator_shows_everything_immediately() {
        let animator = EntranceAnimator::new(false, FrameRequester::test_dummy());
        assert_eq!(animator.revealed_count(&id("welcome"), 5, Instant::now()), 5);
        assert!(animator.has_fired(&id("welcome"), 3));
    }
}
