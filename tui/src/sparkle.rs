//! Decorative sparkle overlay for the header button chips. Hovering a chip
//! spawns a short-lived burst of glyphs around it; sparkles expire on a
//! timer and never touch any navigation state.

use std::time::Duration;
use std::time::Instant;

use rand::Rng;
use ratatui::buffer::Buffer;
use ratatui::layout::Position;
use ratatui::layout::Rect;
use ratatui::style::Stylize;
use ratatui::text::Span;

use crate::tui::FrameRequester;

const GLYPHS: [char; 4] = ['✦', '✧', '+', '·'];
const LIFETIME: Duration = Duration::from_millis(450);
const BURST: usize = 3;

#[derive(Debug)]
struct Sparkle {
    pos: Position,
    glyph: char,
    born: Instant,
}

pub struct SparkleOverlay {
    sparkles: Vec<Sparkle>,
    frame_requester: FrameRequester,
}

impl SparkleOverlay {
    pub fn new(frame_requester: FrameRequester) -> Self {
        Self {
            sparkles: Vec::new(),
            frame_requester,
        }
    }

    /// Spawn a burst around `chip`. Called on every hover notification; the
    /// per-sparkle lifetime keeps the overlay from accumulating.
    pub fn burst(&mut self, chip: Rect, now: Instant) {
        let mut rng = rand::rng();
        for _ in 0..BURST {
            let x = rng.random_range(chip.x.saturating_sub(1)..chip.right().saturating_add(1));
            let y_min = chip.y.saturating_sub(1);
            let y = rng.random_range(y_min..=chip.bottom());
            self.sparkles.push(Sparkle {
                pos: Position::new(x, y),
                glyph: GLYPHS[rng.random_range(0..GLYPHS.len())],
                born: now,
            });
        }
        self.frame_requester.schedule_frame();
    }

    /// Draw the still-living sparkles on top of the frame.
    pub fn render(&mut self, buf: &mut Buffer, now: Instant) {
        self.sparkles
            .retain(|s| now.saturating_duration_since(s.born) < LIFETIME);
        for sparkle in &self.sparkles {
            if buf.area.contains(sparkle.pos) {
                let span = Span::from(sparkle.glyph.to_string()).yellow();
                buf.set_span(sparkle.pos.x, sparkle.pos.y, &span, 1);
            }
        }
        if !self.sparkles.is_empty() {
            self.frame_requester.schedule_frame_in(Duration::from_millis(50));
        }
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.sparkles.len()
    }
}
