//! Header and footer chrome: the channel-name label, the two primary button
//! chips that host the sparkle overlay, and the key-hint line.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Stylize;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui::widgets::WidgetRef;

use crate::key_hint;

pub const BUTTONS: [&str; 2] = ["[ Add to Slack ]", "[ Docs ]"];

/// Screen rects of the button chips inside the header row, right-aligned in
/// declaration order. Chips that do not fit are dropped.
pub fn button_rects(header: Rect) -> Vec<Rect> {
    let mut rects = Vec::with_capacity(BUTTONS.len());
    let mut right = header.right();
    for label in BUTTONS {
        let width = label.len() as u16;
        let Some(x) = right.checked_sub(width) else {
            break;
        };
        if x < header.x {
            break;
        }
        rects.push(Rect::new(x, header.y, width, 1));
        right = x.saturating_sub(2);
    }
    rects
}

pub struct HeaderWidget<'a> {
    pub channel_label: &'a str,
}

impl WidgetRef for HeaderWidget<'_> {
    fn render_ref(&self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        Line::from(self.channel_label.to_string().bold())
            .render_ref(Rect::new(area.x, area.y, area.width, 1), buf);
        for (label, rect) in BUTTONS.iter().zip(button_rects(area)) {
            Line::from(Span::from(*label).cyan().bold()).render_ref(rect, buf);
        }
    }
}

pub struct FooterWidget;

impl WidgetRef for FooterWidget {
    fn render_ref(&self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let line = Line::from(vec![
            key_hint::plain("←/→"),
            " channels  ".dim(),
            key_hint::plain("↑/↓"),
            " scroll  ".dim(),
            key_hint::alt("←"),
            "/".dim(),
            key_hint::alt("→"),
            " history  ".dim(),
            key_hint::ctrl("B"),
            " menu  ".dim(),
            key_hint::plain("q"),
            " quit".dim(),
        ]);
        line.render_ref(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn button_chips_right_align_in_declaration_order() {
        let header = Rect::new(0, 0, 60, 1);
        let rects = button_rects(header);
        assert_eq!(rects.len(), 2);
        // First chip hugs the right edge.
        assert_eq!(rects[0], Rect::new(44, 0, 16, 1));
        // Second sits two columns left of it.
        assert_eq!(rects[1], Rect::new(34, 0, 8, 1));
    }

    #[test]
    fn chips_that_do_not_fit_are_dropped() {
        let header = Rect::new(0, 0, 18, 1);
        let rects = button_rects(header);
        assert_eq!(rects.len(), 1);
    }

    #[test]
    fn header_renders_label_and_chips() {
        let area = Rect::new(0, 0, 60, 1);
        let mut buf = Buffer::empty(area);
        HeaderWidget {
            channel_label: "# features",
        }
        .render_ref(area, &mut buf);
        let row: String = (0..60).map(|x| buf[(x, 0)].symbol()).collect();
        assert!(row.starts_with("# features"));
        assert!(row.contains("[ Add to Slack ]"));
        assert!(row.contains("[ Docs ]"));
    }
}
