//! The content panel: the active section's messages rendered chat-style
//! (author line, wrapped body, spacer), offset by the router's scroll
//! position. Entrance styling is decided by the app before the draw and
//! passed in per message.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Stylize;
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::widgets::WidgetRef;
use vibeconnect_core::Message;
use vibeconnect_core::Section;

/// Entrance state of one message, as the draw should show it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealStyle {
    /// Not yet staggered in; occupies layout space but shows nothing.
    Hidden,
    /// Fade-up tagged and not yet fired; rendered dimmed.
    Dim,
    Normal,
}

/// Row extents of each message in content space (before scrolling), plus the
/// panel's total content height. Content space starts at row 0 regardless of
/// where the panel sits on screen, which keeps visibility math unsigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelLayout {
    pub message_rows: Vec<(u16, u16)>,
    pub total_rows: u16,
}

impl PanelLayout {
    pub fn compute(section: &Section, width: u16) -> Self {
        let mut message_rows = Vec::with_capacity(section.messages.len());
        let mut row: u16 = 0;
        for message in &section.messages {
            let height = message_height(message, width);
            message_rows.push((row, height));
            row = row.saturating_add(height);
        }
        Self {
            message_rows,
            total_rows: row,
        }
    }

    /// Content-space rects fed to the entrance animator, paired with each
    /// message's reveal tag.
    pub fn message_rects(&self, section: &Section, width: u16) -> Vec<(Rect, bool)> {
        self.message_rows
            .iter()
            .zip(&section.messages)
            .map(|((row, height), message)| {
                (Rect::new(0, *row, width, *height), message.reveal)
            })
            .collect()
    }

    /// The viewport rect in the same content space, given the current scroll.
    pub fn viewport(&self, scroll: usize, width: u16, height: u16) -> Rect {
        Rect::new(0, scroll.min(u16::MAX as usize) as u16, width, height)
    }

    pub fn max_scroll(&self, viewport_height: u16) -> usize {
        self.total_rows.saturating_sub(viewport_height) as usize
    }
}

/// Author line + wrapped body + one spacer row.
fn message_height(message: &Message, width: u16) -> u16 {
    let text_width = width.max(1) as usize;
    let body_lines = textwrap::wrap(&message.body, text_width).len().max(1) as u16;
    body_lines.saturating_add(2)
}

fn message_lines(message: &Message, width: u16, style: RevealStyle) -> Vec<Line<'static>> {
    let text_width = width.max(1) as usize;
    let height = message_height(message, width) as usize;
    if style == RevealStyle::Hidden {
        return vec![Line::from(""); height];
    }
    let mut lines: Vec<Line<'static>> = Vec::with_capacity(height);
    let author = Line::from(message.author.clone().bold().cyan());
    lines.push(match style {
        RevealStyle::Dim => author.dim(),
        _ => author,
    });
    for piece in textwrap::wrap(&message.body, text_width) {
        let body = Line::from(piece.into_owned());
        lines.push(match style {
            RevealStyle::Dim => body.dim().italic(),
            _ => body,
        });
    }
    lines.push(Line::from(""));
    lines
}

pub struct PanelWidget<'a> {
    pub section: Option<&'a Section>,
    pub scroll: usize,
    /// One entry per message, same order as the section's message list.
    pub styles: Vec<RevealStyle>,
}

impl WidgetRef for PanelWidget<'_> {
    fn render_ref(&self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let Some(section) = self.section else {
            Paragraph::new(Line::from("no channel selected".italic().dim()))
                .render_ref(area, buf);
            return;
        };
        let mut lines: Vec<Line<'static>> = Vec::new();
        for (idx, message) in section.messages.iter().enumerate() {
            let style = self
                .styles
                .get(idx)
                .copied()
                .unwrap_or(RevealStyle::Normal);
            lines.extend(message_lines(message, area.width, style));
        }
        let visible: Vec<Line<'static>> = lines
            .into_iter()
            .skip(self.scroll)
            .take(area.height as usize)
            .collect();
        Paragraph::new(visible).render_ref(area, buf);
    }
}
