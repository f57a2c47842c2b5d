//! The channel sidebar: one row per navigation item, the active one marked.
//! Active state is read from the router's nav items and never derived from
//! what happens to be highlighted on screen.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Stylize;
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::widgets::WidgetRef;
use vibeconnect_core::NavItem;
use vibeconnect_core::SectionId;

/// Rows above the first channel entry (workspace name + blank).
const HEADER_ROWS: u16 = 2;

pub struct SidebarWidget<'a> {
    pub nav_items: &'a [NavItem],
}

impl SidebarWidget<'_> {
    /// Map a click position to the channel on that row, if any.
    pub fn hit_test(&self, area: Rect, x: u16, y: u16) -> Option<&SectionId> {
        if !area.contains((x, y).into()) {
            return None;
        }
        let row = y.checked_sub(area.y.saturating_add(HEADER_ROWS))?;
        self.nav_items
            .get(row as usize)
            .map(|item| &item.section_id)
    }
}

impl WidgetRef for SidebarWidget<'_> {
    fn render_ref(&self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let mut lines: Vec<Line<'static>> = Vec::with_capacity(self.nav_items.len() + 2);
        lines.push(Line::from("VibeConnect".bold()));
        lines.push(Line::from(""));
        for item in self.nav_items {
            let label = format!("# {}", item.section_id);
            let line = if item.active {
                Line::from(format!("> {label}").bold().cyan())
            } else {
                Line::from(format!("  {label}")).dim()
            };
            lines.push(line);
        }
        Paragraph::new(lines).render_ref(area, buf);
    }
}
