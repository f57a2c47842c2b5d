//! Composition root. Owns the router and every collaborator, wires all
//! input subscriptions in one place, and runs the single-tasked event loop,
//! so each event (and in particular every `switch_section`) is handled to
//! completion before the next one is looked at.

use std::time::Duration;
use std::time::Instant;

use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyModifiers;
use crossterm::event::MouseButton;
use crossterm::event::MouseEvent;
use crossterm::event::MouseEventKind;
use ratatui::layout::Constraint;
use ratatui::layout::Layout;
use ratatui::layout::Rect;
use ratatui::widgets::WidgetRef;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::sync::mpsc::unbounded_channel;
use vibeconnect_core::KeyToken;
use vibeconnect_core::NavDirection;
use vibeconnect_core::SequenceMatcher;
use vibeconnect_core::ViewRouter;
use vibeconnect_core::keyboard;
use vibeconnect_core::sync_fragment;

use crate::app_event::AppEvent;
use crate::app_event_sender::AppEventSender;
use crate::chrome::FooterWidget;
use crate::chrome::HeaderWidget;
use crate::chrome::button_rects;
use crate::menu::MenuVisibility;
use crate::panel::PanelLayout;
use crate::panel::PanelWidget;
use crate::panel::RevealStyle;
use crate::party;
use crate::reveal::EntranceAnimator;
use crate::sidebar::SidebarWidget;
use crate::sparkle::SparkleOverlay;
use crate::tui::FrameRequester;
use crate::tui::Tui;
use crate::tui::TuiEvent;

const SIDEBAR_WIDTH: u16 = 18;
const PARTY_FRAME: Duration = Duration::from_millis(120);

/// Screen regions for one frame. Recomputed from the last known size, never
/// cached across resizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ScreenLayout {
    sidebar: Option<Rect>,
    header: Rect,
    panel: Rect,
    footer: Rect,
}

impl ScreenLayout {
    fn compute(area: Rect, sidebar_visible: bool) -> Self {
        let (sidebar, main) = if sidebar_visible {
            let [sidebar, main] =
                Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(1)])
                    .areas(area);
            (Some(sidebar), main)
        } else {
            (None, area)
        };
        let [header, panel, footer] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .areas(main);
        Self {
            sidebar,
            header,
            panel,
            footer,
        }
    }
}

pub struct App {
    router: ViewRouter,
    matcher: SequenceMatcher,
    animator: EntranceAnimator,
    sparkles: SparkleOverlay,
    menu: MenuVisibility,
    party: bool,
    party_tick: usize,
    screen: Rect,
    app_event_tx: AppEventSender,
    app_event_rx: UnboundedReceiver<AppEvent>,
    frame_requester: FrameRequester,
}

impl App {
    pub fn new(
        router: ViewRouter,
        frame_requester: FrameRequester,
        animations: bool,
        initial_size: (u16, u16),
    ) -> Self {
        let (tx, rx) = unbounded_channel();
        Self {
            router,
            matcher: SequenceMatcher::new(),
            animator: EntranceAnimator::new(animations, frame_requester.clone()),
            sparkles: SparkleOverlay::new(frame_requester.clone()),
            menu: MenuVisibility::new(initial_size.0),
            party: false,
            party_tick: 0,
            screen: Rect::new(0, 0, initial_size.0, initial_size.1),
            app_event_tx: AppEventSender::new(tx),
            app_event_rx: rx,
            frame_requester,
        }
    }

    pub async fn run(&mut self, tui: &mut Tui) -> color_eyre::eyre::Result<()> {
        self.frame_requester.schedule_frame();
        loop {
            tokio::select! {
                Some(event) = self.app_event_rx.recv() => {
                    if self.handle_app_event(event) {
                        break;
                    }
                }
                event = tui.next_event() => {
                    let Some(event) = event else { break };
                    match event {
                        TuiEvent::Key(key) => self.handle_key(key),
                        TuiEvent::Mouse(mouse) => self.handle_mouse(mouse),
                        TuiEvent::Resize(width, height) => self.handle_resize(width, height),
                        TuiEvent::Draw => self.draw(tui)?,
                    }
                }
            }
        }
        Ok(())
    }

    /// Returns true when the app should exit.
    fn handle_app_event(&mut self, event: AppEvent) -> bool {
        match event {
            AppEvent::SwitchSection(id) => {
                self.router.switch_section(&id);
                self.frame_requester.schedule_frame();
            }
            AppEvent::Navigate(direction) => {
                keyboard::navigate(&mut self.router, direction);
                self.frame_requester.schedule_frame();
            }
            AppEvent::HistoryBack => {
                if self.router.history_back() {
                    sync_fragment(&mut self.router);
                    self.frame_requester.schedule_frame();
                }
            }
            AppEvent::HistoryForward => {
                if self.router.history_forward() {
                    sync_fragment(&mut self.router);
                    self.frame_requester.schedule_frame();
                }
            }
            AppEvent::ToggleParty => {
                self.party = !self.party;
                tracing::info!(on = self.party, "party mode toggled");
                self.frame_requester.schedule_frame();
            }
            AppEvent::Exit => return true,
        }
        false
    }

    fn handle_key(&mut self, key: KeyEvent) {
        // The sequence matcher watches everything unmodified, arrows
        // included, before normal handling.
        if let Some(token) = key_token(key)
            && self.matcher.push(token)
        {
            self.app_event_tx.send(AppEvent::ToggleParty);
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.app_event_tx.send(AppEvent::Exit);
            }
            KeyCode::Char('b') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.menu.toggle();
                self.frame_requester.schedule_frame();
            }
            KeyCode::Char('q') if key.modifiers.is_empty() => {
                self.app_event_tx.send(AppEvent::Exit);
            }
            KeyCode::Left if key.modifiers.contains(KeyModifiers::ALT) => {
                self.app_event_tx.send(AppEvent::HistoryBack);
            }
            KeyCode::Right if key.modifiers.contains(KeyModifiers::ALT) => {
                self.app_event_tx.send(AppEvent::HistoryForward);
            }
            KeyCode::Left => {
                self.app_event_tx.send(AppEvent::Navigate(NavDirection::Prev));
            }
            KeyCode::Right => {
                self.app_event_tx.send(AppEvent::Navigate(NavDirection::Next));
            }
            KeyCode::Up => self.scroll(-1),
            KeyCode::Down => self.scroll(1),
            KeyCode::PageUp => self.scroll(-(self.layout().panel.height as isize)),
            KeyCode::PageDown => self.scroll(self.layout().panel.height as isize),
            _ => {}
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        let layout = self.layout();
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(sidebar) = layout.sidebar {
                    let nav_items = self.router.nav_items();
                    let widget = SidebarWidget { nav_items };
                    if let Some(id) = widget.hit_test(sidebar, mouse.column, mouse.row) {
                        let id = id.clone();
                        self.app_event_tx.send(AppEvent::SwitchSection(id));
                        return;
                    }
                }
                self.hover_chips(layout.header, mouse.column, mouse.row);
            }
            MouseEventKind::Moved => {
                self.hover_chips(layout.header, mouse.column, mouse.row);
            }
            _ => {}
        }
    }

    fn hover_chips(&mut self, header: Rect, x: u16, y: u16) {
        for chip in button_rects(header) {
            if chip.contains((x, y).into()) {
                self.sparkles.burst(chip, Instant::now());
            }
        }
    }

    fn handle_resize(&mut self, width: u16, height: u16) {
        self.screen = Rect::new(0, 0, width, height);
        self.menu.on_resize(width);
        self.frame_requester.schedule_frame();
    }

    fn layout(&self) -> ScreenLayout {
        ScreenLayout::compute(self.screen, self.menu.sidebar_visible())
    }

    fn scroll(&mut self, delta: isize) {
        let panel = self.layout().panel;
        let max = self
            .router
            .active_section()
            .map(|section| PanelLayout::compute(section, panel.width).max_scroll(panel.height))
            .unwrap_or(0);
        self.router.scroll_by(delta, max);
        self.frame_requester.schedule_frame();
    }

    /// Entrance styling for the active panel's messages at `now`.
    fn reveal_styles(&self, now: Instant) -> Vec<RevealStyle> {
        let Some(section) = self.router.active_section() else {
            return Vec::new();
        };
        let revealed = self
            .animator
            .revealed_count(&section.id, section.messages.len(), now);
        section
            .messages
            .iter()
            .enumerate()
            .map(|(idx, message)| {
                if idx >= revealed {
                    RevealStyle::Hidden
                } else if message.reveal && !self.animator.has_fired(&section.id, idx) {
                    RevealStyle::Dim
                } else {
                    RevealStyle::Normal
                }
            })
            .collect()
    }

    fn draw(&mut self, tui: &mut Tui) -> std::io::Result<()> {
        let now = Instant::now();
        let layout = self.layout();

        // Visibility pass before the render: start stagger runs and fire
        // fade-ups for whatever the panel currently shows.
        if let Some(section) = self.router.active_section() {
            let plan = PanelLayout::compute(section, layout.panel.width);
            let rects = plan.message_rects(section, layout.panel.width);
            let viewport = plan.viewport(
                self.router.state().scroll_offset(),
                layout.panel.width,
                layout.panel.height,
            );
            let section_id = section.id.clone();
            self.animator.observe_panel(&section_id, &rects, viewport, now);
        }

        let styles = self.reveal_styles(now);
        let router = &self.router;
        let sparkles = &mut self.sparkles;
        let party = self.party;
        let party_tick = self.party_tick;

        tui.terminal.draw(|frame| {
            let buf = frame.buffer_mut();
            if let Some(sidebar) = layout.sidebar {
                SidebarWidget {
                    nav_items: router.nav_items(),
                }
                .render_ref(sidebar, buf);
            }
            HeaderWidget {
                channel_label: router.state().channel_label(),
            }
            .render_ref(layout.header, buf);
            PanelWidget {
                section: router.active_section(),
                scroll: router.state().scroll_offset(),
                styles,
            }
            .render_ref(layout.panel, buf);
            FooterWidget.render_ref(layout.footer, buf);

            sparkles.render(buf, now);
            if party {
                party::apply(buf, party_tick);
            }
        })?;

        if self.party {
            self.party_tick = self.party_tick.wrapping_add(1);
            self.frame_requester.schedule_frame_in(PARTY_FRAME);
        }
        Ok(())
    }
}

/// Translate a key press into a matcher token. Modified keys don't count.
fn key_token(key: KeyEvent) -> Option<KeyToken> {
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return None;
    }
    match key.code {
        KeyCode::Up => Some(KeyToken::Up),
        KeyCode::Down => Some(KeyToken::Down),
        KeyCode::Left => Some(KeyToken::Left),
        KeyCode::Right => Some(KeyToken::Right),
        KeyCode::Char(c) => Some(KeyToken::Char(c.to_ascii_lowercase())),
        _ => None,
    }
}
