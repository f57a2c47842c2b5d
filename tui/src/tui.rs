//! Terminal session plumbing: raw-mode/alt-screen lifecycle with guaranteed
//! restore, an async event stream merging input with scheduled animation
//! frames, and the [`FrameRequester`] handle widgets use to ask for redraws.

use std::io;
use std::io::Stdout;
use std::io::stdout;
use std::time::Duration;
use std::time::Instant;

use crossterm::event::DisableMouseCapture;
use crossterm::event::EnableMouseCapture;
use crossterm::event::Event;
use crossterm::event::EventStream;
use crossterm::event::KeyEvent;
use crossterm::event::KeyEventKind;
use crossterm::event::MouseEvent;
use crossterm::execute;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::sync::mpsc::UnboundedSender;
use tokio::sync::mpsc::unbounded_channel;
use tokio_stream::StreamExt;

/// Events the app loop consumes. `Draw` is emitted when a scheduled frame
/// comes due; everything else is user input.
#[derive(Debug)]
pub enum TuiEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
    Draw,
}

/// Cloneable handle for scheduling redraws. Requests are coalesced: the
/// earliest outstanding deadline wins.
#[derive(Clone, Debug)]
pub struct FrameRequester {
    tx: UnboundedSender<Instant>,
}

impl FrameRequester {
    pub fn schedule_frame(&self) {
        let _ = self.tx.send(Instant::now());
    }

    pub fn schedule_frame_in(&self, delay: Duration) {
        let _ = self.tx.send(Instant::now() + delay);
    }

    /// A requester whose frames go nowhere. For tests.
    pub fn test_dummy() -> Self {
        let (tx, rx) = unbounded_channel();
        std::mem::forget(rx);
        Self { tx }
    }
}

/// Owns the terminal for the lifetime of the app. Entering raw mode, the
/// alternate screen, and mouse capture happens in [`Tui::new`]; restore runs
/// on drop and from the panic hook via [`restore`].
pub struct Tui {
    pub terminal: Terminal<CrosstermBackend<Stdout>>,
    events: EventStream,
    frame_tx: UnboundedSender<Instant>,
    frame_rx: UnboundedReceiver<Instant>,
    next_frame: Option<Instant>,
}

impl Tui {
    pub fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        execute!(stdout(), EnterAlternateScreen, EnableMouseCapture)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
        let (frame_tx, frame_rx) = unbounded_channel();
        Ok(Self {
            terminal,
            events: EventStream::new(),
            frame_tx,
            frame_rx,
            next_frame: None,
        })
    }

    pub fn frame_requester(&self) -> FrameRequester {
        FrameRequester {
            tx: self.frame_tx.clone(),
        }
    }

    /// Next event to handle. Key release events are filtered out here so the
    /// app only ever sees presses and repeats.
    pub async fn next_event(&mut self) -> Option<TuiEvent> {
        loop {
            let deadline = self.next_frame;
            tokio::select! {
                ev = self.events.next() => {
                    match ev {
                        Some(Ok(Event::Key(key))) => {
                            if matches!(key.kind, KeyEventKind::Release) {
                                continue;
                            }
                            return Some(TuiEvent::Key(key));
                        }
                        Some(Ok(Event::Mouse(mouse))) => return Some(TuiEvent::Mouse(mouse)),
                        Some(Ok(Event::Resize(w, h))) => return Some(TuiEvent::Resize(w, h)),
                        Some(Ok(_)) => continue,
                        Some(Err(_)) | None => return None,
                    }
                }
                Some(at) = self.frame_rx.recv() => {
                    self.next_frame = Some(match self.next_frame {
                        Some(existing) => existing.min(at),
                        None => at,
                    });
                    continue;
                }
                _ = tokio::time::sleep_until(deadline.unwrap_or_else(Instant::now).into()),
                    if deadline.is_some() =>
                {
                    self.next_frame = None;
                    return Some(TuiEvent::Draw);
                }
            }
        }
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        let _ = restore();
    }
}

/// Best-effort terminal restore; safe to call more than once. Also invoked
/// from the panic hook so a crash never leaves the terminal raw.
pub fn restore() -> io::Result<()> {
    execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen)?;
    disable_raw_mode()
}
