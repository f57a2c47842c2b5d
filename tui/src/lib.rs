//! Terminal front end for the VibeConnect deck: a chat-styled, single-screen
//! walkthrough of the product, navigated like a Slack workspace.

use std::fs;
use std::path::Path;
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use vibeconnect_core::Deck;
use vibeconnect_core::ViewRouter;
use vibeconnect_core::sync_fragment;

mod app;
mod app_event;
mod app_event_sender;
mod chrome;
mod key_hint;
mod menu;
mod panel;
mod party;
mod reveal;
mod sidebar;
mod sparkle;
mod tui;

use app::App;
use tui::Tui;

#[derive(Debug, Parser)]
#[command(name = "vibeconnect", about = "VibeConnect deck, in your terminal")]
pub struct Cli {
    /// Channel to open at startup, e.g. `#setup` (the `#` is optional).
    pub fragment: Option<String>,

    /// Load a deck from a TOML file instead of the built-in one.
    #[arg(long, value_name = "FILE")]
    pub deck: Option<PathBuf>,

    /// Show every message immediately, skipping entrance animations.
    #[arg(long)]
    pub no_animations: bool,
}

pub async fn run_main(cli: Cli) -> color_eyre::eyre::Result<()> {
    color_eyre::install()?;
    let _log_guard = init_logging()?;
    let banner = banner();
    tracing::info!("{banner}");

    // Whatever happens, put the terminal back before the panic report.
    let prev_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = tui::restore();
        prev_hook(info);
    }));

    let deck = load_deck(cli.deck.as_deref())?;
    tracing::info!(sections = deck.len(), "deck loaded");

    let fragment = cli.fragment.as_deref().map(normalize_fragment);
    let mut router = ViewRouter::new(deck, fragment.as_deref());
    sync_fragment(&mut router);

    let mut tui = Tui::new()?;
    let size = tui.terminal.size()?;
    let frame_requester = tui.frame_requester();
    let mut app = App::new(
        router,
        frame_requester,
        !cli.no_animations,
        (size.width, size.height),
    );
    let result = app.run(&mut tui).await;
    let _ = tui::restore();
    result
}

/// Branding line written to the log at startup, ahead of any diagnostics.
fn banner() -> String {
    format!(
        "✦ VibeConnect Deck v{} · your workspace, mapped",
        env!("CARGO_PKG_VERSION")
    )
}

fn load_deck(path: Option<&Path>) -> color_eyre::eyre::Result<Deck> {
    let deck = match path {
        Some(path) => Deck::from_toml_str(&fs::read_to_string(path)?)?,
        None => Deck::builtin()?,
    };
    Ok(deck)
}

/// The `#` is sugar on the command line; history entries always carry it.
fn normalize_fragment(fragment: &str) -> String {
    if fragment.starts_with('#') {
        fragment.to_string()
    } else {
        format!("#{fragment}")
    }
}

/// File logging only: the alternate screen owns stdout and stderr while the
/// app runs. Returns the guard that flushes the writer on drop.
fn init_logging() -> std::io::Result<tracing_appender::non_blocking::WorkerGuard> {
    let log_dir = std::env::temp_dir().join("vibeconnect");
    fs::create_dir_all(&log_dir)?;
    let appender = tracing_appender::rolling::never(log_dir, "vibeconnect-tui.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(writer)
        .with_ansi(false)
        .try_init();
    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn banner_names_the_product_and_version() {
        let banner = banner();
        assert!(banner.contains("VibeConnect"));
        assert!(banner.contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn fragment_hash_prefix_is_optional() {
        assert_eq!(normalize_fragment("setup"), "#setup");
        assert_eq!(normalize_fragment("#setup"), "#setup");
    }

    #[test]
    fn deck_flag_loads_a_toml_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(
            file,
            r##"
            initial = "only"

            [[sections]]
            id = "only"
            title = "# only"
            "##
        )
        .expect("write deck");
        let deck = load_deck(Some(file.path())).expect("load deck");
        assert_eq!(deck.len(), 1);
    }

    #[test]
    fn missing_deck_file_is_an_error() {
        assert!(load_deck(Some(Path::new("/nonexistent/deck.toml"))).is_err());
    }

    #[test]
    fn no_flag_falls_back_to_the_builtin_deck() {
        let deck = load_deck(None).expect("builtin");
        assert!(deck.len() >= 2);
    }
}
