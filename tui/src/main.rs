use clap::Parser;
use vibeconnect_tui::Cli;
use vibeconnect_tui::run_main;

#[tokio::main]
async fn main() -> color_eyre::eyre::Result<()> {
    run_main(Cli::parse()).await
}
