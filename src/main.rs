//! flatview - terminal viewer for Flat Data repositories
//!
//! Binary entry point for the TUI application.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use color_eyre::eyre::WrapErr;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;

use flatview::app::App;
use flatview::config::{self, FlatviewConfig};
use flatview::github::GhExecutor;
use flatview::logging;
use flatview::model::FlatLink;

/// Browse a Flat Data repository's commits and preview its data files
#[derive(Parser)]
#[command(name = "flatview", version, about)]
struct Cli {
    /// Repository (`owner/repo`) or a shareable link
    target: String,

    /// Commit to select (overrides the link's `sha`)
    #[arg(long)]
    sha: Option<String>,

    /// Data file to show (overrides the link's `filename`)
    #[arg(long)]
    filename: Option<String>,

    /// Only list commits by this author
    #[arg(long)]
    author: Option<String>,

    /// Start with the preview panel hidden
    #[arg(long)]
    no_preview: bool,

    /// Config file (defaults to ~/.config/flatview/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,
}

impl Cli {
    /// Build the starting link from the target and the override flags
    fn link(&self, config: &FlatviewConfig) -> color_eyre::Result<FlatLink> {
        let mut link = FlatLink::parse(&self.target)
            .wrap_err_with(|| format!("Invalid repository or link: {}", self.target))?
            .with_base_url(&config.link.base_url);
        if let Some(ref sha) = self.sha {
            link.set_sha(Some(sha));
        }
        if let Some(ref filename) = self.filename {
            link.set_filename(Some(filename));
        }
        Ok(link)
    }

    /// Apply flags that override config values
    fn apply_overrides(&self, config: &mut FlatviewConfig) {
        if let Some(ref author) = self.author {
            config.github.author = author.clone();
        }
        if self.no_preview {
            config.display.preview = false;
        }
    }
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    logging::init()?;

    let mut config = config::load_config(cli.config.as_deref())?;
    cli.apply_overrides(&mut config);
    let link = cli.link(&config)?;

    // Fail before entering the alternate screen if gh is unusable
    GhExecutor::from_config(&config.github).check_version()?;

    let final_link = {
        let terminal = ratatui::init();
        let _restore = scopeguard::guard((), |_| ratatui::restore());
        run(terminal, App::new(link, &config))?
    };

    // Resume later with: flatview '<link>'
    println!("{}", final_link);
    Ok(())
}

/// Run the application's main loop.
fn run(mut terminal: DefaultTerminal, mut app: App) -> color_eyre::Result<FlatLink> {
    while app.running {
        app.poll_fetch();
        app.clear_expired_notification();
        terminal.draw(|frame| app.render(frame))?;
        handle_events(&mut app)?;
    }

    Ok(app.shareable_link())
}

/// Handle crossterm events.
///
/// Uses poll with 200ms timeout so finished fetches get picked up and pending
/// preview fetches get resolved while the user is idle.
fn handle_events(app: &mut App) -> color_eyre::Result<()> {
    if event::poll(Duration::from_millis(200))? {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                app.on_key_event(key);
            }
            _ => {}
        }
    } else {
        // Idle: resolve any pending preview fetch
        app.resolve_pending_preview();
    }
    Ok(())
}
