use std::io::{self, stdout, Stdout};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;
use crossbeam_channel::{Receiver, TryRecvError};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::{backend::CrosstermBackend, Terminal};

use hashtag::app::LogicThread;
use hashtag::config::Config;
use hashtag::render::RenderState;
use hashtag::{hlog, hlog_error, ui, Error, Result};

const FRAME_DURATION: Duration = Duration::from_micros(16_666); // 60fps

/// Hashtag - type tags, commit them with a separator key
#[derive(Parser, Debug)]
#[command(name = "hashtag")]
#[command(version, about, long_about = None)]
#[command(
    after_help = "SEPARATORS:\n    Enter, Tab, Space, or any single character (e.g. ',' or ';')\n\nENVIRONMENT:\n    HASHTAG_DEBUG=1     Enable debug logging (alternative to --debug)"
)]
pub struct Cli {
    /// Maximum number of tags (overrides the config file, default 5)
    #[arg(short = 'm', long)]
    pub max_tags: Option<usize>,

    /// Allow any number of tags
    #[arg(long, conflicts_with = "max_tags")]
    pub no_limit: bool,

    /// Separator key; repeat for several (replaces the configured set)
    #[arg(short = 's', long = "separator", value_name = "KEY")]
    pub separators: Vec<String>,

    /// Initial tag; repeat for several (replaces the configured list)
    #[arg(short = 't', long = "tag", value_name = "TAG")]
    pub tags: Vec<String>,

    /// Config file (default: ~/.hashtag/hashtag.toml)
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Enable debug logging (writes to ~/.hashtag/hashtag.log)
    #[arg(short = 'd', long)]
    pub debug: bool,
}

impl Cli {
    /// Layer CLI overrides over the loaded config.
    pub fn apply(&self, mut config: Config) -> Config {
        if self.no_limit {
            config.max_tags = None;
        } else if self.max_tags.is_some() {
            config.max_tags = self.max_tags;
        }
        if !self.separators.is_empty() {
            config.separators = self.separators.clone();
        }
        if !self.tags.is_empty() {
            config.tags = self.tags.clone();
        }
        config
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    hashtag::log::init_with_debug(cli.debug);
    hlog!("hashtag starting");

    let loaded = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let config = cli.apply(loaded);
    let editor_config = config.editor_config()?;
    let tags = config.initial_tags();

    let shutdown = Arc::new(AtomicBool::new(false));
    let (state_tx, state_rx) = crossbeam_channel::bounded::<RenderState>(1);

    let shutdown_clone = shutdown.clone();
    let logic_handle =
        thread::spawn(move || LogicThread::run(tags, editor_config, state_tx, shutdown_clone));

    let mut terminal = setup_terminal()?;
    let render_result = render_loop(&mut terminal, state_rx, &shutdown);

    shutdown.store(true, Ordering::SeqCst);
    let logic_result = logic_handle.join();
    restore_terminal(&mut terminal)?;
    render_result?;

    let tags = match logic_result {
        Ok(result) => result?,
        Err(_) => {
            hlog_error!("Logic thread panicked");
            return Err(Error::LogicThreadPanicked);
        }
    };

    hlog!("hashtag exiting with {} tags", tags.len());
    println!("{}", serde_json::to_string(&tags)?);
    Ok(())
}

fn render_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    state_rx: Receiver<RenderState>,
    shutdown: &AtomicBool,
) -> Result<()> {
    let mut state = RenderState::default();
    let mut last_version: u64 = 0;
    let mut last_frame = Instant::now();
    let mut dirty = true;

    loop {
        if shutdown.load(Ordering::Relaxed) {
            break;
        }

        match state_rx.try_recv() {
            Ok(s) => {
                dirty = dirty || s.version != last_version;
                state = s;
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => break,
        }

        if last_frame.elapsed() < FRAME_DURATION {
            thread::sleep(Duration::from_micros(500));
            continue;
        }
        last_frame = Instant::now();

        if dirty {
            terminal.draw(|f| ui::draw(f, &state))?;
            last_version = state.version;
            dirty = false;
        }
    }
    Ok(())
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    terminal.hide_cursor()?;
    terminal.clear()?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    terminal.show_cursor()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(disable_raw_mode()?)
}
