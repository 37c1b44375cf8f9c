use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{Event, EventStream, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use rand::{rngs::StdRng, SeedableRng};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{
    io,
    path::PathBuf,
    sync::atomic::{AtomicBool, Ordering},
    time::{Duration, Instant},
};

/// Mixer-Table: shuffle and pick rows in the terminal
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging to <temp dir>/mixtable-debug.log
    #[arg(short, long)]
    debug: bool,

    /// Enable vim keybindings (jk, ^D/U, gg/G)
    #[arg(long)]
    vim: bool,

    /// Path to config file (default: platform-specific, see docs)
    #[arg(short, long)]
    config: Option<String>,

    /// Seed the shuffle RNG for reproducible orderings
    #[arg(long)]
    seed: Option<u64>,

    /// Number of rows to create
    #[arg(long)]
    count: Option<u32>,
}

// Global flag for debug mode
static DEBUG_MODE: AtomicBool = AtomicBool::new(false);

mod config;
mod handlers;
mod ui;
mod utils;

use config::Config;
use mixtable::logic::errors::format_error_message;
use mixtable::logic::ui::earliest_deadline;
use mixtable::messages::{Intent, IntentQueue, MAX_QUEUED_INTENTS};
use mixtable::model::Model;
use mixtable::update::update;

/// Wake-up interval when nothing is scheduled
const IDLE_TICK: Duration = Duration::from_millis(500);

fn log_debug(msg: &str) {
    // Only log if debug mode is enabled
    if !DEBUG_MODE.load(Ordering::Relaxed) {
        return;
    }

    use std::fs::OpenOptions;
    use std::io::Write;
    if let Ok(mut file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(utils::get_debug_log_path())
    {
        let _ = writeln!(file, "{}", utils::timestamped(msg));
    }
}

pub struct App {
    pub model: Model,

    /// Mutations waiting for the current animation to settle
    queue: IntentQueue,

    rng: StdRng,
}

impl App {
    fn new(config: &Config) -> Self {
        let mut model = Model::new(
            config.item_count,
            config.title.clone(),
            config.vim_mode,
            Duration::from_millis(config.animation_ms),
        );
        model.ui.toast_ms = config.toast_ms;

        let rng = match config.seed {
            Some(seed) => {
                log_debug(&format!("Using fixed shuffle seed {}", seed));
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_os_rng(),
        };

        Self {
            model,
            queue: IntentQueue::new(),
            rng,
        }
    }

    /// Turn a key press into an intent and apply or queue it
    fn handle_key(&mut self, key: KeyEvent) {
        let Some(intent) = handlers::handle_key(&mut self.model, key) else {
            return;
        };
        let now = Instant::now();

        if !intent.is_mutating() {
            self.apply(intent, now);
            return;
        }

        if !self.queue.push(intent) {
            log_debug(&format!("Intent queue full, dropped {:?}", intent));
            self.model.show_toast(format!(
                "Error: {} actions already pending, key ignored",
                MAX_QUEUED_INTENTS
            ));
            return;
        }
        if self.model.animation.is_animating() {
            log_debug(&format!(
                "Holding {:?} until animation settles ({} queued)",
                intent,
                self.queue.len()
            ));
        }
        self.drain_queue(now);
    }

    fn apply(&mut self, intent: Intent, now: Instant) {
        match update(&mut self.model, intent, &mut self.rng, now) {
            Ok(Some(delta)) if delta.is_empty() => {
                log_debug(&format!("Applied {:?}: no row changes", intent));
            }
            Ok(Some(delta)) => {
                log_debug(&format!(
                    "Applied {:?}: {} moves, {} reloads",
                    intent,
                    delta.moves.len(),
                    delta.reloads.len()
                ));
            }
            Ok(None) => {}
            Err(e) => {
                log_debug(&format!("Failed to apply {:?}: {}", intent, e));
                self.model.show_toast(format_error_message(&e));
            }
        }
    }

    /// Apply queued mutations one at a time, stopping at the first that animates
    fn drain_queue(&mut self, now: Instant) {
        while let Some(intent) = self.queue.pop_ready(self.model.animation.is_animating()) {
            self.apply(intent, now);
        }
    }

    /// Advance timers: settle finished animations, release queued intents,
    /// expire the toast
    fn tick(&mut self, now: Instant) {
        if self.model.animation.is_animating() && self.model.animation.is_settled(now) {
            if let Some(anim) = self.model.animation.settle() {
                log_debug(&format!("Animation settled ({} rows)", anim.rows.len()));
            }
        }

        self.drain_queue(now);

        if self.model.ui.should_dismiss_toast() {
            self.model.ui.dismiss_toast();
        }
    }

    /// Next instant the loop must wake up without input
    fn next_deadline(&self) -> Option<Instant> {
        earliest_deadline(self.model.animation.deadline(), self.model.ui.toast_deadline())
    }
}

/// Resolve the config file. A path given on the command line must exist;
/// otherwise the default locations are optional.
fn get_config_path(cli_path: Option<String>) -> Result<Option<PathBuf>> {
    // If CLI argument provided, use it
    if let Some(path) = cli_path {
        let p = PathBuf::from(&path);
        if p.exists() {
            return Ok(Some(p));
        } else {
            anyhow::bail!("Config file not found at specified path: {}", path);
        }
    }

    // Try ~/.config/mixtable/config.yaml
    if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("mixtable").join("config.yaml");
        if config_path.exists() {
            return Ok(Some(config_path));
        }
    }

    // Fallback to ./config.yaml
    let local_config = PathBuf::from("config.yaml");
    if local_config.exists() {
        return Ok(Some(local_config));
    }

    Ok(None)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse();

    // Set debug mode
    DEBUG_MODE.store(args.debug, Ordering::Relaxed);

    if args.debug {
        log_debug("Debug mode enabled");
    }

    // Load configuration (defaults when no file exists)
    let config_path = get_config_path(args.config)?;
    log_debug(&format!("Loading config from: {:?}", config_path));
    let mut config = Config::load(config_path.as_deref())?;

    // Override config with CLI flags
    if args.vim {
        config.vim_mode = true;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if let Some(count) = args.count {
        config.item_count = count;
    }
    config.validate()?;

    let mut app = App::new(&config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app with error handler
    let result = run_app(&mut terminal, &mut app).await;

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Return result after cleanup
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    let mut events = EventStream::new();

    loop {
        app.tick(Instant::now());
        terminal.draw(|f| ui::render(f, app))?;

        if app.model.ui.should_quit {
            break;
        }

        let deadline = app
            .next_deadline()
            .unwrap_or_else(|| Instant::now() + IDLE_TICK);

        tokio::select! {
            maybe_event = events.next() => match maybe_event {
                Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                    app.handle_key(key);
                }
                // Resize and other events just trigger a redraw
                Some(Ok(_)) => {}
                Some(Err(e)) => {
                    log_debug(&format!("Event stream error: {}", e));
                    return Err(e.into());
                }
                None => break,
            },
            _ = tokio::time::sleep_until(tokio::time::Instant::from_std(deadline)) => {}
        }
    }

    Ok(())
}
