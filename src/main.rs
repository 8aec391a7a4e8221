use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::{
    io,
    path::{Path, PathBuf},
    sync::atomic::{AtomicBool, Ordering},
    time::Duration,
};

/// Marketplace listing browser
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging to a file in the temp directory
    #[arg(short, long)]
    debug: bool,

    /// Path to a catalog JSON file (overrides the config file)
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Start with this category narrowing applied
    #[arg(long)]
    category: Option<String>,

    /// Start in list view instead of the grid
    #[arg(long)]
    list: bool,

    /// Path to config file (default: platform-specific, see docs)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

// Global flag for debug mode
static DEBUG_MODE: AtomicBool = AtomicBool::new(false);

mod app;
mod handlers;
mod ui;
mod utils;

use markettui::catalog::{self, Listing};
use markettui::config::{self, Config};
use markettui::discovery::{DiscoveryController, DiscoverySnapshot, ListingActions};
use markettui::model::filters::SearchFilters;
use markettui::model::ui::UiModel;
use markettui::ViewMode;

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
        let _ = writeln!(file, "{}", msg);
    }
}

/// Listing hooks that record interactions in the debug log
///
/// Stand-in for a marketplace backend: saves, messages, and selections end
/// up in the log instead of going anywhere.
struct DebugLogActions;

impl ListingActions for DebugLogActions {
    fn on_save(&mut self, listing_id: &str) {
        log_debug(&format!("action: save listing {}", listing_id));
    }

    fn on_message(&mut self, listing: &Listing) {
        log_debug(&format!(
            "action: message {} about listing {}",
            listing.seller, listing.id
        ));
    }

    fn on_select(&mut self, listing: &Listing) {
        log_debug(&format!("action: select listing {}", listing.id));
    }
}

pub struct App {
    /// Listing discovery session: catalog, filters, results, view, panel
    pub discovery: DiscoveryController,
    /// Presentation state: selection, panel input buffers, toast, quit flag
    pub ui: UiModel,
    /// Column count of the grid as last rendered, for row-wise movement
    pub last_grid_columns: usize,
}

impl App {
    fn new(listings: Vec<Listing>, args: &Args, config: &Config) -> Self {
        let mut discovery = DiscoveryController::new(
            listings,
            args.category.clone(),
            config.unknown_distance_rank(),
        );

        let initial_sort = config.initial_sort();
        if initial_sort.is_none() {
            log_debug(&format!(
                "unrecognized sort name {:?} in config, keeping catalog order",
                config.default_sort
            ));
        }

        // Config-driven starting filters; everything else keeps its default
        let initial = SearchFilters {
            distance: config.initial_distance(),
            sort_by: initial_sort,
            ..discovery.filters().clone()
        };
        discovery.set_filters(initial);

        let view_mode = if args.list {
            ViewMode::List
        } else {
            config.initial_view_mode()
        };
        discovery.set_view_mode(view_mode);

        discovery.set_actions(Box::new(DebugLogActions));
        discovery.subscribe(|snapshot: DiscoverySnapshot<'_>| {
            log_debug(&format!(
                "discovery: {} results (filters: {:?})",
                snapshot.result_count(),
                snapshot.filters
            ));
        });

        let mut ui = UiModel::new();
        if discovery.result_count() > 0 {
            ui.selected = Some(0);
        }

        Self {
            discovery,
            ui,
            last_grid_columns: 1,
        }
    }
}

/// Pick the catalog source: CLI flag, then config file, then the built-in
/// sample
fn load_listings(args: &Args, config: &Config) -> Result<Vec<Listing>> {
    if let Some(path) = &args.catalog {
        return catalog::load_catalog(path);
    }
    if let Some(path) = &config.catalog {
        return catalog::load_catalog(Path::new(path));
    }
    catalog::sample_catalog()
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.debug {
        DEBUG_MODE.store(true, Ordering::Relaxed);
        log_debug("markettui starting");
    }

    let config = config::load_config(args.config.clone())?;
    let listings = load_listings(&args, &config).context("Failed to load the listing catalog")?;
    log_debug(&format!("loaded {} listings", listings.len()));

    let mut app = App::new(listings, &args, &config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let result = run_app(&mut terminal, &mut app);

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Return result after cleanup
    result
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        // Always render (Elm Architecture approach)
        terminal.draw(|f| {
            ui::render(f, app);
        })?;

        // Auto-dismiss toast after its display window
        if app.ui.should_dismiss_toast() {
            app.ui.dismiss_toast();
        }

        if app.ui.should_quit {
            return Ok(());
        }

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                handlers::keyboard::handle_key(app, key);
            }
        }
    }
}
