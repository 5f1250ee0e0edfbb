//! Command-line shell around the folio library.
//!
//! The shell translates arguments into [`Event`]s, hands them to
//! [`handle_event`], and executes the returned [`Action`]s. It owns the only
//! side effects: printing, and writing likes and bookmarks to disk.
//!
//! # Commands
//!
//! - `folio list [QUERY]`: One page of the listing. `QUERY` is a query string
//!   such as `?search=docker&sort=popular`; flags applied after it
//! - `folio show <ID>`: One post with up to three related posts
//! - `folio categories`: Category picker values, `All` first
//! - `folio like <ID>` / `folio bookmark <ID>`: Toggle and persist
//! - `folio share <ID>`: Print the share link
//!
//! # Configuration Precedence
//!
//! Defaults → config file (`--config`, or `<config_dir>/folio/config.toml` if
//! present) → command-line flags.

#![allow(clippy::multiple_crate_versions)]

use clap::{Parser, Subcommand};
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;

use folio::infrastructure::get_data_dir;
use folio::storage::{InteractionStore, JsonInteractionStore};
use folio::ui::helpers::Painter;
use folio::{handle_event, Action, Config, Event, ListView, SortKey};

/// Terminal width used when `COLUMNS` is unset or invalid.
const DEFAULT_WIDTH: usize = 80;

/// Blog listing with search, category filters, sorting, and pagination
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(version)]
#[command(about = "Search, filter, sort, and page through a blog's posts")]
struct Args {
    /// JSON file with posts (defaults to the bundled sample)
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Posts per page
    #[arg(long, global = true, value_parser = clap::value_parser!(u16).range(1..))]
    page_size: Option<u16>,

    /// Built-in theme name
    #[arg(long, global = true, value_parser = ["folio-dark", "folio-light"])]
    theme: Option<String>,

    /// Tracing level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    trace_level: Option<String>,

    /// Disable colors
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Command {
    /// Print one page of the listing
    List(ListArgs),
    /// Print a post and its related posts
    Show { id: u64 },
    /// Print the category picker values
    Categories,
    /// Toggle a like on a post
    Like { id: u64 },
    /// Toggle a bookmark on a post
    Bookmark { id: u64 },
    /// Print a post's share link
    Share { id: u64 },
}

#[derive(clap::Args, Debug, Default, PartialEq, Eq)]
struct ListArgs {
    /// Query string, e.g. "?search=docker&sort=popular" or "/blog?page=2"
    query: Option<String>,

    /// Search text
    #[arg(short, long)]
    search: Option<String>,

    /// Category ("All" for every category)
    #[arg(short, long)]
    category: Option<String>,

    /// Sort order
    #[arg(long, value_parser = parse_sort)]
    sort: Option<SortKey>,

    /// Page number
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    page: Option<u32>,
}

fn parse_sort(value: &str) -> Result<SortKey, String> {
    SortKey::ALL
        .into_iter()
        .find(|key| key.as_str() == value)
        .ok_or_else(|| format!("expected one of: newest, oldest, popular, liked (got {value:?})"))
}

impl ListArgs {
    /// Events in application order. Filters reset the page, so the page goes
    /// last.
    fn events(&self) -> Vec<Event> {
        let mut events = Vec::new();
        if let Some(query) = &self.query {
            let query_string = query.find('?').map_or(query.as_str(), |i| &query[i..]);
            events.push(Event::Navigate(query_string.to_string()));
        }
        if let Some(search) = &self.search {
            events.push(Event::SetSearch(search.clone()));
        }
        if let Some(category) = &self.category {
            events.push(Event::SetCategory(category.clone()));
        }
        if let Some(sort) = self.sort {
            events.push(Event::SetSort(sort));
        }
        if let Some(page) = self.page {
            events.push(Event::GoToPage(page));
        }
        events
    }
}

/// Shell state: the list view plus the interaction store, opened lazily.
struct Shell {
    view: ListView,
    config: Config,
    store: Option<JsonInteractionStore>,
    width: usize,
}

impl Shell {
    fn new(view: ListView, config: Config) -> Self {
        let width = std::env::var("COLUMNS")
            .ok()
            .and_then(|c| c.parse().ok())
            .filter(|&w: &usize| w >= 20)
            .unwrap_or(DEFAULT_WIDTH);

        Self {
            view,
            config,
            store: None,
            width,
        }
    }

    /// Opens the interaction store and loads the reader's marks into the view.
    fn load_interactions(&mut self) -> folio::Result<()> {
        let path = self.config.interactions_path(&get_data_dir());
        let store = JsonInteractionStore::new(path)?;
        self.view.interactions = store.load()?;
        tracing::debug!(path = %store.path().display(), "interactions loaded");
        self.store = Some(store);
        Ok(())
    }

    fn dispatch(&mut self, event: &Event) -> folio::Result<()> {
        let (_should_render, actions) = handle_event(&mut self.view, event)?;
        for action in &actions {
            self.execute_action(action)?;
        }
        Ok(())
    }

    #[tracing::instrument(level = "debug", skip(self))]
    fn execute_action(&mut self, action: &Action) -> folio::Result<()> {
        let painter = Painter::new(&self.view.settings.theme, self.view.settings.color);

        match action {
            Action::ReplaceUrl(url) => {
                tracing::debug!(url = %url, "url replaced");
            }
            Action::Notify(notification) => {
                println!("{}", painter.bold(&notification.title, &painter.colors().header_fg));
                println!("  {}", painter.dim(&notification.description));
            }
            Action::PersistInteraction { kind, id, marked } => {
                if let Some(store) = self.store.as_mut() {
                    store.set_marked(*kind, *id, *marked)?;
                } else {
                    tracing::warn!(kind = ?kind, id, "no interaction store open, change not saved");
                }
            }
            Action::ShareLink { title, text, url } => {
                tracing::debug!(title = %title, text = %text, "no share sheet, printing link");
                println!("{}", painter.fg(url, &painter.colors().accent));
            }
        }
        Ok(())
    }

    fn run(&mut self, command: Command) -> folio::Result<()> {
        let _span = tracing::debug_span!("run", command = ?command).entered();

        match command {
            Command::List(args) => {
                self.load_interactions()?;
                for event in args.events() {
                    self.dispatch(&event)?;
                }
                print!("{}", folio::ui::render(&self.view, self.width));
            }
            Command::Show { id } => {
                self.load_interactions()?;
                print!("{}", folio::ui::render_detail(&self.view, id, self.width)?);
            }
            Command::Categories => {
                for category in folio::query::categories(self.view.store.records()) {
                    println!("{category}");
                }
            }
            Command::Like { id } => {
                self.load_interactions()?;
                self.dispatch(&Event::ToggleLike(id))?;
            }
            Command::Bookmark { id } => {
                self.load_interactions()?;
                self.dispatch(&Event::ToggleBookmark(id))?;
            }
            Command::Share { id } => {
                self.dispatch(&Event::Share(id))?;
            }
        }
        Ok(())
    }
}

/// Config file, then flag overrides.
fn resolve_config(args: &Args) -> folio::Result<Config> {
    let path = args
        .config
        .clone()
        .or_else(|| Config::default_path().filter(|p| p.exists()));

    let mut config = match path {
        Some(path) => Config::from_file(&path)?,
        None => Config::default(),
    };

    if let Some(data) = &args.data {
        config.data_file = Some(data.to_string_lossy().into_owned());
    }
    if let Some(page_size) = args.page_size {
        config.page_size = usize::from(page_size);
    }
    if let Some(theme) = &args.theme {
        config.theme = Some(theme.clone());
        config.theme_file = None;
    }
    if let Some(level) = &args.trace_level {
        config.trace_level = Some(level.clone());
    }

    config.validate()?;
    Ok(config)
}

fn run(args: Args) -> folio::Result<()> {
    let config = resolve_config(&args)?;
    folio::observability::init_tracing(&config, &get_data_dir());
    tracing::debug!(config = ?config, "configuration resolved");

    let mut view = folio::initialize(&config)?;
    view.settings.color = !args.no_color
        && std::env::var_os("NO_COLOR").is_none()
        && std::io::stdout().is_terminal();

    let command = args.command.unwrap_or(Command::List(ListArgs::default()));
    Shell::new(view, config).run(command)
}

fn main() -> ExitCode {
    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            eprintln!("folio: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_does_not_error() {
        let err = Args::try_parse_from(["folio", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn no_args_defaults_to_listing() {
        let args = Args::parse_from(["folio"]);
        assert_eq!(args.command, None);
        assert!(!args.no_color);
        assert_eq!(args.page_size, None);
    }

    #[test]
    fn list_flags_parse() {
        let args = Args::parse_from([
            "folio", "list", "?search=node", "-c", "Database", "--sort", "liked", "-p", "2",
        ]);
        let Some(Command::List(list)) = args.command else {
            panic!("expected list command");
        };
        assert_eq!(list.query.as_deref(), Some("?search=node"));
        assert_eq!(list.category.as_deref(), Some("Database"));
        assert_eq!(list.sort, Some(SortKey::Liked));
        assert_eq!(list.page, Some(2));
    }

    #[test]
    fn unknown_sort_is_rejected() {
        let err = Args::try_parse_from(["folio", "list", "--sort", "trending"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn zero_page_and_page_size_are_rejected() {
        assert!(Args::try_parse_from(["folio", "list", "--page", "0"]).is_err());
        assert!(Args::try_parse_from(["folio", "--page-size", "0"]).is_err());
    }

    #[test]
    fn global_flags_work_after_subcommand() {
        let args = Args::parse_from(["folio", "show", "3", "--no-color", "--theme", "folio-light"]);
        assert_eq!(args.command, Some(Command::Show { id: 3 }));
        assert!(args.no_color);
        assert_eq!(args.theme.as_deref(), Some("folio-light"));
    }

    #[test]
    fn list_events_put_page_last() {
        let list = ListArgs {
            query: Some("/blog?sort=oldest".to_string()),
            search: Some("react".to_string()),
            page: Some(2),
            ..ListArgs::default()
        };
        assert_eq!(
            list.events(),
            vec![
                Event::Navigate("?sort=oldest".to_string()),
                Event::SetSearch("react".to_string()),
                Event::GoToPage(2),
            ]
        );
    }

    #[test]
    fn flags_override_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "page_size = 3\ntheme = \"folio-light\"\n").unwrap();

        let args = Args::parse_from([
            "folio",
            "--config",
            path.to_str().unwrap(),
            "--page-size",
            "5",
        ]);
        let config = resolve_config(&args).unwrap();
        assert_eq!(config.page_size, 5);
        assert_eq!(config.theme.as_deref(), Some("folio-light"));
    }
}
