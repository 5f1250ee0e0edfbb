//! Folio: a blog listing query engine.
//!
//! Folio takes an in-memory collection of posts and answers listing queries
//! over it:
//! - Case-insensitive search over titles, excerpts, and tags
//! - Category filtering and four sort orders (newest, oldest, popular, liked)
//! - Fixed-size pagination with out-of-range pages clamped
//! - Two-way sync between the query and a shareable URL query string
//! - Per-reader likes and bookmarks persisted to a JSON file

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  CLI shell (main.rs)                                │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← ListView controller
//! │  - Event handling                                   │
//! │  - Action dispatching                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ Query (query/)│   │ Storage       │   │ UI (ui/)      │
//! │ - Filter/sort │   │ (storage/)    │   │ - Rendering   │
//! │ - Pagination  │   │ - Record store│   │ - Theming     │
//! │ - URL codec   │   │ - Likes/saves │   │ - Components  │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Platform paths (infrastructure/)                 │
//! │  - Error types (domain/error)                       │
//! │  - Post model (domain/record)                       │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - tracing + OpenTelemetry, OTLP JSON file export   │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: The list view controller with its event/action model
//! - [`domain`]: Post model and errors
//! - [`query`]: Filtering, sorting, pagination, and the URL codec
//! - [`storage`]: Record store and interaction persistence
//! - [`ui`]: View models, text renderer, themes
//! - [`infrastructure`]: Platform paths
//! - [`observability`]: Tracing setup
//!
//! # Configuration
//!
//! Settings come from an optional TOML file, overridden by CLI flags:
//!
//! ```toml
//! # ~/.config/folio/config.toml
//! data_file = "~/blog/posts.json"
//! page_size = 6
//! site_origin = "https://ashish.dev"
//! theme = "folio-light"
//! trace_level = "debug"
//! ```
//!
//! # Example
//!
//! ```rust
//! use folio::{handle_event, initialize, Action, Config, Event, SortKey};
//!
//! let mut view = initialize(&Config::default())?;
//!
//! let (_, actions) = handle_event(&mut view, &Event::SetSort(SortKey::Popular))?;
//! assert_eq!(actions, vec![Action::ReplaceUrl("/blog?sort=popular".to_string())]);
//!
//! let derived = view.derived();
//! let ids: Vec<u64> = derived.page_slice().iter().map(|r| r.id).collect();
//! assert_eq!(ids[0], 3);
//! # Ok::<(), folio::FolioError>(())
//! ```
//!
//! # Key Design Decisions
//!
//! ## Derived, Never Stored
//!
//! The matched list, page count, and current slice are recomputed from the
//! query state on every read. There is no cache to invalidate, so the view can
//! never disagree with the URL.
//!
//! ## Replace, Never Push
//!
//! Every state change emits `Action::ReplaceUrl`; URLs flow back into state only
//! through `Event::Navigate`, which models a fresh load or an edited address.

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod query;
pub mod storage;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, Event, ListView, Notification, ViewSettings};
pub use domain::{ContentRecord, FolioError, Result};
pub use query::{CategoryFilter, QueryState, SortKey};
pub use ui::Theme;

use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use url::Url;

/// Origin used for share links when none is configured.
pub const DEFAULT_SITE_ORIGIN: &str = "https://folio.local";

/// Runtime configuration, loaded from TOML.
///
/// Every key is optional; unknown keys are rejected so typos surface early.
///
/// # Example
///
/// ```rust
/// use folio::Config;
///
/// let config = Config::from_toml_str("page_size = 4\ntheme = \"folio-light\"")?;
/// assert_eq!(config.page_size()?.get(), 4);
/// assert!(Config::from_toml_str("pagesize = 4").is_err());
/// # Ok::<(), folio::FolioError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// JSON array of posts. The bundled sample is used when unset.
    pub data_file: Option<String>,

    /// Where likes and bookmarks are kept.
    ///
    /// Default: `<data_dir>/interactions.json`
    pub interactions_file: Option<String>,

    /// Posts per page, must be positive. Default: 6
    pub page_size: usize,

    /// Origin for share links, without a path. Default: [`DEFAULT_SITE_ORIGIN`]
    pub site_origin: String,

    /// Built-in theme name (`folio-dark`, `folio-light`). Ignored if
    /// `theme_file` is set.
    pub theme: Option<String>,

    /// Path to a custom TOML theme. See [`ui::theme`] for the format.
    pub theme_file: Option<String>,

    /// Tracing level (`trace`, `debug`, `info`, `warn`, `error`).
    ///
    /// `RUST_LOG` takes precedence. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: None,
            interactions_file: None,
            page_size: query::DEFAULT_PAGE_SIZE.get(),
            site_origin: DEFAULT_SITE_ORIGIN.to_string(),
            theme: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::Toml`] for syntax errors and unknown keys, and
    /// [`FolioError::Config`] for out-of-range values.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and validates a TOML config file.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::Config`] if the file cannot be read, otherwise as
    /// [`Config::from_toml_str`].
    pub fn from_file(path: &Path) -> Result<Self> {
        let _span = tracing::debug_span!("load_config", path = %path.display()).entered();

        let contents = std::fs::read_to_string(path).map_err(|e| {
            FolioError::Config(format!("cannot read {}: {e}", path.display()))
        })?;
        let config = Self::from_toml_str(&contents)?;

        tracing::debug!(config = ?config, "config loaded");
        Ok(config)
    }

    /// The default config file location, `<config_dir>/folio/config.toml`.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("folio").join("config.toml"))
    }

    /// Checks value ranges that serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::Config`] for a zero page size or a site origin
    /// that is not an absolute http(s) URL.
    pub fn validate(&self) -> Result<()> {
        self.page_size()?;
        self.site_origin()?;
        Ok(())
    }

    /// Page size as a non-zero count.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::Config`] if `page_size` is zero.
    pub fn page_size(&self) -> Result<NonZeroUsize> {
        NonZeroUsize::new(self.page_size)
            .ok_or_else(|| FolioError::Config("page_size must be at least 1".to_string()))
    }

    /// Parsed site origin.
    ///
    /// Share links are built as `<origin>/blog/<id>`, so the origin may not carry
    /// a path, query, or fragment. A trailing `/` is fine.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::Config`] unless the origin is a bare http(s) URL.
    pub fn site_origin(&self) -> Result<Url> {
        let url = Url::parse(&self.site_origin)
            .map_err(|e| FolioError::Config(format!("site_origin {:?}: {e}", self.site_origin)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(FolioError::Config(format!(
                "site_origin must use http or https, got {:?}",
                self.site_origin
            )));
        }
        if url.path() != "/" || url.query().is_some() || url.fragment().is_some() {
            return Err(FolioError::Config(format!(
                "site_origin must be a bare origin such as https://example.dev, got {:?}",
                self.site_origin
            )));
        }
        Ok(url)
    }

    /// Resolved interaction store path under `data_dir` unless configured.
    #[must_use]
    pub fn interactions_path(&self, data_dir: &Path) -> PathBuf {
        self.interactions_file.as_deref().map_or_else(
            || data_dir.join("interactions.json"),
            infrastructure::expand_tilde,
        )
    }

    /// Loads the configured theme.
    ///
    /// `theme_file` wins over `theme`. A theme that cannot be loaded is logged
    /// and replaced by the default so a bad palette never blocks a listing.
    #[must_use]
    pub fn load_theme(&self) -> Theme {
        if let Some(theme_file) = &self.theme_file {
            return Theme::from_file(infrastructure::expand_tilde(theme_file)).unwrap_or_else(|e| {
                tracing::warn!(theme_file = %theme_file, error = %e, "failed to load theme file, using default");
                Theme::default()
            });
        }

        self.theme.as_ref().map_or_else(Theme::default, |name| {
            Theme::from_name(name).unwrap_or_else(|| {
                tracing::warn!(
                    theme = %name,
                    available = ?Theme::builtin_names(),
                    "unknown theme, using default"
                );
                Theme::default()
            })
        })
    }
}

/// Builds a [`ListView`] from configuration.
///
/// Loads the record store (the configured file or the bundled sample), the
/// theme, and the view settings. Interactions start empty; the caller loads
/// them from its [`InteractionStore`](storage::InteractionStore).
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the record file cannot
/// be loaded.
pub fn initialize(config: &Config) -> Result<ListView> {
    let _span = tracing::debug_span!("initialize").entered();

    config.validate()?;

    let store = match &config.data_file {
        Some(path) => storage::RecordStore::from_file(&infrastructure::expand_tilde(path))?,
        None => {
            tracing::debug!("no data file configured, using bundled sample");
            storage::RecordStore::sample()?
        }
    };

    let settings = ViewSettings {
        page_size: config.page_size()?,
        site_origin: config.site_origin()?,
        theme: config.load_theme(),
        color: true,
    };

    tracing::debug!(
        records = store.len(),
        page_size = settings.page_size.get(),
        theme = %settings.theme.name,
        "list view initialized"
    );
    Ok(ListView::new(store, settings))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_keys_absent() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.page_size().unwrap().get(), 6);
    }

    #[test]
    fn zero_page_size_is_config_error() {
        let err = Config::from_toml_str("page_size = 0").unwrap_err();
        assert!(matches!(err, FolioError::Config(_)));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = Config::from_toml_str("scan_depth = 4").unwrap_err();
        assert!(matches!(err, FolioError::Toml(_)));
    }

    #[test]
    fn non_http_origin_is_rejected() {
        let err = Config::from_toml_str("site_origin = \"ftp://example.dev\"").unwrap_err();
        assert!(matches!(err, FolioError::Config(_)));
    }

    #[test]
    fn origin_with_path_is_rejected() {
        let err = Config::from_toml_str("site_origin = \"https://host.dev/portfolio/\"").unwrap_err();
        assert!(matches!(err, FolioError::Config(_)));
        assert!(Config::from_toml_str("site_origin = \"https://host.dev/?ref=x\"").is_err());

        let config = Config::from_toml_str("site_origin = \"https://host.dev/\"").unwrap();
        assert_eq!(config.site_origin().unwrap().as_str(), "https://host.dev/");
    }

    #[test]
    fn interactions_path_defaults_under_data_dir() {
        let config = Config::default();
        assert_eq!(
            config.interactions_path(Path::new("/data/folio")),
            PathBuf::from("/data/folio/interactions.json")
        );
    }

    #[test]
    fn unknown_theme_falls_back_to_default() {
        let config = Config {
            theme: Some("solarized".to_string()),
            ..Config::default()
        };
        assert_eq!(config.load_theme(), Theme::default());

        let config = Config {
            theme: Some("folio-light".to_string()),
            ..Config::default()
        };
        assert_eq!(config.load_theme().name, "folio-light");
    }

    #[test]
    fn initialize_uses_sample_and_page_size() {
        let config = Config {
            page_size: 4,
            ..Config::default()
        };
        let view = initialize(&config).unwrap();
        assert_eq!(view.store.len(), 6);
        assert_eq!(view.derived().total_pages, 2);
    }
}
