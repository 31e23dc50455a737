//! dirbrowse: a terminal browser for a remote user directory.
//!
//! dirbrowse fetches a list of users over HTTP and lets you:
//! - Filter them by a case-insensitive substring of name or email
//! - Page through the matches, with compacted page numbers
//! - See every match highlighted in place
//! - Retry or refresh the fetch, with only the latest request ever applied

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Terminal event loop (main.rs)                      │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling, deferred query                   │
//! │  - Action dispatching                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Directory     │   │ Worker Layer  │
//! │ (ui/)         │   │ (directory/)  │   │ (worker/)     │
//! │ - Rendering   │   │ - Filter      │   │ - Single-     │
//! │ - Theming     │   │ - Paginate    │   │   flight fetch│
//! │ - Components  │   │ - Highlight   │   │ - Prefetch    │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                                                  │
//! ┌─────────────────────────────────────────────────────┐
//! │  Source (source/), Domain (domain/),                │
//! │  Infrastructure (infrastructure/)                   │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - OpenTelemetry tracing to a local OTLP JSON file  │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! Options come from built-in defaults, then an optional TOML file, then
//! `key=value` command-line arguments, later sources winning:
//!
//! ```text
//! dirbrowse config=~/.config/dirbrowse.toml page_size=10 theme=catppuccin-latte
//! ```
//!
//! | key           | default                                      |
//! |---------------|----------------------------------------------|
//! | `endpoint`    | `https://jsonplaceholder.typicode.com/users` |
//! | `page_size`   | `5`                                          |
//! | `debounce_ms` | `150`                                        |
//! | `prefetch`    | `false`                                      |
//! | `theme`       | `catppuccin-mocha`                           |
//! | `theme_file`  | none                                         |
//! | `trace_level` | `info`                                       |
//!
//! # Example
//!
//! ```rust
//! use dirbrowse::{handle_event, initialize, Action, Config, Event};
//! use dirbrowse::domain::InitialSnapshot;
//!
//! let mut state = initialize(&Config::default(), InitialSnapshot::default());
//! let (_, actions) = handle_event(&mut state, &Event::Mount);
//! assert_eq!(actions, vec![Action::Fetch]);
//! ```

pub mod app;
pub mod directory;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod source;
pub mod ui;
pub mod worker;

pub use app::{handle_event, Action, AppState, Event, InputMode, Screen};
pub use domain::{DirectoryError, InitialSnapshot, Result, User};
pub use ui::Theme;

use crate::directory::DEFAULT_PAGE_SIZE;
use crate::source::DEFAULT_ENDPOINT;
use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;

/// Default delay between the last keystroke and the query commit.
pub const DEFAULT_DEBOUNCE_MS: u64 = 150;

/// Runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// URL answering `GET` with a JSON array of users.
    pub endpoint: String,

    /// Users per page, at least 1.
    pub page_size: usize,

    /// Debounce interval for the search query, in milliseconds.
    pub debounce_ms: u64,

    /// Fetch once before the UI starts and hand the result in as the
    /// initial snapshot.
    pub prefetch: bool,

    /// Name of a built-in theme.
    pub theme_name: Option<String>,

    /// Path to a TOML theme; takes precedence over `theme_name`.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive for the trace file.
    pub trace_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            prefetch: false,
            theme_name: None,
            theme_file: None,
            trace_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Builds a configuration from string options over the defaults.
    ///
    /// Unparseable numbers and a zero page size keep their defaults; unknown
    /// keys are ignored.
    ///
    /// ```rust
    /// use dirbrowse::Config;
    /// use std::collections::BTreeMap;
    ///
    /// let options = BTreeMap::from([("page_size".to_string(), "10".to_string())]);
    /// assert_eq!(Config::from_map(&options).page_size, 10);
    /// ```
    #[must_use]
    pub fn from_map(options: &BTreeMap<String, String>) -> Self {
        let mut config = Self::default();
        config.apply(options);
        config
    }

    /// Overlays `options` onto `self`.
    pub fn apply(&mut self, options: &BTreeMap<String, String>) {
        for (key, value) in options {
            let value = value.trim();
            match key.as_str() {
                "endpoint" if !value.is_empty() => self.endpoint = value.to_string(),
                "page_size" => {
                    self.page_size = value
                        .parse::<usize>()
                        .ok()
                        .filter(|&n| n > 0)
                        .unwrap_or(DEFAULT_PAGE_SIZE);
                }
                "debounce_ms" => {
                    self.debounce_ms = value.parse().unwrap_or(DEFAULT_DEBOUNCE_MS);
                }
                "prefetch" => self.prefetch = matches!(value, "true" | "1" | "yes" | "on"),
                "theme" => self.theme_name = Some(value.to_string()),
                "theme_file" => self.theme_file = Some(value.to_string()),
                "trace_level" => self.trace_level = value.to_string(),
                "config" => {}
                other => tracing::debug!(key = other, "ignoring unknown option"),
            }
        }
    }

    /// Parses a TOML configuration document into string options.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Config`] if the document is not valid TOML or
    /// a value is a table or array.
    pub fn options_from_toml(contents: &str) -> Result<BTreeMap<String, String>> {
        let table: toml::Table =
            toml::from_str(contents).map_err(|e| DirectoryError::Config(format!("invalid TOML: {e}")))?;

        table
            .into_iter()
            .map(|(key, value)| {
                let text = match value {
                    toml::Value::String(s) => s,
                    toml::Value::Integer(i) => i.to_string(),
                    toml::Value::Float(f) => f.to_string(),
                    toml::Value::Boolean(b) => b.to_string(),
                    other => {
                        return Err(DirectoryError::Config(format!(
                            "option `{key}` must be a scalar, got {}",
                            other.type_str()
                        )))
                    }
                };
                Ok((key, text))
            })
            .collect()
    }

    /// Builds the configuration from command-line arguments.
    ///
    /// Each argument is `key=value`. A `config=<path>` argument names a TOML
    /// file applied before the other arguments.
    ///
    /// # Errors
    ///
    /// Fails on an argument without `=`, or if the config file cannot be read
    /// or parsed.
    pub fn from_args<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut options = BTreeMap::new();
        for arg in args {
            let Some((key, value)) = arg.split_once('=') else {
                return Err(DirectoryError::Config(format!("expected key=value, got `{arg}`")));
            };
            options.insert(key.trim().to_string(), value.to_string());
        }

        let mut config = Self::default();
        if let Some(path) = options.get("config") {
            config.apply(&Self::load_file(&infrastructure::expand_tilde(path))?);
        }
        config.apply(&options);
        Ok(config)
    }

    fn load_file(path: &Path) -> Result<BTreeMap<String, String>> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| DirectoryError::Config(format!("cannot read {}: {e}", path.display())))?;
        Self::options_from_toml(&contents)
    }

    #[must_use]
    pub const fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// Resolves the theme: `theme_file`, then `theme_name`, then the default.
    /// A theme that fails to load is logged and replaced by the default.
    #[must_use]
    pub fn theme(&self) -> Theme {
        if let Some(file) = &self.theme_file {
            return Theme::from_file(infrastructure::expand_tilde(file)).unwrap_or_else(|e| {
                tracing::warn!(theme_file = %file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            });
        }

        self.theme_name.as_ref().map_or_else(Theme::default, |name| {
            Theme::from_name(name).unwrap_or_else(|| {
                tracing::warn!(theme_name = %name, "unknown theme, using default");
                Theme::default()
            })
        })
    }
}

/// Creates the application state for `config`, seeded with `initial`.
///
/// Pass [`InitialSnapshot::default()`] when nothing was prefetched; the first
/// [`Event::Mount`] then asks for a fetch.
#[must_use]
pub fn initialize(config: &Config, initial: InitialSnapshot) -> AppState {
    tracing::debug!(
        endpoint = %config.endpoint,
        page_size = config.page_size,
        prefetched = !initial.is_empty(),
        "initializing directory browser"
    );

    AppState::new(initial, config.page_size, config.debounce(), config.theme())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn defaults_match_documented_values() {
        let config = Config::default();
        assert_eq!(config.endpoint, "https://jsonplaceholder.typicode.com/users");
        assert_eq!(config.page_size, 5);
        assert_eq!(config.debounce(), Duration::from_millis(150));
        assert!(!config.prefetch);
        assert_eq!(config.trace_level, "info");
    }

    #[test]
    fn invalid_page_sizes_fall_back_to_default() {
        for raw in ["0", "-3", "many", ""] {
            let options = BTreeMap::from([("page_size".to_string(), raw.to_string())]);
            assert_eq!(Config::from_map(&options).page_size, 5, "page_size={raw}");
        }
    }

    #[test]
    fn arguments_override_the_config_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "page_size = 8\nprefetch = true\ntheme = \"catppuccin-latte\"").expect("write");
        let path = file.path().display().to_string();

        let config =
            Config::from_args(args(&[&format!("config={path}"), "page_size=12"])).expect("config loads");
        assert_eq!(config.page_size, 12);
        assert!(config.prefetch);
        assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));
        assert_eq!(config.theme().name, "catppuccin-latte");
    }

    #[test]
    fn bare_argument_is_rejected() {
        let err = Config::from_args(args(&["verbose"])).expect_err("needs key=value");
        assert!(matches!(err, DirectoryError::Config(_)));
    }

    #[test]
    fn nested_toml_values_are_rejected() {
        let err = Config::options_from_toml("[colors]\nfoo = 1\n").expect_err("table value");
        assert!(err.to_string().contains("colors"));
    }

    #[test]
    fn missing_theme_falls_back_to_default() {
        let config = Config {
            theme_name: Some("no-such-theme".to_string()),
            ..Config::default()
        };
        assert_eq!(config.theme(), Theme::default());

        let config = Config {
            theme_file: Some("/nonexistent/theme.toml".to_string()),
            ..Config::default()
        };
        assert_eq!(config.theme(), Theme::default());
    }

    #[test]
    fn initialize_applies_page_size_and_snapshot() {
        let config = Config {
            page_size: 2,
            ..Config::default()
        };
        let snapshot = InitialSnapshot {
            users: vec![
                User::new(1, "A", "a@x.io", "Acme"),
                User::new(2, "B", "b@x.io", "Acme"),
                User::new(3, "C", "c@x.io", "Acme"),
            ],
            error: None,
        };
        let state = initialize(&config, snapshot);
        assert_eq!(state.total_pages(), 2);
        assert_eq!(state.screen(), Screen::Success);
    }
}
