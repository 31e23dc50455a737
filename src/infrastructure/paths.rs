//! Locations on disk: the data directory for trace output and `~` expansion
//! for paths given in configuration.
//!
//! The environment is read only by the public functions; the resolution rules
//! live in pure helpers so they can be tested without touching process state.

use std::env;
use std::path::PathBuf;

const APP_DIR: &str = "dirbrowse";

/// Returns the directory that holds the trace file.
///
/// `$XDG_DATA_HOME/dirbrowse` when set, else `$HOME/.local/share/dirbrowse`,
/// else a `dirbrowse` folder under the system temp directory.
#[must_use]
pub fn data_dir() -> PathBuf {
    resolve_data_dir(
        env::var_os("XDG_DATA_HOME").map(PathBuf::from),
        env::var_os("HOME").map(PathBuf::from),
    )
}

fn resolve_data_dir(xdg_data_home: Option<PathBuf>, home: Option<PathBuf>) -> PathBuf {
    if let Some(xdg) = xdg_data_home.filter(|p| p.is_absolute()) {
        return xdg.join(APP_DIR);
    }
    home.map_or_else(
        || env::temp_dir().join(APP_DIR),
        |home| home.join(".local").join("share").join(APP_DIR),
    )
}

/// Expands a leading `~` to the user's home directory.
///
/// Paths without a leading `~`, and every path when `HOME` is unset, are
/// returned unchanged.
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    expand_with_home(path, env::var_os("HOME").map(PathBuf::from))
}

fn expand_with_home(path: &str, home: Option<PathBuf>) -> PathBuf {
    let Some(home) = home else {
        return PathBuf::from(path);
    };

    if path == "~" {
        home
    } else if let Some(rest) = path.strip_prefix("~/") {
        home.join(rest)
    } else {
        PathBuf::from(path)
    }
}
