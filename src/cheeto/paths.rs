//! # Path Utilities
//!
//! Small helpers shared by discovery, configuration and the markdown renderers:
//!
//! - `~` expansion and abbreviation. Sheets are found under real paths, but paths
//!   shown to the user are abbreviated back to `~/...` when they live under home.
//! - [`common_path_prefix`], used to disambiguate colliding sheet names.
//! - `PATH` lookup for external renderers, through the `which` crate.
//! - XDG-aware user directories. `XDG_DATA_HOME` / `XDG_CONFIG_HOME` win when
//!   set, otherwise the OS defaults from the `directories` crate are used.

use directories::{BaseDirs, ProjectDirs};
use std::env;
use std::ffi::OsString;
use std::path::{Component, Path, PathBuf};

pub const APP_NAME: &str = "cheeto";

const HOME_MARKER: &str = "~";

/// The current user's home directory, if one can be determined.
pub fn home_dir() -> Option<PathBuf> {
    BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf())
}

/// Expands a leading `~` segment into the current user's home directory.
///
/// Paths without a leading `~` (and every path when no home directory can be
/// found) are returned unchanged.
pub fn expand_home(path: &Path) -> PathBuf {
    match home_dir() {
        Some(home) => expand_home_with(path, &home),
        None => path.to_path_buf(),
    }
}

pub fn expand_home_with(path: &Path, home: &Path) -> PathBuf {
    match path.strip_prefix(HOME_MARKER) {
        Ok(rest) if rest.as_os_str().is_empty() => home.to_path_buf(),
        Ok(rest) => home.join(rest),
        Err(_) => path.to_path_buf(),
    }
}

/// Inverse of [`expand_home`]: replaces the home directory prefix with `~`.
pub fn abbreviate_home(path: &Path) -> PathBuf {
    match home_dir() {
        Some(home) => abbreviate_home_with(path, &home),
        None => path.to_path_buf(),
    }
}

pub fn abbreviate_home_with(path: &Path, home: &Path) -> PathBuf {
    match path.strip_prefix(home) {
        Ok(rest) if rest.as_os_str().is_empty() => PathBuf::from(HOME_MARKER),
        Ok(rest) => Path::new(HOME_MARKER).join(rest),
        Err(_) => path.to_path_buf(),
    }
}

/// Longest path that is an ancestor-or-self of every input, compared
/// component by component. Returns an empty path for no input or no overlap.
pub fn common_path_prefix<'a, I>(paths: I) -> PathBuf
where
    I: IntoIterator<Item = &'a Path>,
{
    let mut iter = paths.into_iter();
    let Some(first) = iter.next() else {
        return PathBuf::new();
    };

    let mut prefix: Vec<Component<'a>> = first.components().collect();
    for path in iter {
        let shared = prefix
            .iter()
            .zip(path.components())
            .take_while(|(a, b)| *a == b)
            .count();
        prefix.truncate(shared);
    }

    prefix.iter().collect()
}

/// True when an executable called `name` can be found on `PATH`.
pub fn is_executable_in_path(name: &str) -> bool {
    which::which(name).is_ok()
}

/// Per-user data directory for `app`, honouring `XDG_DATA_HOME`.
pub fn user_data_path(app: &str) -> Option<PathBuf> {
    xdg_or_default(env::var_os("XDG_DATA_HOME"), app, |dirs| {
        dirs.data_dir().to_path_buf()
    })
}

/// Per-user config directory for `app`, honouring `XDG_CONFIG_HOME`.
pub fn user_config_path(app: &str) -> Option<PathBuf> {
    xdg_or_default(env::var_os("XDG_CONFIG_HOME"), app, |dirs| {
        dirs.config_dir().to_path_buf()
    })
}

fn xdg_or_default(
    xdg_value: Option<OsString>,
    app: &str,
    fallback: impl FnOnce(&ProjectDirs) -> PathBuf,
) -> Option<PathBuf> {
    match xdg_value {
        Some(value) if !value.is_empty() => Some(expand_home(Path::new(&value)).join(app)),
        _ => ProjectDirs::from("", "", app).map(|dirs| fallback(&dirs)),
    }
}
