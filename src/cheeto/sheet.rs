//! # Sheets
//!
//! A [`Sheet`] is a lightweight, immutable view over one cheatsheet file. It owns
//! nothing but its path: every other property is derived on demand, and the file
//! content is re-read each time it is needed.
//!
//! ## Naming
//!
//! A sheet's [`SheetName`] is derived from its filename alone, never from its
//! content. The file stem (filename minus its last extension) is taken and a
//! trailing `.cheatsheet` marker is removed:
//!
//! | Filename               | Name            |
//! |------------------------|-----------------|
//! | `git.cheatsheet`       | `git`           |
//! | `git.cheatsheet.md`    | `git`           |
//! | `vim.md`               | `vim`           |
//! | `a.cheatsheet.b.txt`   | `a.cheatsheet.b`|
//!
//! Names may be lengthened with directory segments when two sheets collide;
//! see [`crate::sheets`].

use crate::error::Result;
use crate::paths::abbreviate_home;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// The marker segment that identifies a cheatsheet file (`foo.cheatsheet.md`).
pub const SHEET_MARKER: &str = "cheatsheet";

const SHEET_SUFFIX: &str = ".cheatsheet";
const HEADING_MARKER: &str = "# ";
const MARKDOWN_EXTENSIONS: &[&str] = &["md", "markdown"];

/// The unique key a sheet is listed and looked up under.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SheetName(String);

impl SheetName {
    /// Builds a name from a raw string, stripping a trailing `.cheatsheet`.
    pub fn normalize(raw: &str) -> Self {
        Self(raw.strip_suffix(SHEET_SUFFIX).unwrap_or(raw).to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SheetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SheetName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for SheetName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SheetName {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for SheetName {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Derives the raw sheet name for `path`. Pure: never touches the filesystem.
pub fn name_of(path: &Path) -> SheetName {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy())
        .unwrap_or_default();
    SheetName::normalize(&stem)
}

/// Returns true when the dot-separated filename contains the `cheatsheet` marker.
pub fn has_sheet_marker(filename: &str) -> bool {
    filename.split('.').any(|segment| segment == SHEET_MARKER)
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Sheet {
    path: PathBuf,
}

impl Sheet {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The path for display, with the home directory abbreviated to `~`.
    pub fn display_path(&self) -> PathBuf {
        abbreviate_home(&self.path)
    }

    pub fn filename(&self) -> String {
        self.path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    pub fn name(&self) -> SheetName {
        name_of(&self.path)
    }

    /// Reads the full sheet content. Not cached: every call hits the filesystem.
    pub fn text(&self) -> Result<String> {
        Ok(fs::read_to_string(&self.path)?)
    }

    /// Byte length of the sheet content.
    pub fn len(&self) -> Result<usize> {
        Ok(self.text()?.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    pub fn title(&self) -> Result<String> {
        let text = self.text()?;
        Ok(title_from(&text).unwrap_or_else(|| self.name().to_string()))
    }

    pub fn probably_markdown(&self) -> Result<bool> {
        if self.has_markdown_extension() {
            return Ok(true);
        }
        let text = self.text()?;
        Ok(first_non_empty_line(&text).is_some_and(|line| line.starts_with(HEADING_MARKER)))
    }

    fn has_markdown_extension(&self) -> bool {
        self.path
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .is_some_and(|ext| MARKDOWN_EXTENSIONS.contains(&ext.as_str()))
    }
}

fn first_non_empty_line(text: &str) -> Option<&str> {
    text.lines().map(str::trim).find(|line| !line.is_empty())
}

/// Title derived from content: first non-blank line with a level-1 heading
/// marker removed. `None` when there is nothing usable.
fn title_from(text: &str) -> Option<String> {
    let first = first_non_empty_line(text)?;
    let title = first.strip_prefix(HEADING_MARKER).unwrap_or(first);
    if title.is_empty() {
        None
    } else {
        Some(title.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CheetoError;
    use tempfile::TempDir;

    fn write_sheet(dir: &TempDir, filename: &str, content: &str) -> Sheet {
        let path = dir.path().join(filename);
        fs::write(&path, content).unwrap();
        Sheet::new(path)
    }

    #[test]
    fn test_name_of_strips_marker() {
        assert_eq!(name_of(Path::new("/s/git.cheatsheet")).as_str(), "git");
        assert_eq!(name_of(Path::new("/s/git.cheatsheet.md")).as_str(), "git");
        assert_eq!(name_of(Path::new("/s/vim.md")).as_str(), "vim");
        assert_eq!(name_of(Path::new("/s/plain")).as_str(), "plain");
    }

    #[test]
    fn test_name_of_only_strips_trailing_marker() {
        assert_eq!(
            name_of(Path::new("/s/a.cheatsheet.b.txt")).as_str(),
            "a.cheatsheet.b"
        );
        assert_eq!(name_of(Path::new("/s/cheatsheet.md")).as_str(), "cheatsheet");
    }

    #[test]
    fn test_has_sheet_marker() {
        assert!(has_sheet_marker("git.cheatsheet"));
        assert!(has_sheet_marker("notes.cheatsheet.md"));
        assert!(has_sheet_marker("cheatsheet"));
        assert!(!has_sheet_marker("cheatsheets.md"));
        assert!(!has_sheet_marker("my-cheatsheet.md"));
    }

    #[test]
    fn test_filename() {
        let sheet = Sheet::new("/sheets/lang/python.cheatsheet.md");
        assert_eq!(sheet.filename(), "python.cheatsheet.md");
    }

    #[test]
    fn test_title_from_heading() {
        let dir = TempDir::new().unwrap();
        let sheet = write_sheet(&dir, "t.cheatsheet", "# My Title\n\nbody\n");
        assert_eq!(sheet.title().unwrap(), "My Title");
    }

    #[test]
    fn test_title_of_empty_file_is_name() {
        let dir = TempDir::new().unwrap();
        let sheet = write_sheet(&dir, "empty.cheatsheet", "");
        assert_eq!(sheet.title().unwrap(), "empty");
    }

    #[test]
    fn test_title_skips_blank_lines() {
        let dir = TempDir::new().unwrap();
        let sheet = write_sheet(&dir, "t.cheatsheet", "\n   \n  First real line  \nmore\n");
        assert_eq!(sheet.title().unwrap(), "First real line");
    }

    #[test]
    fn test_title_heading_marker_edge_cases() {
        let dir = TempDir::new().unwrap();
        let sheet = write_sheet(&dir, "bare.cheatsheet", "#  \nbody");
        // "#" alone after trimming has no "# " prefix, so it is used verbatim.
        assert_eq!(sheet.title().unwrap(), "#");

        let sheet = write_sheet(&dir, "spaced.cheatsheet", "#   .\n");
        assert_eq!(sheet.title().unwrap(), "  .");
    }

    #[test]
    fn test_title_keeps_deeper_headings() {
        let dir = TempDir::new().unwrap();
        let sheet = write_sheet(&dir, "t.cheatsheet", "## Section\n");
        assert_eq!(sheet.title().unwrap(), "## Section");
    }

    #[test]
    fn test_markdown_by_extension() {
        let dir = TempDir::new().unwrap();
        let sheet = write_sheet(&dir, "a.cheatsheet.md", "no heading here");
        assert!(sheet.probably_markdown().unwrap());

        let sheet = write_sheet(&dir, "b.cheatsheet.MARKDOWN", "");
        assert!(sheet.probably_markdown().unwrap());
    }

    #[test]
    fn test_markdown_by_heading() {
        let dir = TempDir::new().unwrap();
        let sheet = write_sheet(&dir, "a.cheatsheet.txt", "\n# Heading\ntext");
        assert!(sheet.probably_markdown().unwrap());
    }

    #[test]
    fn test_not_markdown() {
        let dir = TempDir::new().unwrap();
        let sheet = write_sheet(&dir, "a.cheatsheet.txt", "just some notes\n# later");
        assert!(!sheet.probably_markdown().unwrap());
    }

    #[test]
    fn test_text_is_not_cached() {
        let dir = TempDir::new().unwrap();
        let sheet = write_sheet(&dir, "a.cheatsheet", "one");
        assert_eq!(sheet.text().unwrap(), "one");
        fs::write(sheet.path(), "two").unwrap();
        assert_eq!(sheet.text().unwrap(), "two");
        assert_eq!(sheet.len().unwrap(), 3);
    }

    #[test]
    fn test_text_missing_file_is_io_error() {
        let sheet = Sheet::new("/definitely/not/here.cheatsheet");
        assert!(matches!(sheet.text(), Err(CheetoError::Io(_))));
        assert!(matches!(sheet.title(), Err(CheetoError::Io(_))));
    }

    #[test]
    fn test_text_invalid_utf8_is_io_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bin.cheatsheet");
        fs::write(&path, [0xff, 0xfe, 0x00, 0xc3]).unwrap();
        let sheet = Sheet::new(path);
        assert!(matches!(sheet.text(), Err(CheetoError::Io(_))));
    }
}
