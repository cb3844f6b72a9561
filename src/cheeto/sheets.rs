//! # Sheet Discovery & Name Resolution
//!
//! [`Sheets`] is the resolved, read-only collection of every cheatsheet under a
//! root directory, keyed by a unique [`SheetName`] and iterated in name order.
//!
//! ## Discovery
//!
//! Two policies are available through [`DiscoveryMode`]:
//!
//! - **Recursive** (default): walks the whole tree. A file is a sheet when its
//!   dot-separated filename contains the literal segment `cheatsheet`
//!   (`git.cheatsheet`, `docker.cheatsheet.md`).
//! - **Flat**: every regular file directly inside the root is a sheet.
//!
//! Both walks visit entries sorted by filename, so results are deterministic.
//! Hidden entries (leading `.`) are skipped. Symlinks to files are followed;
//! symlinks to directories are not descended into. A symlink that cannot be
//! resolved, or a directory that cannot be read, aborts discovery with the
//! underlying I/O error: nothing is skipped silently.
//!
//! ## Collisions
//!
//! Sheets are grouped by their raw name (see [`crate::sheet::name_of`]). A sheet
//! alone in its group keeps its raw name. When several sheets share a raw name,
//! each of them is renamed after its directory relative to the group's longest
//! common parent directory:
//!
//! ```text
//! lang/python.cheatsheet   ->  lang/python
//! tools/python.cheatsheet  ->  tools/python
//! git.cheatsheet           ->  git           (not part of the collision)
//! ```
//!
//! If that still leaves two sheets under the same name (e.g. `foo.cheatsheet` and
//! `foo.cheatsheet.md` side by side), building the collection fails with
//! [`CheetoError::NameClash`]; no partial collection is returned.

use crate::error::{CheetoError, Result};
use crate::paths::{common_path_prefix, expand_home};
use crate::sheet::{has_sheet_marker, Sheet, SheetName};
use serde::{Deserialize, Serialize};
use std::collections::btree_map::{self, BTreeMap};
use std::fs::{self, DirEntry};
use std::path::Path;
use tracing::debug;

/// How candidate sheet files are found under the root directory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscoveryMode {
    #[default]
    Recursive,
    Flat,
}

impl DiscoveryMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiscoveryMode::Recursive => "recursive",
            DiscoveryMode::Flat => "flat",
        }
    }
}

impl std::str::FromStr for DiscoveryMode {
    type Err = CheetoError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "recursive" => Ok(DiscoveryMode::Recursive),
            "flat" => Ok(DiscoveryMode::Flat),
            other => Err(CheetoError::Config(format!(
                "Unknown discovery mode '{}' (expected 'recursive' or 'flat')",
                other
            ))),
        }
    }
}

/// Finds every candidate sheet under `root`, in walk order.
pub fn find_sheets_at(root: &Path, mode: DiscoveryMode) -> Result<Vec<Sheet>> {
    let root = expand_home(root);
    let mut found = Vec::new();
    match mode {
        DiscoveryMode::Recursive => walk(&root, &mut found)?,
        DiscoveryMode::Flat => list_flat(&root, &mut found)?,
    }
    debug!(root = %root.display(), count = found.len(), "discovered sheets");
    Ok(found)
}

fn walk(dir: &Path, found: &mut Vec<Sheet>) -> Result<()> {
    for entry in sorted_entries(dir)? {
        let filename = entry.file_name().to_string_lossy().into_owned();
        if is_hidden(&filename) {
            continue;
        }

        let path = entry.path();
        let file_type = entry.file_type()?;
        if file_type.is_dir() {
            walk(&path, found)?;
        } else if has_sheet_marker(&filename) && resolves_to_file(&entry)? {
            debug!(path = %path.display(), "found sheet");
            found.push(Sheet::new(path));
        }
    }
    Ok(())
}

fn list_flat(dir: &Path, found: &mut Vec<Sheet>) -> Result<()> {
    for entry in sorted_entries(dir)? {
        if is_hidden(&entry.file_name().to_string_lossy()) {
            continue;
        }
        if resolves_to_file(&entry)? {
            found.push(Sheet::new(entry.path()));
        }
    }
    Ok(())
}

fn sorted_entries(dir: &Path) -> Result<Vec<DirEntry>> {
    let mut entries = fs::read_dir(dir)?.collect::<std::io::Result<Vec<_>>>()?;
    entries.sort_by_key(|entry| entry.file_name());
    Ok(entries)
}

/// Regular files, and symlinks whose target is a regular file.
fn resolves_to_file(entry: &DirEntry) -> Result<bool> {
    let file_type = entry.file_type()?;
    if file_type.is_symlink() {
        let target = fs::metadata(entry.path())?;
        if target.is_dir() {
            debug!(path = %entry.path().display(), "not following symlinked directory");
        }
        return Ok(target.is_file());
    }
    Ok(file_type.is_file())
}

fn is_hidden(filename: &str) -> bool {
    filename.starts_with('.')
}

/// The resolved, collision-free mapping from sheet name to sheet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sheets {
    sheets: BTreeMap<SheetName, Sheet>,
}

impl Sheets {
    /// Resolves names for an arbitrary set of sheets.
    pub fn of<I: IntoIterator<Item = Sheet>>(sheets: I) -> Result<Self> {
        let mut groups: BTreeMap<SheetName, Vec<Sheet>> = BTreeMap::new();
        for sheet in sheets {
            groups.entry(sheet.name()).or_default().push(sheet);
        }

        let mut resolved = BTreeMap::new();
        for (name, mut group) in groups {
            if group.len() == 1 {
                if let Some(sheet) = group.pop() {
                    insert_unique(&mut resolved, name, sheet)?;
                }
                continue;
            }

            let prefix = common_path_prefix(group.iter().map(|sheet| parent_of(sheet.path())));
            debug!(
                name = %name,
                count = group.len(),
                prefix = %prefix.display(),
                "disambiguating sheet names"
            );
            for sheet in group {
                let disambiguated = disambiguated_name(&sheet, &prefix);
                debug!(from = %name, to = %disambiguated, "renamed sheet");
                insert_unique(&mut resolved, disambiguated, sheet)?;
            }
        }

        Ok(Self { sheets: resolved })
    }

    /// Discovers and resolves every sheet under `root` recursively.
    pub fn at(root: &Path) -> Result<Self> {
        Self::at_with(root, DiscoveryMode::default())
    }

    pub fn at_with(root: &Path, mode: DiscoveryMode) -> Result<Self> {
        Self::of(find_sheets_at(root, mode)?)
    }

    /// Builds the collection under `root` and looks up `name` exactly.
    pub fn named_sheet_at(name: &str, root: &Path) -> Result<Sheet> {
        Self::named_sheet_at_with(name, root, DiscoveryMode::default())
    }

    pub fn named_sheet_at_with(name: &str, root: &Path, mode: DiscoveryMode) -> Result<Sheet> {
        Self::at_with(root, mode)?
            .get(name)
            .cloned()
            .ok_or_else(|| CheetoError::SheetNotFound {
                name: name.to_string(),
                root: root.to_path_buf(),
            })
    }

    pub fn get(&self, name: &str) -> Option<&Sheet> {
        self.sheets.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.sheets.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &SheetName> {
        self.sheets.keys()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, SheetName, Sheet> {
        self.sheets.iter()
    }
}

impl<'a> IntoIterator for &'a Sheets {
    type Item = (&'a SheetName, &'a Sheet);
    type IntoIter = btree_map::Iter<'a, SheetName, Sheet>;

    fn into_iter(self) -> Self::IntoIter {
        self.sheets.iter()
    }
}

fn insert_unique(
    resolved: &mut BTreeMap<SheetName, Sheet>,
    name: SheetName,
    sheet: Sheet,
) -> Result<()> {
    match resolved.entry(name) {
        btree_map::Entry::Occupied(existing) => Err(CheetoError::NameClash {
            name: existing.key().to_string(),
            first: existing.get().path().to_path_buf(),
            second: sheet.path().to_path_buf(),
        }),
        btree_map::Entry::Vacant(slot) => {
            slot.insert(sheet);
            Ok(())
        }
    }
}

fn parent_of(path: &Path) -> &Path {
    path.parent().unwrap_or_else(|| Path::new(""))
}

/// `<parent relative to prefix>/<stem>`, joined with `/` on every platform.
fn disambiguated_name(sheet: &Sheet, prefix: &Path) -> SheetName {
    let parent = parent_of(sheet.path());
    let relative = parent.strip_prefix(prefix).unwrap_or(parent);

    let mut segments: Vec<String> = relative
        .components()
        .map(|component| component.as_os_str().to_string_lossy().into_owned())
        .collect();
    segments.push(
        sheet
            .path()
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default(),
    );

    SheetName::normalize(&segments.join("/"))
}
