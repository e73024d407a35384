use crate::entry::{FileEntry, NamePart};
use crate::error::FileSetError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::fs;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, warn};

pub const CONFLICT_SUMMARY: &str = "Conflicts found. No file has been renamed.";
pub const FAILURE_SUMMARY: &str = "Error/s found. Check error.log for info.";

/// What happened to one slot of a rename batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryOutcome {
    /// Renamed on disk; the entry now carries the new name
    Renamed,
    /// Left alone because the proposed name was blank
    Unchanged,
    /// The OS rename failed; the entry is untouched
    Failed,
    /// Not attempted because the batch had name conflicts
    Blocked,
}

/// A single failed OS rename.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameFailure {
    pub error: String,
    pub path: PathBuf,
}

/// Result of [`FileSet::rename`].
///
/// `results` and `outcomes` are aligned with the entries the batch was run
/// against. `results[i]` is the name the file carries after the call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameReport {
    pub results: Vec<String>,
    pub outcomes: Vec<EntryOutcome>,
    pub conflicts: Vec<PathBuf>,
    pub failures: Vec<RenameFailure>,
    pub error_summary: Option<String>,
    pub error_detail: Option<String>,
}

impl RenameReport {
    pub fn has_conflicts(&self) -> bool {
        !self.conflicts.is_empty()
    }

    pub fn renamed_count(&self) -> usize {
        self.count(EntryOutcome::Renamed)
    }

    pub fn failed_count(&self) -> usize {
        self.count(EntryOutcome::Failed)
    }

    /// True when nothing was blocked and nothing failed.
    pub fn is_clean(&self) -> bool {
        self.error_summary.is_none()
    }

    fn count(&self, outcome: EntryOutcome) -> usize {
        self.outcomes.iter().filter(|o| **o == outcome).count()
    }
}

/// Ordered collection of tracked files.
///
/// Order is display order and is what index-based removal and the rename
/// batch are aligned against. No two entries ever share a `full_path`.
///
/// A `FileSet` has no internal synchronisation; share it across threads only
/// behind a `Mutex` or similar.
#[derive(Debug, Clone, Default)]
pub struct FileSet {
    entries: Vec<FileEntry>,
    seen: HashSet<PathBuf>,
}

impl FileSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[FileEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&FileEntry> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FileEntry> {
        self.entries.iter()
    }

    /// Whether `path` (made absolute) is already tracked.
    pub fn contains(&self, path: &Path) -> bool {
        absolutize(path).is_some_and(|p| self.seen.contains(&p))
    }

    /// Current names of every entry, restricted to `part`.
    pub fn names(&self, part: NamePart) -> Vec<String> {
        self.entries
            .iter()
            .map(|entry| entry.part(part).to_string())
            .collect()
    }

    /// Track new files, skipping any path that is already present.
    ///
    /// Relative paths are resolved against the current directory and `..`
    /// segments are folded lexically. Paths do not need to exist. A path
    /// whose file name is not valid UTF-8 is skipped. Returns the absolute
    /// paths that were actually added, in input order.
    pub fn add<I, P>(&mut self, paths: I) -> Vec<PathBuf>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut added = Vec::new();

        for path in paths {
            let path = path.as_ref();
            let Some(absolute) = absolutize(path) else {
                debug!(path = %path.display(), "skipping path that cannot be made absolute");
                continue;
            };
            if absolute.file_name().is_some_and(|name| name.to_str().is_none()) {
                warn!(path = %absolute.display(), "skipping file name that is not valid UTF-8");
                continue;
            }

            if !self.seen.insert(absolute.clone()) {
                continue;
            }

            self.entries.push(FileEntry::from_path(&absolute));
            added.push(absolute);
        }

        debug!(added = added.len(), total = self.entries.len(), "added files");
        added
    }

    /// Drop the entries at `indices`.
    ///
    /// Every index is checked before anything is removed, so a bad index
    /// leaves the set untouched. Repeated indices are removed once. Returns
    /// the removed entries in their original order.
    pub fn remove(&mut self, indices: &[usize]) -> Result<Vec<FileEntry>, FileSetError> {
        let len = self.entries.len();
        if let Some(&index) = indices.iter().find(|&&i| i >= len) {
            return Err(FileSetError::IndexOutOfRange { index, len });
        }

        let unique: BTreeSet<usize> = indices.iter().copied().collect();
        let mut removed = Vec::with_capacity(unique.len());

        for index in unique.into_iter().rev() {
            let entry = self.entries.remove(index);
            self.seen.remove(&entry.full_path);
            removed.push(entry);
        }

        removed.reverse();
        Ok(removed)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.seen.clear();
    }

    /// Rename every entry to the matching name in `proposed`.
    ///
    /// A blank name leaves that entry alone. Before anything is touched, the
    /// proposed paths are checked against a snapshot of every directory the
    /// entries live in; if any target already exists (or two slots propose
    /// the same target), nothing is renamed and the conflicts are reported.
    /// Otherwise each entry is renamed independently and OS failures are
    /// collected without stopping the batch.
    pub fn rename<S: AsRef<str>>(&mut self, proposed: &[S]) -> Result<RenameReport, FileSetError> {
        if proposed.len() != self.entries.len() {
            return Err(FileSetError::LengthMismatch {
                expected: self.entries.len(),
                actual: proposed.len(),
            });
        }

        let names: Vec<&str> = proposed.iter().map(AsRef::as_ref).collect();
        let conflicts = self.find_conflicts(&names);

        if !conflicts.is_empty() {
            warn!(count = conflicts.len(), "rename blocked by name conflicts");
            let detail = std::iter::once("List of files in conflict:".to_string())
                .chain(conflicts.iter().map(|p| p.display().to_string()))
                .collect::<Vec<_>>()
                .join("\n");

            return Ok(RenameReport {
                results: self.entries.iter().map(|e| e.full_name.clone()).collect(),
                outcomes: vec![EntryOutcome::Blocked; self.entries.len()],
                conflicts,
                failures: Vec::new(),
                error_summary: Some(CONFLICT_SUMMARY.to_string()),
                error_detail: Some(detail),
            });
        }

        let mut report = RenameReport::default();

        for (entry, name) in self.entries.iter_mut().zip(&names) {
            if name.is_empty() {
                report.results.push(entry.full_name.clone());
                report.outcomes.push(EntryOutcome::Unchanged);
                continue;
            }

            match rename_entry(entry, name) {
                Ok(()) => {
                    debug!(to = %entry.full_path.display(), "renamed");
                    report.results.push(entry.full_name.clone());
                    report.outcomes.push(EntryOutcome::Renamed);
                },
                Err(error) => {
                    warn!(path = %entry.full_path.display(), %error, "rename failed");
                    report.failures.push(RenameFailure {
                        error,
                        path: entry.full_path.clone(),
                    });
                    report.results.push(entry.full_name.clone());
                    report.outcomes.push(EntryOutcome::Failed);
                },
            }
        }

        self.seen = self.entries.iter().map(|e| e.full_path.clone()).collect();

        if !report.failures.is_empty() {
            report.error_summary = Some(FAILURE_SUMMARY.to_string());
            report.error_detail = Some(
                report
                    .failures
                    .iter()
                    .map(|f| format!("{}: {}", f.error, f.path.display()))
                    .collect::<Vec<_>>()
                    .join("\n"),
            );
        }

        Ok(report)
    }

    /// Targets that collide with something already on disk, with another
    /// tracked entry, or with another slot of the same batch.
    fn find_conflicts(&self, names: &[&str]) -> Vec<PathBuf> {
        let directories: BTreeSet<&Path> =
            self.entries.iter().map(|e| e.directory.as_path()).collect();

        let mut existing: HashSet<PathBuf> = self.seen.clone();
        for directory in directories {
            match fs::read_dir(directory) {
                Ok(listing) => existing.extend(listing.filter_map(Result::ok).map(|e| e.path())),
                Err(error) => {
                    warn!(directory = %directory.display(), %error, "cannot list directory");
                },
            }
        }

        let mut targets = HashSet::new();
        let mut conflicts = BTreeSet::new();
        for (entry, name) in self.entries.iter().zip(names) {
            if name.is_empty() {
                continue;
            }
            let target = entry.path_with_name(name);
            if existing.contains(&target) || !targets.insert(target.clone()) {
                conflicts.insert(target);
            }
        }

        conflicts.into_iter().collect()
    }
}

impl<'a> IntoIterator for &'a FileSet {
    type Item = &'a FileEntry;
    type IntoIter = std::slice::Iter<'a, FileEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl fmt::Display for FileSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.entries.is_empty() {
            return f.write_str("There are no files to print");
        }
        for (i, entry) in self.entries.iter().enumerate() {
            writeln!(f, "File no. {}", i + 1)?;
            writeln!(f, "File:\t{}", entry.full_name)?;
            writeln!(f, "Path:\t{}", entry.directory.display())?;
        }
        Ok(())
    }
}

fn rename_entry(entry: &mut FileEntry, name: &str) -> Result<(), String> {
    if !is_plain_file_name(name) {
        return Err(format!("Invalid file name '{name}'"));
    }

    let target = entry.path_with_name(name);
    fs::rename(&entry.full_path, &target).map_err(|e| e.to_string())?;
    entry.set_name(name);
    Ok(())
}

/// A name that stays inside the entry's own directory.
fn is_plain_file_name(name: &str) -> bool {
    name != "." && name != ".." && !name.contains('/') && !name.contains(std::path::MAIN_SEPARATOR)
}

/// Absolute form of `path` with `.` and `..` folded away, without touching
/// the filesystem.
fn absolutize(path: &Path) -> Option<PathBuf> {
    let absolute = std::path::absolute(path).ok()?;

    let mut normalized = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {},
            Component::ParentDir => {
                normalized.pop();
            },
            other => normalized.push(other),
        }
    }
    Some(normalized)
}
