use crate::entry::{FileEntry, NamePart};
use crate::error::{TransformError, TransformFault};
use crate::file_set::FileSet;
use crate::registry::ModuleRegistry;
use crate::transform::{run_guarded, NameTransform};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use tracing::debug;

/// Proposed names for every entry of a [`FileSet`].
///
/// A blank slot in `proposed` means the entry keeps its current name, which
/// is exactly what [`FileSet::rename`] expects, so `proposed` can be passed
/// straight through once the plan is committable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenamePlan {
    pub part: NamePart,
    pub current: Vec<String>,
    pub proposed: Vec<String>,
    /// Indices whose proposed name appears more than once
    pub duplicates: BTreeSet<usize>,
}

impl RenamePlan {
    pub fn len(&self) -> usize {
        self.proposed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.proposed.is_empty()
    }

    pub fn blank_count(&self) -> usize {
        self.proposed.iter().filter(|name| name.is_empty()).count()
    }

    /// Number of entries that would actually be renamed
    pub fn pending_count(&self) -> usize {
        self.len() - self.blank_count()
    }

    pub fn is_duplicate(&self, index: usize) -> bool {
        self.duplicates.contains(&index)
    }

    /// Something to rename and no two entries heading for the same name.
    pub fn is_committable(&self) -> bool {
        self.pending_count() > 0 && self.duplicates.is_empty()
    }
}

/// Run `module` over the `part` of every entry and reassemble full names.
pub fn plan_renames(
    files: &FileSet,
    module: &dyn NameTransform,
    part: NamePart,
) -> Result<RenamePlan, TransformFault> {
    let fragments = files.names(part);
    let transformed = run_guarded(module, &fragments)?;
    Ok(reassemble(files.entries(), &transformed, part))
}

/// Like [`plan_renames`], but through a registry: a module that faults is
/// evicted from `registry` and the fault is returned.
pub fn plan_with_registry(
    files: &FileSet,
    registry: &mut ModuleRegistry,
    label: &str,
    part: NamePart,
) -> Result<RenamePlan, TransformError> {
    let fragments = files.names(part);
    let transformed = registry.invoke(label, &fragments)?;
    Ok(reassemble(files.entries(), &transformed, part))
}

/// Turn transformed fragments back into full file names.
///
/// `transformed` must be aligned with `entries`. Base names get their
/// extension back, extensions get their base back (unless the new extension
/// is empty), and any result equal to the current name becomes blank.
pub fn reassemble(entries: &[FileEntry], transformed: &[String], part: NamePart) -> RenamePlan {
    let proposed: Vec<String> = entries
        .iter()
        .zip(transformed)
        .map(|(entry, fragment)| {
            let name = match part {
                NamePart::Base if !entry.ext.is_empty() => format!("{fragment}.{}", entry.ext),
                NamePart::Extension if !fragment.is_empty() => {
                    format!("{}.{fragment}", entry.base)
                },
                _ => fragment.clone(),
            };

            if name == entry.full_name {
                String::new()
            } else {
                name
            }
        })
        .collect();

    let duplicates = find_duplicates(&proposed);
    debug!(
        entries = proposed.len(),
        duplicates = duplicates.len(),
        "planned renames"
    );

    RenamePlan {
        part,
        current: entries.iter().map(|e| e.full_name.clone()).collect(),
        proposed,
        duplicates,
    }
}

fn find_duplicates(names: &[String]) -> BTreeSet<usize> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for name in names.iter().filter(|n| !n.is_empty()) {
        *counts.entry(name.as_str()).or_insert(0) += 1;
    }

    names
        .iter()
        .enumerate()
        .filter(|(_, name)| counts.get(name.as_str()).copied().unwrap_or(0) > 1)
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::{Case, LetterCase, Replace};

    fn file_set(paths: &[&str]) -> FileSet {
        let mut set = FileSet::new();
        set.add(paths);
        set
    }

    fn upper() -> LetterCase {
        LetterCase { case: Case::Upper }
    }

    #[test]
    fn test_base_part_keeps_extension() {
        let set = file_set(&["/d/a.txt", "/d/b"]);
        let plan = plan_renames(&set, &upper(), NamePart::Base).unwrap();
        assert_eq!(plan.proposed, vec!["A.txt", "B"]);
        assert_eq!(plan.current, vec!["a.txt", "b"]);
        assert!(plan.is_committable());
    }

    #[test]
    fn test_extension_part_keeps_base() {
        let set = file_set(&["/d/a.txt", "/d/b"]);
        let plan = plan_renames(&set, &upper(), NamePart::Extension).unwrap();
        // "b" has no extension, so its fragment stays empty and the slot is blank
        assert_eq!(plan.proposed, vec!["a.TXT", ""]);
    }

    #[test]
    fn test_emptied_extension_is_blank() {
        let set = file_set(&["/d/a.txt"]);
        let module = Replace {
            find: "txt".to_string(),
            replacer: String::new(),
            regex: false,
        };
        let plan = plan_renames(&set, &module, NamePart::Extension).unwrap();
        assert_eq!(plan.proposed, vec![""]);
        assert!(!plan.is_committable());
    }

    #[test]
    fn test_full_part_and_unchanged_names_are_blank() {
        let set = file_set(&["/d/ABC.TXT", "/d/abc.txt"]);
        let plan = plan_renames(&set, &upper(), NamePart::Full).unwrap();
        assert_eq!(plan.proposed, vec!["", "ABC.TXT"]);
        assert_eq!(plan.blank_count(), 1);
        assert_eq!(plan.pending_count(), 1);
    }

    #[test]
    fn test_duplicates_flagged_and_block_commit() {
        let set = file_set(&["/d/a.txt", "/e/a.txt", "/d/c.txt"]);
        let plan = plan_renames(&set, &upper(), NamePart::Base).unwrap();
        assert_eq!(plan.proposed, vec!["A.txt", "A.txt", "C.txt"]);
        assert_eq!(plan.duplicates, BTreeSet::from([0, 1]));
        assert!(plan.is_duplicate(1));
        assert!(!plan.is_duplicate(2));
        assert!(!plan.is_committable());
    }

    #[test]
    fn test_all_blank_is_not_committable() {
        let set = file_set(&["/d/A", "/d/B"]);
        let plan = plan_renames(&set, &upper(), NamePart::Base).unwrap();
        assert_eq!(plan.blank_count(), 2);
        assert!(plan.duplicates.is_empty());
        assert!(!plan.is_committable());
    }

    #[test]
    fn test_empty_set_plans_nothing() {
        let plan = plan_renames(&FileSet::new(), &upper(), NamePart::Full).unwrap();
        assert!(plan.is_empty());
        assert!(!plan.is_committable());
    }

    #[test]
    fn test_plan_with_registry_uses_session_config() {
        let set = file_set(&["/d/photo.jpg"]);
        let mut registry = ModuleRegistry::with_builtins();
        registry.configure("Insert", "insert", "2024_").unwrap();

        let plan = plan_with_registry(&set, &mut registry, "Insert", NamePart::Base).unwrap();
        assert_eq!(plan.proposed, vec!["2024_photo.jpg"]);
    }

    #[test]
    fn test_plan_with_registry_unknown_label() {
        let set = file_set(&["/d/photo.jpg"]);
        let mut registry = ModuleRegistry::with_builtins();
        let err = plan_with_registry(&set, &mut registry, "Nope", NamePart::Base).unwrap_err();
        assert_eq!(err, TransformError::UnknownModule("Nope".to_string()));
    }
}
