//! Applies automatic fixes to source text and files.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::types::{Replacement, Violation};

/// Collects the automatic fixes attached to a slice of violations.
///
/// The returned edits are in violation order; callers pass them to
/// [`apply_fixes`] for one file at a time.
#[must_use]
pub fn collect_fixes(violations: &[Violation]) -> Vec<Replacement> {
    violations.iter().filter_map(|v| v.fix().cloned()).collect()
}

/// Applies a set of text edits to `source` and returns the patched text.
///
/// Edits are applied in ascending offset order. Insertion points produced by
/// a single analysis pass are distinct and non-overlapping; an edit that
/// overlaps an already-applied one is skipped rather than corrupting the
/// output.
#[must_use]
pub fn apply_fixes(source: &str, edits: &[Replacement]) -> String {
    let mut ordered: Vec<&Replacement> = edits.iter().collect();
    ordered.sort_by_key(|e| (e.offset, e.length));

    let mut output = String::with_capacity(source.len());
    let mut consumed = 0;

    for edit in ordered {
        if edit.offset < consumed || edit.offset + edit.length > source.len() {
            tracing::warn!(
                "skipping conflicting edit at byte {} (+{})",
                edit.offset,
                edit.length
            );
            continue;
        }
        output.push_str(&source[consumed..edit.offset]);
        output.push_str(&edit.new_text);
        consumed = edit.offset + edit.length;
    }

    output.push_str(&source[consumed..]);
    output
}

/// Applies every fix attached to `violations` to the files under `root`.
///
/// Violation locations are relative to `root`. Files are rewritten one at a
/// time with all of their edits applied in a single pass; files whose edits
/// change nothing are left untouched.
///
/// Returns the number of edits applied.
///
/// # Errors
///
/// Returns the first IO error encountered while reading or writing a file.
pub fn fix_files(root: &Path, violations: &[Violation]) -> std::io::Result<usize> {
    let mut per_file: BTreeMap<&PathBuf, Vec<Replacement>> = BTreeMap::new();
    for violation in violations {
        if let Some(edit) = violation.fix() {
            per_file
                .entry(&violation.location.file)
                .or_default()
                .push(edit.clone());
        }
    }

    let mut applied = 0;
    for (file, edits) in per_file {
        let path = root.join(file);
        let source = std::fs::read_to_string(&path)?;

        let fixed = apply_fixes(&source, &edits);
        if fixed != source {
            std::fs::write(&path, fixed)?;
            applied += edits.len();
            tracing::debug!("fixed {}", path.display());
        }
    }

    Ok(applied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Location, Severity, Suggestion};

    #[test]
    fn single_insertion() {
        let out = apply_fixes("abcdef", &[Replacement::insert_at(3, "X")]);
        assert_eq!(out, "abcXdef");
    }

    #[test]
    fn insertion_at_end() {
        let out = apply_fixes("abc", &[Replacement::insert_at(3, ";")]);
        assert_eq!(out, "abc;");
    }

    #[test]
    fn multiple_insertions_apply_in_offset_order() {
        let edits = [Replacement::insert_at(4, "2"), Replacement::insert_at(2, "1")];
        let out = apply_fixes("abcdef", &edits);
        assert_eq!(out, "ab1cd2ef");
    }

    #[test]
    fn replacement_consumes_its_range() {
        let out = apply_fixes("abcdef", &[Replacement::new(1, 3, "X")]);
        assert_eq!(out, "aXef");
    }

    #[test]
    fn overlapping_edit_is_skipped() {
        let edits = [Replacement::new(1, 3, "X"), Replacement::new(2, 2, "Y")];
        let out = apply_fixes("abcdef", &edits);
        assert_eq!(out, "aXef");
    }

    #[test]
    fn out_of_bounds_edit_is_skipped() {
        let out = apply_fixes("abc", &[Replacement::insert_at(10, "X")]);
        assert_eq!(out, "abc");
    }

    #[test]
    fn no_edits_returns_source_unchanged() {
        assert_eq!(apply_fixes("abc", &[]), "abc");
    }

    fn fixable_violation(file: &str, offset: usize, text: &str) -> Violation {
        Violation::new(
            "ZL001",
            "export-zod-type",
            Severity::Error,
            Location::new(std::path::PathBuf::from(file), 1, 1),
            "missing paired type export",
        )
        .with_suggestion(Suggestion::with_fix(
            "add the matching type export",
            Replacement::insert_at(offset, text),
        ))
    }

    #[test]
    fn fix_files_rewrites_only_files_with_fixes() {
        let tmp = tempfile::TempDir::new().expect("tempdir");
        std::fs::write(tmp.path().join("a.ts"), "export const A = x;").expect("write");
        std::fs::write(tmp.path().join("b.ts"), "export const B = y;").expect("write");

        let violations = [
            fixable_violation("a.ts", 19, "\nexport type A = z.infer<typeof A>;"),
            // No fix attached to b.ts
            Violation::new(
                "ZL001",
                "export-zod-type",
                Severity::Error,
                Location::new(std::path::PathBuf::from("b.ts"), 1, 1),
                "missing paired type export",
            ),
        ];

        let applied = fix_files(tmp.path(), &violations).expect("fix_files failed");
        assert_eq!(applied, 1);

        let a = std::fs::read_to_string(tmp.path().join("a.ts")).expect("read");
        assert_eq!(
            a,
            "export const A = x;\nexport type A = z.infer<typeof A>;"
        );
        let b = std::fs::read_to_string(tmp.path().join("b.ts")).expect("read");
        assert_eq!(b, "export const B = y;");
    }

    #[test]
    fn fix_files_groups_edits_per_file() {
        let tmp = tempfile::TempDir::new().expect("tempdir");
        std::fs::write(tmp.path().join("s.ts"), "ab").expect("write");

        let violations = [
            fixable_violation("s.ts", 1, "1"),
            fixable_violation("s.ts", 2, "2"),
        ];

        let applied = fix_files(tmp.path(), &violations).expect("fix_files failed");
        assert_eq!(applied, 2);
        let s = std::fs::read_to_string(tmp.path().join("s.ts")).expect("read");
        assert_eq!(s, "a1b2");
    }

    #[test]
    fn fix_files_reports_missing_file() {
        let tmp = tempfile::TempDir::new().expect("tempdir");
        let violations = [fixable_violation("gone.ts", 0, "x")];
        assert!(fix_files(tmp.path(), &violations).is_err());
    }
}
