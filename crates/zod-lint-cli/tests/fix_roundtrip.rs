//! End-to-end: discover files, lint, apply fixes, verify clean re-run.

use std::fs;
use tempfile::TempDir;
use zod_lint_core::{fixer, Analyzer};
use zod_lint_rules::ExportZodType;

fn analyzer_for(root: &TempDir) -> Analyzer {
    Analyzer::builder()
        .root(root.path())
        .rule(ExportZodType::new())
        .build()
        .expect("failed to build analyzer")
}

#[test]
fn fixes_make_a_project_clean() {
    let tmp = TempDir::new().expect("tempdir");
    fs::write(
        tmp.path().join("user.ts"),
        "export const User = z.object({ id: z.string() });\n",
    )
    .expect("write");
    fs::write(
        tmp.path().join("order.ts"),
        "export const Order = z.object({});\nexport type Order = z.infer<typeof Order>;\n",
    )
    .expect("write");

    let analyzer = analyzer_for(&tmp);
    let result = analyzer.analyze().expect("analyze failed");

    assert_eq!(result.files_checked, 2);
    assert_eq!(result.violations.len(), 1);
    assert!(result.violations[0].location.file.ends_with("user.ts"));

    let applied =
        fixer::fix_files(analyzer.root(), &result.violations).expect("fix_files failed");
    assert_eq!(applied, 1);

    let fixed = fs::read_to_string(tmp.path().join("user.ts")).expect("read");
    assert!(fixed.contains("export type User = z.infer<typeof User>;"));

    let rerun = analyzer.analyze().expect("re-analyze failed");
    assert!(rerun.violations.is_empty());
}

#[test]
fn multiple_violations_in_one_file_all_fixed() {
    let tmp = TempDir::new().expect("tempdir");
    fs::write(
        tmp.path().join("schemas.ts"),
        "export const A = z.enum([]);export const B = z.enum([]);",
    )
    .expect("write");

    let analyzer = analyzer_for(&tmp);
    let result = analyzer.analyze().expect("analyze failed");
    assert_eq!(result.violations.len(), 2);

    let applied =
        fixer::fix_files(analyzer.root(), &result.violations).expect("fix_files failed");
    assert_eq!(applied, 2);

    let fixed = fs::read_to_string(tmp.path().join("schemas.ts")).expect("read");
    assert!(fixed.contains("export type A = z.infer<typeof A>;"));
    assert!(fixed.contains("export type B = z.infer<typeof B>;"));

    let rerun = analyzer.analyze().expect("re-analyze failed");
    assert!(rerun.violations.is_empty());
}

#[test]
fn tsx_files_are_discovered_and_fixed() {
    let tmp = TempDir::new().expect("tempdir");
    fs::write(
        tmp.path().join("card.tsx"),
        "export const CardProps = z.object({ title: z.string() });\n\
         export const Card = (props: CardProps) => <div>{props.title}</div>;\n",
    )
    .expect("write");

    let analyzer = analyzer_for(&tmp);
    let result = analyzer.analyze().expect("analyze failed");

    assert_eq!(result.files_checked, 1);
    assert_eq!(result.violations.len(), 1);
    assert!(result.violations[0].location.file.ends_with("card.tsx"));

    let applied =
        fixer::fix_files(analyzer.root(), &result.violations).expect("fix_files failed");
    assert_eq!(applied, 1);

    let fixed = fs::read_to_string(tmp.path().join("card.tsx")).expect("read");
    assert!(fixed.contains("export type CardProps = z.infer<typeof CardProps>;"));

    let rerun = analyzer.analyze().expect("re-analyze failed");
    assert!(rerun.violations.is_empty());
}

#[test]
fn node_modules_are_not_analyzed() {
    let tmp = TempDir::new().expect("tempdir");
    let dep = tmp.path().join("node_modules").join("pkg");
    fs::create_dir_all(&dep).expect("mkdir");
    fs::write(dep.join("index.ts"), "export const S = z.object({});\n").expect("write");

    let analyzer = analyzer_for(&tmp);
    let result = analyzer.analyze().expect("analyze failed");
    assert_eq!(result.files_checked, 0);
    assert!(result.violations.is_empty());
}

#[test]
fn unparseable_file_is_skipped_not_fatal() {
    let tmp = TempDir::new().expect("tempdir");
    fs::write(tmp.path().join("broken.ts"), "export const A = (;\n").expect("write");
    fs::write(
        tmp.path().join("good.ts"),
        "export const S = z.object({});\n",
    )
    .expect("write");

    let analyzer = analyzer_for(&tmp);
    let result = analyzer.analyze().expect("analyze failed");
    assert_eq!(result.files_checked, 1);
    assert_eq!(result.violations.len(), 1);
}
