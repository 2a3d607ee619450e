use std::fs;
use std::io::Cursor;

use tempfile::TempDir;

use super::*;
use crate::scan::SizeMode;

/// Two projects with dependencies and one without.
fn setup_projects() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    fs::create_dir_all(root.join("projA/node_modules/left-pad")).unwrap();
    for i in 0..10 {
        fs::write(
            root.join(format!("projA/node_modules/left-pad/file{i}.js")),
            vec![b'x'; 10],
        )
        .unwrap();
    }
    fs::write(root.join("projA/package.json"), "{}").unwrap();

    fs::create_dir_all(root.join("projB/node_modules")).unwrap();
    fs::create_dir_all(root.join("projB/src")).unwrap();
    fs::write(root.join("projB/src/index.js"), "console.log(1);").unwrap();

    fs::create_dir_all(root.join("projC/src")).unwrap();

    temp_dir
}

fn sweep_for(root: &Path) -> SweepBuilder {
    Sweep::builder().root(root).size_mode(SizeMode::Manual).quiet(true)
}

fn run_with_answer(sweep: &Sweep, answer: &str) -> (SweepOutcome, String) {
    let mut output = Vec::new();
    let outcome = sweep
        .run_with_io(&mut Cursor::new(answer.as_bytes()), &mut output)
        .unwrap();
    (outcome, String::from_utf8(output).unwrap())
}

#[test]
fn test_confirmed_sweep_deletes_matches_only() {
    let temp_dir = setup_projects();
    let root = temp_dir.path();
    let sweep = sweep_for(root).build().unwrap();

    let (outcome, text) = run_with_answer(&sweep, "yes\n");

    let scan = outcome.scan().unwrap();
    assert_eq!(scan.len(), 2);
    assert_eq!(scan.total_bytes(), 100);
    assert!(scan.entries()[0].path().ends_with("projA/node_modules"));
    assert_eq!(scan.entries()[0].size_bytes(), 100);
    assert_eq!(scan.entries()[1].size_bytes(), 0);

    let deletion = outcome.deletion().unwrap();
    assert_eq!(deletion.succeeded(), 2);
    assert_eq!(outcome.final_phase(), Phase::Done);

    assert!(!root.join("projA/node_modules").exists());
    assert!(!root.join("projB/node_modules").exists());
    assert!(root.join("projA/package.json").exists());
    assert!(root.join("projB/src/index.js").exists());
    assert!(root.join("projC/src").exists());

    assert!(text.contains("[y/N]"));
    assert!(text.contains("Deleted 2 of 2"));
    assert!(text.contains("Freed approximately"));
}

#[test]
fn test_negative_answers_change_nothing() {
    for answer in ["no\n", "n\n", "\n", "", "maybe later\n"] {
        let temp_dir = setup_projects();
        let root = temp_dir.path();
        let sweep = sweep_for(root).build().unwrap();

        let (outcome, text) = run_with_answer(&sweep, answer);

        assert!(
            matches!(outcome, SweepOutcome::Cancelled { .. }),
            "answer {answer:?} should cancel"
        );
        assert_eq!(outcome.final_phase(), Phase::Cancelled);
        assert!(outcome.deletion().is_none());
        assert!(root.join("projA/node_modules/left-pad/file0.js").exists());
        assert!(root.join("projB/node_modules").exists());
        assert!(text.contains("Cancelled"));
    }
}

#[test]
fn test_nothing_found_skips_prompt() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir_all(temp_dir.path().join("plain/src")).unwrap();
    let sweep = sweep_for(temp_dir.path()).build().unwrap();

    // An affirmative answer is available but must never be read
    let (outcome, text) = run_with_answer(&sweep, "y\n");

    assert_eq!(outcome, SweepOutcome::NothingFound);
    assert!(text.contains("No node_modules directories found"));
    assert!(!text.contains("[y/N]"));
    assert!(temp_dir.path().join("plain/src").exists());
}

#[test]
fn test_dry_run_reports_without_prompt() {
    let temp_dir = setup_projects();
    let sweep = sweep_for(temp_dir.path()).dry_run(true).build().unwrap();

    let (outcome, text) = run_with_answer(&sweep, "y\n");

    assert!(matches!(outcome, SweepOutcome::Reported { .. }));
    assert_eq!(outcome.scan().unwrap().len(), 2);
    assert!(!text.contains("[y/N]"));
    assert!(text.contains("Dry run"));
    assert!(temp_dir.path().join("projA/node_modules").exists());
}

#[test]
fn test_report_total_covers_hidden_entries() {
    let temp_dir = TempDir::new().unwrap();
    for i in 0..4 {
        let dir = temp_dir.path().join(format!("p{i}/node_modules"));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("a.js"), vec![0u8; 1024]).unwrap();
    }
    let sweep = sweep_for(temp_dir.path())
        .display_limit(2)
        .dry_run(true)
        .build()
        .unwrap();

    let (outcome, text) = run_with_answer(&sweep, "");

    assert_eq!(outcome.scan().unwrap().total_bytes(), 4096);
    assert!(text.contains("... and 2 more directories"));
    assert!(text.contains("4 KB"));
}

#[test]
fn test_depth_limit_is_applied() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir_all(temp_dir.path().join("a/b/c/node_modules")).unwrap();

    let shallow = sweep_for(temp_dir.path()).max_depth(2).build().unwrap();
    let (outcome, _) = run_with_answer(&shallow, "n\n");
    assert_eq!(outcome, SweepOutcome::NothingFound);

    let deep = sweep_for(temp_dir.path()).max_depth(3).build().unwrap();
    let (outcome, _) = run_with_answer(&deep, "n\n");
    assert_eq!(outcome.scan().unwrap().len(), 1);
}

#[test]
fn test_missing_root_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("does-not-exist");
    let sweep = sweep_for(&missing).build().unwrap();

    let mut output = Vec::new();
    let result = sweep.run_with_io(&mut Cursor::new(b"y\n".as_slice()), &mut output);

    assert!(matches!(result, Err(PruneError::InvalidRoot(path)) if path == missing));
    assert!(output.is_empty(), "no scanning output expected");
}

#[test]
fn test_file_root_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("package.json");
    fs::write(&file, "{}").unwrap();
    let sweep = sweep_for(&file).build().unwrap();

    let result = sweep.run_with_io(&mut Cursor::new(b"".as_slice()), &mut Vec::new());
    assert!(matches!(result, Err(PruneError::RootNotDirectory(_))));
}

#[test]
fn test_builder_validation() {
    assert!(matches!(
        Sweep::builder().build(),
        Err(PruneError::ConfigError { .. })
    ));
    assert!(matches!(
        Sweep::builder().root(".").display_limit(0).build(),
        Err(PruneError::ConfigError { .. })
    ));
    let sweep = Sweep::builder().root("somewhere").build().unwrap();
    assert_eq!(sweep.root(), Path::new("somewhere"));
}

#[test]
fn test_execute_with_dir_resolves_relative_root() {
    let temp_dir = setup_projects();
    let cli = Cli::builder()
        .path("projA")
        .size_mode(SizeMode::Manual)
        .dry_run(true)
        .quiet(true)
        .build();

    let outcome = execute_with_dir(&cli, Some(temp_dir.path())).unwrap();

    let scan = outcome.scan().unwrap();
    assert_eq!(scan.len(), 1);
    assert_eq!(scan.entries()[0].path(), temp_dir.path().join("projA/node_modules"));
}

#[test]
fn test_execute_with_dir_missing_root() {
    let temp_dir = TempDir::new().unwrap();
    let cli = Cli::builder().path("nope").quiet(true).build();

    let result = execute_with_dir(&cli, Some(temp_dir.path()));
    assert!(matches!(result, Err(PruneError::InvalidRoot(_))));
}
