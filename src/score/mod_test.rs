use std::fs;
use std::path::Path;

use git2::Repository;
use tempfile::tempdir;

use super::*;
use crate::git::Author;

fn create_test_repo() -> (tempfile::TempDir, Repository) {
    let dir = tempdir().unwrap();
    let repo = Repository::init(dir.path()).unwrap();
    let mut config = repo.config().unwrap();
    config.set_str("user.name", "Test").unwrap();
    config.set_str("user.email", "test@test.com").unwrap();
    (dir, repo)
}

fn commit_as(repo: &Repository, name: &str, files: &[(&str, &str)], epoch: i64) {
    let sig = git2::Signature::new(
        name,
        &format!("{}@test.com", name.to_lowercase()),
        &git2::Time::new(epoch, 0),
    )
    .unwrap();
    let mut index = repo.index().unwrap();
    for (path, content) in files {
        fs::write(repo.workdir().unwrap().join(path), content).unwrap();
        index.add_path(Path::new(path)).unwrap();
    }
    index.write().unwrap();
    let tree_oid = index.write_tree().unwrap();
    let tree = repo.find_tree(tree_oid).unwrap();
    let parent = repo.head().ok().and_then(|h| h.peel_to_commit().ok());
    let parents: Vec<&git2::Commit> = parent.iter().collect();
    repo.commit(Some("HEAD"), &sig, &sig, "commit", &tree, &parents)
        .unwrap();
}

fn options() -> Options {
    Options {
        json: false,
        max_functions: MAX_FUNCTIONS,
        budget_seconds: None,
    }
}

fn known(name: &str) -> Author {
    Author::Known(name.to_string())
}

#[test]
fn run_on_non_git_dir() {
    let dir = tempdir().unwrap();
    let sub = dir.path().join("not_a_repo");
    fs::create_dir_all(&sub).unwrap();

    let err = run(&sub, &SelectConfig::default(), &options()).unwrap_err();
    assert!(
        err.to_string().contains("not a git repository"),
        "should mention not a git repository, got: {err}"
    );
}

#[test]
fn single_author_full_attribution() {
    let (dir, repo) = create_test_repo();
    commit_as(
        &repo,
        "Alice",
        &[("app.py", "def f():\n    a = 1\n    b = 2\n    return a + b\n")],
        1_700_000_000,
    );

    let summary = compute(dir.path(), &SelectConfig::default(), &options()).unwrap();

    assert_eq!(summary.total_functions, 1);
    assert_eq!(summary.total_hotspots, 0, "mean of one value is never exceeded");
    assert!(!summary.partial);

    let alice = summary
        .authors
        .iter()
        .find(|r| r.author == known("Alice"))
        .unwrap();
    assert_eq!(alice.percentage_of_functions_written, 100.0);
    assert_eq!(alice.percentage_of_loc, 100.0);
    assert_eq!(alice.commits, 1);
    assert_eq!(alice.commit_percentage, 100.0);
}

#[test]
fn split_file_attributes_majority_owner() {
    let (dir, repo) = create_test_repo();
    commit_as(
        &repo,
        "Alice",
        &[("app.py", "def f():\n    a = 1\n    b = 2\n    return a + b\n")],
        1_700_000_000,
    );
    commit_as(
        &repo,
        "Bob",
        &[("app.py", "def f():\n    a = 10\n    b = 2\n    return a + b\n")],
        1_700_001_000,
    );

    let summary = compute(dir.path(), &SelectConfig::default(), &options()).unwrap();

    let alice = summary
        .authors
        .iter()
        .find(|r| r.author == known("Alice"))
        .unwrap();
    let bob = summary
        .authors
        .iter()
        .find(|r| r.author == known("Bob"))
        .unwrap();

    assert_eq!(alice.percentage_of_functions_written, 100.0, "3 of 4 lines");
    assert_eq!(bob.percentage_of_functions_written, 0.0);
    assert_eq!(alice.average_complexity, 0.75);
    assert_eq!(bob.average_complexity, 0.25);
    assert_eq!(alice.percentage_of_loc, 75.0);
    assert_eq!(bob.percentage_of_loc, 25.0);
}

#[test]
fn function_cap_marks_partial() {
    let (dir, repo) = create_test_repo();
    commit_as(
        &repo,
        "Alice",
        &[
            ("a.py", "def a():\n    return 1\n"),
            ("b.py", "def b():\n    return 2\n"),
        ],
        1_700_000_000,
    );

    let opts = Options {
        max_functions: 1,
        ..options()
    };
    let summary = compute(dir.path(), &SelectConfig::default(), &opts).unwrap();

    assert!(summary.partial);
    assert_eq!(summary.total_functions, 1);
    let alice = summary
        .authors
        .iter()
        .find(|r| r.author == known("Alice"))
        .unwrap();
    assert_eq!(
        alice.percentage_of_functions_written, 100.0,
        "percentages cover the processed subset"
    );
}

#[test]
fn expired_budget_keeps_loc_and_commit_stats() {
    let (dir, repo) = create_test_repo();
    commit_as(
        &repo,
        "Alice",
        &[("app.py", "def f():\n    return 1\n")],
        1_700_000_000,
    );

    let opts = Options {
        budget_seconds: Some(0),
        ..options()
    };
    let summary = compute(dir.path(), &SelectConfig::default(), &opts).unwrap();

    assert!(summary.partial);
    assert_eq!(summary.total_functions, 0);
    assert!(summary.hotspot_threshold.is_none());

    let alice = summary
        .authors
        .iter()
        .find(|r| r.author == known("Alice"))
        .unwrap();
    assert_eq!(alice.percentage_of_loc, 100.0);
    assert_eq!(alice.commits, 1);
}

#[test]
fn repo_without_matching_files_is_empty_not_an_error() {
    let (dir, repo) = create_test_repo();
    commit_as(&repo, "Alice", &[("notes.txt", "hello\nworld\n")], 1_700_000_000);

    let summary = compute(dir.path(), &SelectConfig::default(), &options()).unwrap();

    assert_eq!(summary.total_functions, 0);
    assert!(summary.hotspot_threshold.is_none());
    let alice = summary
        .authors
        .iter()
        .find(|r| r.author == known("Alice"))
        .unwrap();
    assert_eq!(alice.percentage_of_loc, 0.0, "txt files are outside the universe");
    assert_eq!(alice.commits, 1, "commit stats still merge in");
}

#[test]
fn untracked_source_file_is_skipped_without_failing() {
    let (dir, repo) = create_test_repo();
    commit_as(
        &repo,
        "Alice",
        &[("app.py", "def f():\n    return 1\n")],
        1_700_000_000,
    );
    fs::write(
        dir.path().join("scratch.py"),
        "def loose():\n    return 2\n",
    )
    .unwrap();

    let summary = compute(dir.path(), &SelectConfig::default(), &options()).unwrap();

    // Both files are scanned, but only the tracked one blames and attributes
    assert_eq!(summary.total_functions, 1);
    let alice = summary
        .authors
        .iter()
        .find(|r| r.author == known("Alice"))
        .unwrap();
    assert_eq!(alice.percentage_of_loc, 100.0);
}

#[test]
fn run_prints_both_formats() {
    let (dir, repo) = create_test_repo();
    commit_as(
        &repo,
        "Alice",
        &[("app.py", "def f():\n    return 1\n")],
        1_700_000_000,
    );

    assert!(run(dir.path(), &SelectConfig::default(), &options()).is_ok());

    let json_opts = Options {
        json: true,
        ..options()
    };
    assert!(run(dir.path(), &SelectConfig::default(), &json_opts).is_ok());
}
