// Copyright (c) 2026 - present The gitatom developers
// SPDX-License-Identifier: MIT

//! Integration tests for gitatom-git
//!
//! These tests build real repositories on disk and read them back through
//! `GitRepo`, `CommitGraphWalker`, and `GitShow`.


use gitatom_git::{
    CommitGraphWalker, CommitRecord, DiffError, DiffSource, GitError, GitRepo, GitShow,
    RepositoryAccess,
};
use similar_asserts::assert_eq;
use test_utils::TestGitRepo;

fn summaries(commits: &[CommitRecord]) -> Vec<&str> {
    commits.iter().map(CommitRecord::summary).collect()
}

#[test]
fn test_resolve_commit_reads_metadata() {
    let test_repo = TestGitRepo::new("resolve");
    let oid = test_repo.commit(
        "main",
        &[],
        "README.md",
        "hello\n",
        "Initial import\n\nWith a body.",
        1_700_000_000,
        330,
    );

    let repo = GitRepo::open(test_repo.path()).expect("open repo");
    let record = repo.resolve_commit(&oid.to_string()).expect("resolve");

    assert_eq!(record.id, oid.to_string());
    assert!(CommitRecord::is_valid_id(&record.id));
    assert!(record.is_root());
    assert_eq!(record.timestamp, 1_700_000_000);
    assert_eq!(record.timezone_offset_seconds, 330 * 60);
    assert_eq!(record.author_line, "Test Author <test@example.com>");
    assert_eq!(record.summary(), "Initial import");
    assert!(record.message.contains("With a body."));
}

#[test]
fn test_resolve_unknown_commit_is_not_found() {
    let test_repo = TestGitRepo::new("unknown");
    test_repo.linear_history("main", 1, 1_700_000_000);

    let repo = GitRepo::open(test_repo.path()).expect("open repo");
    let missing = "0123456789abcdef0123456789abcdef01234567";
    match repo.resolve_commit(missing) {
        Err(GitError::CommitNotFound { id }) => assert_eq!(id, missing),
        other => panic!("Expected CommitNotFound, got {other:?}"),
    }
}

#[test]
fn test_resolve_malformed_id() {
    let test_repo = TestGitRepo::new("malformed");
    let repo = GitRepo::open(test_repo.path()).expect("open repo");
    assert!(matches!(
        repo.resolve_commit("not-a-hash"),
        Err(GitError::InvalidCommitId { .. })
    ));
}

#[test]
fn test_list_branch_heads_in_refname_order() {
    let test_repo = TestGitRepo::new("branches");
    let base = test_repo.linear_history("main", 1, 1_700_000_000);
    let zeta = test_repo.commit("zeta", &base, "z.txt", "z", "Zeta", 1_700_000_100, 0);
    let alpha = test_repo.commit("alpha", &base, "a.txt", "a", "Alpha", 1_700_000_200, 0);

    let repo = GitRepo::open(test_repo.path()).expect("open repo");
    let heads = repo.list_branch_heads().expect("heads");
    assert_eq!(
        heads,
        vec![alpha.to_string(), base[0].to_string(), zeta.to_string()]
    );
}

#[test]
fn test_walk_single_branch_newest_first() {
    let test_repo = TestGitRepo::new("linear");
    test_repo.linear_history("main", 3, 1_700_000_000);

    let walker = CommitGraphWalker::new(GitRepo::open(test_repo.path()).expect("open repo"));
    let commits = walker.select_from_branches(10).expect("walk");
    assert_eq!(summaries(&commits), vec!["Commit 2", "Commit 1", "Commit 0"]);
}

#[test]
fn test_walk_two_branches_sharing_ancestor() {
    let test_repo = TestGitRepo::new("shared");
    let base = test_repo.linear_history("main", 1, 1_700_000_000);
    let main1 = test_repo.commit("main", &base, "m.txt", "m", "Main work", 1_700_000_300, 0);
    let topic1 = test_repo.commit("topic", &base, "t.txt", "t1", "Topic one", 1_700_000_100, 0);
    test_repo.commit("topic", &[topic1], "t.txt", "t2", "Topic two", 1_700_000_200, 0);

    let walker = CommitGraphWalker::new(GitRepo::open(test_repo.path()).expect("open repo"));
    let commits = walker.select_from_branches(5).expect("walk");

    assert_eq!(
        summaries(&commits),
        vec!["Main work", "Topic two", "Topic one", "Commit 0"]
    );
    assert_eq!(commits[0].id, main1.to_string());
}

#[test]
fn test_walk_respects_max_count() {
    let test_repo = TestGitRepo::new("max-count");
    test_repo.linear_history("main", 6, 1_700_000_000);

    let walker = CommitGraphWalker::new(GitRepo::open(test_repo.path()).expect("open repo"));
    let commits = walker.select_from_branches(4).expect("walk");
    assert_eq!(commits.len(), 4);
    assert_eq!(commits[0].summary(), "Commit 5");
}

#[test]
fn test_resolve_ref() {
    let test_repo = TestGitRepo::new("resolve-ref");
    let oids = test_repo.linear_history("main", 2, 1_700_000_000);

    let repo = GitRepo::open(test_repo.path()).expect("open repo");
    assert_eq!(repo.resolve_ref("main").expect("ref"), oids[1].to_string());
    assert_eq!(repo.resolve_ref("main~1").expect("ref"), oids[0].to_string());
    assert!(matches!(
        repo.resolve_ref("no-such-branch"),
        Err(GitError::InvalidReference { .. })
    ));
}

#[test]
fn test_discover_from_subdirectory() {
    let test_repo = TestGitRepo::new("discover");
    test_repo.linear_history("main", 1, 1_700_000_000);
    let nested = test_repo.path().join("nested").join("dir");
    std::fs::create_dir_all(&nested).expect("create nested dir");

    let repo = GitRepo::discover(&nested).expect("discover");
    assert!(!repo.is_bare());
    assert!(repo.workdir().is_some());
}

#[test]
fn test_git_show_produces_stat_and_patch() {
    let test_repo = TestGitRepo::new("show");
    let oids = test_repo.linear_history("main", 2, 1_700_000_000);

    let show = GitShow::new(test_repo.path());
    let diff = show
        .combined_stat_and_patch(&oids[1].to_string())
        .expect("git show");

    assert!(diff.contains(&oids[1].to_string()));
    assert!(diff.contains("Commit 1"));
    assert!(diff.contains("file_1.txt | 1 +"));
    assert!(diff.contains("+Content 1"));
}

#[test]
fn test_git_show_unknown_commit_reports_exit_status() {
    let test_repo = TestGitRepo::new("show-missing");
    test_repo.linear_history("main", 1, 1_700_000_000);

    let show = GitShow::new(test_repo.path());
    match show.combined_stat_and_patch("0123456789abcdef0123456789abcdef01234567") {
        Err(DiffError::Exit { status, stderr, .. }) => {
            assert_eq!(status, Some(128));
            assert!(!stderr.is_empty());
        }
        other => panic!("Expected DiffError::Exit, got {other:?}"),
    }
}

#[test]
fn test_git_show_ignores_external_diff_tool() {
    let test_repo = TestGitRepo::new("show-ext-diff");
    let oids = test_repo.linear_history("main", 2, 1_700_000_000);
    test_repo.set_config("diff.external", "gitatom-no-such-diff-tool");

    let show = GitShow::new(test_repo.path());
    let diff = show
        .combined_stat_and_patch(&oids[1].to_string())
        .expect("git show");

    assert!(diff.contains("file_1.txt | 1 +"));
    assert!(diff.contains("+Content 1"));
}

#[test]
fn test_git_show_revision_named_like_a_path() {
    let test_repo = TestGitRepo::new("show-ambiguous");
    test_repo.linear_history("main", 1, 1_700_000_000);
    std::fs::write(test_repo.path().join("main"), "not a revision\n").expect("write file");

    let show = GitShow::new(test_repo.path());
    let diff = show.combined_stat_and_patch("main").expect("git show");

    assert!(diff.contains("Commit 0"));
    assert!(diff.contains("+Content 0"));
}
