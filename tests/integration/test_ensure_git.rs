//! Integration tests for `shipgate ensure-git`

use crate::helpers::{TestRepo, run_shipgate, run_shipgate_ok};
use anyhow::Result;

#[test]
fn test_clean_pushed_repo_succeeds() -> Result<()> {
  let repo = TestRepo::new()?;

  let output = run_shipgate_ok(&repo.path, &["ensure-git"])?;
  let stdout = String::from_utf8_lossy(&output.stdout);

  assert!(stdout.contains("clean"), "Should report a clean tree, got: {}", stdout);
  Ok(())
}

#[test]
fn test_pushes_unpushed_commit() -> Result<()> {
  let repo = TestRepo::new()?;

  repo.write_file("CHANGES.md", "new release\n")?;
  let local_head = repo.commit("Prepare release")?;
  assert_ne!(repo.upstream_head()?, local_head);

  run_shipgate_ok(&repo.path, &["ensure-git"])?;

  assert_eq!(repo.upstream_head()?, local_head, "Upstream should be at the new commit");
  Ok(())
}

#[test]
fn test_dirty_tree_fails_without_pushing() -> Result<()> {
  let repo = TestRepo::new()?;

  // An unpushed commit, then an uncommitted change on top of it
  repo.write_file("CHANGES.md", "new release\n")?;
  repo.commit("Prepare release")?;
  let upstream_before = repo.upstream_head()?;
  repo.write_file("CHANGES.md", "forgot something\n")?;

  let output = run_shipgate(&repo.path, &["ensure-git"])?;

  assert!(!output.status.success(), "Dirty tree must fail the checklist");
  assert_eq!(output.status.code(), Some(1), "git's own status should propagate");
  assert_eq!(
    repo.upstream_head()?,
    upstream_before,
    "Nothing may be pushed after a failed step"
  );
  Ok(())
}

#[test]
fn test_staged_file_fails() -> Result<()> {
  let repo = TestRepo::new()?;

  repo.write_file("staged.txt", "not committed\n")?;
  crate::helpers::git(&repo.path, &["add", "staged.txt"])?;

  let output = run_shipgate(&repo.path, &["ensure-git"])?;
  let stderr = String::from_utf8_lossy(&output.stderr);

  assert!(!output.status.success());
  assert!(
    stderr.contains("uncommitted") || stderr.contains("stash"),
    "Should explain the dirty state, got: {}",
    stderr
  );
  Ok(())
}

#[test]
fn test_outside_repository_fails() -> Result<()> {
  let dir = tempfile::TempDir::new()?;

  let output = run_shipgate(dir.path(), &["ensure-git"])?;
  let stderr = String::from_utf8_lossy(&output.stderr);

  assert!(!output.status.success());
  assert!(stderr.contains("repository"), "Should mention the missing repository, got: {}", stderr);
  Ok(())
}
