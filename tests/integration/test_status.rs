//! Integration tests for `shipgate status`

use crate::helpers::{TestRepo, run_shipgate, run_shipgate_ok};
use anyhow::Result;

#[test]
fn test_status_json_clean_repo() -> Result<()> {
  let repo = TestRepo::new()?;

  let output = run_shipgate_ok(&repo.path, &["status", "--json"])?;
  let stdout = String::from_utf8_lossy(&output.stdout);

  let json: serde_json::Value = serde_json::from_str(&stdout)?;
  assert_eq!(json["branch"], "main");
  assert_eq!(json["tree"], "clean");
  assert_eq!(json["sync"], "up_to_date");
  assert_eq!(json["upstream"], "origin/main");
  Ok(())
}

#[test]
fn test_status_reports_dirty_files() -> Result<()> {
  let repo = TestRepo::new()?;
  repo.write_file("README.md", "dirty\n")?;

  let output = run_shipgate_ok(&repo.path, &["status"])?;
  let stdout = String::from_utf8_lossy(&output.stdout);

  assert!(stdout.contains("uncommitted"), "Should report dirty state, got: {}", stdout);
  assert!(stdout.contains("README.md"));
  assert!(stdout.contains("Not ready"));
  Ok(())
}

#[test]
fn test_status_json_ahead_of_upstream() -> Result<()> {
  let repo = TestRepo::new()?;
  repo.write_file("CHANGES.md", "unpushed\n")?;
  repo.commit("Unpushed commit")?;

  let output = run_shipgate_ok(&repo.path, &["status", "--json"])?;
  let json: serde_json::Value = serde_json::from_str(&String::from_utf8_lossy(&output.stdout))?;

  assert_eq!(json["sync"]["ahead"]["commits"], 1);
  Ok(())
}

#[test]
fn test_status_outside_repository_fails() -> Result<()> {
  let dir = tempfile::TempDir::new()?;

  let output = run_shipgate(dir.path(), &["status"])?;
  assert_eq!(output.status.code(), Some(1));
  Ok(())
}
