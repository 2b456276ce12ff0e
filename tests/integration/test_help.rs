//! Integration tests for `shipgate help`

use crate::helpers::{TestRepo, run_shipgate_ok};
use anyhow::Result;

#[test]
fn test_help_succeeds_with_usage_line() -> Result<()> {
  let repo = TestRepo::new()?;

  let output = run_shipgate_ok(&repo.path, &["help"])?;
  let stdout = String::from_utf8_lossy(&output.stdout);

  assert!(!stdout.trim().is_empty(), "Help must produce output");
  assert!(stdout.contains("usage"), "Help must print the usage line, got: {}", stdout);
  Ok(())
}

#[test]
fn test_help_works_outside_a_repository() -> Result<()> {
  // help has no side effects and no git dependency
  let dir = tempfile::TempDir::new()?;

  let output = run_shipgate_ok(dir.path(), &["help"])?;
  assert!(String::from_utf8_lossy(&output.stdout).contains("usage"));
  Ok(())
}
