//! Pre-release git checklist
//!
//! Three steps in order, each a blocking subprocess:
//!
//! 1. refresh cached stat information in the index
//! 2. verify the index and working tree match HEAD
//! 3. push the current branch to its configured upstream
//!
//! The first failing step aborts the whole operation; its exit status is
//! surfaced to the caller unchanged. No retries.

use crate::core::error::ShipResult;
use crate::core::vcs::SystemGit;
use std::path::Path;

/// Run the checklist against the repository containing `workdir`
pub fn run_ensure_git(workdir: &Path) -> ShipResult<()> {
  let git = SystemGit::open(workdir)?;

  git.refresh_index()?;
  git.verify_clean()?;
  git.push()?;

  println!("✅ Working tree clean and pushed");
  Ok(())
}
