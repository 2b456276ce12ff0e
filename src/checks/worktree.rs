//! Working tree cleanliness check

use super::trait_def::{Check, CheckContext, CheckResult};
use crate::core::error::ShipResult;
use crate::core::vcs::SystemGit;

/// Check that the working tree matches HEAD
///
/// A dirty tree is reported as a warning rather than an error: it is a
/// normal development state, it just blocks `release` until committed.
pub struct CleanWorkTreeCheck;

impl Check for CleanWorkTreeCheck {
  fn name(&self) -> &str {
    "clean-worktree"
  }

  fn description(&self) -> &str {
    "Validates that the working tree matches HEAD"
  }

  fn run(&self, ctx: &CheckContext) -> ShipResult<CheckResult> {
    let git = match SystemGit::open(&ctx.workdir) {
      Ok(git) => git,
      Err(_) => {
        // The repository check reports this case
        return Ok(CheckResult::pass(self.name(), "Skipped (not a repository)"));
      }
    };

    let files = git.changed_files()?;
    if files.is_empty() {
      Ok(CheckResult::pass(self.name(), "Working tree matches HEAD"))
    } else {
      Ok(CheckResult::warning(
        self.name(),
        format!("{} tracked file(s) differ from HEAD; release is blocked", files.len()),
        Some("Commit or stash your changes before releasing"),
      ))
    }
  }
}
