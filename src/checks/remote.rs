//! Upstream remote accessibility check

use super::trait_def::{Check, CheckContext, CheckResult};
use crate::core::error::ShipResult;
use crate::core::vcs::SystemGit;

/// Check that the upstream remote is reachable
pub struct RemoteAccessCheck;

impl Check for RemoteAccessCheck {
  fn name(&self) -> &str {
    "remote-access"
  }

  fn description(&self) -> &str {
    "Validates upstream remote accessibility"
  }

  fn run(&self, ctx: &CheckContext) -> ShipResult<CheckResult> {
    // This is an expensive check, only run in thorough mode
    if !ctx.thorough {
      return Ok(CheckResult::pass(
        self.name(),
        "Skipped (use --thorough to test remote connectivity)",
      ));
    }

    let git = match SystemGit::open(&ctx.workdir) {
      Ok(git) => git,
      Err(_) => {
        return Ok(CheckResult::pass(self.name(), "Skipped (not a repository)"));
      }
    };

    let Some(upstream) = git.upstream()? else {
      return Ok(CheckResult::pass(self.name(), "Skipped (no upstream configured)"));
    };

    // Upstream refs look like "origin/main"; the part before the first
    // slash is the remote name
    let remote = upstream.split('/').next().unwrap_or(&upstream);

    if git.remote_reachable(remote)? {
      Ok(CheckResult::pass(self.name(), format!("Remote '{}' is reachable", remote)))
    } else {
      Ok(CheckResult::error(
        self.name(),
        format!("Cannot reach remote '{}'", remote),
        Some("Verify the remote URL and your network access"),
      ))
    }
  }

  fn is_expensive(&self) -> bool {
    true // Network operations
  }
}
