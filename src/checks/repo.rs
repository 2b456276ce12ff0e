//! Repository validity check

use super::trait_def::{Check, CheckContext, CheckResult};
use crate::core::error::ShipResult;
use crate::core::vcs::SystemGit;

/// Check that we are inside a git work tree with a resolvable HEAD and an
/// upstream to push to
pub struct RepositoryCheck;

impl Check for RepositoryCheck {
  fn name(&self) -> &str {
    "repository"
  }

  fn description(&self) -> &str {
    "Validates the git repository and its upstream configuration"
  }

  fn run(&self, ctx: &CheckContext) -> ShipResult<CheckResult> {
    let git = match SystemGit::open(&ctx.workdir) {
      Ok(git) => git,
      Err(_) => {
        return Ok(CheckResult::error(
          self.name(),
          "Not inside a git repository",
          Some("Run shipgate from inside the repository you want to release"),
        ));
      }
    };

    if git.head_commit().is_err() {
      return Ok(CheckResult::error(
        self.name(),
        "HEAD does not resolve to a commit",
        Some("Create an initial commit first"),
      ));
    }

    let branch = git.current_branch()?;
    match git.upstream()? {
      Some(upstream) => Ok(CheckResult::pass(
        self.name(),
        format!("On '{}', tracking {}", branch, upstream),
      )),
      None => Ok(CheckResult::warning(
        self.name(),
        format!("Branch '{}' has no upstream; ensure-git will not be able to push", branch),
        Some(format!("Set one with: git push -u origin {}", branch)),
      )),
    }
  }
}
