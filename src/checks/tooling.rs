//! Checks for the external binaries the dispatcher depends on

use super::trait_def::{Check, CheckContext, CheckResult};
use crate::core::error::ShipResult;
use std::process::Command;

/// Check that system git is present and runnable
pub struct GitBinaryCheck;

impl Check for GitBinaryCheck {
  fn name(&self) -> &str {
    "git-binary"
  }

  fn description(&self) -> &str {
    "Validates that system git can be executed"
  }

  fn run(&self, _ctx: &CheckContext) -> ShipResult<CheckResult> {
    match probe_version("git") {
      Some(version) => Ok(CheckResult::pass(self.name(), version)),
      None => Ok(CheckResult::error(
        self.name(),
        "git is not on PATH or cannot be executed",
        Some("Install git and make sure it is on PATH"),
      )),
    }
  }
}

/// Check that the packaging tool is present and runnable
pub struct ToolBinaryCheck;

impl Check for ToolBinaryCheck {
  fn name(&self) -> &str {
    "tool-binary"
  }

  fn description(&self) -> &str {
    "Validates that the packaging tool can be executed"
  }

  fn run(&self, ctx: &CheckContext) -> ShipResult<CheckResult> {
    match probe_version(&ctx.tool) {
      Some(version) => Ok(CheckResult::pass(self.name(), version)),
      None => Ok(CheckResult::error(
        self.name(),
        format!("'{}' is not on PATH or cannot be executed", ctx.tool),
        Some(format!("Install '{}' or point --tool at the right binary", ctx.tool)),
      )),
    }
  }
}

/// Run `<program> --version` and return its first output line on success
fn probe_version(program: &str) -> Option<String> {
  let output = Command::new(program).arg("--version").output().ok()?;
  if !output.status.success() {
    return None;
  }

  let stdout = String::from_utf8_lossy(&output.stdout);
  let line = stdout.lines().next().unwrap_or("").trim();
  if line.is_empty() {
    Some(format!("{} is runnable", program))
  } else {
    Some(line.to_string())
  }
}
