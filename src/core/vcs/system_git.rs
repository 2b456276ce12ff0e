//! System git backend
//!
//! Uses git plumbing commands for all repository state queries and the
//! release checklist steps. Subprocesses run with an isolated environment so
//! global user configuration cannot change behavior under us.

use crate::core::error::{GitError, ResultExt, ShipError, ShipResult};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Git backend using system git (zero crate dependencies)
pub struct SystemGit {
  /// Repository working directory
  repo_path: PathBuf,
}

impl SystemGit {
  /// Open a git repository
  ///
  /// Performs one subprocess call to verify the path is inside a work tree.
  pub fn open(path: &Path) -> ShipResult<Self> {
    let output = Command::new("git")
      .arg("-C")
      .arg(path)
      .args(["rev-parse", "--show-toplevel"])
      .output()
      .context("Failed to execute git rev-parse")?;

    if !output.status.success() {
      let stderr = String::from_utf8_lossy(&output.stderr);
      if stderr.contains("not a git repository") {
        return Err(ShipError::Git(GitError::RepoNotFound {
          path: path.to_path_buf(),
        }));
      }
      return Err(ShipError::message(format!("Failed to open git repository: {}", stderr)));
    }

    Ok(Self {
      repo_path: path.to_path_buf(),
    })
  }

  /// Get HEAD commit SHA
  pub fn head_commit(&self) -> ShipResult<String> {
    let output = self
      .git_cmd()
      .args(["rev-parse", "HEAD"])
      .output()
      .context("Failed to get HEAD commit")?;

    if !output.status.success() {
      let stderr = String::from_utf8_lossy(&output.stderr);
      return Err(ShipError::Git(GitError::StepFailed {
        command: "git rev-parse HEAD".to_string(),
        code: output.status.code(),
        output: stderr.to_string(),
      }));
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
  }

  /// Get current branch name
  pub fn current_branch(&self) -> ShipResult<String> {
    let output = self
      .git_cmd()
      .args(["rev-parse", "--abbrev-ref", "HEAD"])
      .output()
      .context("Failed to get current branch")?;

    if !output.status.success() {
      return Ok("HEAD".to_string()); // Detached HEAD
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
  }

  /// Refresh cached stat information in the index
  ///
  /// First step of the release checklist. Exits non-zero when tracked files
  /// need update; that status is surfaced unchanged.
  pub fn refresh_index(&self) -> ShipResult<()> {
    let output = self
      .git_cmd()
      .args(["update-index", "--refresh"])
      .output()
      .context("Failed to run git update-index")?;

    if !output.status.success() {
      // update-index reports stale paths on stdout
      let mut report = String::from_utf8_lossy(&output.stdout).into_owned();
      report.push_str(&String::from_utf8_lossy(&output.stderr));
      return Err(ShipError::Git(GitError::StepFailed {
        command: "git update-index --refresh".to_string(),
        code: output.status.code(),
        output: report,
      }));
    }

    Ok(())
  }

  /// Verify the index and working tree match the current commit
  ///
  /// Second checklist step. Untracked files do not count as differences.
  pub fn verify_clean(&self) -> ShipResult<()> {
    let output = self
      .git_cmd()
      .args(["diff-index", "--quiet", "HEAD", "--"])
      .output()
      .context("Failed to run git diff-index")?;

    if !output.status.success() {
      return Err(ShipError::Git(GitError::DirtyWorkTree {
        code: output.status.code(),
      }));
    }

    Ok(())
  }

  /// Push the current branch to its configured upstream
  ///
  /// Final checklist step.
  pub fn push(&self) -> ShipResult<()> {
    let branch = self.current_branch()?;
    println!("   Pushing '{}'...", branch);

    let output = self
      .git_cmd()
      .arg("push")
      .output()
      .with_context(|| format!("Failed to push '{}'", branch))?;

    if !output.status.success() {
      let stderr = String::from_utf8_lossy(&output.stderr);
      return Err(ShipError::Git(GitError::PushFailed {
        branch,
        code: output.status.code(),
        reason: stderr.to_string(),
      }));
    }

    println!("   ✅ Pushed '{}'", branch);
    Ok(())
  }

  /// List files that differ from the current commit
  ///
  /// Untracked files are excluded, matching `verify_clean`.
  pub fn changed_files(&self) -> ShipResult<Vec<String>> {
    let output = self
      .git_cmd()
      .args(["status", "--porcelain", "--untracked-files=no"])
      .output()
      .context("Failed to run git status")?;

    if !output.status.success() {
      let stderr = String::from_utf8_lossy(&output.stderr);
      return Err(ShipError::Git(GitError::StepFailed {
        command: "git status --porcelain".to_string(),
        code: output.status.code(),
        output: stderr.to_string(),
      }));
    }

    Ok(parse_porcelain(&String::from_utf8_lossy(&output.stdout)))
  }

  /// Get the upstream ref of the current branch, if configured
  pub fn upstream(&self) -> ShipResult<Option<String>> {
    let output = self
      .git_cmd()
      .args(["rev-parse", "--abbrev-ref", "--symbolic-full-name", "@{upstream}"])
      .output()
      .context("Failed to resolve upstream")?;

    if !output.status.success() {
      return Ok(None);
    }

    Ok(Some(String::from_utf8_lossy(&output.stdout).trim().to_string()))
  }

  /// Count commits ahead of and behind an upstream ref
  pub fn ahead_behind(&self, upstream: &str) -> ShipResult<(u64, u64)> {
    let range = format!("{}...HEAD", upstream);
    let output = self
      .git_cmd()
      .args(["rev-list", "--left-right", "--count", &range])
      .output()
      .context("Failed to count ahead/behind commits")?;

    if !output.status.success() {
      let stderr = String::from_utf8_lossy(&output.stderr);
      return Err(ShipError::Git(GitError::StepFailed {
        command: "git rev-list --left-right --count".to_string(),
        code: output.status.code(),
        output: stderr.to_string(),
      }));
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    parse_counts(&stdout)
      .map(|(behind, ahead)| (ahead, behind))
      .ok_or_else(|| ShipError::message(format!("Unexpected rev-list output: {}", stdout.trim())))
  }

  /// Test whether a remote is reachable
  pub fn remote_reachable(&self, remote: &str) -> ShipResult<bool> {
    let output = self
      .git_cmd()
      .args(["ls-remote", "--heads", remote])
      .output()
      .context("Failed to run git ls-remote")?;

    Ok(output.status.success())
  }

  /// Create a safe git command with isolated environment
  ///
  /// - Sets working directory to repo path
  /// - Clears environment variables, whitelisting only PATH and HOME
  /// - Adds safe configuration overrides
  fn git_cmd(&self) -> Command {
    let mut cmd = Command::new("git");

    cmd.arg("-C").arg(&self.repo_path);

    cmd.env_clear();
    if let Ok(path) = std::env::var("PATH") {
      cmd.env("PATH", path);
    }
    if let Ok(home) = std::env::var("HOME") {
      cmd.env("HOME", home);
    }

    cmd.arg("-c").arg("protocol.version=2");
    cmd.arg("-c").arg("advice.detachedHead=false");
    cmd.arg("-c").arg("core.quotePath=false"); // Don't escape non-ASCII

    cmd
  }
}

/// Parse `git status --porcelain` output into changed paths
///
/// Rename entries ("R  old -> new") yield the new path.
fn parse_porcelain(s: &str) -> Vec<String> {
  s.lines()
    .filter(|line| line.len() > 3)
    .map(|line| {
      let path = &line[3..];
      match path.split_once(" -> ") {
        Some((_, new)) => new.to_string(),
        None => path.to_string(),
      }
    })
    .collect()
}

/// Parse `rev-list --left-right --count` output ("LEFT\tRIGHT")
fn parse_counts(s: &str) -> Option<(u64, u64)> {
  let mut parts = s.split_whitespace();
  let left = parts.next()?.parse().ok()?;
  let right = parts.next()?.parse().ok()?;
  Some((left, right))
}
