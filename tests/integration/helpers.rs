//! Test helpers for integration tests

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// A test repository with a bare upstream to push to
pub struct TestRepo {
  _root: TempDir,
  pub path: PathBuf,
  pub upstream: PathBuf,
}

impl TestRepo {
  /// Create a repository with one pushed commit and a configured upstream
  pub fn new() -> Result<Self> {
    let root = TempDir::new()?;
    let upstream = root.path().join("upstream.git");
    let path = root.path().join("work");

    git(root.path(), &["init", "--bare", "upstream.git"])?;

    std::fs::create_dir_all(&path)?;
    git(&path, &["init", "--initial-branch=main"])?;
    git(&path, &["config", "user.name", "Test User"])?;
    git(&path, &["config", "user.email", "test@example.com"])?;

    std::fs::write(path.join("README.md"), "# fixture\n")?;
    git(&path, &["add", "."])?;
    git(&path, &["commit", "-m", "Initial commit"])?;

    let upstream_str = upstream.to_str().context("non-utf8 temp path")?.to_string();
    git(&path, &["remote", "add", "origin", &upstream_str])?;
    git(&path, &["push", "-u", "origin", "main"])?;

    Ok(Self { _root: root, path, upstream })
  }

  /// Write a file in the work tree without committing it
  pub fn write_file(&self, name: &str, content: &str) -> Result<()> {
    std::fs::write(self.path.join(name), content)?;
    Ok(())
  }

  /// Commit all pending changes and return the commit SHA
  pub fn commit(&self, message: &str) -> Result<String> {
    git(&self.path, &["add", "."])?;
    git(&self.path, &["commit", "-m", message])?;

    let output = git(&self.path, &["rev-parse", "HEAD"])?;
    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
  }

  /// Commit SHA at the tip of the upstream branch
  pub fn upstream_head(&self) -> Result<String> {
    let output = git(&self.upstream, &["rev-parse", "main"])?;
    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
  }

  /// Drop a stub packaging tool into the fixture and return its path
  ///
  /// The stub appends each argument of an invocation to `tool-args.log`,
  /// one per line, and exits with the given code.
  #[cfg(unix)]
  pub fn stub_tool(&self, exit_code: i32) -> Result<PathBuf> {
    use std::os::unix::fs::PermissionsExt;

    let log = self.path.join("tool-args.log");
    let stub = self.path.join("stub-tool.sh");
    let script = format!(
      "#!/bin/sh\nfor arg in \"$@\"; do printf '%s\\n' \"$arg\" >> '{}'; done\nexit {}\n",
      log.display(),
      exit_code,
    );
    std::fs::write(&stub, script)?;
    std::fs::set_permissions(&stub, std::fs::Permissions::from_mode(0o755))?;
    Ok(stub)
  }

  /// Arguments recorded by the stub tool, one per line across invocations
  pub fn stub_args(&self) -> Result<Vec<String>> {
    let log = self.path.join("tool-args.log");
    if !log.exists() {
      return Ok(vec![]);
    }
    Ok(std::fs::read_to_string(log)?.lines().map(String::from).collect())
  }
}

/// Run a git command in a directory
pub fn git(cwd: &Path, args: &[&str]) -> Result<Output> {
  let output = Command::new("git")
    .current_dir(cwd)
    .args(args)
    .output()
    .context("Failed to run git command")?;

  if !output.status.success() {
    let stderr = String::from_utf8_lossy(&output.stderr);
    anyhow::bail!("Git command failed: git {}\n{}", args.join(" "), stderr);
  }

  Ok(output)
}

/// Run the shipgate binary, returning output regardless of exit status
pub fn run_shipgate(cwd: &Path, args: &[&str]) -> Result<Output> {
  let bin = env!("CARGO_BIN_EXE_shipgate");

  Command::new(bin)
    .current_dir(cwd)
    .args(args)
    .output()
    .context("Failed to run shipgate")
}

/// Run shipgate and bail if it exits non-zero
pub fn run_shipgate_ok(cwd: &Path, args: &[&str]) -> Result<Output> {
  let output = run_shipgate(cwd, args)?;

  if !output.status.success() {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let stdout = String::from_utf8_lossy(&output.stdout);
    anyhow::bail!(
      "shipgate command failed: shipgate {}\nstdout: {}\nstderr: {}",
      args.join(" "),
      stdout,
      stderr
    );
  }

  Ok(output)
}
