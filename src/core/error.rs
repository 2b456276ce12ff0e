//! Error types for shipgate with contextual messages and exit codes
//!
//! Failures split into two domains. Dispatcher-level failures (bad
//! invocation, not a repository, I/O) use the fixed codes below. Failures of
//! delegated subprocesses carry the child's own exit status, which
//! `exit_code()` propagates to the caller unchanged.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Exit codes for dispatcher-level failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
  /// User error (invalid invocation, not a git repository)
  User = 1,
  /// System error (spawn failures, I/O)
  System = 2,
  /// Validation failure (doctor checks failed)
  Validation = 3,
}

impl ExitCode {
  /// Convert to i32 for process exit
  pub fn as_i32(self) -> i32 {
    self as i32
  }
}

/// Exit code reported for a tool binary that cannot be found (shell convention)
const NOT_FOUND_CODE: i32 = 127;

/// Main error type for shipgate
#[derive(Debug)]
pub enum ShipError {
  /// Git step errors
  Git(GitError),

  /// Packaging tool errors
  Tool(ToolError),

  /// I/O errors
  Io(io::Error),

  /// Generic error with message and optional context
  Message {
    message: String,
    context: Option<String>,
    help: Option<String>,
  },
}

impl ShipError {
  /// Create a simple error message
  pub fn message(msg: impl Into<String>) -> Self {
    ShipError::Message {
      message: msg.into(),
      context: None,
      help: None,
    }
  }

  /// Create an error with help text
  #[allow(dead_code)]
  pub fn with_help(msg: impl Into<String>, help: impl Into<String>) -> Self {
    ShipError::Message {
      message: msg.into(),
      context: None,
      help: Some(help.into()),
    }
  }

  /// Add context to an existing error
  pub fn context(self, ctx: impl Into<String>) -> Self {
    let ctx_str = ctx.into();
    match self {
      ShipError::Message { message, context, help } => ShipError::Message {
        message,
        context: Some(context.map(|c| format!("{}\n{}", ctx_str, c)).unwrap_or(ctx_str)),
        help,
      },
      _ => self,
    }
  }

  /// Get the process exit code for this error
  pub fn exit_code(&self) -> i32 {
    match self {
      ShipError::Git(e) => e.exit_code(),
      ShipError::Tool(e) => e.exit_code(),
      ShipError::Io(_) => ExitCode::System.as_i32(),
      ShipError::Message { .. } => ExitCode::User.as_i32(),
    }
  }

  /// Get contextual help message for this error
  pub fn help_message(&self) -> Option<String> {
    match self {
      ShipError::Git(e) => e.help_message(),
      ShipError::Tool(e) => e.help_message(),
      ShipError::Message { help, .. } => help.clone(),
      _ => None,
    }
  }
}

impl fmt::Display for ShipError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ShipError::Git(e) => write!(f, "{}", e),
      ShipError::Tool(e) => write!(f, "{}", e),
      ShipError::Io(e) => write!(f, "I/O error: {}", e),
      ShipError::Message { message, context, .. } => {
        write!(f, "{}", message)?;
        if let Some(ctx) = context {
          write!(f, "\n{}", ctx)?;
        }
        Ok(())
      }
    }
  }
}

impl std::error::Error for ShipError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      ShipError::Io(e) => Some(e),
      ShipError::Tool(ToolError::Spawn { source, .. }) => Some(source),
      _ => None,
    }
  }
}

impl From<io::Error> for ShipError {
  fn from(err: io::Error) -> Self {
    ShipError::Io(err)
  }
}

impl From<String> for ShipError {
  fn from(msg: String) -> Self {
    ShipError::message(msg)
  }
}

impl From<&str> for ShipError {
  fn from(msg: &str) -> Self {
    ShipError::message(msg)
  }
}

impl From<serde_json::Error> for ShipError {
  fn from(err: serde_json::Error) -> Self {
    ShipError::message(format!("JSON error: {}", err))
  }
}

impl From<anyhow::Error> for ShipError {
  fn from(err: anyhow::Error) -> Self {
    ShipError::message(err.to_string())
  }
}

/// Git step errors
#[derive(Debug)]
pub enum GitError {
  /// A git step exited non-zero
  StepFailed {
    command: String,
    code: Option<i32>,
    output: String,
  },

  /// Working tree or index differs from the current commit
  DirtyWorkTree { code: Option<i32> },

  /// Repository not found
  RepoNotFound { path: PathBuf },

  /// Push failed
  PushFailed {
    branch: String,
    code: Option<i32>,
    reason: String,
  },
}

impl GitError {
  fn exit_code(&self) -> i32 {
    match self {
      GitError::StepFailed { code, .. } => code.unwrap_or(ExitCode::System.as_i32()),
      GitError::DirtyWorkTree { code } => code.unwrap_or(ExitCode::User.as_i32()),
      GitError::RepoNotFound { .. } => ExitCode::User.as_i32(),
      GitError::PushFailed { code, .. } => code.unwrap_or(ExitCode::System.as_i32()),
    }
  }

  fn help_message(&self) -> Option<String> {
    match self {
      GitError::DirtyWorkTree { .. } => {
        Some("Commit or stash your changes, then re-run `shipgate ensure-git`.".to_string())
      }
      GitError::RepoNotFound { path } => Some(format!(
        "Run shipgate from inside a git repository (checked: {}).",
        path.display()
      )),
      GitError::PushFailed { reason, .. } => {
        if reason.contains("no upstream branch") || reason.contains("--set-upstream") {
          Some("Set an upstream first: git push -u <remote> <branch>".to_string())
        } else if reason.contains("non-fast-forward") {
          Some("The remote has commits you don't have. Pull first, then re-run.".to_string())
        } else if reason.contains("permission denied") || reason.contains("403") {
          Some("Check your credentials and remote access. Run `shipgate doctor --thorough` to diagnose.".to_string())
        } else {
          None
        }
      }
      _ => None,
    }
  }
}

impl fmt::Display for GitError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      GitError::StepFailed { command, output, .. } => {
        write!(f, "Git step failed: {}", command)?;
        if !output.trim().is_empty() {
          write!(f, "\n{}", output.trim_end())?;
        }
        Ok(())
      }
      GitError::DirtyWorkTree { .. } => {
        write!(f, "Working tree has uncommitted changes (differs from HEAD)")
      }
      GitError::RepoNotFound { path } => {
        write!(f, "Git repository not found at: {}", path.display())
      }
      GitError::PushFailed { branch, reason, .. } => {
        write!(f, "Push of '{}' failed: {}", branch, reason.trim_end())
      }
    }
  }
}

/// Packaging tool errors
#[derive(Debug)]
pub enum ToolError {
  /// The tool binary could not be started at all
  Spawn { program: String, source: io::Error },

  /// The tool ran a target and exited non-zero
  TargetFailed {
    program: String,
    target: String,
    code: Option<i32>,
  },
}

impl ToolError {
  fn exit_code(&self) -> i32 {
    match self {
      ToolError::Spawn { source, .. } => {
        if source.kind() == io::ErrorKind::NotFound {
          NOT_FOUND_CODE
        } else {
          ExitCode::System.as_i32()
        }
      }
      ToolError::TargetFailed { code, .. } => code.unwrap_or(ExitCode::System.as_i32()),
    }
  }

  fn help_message(&self) -> Option<String> {
    match self {
      ToolError::Spawn { program, source } if source.kind() == io::ErrorKind::NotFound => Some(format!(
        "Install '{}' or point --tool at the right binary.",
        program
      )),
      _ => None,
    }
  }
}

impl fmt::Display for ToolError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ToolError::Spawn { program, source } => {
        write!(f, "Failed to run '{}': {}", program, source)
      }
      ToolError::TargetFailed { program, target, code } => match code {
        Some(code) => write!(f, "'{} {}' exited with status {}", program, target, code),
        None => write!(f, "'{} {}' was terminated by a signal", program, target),
      },
    }
  }
}

/// Result type alias for shipgate
pub type ShipResult<T> = Result<T, ShipError>;

/// Helper trait to add context to Results
pub trait ResultExt<T> {
  /// Add context to an error result
  fn context(self, ctx: impl Into<String>) -> ShipResult<T>;

  /// Add context using a closure (lazy evaluation)
  fn with_context<F>(self, f: F) -> ShipResult<T>
  where
    F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
  E: Into<ShipError>,
{
  fn context(self, ctx: impl Into<String>) -> ShipResult<T> {
    self.map_err(|e| e.into().context(ctx))
  }

  fn with_context<F>(self, f: F) -> ShipResult<T>
  where
    F: FnOnce() -> String,
  {
    self.map_err(|e| e.into().context(f()))
  }
}

/// Pretty-print an error to stderr with help text
pub fn print_error(error: &ShipError) {
  eprintln!("\n❌ {}\n", error);

  if let Some(help) = error.help_message() {
    eprintln!("💡 Help: {}\n", help);
  }
}
