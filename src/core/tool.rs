//! Packaging tool seam
//!
//! All real build and upload work is delegated to an external tool invoked as
//! an opaque subprocess. The dispatcher only forwards target names verbatim
//! and propagates exit codes; it never inspects or interprets the tool's
//! output.

use crate::core::error::{ShipError, ShipResult, ToolError};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Default packaging tool binary
pub const DEFAULT_TOOL: &str = "cargo";

/// Tool target that performs the upload step of a release
pub const UPLOAD_TARGET: &str = "publish";

/// Handle to the external packaging tool
pub struct PackagingTool {
  program: String,
  workdir: PathBuf,
}

impl PackagingTool {
  pub fn new(program: impl Into<String>, workdir: &Path) -> Self {
    Self {
      program: program.into(),
      workdir: workdir.to_path_buf(),
    }
  }

  /// The tool binary this handle invokes
  pub fn program(&self) -> &str {
    &self.program
  }

  /// Forward target arguments verbatim to the tool
  ///
  /// Arguments are passed through unmodified and unsplit, one argv entry
  /// each. The child inherits stdio so the tool's own output reaches the
  /// user directly.
  pub fn forward(&self, args: &[OsString]) -> ShipResult<()> {
    let status = Command::new(&self.program)
      .current_dir(&self.workdir)
      .args(args)
      .status()
      .map_err(|e| {
        ShipError::Tool(ToolError::Spawn {
          program: self.program.clone(),
          source: e,
        })
      })?;

    if !status.success() {
      let target = args
        .first()
        .map(|a| a.to_string_lossy().into_owned())
        .unwrap_or_default();
      return Err(ShipError::Tool(ToolError::TargetFailed {
        program: self.program.clone(),
        target,
        code: status.code(),
      }));
    }

    Ok(())
  }

  /// Run the tool's upload step
  pub fn upload(&self) -> ShipResult<()> {
    self.forward(&[OsString::from(UPLOAD_TARGET)])
  }
}
