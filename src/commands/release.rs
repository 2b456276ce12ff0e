//! Release command: git checklist, then the delegated upload
//!
//! If any checklist step fails the upload is never attempted.

use crate::commands::ensure_git::run_ensure_git;
use crate::core::error::ShipResult;
use crate::core::tool::{PackagingTool, UPLOAD_TARGET};
use std::path::Path;

/// Run `ensure-git` to completion, then the packaging tool's upload step
pub fn run_release(workdir: &Path, tool: &PackagingTool) -> ShipResult<()> {
  run_ensure_git(workdir)?;

  println!("📦 Uploading via '{} {}'...", tool.program(), UPLOAD_TARGET);
  tool.upload()?;

  println!("✅ Release uploaded");
  Ok(())
}
