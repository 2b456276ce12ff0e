//! Forward unrecognized targets to the packaging tool

use crate::core::error::ShipResult;
use crate::core::tool::PackagingTool;
use std::ffi::OsString;

/// Hand the target (and any trailing arguments) to the tool verbatim
///
/// Exactly one subprocess invocation; the dispatcher's exit status ends up
/// equal to the tool's.
pub fn run_forward(tool: &PackagingTool, args: &[OsString]) -> ShipResult<()> {
  tool.forward(args)
}
