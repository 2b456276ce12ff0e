//! Fixed usage summary

use crate::core::error::ShipResult;

/// The one-line usage text
pub const USAGE: &str = "usage: shipgate <target>  (release | ensure-git | status | doctor | help | any packaging-tool target)";

/// Print the usage line. Always succeeds, no side effects.
pub fn run_help() -> ShipResult<()> {
  println!("{}", USAGE);
  Ok(())
}
