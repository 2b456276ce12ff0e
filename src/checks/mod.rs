//! Health checks and validation infrastructure
//!
//! All checks implement the `Check` trait and are run in batch by the
//! `CheckRunner`. Built-in checks:
//!
//! - **git-binary**: system git is present and runnable
//! - **tool-binary**: the packaging tool is present and runnable
//! - **repository**: inside a work tree with a resolvable HEAD and upstream
//! - **clean-worktree**: working tree matches HEAD
//! - **remote-access**: upstream remote reachable (thorough mode only)

mod remote;
mod repo;
mod runner;
mod tooling;
mod trait_def;
mod worktree;

// Re-export public API
pub use runner::create_default_runner;
pub use trait_def::{CheckContext, Severity};

// Individual checks are not exported - they're registered in create_default_runner()
