//! Version control backend
//!
//! Uses system git exclusively (zero crate dependencies). Every operation is
//! a blocking subprocess wait.

mod system_git;

pub use system_git::SystemGit;
