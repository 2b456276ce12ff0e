//! Core building blocks: error types, the git backend, and the packaging
//! tool seam.

pub mod error;
pub mod tool;
pub mod vcs;
