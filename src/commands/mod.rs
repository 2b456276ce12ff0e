//! CLI commands for shipgate
//!
//! - **help**: print the one-line usage summary
//! - **ensure-git**: refresh the index, verify a clean tree, push the branch
//! - **release**: run ensure-git, then the packaging tool's upload step
//! - **status**: show branch, HEAD, dirty state and upstream sync
//! - **doctor**: run health checks and validation
//! - any other target: forwarded verbatim to the packaging tool

pub mod doctor;
pub mod ensure_git;
pub mod forward;
pub mod help;
pub mod release;
pub mod status;

pub use doctor::run_doctor;
pub use ensure_git::run_ensure_git;
pub use forward::run_forward;
pub use help::run_help;
pub use release::run_release;
pub use status::run_status;
