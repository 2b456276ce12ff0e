use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::error::ShipResult;
use crate::core::vcs::SystemGit;

/// Working tree state relative to HEAD
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TreeState {
  /// Index and working tree match HEAD
  Clean,
  /// Tracked files differ from HEAD
  Dirty { files: Vec<String> },
}

/// Sync state relative to the upstream branch
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncStatus {
  /// No upstream configured for the current branch
  NoUpstream,
  /// Up to date
  UpToDate,
  /// Ahead of upstream (N commits)
  Ahead { commits: u64 },
  /// Behind upstream (N commits)
  Behind { commits: u64 },
  /// Diverged (ahead and behind)
  Diverged { ahead: u64, behind: u64 },
}

/// Release-relevant git state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepoStatus {
  /// Current branch name ("HEAD" when detached)
  pub branch: String,

  /// HEAD commit SHA
  pub head: String,

  /// Working tree state
  pub tree: TreeState,

  /// Sync state against the upstream branch
  pub sync: SyncStatus,

  /// Upstream ref, if configured
  pub upstream: Option<String>,
}

impl RepoStatus {
  /// Whether `release` would pass its checklist from this state
  pub fn ready_to_release(&self) -> bool {
    matches!(self.tree, TreeState::Clean)
      && matches!(self.sync, SyncStatus::UpToDate | SyncStatus::Ahead { .. })
  }
}

/// Run the status command
pub fn run_status(workdir: &Path, json: bool) -> ShipResult<()> {
  let git = SystemGit::open(workdir)?;
  let status = collect_status(&git)?;

  if json {
    println!("{}", serde_json::to_string_pretty(&status)?);
  } else {
    print_status(&status);
  }

  Ok(())
}

/// Gather status from the git backend
fn collect_status(git: &SystemGit) -> ShipResult<RepoStatus> {
  let branch = git.current_branch()?;
  let head = git.head_commit()?;

  let files = git.changed_files()?;
  let tree = if files.is_empty() {
    TreeState::Clean
  } else {
    TreeState::Dirty { files }
  };

  let upstream = git.upstream()?;
  let sync = match &upstream {
    None => SyncStatus::NoUpstream,
    Some(upstream) => {
      let (ahead, behind) = git.ahead_behind(upstream)?;
      match (ahead, behind) {
        (0, 0) => SyncStatus::UpToDate,
        (a, 0) => SyncStatus::Ahead { commits: a },
        (0, b) => SyncStatus::Behind { commits: b },
        (a, b) => SyncStatus::Diverged { ahead: a, behind: b },
      }
    }
  };

  Ok(RepoStatus {
    branch,
    head,
    tree,
    sync,
    upstream,
  })
}

fn print_status(status: &RepoStatus) {
  let short_head = &status.head[..7.min(status.head.len())];
  println!("🌿 {} ({})", status.branch, short_head);

  match &status.tree {
    TreeState::Clean => println!("✅ working tree clean"),
    TreeState::Dirty { files } => {
      println!("⚠️  {} uncommitted change(s):", files.len());
      for file in files {
        println!("   • {}", file);
      }
    }
  }

  match &status.sync {
    SyncStatus::NoUpstream => println!("⚠️  no upstream configured"),
    SyncStatus::UpToDate => {
      if let Some(upstream) = &status.upstream {
        println!("🔁 up to date with {}", upstream);
      }
    }
    SyncStatus::Ahead { commits } => println!("⬆️  ahead by {} commit(s)", commits),
    SyncStatus::Behind { commits } => println!("⬇️  behind by {} commit(s)", commits),
    SyncStatus::Diverged { ahead, behind } => {
      println!("🔀 diverged: {} ahead, {} behind", ahead, behind);
    }
  }

  println!();
  if status.ready_to_release() {
    println!("Ready to release ✅");
  } else {
    println!("Not ready to release (see above)");
  }
}
