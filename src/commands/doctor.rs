//! Health check command for diagnosing issues
//!
//! Runs all registered checks and reports what it finds. Blocking failures
//! exit with the validation code.

use std::path::Path;

use crate::checks::{CheckContext, Severity, create_default_runner};
use crate::core::error::{ExitCode, ShipError, ShipResult};

/// Run the doctor command
pub fn run_doctor(workdir: &Path, tool: &str, thorough: bool, json: bool) -> ShipResult<()> {
  let ctx = CheckContext {
    workdir: workdir.to_path_buf(),
    tool: tool.to_string(),
    thorough,
  };

  let runner = create_default_runner();
  let results = runner.run_all(&ctx)?;

  if json {
    // JSON output for CI/automation
    let json_output = serde_json::to_string_pretty(&results)
      .map_err(|e| ShipError::message(format!("Failed to serialize JSON: {}", e)))?;
    println!("{}", json_output);

    if results.iter().any(|r| !r.passed && r.severity == Severity::Error) {
      std::process::exit(ExitCode::Validation.as_i32());
    }
  } else {
    println!("🏥 Running health checks...\n");

    println!("📋 Registered checks:");
    for check in runner.checks() {
      println!("   • {}: {}", check.name(), check.description());
    }
    println!();

    let mut has_errors = false;
    let mut has_warnings = false;

    for result in &results {
      let icon = if result.passed { "✅" } else { "❌" };
      println!("{} {}: {}", icon, result.check_name, result.message);

      if !result.passed {
        if let Some(ref suggestion) = result.suggestion {
          println!("   💡 Fix: {}", suggestion);
        }

        match result.severity {
          Severity::Error => has_errors = true,
          Severity::Warning => has_warnings = true,
          _ => {}
        }
      }
    }

    // Summary
    let passed_count = results.iter().filter(|r| r.passed).count();
    let total_count = results.len();

    println!();
    println!("Summary: {}/{} checks passed", passed_count, total_count);

    if has_errors {
      println!("\n⚠️  Critical issues found. Fix errors before releasing.");
      std::process::exit(ExitCode::Validation.as_i32());
    } else if has_warnings {
      println!("\n⚠️  Some warnings found. Consider addressing them.");
    } else {
      println!("\n✨ All checks passed. Ready to ship.");
    }
  }

  Ok(())
}
