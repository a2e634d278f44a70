//! SDK install health checks.
//!
//! `aklink doctor` resolves a plan and then verifies that the SDK install
//! actually holds what the plan will ask the linker for.
//!
//! ## Checks Performed
//!
//! - SDK headers present under the include directory
//! - Every SDK library of the plan present in every library directory
//! - Optional add-ons (reported, never required)

use std::fmt::Write;
use std::path::PathBuf;

use crate::core::plan::LinkagePlan;
use crate::resolver::layout;
use crate::resolver::ArtifactProbe;

/// Header every SDK install ships.
pub const SENTINEL_HEADER: &str = "AK/SoundEngine/Common/AkSoundEngine.h";

/// Result of a single health check.
#[derive(Debug, Clone)]
pub struct CheckResult {
    /// Name of the check
    pub name: String,

    /// Whether the check passed
    pub passed: bool,

    /// Human-readable status message
    pub message: String,

    /// Path the check looked at
    pub path: Option<PathBuf>,

    /// Whether this check is required or optional
    pub required: bool,
}

impl CheckResult {
    /// Create a passing check result.
    pub fn pass(name: impl Into<String>, message: impl Into<String>) -> Self {
        CheckResult {
            name: name.into(),
            passed: true,
            message: message.into(),
            path: None,
            required: true,
        }
    }

    /// Create a failing check result.
    pub fn fail(name: impl Into<String>, message: impl Into<String>) -> Self {
        CheckResult {
            passed: false,
            ..CheckResult::pass(name, message)
        }
    }

    /// Mark this check as optional.
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Set the inspected path.
    pub fn with_path(mut self, path: PathBuf) -> Self {
        self.path = Some(path);
        self
    }
}

/// Summary of all health checks.
#[derive(Debug, Clone, Default)]
pub struct DoctorReport {
    pub checks: Vec<CheckResult>,
}

impl DoctorReport {
    pub fn new() -> Self {
        DoctorReport::default()
    }

    pub fn add(&mut self, check: CheckResult) {
        self.checks.push(check);
    }

    /// Check if all required checks passed.
    pub fn all_required_passed(&self) -> bool {
        self.checks.iter().filter(|c| c.required).all(|c| c.passed)
    }

    pub fn passed_count(&self) -> usize {
        self.checks.iter().filter(|c| c.passed).count()
    }

    pub fn failed_count(&self) -> usize {
        self.checks.iter().filter(|c| !c.passed).count()
    }

    pub fn required_failed_count(&self) -> usize {
        self.checks
            .iter()
            .filter(|c| c.required && !c.passed)
            .count()
    }
}

/// SDK libraries of the plan, leaving out platform system libraries.
fn sdk_libraries(plan: &LinkagePlan) -> Vec<&str> {
    let system = layout::platform_extras(plan.platform).libraries;
    let addons: Vec<&str> = plan.addons.iter().map(|a| a.name.as_str()).collect();
    plan.libraries
        .iter()
        .map(String::as_str)
        .filter(|name| !system.contains(name) && !addons.contains(name))
        .collect()
}

/// Run all checks for a resolved plan.
pub fn doctor(plan: &LinkagePlan, probe: &dyn ArtifactProbe) -> DoctorReport {
    let mut report = DoctorReport::new();

    for include_dir in &plan.include_dirs {
        let header = include_dir.join(SENTINEL_HEADER);
        let check = if probe.exists(&header) {
            CheckResult::pass("SDK headers", "found")
        } else {
            CheckResult::fail("SDK headers", format!("missing {}", SENTINEL_HEADER))
        };
        report.add(check.with_path(header));
    }

    let libraries = sdk_libraries(plan);
    for dir in &plan.lib_dirs {
        let missing: Vec<&str> = libraries
            .iter()
            .copied()
            .filter(|name| !probe.exists(&plan.artifact_style.artifact_path(dir, name)))
            .collect();

        let name = format!("libraries in {}", dir.display());
        let check = if missing.is_empty() {
            CheckResult::pass(name, format!("{} libraries found", libraries.len()))
        } else {
            CheckResult::fail(
                name,
                format!(
                    "{} of {} missing: {}",
                    missing.len(),
                    libraries.len(),
                    missing.join(", ")
                ),
            )
        };
        report.add(check.with_path(dir.clone()));
    }

    for addon in &plan.addons {
        let name = format!("add-on {}", addon.name);
        let check = match &addon.artifact {
            Some(path) => CheckResult::pass(name, "installed").with_path(path.clone()),
            None => CheckResult::fail(name, "not installed"),
        };
        report.add(check.optional());
    }

    report
}

/// Format the doctor report for display.
pub fn format_report(report: &DoctorReport, verbose: bool) -> String {
    let mut output = String::new();

    // Writing to a String cannot fail.
    let _ = writeln!(output, "Checks:");
    for check in &report.checks {
        let status = if check.passed { "[OK]" } else { "[!!]" };
        let required = if check.required { "" } else { " (optional)" };
        let _ = writeln!(output, "  {} {}{}", status, check.name, required);

        if verbose || (!check.passed && check.required) {
            let _ = writeln!(output, "      {}", check.message);
            if let Some(path) = &check.path {
                let _ = writeln!(output, "      Path: {}", path.display());
            }
        }
    }

    let _ = writeln!(
        output,
        "\nSummary: {} passed, {} failed",
        report.passed_count(),
        report.failed_count()
    );

    let required_failed = report.required_failed_count();
    if required_failed > 0 {
        let _ = writeln!(
            output,
            "{} required check(s) failed. The plan will not link against this SDK install.",
            required_failed
        );
    } else {
        let _ = writeln!(output, "All required checks passed.");
    }

    output
}
