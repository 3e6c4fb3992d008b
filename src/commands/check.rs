//! `registrar check`

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;

use registrar::application::{CheckResult, CheckUseCase};
use registrar::infrastructure::JsonSchoolRepository;

pub fn cmd_check(data_file: &Path, repair: bool) -> Result<()> {
    let repository = Arc::new(JsonSchoolRepository::new(data_file));
    let result = CheckUseCase::new(repository).execute(repair)?;
    print!("{}", render(data_file, &result));
    Ok(())
}

fn render(data_file: &Path, result: &CheckResult) -> String {
    let summary = &result.summary;
    let mut out = String::new();
    out.push_str(&format!("Store: {}\n", data_file.display()));
    out.push_str(&format!(
        "Users: {} (instructors: {}, learners: {}, unassigned: {})\n",
        summary.instructors + summary.learners + summary.unassigned,
        summary.instructors,
        summary.learners,
        summary.unassigned
    ));
    out.push_str(&format!("Courses: {}\n", summary.courses));
    out.push_str(&format!("Assignments: {}\n", summary.assignments));
    out.push_str(&format!("Submissions: {}\n", summary.submissions));
    out.push_str(&format!("Relinked registrations: {}\n", result.report.relinked));

    if result.report.is_clean() {
        out.push_str("Reconcile: clean\n");
        return out;
    }

    out.push_str(&format!(
        "Reconcile: {} issue(s)\n",
        result.report.issues.len()
    ));
    for issue in &result.report.issues {
        out.push_str(&format!("  - {issue}\n"));
    }
    if result.repaired {
        out.push_str("Repaired: reconciled store written\n");
    } else {
        out.push_str("Run with --repair to write the reconciled store.\n");
    }
    out
}
