//! Check use case
//!
//! Loads the store, reconciles it, and summarizes what is there. With `repair`
//! the reconciled school is written back, which drops whatever the report lists.

use std::sync::Arc;

use crate::domain::entities::{ReconcileReport, Role, School};
use crate::domain::ports::SchoolRepository;
use crate::error::RegistrarResult;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreSummary {
    pub instructors: usize,
    pub learners: usize,
    pub unassigned: usize,
    pub courses: usize,
    pub assignments: usize,
    pub submissions: usize,
}

impl StoreSummary {
    pub fn of(school: &School) -> Self {
        let mut summary = Self::default();
        for user in school.users() {
            match user.role() {
                Role::Instructor(_) => summary.instructors += 1,
                Role::Learner(_) => summary.learners += 1,
                Role::Unassigned => summary.unassigned += 1,
            }
        }
        for course in school.courses() {
            summary.courses += 1;
            summary.assignments += course.assignments().len();
            summary.submissions += course
                .assignments()
                .iter()
                .map(|a| a.submissions().len())
                .sum::<usize>();
        }
        summary
    }
}

#[derive(Debug, Clone)]
pub struct CheckResult {
    pub summary: StoreSummary,
    pub report: ReconcileReport,
    /// True when the reconciled document was written back
    pub repaired: bool,
}

pub struct CheckUseCase {
    repository: Arc<dyn SchoolRepository>,
}

impl CheckUseCase {
    pub fn new(repository: Arc<dyn SchoolRepository>) -> Self {
        Self { repository }
    }

    pub fn execute(&self, repair: bool) -> RegistrarResult<CheckResult> {
        let (school, report) = School::restore(self.repository.load()?);
        let summary = StoreSummary::of(&school);

        let repaired = repair && !report.is_clean();
        if repaired {
            self.repository.save(&school.snapshot())?;
            tracing::debug!(issues = report.issues.len(), "store repaired");
        }

        Ok(CheckResult {
            summary,
            report,
            repaired,
        })
    }
}
