//! Course entity

use crate::domain::value_objects::{CourseCode, UserId};

use super::Assignment;

/// Points an assignment is worth in the grade report
pub const POINTS_PER_ASSIGNMENT: i64 = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    name: String,
    code: CourseCode,
    owner: UserId,
    enrolled: Vec<UserId>,
    assignments: Vec<Assignment>,
}

/// One learner's standing in one course.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CourseTotals {
    /// Assignments in the course, submitted or not
    pub assignment_count: usize,
    pub earned: i64,
    /// 100 per assignment the learner submitted
    pub possible: i64,
}

impl Course {
    pub fn new(name: impl Into<String>, code: impl Into<CourseCode>, owner: UserId) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
            owner,
            enrolled: Vec::new(),
            assignments: Vec::new(),
        }
    }

    pub(crate) fn with_assignments(mut self, assignments: Vec<Assignment>) -> Self {
        self.assignments = assignments;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn code(&self) -> &CourseCode {
        &self.code
    }

    /// Id of the instructor that created the course
    pub fn owner(&self) -> UserId {
        self.owner
    }

    /// Enrolled learner ids, in enrollment order
    pub fn enrolled(&self) -> &[UserId] {
        &self.enrolled
    }

    pub fn is_enrolled(&self, learner: UserId) -> bool {
        self.enrolled.contains(&learner)
    }

    /// Returns `false` if the learner was already enrolled.
    pub fn enroll(&mut self, learner: UserId) -> bool {
        if self.is_enrolled(learner) {
            return false;
        }
        self.enrolled.push(learner);
        true
    }

    /// Returns `false` if the learner was not enrolled.
    pub fn unenroll(&mut self, learner: UserId) -> bool {
        let len_before = self.enrolled.len();
        self.enrolled.retain(|id| *id != learner);
        self.enrolled.len() != len_before
    }

    /// Reorder the roster to follow `preferred`, then any remaining members.
    /// Returns the ids in `preferred` that are not enrolled.
    pub(crate) fn align_roster(&mut self, preferred: &[UserId]) -> Vec<UserId> {
        let mut ordered = Vec::with_capacity(self.enrolled.len());
        let mut stale = Vec::new();
        for id in preferred {
            if !self.enrolled.contains(id) {
                if !stale.contains(id) {
                    stale.push(*id);
                }
            } else if !ordered.contains(id) {
                ordered.push(*id);
            }
        }
        for id in &self.enrolled {
            if !ordered.contains(id) {
                ordered.push(*id);
            }
        }
        self.enrolled = ordered;
        stale
    }

    pub fn add_assignment(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        deadline: impl Into<String>,
    ) -> &Assignment {
        let index = self.assignments.len();
        self.assignments
            .push(Assignment::new(title, description, deadline));
        &self.assignments[index]
    }

    /// Assignments in creation order
    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    pub fn assignment(&self, index: usize) -> Option<&Assignment> {
        self.assignments.get(index)
    }

    pub(crate) fn assignment_mut(&mut self, index: usize) -> Option<&mut Assignment> {
        self.assignments.get_mut(index)
    }

    /// Totals for one learner.
    ///
    /// Only submitted assignments count toward `possible`; an ungraded
    /// submission adds 100 possible and 0 earned.
    pub fn totals_for(&self, learner: UserId) -> CourseTotals {
        let mut totals = CourseTotals {
            assignment_count: self.assignments.len(),
            earned: 0,
            possible: 0,
        };
        for submission in self
            .assignments
            .iter()
            .filter_map(|a| a.submission_for(learner))
        {
            totals.earned = totals.earned.saturating_add(submission.grade().unwrap_or(0));
            totals.possible = totals.possible.saturating_add(POINTS_PER_ASSIGNMENT);
        }
        totals
    }
}
