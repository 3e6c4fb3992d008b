//! Assignment and Submission entities

use std::collections::BTreeMap;

use crate::domain::value_objects::UserId;

/// One learner's work for one assignment, plus its grading outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    content: String,
    grade: Option<i64>,
    comments: Option<String>,
}

impl Submission {
    /// A fresh, ungraded submission
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            grade: None,
            comments: None,
        }
    }

    /// Rebuild a submission from stored parts
    pub fn with_parts(content: impl Into<String>, grade: Option<i64>, comments: Option<String>) -> Self {
        Self {
            content: content.into(),
            grade,
            comments,
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Grade, if any. Nominally 0..=100 but not range-checked.
    pub fn grade(&self) -> Option<i64> {
        self.grade
    }

    pub fn comments(&self) -> Option<&str> {
        self.comments.as_deref()
    }

    pub fn is_graded(&self) -> bool {
        self.grade.is_some()
    }
}

/// A gradable unit of a course. Holds at most one submission per learner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    title: String,
    description: String,
    deadline: String,
    submissions: BTreeMap<UserId, Submission>,
}

impl Assignment {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        deadline: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            deadline: deadline.into(),
            submissions: BTreeMap::new(),
        }
    }

    pub fn with_submissions(mut self, submissions: BTreeMap<UserId, Submission>) -> Self {
        self.submissions = submissions;
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Free-form due date, as typed by the instructor
    pub fn deadline(&self) -> &str {
        &self.deadline
    }

    pub fn submissions(&self) -> &BTreeMap<UserId, Submission> {
        &self.submissions
    }

    pub fn submission_for(&self, learner: UserId) -> Option<&Submission> {
        self.submissions.get(&learner)
    }

    /// Insert or overwrite the learner's submission. Grade and comments reset.
    pub fn submit(&mut self, learner: UserId, content: impl Into<String>) {
        self.submissions.insert(learner, Submission::new(content));
    }

    /// Set grade and comments on an existing submission.
    ///
    /// Returns `false` and changes nothing when the learner has not submitted.
    pub fn grade(&mut self, learner: UserId, grade: i64, comments: impl Into<String>) -> bool {
        let Some(submission) = self.submissions.get_mut(&learner) else {
            tracing::warn!(
                assignment = %self.title,
                learner = %learner,
                "grade ignored: no submission"
            );
            return false;
        };
        submission.grade = Some(grade);
        submission.comments = Some(comments.into());
        true
    }

    /// Set only the grade. Same no-op rule as [`Assignment::grade`].
    pub fn set_grade(&mut self, learner: UserId, grade: i64) -> bool {
        let Some(submission) = self.submissions.get_mut(&learner) else {
            tracing::warn!(
                assignment = %self.title,
                learner = %learner,
                "grade ignored: no submission"
            );
            return false;
        };
        submission.grade = Some(grade);
        true
    }

    /// Set only the comments. Same no-op rule as [`Assignment::grade`].
    pub fn set_comments(&mut self, learner: UserId, comments: impl Into<String>) -> bool {
        let Some(submission) = self.submissions.get_mut(&learner) else {
            tracing::warn!(
                assignment = %self.title,
                learner = %learner,
                "comment ignored: no submission"
            );
            return false;
        };
        submission.comments = Some(comments.into());
        true
    }
}
