//! School entity
//!
//! The in-memory arena holding every identity and course. Identities are keyed
//! by [`UserId`], courses by [`CourseCode`]. The learner↔course relation is
//! stored twice (learner profile code list, course enrolled id list) and every
//! mutation here updates both sides in the same call.

use std::collections::BTreeMap;

use crate::domain::value_objects::{is_valid_email, CourseCode, UserId};
use crate::error::{RegistrarError, RegistrarResult};

use super::{AccountKind, Course, CourseTotals, Identity, Role};

mod restore;

pub use restore::{ReconcileIssue, ReconcileReport};

/// Sign-up form, as collected by the front end.
#[derive(Debug, Clone)]
pub struct SignUp<'a> {
    pub kind: AccountKind,
    pub username: &'a str,
    pub password: &'a str,
    pub full_name: &'a str,
    pub email: &'a str,
}

/// One row of a learner's grade report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradeReportEntry {
    pub code: CourseCode,
    pub totals: CourseTotals,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct School {
    users: BTreeMap<UserId, Identity>,
    courses: BTreeMap<CourseCode, Course>,
}

impl School {
    pub fn new() -> Self {
        Self::default()
    }

    // ============================================================
    // Identities
    // ============================================================

    /// All identities in id order
    pub fn users(&self) -> impl Iterator<Item = &Identity> {
        self.users.values()
    }

    pub fn user(&self, id: UserId) -> Option<&Identity> {
        self.users.get(&id)
    }

    pub fn find_by_username(&self, username: &str) -> Option<&Identity> {
        self.users.values().find(|u| u.username() == username)
    }

    /// Id the next sign-up will receive
    pub fn next_user_id(&self) -> RegistrarResult<UserId> {
        match self.users.keys().next_back() {
            None => Ok(UserId::FIRST),
            Some(last) => last.next().ok_or(RegistrarError::IdSpaceExhausted { last: *last }),
        }
    }

    pub fn sign_up(&mut self, form: SignUp<'_>) -> RegistrarResult<UserId> {
        if !is_valid_email(form.email) {
            return Err(RegistrarError::InvalidEmail {
                email: form.email.to_string(),
            });
        }
        if self.find_by_username(form.username).is_some() {
            return Err(RegistrarError::UsernameTaken {
                username: form.username.to_string(),
            });
        }

        let id = self.next_user_id()?;
        let identity = Identity::new(
            id,
            form.username,
            form.password,
            form.full_name,
            form.email,
            form.kind.empty_role(),
        );
        tracing::debug!(%id, username = form.username, role = identity.role().label(), "signed up");
        self.users.insert(id, identity);
        Ok(id)
    }

    /// Find the identity matching both username and password.
    ///
    /// Unknown user and wrong password produce the same error.
    pub fn sign_in(&self, username: &str, password: &str) -> RegistrarResult<&Identity> {
        self.users
            .values()
            .find(|u| u.verify(username, password))
            .ok_or(RegistrarError::InvalidCredentials)
    }

    // ============================================================
    // Courses
    // ============================================================

    pub fn course(&self, code: &str) -> Option<&Course> {
        self.courses.get(code)
    }

    /// Every course, grouped by instructor (id order) then creation order.
    pub fn courses(&self) -> Vec<&Course> {
        self.users
            .values()
            .filter_map(|u| match u.role() {
                Role::Instructor(profile) => Some(profile.courses()),
                _ => None,
            })
            .flatten()
            .filter_map(|code| self.courses.get(code))
            .collect()
    }

    // ============================================================
    // Instructor operations
    // ============================================================

    pub fn create_course(
        &mut self,
        instructor: UserId,
        name: &str,
        code: &str,
    ) -> RegistrarResult<&Course> {
        self.instructor_profile(instructor)?;
        if self.courses.contains_key(code) {
            return Err(RegistrarError::CourseCodeTaken { code: code.into() });
        }

        let code = CourseCode::from(code);
        if let Some(Role::Instructor(profile)) = self.role_mut(instructor) {
            profile.push_course(code.clone());
        }
        tracing::debug!(%instructor, %code, "course created");
        let course = self
            .courses
            .entry(code.clone())
            .or_insert_with(|| Course::new(name, code, instructor));
        Ok(&*course)
    }

    /// Courses the instructor created, in creation order
    pub fn instructor_courses(&self, instructor: UserId) -> RegistrarResult<Vec<&Course>> {
        let profile = self.instructor_profile(instructor)?;
        Ok(profile
            .courses()
            .iter()
            .filter_map(|code| self.courses.get(code))
            .collect())
    }

    /// One of the instructor's own courses
    pub fn instructor_course(&self, instructor: UserId, code: &str) -> RegistrarResult<&Course> {
        let profile = self.instructor_profile(instructor)?;
        if !profile.owns(code) {
            return Err(RegistrarError::CourseNotFound { code: code.into() });
        }
        self.courses
            .get(code)
            .ok_or_else(|| RegistrarError::CourseNotFound { code: code.into() })
    }

    /// Append an assignment to an owned course; returns its zero-based index.
    pub fn add_assignment(
        &mut self,
        instructor: UserId,
        code: &str,
        title: &str,
        description: &str,
        deadline: &str,
    ) -> RegistrarResult<usize> {
        let course = self.owned_course_mut(instructor, code)?;
        course.add_assignment(title, description, deadline);
        Ok(course.assignments().len() - 1)
    }

    /// Grade a learner's submission.
    ///
    /// `Ok(false)` means the learner has not submitted; nothing changed.
    pub fn grade_submission(
        &mut self,
        instructor: UserId,
        code: &str,
        index: usize,
        learner: UserId,
        grade: i64,
        comments: &str,
    ) -> RegistrarResult<bool> {
        let assignment = self.owned_assignment_mut(instructor, code, index)?;
        Ok(assignment.grade(learner, grade, comments))
    }

    /// Set only the grade. `Ok(false)` when there is no submission.
    pub fn set_grade(
        &mut self,
        instructor: UserId,
        code: &str,
        index: usize,
        learner: UserId,
        grade: i64,
    ) -> RegistrarResult<bool> {
        let assignment = self.owned_assignment_mut(instructor, code, index)?;
        Ok(assignment.set_grade(learner, grade))
    }

    /// Set only the comments. `Ok(false)` when there is no submission.
    pub fn set_comments(
        &mut self,
        instructor: UserId,
        code: &str,
        index: usize,
        learner: UserId,
        comments: &str,
    ) -> RegistrarResult<bool> {
        let assignment = self.owned_assignment_mut(instructor, code, index)?;
        Ok(assignment.set_comments(learner, comments))
    }

    // ============================================================
    // Learner operations
    // ============================================================

    /// Add the learner↔course edge on both sides.
    pub fn register_course(&mut self, learner: UserId, code: &str) -> RegistrarResult<()> {
        let profile = self.learner_profile(learner)?;
        if !self.courses.contains_key(code) {
            return Err(RegistrarError::CourseNotFound { code: code.into() });
        }
        if profile.is_registered(code) {
            return Err(RegistrarError::AlreadyRegistered {
                learner,
                code: code.into(),
            });
        }

        self.link(learner, code);
        tracing::debug!(%learner, code, "registered");
        Ok(())
    }

    /// Remove the learner↔course edge on both sides.
    pub fn unregister_course(&mut self, learner: UserId, code: &str) -> RegistrarResult<()> {
        let profile = self.learner_profile(learner)?;
        if !profile.is_registered(code) {
            return Err(RegistrarError::NotRegistered {
                learner,
                code: code.into(),
            });
        }

        if let Some(Role::Learner(profile)) = self.role_mut(learner) {
            profile.remove_course(code);
        }
        if let Some(course) = self.courses.get_mut(code) {
            course.unenroll(learner);
        }
        tracing::debug!(%learner, code, "unregistered");
        Ok(())
    }

    /// Registered courses, in registration order
    pub fn learner_courses(&self, learner: UserId) -> RegistrarResult<Vec<&Course>> {
        let profile = self.learner_profile(learner)?;
        Ok(profile
            .courses()
            .iter()
            .filter_map(|code| self.courses.get(code))
            .collect())
    }

    /// One of the learner's registered courses
    pub fn learner_course(&self, learner: UserId, code: &str) -> RegistrarResult<&Course> {
        let profile = self.learner_profile(learner)?;
        if !profile.is_registered(code) {
            return Err(RegistrarError::CourseNotFound { code: code.into() });
        }
        self.courses
            .get(code)
            .ok_or_else(|| RegistrarError::CourseNotFound { code: code.into() })
    }

    /// Courses the learner could still register in
    pub fn available_courses(&self, learner: UserId) -> RegistrarResult<Vec<&Course>> {
        let profile = self.learner_profile(learner)?;
        Ok(self
            .courses()
            .into_iter()
            .filter(|c| !profile.is_registered(c.code().as_str()))
            .collect())
    }

    /// Submit (or resubmit) work for an assignment of a registered course.
    pub fn submit(
        &mut self,
        learner: UserId,
        code: &str,
        index: usize,
        content: &str,
    ) -> RegistrarResult<()> {
        self.learner_course(learner, code)?;
        let course = self
            .courses
            .get_mut(code)
            .ok_or_else(|| RegistrarError::CourseNotFound { code: code.into() })?;
        let assignment =
            course
                .assignment_mut(index)
                .ok_or_else(|| RegistrarError::AssignmentNotFound {
                    code: code.into(),
                    number: index.saturating_add(1),
                })?;
        assignment.submit(learner, content);
        tracing::debug!(%learner, code, index, "submitted");
        Ok(())
    }

    /// Per registered course: assignment count, earned and possible points.
    pub fn grade_report(&self, learner: UserId) -> RegistrarResult<Vec<GradeReportEntry>> {
        Ok(self
            .learner_courses(learner)?
            .into_iter()
            .map(|course| GradeReportEntry {
                code: course.code().clone(),
                totals: course.totals_for(learner),
            })
            .collect())
    }

    // ============================================================
    // Helpers
    // ============================================================

    fn identity(&self, id: UserId) -> RegistrarResult<&Identity> {
        self.users
            .get(&id)
            .ok_or(RegistrarError::UserNotFound { id })
    }

    fn role_mut(&mut self, id: UserId) -> Option<&mut Role> {
        self.users.get_mut(&id).map(Identity::role_mut)
    }

    fn instructor_profile(&self, id: UserId) -> RegistrarResult<&super::InstructorProfile> {
        match self.identity(id)?.role() {
            Role::Instructor(profile) => Ok(profile),
            _ => Err(RegistrarError::RoleMismatch {
                id,
                expected: "an instructor",
            }),
        }
    }

    fn learner_profile(&self, id: UserId) -> RegistrarResult<&super::LearnerProfile> {
        match self.identity(id)?.role() {
            Role::Learner(profile) => Ok(profile),
            _ => Err(RegistrarError::RoleMismatch {
                id,
                expected: "a learner",
            }),
        }
    }

    fn owned_course_mut(&mut self, instructor: UserId, code: &str) -> RegistrarResult<&mut Course> {
        self.instructor_course(instructor, code)?;
        self.courses
            .get_mut(code)
            .ok_or_else(|| RegistrarError::CourseNotFound { code: code.into() })
    }

    fn owned_assignment_mut(
        &mut self,
        instructor: UserId,
        code: &str,
        index: usize,
    ) -> RegistrarResult<&mut super::Assignment> {
        self.owned_course_mut(instructor, code)?
            .assignment_mut(index)
            .ok_or_else(|| RegistrarError::AssignmentNotFound {
                code: code.into(),
                number: index.saturating_add(1),
            })
    }

    /// Both halves of the enrollment edge. Callers check role and existence.
    fn link(&mut self, learner: UserId, code: &str) {
        let Some(course) = self.courses.get_mut(code) else {
            return;
        };
        course.enroll(learner);
        let code = course.code().clone();
        if let Some(Role::Learner(profile)) = self.role_mut(learner) {
            profile.push_course(code);
        }
    }
}
