//! Snapshot ↔ School conversion
//!
//! Restoring runs in two passes. The load pass materializes every identity and
//! every instructor-owned course while holding learners' course codes aside.
//! The reconcile pass then resolves each held code against the loaded courses
//! and registers the learner for real, so both sides of each enrollment edge
//! come out of the same code path as a live registration.

use std::fmt;

use crate::domain::entities::{
    Course, CourseRecord, Identity, InstructorProfile, LearnerProfile, Role, RoleRecord,
    SchoolSnapshot, UserRecord,
};
use crate::domain::value_objects::{CourseCode, UserId};

use super::School;

/// Repairs made while restoring a snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconcileReport {
    /// Enrollment edges rebuilt from learner records
    pub relinked: usize,
    pub issues: Vec<ReconcileIssue>,
}

impl ReconcileReport {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

/// A disagreement between the document and the rebuilt graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReconcileIssue {
    /// A second record with an id already loaded; the later record was dropped
    DuplicateUserId { id: UserId },
    /// Two identities share a username; both were kept
    DuplicateUsername { username: String, id: UserId },
    /// A second course with a code already loaded; the later copy was dropped
    DuplicateCourseCode { code: CourseCode, dropped_owner: UserId },
    /// `provided_by` disagreed with the instructor embedding the course
    OwnerMismatch { code: CourseCode, recorded: UserId, owner: UserId },
    /// A learner referenced a course no instructor owns; the reference was dropped
    UnknownCourse { learner: UserId, code: CourseCode },
    /// A course roster listed someone who is not registered there
    StaleRosterEntry { code: CourseCode, id: UserId },
}

impl fmt::Display for ReconcileIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateUserId { id } => {
                write!(f, "duplicate user id {id}: later record dropped")
            }
            Self::DuplicateUsername { username, id } => {
                write!(f, "username '{username}' reused by user {id}")
            }
            Self::DuplicateCourseCode { code, dropped_owner } => write!(
                f,
                "duplicate course code '{code}': copy owned by user {dropped_owner} dropped"
            ),
            Self::OwnerMismatch {
                code,
                recorded,
                owner,
            } => write!(
                f,
                "course '{code}' records owner {recorded} but belongs to user {owner}"
            ),
            Self::UnknownCourse { learner, code } => write!(
                f,
                "user {learner} registered in unknown course '{code}': registration dropped"
            ),
            Self::StaleRosterEntry { code, id } => {
                write!(f, "course '{code}' roster lists user {id} who is not registered")
            }
        }
    }
}

impl School {
    /// Rebuild a live school from a snapshot.
    ///
    /// Reconciliation has fully run when this returns; the school is never
    /// observable with unresolved learner registrations.
    pub fn restore(snapshot: SchoolSnapshot) -> (School, ReconcileReport) {
        let mut school = School::new();
        let mut report = ReconcileReport::default();
        let mut pending: Vec<(UserId, Vec<CourseCode>)> = Vec::new();
        let mut rosters: Vec<(CourseCode, Vec<UserId>)> = Vec::new();

        // Load pass.
        for record in snapshot.users {
            if school.users.contains_key(&record.id) {
                report
                    .issues
                    .push(ReconcileIssue::DuplicateUserId { id: record.id });
                continue;
            }
            if school.find_by_username(&record.username).is_some() {
                report.issues.push(ReconcileIssue::DuplicateUsername {
                    username: record.username.clone(),
                    id: record.id,
                });
            }

            let UserRecord {
                id,
                username,
                password,
                full_name,
                email,
                role,
            } = record;
            let role = match role {
                RoleRecord::Instructor { courses } => {
                    let mut profile = InstructorProfile::default();
                    for course in courses {
                        if let Some(roster) =
                            school.load_course(id, course, &mut profile, &mut report)
                        {
                            rosters.push(roster);
                        }
                    }
                    Role::Instructor(profile)
                }
                RoleRecord::Learner { course_codes } => {
                    pending.push((id, course_codes));
                    Role::Learner(LearnerProfile::default())
                }
                RoleRecord::Unassigned => Role::Unassigned,
            };
            school.users.insert(
                id,
                Identity::restore(id, username, password, full_name, email, role),
            );
        }

        // Reconcile pass.
        for (learner, codes) in pending {
            for code in codes {
                if !school.courses.contains_key(&code) {
                    report
                        .issues
                        .push(ReconcileIssue::UnknownCourse { learner, code });
                    continue;
                }
                match school.register_course(learner, code.as_str()) {
                    Ok(()) => report.relinked += 1,
                    Err(err) => {
                        tracing::debug!(%learner, %code, error = %err, "skipping repeated registration")
                    }
                }
            }
        }

        for (code, recorded) in rosters {
            let Some(course) = school.courses.get_mut(&code) else {
                continue;
            };
            for id in course.align_roster(&recorded) {
                report.issues.push(ReconcileIssue::StaleRosterEntry {
                    code: code.clone(),
                    id,
                });
            }
        }

        for issue in &report.issues {
            tracing::warn!("{issue}");
        }
        tracing::debug!(
            users = school.users.len(),
            courses = school.courses.len(),
            relinked = report.relinked,
            "school restored"
        );
        (school, report)
    }

    /// Flatten the school for the store.
    pub fn snapshot(&self) -> SchoolSnapshot {
        let users = self
            .users
            .values()
            .map(|identity| UserRecord {
                id: identity.id(),
                username: identity.username().to_string(),
                password: identity.password().clone(),
                full_name: identity.full_name().to_string(),
                email: identity.email().to_string(),
                role: match identity.role() {
                    Role::Instructor(profile) => RoleRecord::Instructor {
                        courses: profile
                            .courses()
                            .iter()
                            .filter_map(|code| self.courses.get(code))
                            .map(course_record)
                            .collect(),
                    },
                    Role::Learner(profile) => RoleRecord::Learner {
                        course_codes: profile.courses().to_vec(),
                    },
                    Role::Unassigned => RoleRecord::Unassigned,
                },
            })
            .collect();
        SchoolSnapshot { users }
    }

    /// Materialize one instructor-owned course. Returns the recorded roster
    /// for the later stale-entry check, or `None` if the course was dropped.
    fn load_course(
        &mut self,
        owner: UserId,
        record: CourseRecord,
        profile: &mut InstructorProfile,
        report: &mut ReconcileReport,
    ) -> Option<(CourseCode, Vec<UserId>)> {
        if self.courses.contains_key(&record.code) {
            report.issues.push(ReconcileIssue::DuplicateCourseCode {
                code: record.code,
                dropped_owner: owner,
            });
            return None;
        }
        if record.provided_by != owner {
            report.issues.push(ReconcileIssue::OwnerMismatch {
                code: record.code.clone(),
                recorded: record.provided_by,
                owner,
            });
        }

        profile.push_course(record.code.clone());
        let course =
            Course::new(record.name, record.code.clone(), owner).with_assignments(record.assignments);
        self.courses.insert(record.code.clone(), course);
        Some((record.code, record.registered_students))
    }
}

fn course_record(course: &Course) -> CourseRecord {
    CourseRecord {
        name: course.name().to_string(),
        code: course.code().clone(),
        provided_by: course.owner(),
        registered_students: course.enrolled().to_vec(),
        assignments: course.assignments().to_vec(),
    }
}
