//! JSON School Repository
//!
//! Persists the school as a single JSON document (`ems_data.json` by default).
//! Instructors embed their courses in full; learners carry only course codes.

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

use crate::domain::entities::{
    Assignment, CourseRecord, RoleRecord, SchoolSnapshot, Submission, UserRecord,
};
use crate::domain::ports::{SchoolRepository, StoreError};
use crate::domain::value_objects::{CourseCode, PasswordDigest, UserId};

#[derive(Debug, Default, Serialize, Deserialize)]
struct JsonDocument {
    #[serde(default)]
    users: Vec<JsonUser>,
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonUser {
    user_id: u64,
    username: String,
    password: String,
    full_name: String,
    email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    courses_created: Option<Vec<JsonCourse>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    courses_registered: Option<Vec<String>>,
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonCourse {
    course_name: String,
    course_code: String,
    provided_by: u64,
    #[serde(default)]
    registered_students: Vec<u64>,
    #[serde(default)]
    assignments: Vec<JsonAssignment>,
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonAssignment {
    assignment_title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    deadline: String,
    #[serde(default)]
    solutions: BTreeMap<String, JsonSubmission>,
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonSubmission {
    content: String,
    #[serde(default)]
    grade: Option<JsonGrade>,
    #[serde(default)]
    comments: Option<String>,
}

/// Grades are integers, but older documents hold them as numeric strings.
#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
enum JsonGrade {
    Number(i64),
    Text(String),
}

impl JsonGrade {
    fn normalize(self) -> Result<Option<i64>, String> {
        match self {
            JsonGrade::Number(n) => Ok(Some(n)),
            JsonGrade::Text(text) => {
                let text = text.trim();
                if text.is_empty() {
                    return Ok(None);
                }
                text.parse()
                    .map(Some)
                    .map_err(|_| format!("grade '{text}' is not an integer"))
            }
        }
    }
}

pub struct JsonSchoolRepository {
    path: PathBuf,
}

impl JsonSchoolRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock_path(&self) -> PathBuf {
        self.path.with_extension("lock")
    }

    fn corrupted(&self, message: impl Into<String>) -> StoreError {
        StoreError::Corrupted {
            path: self.path.clone(),
            message: message.into(),
        }
    }

    fn load_from_disk(&self) -> Result<SchoolSnapshot, StoreError> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no store file, starting empty");
            return Ok(SchoolSnapshot::default());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| StoreError::AccessError {
            message: e.to_string(),
        })?;

        let document: JsonDocument =
            serde_json::from_str(&content).map_err(|e| self.corrupted(e.to_string()))?;

        let snapshot = from_json(document).map_err(|message| self.corrupted(message))?;
        tracing::debug!(
            path = %self.path.display(),
            users = snapshot.users.len(),
            "store loaded"
        );
        Ok(snapshot)
    }

    fn save_to_disk(&self, snapshot: &SchoolSnapshot) -> Result<(), StoreError> {
        let dir = parent_dir(&self.path);
        fs::create_dir_all(dir).map_err(|e| StoreError::AccessError {
            message: e.to_string(),
        })?;

        let content = serde_json::to_string_pretty(&to_json(snapshot)).map_err(|e| {
            StoreError::SerializationError {
                message: e.to_string(),
            }
        })?;

        let mut temp = NamedTempFile::new_in(dir).map_err(|e| StoreError::AccessError {
            message: e.to_string(),
        })?;
        temp.write_all(content.as_bytes())
            .and_then(|_| temp.flush())
            .map_err(|e| StoreError::AccessError {
                message: e.to_string(),
            })?;
        temp.persist(&self.path)
            .map_err(|e| StoreError::AccessError {
                message: e.error.to_string(),
            })?;

        tracing::debug!(
            path = %self.path.display(),
            users = snapshot.users.len(),
            "store saved"
        );
        Ok(())
    }
}

impl SchoolRepository for JsonSchoolRepository {
    fn load(&self) -> Result<SchoolSnapshot, StoreError> {
        self.load_from_disk()
    }

    fn save(&self, snapshot: &SchoolSnapshot) -> Result<(), StoreError> {
        let lock_path = self.lock_path();
        fs::create_dir_all(parent_dir(&lock_path)).map_err(|e| StoreError::AccessError {
            message: e.to_string(),
        })?;

        let lock_file = fs::File::create(&lock_path).map_err(|e| StoreError::AccessError {
            message: e.to_string(),
        })?;
        lock_file
            .lock_exclusive()
            .map_err(|e| StoreError::AccessError {
                message: e.to_string(),
            })?;

        let result = self.save_to_disk(snapshot);

        let _ = lock_file.unlock();
        result
    }
}

/// `Path::parent` is empty for a bare file name; that means the working directory.
fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

fn from_json(document: JsonDocument) -> Result<SchoolSnapshot, String> {
    let users = document
        .users
        .into_iter()
        .map(user_from_json)
        .collect::<Result<_, _>>()?;
    Ok(SchoolSnapshot { users })
}

fn user_from_json(user: JsonUser) -> Result<UserRecord, String> {
    let role = match (user.courses_created, user.courses_registered) {
        (Some(courses), _) => RoleRecord::Instructor {
            courses: courses
                .into_iter()
                .map(course_from_json)
                .collect::<Result<_, _>>()?,
        },
        (None, Some(codes)) => RoleRecord::Learner {
            course_codes: codes.into_iter().map(CourseCode::from).collect(),
        },
        (None, None) => RoleRecord::Unassigned,
    };

    Ok(UserRecord {
        id: UserId::new(user.user_id),
        username: user.username,
        password: PasswordDigest::from_stored(user.password),
        full_name: user.full_name,
        email: user.email,
        role,
    })
}

fn course_from_json(course: JsonCourse) -> Result<CourseRecord, String> {
    Ok(CourseRecord {
        name: course.course_name,
        code: CourseCode::from(course.course_code),
        provided_by: UserId::new(course.provided_by),
        registered_students: course
            .registered_students
            .into_iter()
            .map(UserId::new)
            .collect(),
        assignments: course
            .assignments
            .into_iter()
            .map(assignment_from_json)
            .collect::<Result<_, _>>()?,
    })
}

fn assignment_from_json(assignment: JsonAssignment) -> Result<Assignment, String> {
    let mut submissions = BTreeMap::new();
    for (key, solution) in assignment.solutions {
        let learner: UserId = key.parse().map_err(|_| {
            format!(
                "assignment '{}': solution key '{key}' is not a user id",
                assignment.assignment_title
            )
        })?;
        let grade = match solution.grade {
            Some(grade) => grade.normalize().map_err(|message| {
                format!(
                    "assignment '{}', user {learner}: {message}",
                    assignment.assignment_title
                )
            })?,
            None => None,
        };
        submissions.insert(
            learner,
            Submission::with_parts(solution.content, grade, solution.comments),
        );
    }

    Ok(Assignment::new(
        assignment.assignment_title,
        assignment.description,
        assignment.deadline,
    )
    .with_submissions(submissions))
}

fn to_json(snapshot: &SchoolSnapshot) -> JsonDocument {
    let mut users: Vec<JsonUser> = snapshot.users.iter().map(user_to_json).collect();
    users.sort_by_key(|u| u.user_id);
    JsonDocument { users }
}

fn user_to_json(user: &UserRecord) -> JsonUser {
    let (courses_created, courses_registered) = match &user.role {
        RoleRecord::Instructor { courses } => {
            (Some(courses.iter().map(course_to_json).collect()), None)
        }
        RoleRecord::Learner { course_codes } => (
            None,
            Some(course_codes.iter().map(|c| c.as_str().to_string()).collect()),
        ),
        RoleRecord::Unassigned => (None, None),
    };

    JsonUser {
        user_id: user.id.get(),
        username: user.username.clone(),
        password: user.password.as_str().to_string(),
        full_name: user.full_name.clone(),
        email: user.email.clone(),
        courses_created,
        courses_registered,
    }
}

fn course_to_json(course: &CourseRecord) -> JsonCourse {
    JsonCourse {
        course_name: course.name.clone(),
        course_code: course.code.as_str().to_string(),
        provided_by: course.provided_by.get(),
        registered_students: course.registered_students.iter().map(|id| id.get()).collect(),
        assignments: course.assignments.iter().map(assignment_to_json).collect(),
    }
}

fn assignment_to_json(assignment: &Assignment) -> JsonAssignment {
    JsonAssignment {
        assignment_title: assignment.title().to_string(),
        description: assignment.description().to_string(),
        deadline: assignment.deadline().to_string(),
        solutions: assignment
            .submissions()
            .iter()
            .map(|(learner, submission)| {
                (
                    learner.to_string(),
                    JsonSubmission {
                        content: submission.content().to_string(),
                        grade: submission.grade().map(JsonGrade::Number),
                        comments: submission.comments().map(str::to_string),
                    },
                )
            })
            .collect(),
    }
}
