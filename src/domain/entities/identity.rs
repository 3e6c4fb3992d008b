//! Identity entity
//!
//! A user record shared by every role. Role-specific collections live in the
//! [`Role`] payload; the courses they refer to live in the
//! [`School`](super::School) arena and are addressed by code.

use crate::domain::value_objects::{CourseCode, PasswordDigest, UserId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    id: UserId,
    username: String,
    password: PasswordDigest,
    full_name: String,
    email: String,
    role: Role,
}

impl Identity {
    /// Create a new identity, digesting the plaintext password.
    pub fn new(
        id: UserId,
        username: impl Into<String>,
        password: &str,
        full_name: impl Into<String>,
        email: impl Into<String>,
        role: Role,
    ) -> Self {
        Self::restore(
            id,
            username,
            PasswordDigest::from_secret(password),
            full_name,
            email,
            role,
        )
    }

    /// Rebuild an identity from stored parts. The digest is kept verbatim.
    pub fn restore(
        id: UserId,
        username: impl Into<String>,
        password: PasswordDigest,
        full_name: impl Into<String>,
        email: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            id,
            username: username.into(),
            password,
            full_name: full_name.into(),
            email: email.into(),
            role,
        }
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &PasswordDigest {
        &self.password
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn role(&self) -> &Role {
        &self.role
    }

    pub(crate) fn role_mut(&mut self) -> &mut Role {
        &mut self.role
    }

    /// True iff both the username and the password digest match.
    pub fn verify(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password.matches_secret(password)
    }

    pub fn is_instructor(&self) -> bool {
        matches!(self.role, Role::Instructor(_))
    }

    pub fn is_learner(&self) -> bool {
        matches!(self.role, Role::Learner(_))
    }
}

/// Role-specific payload of an [`Identity`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Role {
    Instructor(InstructorProfile),
    Learner(LearnerProfile),
    /// Bare record with neither collection. Tolerated on load, never created.
    Unassigned,
}

impl Role {
    pub fn label(&self) -> &'static str {
        match self {
            Role::Instructor(_) => "instructor",
            Role::Learner(_) => "learner",
            Role::Unassigned => "user",
        }
    }
}

/// Account kinds available at sign-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountKind {
    Instructor,
    Learner,
}

impl AccountKind {
    pub fn empty_role(self) -> Role {
        match self {
            AccountKind::Instructor => Role::Instructor(InstructorProfile::default()),
            AccountKind::Learner => Role::Learner(LearnerProfile::default()),
        }
    }

    /// Parse the sign-up prompt answer. "doctor" and "student" are accepted too.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "instructor" | "doctor" => Some(AccountKind::Instructor),
            "learner" | "student" => Some(AccountKind::Learner),
            _ => None,
        }
    }
}

/// Courses created by an instructor, in creation order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstructorProfile {
    courses: Vec<CourseCode>,
}

impl InstructorProfile {
    pub fn courses(&self) -> &[CourseCode] {
        &self.courses
    }

    pub fn owns(&self, code: &str) -> bool {
        self.courses.iter().any(|c| c.as_str() == code)
    }

    pub(crate) fn push_course(&mut self, code: CourseCode) {
        self.courses.push(code);
    }
}

/// Course registrations of a learner, in registration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LearnerProfile {
    courses: Vec<CourseCode>,
}

impl LearnerProfile {
    pub fn courses(&self) -> &[CourseCode] {
        &self.courses
    }

    pub fn is_registered(&self, code: &str) -> bool {
        self.courses.iter().any(|c| c.as_str() == code)
    }

    pub(crate) fn push_course(&mut self, code: CourseCode) {
        self.courses.push(code);
    }

    pub(crate) fn remove_course(&mut self, code: &str) -> bool {
        let len_before = self.courses.len();
        self.courses.retain(|c| c.as_str() != code);
        self.courses.len() != len_before
    }
}
