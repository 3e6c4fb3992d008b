//! Shared fixtures

use registrar::domain::entities::{AccountKind, School, SignUp};
use registrar::domain::value_objects::UserId;

/// Ids of the seeded school's users
#[allow(dead_code)]
pub struct Seeded {
    pub school: School,
    pub dr1: UserId,
    pub stu1: UserId,
    pub stu2: UserId,
}

/// dr1 teaches CS101 with HW1; stu1 submitted "X" and got 90/"Good";
/// stu2 is registered but has not submitted.
#[allow(dead_code)]
pub fn seeded_school() -> Seeded {
    let mut school = School::new();
    let dr1 = school
        .sign_up(SignUp {
            kind: AccountKind::Instructor,
            username: "dr1",
            password: "teach",
            full_name: "Dr One",
            email: "dr1@uni.edu",
        })
        .unwrap();
    let stu1 = school
        .sign_up(SignUp {
            kind: AccountKind::Learner,
            username: "stu1",
            password: "learn",
            full_name: "Stu One",
            email: "stu1@uni.edu",
        })
        .unwrap();
    let stu2 = school
        .sign_up(SignUp {
            kind: AccountKind::Learner,
            username: "stu2",
            password: "learn2",
            full_name: "Stu Two",
            email: "stu2@uni.edu",
        })
        .unwrap();

    school.create_course(dr1, "Intro to CS", "CS101").unwrap();
    school.register_course(stu1, "CS101").unwrap();
    school.register_course(stu2, "CS101").unwrap();
    let hw1 = school
        .add_assignment(dr1, "CS101", "HW1", "Hello world", "Friday")
        .unwrap();
    school.submit(stu1, "CS101", hw1, "X").unwrap();
    school
        .grade_submission(dr1, "CS101", hw1, stu1, 90, "Good")
        .unwrap();

    Seeded {
        school,
        dr1,
        stu1,
        stu2,
    }
}

/// A learner registered in a course nobody owns, plus a stale roster entry.
#[allow(dead_code)]
pub const DRIFTED_STORE: &str = r#"{
  "users": [
    {
      "user_id": 1, "username": "dr1", "password": "x", "full_name": "Dr One", "email": "dr1@uni.edu",
      "courses_created": [
        { "course_name": "Intro to CS", "course_code": "CS101", "provided_by": 1,
          "registered_students": [2, 9], "assignments": [] }
      ]
    },
    {
      "user_id": 2, "username": "stu1", "password": "x", "full_name": "Stu One", "email": "stu1@uni.edu",
      "courses_registered": ["CS101", "GONE"]
    }
  ]
}"#;
