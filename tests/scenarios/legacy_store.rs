//! Scenario: Opening a store written by an older tool
//!
//! Journey: the store has numeric-string grades, learners listed before the
//! instructor that owns their course, and a registration in a course that
//! no longer exists. Opening it must relink what it can and report the rest.

use std::sync::Arc;

use registrar::application::Session;
use registrar::domain::entities::ReconcileIssue;
use registrar::domain::value_objects::{CourseCode, UserId};
use registrar::infrastructure::JsonSchoolRepository;

use crate::common::*;

const LEGACY_STORE: &str = r#"{
  "users": [
    {
      "user_id": 2, "username": "stu1", "password": "x", "full_name": "Stu One", "email": "stu1@uni.edu",
      "courses_registered": ["CS101", "MA200"]
    },
    {
      "user_id": 1, "username": "dr1", "password": "x", "full_name": "Dr One", "email": "dr1@uni.edu",
      "courses_created": [
        { "course_name": "Intro to CS", "course_code": "CS101", "provided_by": 1,
          "registered_students": [2],
          "assignments": [
            { "assignment_title": "HW1", "description": "", "deadline": "",
              "solutions": { "2": { "content": "X", "grade": "90", "comments": "Good" } } }
          ] }
      ]
    }
  ]
}"#;

#[test]
fn scenario_legacy_store_is_relinked_and_reported() {
    let env = TestEnv::new();
    env.write("ems_data.json", LEGACY_STORE);

    let repository = Arc::new(JsonSchoolRepository::new(env.data_file()));
    let session = Session::open(repository).unwrap();

    assert_eq!(session.report().relinked, 1);
    assert_eq!(
        session.report().issues,
        vec![ReconcileIssue::UnknownCourse {
            learner: UserId::new(2),
            code: CourseCode::from("MA200"),
        }]
    );

    let report = session.school().grade_report(UserId::new(2)).unwrap();
    assert_eq!(report.len(), 1);
    assert_eq!(report[0].totals.earned, 90);
    assert_eq!(report[0].totals.possible, 100);
}

#[test]
fn scenario_saving_legacy_store_normalizes_it() {
    let env = TestEnv::new();
    env.write("ems_data.json", LEGACY_STORE);

    let repository = Arc::new(JsonSchoolRepository::new(env.data_file()));
    Session::open(repository.clone()).unwrap().save().unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(env.data_file()).unwrap()).unwrap();
    // users are written in id order, grades as numbers, dangling codes gone
    assert_eq!(value["users"][0]["user_id"], 1);
    assert_eq!(
        value["users"][0]["courses_created"][0]["assignments"][0]["solutions"]["2"]["grade"],
        90
    );
    assert_eq!(value["users"][1]["courses_registered"], serde_json::json!(["CS101"]));

    let session = Session::open(repository).unwrap();
    assert!(session.report().is_clean());
}
