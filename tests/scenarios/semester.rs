//! Scenario: One course through a semester
//!
//! Journey: an instructor opens a course, learners register, submit, get
//! graded, and one drops the course. The store is saved and reopened
//! between steps the way separate menu sessions would.
//!
//! Success Criteria:
//! - Grade report for the graded learner is (1, 90, 100)
//! - Enrollment stays symmetric across save/load
//! - Unregistering removes the edge on both sides

use std::sync::Arc;

use registrar::application::Session;
use registrar::domain::entities::{CourseTotals, GradeReportEntry};
use registrar::domain::value_objects::CourseCode;
use registrar::infrastructure::JsonSchoolRepository;
use registrar::{RegistrarError, SchoolRepository};

use crate::common::*;

fn reopen(env: &TestEnv) -> Session {
    let repository = Arc::new(JsonSchoolRepository::new(env.data_file()));
    let session = Session::open(repository).unwrap();
    assert!(session.report().is_clean(), "{:?}", session.report().issues);
    session
}

#[test]
fn scenario_semester_round_trip() {
    let env = TestEnv::new();
    let seeded = seeded_school();
    JsonSchoolRepository::new(env.data_file())
        .save(&seeded.school.snapshot())
        .unwrap();

    // Session 1: stu1 signs in and reads the grade report
    let mut session = reopen(&env);
    assert_eq!(session.school(), &seeded.school);
    let stu1 = session.sign_in("stu1", "learn").unwrap();
    assert_eq!(
        session.school().grade_report(stu1).unwrap(),
        vec![GradeReportEntry {
            code: CourseCode::from("CS101"),
            totals: CourseTotals {
                assignment_count: 1,
                earned: 90,
                possible: 100,
            },
        }]
    );
    session.sign_out();

    // Session 2: stu2 submits late, dr1 adds HW2 and grades stu2
    let mut session = reopen(&env);
    let stu2 = session.sign_in("stu2", "learn2").unwrap();
    session.school_mut().submit(stu2, "CS101", 0, "late").unwrap();
    session.sign_out();
    let dr1 = session.sign_in("dr1", "teach").unwrap();
    session
        .school_mut()
        .add_assignment(dr1, "CS101", "HW2", "", "Monday")
        .unwrap();
    assert!(session
        .school_mut()
        .grade_submission(dr1, "CS101", 0, stu2, 70, "Late")
        .unwrap());
    // stu1 never submitted HW2: grading it is a no-op
    assert!(!session
        .school_mut()
        .grade_submission(dr1, "CS101", 1, stu1, 100, "")
        .unwrap());
    session.save().unwrap();

    // Session 3: reports reflect both sessions, then stu2 drops the course
    let mut session = reopen(&env);
    let report = session.school().grade_report(stu2).unwrap();
    assert_eq!(
        report[0].totals,
        CourseTotals {
            assignment_count: 2,
            earned: 70,
            possible: 100,
        }
    );
    session.school_mut().unregister_course(stu2, "CS101").unwrap();
    session.save().unwrap();

    // Session 4: the drop persisted on both sides
    let session = reopen(&env);
    let course = session.school().course("CS101").unwrap();
    assert!(!course.is_enrolled(stu2));
    assert!(course.is_enrolled(stu1));
    assert!(session.school().learner_courses(stu2).unwrap().is_empty());
}

#[test]
fn scenario_sign_up_continues_id_sequence() {
    let env = TestEnv::new();
    let seeded = seeded_school();
    JsonSchoolRepository::new(env.data_file())
        .save(&seeded.school.snapshot())
        .unwrap();

    let mut session = reopen(&env);
    let id = session
        .sign_up(registrar::SignUp {
            kind: registrar::domain::entities::AccountKind::Learner,
            username: "stu3",
            password: "pw",
            full_name: "Stu Three",
            email: "stu3@uni.edu",
        })
        .unwrap();
    assert_eq!(id.get(), 4);

    let err = session
        .sign_up(registrar::SignUp {
            kind: registrar::domain::entities::AccountKind::Instructor,
            username: "stu3",
            password: "pw",
            full_name: "Impostor",
            email: "imp@uni.edu",
        })
        .unwrap_err();
    assert!(matches!(err, RegistrarError::UsernameTaken { .. }));
}
