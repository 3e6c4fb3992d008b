//! Property tests for snapshot/restore and the JSON store.

use proptest::prelude::*;

use registrar::domain::entities::{AccountKind, School, SignUp};
use registrar::domain::value_objects::UserId;
use registrar::infrastructure::JsonSchoolRepository;
use registrar::SchoolRepository;

/// A random sequence of school activity, applied through the public API.
#[derive(Debug, Clone)]
struct Plan {
    instructors: usize,
    learners: usize,
    /// (instructor index, assignment count) per course
    courses: Vec<(usize, usize)>,
    /// (learner index, course index)
    registrations: Vec<(usize, usize)>,
    /// (learner index, course index, assignment index, grade)
    submissions: Vec<(usize, usize, usize, Option<i64>)>,
    /// (learner index, course index)
    drops: Vec<(usize, usize)>,
}

fn plan() -> impl Strategy<Value = Plan> {
    (1usize..=3, 0usize..=4)
        .prop_flat_map(|(instructors, learners)| {
            let courses = prop::collection::vec((0..instructors, 0usize..=3), 0..=4);
            (Just(instructors), Just(learners), courses)
        })
        .prop_flat_map(|(instructors, learners, courses)| {
            let course_count = courses.len().max(1);
            let learner_count = learners.max(1);
            let registrations =
                prop::collection::vec((0..learner_count, 0..course_count), 0..=8);
            let submissions = prop::collection::vec(
                (
                    0..learner_count,
                    0..course_count,
                    0usize..3,
                    prop::option::of(0i64..=100),
                ),
                0..=8,
            );
            let drops = prop::collection::vec((0..learner_count, 0..course_count), 0..=2);
            (
                Just(instructors),
                Just(learners),
                Just(courses),
                registrations,
                submissions,
                drops,
            )
        })
        .prop_map(
            |(instructors, learners, courses, registrations, submissions, drops)| Plan {
                instructors,
                learners,
                courses,
                registrations,
                submissions,
                drops,
            },
        )
}

fn build(plan: &Plan) -> School {
    let mut school = School::new();
    let sign_up = |school: &mut School, kind, name: String| -> UserId {
        let email = format!("{name}@example.com");
        school
            .sign_up(SignUp {
                kind,
                username: &name,
                password: "pw",
                full_name: &name,
                email: &email,
            })
            .unwrap()
    };

    let instructors: Vec<UserId> = (0..plan.instructors)
        .map(|i| sign_up(&mut school, AccountKind::Instructor, format!("dr{i}")))
        .collect();
    let learners: Vec<UserId> = (0..plan.learners)
        .map(|i| sign_up(&mut school, AccountKind::Learner, format!("stu{i}")))
        .collect();

    let mut codes = Vec::new();
    for (n, (owner, assignments)) in plan.courses.iter().enumerate() {
        let code = format!("C{n}");
        let owner = instructors[*owner];
        school.create_course(owner, &format!("Course {n}"), &code).unwrap();
        for a in 0..*assignments {
            school
                .add_assignment(owner, &code, &format!("HW{a}"), "", "")
                .unwrap();
        }
        codes.push((code, owner));
    }

    // Rejected operations (duplicates, unknown indices) are part of the plan.
    for (learner, course) in &plan.registrations {
        if let (Some(learner), Some((code, _))) = (learners.get(*learner), codes.get(*course)) {
            let _ = school.register_course(*learner, code);
        }
    }
    for (learner, course, index, grade) in &plan.submissions {
        if let (Some(learner), Some((code, owner))) = (learners.get(*learner), codes.get(*course))
        {
            if school.submit(*learner, code, *index, "work").is_ok() {
                if let Some(grade) = grade {
                    school
                        .grade_submission(*owner, code, *index, *learner, *grade, "ok")
                        .unwrap();
                }
            }
        }
    }
    for (learner, course) in &plan.drops {
        if let (Some(learner), Some((code, _))) = (learners.get(*learner), codes.get(*course)) {
            let _ = school.unregister_course(*learner, code);
        }
    }
    school
}

fn assert_symmetric(school: &School) -> Result<(), TestCaseError> {
    for course in school.courses() {
        for learner in course.enrolled() {
            let registered = school.learner_courses(*learner).unwrap();
            prop_assert!(registered.iter().any(|c| c.code() == course.code()));
        }
    }
    for user in school.users().filter(|u| u.is_learner()) {
        for course in school.learner_courses(user.id()).unwrap() {
            prop_assert!(course.is_enrolled(user.id()));
        }
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: restoring a snapshot yields the same school, with nothing to repair.
    #[test]
    fn property_snapshot_restore_is_identity(plan in plan()) {
        let school = build(&plan);
        assert_symmetric(&school)?;

        let (restored, report) = School::restore(school.snapshot());
        prop_assert!(report.is_clean(), "{:?}", report.issues);
        prop_assert_eq!(&restored, &school);
        assert_symmetric(&restored)?;
    }

    /// PROPERTY: the same holds through the JSON file.
    #[test]
    fn property_json_store_round_trips(plan in plan()) {
        let school = build(&plan);
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonSchoolRepository::new(dir.path().join("ems_data.json"));

        repo.save(&school.snapshot()).unwrap();
        let (restored, report) = School::restore(repo.load().unwrap());

        prop_assert!(report.is_clean(), "{:?}", report.issues);
        prop_assert_eq!(restored, school);
    }

    /// PROPERTY: possible points are 100 per submitted assignment, earned never exceeds them.
    #[test]
    fn property_grade_report_bounds(plan in plan()) {
        let school = build(&plan);
        for user in school.users().filter(|u| u.is_learner()) {
            for entry in school.grade_report(user.id()).unwrap() {
                let course = school.course(entry.code.as_str()).unwrap();
                let submitted = course
                    .assignments()
                    .iter()
                    .filter(|a| a.submission_for(user.id()).is_some())
                    .count() as i64;
                prop_assert_eq!(entry.totals.assignment_count, course.assignments().len());
                prop_assert_eq!(entry.totals.possible, submitted * 100);
                prop_assert!(entry.totals.earned <= entry.totals.possible);
            }
        }
    }
}
