//! Learner menus: registration, submissions, grade report

use anyhow::Result;

use registrar::application::Session;
use registrar::domain::entities::{Course, School};
use registrar::domain::value_objects::{CourseCode, UserId};

use super::{grade_label, prompts};

pub fn menu(session: &mut Session, me: UserId) -> Result<()> {
    if let Some(user) = session.current_user() {
        println!("\nWelcome, {}", user.full_name());
    }
    loop {
        let items = [
            "Register in course",
            "List my courses",
            "View course",
            "Grades report",
            "Log out",
        ];
        match prompts::choose("Learner menu", &items)? {
            0 => register(session, me)?,
            1 => list_courses(session.school(), me)?,
            2 => {
                if let Some(code) = pick_course(session.school(), me)? {
                    course_menu(session, me, &code)?;
                }
            }
            3 => grades_report(session.school(), me)?,
            _ => return Ok(()),
        }
    }
}

fn course_label(school: &School, course: &Course) -> String {
    let provider = school
        .user(course.owner())
        .map_or("unknown", |user| user.full_name());
    format!("{} ({}) - provided by {}", course.name(), course.code(), provider)
}

fn register(session: &mut Session, me: UserId) -> Result<()> {
    let school = session.school();
    let available = school.available_courses(me)?;
    if available.is_empty() {
        println!("No courses available to register in.");
        return Ok(());
    }
    let labels: Vec<String> = available.iter().map(|c| course_label(school, c)).collect();
    let Some(picked) = prompts::choose_or_back("Register in", &labels)? else {
        return Ok(());
    };
    let code = available[picked].code().clone();

    match session.school_mut().register_course(me, code.as_str()) {
        Ok(()) => println!("Registered in {code}."),
        Err(err) => println!("{err}"),
    }
    Ok(())
}

fn list_courses(school: &School, me: UserId) -> Result<()> {
    let courses = school.learner_courses(me)?;
    if courses.is_empty() {
        println!("You are not registered in any course.");
    }
    for course in courses {
        println!("{}", course_label(school, course));
    }
    Ok(())
}

fn pick_course(school: &School, me: UserId) -> Result<Option<CourseCode>> {
    let courses = school.learner_courses(me)?;
    if courses.is_empty() {
        println!("You are not registered in any course.");
        return Ok(None);
    }
    let labels: Vec<String> = courses.iter().map(|c| course_label(school, c)).collect();
    Ok(prompts::choose_or_back("Course", &labels)?.map(|i| courses[i].code().clone()))
}

fn print_assignments(course: &Course, me: UserId) {
    println!("\nCourse: {} ({})", course.name(), course.code());
    if course.assignments().is_empty() {
        println!("No assignments yet.");
    }
    for (number, assignment) in course.assignments().iter().enumerate() {
        let status = match assignment.submission_for(me) {
            Some(submission) => format!("submitted - grade: {}", grade_label(submission.grade())),
            None => "not submitted".to_string(),
        };
        println!("{}. {} - {}", number + 1, assignment.title(), status);
    }
}

fn course_menu(session: &mut Session, me: UserId, code: &CourseCode) -> Result<()> {
    loop {
        let course = session.school().learner_course(me, code.as_str())?;
        print_assignments(course, me);

        let items = ["Submit assignment", "Unregister from course", "Back"];
        match prompts::choose("Course menu", &items)? {
            0 => {
                let titles: Vec<&str> = course.assignments().iter().map(|a| a.title()).collect();
                if titles.is_empty() {
                    continue;
                }
                let Some(index) = prompts::choose_or_back("Assignment", &titles)? else {
                    continue;
                };
                if let Some(assignment) = course.assignment(index) {
                    println!("Title: {}", assignment.title());
                    println!("Description: {}", assignment.description());
                    println!("Deadline: {}", assignment.deadline());
                }
                let content = prompts::text("Submission")?;
                match session
                    .school_mut()
                    .submit(me, code.as_str(), index, &content)
                {
                    Ok(()) => println!("Submitted."),
                    Err(err) => println!("{err}"),
                }
            }
            1 => {
                match session.school_mut().unregister_course(me, code.as_str()) {
                    Ok(()) => println!("Unregistered from {code}."),
                    Err(err) => println!("{err}"),
                }
                return Ok(());
            }
            _ => return Ok(()),
        }
    }
}

fn grades_report(school: &School, me: UserId) -> Result<()> {
    let report = school.grade_report(me)?;
    if report.is_empty() {
        println!("You are not registered in any course.");
    }
    for entry in report {
        println!(
            "{} - assignments: {} - grade: {}/{}",
            entry.code, entry.totals.assignment_count, entry.totals.earned, entry.totals.possible
        );
    }
    Ok(())
}
