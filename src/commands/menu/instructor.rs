//! Instructor menus: courses, assignments, grading

use anyhow::Result;

use registrar::application::Session;
use registrar::domain::entities::{Assignment, Course};
use registrar::domain::value_objects::{CourseCode, UserId};

use super::{grade_label, prompts};

pub fn menu(session: &mut Session, me: UserId) -> Result<()> {
    if let Some(user) = session.current_user() {
        println!("\nWelcome, instructor {}", user.full_name());
    }
    loop {
        let items = ["List courses", "Create course", "View course", "Log out"];
        match prompts::choose("Instructor menu", &items)? {
            0 => list_courses(session, me),
            1 => create_course(session, me)?,
            2 => {
                if let Some(code) = pick_course(session, me)? {
                    course_menu(session, me, &code)?;
                }
            }
            _ => return Ok(()),
        }
    }
}

fn course_label(course: &Course) -> String {
    format!("{} ({})", course.name(), course.code())
}

fn list_courses(session: &Session, me: UserId) {
    match session.school().instructor_courses(me) {
        Ok(courses) if courses.is_empty() => println!("You have not created any courses."),
        Ok(courses) => {
            for course in courses {
                println!(
                    "{} - {} enrolled, {} assignment(s)",
                    course_label(course),
                    course.enrolled().len(),
                    course.assignments().len()
                );
            }
        }
        Err(err) => println!("{err}"),
    }
}

fn create_course(session: &mut Session, me: UserId) -> Result<()> {
    let name = prompts::required("Course name")?;
    let code = prompts::required("Course code")?;
    match session.school_mut().create_course(me, &name, &code) {
        Ok(course) => println!("Created {}.", course_label(course)),
        Err(err) => println!("{err}"),
    }
    Ok(())
}

fn pick_course(session: &Session, me: UserId) -> Result<Option<CourseCode>> {
    let courses = session.school().instructor_courses(me)?;
    if courses.is_empty() {
        println!("You have not created any courses.");
        return Ok(None);
    }
    let labels: Vec<String> = courses.iter().map(|c| course_label(c)).collect();
    Ok(prompts::choose_or_back("Course", &labels)?.map(|i| courses[i].code().clone()))
}

fn course_menu(session: &mut Session, me: UserId, code: &CourseCode) -> Result<()> {
    loop {
        let course = session.school().instructor_course(me, code.as_str())?;
        println!("\nCourse: {}", course_label(course));

        let items = [
            "List assignments",
            "Create assignment",
            "View assignment",
            "Back",
        ];
        match prompts::choose("Course menu", &items)? {
            0 => {
                if course.assignments().is_empty() {
                    println!("No assignments yet.");
                }
                for (number, assignment) in course.assignments().iter().enumerate() {
                    println!("{}. {}", number + 1, assignment.title());
                }
            }
            1 => {
                let title = prompts::required("Assignment title")?;
                let description = prompts::text("Description")?;
                let deadline = prompts::text("Deadline")?;
                let number = session.school_mut().add_assignment(
                    me,
                    code.as_str(),
                    &title,
                    &description,
                    &deadline,
                )? + 1;
                println!("Created assignment #{number}.");
            }
            2 => {
                let titles: Vec<&str> = course.assignments().iter().map(Assignment::title).collect();
                if titles.is_empty() {
                    println!("No assignments yet.");
                    continue;
                }
                if let Some(index) = prompts::choose_or_back("Assignment", &titles)? {
                    assignment_menu(session, me, code, index)?;
                }
            }
            _ => return Ok(()),
        }
    }
}

fn assignment<'a>(
    session: &'a Session,
    me: UserId,
    code: &CourseCode,
    index: usize,
) -> Result<&'a Assignment> {
    let course = session.school().instructor_course(me, code.as_str())?;
    course
        .assignment(index)
        .ok_or_else(|| anyhow::anyhow!("assignment #{} is gone", index + 1))
}

fn learner_label(session: &Session, learner: UserId) -> String {
    match session.school().user(learner) {
        Some(user) => format!("{} (id {})", user.full_name(), learner),
        None => format!("unknown user (id {learner})"),
    }
}

fn assignment_menu(session: &mut Session, me: UserId, code: &CourseCode, index: usize) -> Result<()> {
    loop {
        let current = assignment(session, me, code, index)?;
        println!("\nAssignment: {}", current.title());

        let items = [
            "Show info",
            "Grades report",
            "List submissions",
            "View submission",
            "Back",
        ];
        match prompts::choose("Assignment menu", &items)? {
            0 => {
                println!("Title: {}", current.title());
                println!("Description: {}", current.description());
                println!("Deadline: {}", current.deadline());
            }
            1 => {
                if current.submissions().is_empty() {
                    println!("No submissions yet.");
                }
                for (learner, submission) in current.submissions() {
                    println!(
                        "{} - grade: {} - comments: {}",
                        learner_label(session, *learner),
                        grade_label(submission.grade()),
                        submission.comments().unwrap_or("-")
                    );
                }
            }
            2 => {
                if current.submissions().is_empty() {
                    println!("No submissions yet.");
                }
                for learner in current.submissions().keys() {
                    println!("{}", learner_label(session, *learner));
                }
            }
            3 => {
                let learners: Vec<UserId> = current.submissions().keys().copied().collect();
                if learners.is_empty() {
                    println!("No submissions yet.");
                    continue;
                }
                let labels: Vec<String> =
                    learners.iter().map(|id| learner_label(session, *id)).collect();
                if let Some(picked) = prompts::choose_or_back("Submission", &labels)? {
                    submission_menu(session, me, code, index, learners[picked])?;
                }
            }
            _ => return Ok(()),
        }
    }
}

fn submission_menu(
    session: &mut Session,
    me: UserId,
    code: &CourseCode,
    index: usize,
    learner: UserId,
) -> Result<()> {
    loop {
        let items = ["Show info", "Set grade", "Set comment", "Back"];
        match prompts::choose(&learner_label(session, learner), &items)? {
            0 => {
                let current = assignment(session, me, code, index)?;
                match current.submission_for(learner) {
                    Some(submission) => {
                        println!("Content: {}", submission.content());
                        println!("Grade: {}", grade_label(submission.grade()));
                        println!("Comments: {}", submission.comments().unwrap_or("-"));
                    }
                    None => println!("No submission from this learner."),
                }
            }
            1 => {
                let grade = prompts::integer("Grade")?;
                let applied =
                    session
                        .school_mut()
                        .set_grade(me, code.as_str(), index, learner, grade)?;
                report(applied, "Grade updated.");
            }
            2 => {
                let comments = prompts::text("Comment")?;
                let applied = session.school_mut().set_comments(
                    me,
                    code.as_str(),
                    index,
                    learner,
                    &comments,
                )?;
                report(applied, "Comment updated.");
            }
            _ => return Ok(()),
        }
    }
}

fn report(applied: bool, done: &str) {
    if applied {
        println!("{done}");
    } else {
        println!("No submission from this learner; nothing changed.");
    }
}
