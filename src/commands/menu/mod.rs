//! Interactive menu
//!
//! Welcome screen (sign in, sign up, exit) and the role menus behind it.
//! The store is written once, when the user picks Exit.

mod instructor;
mod learner;
mod prompts;

use std::path::Path;
use std::sync::Arc;

use anyhow::{bail, Result};
use is_terminal::IsTerminal;

use registrar::application::Session;
use registrar::domain::entities::{AccountKind, Role, SignUp};
use registrar::domain::value_objects::UserId;
use registrar::infrastructure::JsonSchoolRepository;

pub fn cmd_menu(data_file: &Path) -> Result<()> {
    if !std::io::stdin().is_terminal() {
        bail!("the menu needs an interactive terminal; use 'registrar check' for scripted runs");
    }

    let repository = Arc::new(JsonSchoolRepository::new(data_file));
    let mut session = Session::open(repository)?;
    if !session.report().is_clean() {
        println!(
            "Note: {} inconsistency(ies) in {} were repaired on load.\n",
            session.report().issues.len(),
            data_file.display()
        );
    }

    welcome_loop(&mut session)?;

    session.save()?;
    println!("Saved to {}.", data_file.display());
    Ok(())
}

fn welcome_loop(session: &mut Session) -> Result<()> {
    loop {
        println!("\nWelcome to Registrar");
        let items = ["Sign in", "Sign up", "Exit"];
        match prompts::choose("What would you like to do?", &items)? {
            0 => {
                if let Some(id) = sign_in(session)? {
                    role_menu(session, id)?;
                    session.sign_out();
                    println!("Logged out.");
                }
            }
            1 => sign_up(session)?,
            _ => return Ok(()),
        }
    }
}

fn sign_in(session: &mut Session) -> Result<Option<UserId>> {
    let username = prompts::text("Username")?;
    let password = prompts::secret("Password")?;
    match session.sign_in(username.trim(), &password) {
        Ok(id) => {
            println!("Signed in.");
            Ok(Some(id))
        }
        Err(err) => {
            println!("{err}. Please try again.");
            Ok(None)
        }
    }
}

fn sign_up(session: &mut Session) -> Result<()> {
    let kinds = ["Instructor", "Learner"];
    let kind = match prompts::choose("Account type", &kinds)? {
        0 => AccountKind::Instructor,
        _ => AccountKind::Learner,
    };
    let username = prompts::required("Username")?;
    let password = prompts::secret("Password")?;
    let full_name = prompts::required("Full name")?;
    let email = prompts::required("Email")?;

    let form = SignUp {
        kind,
        username: &username,
        password: &password,
        full_name: &full_name,
        email: &email,
    };
    match session.sign_up(form) {
        Ok(id) => println!("Signed up. Your user id is {id}. You can now sign in."),
        Err(err) => println!("{err}. Please try again."),
    }
    Ok(())
}

fn role_menu(session: &mut Session, id: UserId) -> Result<()> {
    let role = session.current_user().map(|user| user.role().clone());
    match role {
        Some(Role::Instructor(_)) => instructor::menu(session, id),
        Some(Role::Learner(_)) => learner::menu(session, id),
        Some(Role::Unassigned) | None => {
            println!("This account has no role; nothing to do here.");
            Ok(())
        }
    }
}

/// Grade cell for listings
fn grade_label(grade: Option<i64>) -> String {
    grade.map_or_else(|| "ungraded".to_string(), |g| g.to_string())
}
