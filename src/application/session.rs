//! Session use case
//!
//! One interactive run: the school loaded from a repository, the signed-in
//! identity (if any), and a save back to the same repository.

use std::sync::Arc;

use crate::domain::entities::{Identity, ReconcileReport, School, SignUp};
use crate::domain::ports::SchoolRepository;
use crate::domain::value_objects::UserId;
use crate::error::RegistrarResult;

pub struct Session {
    repository: Arc<dyn SchoolRepository>,
    school: School,
    report: ReconcileReport,
    current: Option<UserId>,
}

impl Session {
    /// Load and reconcile the stored school.
    pub fn open(repository: Arc<dyn SchoolRepository>) -> RegistrarResult<Self> {
        let snapshot = repository.load()?;
        let (school, report) = School::restore(snapshot);
        Ok(Self {
            repository,
            school,
            report,
            current: None,
        })
    }

    pub fn school(&self) -> &School {
        &self.school
    }

    pub fn school_mut(&mut self) -> &mut School {
        &mut self.school
    }

    /// Repairs made while opening
    pub fn report(&self) -> &ReconcileReport {
        &self.report
    }

    pub fn sign_up(&mut self, form: SignUp<'_>) -> RegistrarResult<UserId> {
        self.school.sign_up(form)
    }

    pub fn sign_in(&mut self, username: &str, password: &str) -> RegistrarResult<UserId> {
        let id = self.school.sign_in(username, password)?.id();
        tracing::debug!(%id, "signed in");
        self.current = Some(id);
        Ok(id)
    }

    pub fn sign_out(&mut self) {
        if let Some(id) = self.current.take() {
            tracing::debug!(%id, "signed out");
        }
    }

    pub fn current_user(&self) -> Option<&Identity> {
        self.current.and_then(|id| self.school.user(id))
    }

    pub fn save(&self) -> RegistrarResult<()> {
        self.repository.save(&self.school.snapshot())?;
        Ok(())
    }
}
