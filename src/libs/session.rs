//! Attendance session state and its durable snapshot.
//!
//! [`SessionStore`] is the only owner of the session snapshot. Every
//! transition updates memory first and then writes the snapshot before the
//! call returns, so no caller can observe the two diverging. A failed write
//! is reported through [`Persisted::error`] and logged; the in-memory
//! transition stands regardless so the UI stays usable.
//!
//! ## Lifecycle
//!
//! ```text
//!   restore(identity) ──▶ empty ──login──▶ active ──logout──▶ closed
//!                           ▲                │                  │
//!                           └──── clear / identity lost ◀───────┘
//! ```
//!
//! A new login overwrites whatever came before it, active or not.

use super::clock::DATE_FORMAT;
use super::duration::{elapsed_or_zero, WorkDuration};
use super::error::PersistenceError;
use super::identity::Identity;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One login-to-logout work period of one employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceSession {
    pub employee_id: String,
    pub employee_name: String,
    pub login_instant: String,
    #[serde(default)]
    pub logout_instant: Option<String>,
    pub is_active: bool,
    pub date: NaiveDate,
}

impl AttendanceSession {
    /// Time worked so far, measured up to `now`.
    pub fn elapsed_until(&self, now: &str) -> WorkDuration {
        elapsed_or_zero(&self.login_instant, now)
    }

    /// Total working period, once the session has been closed.
    pub fn working_period(&self) -> Option<WorkDuration> {
        self.logout_instant.as_deref().map(|logout| elapsed_or_zero(&self.login_instant, logout))
    }

    pub fn date_label(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }
}

/// Result of a store transition: the new state and, if the durable write
/// failed, why.
#[derive(Debug)]
#[must_use]
pub struct Persisted<T> {
    pub value: T,
    pub error: Option<PersistenceError>,
}

impl<T> Persisted<T> {
    fn new(value: T, result: Result<(), PersistenceError>) -> Self {
        Self { value, error: result.err() }
    }

    /// Whether memory and durable storage agree after the transition.
    pub fn is_durable(&self) -> bool {
        self.error.is_none()
    }

    pub fn into_value(self) -> T {
        self.value
    }
}

/// Durable home of the session snapshot.
pub trait SnapshotStore {
    /// Reads the stored session, `None` when nothing is stored.
    fn load(&self) -> Result<Option<AttendanceSession>, PersistenceError>;

    /// Replaces the stored session as one atomic write.
    fn save(&mut self, session: &AttendanceSession) -> Result<(), PersistenceError>;

    /// Removes every snapshot entry.
    fn clear(&mut self) -> Result<(), PersistenceError>;
}

/// Snapshot that lives only as long as the process.
#[derive(Debug, Default, Clone)]
pub struct MemorySnapshot {
    session: Option<AttendanceSession>,
}

impl MemorySnapshot {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SnapshotStore for MemorySnapshot {
    fn load(&self) -> Result<Option<AttendanceSession>, PersistenceError> {
        Ok(self.session.clone())
    }

    fn save(&mut self, session: &AttendanceSession) -> Result<(), PersistenceError> {
        self.session = Some(session.clone());
        Ok(())
    }

    fn clear(&mut self) -> Result<(), PersistenceError> {
        self.session = None;
        Ok(())
    }
}

impl<S: SnapshotStore + ?Sized> SnapshotStore for Box<S> {
    fn load(&self) -> Result<Option<AttendanceSession>, PersistenceError> {
        (**self).load()
    }

    fn save(&mut self, session: &AttendanceSession) -> Result<(), PersistenceError> {
        (**self).save(session)
    }

    fn clear(&mut self) -> Result<(), PersistenceError> {
        (**self).clear()
    }
}

pub struct SessionStore<S: SnapshotStore> {
    storage: S,
    session: Option<AttendanceSession>,
}

impl<S: SnapshotStore> SessionStore<S> {
    /// Creates an empty store. Call [`SessionStore::restore`] to load the snapshot.
    pub fn new(storage: S) -> Self {
        Self { storage, session: None }
    }

    /// Rehydrates the session from durable storage.
    ///
    /// Nobody signed in, or a snapshot that belongs to someone else, clears
    /// the store instead. An unreadable snapshot is logged and treated as empty.
    pub fn restore(&mut self, identity: Option<&Identity>) -> Option<&AttendanceSession> {
        let Some(identity) = identity else {
            tracing::debug!("no identity on restore, clearing attendance session");
            self.clear_logged();
            return None;
        };

        match self.storage.load() {
            Ok(Some(session)) if session.employee_id != identity.employee_id => {
                tracing::info!(
                    stored = %session.employee_id,
                    current = %identity.employee_id,
                    "stored attendance session belongs to another employee, clearing"
                );
                self.clear_logged();
            }
            Ok(session) => self.session = session,
            Err(e) => {
                tracing::warn!("failed to read attendance snapshot: {}", e);
                self.session = None;
            }
        }

        self.session.as_ref()
    }

    /// Starts a new session, replacing any previous one.
    pub fn login(&mut self, identity: &Identity, instant: &str, date: NaiveDate) -> Persisted<AttendanceSession> {
        if let Some(previous) = &self.session {
            if previous.is_active {
                tracing::info!(login = %previous.login_instant, "overwriting active attendance session");
            }
        }

        let session = AttendanceSession {
            employee_id: identity.employee_id.clone(),
            employee_name: identity.name.clone(),
            login_instant: instant.to_owned(),
            logout_instant: None,
            is_active: true,
            date,
        };
        self.session = Some(session.clone());
        let result = self.storage.save(&session);
        Self::log_failure("login", &result);

        Persisted::new(session, result)
    }

    /// Closes the active session. Returns `None` when no session is active.
    pub fn logout(&mut self, instant: &str) -> Option<Persisted<AttendanceSession>> {
        let session = self.session.as_mut().filter(|s| s.is_active)?;
        session.logout_instant = Some(instant.to_owned());
        session.is_active = false;

        let session = session.clone();
        let result = self.storage.save(&session);
        Self::log_failure("logout", &result);

        Some(Persisted::new(session, result))
    }

    /// Drops the session from memory and durable storage.
    pub fn clear(&mut self) -> Persisted<()> {
        self.session = None;
        let result = self.storage.clear();
        Self::log_failure("clear", &result);
        Persisted::new((), result)
    }

    /// Reacts to the signed-in user changing. Returns `true` if the session was cleared.
    pub fn on_identity_change(&mut self, identity: Option<&Identity>) -> bool {
        let stale = match (identity, &self.session) {
            (None, _) => true,
            (Some(identity), Some(session)) => session.employee_id != identity.employee_id,
            (Some(_), None) => false,
        };

        if stale {
            self.clear_logged();
        }
        stale
    }

    /// Re-reads the snapshot and tells whether `session` is still the running
    /// one. A logout, a newer login or a sign-out elsewhere all end it.
    pub fn is_current(&mut self, session: &AttendanceSession, identity: Option<&Identity>) -> bool {
        self.restore(identity).is_some_and(|stored| {
            stored.is_active
                && stored.employee_id == session.employee_id
                && stored.login_instant == session.login_instant
                && stored.date == session.date
        })
    }

    pub fn current(&self) -> Option<&AttendanceSession> {
        self.session.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.session.as_ref().is_some_and(|s| s.is_active)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn clear_logged(&mut self) {
        // failure is already logged inside clear()
        let _ = self.clear();
    }

    fn log_failure(operation: &str, result: &Result<(), PersistenceError>) {
        if let Err(e) = result {
            tracing::warn!(operation, "attendance snapshot write failed, continuing in memory: {}", e);
        }
    }
}
