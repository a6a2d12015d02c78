//! Two-step confirmation for attendance transitions.
//!
//! Pressing login or logout only *proposes* the transition. The proposal
//! freezes the instant it will apply (the value the user sees in the
//! dialog); confirming applies exactly that instant, cancelling discards it.
//!
//! ```text
//!   Idle ──propose──▶ Proposed ──confirm──▶ store.login / store.logout ──▶ Idle
//!                        │  ▲
//!                 cancel │  │ propose (replaces the pending one)
//!                        ▼  │
//!                       Idle
//! ```
//!
//! At most one proposal is pending at a time. Logout can only be proposed
//! while a session is active; login can always be proposed.

use super::clock::Clock;
use super::duration::{elapsed_or_zero, WorkDuration};
use super::error::WorkflowError;
use super::identity::Identity;
use super::session::{AttendanceSession, Persisted, SessionStore, SnapshotStore};
use chrono::NaiveDate;
use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttendanceAction {
    Login,
    Logout,
}

impl fmt::Display for AttendanceAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttendanceAction::Login => write!(f, "login"),
            AttendanceAction::Logout => write!(f, "logout"),
        }
    }
}

/// A transition waiting for the user's answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingConfirmation {
    pub action: AttendanceAction,
    /// Instant the transition will record, captured at proposal time.
    pub instant: String,
    pub date: NaiveDate,
    /// For logout: login instant of the session being closed.
    pub login_instant: Option<String>,
    /// For logout: working period up to `instant`.
    pub summary: Option<WorkDuration>,
}

pub struct ConfirmationWorkflow {
    clock: Arc<dyn Clock>,
    pending: Option<PendingConfirmation>,
}

impl ConfirmationWorkflow {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock, pending: None }
    }

    /// Opens a proposal, replacing any pending one.
    pub fn propose<S: SnapshotStore>(&mut self, action: AttendanceAction, store: &SessionStore<S>) -> Result<&PendingConfirmation, WorkflowError> {
        let instant = self.clock.now_clock();
        let date = self.clock.today();

        let (login_instant, summary) = match action {
            AttendanceAction::Login => (None, None),
            AttendanceAction::Logout => {
                let session = store.current().filter(|s| s.is_active).ok_or(WorkflowError::NoActiveSession)?;
                let worked = elapsed_or_zero(&session.login_instant, &instant);
                (Some(session.login_instant.clone()), Some(worked))
            }
        };

        if let Some(replaced) = &self.pending {
            tracing::debug!(replaced = %replaced.action, with = %action, "replacing pending confirmation");
        }

        Ok(self.pending.insert(PendingConfirmation {
            action,
            instant,
            date,
            login_instant,
            summary,
        }))
    }

    /// Discards the pending proposal, if any.
    pub fn cancel(&mut self) -> Option<PendingConfirmation> {
        self.pending.take()
    }

    /// Applies the pending proposal to the store with its captured instant.
    ///
    /// The workflow returns to idle whether or not the transition is allowed.
    pub fn confirm<S: SnapshotStore>(
        &mut self,
        store: &mut SessionStore<S>,
        identity: Option<&Identity>,
    ) -> Result<Persisted<AttendanceSession>, WorkflowError> {
        let pending = self.pending.take().ok_or(WorkflowError::NothingPending)?;

        match pending.action {
            AttendanceAction::Login => {
                let identity = identity.ok_or(WorkflowError::NotSignedIn)?;
                Ok(store.login(identity, &pending.instant, pending.date))
            }
            AttendanceAction::Logout => store.logout(&pending.instant).ok_or(WorkflowError::NoActiveSession),
        }
    }

    pub fn pending(&self) -> Option<&PendingConfirmation> {
        self.pending.as_ref()
    }

    pub fn is_idle(&self) -> bool {
        self.pending.is_none()
    }
}
