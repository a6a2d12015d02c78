use super::{ask, open_store, report_persistence};
use crate::api::{AttendanceApi, AttendanceRecord, AttendanceStatus};
use crate::libs::clock::{Clock, SystemClock};
use crate::libs::config::Config;
use crate::libs::confirmation::{AttendanceAction, ConfirmationWorkflow};
use crate::libs::error::WorkflowError;
use crate::libs::identity::{FileIdentity, IdentitySource};
use crate::libs::messages::Message;
use crate::libs::session::AttendanceSession;
use crate::libs::view::View;
use crate::{msg_error, msg_info, msg_print, msg_success, msg_warning};
use anyhow::Result;
use clap::Args;
use std::sync::Arc;

#[derive(Debug, Args)]
pub struct LogoutArgs {
    /// Skip the confirmation prompt
    #[arg(long, short)]
    yes: bool,
}

pub async fn cmd(args: LogoutArgs) -> Result<()> {
    let identity = FileIdentity::new()?.current();
    let mut store = open_store(identity.as_ref());
    if identity.is_none() {
        msg_error!(Message::NotSignedIn);
        return Ok(());
    }

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let mut workflow = ConfirmationWorkflow::new(clock);

    let pending = match workflow.propose(AttendanceAction::Logout, &store) {
        Ok(pending) => pending,
        Err(WorkflowError::NoActiveSession) => {
            msg_info!(Message::NoActiveSession);
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };
    msg_print!(Message::LogoutSummaryHeader, true);
    View::proposal(pending, identity.as_ref());

    if !ask(args.yes, Message::ConfirmLogout)? {
        workflow.cancel();
        msg_info!(Message::OperationCancelled);
        return Ok(());
    }

    let persisted = match workflow.confirm(&mut store, identity.as_ref()) {
        Ok(persisted) => persisted,
        Err(WorkflowError::NothingPending) => {
            msg_info!(Message::NothingToConfirm);
            return Ok(());
        }
        Err(WorkflowError::NoActiveSession) => {
            msg_info!(Message::NoActiveSession);
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };
    report_persistence(&persisted);
    msg_success!(Message::LogoutCompleted);

    let session = persisted.into_value();
    View::session(&session, None);

    sync_record(&session).await;
    Ok(())
}

/// Appends the closed session to the remote log, if one is configured.
/// Local state is kept whatever the outcome.
async fn sync_record(session: &AttendanceSession) {
    let api_config = match Config::read() {
        Ok(Config { api: Some(api), .. }) if api.sync_on_logout => api,
        Ok(_) => return,
        Err(e) => {
            msg_warning!(Message::RecordSyncFailed(e.to_string()));
            return;
        }
    };

    let record = AttendanceRecord {
        id: None,
        name: session.employee_name.clone(),
        date: session.date_label(),
        punch_in: session.login_instant.clone(),
        punch_out: session.logout_instant.clone().unwrap_or_default(),
        status: AttendanceStatus::Present,
    };

    let result = match AttendanceApi::new(&api_config) {
        Ok(api) => api.create(&record).await.map(|_| ()),
        Err(e) => Err(e),
    };
    match result {
        Ok(()) => msg_info!(Message::RecordCreated(record.name)),
        Err(e) => msg_warning!(Message::RecordSyncFailed(e.to_string())),
    }
}
