use super::{ask, open_store, report_persistence};
use crate::libs::clock::{Clock, SystemClock};
use crate::libs::confirmation::{AttendanceAction, ConfirmationWorkflow};
use crate::libs::error::WorkflowError;
use crate::libs::identity::{FileIdentity, IdentitySource};
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_bail_anyhow, msg_info, msg_print, msg_success, msg_warning};
use anyhow::Result;
use clap::Args;
use std::sync::Arc;

#[derive(Debug, Args)]
pub struct LoginArgs {
    /// Skip the confirmation prompt
    #[arg(long, short)]
    yes: bool,
}

pub fn cmd(args: LoginArgs) -> Result<()> {
    let Some(identity) = FileIdentity::new()?.current() else {
        msg_bail_anyhow!(Message::NotSignedIn);
    };

    let mut store = open_store(Some(&identity));
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let mut workflow = ConfirmationWorkflow::new(clock);

    if let Some(previous) = store.current().filter(|s| s.is_active) {
        msg_warning!(Message::SessionOverwritten(previous.login_instant.clone()));
    }

    let pending = workflow.propose(AttendanceAction::Login, &store)?;
    msg_print!(Message::LoginAttendanceHeader, true);
    View::proposal(pending, Some(&identity));

    if !ask(args.yes, Message::ConfirmLogin)? {
        workflow.cancel();
        msg_info!(Message::OperationCancelled);
        return Ok(());
    }

    let persisted = match workflow.confirm(&mut store, Some(&identity)) {
        Ok(persisted) => persisted,
        Err(WorkflowError::NothingPending) => {
            msg_info!(Message::NothingToConfirm);
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };
    report_persistence(&persisted);
    msg_success!(Message::LoginConfirmed);

    let session = persisted.into_value();
    View::session(&session, Some(&session.login_instant));
    Ok(())
}
