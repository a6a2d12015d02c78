use super::open_store;
use crate::libs::clock::{Clock, SystemClock};
use crate::libs::identity::{FileIdentity, IdentitySource};
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_error, msg_info};
use anyhow::Result;

pub fn cmd() -> Result<()> {
    let identity = FileIdentity::new()?.current();
    let store = open_store(identity.as_ref());
    if identity.is_none() {
        msg_error!(Message::NotSignedIn);
        return Ok(());
    }

    match store.current() {
        Some(session) => View::session(session, Some(&SystemClock.now_clock())),
        None => msg_info!(Message::AttendanceNotFound),
    }
    Ok(())
}
