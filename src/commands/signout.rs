use super::open_store;
use crate::libs::identity::{FileIdentity, IdentitySource};
use crate::libs::messages::Message;
use crate::{msg_info, msg_success};
use anyhow::Result;

pub fn cmd() -> Result<()> {
    let source = FileIdentity::new()?;
    let mut store = open_store(source.current().as_ref());
    let had_session = store.current().is_some();

    source.remove()?;

    // Losing the identity discards the session unconditionally.
    store.on_identity_change(None);
    if had_session {
        msg_info!(Message::SessionCleared);
    }

    msg_success!(Message::SignedOut);
    Ok(())
}
