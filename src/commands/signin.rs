use super::open_store;
use crate::libs::identity::{FileIdentity, Identity, IdentitySource};
use crate::libs::messages::Message;
use crate::{msg_bail_anyhow, msg_info, msg_success};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input};

#[derive(Debug, Args)]
pub struct SigninArgs {
    /// Employee ID
    #[arg(long)]
    id: Option<String>,

    /// Display name
    #[arg(long)]
    name: Option<String>,

    /// Role, e.g. admin, manager or employee
    #[arg(long)]
    role: Option<String>,
}

pub fn cmd(args: SigninArgs) -> Result<()> {
    let employee_id = match args.id {
        Some(id) => id,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptEmployeeId.to_string())
            .interact_text()?,
    };
    let name = match args.name {
        Some(name) => name,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptEmployeeName.to_string())
            .interact_text()?,
    };
    let role = match args.role {
        Some(role) => role,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptEmployeeRole.to_string())
            .default("employee".to_string())
            .interact_text()?,
    };

    let identity = build_identity(&employee_id, &name, &role)?;

    let source = FileIdentity::new()?;
    let previous = source.current();

    // A different employee must not inherit the previous user's session.
    let mut store = open_store(previous.as_ref());
    if previous.is_some() && store.on_identity_change(Some(&identity)) {
        msg_info!(Message::SessionCleared);
    }

    source.save(&identity)?;

    msg_success!(Message::SignedIn(identity.name));
    Ok(())
}

/// Normalizes sign-in input. Id and name are required; a blank role means none.
fn build_identity(employee_id: &str, name: &str, role: &str) -> Result<Identity> {
    let employee_id = employee_id.trim();
    let name = name.trim();
    if employee_id.is_empty() {
        msg_bail_anyhow!(Message::IdentityFieldRequired(Message::PromptEmployeeId.to_string()));
    }
    if name.is_empty() {
        msg_bail_anyhow!(Message::IdentityFieldRequired(Message::PromptEmployeeName.to_string()));
    }

    let identity = Identity::new(employee_id, name);
    let role = role.trim().to_lowercase();
    Ok(if role.is_empty() { identity } else { identity.with_role(&role) })
}
