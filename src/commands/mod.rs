pub mod init;
pub mod login;
pub mod logout;
pub mod records;
pub mod signin;
pub mod signout;
pub mod status;
pub mod watch;

use crate::db::snapshot::SqliteSnapshot;
use crate::libs::identity::Identity;
use crate::libs::messages::Message;
use crate::libs::session::{MemorySnapshot, Persisted, SessionStore, SnapshotStore};
use crate::msg_warning;
use anyhow::Result;
use clap::{Parser, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init,
    #[command(about = "Sign in as an employee")]
    Signin(signin::SigninArgs),
    #[command(about = "Sign out and discard the local attendance session")]
    Signout,
    #[command(about = "Mark login attendance")]
    Login(login::LoginArgs),
    #[command(about = "Mark logout attendance")]
    Logout(logout::LogoutArgs),
    #[command(about = "Show today's attendance")]
    Status,
    #[command(about = "Show the live work timer")]
    Watch,
    #[command(about = "Browse or add records in the remote attendance log")]
    Records(records::RecordsArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init => init::cmd(),
            Commands::Signin(args) => signin::cmd(args),
            Commands::Signout => signout::cmd(),
            Commands::Login(args) => login::cmd(args),
            Commands::Logout(args) => logout::cmd(args).await,
            Commands::Status => status::cmd(),
            Commands::Watch => watch::cmd().await,
            Commands::Records(args) => records::cmd(args).await,
        }
    }
}

/// Opens the session store and restores it for `identity`.
///
/// Falls back to a process-local snapshot when the database cannot be opened.
pub(crate) fn open_store(identity: Option<&Identity>) -> SessionStore<Box<dyn SnapshotStore>> {
    let storage: Box<dyn SnapshotStore> = match SqliteSnapshot::new() {
        Ok(snapshot) => Box::new(snapshot),
        Err(e) => {
            msg_warning!(Message::SnapshotUnavailable(e.to_string()));
            Box::new(MemorySnapshot::new())
        }
    };

    let mut store = SessionStore::new(storage);
    store.restore(identity);
    store
}

pub(crate) fn report_persistence<T>(persisted: &Persisted<T>) {
    if let Some(e) = &persisted.error {
        msg_warning!(Message::SnapshotWriteFailed(e.to_string()));
    }
}

/// Asks a yes/no question unless `assume_yes` is set.
pub(crate) fn ask(assume_yes: bool, prompt: Message) -> Result<bool> {
    if assume_yes {
        return Ok(true);
    }
    Ok(Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .default(false)
        .interact()?)
}
