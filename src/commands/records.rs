use crate::api::{filter_records, AttendanceApi, AttendanceRecord, AttendanceStatus};
use crate::libs::clock::DATE_FORMAT;
use crate::libs::config::Config;
use crate::libs::duration::parse_clock;
use crate::libs::identity::{FileIdentity, IdentitySource};
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_bail_anyhow, msg_error_anyhow, msg_info, msg_success};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct RecordsArgs {
    #[command(subcommand)]
    command: RecordsCommand,
}

#[derive(Debug, Subcommand)]
enum RecordsCommand {
    /// List records, optionally filtered
    List {
        /// Case-insensitive part of the employee name
        #[arg(long, short, default_value = "")]
        search: String,

        /// Date or date prefix (YYYY-MM-DD, YYYY-MM)
        #[arg(long, short, default_value = "")]
        date: String,
    },
    /// Add a record to the remote log
    Add {
        #[arg(long)]
        name: String,

        /// Date (YYYY-MM-DD or 'today')
        #[arg(long, default_value = "today")]
        date: String,

        /// Punch-in time, e.g. "09:00:00 AM"
        #[arg(long)]
        punch_in: String,

        /// Punch-out time, e.g. "05:30:00 PM"
        #[arg(long)]
        punch_out: String,

        #[arg(long, value_enum, default_value = "present")]
        status: AttendanceStatus,
    },
}

pub async fn cmd(args: RecordsArgs) -> Result<()> {
    let Some(api_config) = Config::read()?.api else {
        msg_bail_anyhow!(Message::ApiNotConfigured);
    };
    let api = AttendanceApi::new(&api_config)?;

    match args.command {
        RecordsCommand::List { search, date } => {
            let filtering = !search.trim().is_empty() || !date.trim().is_empty();
            if filtering && !FileIdentity::new()?.current().is_some_and(|i| i.can_filter_records()) {
                msg_bail_anyhow!(Message::FiltersRequireManager);
            }
            let records = api.list().await?;
            let filtered = filter_records(&records, &search, &date);
            if filtered.is_empty() {
                msg_info!(Message::RecordsNotFound);
            } else {
                View::records(&filtered);
            }
        }
        RecordsCommand::Add {
            name,
            date,
            punch_in,
            punch_out,
            status,
        } => {
            for time in [&punch_in, &punch_out] {
                parse_clock(time).map_err(|e| msg_error_anyhow!(Message::InvalidClockTime(e.input)))?;
            }
            let record = AttendanceRecord {
                id: None,
                name,
                date: parse_date(&date)?.format(DATE_FORMAT).to_string(),
                punch_in,
                punch_out,
                status,
            };
            let created = api.create(&record).await?;
            msg_success!(Message::RecordCreated(created.name));
        }
    }
    Ok(())
}

fn parse_date(date: &str) -> Result<NaiveDate> {
    if date.eq_ignore_ascii_case("today") {
        return Ok(Local::now().date_naive());
    }
    NaiveDate::parse_from_str(date, DATE_FORMAT).map_err(|_| msg_error_anyhow!(Message::InvalidDate(date.to_string())))
}
