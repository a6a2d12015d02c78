use super::confirmation::PendingConfirmation;
use super::formatter::{format_duration, format_optional, EMPTY_CELL};
use super::identity::Identity;
use super::messages::Message;
use super::session::AttendanceSession;
use crate::api::AttendanceRecord;
use crate::libs::clock::DATE_FORMAT;
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// The "Today's Attendance" table. `now` feeds the timer column while
    /// the session is active.
    pub fn session(session: &AttendanceSession, now: Option<&str>) {
        let mut table = Table::new();

        table.add_row(row!["EMPLOYEE ID", "EMPLOYEE NAME", "DATE", "LOGIN TIME", "LOGOUT TIME", "WORKING PERIOD", "TIMER"]);
        let timer = match (session.is_active, now) {
            (true, Some(now)) => format_duration(&session.elapsed_until(now)),
            _ => EMPTY_CELL.to_string(),
        };
        table.add_row(row![
            session.employee_id,
            session.employee_name,
            session.date_label(),
            session.login_instant,
            session.logout_instant.as_deref().unwrap_or(EMPTY_CELL),
            format_optional(session.working_period().as_ref()),
            timer
        ]);

        println!("{}", Message::TodaysAttendanceHeader);
        table.printstd();
    }

    /// Contents of the login / logout dialog.
    pub fn proposal(pending: &PendingConfirmation, identity: Option<&Identity>) {
        let mut table = Table::new();

        table.add_row(row!["Employee ID", identity.map(|i| i.employee_id.as_str()).unwrap_or(EMPTY_CELL)]);
        table.add_row(row!["Employee Name", identity.map(|i| i.name.as_str()).unwrap_or(EMPTY_CELL)]);
        table.add_row(row!["Date", pending.date.format(DATE_FORMAT)]);
        if let Some(login) = &pending.login_instant {
            table.add_row(row!["Login Time", login]);
            table.add_row(row!["Logout Time", pending.instant]);
        } else {
            table.add_row(row!["Current Time", pending.instant]);
        }
        if let Some(summary) = &pending.summary {
            table.add_row(row!["Working Hours", format_duration(summary)]);
        }

        table.printstd();
    }

    pub fn records(records: &[&AttendanceRecord]) {
        let mut table = Table::new();

        table.add_row(row!["NAME", "DATE", "PUNCH IN", "PUNCH OUT", "STATUS"]);
        for record in records {
            table.add_row(row![record.name, record.date, record.punch_in, record.punch_out, record.status]);
        }
        table.printstd();
    }
}
