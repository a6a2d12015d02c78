use super::open_store;
use crate::libs::clock::{Clock, SystemClock};
use crate::libs::config::Config;
use crate::libs::formatter::format_duration;
use crate::libs::identity::{FileIdentity, IdentitySource};
use crate::libs::messages::Message;
use crate::libs::ticker::Ticker;
use crate::{msg_debug, msg_error, msg_info};
use anyhow::Result;
use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

/// How often the durable snapshot is re-read to notice a logout or sign-out
/// made by another process.
const SESSION_CHECK_INTERVAL: Duration = Duration::from_secs(5);

pub async fn cmd() -> Result<()> {
    let source = FileIdentity::new()?;
    let identity = source.current();
    let mut store = open_store(identity.as_ref());

    let Some(session) = store.current().filter(|s| s.is_active).cloned() else {
        msg_info!(Message::NoActiveSession);
        return Ok(());
    };

    let interval = Config::read().unwrap_or_default().ticker.unwrap_or_default().interval();
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let ticker = Ticker::new(clock, interval);
    msg_debug!(Message::TimerInterval(ticker.period().as_millis()));

    let mut subscription = match ticker.start(&session, |worked| {
        print!("\r{}   ", Message::TimerRunning(format_duration(&worked)));
        let _ = std::io::stdout().flush();
    }) {
        Ok(subscription) => subscription,
        Err(e) => {
            msg_error!(Message::TimerStartFailed(e.to_string()));
            return Ok(());
        }
    };

    let mut checks = tokio::time::interval(SESSION_CHECK_INTERVAL);
    checks.tick().await;

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            _ = checks.tick() => {
                if !store.is_current(&session, source.current().as_ref()) {
                    subscription.stop();
                    println!();
                    msg_info!(Message::TimerSessionEnded);
                    return Ok(());
                }
            }
        }
    }

    subscription.stop();
    println!();
    msg_info!(Message::TimerStopped);
    Ok(())
}
