//! Live work timer for an active attendance session.
//!
//! The ticker recomputes the elapsed time from the session's fixed login
//! instant on every tick, rather than counting ticks, so a late or skipped
//! tick never makes the displayed value drift or go backwards.
//!
//! The periodic task belongs to the [`TickerSubscription`] returned by
//! [`Ticker::start`]. Stopping it is unconditional and idempotent, and
//! dropping the subscription stops it too, so a view that goes away cannot
//! leak its timer.
//!
//! ```rust,no_run
//! use clockin::libs::clock::SystemClock;
//! use clockin::libs::ticker::Ticker;
//! use std::sync::Arc;
//! # fn demo(session: &clockin::libs::session::AttendanceSession) -> anyhow::Result<()> {
//! let ticker = Ticker::new(Arc::new(SystemClock), std::time::Duration::from_secs(1));
//! let mut subscription = ticker.start(session, |worked| println!("{}", worked))?;
//! // ...
//! subscription.stop();
//! # Ok(())
//! # }
//! ```

use super::clock::Clock;
use super::duration::{elapsed_across_days, WorkDuration};
use super::error::TickerError;
use super::session::AttendanceSession;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};

pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_secs(1);

#[derive(Clone)]
pub struct Ticker {
    clock: Arc<dyn Clock>,
    period: Duration,
}

impl Ticker {
    pub fn new(clock: Arc<dyn Clock>, period: Duration) -> Self {
        Self { clock, period }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Starts publishing the elapsed time of `session` to `on_tick`.
    ///
    /// The first value is delivered right away. Must be called from within a
    /// tokio runtime.
    pub fn start<F>(&self, session: &AttendanceSession, mut on_tick: F) -> Result<TickerSubscription, TickerError>
    where
        F: FnMut(WorkDuration) + Send + 'static,
    {
        if !session.is_active {
            return Err(TickerError::InactiveSession);
        }

        let (stop_tx, mut stop_rx) = oneshot::channel::<()>();
        let stopped = Arc::new(AtomicBool::new(false));
        let login_instant = session.login_instant.clone();
        let login_date = session.date;
        let clock = self.clock.clone();
        let period = self.period;
        let task_stopped = stopped.clone();

        tracing::debug!(login = %login_instant, ?period, "starting attendance ticker");

        let handle = tokio::spawn(async move {
            let mut interval = time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                tokio::select! {
                    _ = &mut stop_rx => break,
                    _ = interval.tick() => {
                        if task_stopped.load(Ordering::Acquire) {
                            break;
                        }
                        let worked = match elapsed_across_days(&login_instant, login_date, &clock.now_clock(), clock.today()) {
                            Ok(worked) => worked,
                            Err(e) => {
                                tracing::warn!(input = %e.input, "ticker could not compute elapsed time: {}", e);
                                WorkDuration::zero()
                            }
                        };
                        on_tick(worked);
                    }
                }
            }
        });

        Ok(TickerSubscription {
            stop_tx: Some(stop_tx),
            handle: Some(handle),
            stopped,
        })
    }
}

/// Handle to a running ticker.
#[derive(Debug)]
pub struct TickerSubscription {
    stop_tx: Option<oneshot::Sender<()>>,
    handle: Option<JoinHandle<()>>,
    stopped: Arc<AtomicBool>,
}

impl TickerSubscription {
    /// Cancels the periodic task. Calling it again does nothing.
    pub fn stop(&mut self) {
        self.stopped.store(true, Ordering::Release);
        if let Some(stop_tx) = self.stop_tx.take() {
            let _ = stop_tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            handle.abort();
            tracing::debug!("attendance ticker stopped");
        }
    }

    pub fn is_running(&self) -> bool {
        !self.stopped.load(Ordering::Acquire)
    }
}

impl Drop for TickerSubscription {
    fn drop(&mut self) {
        self.stop();
    }
}
