#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate};
    use clockin::libs::clock::ManualClock;
    use clockin::libs::confirmation::{AttendanceAction, ConfirmationWorkflow};
    use clockin::libs::duration::{elapsed, WorkDuration};
    use clockin::libs::error::WorkflowError;
    use clockin::libs::identity::Identity;
    use clockin::libs::session::{MemorySnapshot, SessionStore};
    use std::sync::Arc;
    use test_context::{test_context, TestContext};

    struct WorkflowTestContext {
        clock: Arc<ManualClock>,
        store: SessionStore<MemorySnapshot>,
        workflow: ConfirmationWorkflow,
        dana: Identity,
    }

    impl TestContext for WorkflowTestContext {
        fn setup() -> Self {
            let start = NaiveDate::from_ymd_opt(2025, 5, 2).unwrap().and_hms_opt(9, 0, 0).unwrap();
            let clock = Arc::new(ManualClock::new(start));
            WorkflowTestContext {
                workflow: ConfirmationWorkflow::new(clock.clone()),
                clock,
                store: SessionStore::new(MemorySnapshot::new()),
                dana: Identity::new("E-7", "Dana"),
            }
        }
    }

    impl WorkflowTestContext {
        fn set_time(&self, h: u32, m: u32, s: u32) {
            self.clock.set(NaiveDate::from_ymd_opt(2025, 5, 2).unwrap().and_hms_opt(h, m, s).unwrap());
        }

        fn login(&mut self) {
            self.workflow.propose(AttendanceAction::Login, &self.store).unwrap();
            let _ = self.workflow.confirm(&mut self.store, Some(&self.dana)).unwrap();
        }
    }

    #[test_context(WorkflowTestContext)]
    #[test]
    fn test_login_scenario(ctx: &mut WorkflowTestContext) {
        let pending = ctx.workflow.propose(AttendanceAction::Login, &ctx.store).unwrap();
        assert_eq!(pending.action, AttendanceAction::Login);
        assert_eq!(pending.instant, "09:00:00 AM");
        assert_eq!(pending.summary, None);

        let session = ctx.workflow.confirm(&mut ctx.store, Some(&ctx.dana)).unwrap().into_value();
        assert!(session.is_active);
        assert_eq!(session.login_instant, "09:00:00 AM");
        assert_eq!(session.date, NaiveDate::from_ymd_opt(2025, 5, 2).unwrap());
        assert!(ctx.workflow.is_idle());
    }

    #[test_context(WorkflowTestContext)]
    #[test]
    fn test_logout_scenario(ctx: &mut WorkflowTestContext) {
        ctx.login();

        ctx.set_time(17, 30, 15);
        let pending = ctx.workflow.propose(AttendanceAction::Logout, &ctx.store).unwrap();
        assert_eq!(pending.instant, "05:30:15 PM");
        assert_eq!(pending.login_instant.as_deref(), Some("09:00:00 AM"));
        assert_eq!(pending.summary, Some(WorkDuration { hours: 8, minutes: 30, seconds: 15 }));

        let session = ctx.workflow.confirm(&mut ctx.store, Some(&ctx.dana)).unwrap().into_value();
        assert!(!session.is_active);

        let worked = elapsed(&session.login_instant, session.logout_instant.as_deref().unwrap()).unwrap();
        assert_eq!(worked, WorkDuration { hours: 8, minutes: 30, seconds: 15 });
        assert_eq!(worked.to_string(), "8h 30m 15s");
    }

    #[test_context(WorkflowTestContext)]
    #[test]
    fn test_instant_is_fixed_at_proposal_time(ctx: &mut WorkflowTestContext) {
        ctx.workflow.propose(AttendanceAction::Login, &ctx.store).unwrap();

        // the user takes a while to answer the dialog
        ctx.clock.advance(Duration::minutes(3));
        let session = ctx.workflow.confirm(&mut ctx.store, Some(&ctx.dana)).unwrap().into_value();

        assert_eq!(session.login_instant, "09:00:00 AM");
    }

    #[test_context(WorkflowTestContext)]
    #[test]
    fn test_cancel_discards_proposal(ctx: &mut WorkflowTestContext) {
        ctx.workflow.propose(AttendanceAction::Login, &ctx.store).unwrap();
        let cancelled = ctx.workflow.cancel().unwrap();

        assert_eq!(cancelled.action, AttendanceAction::Login);
        assert!(ctx.workflow.is_idle());
        assert!(ctx.store.current().is_none());
        assert_eq!(ctx.workflow.confirm(&mut ctx.store, Some(&ctx.dana)).unwrap_err(), WorkflowError::NothingPending);
    }

    #[test_context(WorkflowTestContext)]
    #[test]
    fn test_logout_not_proposable_without_session(ctx: &mut WorkflowTestContext) {
        let err = ctx.workflow.propose(AttendanceAction::Logout, &ctx.store).unwrap_err();
        assert_eq!(err, WorkflowError::NoActiveSession);
        assert!(ctx.workflow.is_idle());

        ctx.login();
        ctx.workflow.propose(AttendanceAction::Logout, &ctx.store).unwrap();
        let _ = ctx.workflow.confirm(&mut ctx.store, Some(&ctx.dana)).unwrap();

        let err = ctx.workflow.propose(AttendanceAction::Logout, &ctx.store).unwrap_err();
        assert_eq!(err, WorkflowError::NoActiveSession);
    }

    #[test_context(WorkflowTestContext)]
    #[test]
    fn test_last_proposal_wins(ctx: &mut WorkflowTestContext) {
        ctx.login();

        ctx.set_time(12, 0, 0);
        ctx.workflow.propose(AttendanceAction::Logout, &ctx.store).unwrap();
        ctx.set_time(12, 10, 0);
        ctx.workflow.propose(AttendanceAction::Login, &ctx.store).unwrap();

        assert_eq!(ctx.workflow.pending().unwrap().action, AttendanceAction::Login);
        let session = ctx.workflow.confirm(&mut ctx.store, Some(&ctx.dana)).unwrap().into_value();
        assert!(session.is_active);
        assert_eq!(session.login_instant, "12:10:00 PM");
    }

    #[test_context(WorkflowTestContext)]
    #[test]
    fn test_double_login_scenario(ctx: &mut WorkflowTestContext) {
        ctx.login();
        ctx.set_time(9, 5, 0);
        ctx.login();

        let session = ctx.store.current().unwrap();
        assert!(session.is_active);
        assert_eq!(session.login_instant, "09:05:00 AM");
    }

    #[test_context(WorkflowTestContext)]
    #[test]
    fn test_login_requires_identity(ctx: &mut WorkflowTestContext) {
        ctx.workflow.propose(AttendanceAction::Login, &ctx.store).unwrap();
        let err = ctx.workflow.confirm(&mut ctx.store, None).unwrap_err();

        assert_eq!(err, WorkflowError::NotSignedIn);
        assert!(ctx.workflow.is_idle());
        assert!(ctx.store.current().is_none());
    }

    #[test_context(WorkflowTestContext)]
    #[test]
    fn test_logout_refused_if_session_vanished_before_confirm(ctx: &mut WorkflowTestContext) {
        ctx.login();
        ctx.workflow.propose(AttendanceAction::Logout, &ctx.store).unwrap();

        // signed out while the dialog was open
        ctx.store.on_identity_change(None);

        let err = ctx.workflow.confirm(&mut ctx.store, None).unwrap_err();
        assert_eq!(err, WorkflowError::NoActiveSession);
        assert!(ctx.store.current().is_none());
    }
}
