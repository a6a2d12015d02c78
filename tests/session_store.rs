#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use clockin::db::snapshot::{SqliteSnapshot, KEY_IS_ACTIVE, KEY_LOGIN_INSTANT, KEY_LOGOUT_INSTANT};
    use clockin::libs::duration::WorkDuration;
    use clockin::libs::error::PersistenceError;
    use clockin::libs::identity::Identity;
    use clockin::libs::session::{AttendanceSession, MemorySnapshot, SessionStore, SnapshotStore};
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct StoreTestContext {
        _temp_dir: TempDir,
        db_path: PathBuf,
        dana: Identity,
        ola: Identity,
        date: NaiveDate,
    }

    impl TestContext for StoreTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db_path = temp_dir.path().join("clockin.db");
            StoreTestContext {
                _temp_dir: temp_dir,
                db_path,
                dana: Identity::new("E-7", "Dana"),
                ola: Identity::new("E-9", "Ola"),
                date: NaiveDate::from_ymd_opt(2025, 5, 2).unwrap(),
            }
        }
    }

    impl StoreTestContext {
        /// A fresh store over the on-disk snapshot, as after a process start.
        fn store(&self) -> SessionStore<SqliteSnapshot> {
            SessionStore::new(SqliteSnapshot::open(&self.db_path).unwrap())
        }
    }

    /// Snapshot whose writes always fail.
    struct BrokenSnapshot;

    impl SnapshotStore for BrokenSnapshot {
        fn load(&self) -> Result<Option<AttendanceSession>, PersistenceError> {
            Err(PersistenceError::Corrupt("unreadable".into()))
        }

        fn save(&mut self, _session: &AttendanceSession) -> Result<(), PersistenceError> {
            Err(std::io::Error::other("disk full").into())
        }

        fn clear(&mut self) -> Result<(), PersistenceError> {
            Err(std::io::Error::other("disk full").into())
        }
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_login_starts_active_session(ctx: &mut StoreTestContext) {
        let mut store = ctx.store();
        let persisted = store.login(&ctx.dana, "09:00:00 AM", ctx.date);

        assert!(persisted.is_durable());
        let session = persisted.into_value();
        assert!(session.is_active);
        assert_eq!(session.employee_id, "E-7");
        assert_eq!(session.employee_name, "Dana");
        assert_eq!(session.login_instant, "09:00:00 AM");
        assert_eq!(session.logout_instant, None);
        assert_eq!(session.date, ctx.date);
        assert!(store.is_active());
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_login_survives_restart(ctx: &mut StoreTestContext) {
        {
            let mut store = ctx.store();
            let _ = store.login(&ctx.dana, "09:00:00 AM", ctx.date);
        }

        let mut store = ctx.store();
        let restored = store.restore(Some(&ctx.dana)).cloned().unwrap();
        assert_eq!(restored.employee_id, "E-7");
        assert_eq!(restored.login_instant, "09:00:00 AM");
        assert!(restored.is_active);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_logout_closes_and_persists(ctx: &mut StoreTestContext) {
        let mut store = ctx.store();
        let _ = store.login(&ctx.dana, "09:00:00 AM", ctx.date);
        let closed = store.logout("05:30:15 PM").unwrap().into_value();

        assert!(!closed.is_active);
        assert_eq!(closed.logout_instant.as_deref(), Some("05:30:15 PM"));
        assert_eq!(closed.working_period(), Some(WorkDuration { hours: 8, minutes: 30, seconds: 15 }));

        let snapshot = store.storage();
        assert_eq!(snapshot.entry(KEY_IS_ACTIVE).unwrap().as_deref(), Some("false"));
        assert_eq!(snapshot.entry(KEY_LOGOUT_INSTANT).unwrap().as_deref(), Some("05:30:15 PM"));

        let mut reopened = ctx.store();
        let restored = reopened.restore(Some(&ctx.dana)).cloned().unwrap();
        assert_eq!(restored, closed);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_logout_without_active_session_is_noop(ctx: &mut StoreTestContext) {
        let mut store = ctx.store();
        assert!(store.logout("05:00:00 PM").is_none());

        let _ = store.login(&ctx.dana, "09:00:00 AM", ctx.date);
        let _ = store.logout("10:00:00 AM");
        assert!(store.logout("11:00:00 AM").is_none());
        assert_eq!(store.current().unwrap().logout_instant.as_deref(), Some("10:00:00 AM"));
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_double_login_overwrites(ctx: &mut StoreTestContext) {
        let mut store = ctx.store();
        let _ = store.login(&ctx.dana, "09:00:00 AM", ctx.date);
        let _ = store.login(&ctx.dana, "09:05:00 AM", ctx.date);

        assert_eq!(store.current().unwrap().login_instant, "09:05:00 AM");
        assert_eq!(store.storage().entry(KEY_LOGIN_INSTANT).unwrap().as_deref(), Some("09:05:00 AM"));

        let mut reopened = ctx.store();
        assert_eq!(reopened.restore(Some(&ctx.dana)).unwrap().login_instant, "09:05:00 AM");
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_login_after_logout_starts_fresh(ctx: &mut StoreTestContext) {
        let mut store = ctx.store();
        let _ = store.login(&ctx.dana, "09:00:00 AM", ctx.date);
        let _ = store.logout("12:00:00 PM");
        let session = store.login(&ctx.dana, "01:00:00 PM", ctx.date).into_value();

        assert!(session.is_active);
        assert_eq!(session.logout_instant, None);
        assert_eq!(store.storage().entry(KEY_LOGOUT_INSTANT).unwrap(), None);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_identity_loss_clears_session(ctx: &mut StoreTestContext) {
        let mut store = ctx.store();
        let _ = store.login(&ctx.dana, "09:00:00 AM", ctx.date);

        assert!(store.on_identity_change(None));
        assert!(store.current().is_none());
        assert!(store.storage().is_empty().unwrap());

        let mut reopened = ctx.store();
        assert!(reopened.restore(Some(&ctx.dana)).is_none());
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_restore_without_identity_clears(ctx: &mut StoreTestContext) {
        {
            let mut store = ctx.store();
            let _ = store.login(&ctx.dana, "09:00:00 AM", ctx.date);
        }

        let mut store = ctx.store();
        assert!(store.restore(None).is_none());
        assert!(store.storage().is_empty().unwrap());
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_closed_session_is_cleared_on_identity_loss_too(ctx: &mut StoreTestContext) {
        let mut store = ctx.store();
        let _ = store.login(&ctx.dana, "09:00:00 AM", ctx.date);
        let _ = store.logout("10:00:00 AM");

        assert!(store.on_identity_change(None));
        assert!(store.storage().is_empty().unwrap());
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_other_employee_does_not_inherit_session(ctx: &mut StoreTestContext) {
        {
            let mut store = ctx.store();
            let _ = store.login(&ctx.dana, "09:00:00 AM", ctx.date);
        }

        let mut store = ctx.store();
        assert!(store.restore(Some(&ctx.ola)).is_none());
        assert!(store.storage().is_empty().unwrap());
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_same_identity_keeps_session(ctx: &mut StoreTestContext) {
        let mut store = ctx.store();
        let _ = store.login(&ctx.dana, "09:00:00 AM", ctx.date);

        assert!(!store.on_identity_change(Some(&ctx.dana)));
        assert!(store.is_active());

        assert!(store.on_identity_change(Some(&ctx.ola)));
        assert!(store.current().is_none());
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_watched_session_ends_on_logout_elsewhere(ctx: &mut StoreTestContext) {
        let mut watcher = ctx.store();
        let session = watcher.login(&ctx.dana, "09:00:00 AM", ctx.date).into_value();
        assert!(watcher.is_current(&session, Some(&ctx.dana)));

        let mut other = ctx.store();
        other.restore(Some(&ctx.dana));
        let _ = other.logout("12:00:00 PM").unwrap();

        assert!(!watcher.is_current(&session, Some(&ctx.dana)));
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_watched_session_ends_on_new_login(ctx: &mut StoreTestContext) {
        let mut watcher = ctx.store();
        let session = watcher.login(&ctx.dana, "09:00:00 AM", ctx.date).into_value();

        let mut other = ctx.store();
        let _ = other.login(&ctx.dana, "09:05:00 AM", ctx.date);

        assert!(!watcher.is_current(&session, Some(&ctx.dana)));
        assert_eq!(watcher.current().unwrap().login_instant, "09:05:00 AM");
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_watched_session_ends_on_sign_out(ctx: &mut StoreTestContext) {
        let mut watcher = ctx.store();
        let session = watcher.login(&ctx.dana, "09:00:00 AM", ctx.date).into_value();

        assert!(!watcher.is_current(&session, None));
        assert!(watcher.current().is_none());
        assert!(watcher.storage().is_empty().unwrap());
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_watched_session_ends_when_someone_else_signs_in(ctx: &mut StoreTestContext) {
        let mut watcher = ctx.store();
        let session = watcher.login(&ctx.dana, "09:00:00 AM", ctx.date).into_value();

        assert!(!watcher.is_current(&session, Some(&ctx.ola)));
    }

    #[test]
    fn test_write_failure_is_reported_but_state_moves_on() {
        let mut store = SessionStore::new(BrokenSnapshot);
        let dana = Identity::new("E-7", "Dana");
        let date = NaiveDate::from_ymd_opt(2025, 5, 2).unwrap();

        let persisted = store.login(&dana, "09:00:00 AM", date);
        assert!(!persisted.is_durable());
        assert!(matches!(persisted.error, Some(PersistenceError::Io(_))));
        assert!(store.is_active());

        let closed = store.logout("10:00:00 AM").unwrap();
        assert!(closed.error.is_some());
        assert!(!store.is_active());

        assert!(store.clear().error.is_some());
        assert!(store.current().is_none());
    }

    #[test]
    fn test_unreadable_snapshot_restores_empty() {
        let mut store = SessionStore::new(BrokenSnapshot);
        assert!(store.restore(Some(&Identity::new("E-7", "Dana"))).is_none());
    }

    #[test]
    fn test_memory_snapshot_round_trip() {
        let mut store = SessionStore::new(MemorySnapshot::new());
        let dana = Identity::new("E-7", "Dana");
        let _ = store.login(&dana, "08:00:00 AM", NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());

        let snapshot = store.storage().clone();
        let mut restarted = SessionStore::new(snapshot);
        assert_eq!(restarted.restore(Some(&dana)).unwrap().login_instant, "08:00:00 AM");
    }
}
