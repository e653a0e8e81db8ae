#[cfg(test)]
mod tests {
    use chrono::{Duration, Local, NaiveDate, NaiveDateTime, Timelike};
    use parking_lot::{Mutex, MutexGuard};
    use takt::db::entries::Entries;
    use takt::db::goals::Goals;
    use takt::db::sessions::Sessions;
    use takt::libs::config::TimerConfig;
    use takt::libs::goal::{GoalTarget, PeriodKind};
    use takt::libs::monitor::Monitor;
    use takt::libs::storage::Storage;
    use takt::libs::timer::{Phase, PhaseCycle, Timer, TimerSession};
    use tempfile::TempDir;
    use test_context::{test_context, AsyncTestContext};

    // The data directory is resolved from HOME, which is process-global;
    // tests in this file run one at a time so each sees its own temp dir.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    /// Test context redirecting the database directory to a temp dir.
    struct DbTestContext {
        _temp_dir: TempDir,
        _guard: MutexGuard<'static, ()>,
    }

    impl AsyncTestContext for DbTestContext {
        async fn setup() -> Self {
            let guard = ENV_LOCK.lock();
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            DbTestContext {
                _temp_dir: temp_dir,
                _guard: guard,
            }
        }
    }

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 4).unwrap().and_hms_opt(h, m, s).unwrap()
    }

    // Timer-based tests need instants near the real wall clock: loading a
    // timer heals sessions from other days, so fixed dates would be
    // recovered instead of restored. Whole seconds, to survive the store.
    fn recent(mins_ago: i64) -> NaiveDateTime {
        (Local::now() - Duration::minutes(mins_ago)).naive_local().with_nanosecond(0).unwrap()
    }

    #[test_context(DbTestContext)]
    #[tokio::test]
    async fn session_round_trips_with_pauses_and_cycle(_ctx: &mut DbTestContext) {
        let sessions = Sessions::new().unwrap();

        let mut session = TimerSession::new("study", "rust", Some(PhaseCycle::new(1500, 300)), at(9, 0, 0));
        session.pause(at(9, 30, 0)).unwrap();
        session.resume(at(9, 40, 0)).unwrap();
        session.pause(at(10, 0, 0)).unwrap();

        sessions.save(&session).unwrap();
        let restored = sessions.fetch().unwrap().expect("session should persist");

        assert_eq!(restored, session);
        assert!(restored.is_paused);
        assert_eq!(restored.pause_periods.len(), 2);
        assert_eq!(restored.total_paused_secs, 600);
        assert_eq!(restored.cycle.as_ref().map(|c| c.phase), Some(Phase::Work));
    }

    #[test_context(DbTestContext)]
    #[tokio::test]
    async fn saving_twice_keeps_a_single_row(_ctx: &mut DbTestContext) {
        let sessions = Sessions::new().unwrap();

        let first = TimerSession::new("study", "rust", None, at(9, 0, 0));
        sessions.save(&first).unwrap();

        let mut second = first.clone();
        second.pause(at(9, 15, 0)).unwrap();
        sessions.save(&second).unwrap();

        let restored = sessions.fetch().unwrap().unwrap();
        assert_eq!(restored, second);
    }

    #[test_context(DbTestContext)]
    #[tokio::test]
    async fn clearing_removes_the_persisted_session(_ctx: &mut DbTestContext) {
        let sessions = Sessions::new().unwrap();
        sessions.save(&TimerSession::new("study", "rust", None, at(9, 0, 0))).unwrap();

        sessions.clear().unwrap();
        assert!(sessions.fetch().unwrap().is_none());

        // Clearing an already-empty table is a no-op.
        sessions.clear().unwrap();
    }

    #[test_context(DbTestContext)]
    #[tokio::test]
    async fn entries_round_trip_through_the_daily_fetch(_ctx: &mut DbTestContext) {
        let entries = Entries::new().unwrap();

        let mut session = TimerSession::new("study", "rust", None, at(9, 0, 0));
        session.pause(at(9, 30, 0)).unwrap();
        session.resume(at(9, 40, 0)).unwrap();
        let entry = session.finish(at(10, 0, 0), Some("morning block".to_string()));
        entries.insert(&entry).unwrap();

        let fetched = entries.fetch_daily(at(9, 0, 0).date()).unwrap();
        assert_eq!(fetched.len(), 1);
        assert_eq!(fetched[0], entry);
        assert_eq!(fetched[0].duration, 3000);
        assert_eq!(fetched[0].pause_periods.len(), 1);

        // A different day sees nothing.
        let other_day = at(9, 0, 0).date() + Duration::days(1);
        assert!(entries.fetch_daily(other_day).unwrap().is_empty());
    }

    #[test_context(DbTestContext)]
    #[tokio::test]
    async fn fetch_since_filters_by_start_instant(_ctx: &mut DbTestContext) {
        let entries = Entries::new().unwrap();

        let early = TimerSession::new("study", "rust", None, at(8, 0, 0)).finish(at(8, 30, 0), None);
        let late = TimerSession::new("study", "rust", None, at(12, 0, 0)).finish(at(12, 45, 0), None);
        entries.insert(&early).unwrap();
        entries.insert(&late).unwrap();

        let since_noon = entries.fetch_since(at(12, 0, 0)).unwrap();
        assert_eq!(since_noon.len(), 1);
        assert_eq!(since_noon[0].start_time, at(12, 0, 0));

        let since_dawn = entries.fetch_since(at(6, 0, 0)).unwrap();
        assert_eq!(since_dawn.len(), 2);
    }

    #[test_context(DbTestContext)]
    #[tokio::test]
    async fn goals_support_insert_list_and_delete(_ctx: &mut DbTestContext) {
        let goals = Goals::new().unwrap();

        goals
            .insert(&GoalTarget {
                id: 0,
                category_id: "study".to_string(),
                subcategory_id: Some("rust".to_string()),
                period: PeriodKind::Weekly,
                target_minutes: 300,
            })
            .unwrap();
        goals
            .insert(&GoalTarget {
                id: 0,
                category_id: "sport".to_string(),
                subcategory_id: None,
                period: PeriodKind::Daily,
                target_minutes: 45,
            })
            .unwrap();

        let stored = goals.fetch_all().unwrap();
        assert_eq!(stored.len(), 2);
        assert_eq!(stored[0].category_id, "study");
        assert_eq!(stored[0].period, PeriodKind::Weekly);
        assert_eq!(stored[1].subcategory_id, None);

        assert!(goals.delete(stored[0].id).unwrap());
        assert!(!goals.delete(stored[0].id).unwrap());
        assert_eq!(goals.fetch_all().unwrap().len(), 1);
    }

    #[test_context(DbTestContext)]
    #[tokio::test]
    async fn second_start_is_rejected_and_leaves_the_session_untouched(_ctx: &mut DbTestContext) {
        let mut timer = Timer::load(TimerConfig::default(), Storage::local_only().unwrap()).await.unwrap();
        timer.start("study", "rust", false, recent(60)).await.unwrap();
        let before = timer.session().cloned().unwrap();

        let result = timer.start("sport", "run", false, recent(55)).await;
        assert!(result.is_err());
        assert_eq!(timer.session(), Some(&before));
    }

    #[test_context(DbTestContext)]
    #[tokio::test]
    async fn timer_survives_a_process_restart(_ctx: &mut DbTestContext) {
        let config = TimerConfig::default();
        let start = recent(50);
        let pause_at = recent(30);
        let resume_at = recent(20);
        let stop_at = recent(10);

        let mut timer = Timer::load(config.clone(), Storage::local_only().unwrap()).await.unwrap();
        timer.start("study", "rust", false, start).await.unwrap();
        timer.pause(pause_at).await.unwrap();

        // A fresh coordinator over the same database picks the session up.
        let mut restarted = Timer::load(config, Storage::local_only().unwrap()).await.unwrap();
        let session = restarted.session().expect("session recovered after restart");
        assert!(session.is_paused);
        assert_eq!(session.start_time, start);

        restarted.resume(resume_at).await.unwrap();
        let entry = restarted.stop(stop_at, None).await.unwrap().unwrap();
        assert_eq!(entry.duration, 1800); // 40 min span minus a 10 min pause

        // The stop cleared the session and appended the entry.
        let idle = Timer::load(TimerConfig::default(), Storage::local_only().unwrap()).await.unwrap();
        assert!(idle.session().is_none());
        let stored = Entries::new().unwrap().fetch_daily(entry.start_time.date()).unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].end_time, stop_at);
    }

    #[test_context(DbTestContext)]
    #[tokio::test]
    async fn monitor_tick_observes_transitions_from_other_processes(_ctx: &mut DbTestContext) {
        let config = TimerConfig::default();

        let mut watcher = Timer::load(config.clone(), Storage::local_only().unwrap()).await.unwrap();
        watcher.start("study", "rust", true, recent(30)).await.unwrap();

        // Another process pauses the session behind the watcher's back
        let mut other = Timer::load(config.clone(), Storage::local_only().unwrap()).await.unwrap();
        other.pause(recent(10)).await.unwrap();
        assert!(!watcher.session().unwrap().is_paused); // in-memory copy is stale

        let mut monitor = Monitor::new(config.clone());
        assert!(monitor.tick(&mut watcher).await.unwrap());

        // The tick adopted the pause instead of overwriting it
        assert!(watcher.session().unwrap().is_paused);
        let reloaded = Timer::load(config, Storage::local_only().unwrap()).await.unwrap();
        assert!(reloaded.session().unwrap().is_paused);
    }

    #[test_context(DbTestContext)]
    #[tokio::test]
    async fn stale_session_is_healed_when_any_command_loads(_ctx: &mut DbTestContext) {
        let yesterday = Local::now().date_naive() - Duration::days(1);
        let start = yesterday.and_hms_opt(21, 0, 0).unwrap();
        Sessions::new().unwrap().save(&TimerSession::new("study", "rust", None, start)).unwrap();

        let timer = Timer::load(TimerConfig::default(), Storage::local_only().unwrap()).await.unwrap();

        // No session survives the load, and the minted entry ends on the
        // day it started instead of spanning midnight.
        assert!(timer.session().is_none());
        assert!(Sessions::new().unwrap().fetch().unwrap().is_none());

        let healed = Entries::new().unwrap().fetch_daily(yesterday).unwrap();
        assert_eq!(healed.len(), 1);
        assert_eq!(healed[0].end_time, yesterday.and_hms_opt(23, 59, 59).unwrap());
        assert_eq!(healed[0].duration, 10_799);
    }

    #[test_context(DbTestContext)]
    #[tokio::test]
    async fn failed_entry_insert_keeps_the_session(_ctx: &mut DbTestContext) {
        let mut timer = Timer::load(TimerConfig::default(), Storage::local_only().unwrap()).await.unwrap();
        timer.start("study", "rust", false, recent(30)).await.unwrap();

        // Break the entries table so the stop's insert fails
        let saboteur = Entries::new().unwrap();
        saboteur.conn.lock().execute("DROP TABLE entries", []).unwrap();

        assert!(timer.stop(recent(0), None).await.is_err());

        // The session is still there, in memory and in the store
        assert!(timer.session().is_some());
        assert!(Sessions::new().unwrap().fetch().unwrap().is_some());
    }
}
