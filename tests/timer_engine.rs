#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate, NaiveDateTime};
    use takt::libs::timer::{Phase, PhaseCycle, TimerError, TimerSession};

    fn t0() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 2).unwrap().and_hms_opt(9, 0, 0).unwrap()
    }

    fn session_at(start: NaiveDateTime) -> TimerSession {
        TimerSession::new("study", "rust", None, start)
    }

    #[test]
    fn stop_subtracts_closed_pauses_from_duration() {
        let mut session = session_at(t0());
        session.pause(t0() + Duration::minutes(10)).unwrap();
        session.resume(t0() + Duration::minutes(15)).unwrap();

        let entry = session.finish(t0() + Duration::hours(1), None);
        assert_eq!(entry.duration, 3300); // 3600 - 300
        assert_eq!(entry.start_time, t0());
        assert_eq!(entry.end_time, t0() + Duration::hours(1));
        assert_eq!(entry.pause_periods.len(), 1);
        assert!(!entry.is_pause);
    }

    #[test]
    fn immediate_resume_changes_nothing() {
        let mut session = session_at(t0());
        let at = t0() + Duration::minutes(30);
        let before_elapsed = session.live_elapsed(at);
        let before_paused = session.total_paused_secs;

        session.pause(at).unwrap();
        let closed = session.resume(at).unwrap();

        assert_eq!(closed, 0);
        assert_eq!(session.total_paused_secs, before_paused);
        assert_eq!(session.live_elapsed(at), before_elapsed);
    }

    #[test]
    fn elapsed_is_frozen_while_paused() {
        let mut session = session_at(t0());
        session.pause(t0() + Duration::minutes(20)).unwrap();

        assert_eq!(session.live_elapsed(t0() + Duration::minutes(20)), 1200);
        assert_eq!(session.live_elapsed(t0() + Duration::minutes(50)), 1200);
    }

    #[test]
    fn double_pause_is_rejected() {
        let mut session = session_at(t0());
        session.pause(t0() + Duration::minutes(5)).unwrap();

        let before = session.clone();
        assert_eq!(session.pause(t0() + Duration::minutes(6)), Err(TimerError::PreconditionFailed));
        assert_eq!(session, before);
    }

    #[test]
    fn resume_without_pause_is_rejected() {
        let mut session = session_at(t0());
        assert_eq!(session.resume(t0() + Duration::minutes(1)).unwrap_err(), TimerError::PreconditionFailed);
    }

    #[test]
    fn stop_while_paused_accounts_the_open_pause() {
        let mut session = session_at(t0());
        session.pause(t0() + Duration::minutes(40)).unwrap();

        let entry = session.finish(t0() + Duration::hours(1), Some("reading".to_string()));
        // Active time stops accruing at the pause start
        assert_eq!(entry.duration, 2400);
        assert_eq!(entry.description.as_deref(), Some("reading"));
        assert!(entry.pause_periods[0].end.is_some());
    }

    #[test]
    fn edit_start_time_rejects_future() {
        let mut session = session_at(t0());
        let now = t0() + Duration::minutes(10);

        let result = session.edit_start_time(now + Duration::seconds(1), now);
        assert_eq!(result, Err(TimerError::InvalidTimeEdit));
        assert_eq!(session.start_time, t0());
    }

    #[test]
    fn edit_start_time_keeps_pause_ledger_anchored() {
        let mut session = session_at(t0());
        let pause_at = t0() + Duration::minutes(10);
        session.pause(pause_at).unwrap();
        session.resume(pause_at + Duration::minutes(5)).unwrap();

        let now = t0() + Duration::hours(1);
        session.edit_start_time(t0() - Duration::minutes(30), now).unwrap();

        // Pause timestamps are absolute and unaffected by the edit
        assert_eq!(session.pause_periods[0].start, pause_at);
        assert_eq!(session.total_paused_secs, 300);
        assert_eq!(session.live_elapsed(now), 5100); // 90min - 5min pause
    }

    #[test]
    fn edit_start_time_cannot_pass_the_first_pause() {
        let mut session = session_at(t0());
        session.pause(t0() + Duration::minutes(10)).unwrap();
        session.resume(t0() + Duration::minutes(15)).unwrap();

        let now = t0() + Duration::hours(1);
        let result = session.edit_start_time(t0() + Duration::minutes(20), now);
        assert_eq!(result, Err(TimerError::InvalidTimeEdit));
        assert_eq!(session.start_time, t0());
    }

    #[test]
    fn phase_switch_requires_cycling() {
        let mut session = session_at(t0());
        assert_eq!(session.switch_phase(), Err(TimerError::PreconditionFailed));
        assert_eq!(session.set_phase_elapsed(10), Err(TimerError::PreconditionFailed));
    }

    #[test]
    fn phase_switch_toggles_and_resets_the_phase_clock() {
        let mut session = TimerSession::new("study", "rust", Some(PhaseCycle::new(1500, 300)), t0());
        session.set_phase_elapsed(1499).unwrap();

        assert_eq!(session.switch_phase().unwrap(), Phase::Break);
        let cycle = session.cycle.as_ref().unwrap();
        assert_eq!(cycle.elapsed_secs, 0);
        assert_eq!(cycle.target_secs(), 300);

        assert_eq!(session.switch_phase().unwrap(), Phase::Work);
        assert_eq!(session.cycle.as_ref().unwrap().target_secs(), 1500);
    }

    #[test]
    fn phase_cycling_never_affects_duration_accounting() {
        let mut session = TimerSession::new("study", "rust", Some(PhaseCycle::new(1500, 300)), t0());
        session.switch_phase().unwrap();
        session.set_phase_elapsed(250).unwrap();

        assert_eq!(session.live_elapsed(t0() + Duration::hours(1)), 3600);
    }
}
