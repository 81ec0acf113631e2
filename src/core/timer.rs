//! # Timer Service
//!
//! Counts whole seconds while an exercise is being performed.
//!
//! The timer itself has no clock. It only moves forward when `tick()` is
//! called, which keeps it deterministic and testable without sleeping.
//! The adapter owns a `TickSchedule` that turns wall-clock time into ticks:
//!
//! ```text
//! Instant::now() → TickSchedule::due() → n × Action::Tick → TimerService::tick()
//! ```

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimerService {
    elapsed: u64,
    running: bool,
}

impl TimerService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start counting from zero. Does nothing if already running.
    pub fn start(&mut self) {
        if self.running {
            return;
        }
        self.elapsed = 0;
        self.running = true;
    }

    /// Stop counting. The elapsed count is kept until the next `start()`.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Stop and zero the count.
    pub fn reset(&mut self) {
        self.running = false;
        self.elapsed = 0;
    }

    /// Advance by one second. Ignored while stopped.
    pub fn tick(&mut self) {
        if self.running {
            self.elapsed += 1;
        }
    }

    pub fn elapsed(&self) -> u64 {
        self.elapsed
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}

/// Converts wall-clock time into whole-second ticks.
///
/// Armed when the timer starts, disarmed when it stops. Seconds are counted
/// from the anchor instant so a late poll never loses a tick.
#[derive(Debug, Default)]
pub struct TickSchedule {
    anchor: Option<Instant>,
    delivered: u64,
}

impl TickSchedule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arm(&mut self, now: Instant) {
        self.anchor = Some(now);
        self.delivered = 0;
    }

    pub fn clear(&mut self) {
        self.anchor = None;
        self.delivered = 0;
    }

    pub fn is_armed(&self) -> bool {
        self.anchor.is_some()
    }

    /// Number of ticks that became due since the last call.
    pub fn due(&mut self, now: Instant) -> u64 {
        let Some(anchor) = self.anchor else {
            return 0;
        };
        let total = now.saturating_duration_since(anchor).as_secs();
        let due = total.saturating_sub(self.delivered);
        self.delivered = total;
        due
    }

    /// Time left until the next tick, used as the event poll timeout.
    pub fn until_next(&self, now: Instant) -> Option<Duration> {
        let anchor = self.anchor?;
        // One tick per whole second since the anchor
        let next = anchor + Duration::from_secs(self.delivered + 1);
        Some(next.saturating_duration_since(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_timer_is_stopped_at_zero() {
        let timer = TimerService::new();
        assert_eq!(timer.elapsed(), 0);
        assert!(!timer.is_running());
    }

    #[test]
    fn test_start_resets_elapsed() {
        let mut timer = TimerService::new();
        timer.start();
        timer.tick();
        timer.tick();
        timer.stop();
        assert_eq!(timer.elapsed(), 2);

        timer.start();
        assert_eq!(timer.elapsed(), 0);
        assert!(timer.is_running());
    }

    #[test]
    fn test_start_while_running_is_noop() {
        let mut timer = TimerService::new();
        timer.start();
        timer.tick();
        timer.start();
        assert_eq!(timer.elapsed(), 1);
    }

    #[test]
    fn test_tick_ignored_while_stopped() {
        let mut timer = TimerService::new();
        timer.start();
        timer.tick();
        timer.stop();
        timer.tick();
        timer.tick();
        assert_eq!(timer.elapsed(), 1);
    }

    #[test]
    fn test_elapsed_non_decreasing_while_running() {
        let mut timer = TimerService::new();
        timer.start();
        let mut last = timer.elapsed();
        for _ in 0..10 {
            timer.tick();
            assert!(timer.elapsed() >= last);
            last = timer.elapsed();
        }
        assert_eq!(last, 10);
    }

    #[test]
    fn test_reset_stops_and_zeroes() {
        let mut timer = TimerService::new();
        timer.start();
        timer.tick();
        timer.reset();
        assert_eq!(timer.elapsed(), 0);
        assert!(!timer.is_running());
    }

    #[test]
    fn test_schedule_unarmed_is_never_due() {
        let mut schedule = TickSchedule::new();
        assert_eq!(schedule.due(Instant::now()), 0);
        assert!(schedule.until_next(Instant::now()).is_none());
    }

    #[test]
    fn test_schedule_counts_whole_seconds() {
        let start = Instant::now();
        let mut schedule = TickSchedule::new();
        schedule.arm(start);

        assert_eq!(schedule.due(start + Duration::from_millis(999)), 0);
        assert_eq!(schedule.due(start + Duration::from_millis(1000)), 1);
        assert_eq!(schedule.due(start + Duration::from_millis(1500)), 0);
        // A late poll catches up on every missed second
        assert_eq!(schedule.due(start + Duration::from_millis(4200)), 3);
    }

    #[test]
    fn test_schedule_until_next() {
        let start = Instant::now();
        let mut schedule = TickSchedule::new();
        schedule.arm(start);
        assert_eq!(
            schedule.until_next(start + Duration::from_millis(400)),
            Some(Duration::from_millis(600))
        );
        schedule.due(start + Duration::from_millis(1100));
        assert_eq!(
            schedule.until_next(start + Duration::from_millis(1100)),
            Some(Duration::from_millis(900))
        );
    }

    #[test]
    fn test_schedule_until_next_past_u32_seconds() {
        let start = Instant::now();
        let mut schedule = TickSchedule::new();
        schedule.arm(start);
        // More delivered ticks than fit in a u32
        let later = start + Duration::from_secs(u64::from(u32::MAX) + 7);
        schedule.due(later);
        assert_eq!(
            schedule.until_next(later + Duration::from_millis(250)),
            Some(Duration::from_millis(750))
        );
    }

    #[test]
    fn test_schedule_clear_disarms() {
        let start = Instant::now();
        let mut schedule = TickSchedule::new();
        schedule.arm(start);
        schedule.clear();
        assert!(!schedule.is_armed());
        assert_eq!(schedule.due(start + Duration::from_secs(5)), 0);
    }
}
