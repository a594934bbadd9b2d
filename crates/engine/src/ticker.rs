//! Fixed-interval tick timer.
//!
//! The timer never sleeps; callers poll it with the current instant and use
//! [`Ticker::time_until_next`] as their input-wait timeout.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct Ticker {
    interval: Duration,
    last: Instant,
    running: bool,
}

impl Ticker {
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            last: now,
            running: true,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Returns true (once) when a full interval has elapsed since the last firing.
    pub fn poll(&mut self, now: Instant) -> bool {
        if !self.running {
            return false;
        }
        if now.saturating_duration_since(self.last) >= self.interval {
            self.last = now;
            return true;
        }
        false
    }

    /// Time left before the next firing, zero when overdue.
    ///
    /// A stopped ticker reports a full interval so callers keep a sane
    /// wait timeout.
    pub fn time_until_next(&self, now: Instant) -> Duration {
        if !self.running {
            return self.interval;
        }
        self.interval
            .saturating_sub(now.saturating_duration_since(self.last))
    }

    /// Restart the interval from `now`.
    pub fn reset(&mut self, now: Instant) {
        self.last = now;
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS_300: Duration = Duration::from_millis(300);

    #[test]
    fn fires_after_interval() {
        let t0 = Instant::now();
        let mut ticker = Ticker::new(MS_300, t0);

        assert!(!ticker.poll(t0 + Duration::from_millis(299)));
        assert!(ticker.poll(t0 + MS_300));
        // Interval restarts from the firing.
        assert!(!ticker.poll(t0 + Duration::from_millis(500)));
        assert!(ticker.poll(t0 + Duration::from_millis(600)));
    }

    #[test]
    fn stopped_ticker_never_fires() {
        let t0 = Instant::now();
        let mut ticker = Ticker::new(MS_300, t0);
        ticker.stop();

        assert!(!ticker.is_running());
        assert!(!ticker.poll(t0 + Duration::from_secs(10)));
        assert_eq!(ticker.time_until_next(t0 + Duration::from_secs(10)), MS_300);
    }

    #[test]
    fn time_until_next_counts_down() {
        let t0 = Instant::now();
        let ticker = Ticker::new(MS_300, t0);
        assert_eq!(
            ticker.time_until_next(t0 + Duration::from_millis(100)),
            Duration::from_millis(200)
        );
        assert_eq!(ticker.time_until_next(t0 + Duration::from_secs(1)), Duration::ZERO);
    }

    #[test]
    fn reset_restarts_a_stopped_ticker() {
        let t0 = Instant::now();
        let mut ticker = Ticker::new(MS_300, t0);
        ticker.stop();
        ticker.reset(t0 + Duration::from_secs(1));
        assert!(ticker.poll(t0 + Duration::from_millis(1300)));
    }
}
