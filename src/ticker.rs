use std::time::{Duration, Instant};

/// Fires at most once per `period`, polled from the main loop.
#[derive(Clone, Copy, Debug)]
pub struct Ticker {
    period: Duration,
    last_tick: Instant,
}

impl Ticker {
    pub fn new(period: Duration) -> Self {
        Self::starting_at(period, Instant::now())
    }

    pub fn starting_at(period: Duration, start: Instant) -> Self {
        Ticker {
            period,
            last_tick: start,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Time left until the next tick is due; zero when overdue.
    pub fn remaining(&self, now: Instant) -> Duration {
        self.period
            .saturating_sub(now.saturating_duration_since(self.last_tick))
    }

    /// True when a tick is due, and restarts the period from `now`.
    pub fn poll(&mut self, now: Instant) -> bool {
        if now.saturating_duration_since(self.last_tick) >= self.period {
            self.last_tick = now;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PERIOD: Duration = Duration::from_millis(100);

    #[test]
    fn test_not_due_before_period() {
        let start = Instant::now();
        let mut ticker = Ticker::starting_at(PERIOD, start);

        assert!(!ticker.poll(start));
        assert!(!ticker.poll(start + Duration::from_millis(99)));
        assert_eq!(
            ticker.remaining(start + Duration::from_millis(40)),
            Duration::from_millis(60)
        );
    }

    #[test]
    fn test_fires_once_per_period() {
        let start = Instant::now();
        let mut ticker = Ticker::starting_at(PERIOD, start);

        let first = start + PERIOD;
        assert!(ticker.poll(first));
        assert!(!ticker.poll(first), "period restarts after firing");
        assert!(ticker.poll(first + PERIOD));
    }

    #[test]
    fn test_remaining_is_zero_when_overdue() {
        let start = Instant::now();
        let ticker = Ticker::starting_at(PERIOD, start);
        assert_eq!(ticker.remaining(start + PERIOD * 3), Duration::ZERO);
        assert_eq!(ticker.period(), PERIOD);
    }

    #[test]
    fn test_independent_tickers() {
        let start = Instant::now();
        let mut fast = Ticker::starting_at(Duration::from_millis(100), start);
        let mut slow = Ticker::starting_at(Duration::from_millis(300), start);

        let (mut fast_count, mut slow_count) = (0, 0);
        for ms in (10..=600).step_by(10) {
            let now = start + Duration::from_millis(ms);
            fast_count += fast.poll(now) as u32;
            slow_count += slow.poll(now) as u32;
        }
        assert_eq!(fast_count, 6);
        assert_eq!(slow_count, 2);
    }
}
