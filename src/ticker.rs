use std::time::{Duration, Instant};

/// How often the game advances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickPeriod {
    Every(Duration),
    /// No ticks until the period is changed again.
    Stopped,
}

/// Fires once per period for a polling loop.
#[derive(Debug, Clone)]
pub struct Ticker {
    period: TickPeriod,
    last_tick: Instant,
    /// Poll timeout while stopped, so the loop keeps reading input.
    idle: Duration,
}

impl Ticker {
    pub fn new(period: TickPeriod, now: Instant) -> Self {
        Self {
            period,
            last_tick: now,
            idle: Duration::from_millis(250),
        }
    }

    pub fn period(&self) -> TickPeriod {
        self.period
    }

    /// Change the period. Resuming from `Stopped` restarts the clock so the
    /// first tick comes a full period later.
    pub fn set_period(&mut self, period: TickPeriod, now: Instant) {
        if self.period == TickPeriod::Stopped && period != TickPeriod::Stopped {
            self.last_tick = now;
        }
        self.period = period;
    }

    /// How long the caller may block waiting for input before the next tick.
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        match self.period {
            TickPeriod::Every(period) => period
                .checked_sub(now.saturating_duration_since(self.last_tick))
                .unwrap_or(Duration::ZERO),
            TickPeriod::Stopped => self.idle,
        }
    }

    /// True, and the clock resets, if a tick is due at `now`.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.period {
            TickPeriod::Every(period) if now.saturating_duration_since(self.last_tick) >= period => {
                self.last_tick = now;
                true
            }
            _ => false,
        }
    }
}
