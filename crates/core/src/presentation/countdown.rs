//! Promotion countdown clock.

use chrono::{DateTime, Duration, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// Countdown to the end of a promotion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromoCountdown {
    /// When the promotion ends.
    pub ends_at: DateTime<Utc>,
}

impl PromoCountdown {
    /// Countdown ending at `ends_at`.
    #[must_use]
    pub const fn new(ends_at: DateTime<Utc>) -> Self {
        Self { ends_at }
    }

    /// Countdown ending at the next UTC midnight after `now`.
    #[must_use]
    pub fn until_midnight(now: DateTime<Utc>) -> Self {
        let tomorrow = now.date_naive() + Duration::days(1);
        Self::new(tomorrow.and_time(NaiveTime::MIN).and_utc())
    }

    /// Time left, zero once the promotion is over.
    #[must_use]
    pub fn remaining(&self, now: DateTime<Utc>) -> Duration {
        (self.ends_at - now).max(Duration::zero())
    }

    /// Whether the promotion has ended.
    #[must_use]
    pub fn is_over(&self, now: DateTime<Utc>) -> bool {
        now >= self.ends_at
    }

    /// Clock display, `HH:MM:SS`. Hours are not wrapped at 24.
    #[must_use]
    pub fn display(&self, now: DateTime<Utc>) -> String {
        let total = self.remaining(now).num_seconds();
        let (hours, minutes, seconds) = (total / 3600, (total % 3600) / 60, total % 60);
        format!("{hours:02}:{minutes:02}:{seconds:02}")
    }
}
