use crate::constants::SUBMISSION_COOLDOWN_MS;
use instant::Instant;
use std::time::Duration;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("Please wait {remaining_secs} seconds before sending another message")]
pub struct CooldownActive {
    pub remaining_secs: u64,
}

/// Minimum spacing between accepted submissions. Only successful sends are
/// recorded; a failed relay call leaves the window untouched.
#[derive(Clone, Debug)]
pub struct SubmissionCooldown {
    window: Duration,
    last_success: Option<Instant>,
}

impl Default for SubmissionCooldown {
    fn default() -> Self {
        Self::new(Duration::from_millis(SUBMISSION_COOLDOWN_MS))
    }
}

impl SubmissionCooldown {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            last_success: None,
        }
    }

    /// `Err` while inside the window, carrying `ceil(remaining / 1s)`.
    pub fn check(&self, now: Instant) -> Result<(), CooldownActive> {
        let Some(last) = self.last_success else {
            return Ok(());
        };
        let elapsed = if now > last {
            now.duration_since(last)
        } else {
            Duration::ZERO
        };
        if elapsed >= self.window {
            return Ok(());
        }
        let remaining = self.window - elapsed;
        Err(CooldownActive {
            remaining_secs: remaining.as_secs_f64().ceil() as u64,
        })
    }

    pub fn record_success(&mut self, at: Instant) {
        self.last_success = Some(at);
    }
}
