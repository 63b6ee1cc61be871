use serde::{Deserialize, Serialize};

/// Lifetime of a freshly sent verification code, in seconds.
pub const OTP_TTL_SECS: u32 = 180;

/// Seconds left before the current verification code expires.
///
/// Decrements by exactly one per tick and stops at zero. Reaching zero does
/// not change the signup step; only a resend re-arms it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtpCountdown {
    remaining: u32,
}

impl OtpCountdown {
    pub fn new(seconds: u32) -> Self {
        Self { remaining: seconds }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_expired(&self) -> bool {
        self.remaining == 0
    }

    /// Resets to the full lifetime.
    pub fn arm(&mut self) {
        self.remaining = OTP_TTL_SECS;
    }

    /// Advances one second and returns what is left.
    pub fn tick(&mut self) -> u32 {
        self.remaining = self.remaining.saturating_sub(1);
        self.remaining
    }

    /// `m:ss`, as shown next to the code input.
    pub fn display(&self) -> String {
        format!("{}:{:02}", self.remaining / 60, self.remaining % 60)
    }
}

impl Default for OtpCountdown {
    fn default() -> Self {
        Self::new(OTP_TTL_SECS)
    }
}
