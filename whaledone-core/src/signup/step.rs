use serde::{Deserialize, Serialize};

/// Stages of the signup wizard, in the order the user walks through them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Step {
    #[default]
    Phone,
    PhoneVerify,
    Email,
    EmailVerify,
    Profile,
    InviteCode,
    Complete,
}

impl Step {
    /// The fixed sequence. Transitions are lookups into this table.
    pub const SEQUENCE: [Step; 7] = [
        Step::Phone,
        Step::PhoneVerify,
        Step::Email,
        Step::EmailVerify,
        Step::Profile,
        Step::InviteCode,
        Step::Complete,
    ];

    /// Number of steps that take input (everything but `Complete`).
    pub const INPUT_STEPS: usize = 6;

    pub fn index(&self) -> usize {
        match self {
            Self::Phone => 0,
            Self::PhoneVerify => 1,
            Self::Email => 2,
            Self::EmailVerify => 3,
            Self::Profile => 4,
            Self::InviteCode => 5,
            Self::Complete => 6,
        }
    }

    /// Successor in the sequence; `None` once complete.
    pub fn next(&self) -> Option<Step> {
        Self::SEQUENCE.get(self.index() + 1).copied()
    }

    /// Predecessor in the sequence; `None` on the first step, where going
    /// back leaves the wizard.
    pub fn previous(&self) -> Option<Step> {
        self.index().checked_sub(1).map(|i| Self::SEQUENCE[i])
    }

    /// Steps that wait for a one-time passcode and run the expiry countdown.
    pub fn is_otp(&self) -> bool {
        matches!(self, Self::PhoneVerify | Self::EmailVerify)
    }

    /// Width of the progress bar, in percent.
    pub fn progress_percent(&self) -> u8 {
        let done = (self.index() + 1).min(Self::INPUT_STEPS);
        (done * 100 / Self::INPUT_STEPS) as u8
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Phone => "phone",
            Self::PhoneVerify => "phone-verify",
            Self::Email => "email",
            Self::EmailVerify => "email-verify",
            Self::Profile => "profile",
            Self::InviteCode => "invite-code",
            Self::Complete => "complete",
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn index_matches_sequence_position() {
        for (i, step) in Step::SEQUENCE.iter().enumerate() {
            assert_eq!(step.index(), i);
        }
    }

    #[test]
    fn next_and_previous_are_inverse() {
        for step in Step::SEQUENCE {
            if let Some(next) = step.next() {
                assert_eq!(next.previous(), Some(step));
            }
        }
    }

    #[test]
    fn ends_of_the_sequence() {
        assert_eq!(Step::Phone.previous(), None);
        assert_eq!(Step::Complete.next(), None);
    }

    #[test]
    fn only_verify_steps_are_otp() {
        let otp: Vec<_> = Step::SEQUENCE.into_iter().filter(Step::is_otp).collect();

        assert_eq!(otp, vec![Step::PhoneVerify, Step::EmailVerify]);
    }

    #[test]
    fn progress_runs_over_input_steps() {
        assert_eq!(Step::Phone.progress_percent(), 16);
        assert_eq!(Step::EmailVerify.progress_percent(), 66);
        assert_eq!(Step::InviteCode.progress_percent(), 100);
        assert_eq!(Step::Complete.progress_percent(), 100);
    }
}
