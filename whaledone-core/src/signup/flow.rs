use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use super::countdown::OtpCountdown;
use super::step::Step;
use crate::navigation::Screen;

pub const MIN_PHONE_LEN: usize = 10;
pub const OTP_LEN: usize = 6;
pub const INVITE_CODE_LEN: usize = 8;

/// Why the current step cannot advance yet.
///
/// None of these are fatal; the "next" action simply stays disabled.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SignupError {
    #[error("phone number needs at least 10 characters, got {0}")]
    PhoneTooShort(usize),

    #[error("verification code needs exactly 6 characters, got {0}")]
    OtpIncomplete(usize),

    #[error("email address must contain '@'")]
    InvalidEmail,

    #[error("display name is required")]
    NameRequired,

    #[error("password is required")]
    PasswordRequired,

    #[error("password and confirmation do not match")]
    PasswordMismatch,

    #[error("invite code needs exactly 8 characters, got {0}")]
    InviteCodeLength(usize),

    #[error("no verification code is pending on step '{}'", .0.as_str())]
    NoPendingCode(Step),

    #[error("signup is already complete")]
    AlreadyComplete,
}

/// Everything the wizard has collected so far.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupState {
    pub step: Step,
    pub phone: String,
    pub phone_otp: String,
    pub email: String,
    pub email_otp: String,
    pub name: String,
    pub password: String,
    pub confirm_password: String,
    pub invite_code: String,
    /// Set when an invite code was submitted but rejected.
    pub code_error: bool,
    pub countdown: OtpCountdown,
}

impl SignupState {
    /// Checks the predicate for `step` against the collected input.
    pub fn validate(
        &self,
        step: Step,
    ) -> Result<(), SignupError> {
        match step {
            Step::Phone => {
                let len = self.phone.chars().count();
                if len < MIN_PHONE_LEN {
                    return Err(SignupError::PhoneTooShort(len));
                }
            }
            Step::PhoneVerify => validate_otp(&self.phone_otp)?,
            Step::Email => {
                if !self.email.contains('@') {
                    return Err(SignupError::InvalidEmail);
                }
            }
            Step::EmailVerify => validate_otp(&self.email_otp)?,
            Step::Profile => {
                if self.name.is_empty() {
                    return Err(SignupError::NameRequired);
                }
                if self.password.is_empty() {
                    return Err(SignupError::PasswordRequired);
                }
                if self.password != self.confirm_password {
                    return Err(SignupError::PasswordMismatch);
                }
            }
            Step::InviteCode => {
                let len = self.invite_code.chars().count();
                if len != INVITE_CODE_LEN {
                    return Err(SignupError::InviteCodeLength(len));
                }
            }
            Step::Complete => return Err(SignupError::AlreadyComplete),
        }
        Ok(())
    }

    /// Whether the password pair should be flagged as mismatched. Only
    /// reported once both fields have content.
    pub fn password_mismatch(&self) -> bool {
        !self.password.is_empty()
            && !self.confirm_password.is_empty()
            && self.password != self.confirm_password
    }
}

/// Only the length is checked; the countdown is informational.
fn validate_otp(code: &str) -> Result<(), SignupError> {
    let len = code.chars().count();
    if len != OTP_LEN {
        return Err(SignupError::OtpIncomplete(len));
    }
    Ok(())
}

/// Step that follows `step` when `state` satisfies its predicate.
pub fn advance(
    step: Step,
    state: &SignupState,
) -> Result<Step, SignupError> {
    state.validate(step)?;
    step.next().ok_or(SignupError::AlreadyComplete)
}

/// Step that back navigation leads to; `None` leaves the wizard.
pub fn regress(step: Step) -> Option<Step> {
    step.previous()
}

/// Result of a successful advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Advanced {
    pub step: Step,
    /// Screen the shell should switch to, once the wizard is done.
    pub navigate: Option<Screen>,
}

/// Result of a back action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Back {
    Step(Step),
    Leave(Screen),
}

/// The signup wizard: input setters, forward/back transitions and the OTP
/// countdown.
#[derive(Debug, Clone, Default)]
pub struct SignupFlow {
    state: SignupState,
}

impl SignupFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SignupState {
        &self.state
    }

    pub fn step(&self) -> Step {
        self.state.step
    }

    pub fn set_phone(
        &mut self,
        phone: impl Into<String>,
    ) {
        self.state.phone = phone.into();
    }

    pub fn set_phone_otp(
        &mut self,
        code: &str,
    ) {
        self.state.phone_otp = code.chars().take(OTP_LEN).collect();
    }

    pub fn set_email(
        &mut self,
        email: impl Into<String>,
    ) {
        self.state.email = email.into();
    }

    pub fn set_email_otp(
        &mut self,
        code: &str,
    ) {
        self.state.email_otp = code.chars().take(OTP_LEN).collect();
    }

    pub fn set_name(
        &mut self,
        name: impl Into<String>,
    ) {
        self.state.name = name.into();
    }

    pub fn set_password(
        &mut self,
        password: impl Into<String>,
    ) {
        self.state.password = password.into();
    }

    pub fn set_confirm_password(
        &mut self,
        password: impl Into<String>,
    ) {
        self.state.confirm_password = password.into();
    }

    /// Stores the code upper-cased. Editing clears a previous rejection.
    pub fn set_invite_code(
        &mut self,
        code: &str,
    ) {
        self.state.invite_code = code.to_uppercase();
        self.state.code_error = false;
    }

    /// Whether the current step's "next" action is enabled.
    pub fn can_advance(&self) -> bool {
        self.state.validate(self.state.step).is_ok()
    }

    /// Moves to the next step if the current one validates.
    ///
    /// Entering a verification step arms the countdown. A rejected invite
    /// code sets the code-error flag; every other rejection leaves the state
    /// untouched.
    pub fn advance(&mut self) -> Result<Advanced, SignupError> {
        let from = self.state.step;
        let to = match advance(from, &self.state) {
            Ok(to) => to,
            Err(err) => {
                if from == Step::InviteCode {
                    self.state.code_error = true;
                }
                debug!(step = from.as_str(), %err, "signup step rejected");
                return Err(err);
            }
        };

        self.state.step = to;
        if to.is_otp() {
            self.state.countdown.arm();
        }
        if from == Step::InviteCode {
            self.state.code_error = false;
        }
        info!(from = from.as_str(), to = to.as_str(), "signup advanced");

        let navigate = (to == Step::Complete).then_some(Screen::Home);
        Ok(Advanced { step: to, navigate })
    }

    /// Steps back along the fixed sequence.
    pub fn back(&mut self) -> Back {
        match regress(self.state.step) {
            Some(previous) => {
                debug!(
                    from = self.state.step.as_str(),
                    to = previous.as_str(),
                    "signup back"
                );
                self.state.step = previous;
                Back::Step(previous)
            }
            None => Back::Leave(Screen::Login),
        }
    }

    /// Re-sends the code for the current verification step and re-arms the
    /// countdown. Input typed so far is kept.
    pub fn resend_code(&mut self) -> Result<(), SignupError> {
        if !self.state.step.is_otp() {
            return Err(SignupError::NoPendingCode(self.state.step));
        }
        self.state.countdown.arm();
        info!(step = self.state.step.as_str(), "verification code re-sent");
        Ok(())
    }

    /// One second of countdown. Does nothing off the verification steps.
    pub fn tick(&mut self) -> Option<u32> {
        if !self.state.step.is_otp() {
            return None;
        }
        let remaining = self.state.countdown.tick();
        if remaining == 0 {
            debug!(step = self.state.step.as_str(), "verification code expired");
        }
        Some(remaining)
    }

    /// Whether a countdown should currently be running.
    pub fn awaiting_code(&self) -> bool {
        self.state.step.is_otp() && !self.state.countdown.is_expired()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn valid_state() -> SignupState {
        SignupState {
            phone: "01012345678".to_string(),
            phone_otp: "123456".to_string(),
            email: "alex@example.com".to_string(),
            email_otp: "654321".to_string(),
            name: "Alex".to_string(),
            password: "hunter22".to_string(),
            confirm_password: "hunter22".to_string(),
            invite_code: "ABCD1234".to_string(),
            ..Default::default()
        }
    }

    fn flow_at(step: Step) -> SignupFlow {
        let mut flow = SignupFlow {
            state: valid_state(),
        };
        flow.state.step = step;
        flow
    }

    // =========================================================================
    // predicate table
    // =========================================================================

    #[test]
    fn phone_needs_ten_characters() {
        let mut state = valid_state();
        state.phone = "010123456".to_string();

        assert_eq!(state.validate(Step::Phone), Err(SignupError::PhoneTooShort(9)));

        state.phone = "0101234567".to_string();
        assert_eq!(state.validate(Step::Phone), Ok(()));
    }

    #[test]
    fn otp_needs_exactly_six_characters() {
        let mut state = valid_state();
        state.phone_otp = "12345".to_string();

        assert_eq!(
            state.validate(Step::PhoneVerify),
            Err(SignupError::OtpIncomplete(5))
        );
    }

    #[test]
    fn expired_countdown_does_not_block_a_full_code() {
        let mut state = valid_state();
        state.countdown = OtpCountdown::new(0);

        assert_eq!(advance(Step::PhoneVerify, &state), Ok(Step::Email));
        assert_eq!(advance(Step::EmailVerify, &state), Ok(Step::Profile));
        assert_eq!(regress(Step::Email), Some(Step::PhoneVerify));
        assert_eq!(regress(Step::Profile), Some(Step::EmailVerify));
    }

    #[test]
    fn email_needs_at_sign() {
        let mut state = valid_state();
        state.email = "alex.example.com".to_string();

        assert_eq!(state.validate(Step::Email), Err(SignupError::InvalidEmail));
    }

    #[test]
    fn password_mismatch_blocks_profile() {
        let mut state = valid_state();
        state.confirm_password = "hunter23".to_string();

        assert_eq!(state.validate(Step::Profile), Err(SignupError::PasswordMismatch));
        assert!(state.password_mismatch());
    }

    #[test]
    fn profile_requires_name_and_password() {
        let mut state = valid_state();
        state.name.clear();
        assert_eq!(state.validate(Step::Profile), Err(SignupError::NameRequired));

        let mut state = valid_state();
        state.password.clear();
        state.confirm_password.clear();
        assert_eq!(state.validate(Step::Profile), Err(SignupError::PasswordRequired));
    }

    #[test]
    fn invite_code_accepts_only_eight_characters() {
        let mut state = valid_state();

        for (code, ok) in [("ABCD123", false), ("ABCD1234", true), ("ABCD12345", false)] {
            state.invite_code = code.to_string();
            assert_eq!(state.validate(Step::InviteCode).is_ok(), ok, "code {code}");
        }
    }

    #[test]
    fn mismatch_only_flagged_when_both_filled() {
        let mut state = valid_state();
        state.confirm_password.clear();

        assert!(!state.password_mismatch());
    }

    // =========================================================================
    // transitions
    // =========================================================================

    #[test]
    fn regress_undoes_advance_for_every_step() {
        let state = valid_state();

        for step in Step::SEQUENCE.into_iter().filter(|s| *s != Step::Complete) {
            let next = advance(step, &state).unwrap();
            assert_eq!(regress(next), Some(step));
        }
    }

    #[test]
    fn advance_from_complete_is_rejected() {
        assert_eq!(
            advance(Step::Complete, &valid_state()),
            Err(SignupError::AlreadyComplete)
        );
    }

    #[test]
    fn flow_walks_the_whole_sequence() {
        let mut flow = flow_at(Step::Phone);

        let mut visited = vec![flow.step()];
        while flow.step() != Step::Complete {
            visited.push(flow.advance().unwrap().step);
        }

        assert_eq!(visited, Step::SEQUENCE.to_vec());
    }

    #[test]
    fn completing_requests_home() {
        let mut flow = flow_at(Step::InviteCode);

        let advanced = flow.advance().unwrap();

        assert_eq!(advanced.step, Step::Complete);
        assert_eq!(advanced.navigate, Some(Screen::Home));
    }

    #[test]
    fn rejected_advance_stays_put() {
        let mut flow = flow_at(Step::Email);
        flow.set_email("nope");
        let before = flow.state().clone();

        assert!(flow.advance().is_err());
        assert_eq!(flow.state(), &before);
    }

    #[test]
    fn rejected_invite_code_sets_flag_and_edit_clears_it() {
        let mut flow = flow_at(Step::InviteCode);
        flow.set_invite_code("abc");

        assert_eq!(flow.advance(), Err(SignupError::InviteCodeLength(3)));
        assert!(flow.state().code_error);

        flow.set_invite_code("abcd1234");
        assert!(!flow.state().code_error);
        assert_eq!(flow.state().invite_code, "ABCD1234");
    }

    #[test]
    fn entering_otp_step_arms_countdown() {
        let mut flow = flow_at(Step::Email);
        flow.state.countdown = OtpCountdown::new(3);

        flow.advance().unwrap();

        assert_eq!(flow.step(), Step::EmailVerify);
        assert_eq!(flow.state().countdown.remaining(), 180);
    }

    #[test]
    fn back_from_first_step_leaves_to_login() {
        let mut flow = flow_at(Step::Phone);

        assert_eq!(flow.back(), Back::Leave(Screen::Login));
        assert_eq!(flow.step(), Step::Phone);
    }

    #[test]
    fn back_moves_to_fixed_predecessor() {
        let mut flow = flow_at(Step::Profile);

        assert_eq!(flow.back(), Back::Step(Step::EmailVerify));
    }

    #[test]
    fn otp_input_is_capped_at_six() {
        let mut flow = SignupFlow::new();

        flow.set_phone_otp("1234567890");

        assert_eq!(flow.state().phone_otp, "123456");
    }

    // =========================================================================
    // countdown
    // =========================================================================

    #[test]
    fn tick_only_counts_on_otp_steps() {
        let mut flow = flow_at(Step::Profile);
        assert_eq!(flow.tick(), None);

        let mut flow = flow_at(Step::PhoneVerify);
        assert_eq!(flow.tick(), Some(179));
    }

    #[test]
    fn expiry_does_not_change_step() {
        let mut flow = flow_at(Step::PhoneVerify);
        flow.state.countdown = OtpCountdown::new(1);

        assert_eq!(flow.tick(), Some(0));
        assert_eq!(flow.step(), Step::PhoneVerify);
        assert!(!flow.awaiting_code());
    }

    #[test]
    fn expired_code_still_advances() {
        let mut flow = flow_at(Step::PhoneVerify);
        flow.state.countdown = OtpCountdown::new(0);

        assert_eq!(flow.advance().unwrap().step, Step::Email);
    }

    #[test]
    fn resend_rearms_expired_code() {
        let mut flow = flow_at(Step::PhoneVerify);
        flow.state.countdown = OtpCountdown::new(0);

        flow.resend_code().unwrap();

        assert_eq!(flow.state().countdown.remaining(), 180);
        assert_eq!(flow.advance().unwrap().step, Step::Email);
    }

    #[test]
    fn resend_off_otp_step_is_rejected() {
        let mut flow = flow_at(Step::Email);

        assert_eq!(flow.resend_code(), Err(SignupError::NoPendingCode(Step::Email)));
    }
}
