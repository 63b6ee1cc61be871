//! Signup wizard.
//!
//! A linear state machine that walks a new user through phone and email
//! verification, profile details and an invite code.
//!
//! | Step           | Advances when                                  | Back goes to   |
//! |----------------|------------------------------------------------|----------------|
//! | `Phone`        | phone has at least 10 characters               | (leaves, Login)|
//! | `PhoneVerify`  | code has exactly 6 characters                  | `Phone`        |
//! | `Email`        | email contains `@`                             | `PhoneVerify`  |
//! | `EmailVerify`  | code has exactly 6 characters                  | `Email`        |
//! | `Profile`      | name and password set, confirmation matches    | `EmailVerify`  |
//! | `InviteCode`   | code has exactly 8 characters                  | `Profile`      |
//! | `Complete`     | (terminal, requests Home)                      | `InviteCode`   |
//!
//! Entering either verification step arms a 180 second countdown. The
//! countdown ticks once per second while on a verification step and stops at
//! zero. Expiry never blocks verification; resending re-arms the countdown.
//!
//! # Example
//!
//! ```
//! use whaledone_core::signup::{SignupFlow, Step};
//!
//! let mut flow = SignupFlow::new();
//! flow.set_phone("010-1234-5678");
//! flow.advance().unwrap();
//! assert_eq!(flow.step(), Step::PhoneVerify);
//! assert_eq!(flow.state().countdown.display(), "3:00");
//!
//! flow.set_phone_otp("12345");
//! assert!(!flow.can_advance());
//! ```

mod countdown;
mod flow;
mod step;

pub use countdown::{OTP_TTL_SECS, OtpCountdown};
pub use flow::{
    Advanced, Back, INVITE_CODE_LEN, MIN_PHONE_LEN, OTP_LEN, SignupError, SignupFlow, SignupState,
    advance, regress,
};
pub use step::Step;
