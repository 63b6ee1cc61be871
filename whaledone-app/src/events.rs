//! Everything the shell reacts to, and what it reports back.

use thiserror::Error;
use tokio::sync::mpsc;
use whaledone_core::compose::ComposeError;
use whaledone_core::contacts::ContactError;
use whaledone_core::inbox::{InboxError, InboxTab};
use whaledone_core::sent::SentError;
use whaledone_core::signup::SignupError;
use whaledone_core::{Language, NavigationData, NewContact, Screen};

pub type EventSender = mpsc::UnboundedSender<AppEvent>;
pub type EventReceiver = mpsc::UnboundedReceiver<AppEvent>;

pub fn channel() -> (EventSender, EventReceiver) {
    mpsc::unbounded_channel()
}

/// Signup form inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignupField {
    Phone,
    PhoneOtp,
    Email,
    EmailOtp,
    Name,
    Password,
    ConfirmPassword,
    InviteCode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Navigate {
        screen: Screen,
        data: NavigationData,
    },
    /// Mock login; always succeeds.
    Login,
    Logout,

    SignupInput {
        field: SignupField,
        value: String,
    },
    SignupNext,
    SignupBack,
    ResendCode,
    /// One second of OTP countdown, stamped with the timer that sent it.
    Tick {
        generation: u64,
    },

    SearchContacts(String),
    ToggleContact(String),
    AddContact(NewContact),
    /// "Next" on the contact screen.
    ContinueToCompose,

    EditDraft(String),
    ToggleRecipients,
    SendCompliment,
    SendThankYou,

    SetInboxTab(InboxTab),
    OpenMessage(String),
    UnlockMessage(String),
    CloseMessage,
    ReplyToMessage(String),

    OpenReply {
        message_id: String,
        reply_id: String,
    },
    UnlockReply {
        message_id: String,
        reply_id: String,
    },

    OpenNotification(String),
    MarkAllNotificationsRead,

    ViewDetailedStats,

    SetLanguage(Language),
    SetNotificationsEnabled(bool),

    Quit,
}

/// An action the current input does not allow. Shown to the user, never
/// fatal.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Rejection {
    #[error(transparent)]
    Signup(#[from] SignupError),

    #[error(transparent)]
    Contact(#[from] ContactError),

    #[error(transparent)]
    Compose(#[from] ComposeError),

    #[error(transparent)]
    Inbox(#[from] InboxError),

    #[error(transparent)]
    Sent(#[from] SentError),
}

/// What the shell should show after handling an event.
#[derive(Debug, PartialEq, Eq)]
pub enum Feedback {
    None,
    /// One-time introduction on the first visit to the contact screen.
    WelcomePopup,
    ConfirmUnlock {
        cost: u32,
        balance: u32,
    },
    InsufficientPoints {
        cost: u32,
        balance: u32,
    },
    ComplimentSent {
        recipients: usize,
    },
    /// The thank-you went out and earned its author `points`.
    ThankYouSent {
        points: u32,
    },
    DetailedStats,
    SubscriptionRequired,
    Rejected(Rejection),
    Quit,
}
