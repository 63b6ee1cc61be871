use serde::{Deserialize, Serialize};

use crate::models::Contact;

/// Every screen the app can show.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    #[default]
    Login,
    SignUp,
    Home,
    /// Contact selection.
    Send,
    /// Compliment composition.
    Write,
    Inbox,
    Sent,
    /// Thank-you reply composition.
    Thank,
    Stats,
    Settings,
    Notifications,
}

impl Screen {
    /// Entries of the bottom navigation bar, in display order.
    pub const BOTTOM_NAV: [Screen; 5] = [
        Screen::Home,
        Screen::Sent,
        Screen::Inbox,
        Screen::Stats,
        Screen::Settings,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::SignUp => "signup",
            Self::Home => "home",
            Self::Send => "send",
            Self::Write => "write",
            Self::Inbox => "inbox",
            Self::Sent => "sent",
            Self::Thank => "thank",
            Self::Stats => "stats",
            Self::Settings => "settings",
            Self::Notifications => "notifications",
        }
    }

    /// Unknown names fall back to Home, matching how the shell routes.
    pub fn parse(s: &str) -> Self {
        match s {
            "login" => Self::Login,
            "signup" => Self::SignUp,
            "send" => Self::Send,
            "write" => Self::Write,
            "inbox" => Self::Inbox,
            "sent" => Self::Sent,
            "thank" => Self::Thank,
            "stats" => Self::Stats,
            "settings" => Self::Settings,
            "notifications" => Self::Notifications,
            _ => Self::Home,
        }
    }

    /// The bottom bar is hidden while the user is not signed in.
    pub fn shows_bottom_nav(&self) -> bool {
        !matches!(self, Self::Login | Self::SignUp)
    }
}

/// Data handed from one screen to the next.
///
/// Replaced wholesale on every navigation; navigating without data clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationData {
    pub selected_contacts: Vec<Contact>,
    /// Name of a contact to preselect on the contact screen.
    pub preselected_contact: Option<String>,
    pub message_id: Option<String>,
}
