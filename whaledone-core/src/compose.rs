//! Drafting compliments and thank-you replies.

use thiserror::Error;

use crate::models::Contact;

/// Longest message either composer accepts, in characters.
pub const MAX_MESSAGE_CHARS: usize = 300;

/// Points credited to the recipient of a thank-you reply.
pub const THANK_YOU_REWARD: u32 = 300;

/// Words that block a compliment from being sent. Matched as
/// case-insensitive substrings.
const BLOCKED_WORDS: &[&str] = &["bad", "worse"];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ComposeError {
    #[error("message is empty")]
    Empty,

    #[error("message is {len} characters, limit is {max}")]
    TooLong { len: usize, max: usize },

    #[error("message contains inappropriate language")]
    Profanity,

    #[error("no recipients selected")]
    NoRecipients,
}

/// Which composer a draft belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftKind {
    /// An anonymous compliment to one or more contacts.
    Compliment,
    /// A thank-you answering a received compliment.
    ThankYou,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    kind: DraftKind,
    text: String,
}

impl Draft {
    pub fn new(kind: DraftKind) -> Self {
        Self {
            kind,
            text: String::new(),
        }
    }

    pub fn kind(&self) -> DraftKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(
        &mut self,
        text: impl Into<String>,
    ) {
        self.text = text.into();
    }

    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Over the limit; the counter turns red.
    pub fn is_over_limit(&self) -> bool {
        self.char_count() > MAX_MESSAGE_CHARS
    }

    /// Whether the send button is enabled. Content checks that only run on
    /// submit (the blocked-word list) are not part of this.
    pub fn can_send(&self) -> bool {
        !self.text.trim().is_empty() && !self.is_over_limit()
    }

    /// Full check performed when the user presses send.
    pub fn validate(&self) -> Result<(), ComposeError> {
        if self.text.trim().is_empty() {
            return Err(ComposeError::Empty);
        }
        let len = self.char_count();
        if len > MAX_MESSAGE_CHARS {
            return Err(ComposeError::TooLong {
                len,
                max: MAX_MESSAGE_CHARS,
            });
        }
        if self.kind == DraftKind::Compliment && contains_blocked_word(&self.text) {
            return Err(ComposeError::Profanity);
        }
        Ok(())
    }

    /// Validates and hands back the text to send, clearing the draft.
    pub fn take(&mut self) -> Result<String, ComposeError> {
        self.validate()?;
        Ok(std::mem::take(&mut self.text))
    }
}

fn contains_blocked_word(text: &str) -> bool {
    let lower = text.to_lowercase();
    BLOCKED_WORDS.iter().any(|w| lower.contains(w))
}

/// How the recipient strip above the compliment composer reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecipientSummary {
    /// Collapsed: just the count, with singular/plural chosen by the caller.
    Count(usize),
    /// Expanded: every recipient's name.
    Names(Vec<String>),
}

/// Recipients of a compliment draft, collapsed by default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Recipients {
    contacts: Vec<Contact>,
    expanded: bool,
}

impl Recipients {
    pub fn new(contacts: Vec<Contact>) -> Self {
        Self {
            contacts,
            expanded: false,
        }
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn toggle_expanded(&mut self) {
        self.expanded = !self.expanded;
    }

    pub fn summary(&self) -> RecipientSummary {
        if self.expanded {
            RecipientSummary::Names(self.contacts.iter().map(|c| c.name.clone()).collect())
        } else {
            RecipientSummary::Count(self.contacts.len())
        }
    }
}
