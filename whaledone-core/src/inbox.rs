//! Received compliments and the unlock-with-points mechanic.

use thiserror::Error;
use tracing::{debug, info};

use crate::models::ReceivedMessage;
use crate::points::{PointsError, UNLOCK_COST, Wallet};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InboxError {
    #[error("message '{0}' not found")]
    NotFound(String),

    #[error(transparent)]
    Points(#[from] PointsError),

    #[error("reply text is empty")]
    EmptyReply,
}

/// Inbox tabs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InboxTab {
    /// Unread messages only.
    #[default]
    New,
    All,
}

/// What tapping a message leads to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenOutcome {
    /// The message was readable and is now marked read.
    Opened(ReceivedMessage),
    /// Locked; ask the user to spend `cost` of their `balance`.
    ConfirmUnlock { cost: u32, balance: u32 },
    /// Locked and the balance cannot cover the cost.
    InsufficientPoints { cost: u32, balance: u32 },
}

#[derive(Debug, Clone, Default)]
pub struct Inbox {
    messages: Vec<ReceivedMessage>,
    tab: InboxTab,
    selected: Option<String>,
}

impl Inbox {
    pub fn new(messages: Vec<ReceivedMessage>) -> Self {
        Self {
            messages,
            ..Default::default()
        }
    }

    pub fn messages(&self) -> &[ReceivedMessage] {
        &self.messages
    }

    pub fn unread(&self) -> impl Iterator<Item = &ReceivedMessage> {
        self.messages.iter().filter(|m| !m.read)
    }

    pub fn unread_count(&self) -> usize {
        self.unread().count()
    }

    pub fn tab(&self) -> InboxTab {
        self.tab
    }

    pub fn set_tab(
        &mut self,
        tab: InboxTab,
    ) {
        self.tab = tab;
    }

    /// Messages listed under the active tab.
    pub fn visible(&self) -> Vec<&ReceivedMessage> {
        match self.tab {
            InboxTab::New => self.unread().collect(),
            InboxTab::All => self.messages.iter().collect(),
        }
    }

    pub fn selected(&self) -> Option<&ReceivedMessage> {
        let id = self.selected.as_deref()?;
        self.messages.iter().find(|m| m.id == id)
    }

    pub fn close(&mut self) {
        self.selected = None;
    }

    pub fn get(
        &self,
        id: &str,
    ) -> Result<&ReceivedMessage, InboxError> {
        self.messages
            .iter()
            .find(|m| m.id == id)
            .ok_or_else(|| InboxError::NotFound(id.to_string()))
    }

    fn get_mut(
        &mut self,
        id: &str,
    ) -> Result<&mut ReceivedMessage, InboxError> {
        self.messages
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or_else(|| InboxError::NotFound(id.to_string()))
    }

    /// Handles a tap on a message.
    pub fn open(
        &mut self,
        id: &str,
        wallet: &Wallet,
    ) -> Result<OpenOutcome, InboxError> {
        let message = self.get_mut(id)?;
        if message.locked {
            let (cost, balance) = (UNLOCK_COST, wallet.balance());
            return Ok(if wallet.can_afford(cost) {
                OpenOutcome::ConfirmUnlock { cost, balance }
            } else {
                OpenOutcome::InsufficientPoints { cost, balance }
            });
        }

        message.read = true;
        let opened = message.clone();
        self.selected = Some(opened.id.clone());
        Ok(OpenOutcome::Opened(opened))
    }

    /// Spends the unlock cost and reveals the message.
    ///
    /// Unlocking a message that is already unlocked changes nothing and
    /// charges nothing.
    pub fn unlock(
        &mut self,
        id: &str,
        wallet: &mut Wallet,
    ) -> Result<&ReceivedMessage, InboxError> {
        let message = self.get_mut(id)?;
        if !message.locked {
            debug!(id, "message already unlocked");
            return self.get(id);
        }

        let balance = wallet.spend(UNLOCK_COST)?;
        message.locked = false;
        message.read = true;
        self.selected = Some(id.to_string());
        info!(id, balance, "message unlocked");
        self.get(id)
    }

    /// Records a reply to the message. Blank text is rejected.
    pub fn reply(
        &mut self,
        id: &str,
        text: &str,
    ) -> Result<(), InboxError> {
        if text.trim().is_empty() {
            return Err(InboxError::EmptyReply);
        }
        let message = self.get_mut(id)?;
        message.has_replied = true;
        self.selected = None;
        info!(id, "reply sent");
        Ok(())
    }
}
