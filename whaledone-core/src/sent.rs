//! Compliments the user has sent and the thank-you replies they drew.

use thiserror::Error;
use tracing::info;

use crate::models::{Reply, SentMessage};
use crate::points::{PointsError, UNLOCK_COST, Wallet};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SentError {
    #[error("sent message '{0}' not found")]
    MessageNotFound(String),

    #[error("reply '{reply}' not found on message '{message}'")]
    ReplyNotFound { message: String, reply: String },

    #[error(transparent)]
    Points(#[from] PointsError),
}

/// What tapping a reply leads to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplyOutcome {
    Opened(Reply),
    ConfirmUnlock { cost: u32, balance: u32 },
    InsufficientPoints { cost: u32, balance: u32 },
}

#[derive(Debug, Clone, Default)]
pub struct SentBox {
    messages: Vec<SentMessage>,
}

impl SentBox {
    pub fn new(messages: Vec<SentMessage>) -> Self {
        Self { messages }
    }

    pub fn messages(&self) -> &[SentMessage] {
        &self.messages
    }

    /// Replies across every sent message.
    pub fn total_replies(&self) -> usize {
        self.messages.iter().map(|m| m.replies.len()).sum()
    }

    pub fn reply(
        &self,
        message_id: &str,
        reply_id: &str,
    ) -> Result<&Reply, SentError> {
        self.messages
            .iter()
            .find(|m| m.id == message_id)
            .ok_or_else(|| SentError::MessageNotFound(message_id.to_string()))?
            .replies
            .iter()
            .find(|r| r.id == reply_id)
            .ok_or_else(|| SentError::ReplyNotFound {
                message: message_id.to_string(),
                reply: reply_id.to_string(),
            })
    }

    fn reply_mut(
        &mut self,
        message_id: &str,
        reply_id: &str,
    ) -> Result<&mut Reply, SentError> {
        self.messages
            .iter_mut()
            .find(|m| m.id == message_id)
            .ok_or_else(|| SentError::MessageNotFound(message_id.to_string()))?
            .replies
            .iter_mut()
            .find(|r| r.id == reply_id)
            .ok_or_else(|| SentError::ReplyNotFound {
                message: message_id.to_string(),
                reply: reply_id.to_string(),
            })
    }

    /// Handles a tap on a reply.
    pub fn open_reply(
        &self,
        message_id: &str,
        reply_id: &str,
        wallet: &Wallet,
    ) -> Result<ReplyOutcome, SentError> {
        let reply = self.reply(message_id, reply_id)?;
        if !reply.locked {
            return Ok(ReplyOutcome::Opened(reply.clone()));
        }

        let (cost, balance) = (UNLOCK_COST, wallet.balance());
        Ok(if wallet.can_afford(cost) {
            ReplyOutcome::ConfirmUnlock { cost, balance }
        } else {
            ReplyOutcome::InsufficientPoints { cost, balance }
        })
    }

    /// Spends the unlock cost and reveals the reply. Already-unlocked
    /// replies are returned without charge.
    pub fn unlock_reply(
        &mut self,
        message_id: &str,
        reply_id: &str,
        wallet: &mut Wallet,
    ) -> Result<Reply, SentError> {
        let reply = self.reply_mut(message_id, reply_id)?;
        if reply.locked {
            let balance = wallet.spend(UNLOCK_COST)?;
            reply.locked = false;
            info!(message_id, reply_id, balance, "reply unlocked");
        }
        Ok(reply.clone())
    }
}
