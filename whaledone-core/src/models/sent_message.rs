use serde::{Deserialize, Serialize};

/// A thank-you reply to a compliment the user sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    pub id: String,
    pub content: String,
    pub age: String,
    pub locked: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentMessage {
    pub id: String,
    pub content: String,
    pub recipient_name: String,
    pub age: String,
    pub replies: Vec<Reply>,
}
