use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sentiment {
    Positive,
    VeryPositive,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageStats {
    pub sentiment: Sentiment,
    pub keywords: Vec<String>,
    pub length: u32,
    pub category: String,
}

/// An anonymous compliment delivered to the current user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceivedMessage {
    pub id: String,
    pub preview: String,
    pub content: String,
    /// Human-readable age as shown in the list (e.g. "2일 전").
    pub age: String,
    pub locked: bool,
    pub read: bool,
    pub has_replied: bool,
    pub stats: MessageStats,
}
