mod contact;
mod insight;
mod language;
mod message;
mod notification;
mod profile;
mod sent_message;

pub use contact::{Contact, NewContact};
pub use insight::{KeywordCount, MonthlyCount};
pub use language::Language;
pub use message::{MessageStats, ReceivedMessage, Sentiment};
pub use notification::{Notification, NotificationKind};
pub use profile::UserProfile;
pub use sent_message::{Reply, SentMessage};
