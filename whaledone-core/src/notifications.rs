use tracing::debug;

use crate::models::{Notification, NotificationKind};
use crate::navigation::Screen;

impl NotificationKind {
    /// Screen a notification of this kind opens, if any.
    pub fn target(&self) -> Option<Screen> {
        match self {
            Self::Compliment | Self::ThankYou => Some(Screen::Inbox),
            Self::Milestone => Some(Screen::Stats),
            Self::System => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct NotificationCenter {
    notifications: Vec<Notification>,
}

impl NotificationCenter {
    pub fn new(notifications: Vec<Notification>) -> Self {
        Self { notifications }
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn unread_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.read).count()
    }

    pub fn all_caught_up(&self) -> bool {
        self.unread_count() == 0
    }

    /// Marks the notification read and returns where it leads.
    /// Unknown ids open nothing.
    pub fn open(
        &mut self,
        id: &str,
    ) -> Option<Screen> {
        let notification = self.notifications.iter_mut().find(|n| n.id == id)?;
        notification.read = true;
        debug!(id, kind = ?notification.kind, "notification opened");
        notification.kind.target()
    }

    pub fn mark_all_read(&mut self) {
        for notification in &mut self.notifications {
            notification.read = true;
        }
    }
}
