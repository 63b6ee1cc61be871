//! Session state shared by every screen.
//!
//! All domain data lives here for the lifetime of the process. Nothing in
//! this module is persisted; see `whaledone_core::prefs` for what is.

use std::fmt;

use whaledone_core::compose::{Draft, Recipients};
use whaledone_core::contacts::ContactPicker;
use whaledone_core::inbox::Inbox;
use whaledone_core::insights::Insights;
use whaledone_core::notifications::NotificationCenter;
use whaledone_core::sent::SentBox;
use whaledone_core::signup::SignupFlow;
use whaledone_core::{UserProfile, Wallet, seed};

/// How many keywords the home screen shows.
const DASHBOARD_KEYWORDS: usize = 3;

/// How many registered contacts the home screen recommends.
const DASHBOARD_RECOMMENDATIONS: usize = 3;

#[derive(Debug, Clone)]
pub struct Session {
    pub profile: UserProfile,
    /// Shared by inbox and sent-reply unlocks.
    pub wallet: Wallet,
    pub inbox: Inbox,
    pub sent: SentBox,
    pub contacts: ContactPicker,
    pub notifications: NotificationCenter,
    pub insights: Insights,
    pub signup: SignupFlow,
    /// Open composer, if any.
    pub draft: Option<Draft>,
    pub recipients: Recipients,
    /// Settings toggle; not persisted.
    pub notifications_enabled: bool,
}

impl Session {
    /// A fresh session populated from the sample data.
    pub fn seeded() -> Self {
        Self {
            profile: seed::profile(),
            wallet: Wallet::default(),
            inbox: Inbox::new(seed::received_messages()),
            sent: SentBox::new(seed::sent_messages()),
            contacts: ContactPicker::new(seed::contacts()),
            notifications: NotificationCenter::new(seed::notifications()),
            insights: seed::insights(),
            signup: SignupFlow::new(),
            draft: None,
            recipients: Recipients::default(),
            notifications_enabled: true,
        }
    }

    pub fn dashboard(&self) -> Dashboard {
        Dashboard {
            name: self.profile.name.clone(),
            balance: self.wallet.balance(),
            unread_messages: self.inbox.unread_count(),
            unread_notifications: self.notifications.unread_count(),
            total_compliments: self.insights.total_compliments(),
            growth_rate: self.insights.growth_rate,
            top_keywords: self
                .insights
                .top_keywords(DASHBOARD_KEYWORDS)
                .into_iter()
                .map(|k| k.keyword.clone())
                .collect(),
            recommendations: self
                .contacts
                .contacts()
                .iter()
                .filter(|c| c.registered)
                .take(DASHBOARD_RECOMMENDATIONS)
                .map(|c| c.name.clone())
                .collect(),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::seeded()
    }
}

/// Figures on the home screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dashboard {
    pub name: String,
    pub balance: u32,
    pub unread_messages: usize,
    pub unread_notifications: usize,
    pub total_compliments: u32,
    pub growth_rate: u32,
    pub top_keywords: Vec<String>,
    /// Registered contacts suggested as the next recipients.
    pub recommendations: Vec<String>,
}

impl fmt::Display for Dashboard {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(f, "Dashboard for {}", self.name)?;
        writeln!(f, "  Points:         {}", self.balance)?;
        writeln!(f, "  Unread inbox:   {}", self.unread_messages)?;
        writeln!(f, "  Notifications:  {}", self.unread_notifications)?;
        writeln!(
            f,
            "  Compliments:    {} (+{}%)",
            self.total_compliments, self.growth_rate
        )?;
        writeln!(f, "  Top keywords:   {}", self.top_keywords.join(", "))?;
        write!(f, "  Recommended:    {}", self.recommendations.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn seeded_dashboard() {
        let dashboard = Session::seeded().dashboard();

        assert_eq!(
            dashboard,
            Dashboard {
                name: "Alex Johnson".to_string(),
                balance: 1200,
                unread_messages: 5,
                unread_notifications: 3,
                total_compliments: 80,
                growth_rate: 23,
                top_keywords: vec![
                    "도움이 되는".to_string(),
                    "창의적인".to_string(),
                    "긍정적인".to_string(),
                ],
                recommendations: vec![
                    "Sarah Kim".to_string(),
                    "Mike Chen".to_string(),
                    "Emily Park".to_string(),
                ],
            }
        );
    }

    #[test]
    fn dashboard_follows_session_changes() {
        let mut session = Session::seeded();
        session.notifications.mark_all_read();
        session.wallet.spend(100).unwrap();

        let dashboard = session.dashboard();

        assert_eq!(dashboard.unread_notifications, 0);
        assert_eq!(dashboard.balance, 1100);
    }

    #[test]
    fn display_lists_figures() {
        let text = Session::seeded().dashboard().to_string();

        assert!(text.starts_with("Dashboard for Alex Johnson"));
        assert!(text.contains("Points:         1200"));
        assert!(text.contains("+23%"));
    }
}
