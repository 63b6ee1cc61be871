//! Compliment statistics for the insights screen and the home dashboard.

use crate::models::{KeywordCount, MonthlyCount};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Insights {
    pub keywords: Vec<KeywordCount>,
    pub timeline: Vec<MonthlyCount>,
    /// Month-over-month growth, in percent.
    pub growth_rate: u32,
    /// Subscribers see the detailed breakdown; everyone else gets a prompt.
    pub is_subscriber: bool,
}

/// What pressing "view detailed stats" does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailAccess {
    Granted,
    SubscriptionRequired,
}

impl Insights {
    /// Compliments received over the whole timeline.
    pub fn total_compliments(&self) -> u32 {
        self.timeline.iter().map(|m| m.count).sum()
    }

    /// The `n` most frequent keywords. Ties keep their original order.
    pub fn top_keywords(
        &self,
        n: usize,
    ) -> Vec<&KeywordCount> {
        let mut sorted: Vec<_> = self.keywords.iter().collect();
        sorted.sort_by(|a, b| b.count.cmp(&a.count));
        sorted.truncate(n);
        sorted
    }

    /// Busiest month, if there is any data.
    pub fn peak_month(&self) -> Option<&MonthlyCount> {
        self.timeline.iter().max_by_key(|m| m.count)
    }

    pub fn detailed_stats(&self) -> DetailAccess {
        if self.is_subscriber {
            DetailAccess::Granted
        } else {
            DetailAccess::SubscriptionRequired
        }
    }
}
