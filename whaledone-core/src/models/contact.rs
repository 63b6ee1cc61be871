use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: String,
    pub name: String,
    pub role: String,
    pub company: String,
    pub avatar: String,
    /// Whether the contact already has an account in the app.
    pub registered: bool,
    pub phone: Option<String>,
    pub group: Option<String>,
}

impl Contact {
    /// Secondary line shown under the name: role, then group, then company,
    /// with the company appended when both role and company are known.
    pub fn subtitle(&self) -> String {
        let head = [Some(self.role.as_str()), self.group.as_deref(), Some(self.company.as_str())]
            .into_iter()
            .flatten()
            .find(|s| !s.is_empty())
            .unwrap_or_default();

        if !self.role.is_empty() && !self.company.is_empty() {
            format!("{head} · {}", self.company)
        } else {
            head.to_string()
        }
    }
}

/// For adding a contact by hand (no id, avatar or registration status).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewContact {
    pub name: String,
    pub phone: String,
    pub group: String,
}
