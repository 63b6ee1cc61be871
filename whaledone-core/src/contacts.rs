//! Contact search and multi-select for choosing compliment recipients.

use thiserror::Error;
use tracing::{debug, info};

use crate::models::{Contact, NewContact};

/// Avatar given to contacts added by hand.
const DEFAULT_AVATAR: &str = "👤";

/// Company shown for a hand-added contact without a group.
const UNKNOWN_COMPANY: &str = "Unknown";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContactError {
    #[error("contact name is required")]
    NameRequired,

    #[error("contact '{0}' not found")]
    NotFound(String),
}

/// Search results split the way the list shows them.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ContactGroups<'a> {
    pub registered: Vec<&'a Contact>,
    pub unregistered: Vec<&'a Contact>,
}

/// Contacts plus the current search query and selection.
#[derive(Debug, Clone, Default)]
pub struct ContactPicker {
    contacts: Vec<Contact>,
    query: String,
    /// Selected contact ids, in the order they were picked.
    selected: Vec<String>,
    next_manual_id: u64,
}

impl ContactPicker {
    pub fn new(contacts: Vec<Contact>) -> Self {
        Self {
            contacts,
            ..Default::default()
        }
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn set_query(
        &mut self,
        query: impl Into<String>,
    ) {
        self.query = query.into();
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Contacts whose name, company, role or group contains the query,
    /// ignoring case. An empty query matches everyone.
    pub fn filtered(&self) -> Vec<&Contact> {
        let needle = self.query.to_lowercase();
        self.contacts
            .iter()
            .filter(|c| matches_query(c, &needle))
            .collect()
    }

    pub fn grouped(&self) -> ContactGroups<'_> {
        let (registered, unregistered): (Vec<_>, Vec<_>) =
            self.filtered().into_iter().partition(|c| c.registered);
        ContactGroups {
            registered,
            unregistered,
        }
    }

    pub fn is_selected(
        &self,
        id: &str,
    ) -> bool {
        self.selected.iter().any(|s| s == id)
    }

    /// Adds the contact to the selection, or removes it if already picked.
    /// Returns whether it is selected afterwards.
    pub fn toggle(
        &mut self,
        id: &str,
    ) -> Result<bool, ContactError> {
        if !self.contacts.iter().any(|c| c.id == id) {
            return Err(ContactError::NotFound(id.to_string()));
        }
        if self.is_selected(id) {
            self.selected.retain(|s| s != id);
            Ok(false)
        } else {
            self.selected.push(id.to_string());
            Ok(true)
        }
    }

    /// Selects the contact with this exact name, replacing any selection.
    /// Unknown names leave the selection alone.
    pub fn preselect_by_name(
        &mut self,
        name: &str,
    ) -> bool {
        match self.contacts.iter().find(|c| c.name == name) {
            Some(contact) => {
                self.selected = vec![contact.id.clone()];
                debug!(name, id = %contact.id, "contact preselected");
                true
            }
            None => false,
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    pub fn selection_count(&self) -> usize {
        self.selected.len()
    }

    /// The "next" button needs at least one recipient.
    pub fn can_continue(&self) -> bool {
        !self.selected.is_empty()
    }

    /// Selected contacts, in list order.
    pub fn selected_contacts(&self) -> Vec<Contact> {
        self.contacts
            .iter()
            .filter(|c| self.is_selected(&c.id))
            .cloned()
            .collect()
    }

    /// Appends a hand-entered contact and selects it.
    ///
    /// Hand-added contacts start out unregistered; their company falls back
    /// to the group name, then to "Unknown".
    pub fn add_contact(
        &mut self,
        new: NewContact,
    ) -> Result<&Contact, ContactError> {
        let name = new.name.trim();
        if name.is_empty() {
            return Err(ContactError::NameRequired);
        }

        self.next_manual_id += 1;
        let group = new.group.trim();
        let phone = new.phone.trim();
        let contact = Contact {
            id: format!("new-{}", self.next_manual_id),
            name: name.to_string(),
            role: String::new(),
            company: if group.is_empty() {
                UNKNOWN_COMPANY.to_string()
            } else {
                group.to_string()
            },
            avatar: DEFAULT_AVATAR.to_string(),
            registered: false,
            phone: (!phone.is_empty()).then(|| phone.to_string()),
            group: (!group.is_empty()).then(|| group.to_string()),
        };
        info!(id = %contact.id, name = %contact.name, "contact added");

        self.selected.push(contact.id.clone());
        self.contacts.push(contact);
        Ok(&self.contacts[self.contacts.len() - 1])
    }
}

fn matches_query(
    contact: &Contact,
    needle: &str,
) -> bool {
    let hit = |field: &str| field.to_lowercase().contains(needle);
    hit(&contact.name)
        || hit(&contact.company)
        || hit(&contact.role)
        || contact.group.as_deref().is_some_and(hit)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::seed;

    fn picker() -> ContactPicker {
        ContactPicker::new(seed::contacts())
    }

    fn names(contacts: &[&Contact]) -> Vec<String> {
        contacts.iter().map(|c| c.name.clone()).collect()
    }

    #[test]
    fn empty_query_lists_everyone_split_by_registration() {
        let picker = picker();

        let groups = picker.grouped();

        assert_eq!(groups.registered.len(), 4);
        assert_eq!(groups.unregistered.len(), 2);
    }

    #[test]
    fn search_ignores_case_across_fields() {
        let mut picker = picker();

        picker.set_query("DEVELOPER");
        assert_eq!(names(&picker.filtered()), vec!["Mike Chen"]);

        picker.set_query("co");
        assert_eq!(
            names(&picker.filtered()),
            vec!["Sarah Kim", "Emily Park", "John Doe", "Lisa Wang"]
        );
    }

    #[test]
    fn search_matches_group() {
        let mut picker = picker();
        picker
            .add_contact(NewContact {
                name: "Jae Lee".to_string(),
                phone: String::new(),
                group: "Climbing".to_string(),
            })
            .unwrap();

        picker.set_query("climb");

        assert_eq!(names(&picker.filtered()), vec!["Jae Lee"]);
    }

    #[test]
    fn toggle_selects_then_deselects() {
        let mut picker = picker();

        assert_eq!(picker.toggle("2"), Ok(true));
        assert_eq!(picker.toggle("5"), Ok(true));
        assert_eq!(picker.selection_count(), 2);

        assert_eq!(picker.toggle("2"), Ok(false));
        assert_eq!(picker.selection_count(), 1);
        assert!(picker.is_selected("5"));
    }

    #[test]
    fn toggle_unknown_contact_fails() {
        assert_eq!(
            picker().toggle("42"),
            Err(ContactError::NotFound("42".to_string()))
        );
    }

    #[test]
    fn continue_requires_a_selection() {
        let mut picker = picker();
        assert!(!picker.can_continue());

        picker.toggle("1").unwrap();
        assert!(picker.can_continue());
    }

    #[test]
    fn preselect_replaces_selection() {
        let mut picker = picker();
        picker.toggle("3").unwrap();

        assert!(picker.preselect_by_name("Mike Chen"));

        let selected = picker.selected_contacts();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].name, "Mike Chen");
    }

    #[test]
    fn preselect_unknown_name_is_ignored() {
        let mut picker = picker();

        assert!(!picker.preselect_by_name("Nobody"));
        assert_eq!(picker.selection_count(), 0);
    }

    #[test]
    fn add_contact_trims_defaults_and_selects() {
        let mut picker = picker();

        let contact = picker
            .add_contact(NewContact {
                name: "  Jae Lee ".to_string(),
                phone: " 010-0000-0000 ".to_string(),
                group: String::new(),
            })
            .unwrap()
            .clone();

        assert_eq!(contact.name, "Jae Lee");
        assert_eq!(contact.company, "Unknown");
        assert_eq!(contact.phone.as_deref(), Some("010-0000-0000"));
        assert_eq!(contact.group, None);
        assert!(!contact.registered);
        assert!(picker.is_selected(&contact.id));
        assert_eq!(picker.contacts().len(), 7);
    }

    #[test]
    fn add_contact_ids_are_unique() {
        let mut picker = picker();
        let new = || NewContact {
            name: "Twin".to_string(),
            ..Default::default()
        };

        let first = picker.add_contact(new()).unwrap().id.clone();
        let second = picker.add_contact(new()).unwrap().id.clone();

        assert_ne!(first, second);
    }

    #[test]
    fn add_contact_requires_name() {
        let mut picker = picker();

        assert_eq!(
            picker.add_contact(NewContact {
                name: "   ".to_string(),
                ..Default::default()
            }),
            Err(ContactError::NameRequired)
        );
    }
}
