use chrono::{NaiveDate, NaiveDateTime};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::ClientDetails;

/// Mutable portal state. Seed files are never rewritten; everything a
/// command changes lands here.
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct State {
    /// Client id -> archived, overriding the flag in clients.toml
    #[serde(default)]
    pub archived: BTreeMap<String, bool>,
    /// Client id -> details from client-add/client-edit. Ids not in
    /// clients.toml are added clients, kept in the order they were added.
    #[serde(default)]
    pub clients: IndexMap<String, ClientDetails>,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
    #[serde(default)]
    pub notifications: Vec<Notification>,
    #[serde(default)]
    pub last_notification_id: u32,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Attachment {
    pub service: String,
    pub file: String,
    pub mime: String,
    pub date: NaiveDate,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Notification {
    pub id: u32,
    pub message: String,
    pub created: NaiveDateTime,
    #[serde(default)]
    pub read: bool,
}

impl State {
    pub fn is_archived(&self, client_id: &str, seeded: bool) -> bool {
        self.archived.get(client_id).copied().unwrap_or(seeded)
    }

    pub fn attachment_for(&self, service_id: &str) -> Option<&Attachment> {
        // Latest upload replaces earlier ones
        self.attachments.iter().rev().find(|a| a.service == service_id)
    }

    pub fn notify(&mut self, message: impl Into<String>, created: NaiveDateTime) -> u32 {
        self.last_notification_id += 1;
        let id = self.last_notification_id;
        self.notifications.push(Notification {
            id,
            message: message.into(),
            created,
            read: false,
        });
        id
    }

    pub fn unread_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.read).count()
    }

    /// Returns false when no notification has that id
    pub fn mark_read(&mut self, id: u32) -> bool {
        match self.notifications.iter_mut().find(|n| n.id == id) {
            Some(n) => {
                n.read = true;
                true
            }
            None => false,
        }
    }

    pub fn mark_all_read(&mut self) -> usize {
        let mut marked = 0;
        for n in self.notifications.iter_mut().filter(|n| !n.read) {
            n.read = true;
            marked += 1;
        }
        marked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, day)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap()
    }

    #[test]
    fn archive_override_wins_over_seed() {
        let mut state = State::default();
        assert!(!state.is_archived("1", false));
        assert!(state.is_archived("4", true));

        state.archived.insert("4".to_string(), false);
        assert!(!state.is_archived("4", true));
    }

    #[test]
    fn notification_ids_are_sequential() {
        let mut state = State::default();
        assert_eq!(state.notify("first", at(1)), 1);
        assert_eq!(state.notify("second", at(2)), 2);
        assert_eq!(state.unread_count(), 2);

        assert!(state.mark_read(1));
        assert!(!state.mark_read(7));
        assert_eq!(state.unread_count(), 1);

        assert_eq!(state.mark_all_read(), 1);
        assert_eq!(state.unread_count(), 0);
    }

    #[test]
    fn latest_attachment_is_returned() {
        let mut state = State::default();
        let date = NaiveDate::from_ymd_opt(2026, 10, 1).unwrap();
        for file in ["old.pdf", "new.png"] {
            state.attachments.push(Attachment {
                service: "3".to_string(),
                file: file.to_string(),
                mime: "application/pdf".to_string(),
                date,
            });
        }
        assert_eq!(state.attachment_for("3").unwrap().file, "new.png");
        assert!(state.attachment_for("4").is_none());
    }

    #[test]
    fn state_survives_toml() {
        let mut state = State::default();
        state.archived.insert("2".to_string(), true);
        state.notify("Client archived", at(3));
        for id in ["7", "5"] {
            state.clients.insert(
                id.to_string(),
                ClientDetails {
                    name: format!("Cliente {id}"),
                    email: String::new(),
                    phone: None,
                    company: "Empresa E".to_string(),
                },
            );
        }

        let text = toml::to_string_pretty(&state).unwrap();
        let parsed: State = toml::from_str(&text).unwrap();
        assert!(parsed.is_archived("2", false));
        assert_eq!(parsed.notifications.len(), 1);
        assert_eq!(parsed.last_notification_id, 1);
        let ids: Vec<&str> = parsed.clients.keys().map(String::as_str).collect();
        assert_eq!(ids, ["7", "5"]);
        assert_eq!(parsed.clients["5"].company, "Empresa E");
    }
}
