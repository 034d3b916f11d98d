use serde::{Deserialize, Serialize};

use crate::view::Searchable;

/// A client in the directory. `company` is the label their services are billed under.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Client {
    /// Table name in clients.toml, filled in on load
    #[serde(skip)]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub company: String,
    #[serde(default)]
    pub archived: bool,
}

/// The fields `client-add` and `client-edit` write.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ClientDetails {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub company: String,
}

impl Client {
    /// New directory entry; added clients start active.
    pub fn from_details(id: impl Into<String>, details: &ClientDetails) -> Self {
        Self {
            id: id.into(),
            name: details.name.clone(),
            email: details.email.clone(),
            phone: details.phone.clone(),
            company: details.company.clone(),
            archived: false,
        }
    }

    pub fn details(&self) -> ClientDetails {
        ClientDetails {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            company: self.company.clone(),
        }
    }

    /// Overwrite contact fields. Id and archive flag are untouched.
    pub fn apply(&mut self, details: &ClientDetails) {
        self.name = details.name.clone();
        self.email = details.email.clone();
        self.phone = details.phone.clone();
        self.company = details.company.clone();
    }
}

impl Searchable for Client {
    fn matches(&self, needle: &str) -> bool {
        [&self.name, &self.email, &self.company]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}
