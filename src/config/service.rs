use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::view::Searchable;

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Generated,
    Pending,
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvoiceStatus::Generated => write!(f, "GENERATED"),
            InvoiceStatus::Pending => write!(f, "PENDING"),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Paid,
    Pending,
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentStatus::Paid => write!(f, "PAID"),
            PaymentStatus::Pending => write!(f, "PENDING"),
        }
    }
}

/// One billable line item tied to a client.
///
/// A record without a `client` key lands in the empty-string group rather
/// than being dropped.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServiceRecord {
    pub id: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub client: String,
    #[serde(default)]
    pub concept: String,
    #[serde(default)]
    pub description: String,
    pub amount: Decimal,
    #[serde(rename = "invoice")]
    pub invoice_status: InvoiceStatus,
    #[serde(rename = "payment")]
    pub payment_status: PaymentStatus,
    #[serde(default)]
    pub attachment: bool,
}

impl ServiceRecord {
    pub fn is_payment_pending(&self) -> bool {
        self.payment_status == PaymentStatus::Pending
    }

    /// Invoiced and paid
    pub fn is_completed(&self) -> bool {
        self.invoice_status == InvoiceStatus::Generated
            && self.payment_status == PaymentStatus::Paid
    }
}

impl Searchable for ServiceRecord {
    fn matches(&self, needle: &str) -> bool {
        [&self.client, &self.concept, &self.description]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

/// File layout of services.toml: a `[[service]]` array.
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct ServiceFile {
    #[serde(default, rename = "service")]
    pub services: Vec<ServiceRecord>,
}
