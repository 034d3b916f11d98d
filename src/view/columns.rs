use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Columns of the services table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Column {
    Date,
    Client,
    Concept,
    Description,
    Total,
    Invoice,
    Payment,
    Attachment,
}

impl Column {
    pub const ALL: [Column; 8] = [
        Column::Date,
        Column::Client,
        Column::Concept,
        Column::Description,
        Column::Total,
        Column::Invoice,
        Column::Payment,
        Column::Attachment,
    ];

    /// Key in settings.toml
    pub fn key(self) -> &'static str {
        match self {
            Column::Date => "date",
            Column::Client => "client",
            Column::Concept => "concept",
            Column::Description => "description",
            Column::Total => "total",
            Column::Invoice => "invoice",
            Column::Payment => "payment",
            Column::Attachment => "attachment",
        }
    }

    pub fn header(self) -> &'static str {
        match self {
            Column::Date => "DATE",
            Column::Client => "CLIENT",
            Column::Concept => "CONCEPT",
            Column::Description => "DESCRIPTION",
            Column::Total => "TOTAL",
            Column::Invoice => "INVOICE",
            Column::Payment => "PAYMENT",
            Column::Attachment => "FILE",
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Field name -> shown. Absent fields are shown; unknown keys are kept
/// untouched so older or newer settings files survive a save.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnVisibility(BTreeMap<String, bool>);

impl ColumnVisibility {
    pub fn is_visible(&self, column: Column) -> bool {
        self.0.get(column.key()).copied().unwrap_or(true)
    }

    pub fn set(&mut self, column: Column, visible: bool) {
        self.0.insert(column.key().to_string(), visible);
    }

    /// Returns the new visibility
    pub fn toggle(&mut self, column: Column) -> bool {
        let visible = !self.is_visible(column);
        self.set(column, visible);
        visible
    }

    /// Visible columns in table order
    pub fn visible(&self) -> Vec<Column> {
        Column::ALL
            .into_iter()
            .filter(|c| self.is_visible(*c))
            .collect()
    }
}
