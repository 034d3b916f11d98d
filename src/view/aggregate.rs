use indexmap::IndexMap;
use rust_decimal::Decimal;
use serde::Serialize;

use super::Searchable;
use crate::config::ServiceRecord;

/// Per-client rollup. Totals are derived from `services` on construction
/// and never adjusted afterwards.
#[derive(Debug, Serialize, Clone)]
pub struct ClientAggregate<'a> {
    pub client: &'a str,
    pub services: Vec<&'a ServiceRecord>,
    pub total_amount: Decimal,
    pub total_pending: Decimal,
}

impl<'a> ClientAggregate<'a> {
    fn new(client: &'a str) -> Self {
        Self {
            client,
            services: Vec::new(),
            total_amount: Decimal::ZERO,
            total_pending: Decimal::ZERO,
        }
    }

    fn push(&mut self, service: &'a ServiceRecord) {
        self.total_amount += service.amount;
        if service.is_payment_pending() {
            self.total_pending += service.amount;
        }
        self.services.push(service);
    }

    pub fn pending_count(&self) -> usize {
        self.services.iter().filter(|s| s.is_payment_pending()).count()
    }

    pub fn has_balance(&self) -> bool {
        self.total_pending > Decimal::ZERO
    }
}

impl Searchable for ClientAggregate<'_> {
    fn matches(&self, needle: &str) -> bool {
        self.client.to_lowercase().contains(needle)
    }
}

/// Group services by exact client name. Groups come out in order of the
/// first service seen for each client.
pub fn aggregate_by_client<'a, I>(services: I) -> Vec<ClientAggregate<'a>>
where
    I: IntoIterator<Item = &'a ServiceRecord>,
{
    let mut groups: IndexMap<&'a str, ClientAggregate<'a>> = IndexMap::new();
    for service in services {
        let client = service.client.as_str();
        groups
            .entry(client)
            .or_insert_with(|| ClientAggregate::new(client))
            .push(service);
    }
    groups.into_values().collect()
}
