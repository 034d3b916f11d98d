use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use super::is_urgent;
use crate::config::ServiceRecord;

/// Headline figures over a set of services.
#[derive(Debug, Serialize, Default, PartialEq)]
pub struct DashboardSummary {
    pub total_amount: Decimal,
    pub total_pending: Decimal,
    pub total_services: usize,
    pub completed_services: usize,
    pub pending_payments: usize,
    pub urgent_payments: usize,
    pub attachments: usize,
}

impl DashboardSummary {
    pub fn from_services<'a, I>(services: I, today: NaiveDate) -> Self
    where
        I: IntoIterator<Item = &'a ServiceRecord>,
    {
        let mut summary = Self::default();
        for service in services {
            summary.total_services += 1;
            summary.total_amount += service.amount;
            if service.is_completed() {
                summary.completed_services += 1;
            }
            if service.is_payment_pending() {
                summary.pending_payments += 1;
                summary.total_pending += service.amount;
            }
            if is_urgent(service, today) {
                summary.urgent_payments += 1;
            }
            if service.attachment {
                summary.attachments += 1;
            }
        }
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{InvoiceStatus, PaymentStatus};

    fn service(
        month: u32,
        amount: i64,
        invoice: InvoiceStatus,
        payment: PaymentStatus,
    ) -> ServiceRecord {
        ServiceRecord {
            id: month.to_string(),
            date: NaiveDate::from_ymd_opt(2026, month, 1).unwrap(),
            client: "Empresa A".to_string(),
            concept: String::new(),
            description: String::new(),
            amount: Decimal::from(amount),
            invoice_status: invoice,
            payment_status: payment,
            attachment: month == 10,
        }
    }

    #[test]
    fn counts_each_category() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        let services = vec![
            service(8, 5000, InvoiceStatus::Generated, PaymentStatus::Paid),
            service(9, 3500, InvoiceStatus::Generated, PaymentStatus::Pending),
            service(10, 1500, InvoiceStatus::Pending, PaymentStatus::Pending),
            service(7, 2000, InvoiceStatus::Pending, PaymentStatus::Paid),
        ];
        let summary = DashboardSummary::from_services(&services, today);

        assert_eq!(summary.total_services, 4);
        assert_eq!(summary.total_amount, Decimal::from(12000));
        assert_eq!(summary.total_pending, Decimal::from(5000));
        assert_eq!(summary.completed_services, 1);
        assert_eq!(summary.pending_payments, 2);
        assert_eq!(summary.urgent_payments, 1);
        assert_eq!(summary.attachments, 1);
    }

    #[test]
    fn empty_is_all_zero() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        let services: Vec<ServiceRecord> = Vec::new();
        assert_eq!(
            DashboardSummary::from_services(&services, today),
            DashboardSummary::default()
        );
    }
}
