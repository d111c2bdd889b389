//! Plan/status selection applied before aggregation.

use std::collections::BTreeSet;

use crate::domain::sale::{PaymentStatus, SalesRecord};

/// Selection criteria for sales records.
///
/// An empty set means "no restriction" for that dimension, so the default
/// filter lets every record through.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SalesFilter {
    pub plans: BTreeSet<String>,
    pub statuses: BTreeSet<PaymentStatus>,
}

impl SalesFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn plan(mut self, plan: impl Into<String>) -> Self {
        self.plans.insert(plan.into());
        self
    }

    pub fn status(mut self, status: PaymentStatus) -> Self {
        self.statuses.insert(status);
        self
    }

    /// `true` when the filter selects everything.
    pub fn is_empty(&self) -> bool {
        self.plans.is_empty() && self.statuses.is_empty()
    }

    pub fn matches(&self, record: &SalesRecord) -> bool {
        let plan_match = self.plans.is_empty() || self.plans.contains(&record.plan);
        let status_match =
            self.statuses.is_empty() || self.statuses.contains(&record.payment_status);
        plan_match && status_match
    }
}

/// Returns the records accepted by `filter`, keeping their order.
pub fn filter_records(records: &[SalesRecord], filter: &SalesFilter) -> Vec<SalesRecord> {
    records
        .iter()
        .filter(|record| filter.matches(record))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(plan: &str, status: PaymentStatus, amount: f64) -> SalesRecord {
        SalesRecord {
            plan: plan.to_string(),
            payment_status: status,
            amount_paid: amount,
            ..SalesRecord::default()
        }
    }

    fn sample() -> Vec<SalesRecord> {
        vec![
            record("Fiber10", PaymentStatus::Paid, 100.0),
            record("Fiber20", PaymentStatus::Pending, 200.0),
            record("Fiber10", PaymentStatus::Pending, 300.0),
            record("Fiber30", PaymentStatus::Paid, 400.0),
        ]
    }

    #[test]
    fn empty_filter_is_identity() {
        let records = sample();

        assert_eq!(filter_records(&records, &SalesFilter::new()), records);
    }

    #[test]
    fn status_filter_keeps_only_matching_records() {
        let paid = filter_records(&sample(), &SalesFilter::new().status(PaymentStatus::Paid));

        assert_eq!(paid.len(), 2);
        assert!(paid.iter().all(SalesRecord::is_paid));
    }

    #[test]
    fn paid_and_pending_partition_the_input() {
        let records = sample();
        let paid = filter_records(&records, &SalesFilter::new().status(PaymentStatus::Paid));
        let pending = filter_records(&records, &SalesFilter::new().status(PaymentStatus::Pending));

        assert_eq!(paid.len() + pending.len(), records.len());
        for record in &records {
            let hits = paid.iter().chain(&pending).filter(|r| *r == record).count();
            assert_eq!(hits, 1);
        }
    }

    #[test]
    fn plan_and_status_are_combined() {
        let filter = SalesFilter::new()
            .plan("Fiber10")
            .plan("Fiber30")
            .status(PaymentStatus::Paid);

        let amounts: Vec<_> = filter_records(&sample(), &filter)
            .iter()
            .map(|record| record.amount_paid)
            .collect();

        assert_eq!(amounts, vec![100.0, 400.0]);
    }

    #[test]
    fn plan_filter_matches_raw_plan_name() {
        let records = vec![record("Fiber10[promo]", PaymentStatus::Paid, 1.0)];

        assert!(filter_records(&records, &SalesFilter::new().plan("Fiber10")).is_empty());
    }
}
