//! Grouping of daily records by employee and by business unit.

use crate::models::{Aggregation, BusinessLedger, DailyRecord, EmployeeLedger, SummaryRow};
use std::collections::BTreeMap;

/// Mutable grouping state for one pipeline run. Consumed by `finish`.
#[derive(Debug, Default)]
pub struct LedgerBuilder {
    employees: BTreeMap<String, EmployeeLedger>,
    businesses: BTreeMap<String, BusinessLedger>,
}

impl LedgerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every record lands in its employee's ledger; records with a business
    /// unit also land in that unit's ledger.
    pub fn push(&mut self, record: DailyRecord) {
        if let Some(unit) = record
            .business_unit
            .as_deref()
            .filter(|b| !b.is_empty())
        {
            self.businesses
                .entry(unit.to_string())
                .or_default()
                .entry(record.employee_name.clone())
                .or_default()
                .push(record.clone());
        }

        self.employees
            .entry(record.employee_name.clone())
            .or_default()
            .push(record);
    }

    /// Sort every ledger by date. `sort_by_key` is stable, so same-day
    /// records keep their input order.
    pub fn finish(mut self) -> Aggregation {
        for ledger in self.employees.values_mut() {
            sort_ledger(ledger);
        }

        for persons in self.businesses.values_mut() {
            for ledger in persons.values_mut() {
                sort_ledger(ledger);
            }
        }

        Aggregation {
            employees: self.employees,
            businesses: self.businesses,
        }
    }
}

fn sort_ledger(ledger: &mut EmployeeLedger) {
    ledger.sort_by_key(|r| r.date);
}

pub fn aggregate<I>(records: I) -> Aggregation
where
    I: IntoIterator<Item = DailyRecord>,
{
    let mut builder = LedgerBuilder::new();
    for record in records {
        builder.push(record);
    }
    builder.finish()
}

/// Overview rows, one per employee, in name order.
pub fn employee_summaries(employees: &BTreeMap<String, EmployeeLedger>) -> Vec<SummaryRow> {
    employees
        .iter()
        .map(|(name, records)| SummaryRow::for_employee(name, records))
        .collect()
}

/// Overview rows for the employees of one business unit.
pub fn business_summaries(persons: &BusinessLedger) -> Vec<SummaryRow> {
    persons
        .iter()
        .map(|(name, records)| SummaryRow::from_ledger(name, records))
        .collect()
}
