use super::daily_record::DailyRecord;
use serde::Serialize;
use std::collections::BTreeMap;

/// Records of one employee, sorted ascending by date.
pub type EmployeeLedger = Vec<DailyRecord>;

/// Employee name → ledger, scoped to one business unit.
pub type BusinessLedger = BTreeMap<String, EmployeeLedger>;

/// Result of one pipeline run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Aggregation {
    pub employees: BTreeMap<String, EmployeeLedger>,
    pub businesses: BTreeMap<String, BusinessLedger>,
}

impl Aggregation {
    pub fn employee_count(&self) -> usize {
        self.employees.len()
    }

    pub fn business_count(&self) -> usize {
        self.businesses.len()
    }

    pub fn record_count(&self) -> usize {
        self.employees.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }
}
