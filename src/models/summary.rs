use super::daily_record::DailyRecord;
use serde::Serialize;
use std::collections::BTreeSet;

/// Separator used when an employee worked for several business units.
pub const BUSINESS_SEPARATOR: &str = "・";

/// Per-ledger statistics, recomputed on demand and never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    pub name: String,
    pub business_label: Option<String>,
    pub day_count: usize,
    pub total_minutes: f64,
    pub average_minutes: f64,
    pub violation_days: usize,
}

impl SummaryRow {
    /// Summary without a business-unit label (business overview tables).
    pub fn from_ledger(name: &str, records: &[DailyRecord]) -> Self {
        let day_count = records.len();
        let total_minutes: f64 = records.iter().map(|r| r.worked_minutes).sum();
        let average_minutes = if day_count > 0 {
            total_minutes / day_count as f64
        } else {
            0.0
        };
        let violation_days = records.iter().filter(|r| r.is_violation()).count();

        Self {
            name: name.to_string(),
            business_label: None,
            day_count,
            total_minutes,
            average_minutes,
            violation_days,
        }
    }

    /// Summary for the employee overview: carries every business unit seen
    /// for the employee, sorted and de-duplicated.
    pub fn for_employee(name: &str, records: &[DailyRecord]) -> Self {
        let units: BTreeSet<&str> = records
            .iter()
            .filter_map(|r| r.business_unit.as_deref())
            .filter(|b| !b.is_empty())
            .collect();

        let label = units.into_iter().collect::<Vec<_>>().join(BUSINESS_SEPARATOR);

        Self {
            business_label: Some(label),
            ..Self::from_ledger(name, records)
        }
    }

    pub fn business_label_str(&self) -> &str {
        self.business_label.as_deref().unwrap_or("")
    }
}
