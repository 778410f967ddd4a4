//! Header names of the attendance sheet.

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ColumnLayout {
    pub work_date: String,
    pub employee_name: String,
    pub employee_id: String,
    pub business_unit: String,
    pub clock_in: String,
    pub clock_out: String,
    pub break_start: String,
    /// Accepted spellings of the break-end column, in priority order.
    pub break_end: Vec<String>,
}

impl Default for ColumnLayout {
    fn default() -> Self {
        Self {
            work_date: "勤務日".to_string(),
            employee_name: "従業員名".to_string(),
            employee_id: "従業員番号".to_string(),
            business_unit: "事業所名".to_string(),
            clock_in: "出勤時刻".to_string(),
            clock_out: "退勤時刻".to_string(),
            break_start: "休憩1開始時刻".to_string(),
            break_end: vec!["休憩1終了時刻".to_string(), "休憩1復帰時刻".to_string()],
        }
    }
}

impl ColumnLayout {
    pub(crate) fn validate(&self) -> AppResult<()> {
        let required = [
            ("work_date", &self.work_date),
            ("employee_name", &self.employee_name),
            ("clock_in", &self.clock_in),
            ("clock_out", &self.clock_out),
        ];

        for (field, header) in required {
            if header.trim().is_empty() {
                return Err(AppError::Config(format!("columns.{field} must not be empty")));
            }
        }

        Ok(())
    }
}
