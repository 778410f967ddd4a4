pub mod cell;
pub mod daily_record;
pub mod ledger;
pub mod summary;

pub use cell::{CellValue, RawRow};
pub use daily_record::DailyRecord;
pub use ledger::{Aggregation, BusinessLedger, EmployeeLedger};
pub use summary::SummaryRow;
