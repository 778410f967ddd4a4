pub mod date;
pub mod excel_date;
pub mod path;
pub mod time;

pub use time::format_time;
