pub mod compliance;
pub mod work_time;
