mod xlsx;

pub use xlsx::read_attendance;
