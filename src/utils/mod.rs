pub mod runlog;
pub mod time;

pub use runlog::RunLog;
