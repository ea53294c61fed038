pub mod calendar;
pub mod habits;
pub mod log;
pub mod streak;
pub mod summary;
pub mod weekly;

pub use habits::HabitLogic;
pub use streak::current_streak;
pub use weekly::{WeeklyBucket, weekly_stats};
