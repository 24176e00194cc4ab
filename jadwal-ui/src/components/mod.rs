//! UI Components

mod schedule_list;

pub use schedule_list::ScheduleList;
