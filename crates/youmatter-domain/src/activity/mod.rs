mod history;
mod value_objects;

pub use history::{ActivityLog, RECENT_ACTIVITY_LIMIT};
pub use value_objects::{Activity, ActivityCategory};
