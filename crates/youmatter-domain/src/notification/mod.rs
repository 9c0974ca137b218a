mod feed;
mod value_objects;

pub use feed::NotificationFeed;
pub use value_objects::{Notification, NotificationKind};
