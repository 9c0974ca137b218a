use serde::Serialize;
use std::collections::VecDeque;

use super::value_objects::Notification;
use crate::shared::{DomainError, NotificationId};

/// Most-recent-first notification list.
///
/// `unread_count` is maintained incrementally and always equals the number of
/// entries with `is_read == false`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationFeed {
    notifications: VecDeque<Notification>,
    unread_count: u32,
}

impl NotificationFeed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, notification: Notification) -> Result<&Notification, DomainError> {
        if self.find(&notification.id).is_some() {
            return Err(DomainError::InvalidArgument(format!(
                "Notification {} already exists",
                notification.id
            )));
        }
        if !notification.is_read {
            self.unread_count += 1;
        }
        self.notifications.push_front(notification);
        Ok(&self.notifications[0])
    }

    /// Returns true only on an unread -> read transition
    pub fn mark_as_read(&mut self, id: &NotificationId) -> bool {
        match self.notifications.iter_mut().find(|n| &n.id == id) {
            Some(notification) if !notification.is_read => {
                notification.is_read = true;
                self.unread_count -= 1;
                true
            }
            _ => false,
        }
    }

    /// Returns how many notifications changed state
    pub fn mark_all_as_read(&mut self) -> usize {
        let mut changed = 0;
        for notification in self.notifications.iter_mut() {
            if !notification.is_read {
                notification.is_read = true;
                changed += 1;
            }
        }
        self.unread_count = 0;
        changed
    }

    pub fn remove(&mut self, id: &NotificationId) -> Option<Notification> {
        let index = self.notifications.iter().position(|n| &n.id == id)?;
        let removed = self.notifications.remove(index)?;
        if !removed.is_read {
            self.unread_count -= 1;
        }
        Some(removed)
    }

    pub fn find(&self, id: &NotificationId) -> Option<&Notification> {
        self.notifications.iter().find(|n| &n.id == id)
    }

    pub fn notifications(&self) -> impl Iterator<Item = &Notification> {
        self.notifications.iter()
    }

    pub fn len(&self) -> usize {
        self.notifications.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }

    pub fn unread_count(&self) -> u32 {
        self.unread_count
    }
}
