use chrono::Utc;
use serde::Serialize;
use std::collections::VecDeque;

use super::value_objects::Activity;
use crate::shared::ActivityId;

pub const RECENT_ACTIVITY_LIMIT: usize = 10;

/// Full activity history plus a capped recent view, both most-recent-first
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityLog {
    activities: VecDeque<Activity>,
    recent: VecDeque<Activity>,
}

impl ActivityLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild history without touching the recent view
    pub fn restore(activities: Vec<Activity>) -> Self {
        Self {
            activities: activities.into(),
            recent: VecDeque::new(),
        }
    }

    /// Append a freshly completed activity. `completed_at` is stamped with now.
    pub fn log(&mut self, mut activity: Activity) -> &Activity {
        activity.completed_at = Some(Utc::now());
        self.recent.push_front(activity.clone());
        self.recent.truncate(RECENT_ACTIVITY_LIMIT);
        self.activities.push_front(activity);
        &self.activities[0]
    }

    /// Stamp `completed_at` on a pending activity. Returns false if unknown or already completed.
    pub fn complete(&mut self, id: &ActivityId) -> bool {
        let now = Utc::now();
        let Some(activity) = self.activities.iter_mut().find(|a| &a.id == id) else {
            return false;
        };
        if activity.completed_at.is_some() {
            return false;
        }
        activity.completed_at = Some(now);

        if let Some(recent) = self.recent.iter_mut().find(|a| &a.id == id) {
            recent.completed_at = Some(now);
        }
        true
    }

    pub fn activities(&self) -> impl Iterator<Item = &Activity> {
        self.activities.iter()
    }

    pub fn recent(&self) -> impl Iterator<Item = &Activity> {
        self.recent.iter()
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activity::ActivityCategory;

    #[test]
    fn test_log_stamps_and_prepends() {
        let mut log = ActivityLog::new();
        log.log(Activity::new("Morning Yoga", ActivityCategory::Exercise, 25));
        log.log(Activity::new("Meditation", ActivityCategory::Mental, 20));

        let first = log.activities().next().unwrap();
        assert_eq!(first.title, "Meditation");
        assert!(first.completed_at.is_some());
        assert_eq!(log.recent().count(), 2);
    }

    #[test]
    fn test_recent_view_is_capped() {
        let mut log = ActivityLog::new();
        for i in 0..15 {
            log.log(Activity::new(format!("Walk {i}"), ActivityCategory::Exercise, 10));
        }

        assert_eq!(log.len(), 15);
        assert_eq!(log.recent().count(), RECENT_ACTIVITY_LIMIT);
        assert_eq!(log.recent().next().unwrap().title, "Walk 14");
    }

    #[test]
    fn test_complete_only_pending() {
        let pending = Activity::new("Policy Review", ActivityCategory::Insurance, 50);
        let id = pending.id.clone();
        let mut log = ActivityLog::restore(vec![pending]);

        assert!(log.complete(&id));
        assert!(!log.complete(&id));
        assert!(!log.complete(&ActivityId::from_string("missing")));
    }
}
