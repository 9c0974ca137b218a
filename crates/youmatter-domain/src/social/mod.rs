use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::{DomainError, FriendId, UserId};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Friend {
    pub id: FriendId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub level: u32,
    #[serde(default)]
    pub is_online: bool,
    pub last_active: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub user_id: UserId,
    pub name: String,
    pub points: u64,
    pub level: u32,
}

/// Friends list and the externally supplied leaderboard
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialCircle {
    friends: Vec<Friend>,
    leaderboard: Vec<LeaderboardEntry>,
}

impl SocialCircle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_friend(&mut self, friend: Friend) -> Result<(), DomainError> {
        if self.friends.iter().any(|f| f.id == friend.id) {
            return Err(DomainError::InvalidArgument(format!(
                "Friend {} already added",
                friend.id
            )));
        }
        self.friends.push(friend);
        Ok(())
    }

    pub fn remove_friend(&mut self, id: &FriendId) -> bool {
        let before = self.friends.len();
        self.friends.retain(|f| &f.id != id);
        self.friends.len() != before
    }

    /// Replace the leaderboard, ordered by rank
    pub fn update_leaderboard(&mut self, mut entries: Vec<LeaderboardEntry>) {
        entries.sort_by_key(|e| e.rank);
        self.leaderboard = entries;
    }

    pub fn friends(&self) -> &[Friend] {
        &self.friends
    }

    pub fn online_friends(&self) -> impl Iterator<Item = &Friend> {
        self.friends.iter().filter(|f| f.is_online)
    }

    pub fn leaderboard(&self) -> &[LeaderboardEntry] {
        &self.leaderboard
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn friend(id: &str, online: bool) -> Friend {
        Friend {
            id: FriendId::from_string(id),
            name: format!("Friend {id}"),
            avatar: None,
            level: 4,
            is_online: online,
            last_active: Utc::now(),
        }
    }

    fn entry(rank: u32, name: &str) -> LeaderboardEntry {
        LeaderboardEntry {
            rank,
            user_id: UserId::new(),
            name: name.to_string(),
            points: 1000 * rank as u64,
            level: rank,
        }
    }

    #[test]
    fn test_friends_add_and_remove() {
        let mut social = SocialCircle::new();
        social.add_friend(friend("2", true)).unwrap();
        social.add_friend(friend("3", false)).unwrap();
        assert!(social.add_friend(friend("2", true)).is_err());

        assert_eq!(social.online_friends().count(), 1);
        assert!(social.remove_friend(&FriendId::from_string("3")));
        assert!(!social.remove_friend(&FriendId::from_string("3")));
        assert_eq!(social.friends().len(), 1);
    }

    #[test]
    fn test_leaderboard_sorted_by_rank() {
        let mut social = SocialCircle::new();
        social.update_leaderboard(vec![entry(3, "Mike"), entry(1, "Alex"), entry(2, "Sarah")]);

        let names: Vec<&str> = social.leaderboard().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Alex", "Sarah", "Mike"]);
    }
}
