use serde::{Deserialize, Serialize};

use crate::application::commands::command_handler::Command;
use crate::application::dtos::{ActivityDto, InsuranceActivityDto, NotificationDto, TokenDto};
use youmatter_domain::activity::ActivityCategory;
use youmatter_domain::insurance::InsuranceActivityKind;
use youmatter_domain::journey::JourneyDefinition;
use youmatter_domain::notification::NotificationKind;
use youmatter_domain::personalization::{MotivationProfile, Recommendation};
use youmatter_domain::social::{Friend, LeaderboardEntry};

// ============================================================
// Notifications
// ============================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddNotificationCommand {
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub action_url: Option<String>,
}

impl Command for AddNotificationCommand {}

pub type AddNotificationResult = NotificationDto;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkNotificationReadCommand {
    pub notification_id: String,
}

impl Command for MarkNotificationReadCommand {}

/// Whether an unread notification was marked
pub type MarkNotificationReadResult = bool;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkAllNotificationsReadCommand;

impl Command for MarkAllNotificationsReadCommand {}

pub type MarkAllNotificationsReadResult = usize;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoveNotificationCommand {
    pub notification_id: String,
}

impl Command for RemoveNotificationCommand {}

pub type RemoveNotificationResult = bool;

// ============================================================
// Activities
// ============================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogActivityCommand {
    pub title: String,
    pub description: String,
    pub category: ActivityCategory,
    pub points: i64,
    pub duration: Option<u32>,
}

impl Command for LogActivityCommand {}

pub type LogActivityResult = ActivityDto;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompleteActivityCommand {
    pub activity_id: String,
}

impl Command for CompleteActivityCommand {}

pub type CompleteActivityResult = bool;

// ============================================================
// Insurance engagement
// ============================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogInsuranceActivityCommand {
    pub kind: InsuranceActivityKind,
    pub title: String,
    pub description: String,
    pub points: i64,
    pub policy_id: Option<String>,
}

impl Command for LogInsuranceActivityCommand {}

pub type LogInsuranceActivityResult = InsuranceActivityDto;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClearInsuranceActivitiesCommand;

impl Command for ClearInsuranceActivitiesCommand {}

pub type ClearInsuranceActivitiesResult = usize;

// ============================================================
// Journeys
// ============================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddJourneyCommand {
    pub definition: JourneyDefinition,
}

impl Command for AddJourneyCommand {}

pub type AddJourneyResult = ();

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompleteStageCommand {
    pub journey_id: String,
    pub stage_id: String,
}

impl Command for CompleteStageCommand {}

/// Whether the stage was completed for the first time
pub type CompleteStageResult = bool;

// ============================================================
// Social
// ============================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddFriendCommand {
    pub friend: Friend,
}

impl Command for AddFriendCommand {}

pub type AddFriendResult = ();

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoveFriendCommand {
    pub friend_id: String,
}

impl Command for RemoveFriendCommand {}

pub type RemoveFriendResult = bool;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateLeaderboardCommand {
    pub entries: Vec<LeaderboardEntry>,
}

impl Command for UpdateLeaderboardCommand {}

pub type UpdateLeaderboardResult = ();

// ============================================================
// Personalization
// ============================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetMotivationProfileCommand {
    pub profile: MotivationProfile,
}

impl Command for SetMotivationProfileCommand {}

pub type SetMotivationProfileResult = ();

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetRecommendationsCommand {
    pub recommendations: Vec<Recommendation>,
}

impl Command for SetRecommendationsCommand {}

pub type SetRecommendationsResult = ();

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddRecommendationCommand {
    pub recommendation: Recommendation,
}

impl Command for AddRecommendationCommand {}

pub type AddRecommendationResult = ();

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClearRecommendationsCommand;

impl Command for ClearRecommendationsCommand {}

pub type ClearRecommendationsResult = ();

// ============================================================
// Reward tokens
// ============================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MintTokenCommand {
    pub title: String,
    pub description: String,
    pub points: i64,
}

impl Command for MintTokenCommand {}

pub type MintTokenResult = TokenDto;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClearTokensCommand;

impl Command for ClearTokensCommand {}

pub type ClearTokensResult = ();
