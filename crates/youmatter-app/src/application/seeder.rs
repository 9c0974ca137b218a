use chrono::NaiveDate;
use serde::Deserialize;
use tracing::info;

use youmatter_domain::achievement::AchievementDefinition;
use youmatter_domain::activity::Activity;
use youmatter_domain::challenge::ChallengeDefinition;
use youmatter_domain::insurance::InsuranceActivity;
use youmatter_domain::journey::JourneyDefinition;
use youmatter_domain::notification::Notification;
use youmatter_domain::personalization::{MotivationProfile, Recommendation};
use youmatter_domain::progress::UserProgress;
use youmatter_domain::shared::{ChallengeId, DomainError, UserId};
use youmatter_domain::social::{Friend, LeaderboardEntry};
use youmatter_domain::ProgressionLedger;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SeedUser {
    id: String,
    name: String,
    email: String,
    avatar: Option<String>,
    join_date: NaiveDate,
    experience: u64,
    total_points: u64,
    streak: u32,
    longest_streak: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DemoProfile {
    user: SeedUser,
    achievements: Vec<AchievementDefinition>,
    challenges: Vec<ChallengeDefinition>,
    #[serde(default)]
    joined_challenges: Vec<String>,
    /// Newest first
    #[serde(default)]
    notifications: Vec<Notification>,
    /// Newest first
    #[serde(default)]
    activities: Vec<Activity>,
    #[serde(default)]
    insurance_activities: Vec<InsuranceActivity>,
    #[serde(default)]
    journeys: Vec<JourneyDefinition>,
    #[serde(default)]
    friends: Vec<Friend>,
    #[serde(default)]
    leaderboard: Vec<LeaderboardEntry>,
    motivation_profile: Option<MotivationProfile>,
    #[serde(default)]
    recommendations: Vec<Recommendation>,
}

fn demo_profile() -> Result<DemoProfile, DomainError> {
    const RAW_PROFILE: &str = include_str!("../../../../config/seed/demo_profile.json");
    serde_json::from_str(RAW_PROFILE)
        .map_err(|e| DomainError::Deserialization(format!("Failed to parse demo profile: {e}")))
}

/// Build the demo ledger from the bundled profile.
///
/// Seeding is history, not activity: events recorded while loading are
/// discarded so no reward rule fires for them.
pub fn seed_demo_ledger() -> Result<ProgressionLedger, DomainError> {
    let profile = demo_profile()?;
    let ledger = build_ledger(profile)?;
    info!(
        "Seeded demo ledger for {} ({} achievements, {} challenges)",
        ledger.user().name(),
        ledger.achievements().len(),
        ledger.challenges().len()
    );
    Ok(ledger)
}

fn build_ledger(profile: DemoProfile) -> Result<ProgressionLedger, DomainError> {
    let seed = profile.user;
    let user = UserProgress::restore(
        UserId::from_string(&seed.id),
        seed.name,
        seed.email,
        seed.avatar,
        seed.join_date,
        seed.experience,
        seed.total_points,
        seed.streak,
        seed.longest_streak,
    );
    let mut ledger = ProgressionLedger::new(user);

    for achievement in profile.achievements {
        ledger.add_achievement(achievement)?;
    }
    for challenge in profile.challenges {
        ledger.add_challenge(challenge)?;
    }
    for id in &profile.joined_challenges {
        ledger.restore_joined_challenge(&ChallengeId::from_string(id))?;
    }

    // the feed prepends, so replay oldest first
    for notification in profile.notifications.into_iter().rev() {
        ledger.add_notification(notification)?;
    }
    ledger.restore_activities(profile.activities);
    ledger.restore_insurance_activities(profile.insurance_activities);

    for journey in profile.journeys {
        ledger.add_journey(journey)?;
    }
    for friend in profile.friends {
        ledger.add_friend(friend)?;
    }
    ledger.update_leaderboard(profile.leaderboard);

    if let Some(motivation) = profile.motivation_profile {
        ledger.set_motivation_profile(motivation);
    }
    ledger.set_recommendations(profile.recommendations)?;

    ledger.take_events();
    Ok(ledger)
}
