#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::achievement::{AchievementDefinition, Rarity};
    use crate::activity::{Activity, ActivityCategory};
    use crate::challenge::{ChallengeDefinition, ChallengeKind, Requirement};
    use crate::events::progression_events::{
        AchievementUnlocked, ActivityLogged, ChallengeJoined, ExperienceGranted, RewardGranted,
    };
    use crate::insurance::{InsuranceActivity, InsuranceActivityKind};
    use crate::notification::{Notification, NotificationKind};
    use crate::progress::UserProgress;
    use crate::reward::{Reward, RewardType};
    use crate::shared::{
        AchievementId, Category, ChallengeId, DomainError, InsuranceActivityId, RequirementId,
    };
    use proptest::prelude::*;

    fn ledger() -> ProgressionLedger {
        ProgressionLedger::new(
            UserProgress::new("Alex Johnson".to_string(), "alex@example.com".to_string()).unwrap(),
        )
    }

    fn achievement(id: &str, progress: u32, max_progress: u32) -> AchievementDefinition {
        AchievementDefinition {
            id: AchievementId::from_string(id),
            title: format!("Achievement {id}"),
            description: String::new(),
            icon: "🏆".to_string(),
            points: 100,
            category: Category::Wellness,
            rarity: Rarity::Rare,
            progress,
            max_progress,
            unlocked_at: None,
        }
    }

    fn requirement(id: &str, current: u32, target: u32) -> Requirement {
        Requirement {
            id: RequirementId::from_string(id),
            description: format!("requirement {id}"),
            target,
            current,
            unit: "times".to_string(),
        }
    }

    fn challenge(id: &str, requirements: Vec<Requirement>) -> ChallengeDefinition {
        ChallengeDefinition {
            id: ChallengeId::from_string(id),
            title: format!("Challenge {id}"),
            description: String::new(),
            kind: ChallengeKind::Weekly,
            category: Category::Health,
            points: 200,
            start_date: None,
            end_date: None,
            participants: 850,
            is_active: true,
            progress: 0,
            max_progress: 5,
            requirements,
        }
    }

    fn insurance(points: u64) -> InsuranceActivity {
        InsuranceActivity {
            id: InsuranceActivityId::new(),
            kind: InsuranceActivityKind::WellnessCheck,
            title: "Annual wellness check".to_string(),
            description: String::new(),
            points,
            completed_at: None,
            policy_id: None,
        }
    }

    #[test]
    fn test_grant_experience_levels_up() {
        let mut ledger = ledger();
        ledger.grant_experience(500).unwrap();

        assert_eq!(ledger.user().level(), 2);
        assert_eq!(ledger.user().total_points(), 500);

        let events = ledger.take_events();
        let granted = events[0]
            .as_any()
            .downcast_ref::<ExperienceGranted>()
            .unwrap();
        assert!(granted.leveled_up);
    }

    #[test]
    fn test_negative_experience_rejected() {
        let mut ledger = ledger();
        let result = ledger.grant_experience(-5);

        assert!(matches!(result, Err(DomainError::InvalidArgument(_))));
        assert_eq!(ledger.user().experience(), 0);
        assert!(ledger.take_events().is_empty());
    }

    #[test]
    fn test_zero_experience_is_tolerated() {
        let mut ledger = ledger();
        ledger.grant_experience(0).unwrap();
        assert_eq!(ledger.user().level(), 1);
    }

    #[test]
    fn test_achievement_unlocks_once() {
        let mut ledger = ledger();
        ledger.add_achievement(achievement("5", 45, 50)).unwrap();
        let id = AchievementId::from_string("5");

        ledger.update_achievement_progress(&id, 50).unwrap();
        let unlocked_at = ledger.achievement(&id).unwrap().unlocked_at();
        ledger.update_achievement_progress(&id, 50).unwrap();

        let achievement = ledger.achievement(&id).unwrap();
        assert_eq!(achievement.progress(), 50);
        assert!(unlocked_at.is_some());
        assert_eq!(achievement.unlocked_at(), unlocked_at);
        assert_eq!(ledger.unlocked_achievements(), &[id]);

        let unlocks = ledger
            .take_events()
            .iter()
            .filter(|e| e.as_any().is::<AchievementUnlocked>())
            .count();
        assert_eq!(unlocks, 1);
    }

    #[test]
    fn test_achievement_progress_edge_cases() {
        let mut ledger = ledger();
        ledger.add_achievement(achievement("4", 3, 5)).unwrap();
        let id = AchievementId::from_string("4");

        ledger
            .update_achievement_progress(&AchievementId::from_string("missing"), 10)
            .unwrap();
        assert!(ledger.update_achievement_progress(&id, -1).is_err());

        ledger.update_achievement_progress(&id, 1).unwrap();
        assert_eq!(ledger.achievement(&id).unwrap().progress(), 3);
        assert!(ledger.take_events().is_empty());
    }

    #[test]
    fn test_explicit_unlock_keeps_invariant() {
        let mut ledger = ledger();
        ledger.add_achievement(achievement("6", 2, 5)).unwrap();
        let id = AchievementId::from_string("6");

        ledger.unlock_achievement(&id);
        ledger.unlock_achievement(&id);

        assert_eq!(ledger.achievement(&id).unwrap().progress(), 5);
        assert_eq!(ledger.unlocked_achievements().len(), 1);
        assert_eq!(ledger.take_events().len(), 1);
    }

    #[test]
    fn test_seeded_complete_achievement_counts_as_unlocked() {
        let mut ledger = ledger();
        ledger.add_achievement(achievement("1", 1, 1)).unwrap();

        assert_eq!(ledger.summary().unlocked_achievements, 1);
        assert!(ledger.add_achievement(achievement("1", 0, 1)).is_err());
    }

    #[test]
    fn test_join_challenge_is_idempotent() {
        let mut ledger = ledger();
        ledger.add_challenge(challenge("2", vec![])).unwrap();
        let id = ChallengeId::from_string("2");

        assert!(ledger.join_challenge(&id));
        assert!(!ledger.join_challenge(&id));

        assert_eq!(ledger.challenge(&id).unwrap().participants(), 851);
        assert!(ledger.is_joined(&id));
        let joins = ledger
            .take_events()
            .iter()
            .filter(|e| e.as_any().is::<ChallengeJoined>())
            .count();
        assert_eq!(joins, 1);
    }

    #[test]
    fn test_join_unknown_or_completed_challenge_is_noop() {
        let mut ledger = ledger();
        ledger.add_challenge(challenge("2", vec![])).unwrap();
        let id = ChallengeId::from_string("2");
        ledger.complete_challenge(&id);

        assert!(!ledger.join_challenge(&ChallengeId::from_string("404")));
        assert!(!ledger.join_challenge(&id));
        assert_eq!(ledger.challenge(&id).unwrap().participants(), 850);
        assert_eq!(ledger.summary().joined_challenges, 0);
    }

    #[test]
    fn test_restored_join_does_not_count_participant() {
        let mut ledger = ledger();
        ledger.add_challenge(challenge("1", vec![])).unwrap();
        let id = ChallengeId::from_string("1");

        ledger.restore_joined_challenge(&id).unwrap();
        assert!(!ledger.join_challenge(&id));
        assert_eq!(ledger.challenge(&id).unwrap().participants(), 850);
        assert!(ledger
            .restore_joined_challenge(&ChallengeId::from_string("x"))
            .is_err());
    }

    #[test]
    fn test_complete_requirement_recomputes_progress() {
        let mut ledger = ledger();
        ledger
            .add_challenge(challenge(
                "1",
                vec![requirement("1", 6, 8), requirement("2", 1, 1)],
            ))
            .unwrap();
        let id = ChallengeId::from_string("1");

        assert!(ledger.complete_requirement(&id, &RequirementId::from_string("1")));

        let challenge = ledger.challenge(&id).unwrap();
        assert_eq!(challenge.requirements()[0].current, 7);
        assert_eq!(challenge.progress(), 4);
    }

    #[test]
    fn test_completed_challenge_ignores_requirements() {
        let mut ledger = ledger();
        ledger
            .add_challenge(challenge("1", vec![requirement("1", 0, 3)]))
            .unwrap();
        let id = ChallengeId::from_string("1");

        ledger.complete_challenge(&id);
        ledger.complete_challenge(&id);

        assert!(!ledger.complete_requirement(&id, &RequirementId::from_string("1")));
        ledger.update_challenge_progress(&id, 1).unwrap();
        let summary = ledger.summary();
        assert_eq!(summary.completed_challenges, 1);
        assert_eq!(summary.active_challenges, 0);
        assert_eq!(ledger.challenge(&id).unwrap().progress(), 5);
    }

    #[test]
    fn test_rewards_read_back_most_recent_first() {
        let mut ledger = ledger();
        for points in [10, 20, 30] {
            ledger.grant_reward(Reward::new("Reward", "", points, RewardType::Micro));
        }

        let points: Vec<u64> = ledger.rewards().rewards().map(|r| r.points).collect();
        assert_eq!(points, vec![30, 20, 10]);
        assert_eq!(ledger.rewards().total_reward_points(), 60);
        assert!(ledger.rewards().rewards().all(|r| r.granted_at.is_some()));

        let totals: Vec<u64> = ledger
            .take_events()
            .iter()
            .filter_map(|e| e.as_any().downcast_ref::<RewardGranted>())
            .map(|e| e.total_reward_points)
            .collect();
        assert_eq!(totals, vec![10, 30, 60]);
    }

    #[test]
    fn test_clear_rewards_zeroes_total_but_keeps_points() {
        let mut ledger = ledger();
        ledger.grant_reward(Reward::new("Streak", "", 50, RewardType::Streak));
        ledger.clear_rewards();

        assert!(ledger.rewards().is_empty());
        assert_eq!(ledger.summary().total_reward_points, 0);
        assert_eq!(ledger.user().total_points(), 50);
    }

    #[test]
    fn test_total_points_is_running_sum() {
        let mut ledger = ledger();
        ledger.grant_experience(120).unwrap();
        ledger.grant_reward(Reward::new("Micro", "", 10, RewardType::Micro));
        ledger.log_insurance_activity(insurance(70));
        ledger.clear_insurance_activities();

        assert_eq!(ledger.user().total_points(), 200);
        assert_eq!(ledger.user().experience(), 120);
        assert_eq!(ledger.summary().points_from_insurance, 0);
    }

    #[test]
    fn test_notification_counter() {
        let mut ledger = ledger();
        let first = Notification::new(NotificationKind::Reward, "Points Earned!", "+25");
        let first_id = first.id.clone();
        ledger.add_notification(first).unwrap();
        ledger
            .add_notification(Notification::new(NotificationKind::Friend, "Hi", "Sarah"))
            .unwrap();

        assert!(ledger.mark_notification_as_read(&first_id));
        assert_eq!(ledger.summary().unread_notifications, 1);
        assert_eq!(ledger.mark_all_notifications_as_read(), 1);
        assert!(ledger.remove_notification(&first_id).is_some());
        assert_eq!(ledger.notifications().unread_count(), 0);
    }

    #[test]
    fn test_log_activity_records_event_in_order() {
        let mut ledger = ledger();
        ledger.grant_experience(25).unwrap();
        ledger.log_activity(Activity::new("Morning Yoga", ActivityCategory::Exercise, 25));

        let events = ledger.take_events();
        assert_eq!(events.len(), 2);
        assert!(events[0].as_any().is::<ExperienceGranted>());
        let logged = events[1].as_any().downcast_ref::<ActivityLogged>().unwrap();
        assert_eq!(logged.total_activities, 1);
        assert!(ledger.take_events().is_empty());
        assert!(ledger.activities().activities().all(|a| a.completed_at.is_some()));
    }

    #[test]
    fn test_mint_token_remembers_hash() {
        let mut ledger = ledger();
        let token = ledger.mint_token("Milestone Token".to_string(), String::new(), 500);

        assert_eq!(ledger.tokens().last_tx_hash(), Some(token.tx_hash.as_str()));
        assert_eq!(ledger.summary().token_count, 1);
        ledger.clear_tokens();
        assert_eq!(ledger.summary().token_count, 0);
    }

    #[test]
    fn test_reward_points_by_type() {
        let mut ledger = ledger();
        ledger.grant_reward(Reward::new("a", "", 10, RewardType::Micro));
        ledger.grant_reward(Reward::new("b", "", 15, RewardType::Micro));
        ledger.grant_reward(Reward::new("c", "", 25, RewardType::Wellness));

        let totals = ledger.reward_points_by_type();
        assert_eq!(totals[&RewardType::Micro], 25);
        assert_eq!(totals[&RewardType::Wellness], 25);
    }

    proptest! {
        #[test]
        fn prop_level_tracks_experience(amounts in prop::collection::vec(0i64..2_000, 1..40)) {
            let mut ledger = ledger();
            for amount in amounts {
                ledger.grant_experience(amount).unwrap();
                let user = ledger.user();
                prop_assert_eq!(user.level() as u64, user.experience() / 500 + 1);
            }
        }

        #[test]
        fn prop_unlock_happens_at_most_once(steps in prop::collection::vec(0i64..60, 1..30)) {
            let mut ledger = ledger();
            ledger.add_achievement(achievement("5", 0, 50)).unwrap();
            let id = AchievementId::from_string("5");

            let mut unlocked_at = None;
            for step in steps {
                ledger.update_achievement_progress(&id, step).unwrap();
                let achievement = ledger.achievement(&id).unwrap();
                if let Some(previous) = unlocked_at {
                    prop_assert_eq!(achievement.unlocked_at(), Some(previous));
                }
                if achievement.is_unlocked() {
                    prop_assert!(achievement.progress() >= achievement.max_progress());
                    unlocked_at = achievement.unlocked_at();
                }
            }
            prop_assert!(ledger.unlocked_achievements().len() <= 1);
        }

        #[test]
        fn prop_requirements_stay_within_target(picks in prop::collection::vec(0usize..3, 1..20)) {
            let mut ledger = ledger();
            ledger.add_challenge(challenge(
                "1",
                vec![requirement("a", 0, 2), requirement("b", 0, 3), requirement("c", 0, 1)],
            )).unwrap();
            let id = ChallengeId::from_string("1");
            let names = ["a", "b", "c"];

            let mut last_progress = 0;
            for pick in picks {
                ledger.complete_requirement(&id, &RequirementId::from_string(names[pick]));
                let challenge = ledger.challenge(&id).unwrap();
                prop_assert!(challenge.requirements().iter().all(|r| r.current <= r.target));
                prop_assert!(challenge.progress() >= last_progress);
                prop_assert!(challenge.progress() <= challenge.max_progress());
                last_progress = challenge.progress();
            }
        }
    }
}
