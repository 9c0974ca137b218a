#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::shared::UserId;
    use chrono::NaiveDate;
    use proptest::prelude::*;

    fn fresh_user() -> UserProgress {
        UserProgress::new("Alex Johnson".to_string(), "alex@example.com".to_string()).unwrap()
    }

    #[test]
    fn test_new_user_starts_at_level_one() {
        let user = fresh_user();
        assert_eq!(user.experience(), 0);
        assert_eq!(user.total_points(), 0);
        assert_eq!(user.level(), 1);
        assert_eq!(user.streak(), 0);
    }

    #[test]
    fn test_empty_name_rejected() {
        let result = UserProgress::new("   ".to_string(), "x@example.com".to_string());
        assert!(result.is_err());
    }

    #[test]
    fn test_grant_500_reaches_level_two() {
        let mut user = fresh_user();
        let change = user.grant_experience(500);

        assert_eq!(user.level(), 2);
        assert_eq!(user.total_points(), 500);
        assert!(change.leveled_up());
        assert_eq!(change.previous_level, 1);
    }

    #[test]
    fn test_grant_zero_is_tolerated() {
        let mut user = fresh_user();
        let change = user.grant_experience(0);

        assert!(!change.leveled_up());
        assert_eq!(user.experience(), 0);
        assert_eq!(user.level(), 1);
    }

    #[test]
    fn test_credit_points_does_not_touch_experience() {
        let mut user = fresh_user();
        user.credit_points(60);

        assert_eq!(user.total_points(), 60);
        assert_eq!(user.experience(), 0);
        assert_eq!(user.level(), 1);
    }

    #[test]
    fn test_restore_derives_level_from_experience() {
        let user = UserProgress::restore(
            UserId::from_string("1"),
            "Alex Johnson".to_string(),
            "alex@example.com".to_string(),
            None,
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            2250,
            2500,
            7,
            12,
        );

        assert_eq!(user.level(), 5);
        assert_eq!(user.longest_streak(), 12);
        assert_eq!(user.experience_to_next_level(), 250);
    }

    #[test]
    fn test_update_streak_tracks_longest() {
        let mut user = fresh_user();
        assert_eq!(user.update_streak(9), 0);
        assert_eq!(user.update_streak(2), 9);

        assert_eq!(user.streak(), 2);
        assert_eq!(user.longest_streak(), 9);
    }

    proptest! {
        #[test]
        fn prop_level_tracks_experience(amounts in proptest::collection::vec(0u64..5_000, 0..50)) {
            let mut user = fresh_user();
            let mut expected_points = 0u64;
            let mut last_level = user.level();

            for amount in amounts {
                user.grant_experience(amount);
                expected_points += amount;

                prop_assert_eq!(user.level() as u64, user.experience() / EXPERIENCE_PER_LEVEL + 1);
                prop_assert!(user.level() >= last_level);
                last_level = user.level();
            }

            prop_assert_eq!(user.total_points(), expected_points);
        }
    }
}
