#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::shared::{Category, ChallengeId, RequirementId};

    fn requirement(id: &str, current: u32, target: u32) -> Requirement {
        Requirement {
            id: RequirementId::from_string(id),
            description: format!("requirement {id}"),
            target,
            current,
            unit: "session".to_string(),
        }
    }

    fn challenge(requirements: Vec<Requirement>, max_progress: u32) -> Challenge {
        Challenge::from_definition(ChallengeDefinition {
            id: ChallengeId::from_string("1"),
            title: "Daily Wellness Check".to_string(),
            description: "Complete your daily wellness routine".to_string(),
            kind: ChallengeKind::Daily,
            category: Category::Wellness,
            points: 50,
            start_date: None,
            end_date: None,
            participants: 1250,
            is_active: true,
            progress: 0,
            max_progress,
            requirements,
        })
        .unwrap()
    }

    #[test]
    fn test_weighted_progress_uses_integer_floor() {
        let mut challenge = challenge(vec![requirement("1", 6, 8), requirement("2", 1, 1)], 5);

        let result = challenge
            .complete_requirement(&RequirementId::from_string("1"))
            .unwrap();

        // floor((7 + 1) / (8 + 1) * 5) = floor(4.44) = 4
        assert_eq!(result.current, 7);
        assert_eq!(result.challenge_progress, 4);
        assert_eq!(challenge.progress(), 4);
    }

    #[test]
    fn test_requirement_clamped_to_target() {
        let mut challenge = challenge(vec![requirement("1", 1, 1), requirement("2", 0, 1)], 3);

        assert!(challenge
            .complete_requirement(&RequirementId::from_string("1"))
            .is_none());
        assert_eq!(challenge.requirements()[0].current, 1);
    }

    #[test]
    fn test_unknown_requirement_is_noop() {
        let mut challenge = challenge(vec![requirement("1", 0, 2)], 3);
        assert!(challenge
            .complete_requirement(&RequirementId::from_string("missing"))
            .is_none());
        assert_eq!(challenge.progress(), 0);
    }

    #[test]
    fn test_completion_is_terminal() {
        let mut challenge = challenge(vec![requirement("1", 0, 2)], 3);

        assert!(challenge.complete());
        assert!(!challenge.is_active());
        assert_eq!(challenge.progress(), 3);

        assert!(!challenge.complete());
        assert!(challenge
            .complete_requirement(&RequirementId::from_string("1"))
            .is_none());
        assert_eq!(challenge.requirements()[0].current, 0);
    }

    #[test]
    fn test_manual_progress_is_monotonic_and_clamped() {
        let mut challenge = challenge(vec![], 5);

        assert!(challenge.update_progress(3));
        assert!(!challenge.update_progress(1));
        assert_eq!(challenge.progress(), 3);

        challenge.update_progress(99);
        assert_eq!(challenge.progress(), 5);
    }

    #[test]
    fn test_end_date_defaults_from_kind() {
        let challenge = challenge(vec![], 1);
        assert_eq!(
            challenge.end_date() - challenge.start_date(),
            chrono::Duration::days(1)
        );
    }

    #[test]
    fn test_duplicate_requirement_rejected() {
        let result = Challenge::from_definition(ChallengeDefinition {
            id: ChallengeId::new(),
            title: "Twice".to_string(),
            description: String::new(),
            kind: ChallengeKind::Custom,
            category: Category::Health,
            points: 10,
            start_date: None,
            end_date: None,
            participants: 0,
            is_active: true,
            progress: 0,
            max_progress: 1,
            requirements: vec![requirement("r1", 0, 1), requirement("r1", 0, 1)],
        });
        assert!(result.is_err());
    }
}
