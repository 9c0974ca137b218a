use serde::{Deserialize, Serialize};

use crate::shared::{DomainError, JourneyId, StageId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JourneyCategory {
    Health,
    Wellness,
    Insurance,
    Financial,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JourneyStage {
    pub id: StageId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub completed: bool,
    pub points: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JourneyDefinition {
    #[serde(default)]
    pub id: JourneyId,
    pub title: String,
    pub category: JourneyCategory,
    #[serde(default)]
    pub description: String,
    pub stages: Vec<JourneyStage>,
    #[serde(default)]
    pub current_stage_index: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageCompletion {
    pub newly_completed: bool,
    pub current_stage_index: usize,
}

/// A guided sequence of habit-building stages
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Journey {
    id: JourneyId,
    title: String,
    category: JourneyCategory,
    description: String,
    stages: Vec<JourneyStage>,
    current_stage_index: usize,
}

impl Journey {
    pub fn from_definition(def: JourneyDefinition) -> Result<Self, DomainError> {
        if def.stages.is_empty() {
            return Err(DomainError::InvalidArgument(format!(
                "Journey {} must have at least one stage",
                def.id
            )));
        }
        let last = def.stages.len() - 1;

        Ok(Self {
            id: def.id,
            title: def.title,
            category: def.category,
            description: def.description,
            current_stage_index: def.current_stage_index.min(last),
            stages: def.stages,
        })
    }

    pub fn id(&self) -> &JourneyId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn category(&self) -> JourneyCategory {
        self.category
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn stages(&self) -> &[JourneyStage] {
        &self.stages
    }

    pub fn current_stage_index(&self) -> usize {
        self.current_stage_index
    }

    pub fn is_finished(&self) -> bool {
        self.stages.iter().all(|s| s.completed)
    }

    /// Mark a stage done and advance the cursor past it, never beyond the last stage.
    /// Completing an earlier stage does not move the cursor back.
    pub fn complete_stage(&mut self, stage_id: &StageId) -> Option<StageCompletion> {
        let index = self.stages.iter().position(|s| &s.id == stage_id)?;
        let newly_completed = !self.stages[index].completed;
        self.stages[index].completed = true;

        if index >= self.current_stage_index {
            self.current_stage_index = (index + 1).min(self.stages.len() - 1);
        }

        Some(StageCompletion {
            newly_completed,
            current_stage_index: self.current_stage_index,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sleep_reset() -> Journey {
        let stage = |id: &str, points| JourneyStage {
            id: StageId::from_string(id),
            title: id.to_string(),
            description: String::new(),
            completed: false,
            points,
        };
        Journey::from_definition(JourneyDefinition {
            id: JourneyId::from_string("journey-sleep-reset"),
            title: "7-Day Sleep Reset".to_string(),
            category: JourneyCategory::Wellness,
            description: String::new(),
            stages: vec![stage("js-1", 15), stage("js-2", 20), stage("js-3", 25)],
            current_stage_index: 0,
        })
        .unwrap()
    }

    #[test]
    fn test_complete_stage_advances_cursor() {
        let mut journey = sleep_reset();
        let done = journey
            .complete_stage(&StageId::from_string("js-1"))
            .unwrap();

        assert!(done.newly_completed);
        assert_eq!(done.current_stage_index, 1);
    }

    #[test]
    fn test_cursor_stops_at_last_stage() {
        let mut journey = sleep_reset();
        journey.complete_stage(&StageId::from_string("js-3"));
        assert_eq!(journey.current_stage_index(), 2);
    }

    #[test]
    fn test_earlier_stage_does_not_rewind() {
        let mut journey = sleep_reset();
        journey.complete_stage(&StageId::from_string("js-2"));
        let done = journey
            .complete_stage(&StageId::from_string("js-1"))
            .unwrap();
        assert_eq!(done.current_stage_index, 2);
    }

    #[test]
    fn test_repeat_completion_is_not_new() {
        let mut journey = sleep_reset();
        journey.complete_stage(&StageId::from_string("js-1"));
        let again = journey
            .complete_stage(&StageId::from_string("js-1"))
            .unwrap();
        assert!(!again.newly_completed);
        assert!(journey.complete_stage(&StageId::from_string("nope")).is_none());
    }

    #[test]
    fn test_empty_journey_rejected() {
        let result = Journey::from_definition(JourneyDefinition {
            id: JourneyId::new(),
            title: "Empty".to_string(),
            category: JourneyCategory::Financial,
            description: String::new(),
            stages: vec![],
            current_stage_index: 0,
        });
        assert!(result.is_err());
    }
}
