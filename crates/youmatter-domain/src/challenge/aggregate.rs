use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashSet;

use super::value_objects::{ChallengeDefinition, ChallengeKind, Requirement, RequirementProgress};
use crate::shared::{Category, ChallengeId, DomainError, RequirementId};

/// Challenge aggregate root.
///
/// An inactive challenge is completed and frozen: no requirement or progress
/// mutation has an effect on it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Challenge {
    id: ChallengeId,
    title: String,
    description: String,
    kind: ChallengeKind,
    category: Category,
    points: u32,
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
    participants: u32,
    is_active: bool,
    progress: u32,
    max_progress: u32,
    requirements: Vec<Requirement>,
}

impl Challenge {
    pub fn from_definition(def: ChallengeDefinition) -> Result<Self, DomainError> {
        if def.title.trim().is_empty() {
            return Err(DomainError::Validation(
                "Challenge title cannot be empty".to_string(),
            ));
        }
        if def.max_progress == 0 {
            return Err(DomainError::InvalidArgument(format!(
                "Challenge {} must have max_progress >= 1",
                def.id
            )));
        }

        let mut seen = HashSet::new();
        let mut requirements = Vec::with_capacity(def.requirements.len());
        for mut requirement in def.requirements {
            if requirement.target == 0 {
                return Err(DomainError::InvalidArgument(format!(
                    "Requirement {} of challenge {} must have target >= 1",
                    requirement.id, def.id
                )));
            }
            if !seen.insert(requirement.id.clone()) {
                return Err(DomainError::InvalidArgument(format!(
                    "Duplicate requirement {} in challenge {}",
                    requirement.id, def.id
                )));
            }
            requirement.current = requirement.current.min(requirement.target);
            requirements.push(requirement);
        }

        let start_date = def.start_date.unwrap_or_else(Utc::now);
        let end_date = def
            .end_date
            .unwrap_or_else(|| start_date + def.kind.duration());
        let progress = if def.is_active {
            def.progress.min(def.max_progress)
        } else {
            def.max_progress
        };

        Ok(Self {
            id: def.id,
            title: def.title.trim().to_string(),
            description: def.description,
            kind: def.kind,
            category: def.category,
            points: def.points,
            start_date,
            end_date,
            participants: def.participants,
            is_active: def.is_active,
            progress,
            max_progress: def.max_progress,
            requirements,
        })
    }

    pub fn id(&self) -> &ChallengeId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn kind(&self) -> ChallengeKind {
        self.kind
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    pub fn start_date(&self) -> DateTime<Utc> {
        self.start_date
    }

    pub fn end_date(&self) -> DateTime<Utc> {
        self.end_date
    }

    pub fn participants(&self) -> u32 {
        self.participants
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn progress(&self) -> u32 {
        self.progress
    }

    pub fn max_progress(&self) -> u32 {
        self.max_progress
    }

    pub fn requirements(&self) -> &[Requirement] {
        &self.requirements
    }

    pub fn add_participant(&mut self) -> u32 {
        self.participants = self.participants.saturating_add(1);
        self.participants
    }

    /// Advance one requirement by a single step and re-derive the challenge
    /// progress from the weighted requirement totals.
    ///
    /// Returns `None` when nothing changed: the challenge is completed, the
    /// requirement is unknown, or it is already met.
    pub fn complete_requirement(
        &mut self,
        requirement_id: &RequirementId,
    ) -> Option<RequirementProgress> {
        if !self.is_active {
            return None;
        }

        let requirement = self
            .requirements
            .iter_mut()
            .find(|r| &r.id == requirement_id)?;
        if requirement.is_met() {
            return None;
        }
        requirement.current += 1;
        let (current, target) = (requirement.current, requirement.target);

        let derived = self.derived_progress();
        self.update_progress(derived);

        Some(RequirementProgress {
            current,
            target,
            challenge_progress: self.progress,
        })
    }

    /// `floor(sum(current) / sum(target) * max_progress)` in exact integer arithmetic
    pub fn derived_progress(&self) -> u32 {
        let (current, target) = self
            .requirements
            .iter()
            .fold((0u64, 0u64), |(c, t), r| (c + r.current as u64, t + r.target as u64));
        if target == 0 {
            return self.progress;
        }
        let derived = current * self.max_progress as u64 / target;
        u32::try_from(derived).unwrap_or(self.max_progress)
    }

    /// Monotonic progress update clamped to `max_progress`. Returns whether it changed.
    pub fn update_progress(&mut self, progress: u32) -> bool {
        if !self.is_active {
            return false;
        }
        let next = self.progress.max(progress.min(self.max_progress));
        let changed = next != self.progress;
        self.progress = next;
        changed
    }

    /// Terminal transition. Returns false if the challenge was already completed.
    pub fn complete(&mut self) -> bool {
        if !self.is_active {
            return false;
        }
        self.progress = self.max_progress;
        self.is_active = false;
        true
    }
}
