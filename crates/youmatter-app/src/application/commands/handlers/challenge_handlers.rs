use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use super::bonus_amount;
use crate::application::commands::command_handler::CommandHandler;
use crate::application::commands::progression_commands::*;
use crate::application::config::EngagementConfig;
use crate::application::dtos::ChallengeDto;
use crate::application::services::LedgerStore;
use youmatter_domain::shared::{ChallengeId, DomainError, RequirementId};
use youmatter_domain::ProgressionLedger;

fn challenge_dto(ledger: &ProgressionLedger, id: &ChallengeId) -> Option<ChallengeDto> {
    ledger
        .challenge(id)
        .map(|c| ChallengeDto::new(c, ledger.is_joined(id)))
}

ledger_handler!(
    AddChallengeCommandHandler,
    AddChallengeCommand,
    AddChallengeResult,
    |ledger, cmd| {
        let id = cmd.definition.id.clone();
        ledger.add_challenge(cmd.definition)?;
        challenge_dto(ledger, &id)
            .ok_or_else(|| DomainError::NotFound(format!("Challenge {id}")))
    }
);

/// Join a challenge; the join bonus is paid only when the join took effect
pub struct JoinChallengeCommandHandler {
    store: Arc<LedgerStore>,
    join_bonus: u64,
}

impl JoinChallengeCommandHandler {
    pub fn new(store: Arc<LedgerStore>, config: &EngagementConfig) -> Self {
        Self {
            store,
            join_bonus: config.join_challenge_bonus,
        }
    }
}

#[async_trait]
impl CommandHandler<JoinChallengeCommand> for JoinChallengeCommandHandler {
    type Result = JoinChallengeResult;

    async fn handle(&self, cmd: JoinChallengeCommand) -> Result<Self::Result, DomainError> {
        let id = ChallengeId::from_string(&cmd.challenge_id);
        let bonus = self.join_bonus;

        let result = self
            .store
            .mutate(move |ledger| {
                let joined = ledger.join_challenge(&id);
                if joined {
                    ledger.grant_experience(bonus_amount(bonus))?;
                }
                Ok::<_, DomainError>(JoinChallengeResult {
                    joined,
                    bonus_experience: if joined { bonus } else { 0 },
                    challenge: challenge_dto(ledger, &id),
                })
            })
            .await?;

        if result.joined {
            info!("Joined challenge {} (+{} xp)", cmd.challenge_id, bonus);
        }
        Ok(result)
    }
}

/// Advance one requirement step; the bonus is paid only when it advanced
pub struct CompleteRequirementCommandHandler {
    store: Arc<LedgerStore>,
    requirement_bonus: u64,
}

impl CompleteRequirementCommandHandler {
    pub fn new(store: Arc<LedgerStore>, config: &EngagementConfig) -> Self {
        Self {
            store,
            requirement_bonus: config.requirement_bonus,
        }
    }
}

#[async_trait]
impl CommandHandler<CompleteRequirementCommand> for CompleteRequirementCommandHandler {
    type Result = CompleteRequirementResult;

    async fn handle(&self, cmd: CompleteRequirementCommand) -> Result<Self::Result, DomainError> {
        let challenge_id = ChallengeId::from_string(&cmd.challenge_id);
        let requirement_id = RequirementId::from_string(&cmd.requirement_id);
        let bonus = self.requirement_bonus;

        self.store
            .mutate(move |ledger| {
                let advanced = ledger.complete_requirement(&challenge_id, &requirement_id);
                if advanced {
                    ledger.grant_experience(bonus_amount(bonus))?;
                }
                Ok::<_, DomainError>(CompleteRequirementResult {
                    advanced,
                    bonus_experience: if advanced { bonus } else { 0 },
                    challenge: challenge_dto(ledger, &challenge_id),
                })
            })
            .await
    }
}

ledger_handler!(
    UpdateChallengeProgressCommandHandler,
    UpdateChallengeProgressCommand,
    UpdateChallengeProgressResult,
    |ledger, cmd| {
        let id = ChallengeId::from_string(&cmd.challenge_id);
        ledger.update_challenge_progress(&id, cmd.progress)?;
        Ok(challenge_dto(ledger, &id))
    }
);

ledger_handler!(
    CompleteChallengeCommandHandler,
    CompleteChallengeCommand,
    CompleteChallengeResult,
    |ledger, cmd| {
        let id = ChallengeId::from_string(&cmd.challenge_id);
        ledger.complete_challenge(&id);
        Ok(challenge_dto(ledger, &id))
    }
);
