use crate::application::commands::progression_commands::*;
use crate::application::dtos::AchievementDto;
use youmatter_domain::shared::{AchievementId, DomainError};

ledger_handler!(
    AddAchievementCommandHandler,
    AddAchievementCommand,
    AddAchievementResult,
    |ledger, cmd| {
        let id = cmd.definition.id.clone();
        ledger.add_achievement(cmd.definition)?;
        ledger
            .achievement(&id)
            .map(AchievementDto::from)
            .ok_or_else(|| DomainError::NotFound(format!("Achievement {id}")))
    }
);

ledger_handler!(
    UpdateAchievementProgressCommandHandler,
    UpdateAchievementProgressCommand,
    UpdateAchievementProgressResult,
    |ledger, cmd| {
        let id = AchievementId::from_string(&cmd.achievement_id);
        ledger.update_achievement_progress(&id, cmd.progress)?;
        Ok(ledger.achievement(&id).map(AchievementDto::from))
    }
);

ledger_handler!(
    AdvanceAchievementProgressCommandHandler,
    AdvanceAchievementProgressCommand,
    AdvanceAchievementProgressResult,
    |ledger, cmd| {
        let id = AchievementId::from_string(&cmd.achievement_id);
        let Some(current) = ledger.achievement(&id).map(|a| a.progress()) else {
            return Ok(None);
        };
        let next = current.saturating_add(cmd.by);
        ledger.update_achievement_progress(&id, i64::from(next))?;
        Ok(ledger.achievement(&id).map(AchievementDto::from))
    }
);

ledger_handler!(
    UnlockAchievementCommandHandler,
    UnlockAchievementCommand,
    UnlockAchievementResult,
    |ledger, cmd| {
        let id = AchievementId::from_string(&cmd.achievement_id);
        ledger.unlock_achievement(&id);
        Ok(ledger.achievement(&id).map(AchievementDto::from))
    }
);
