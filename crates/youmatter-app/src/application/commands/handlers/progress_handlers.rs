use crate::application::commands::progression_commands::*;
use crate::application::dtos::UserProgressDto;

ledger_handler!(
    GrantExperienceCommandHandler,
    GrantExperienceCommand,
    GrantExperienceResult,
    |ledger, cmd| {
        ledger.grant_experience(cmd.amount)?;
        Ok(UserProgressDto::from(ledger.user()))
    }
);

ledger_handler!(
    UpdateStreakCommandHandler,
    UpdateStreakCommand,
    UpdateStreakResult,
    |ledger, cmd| {
        ledger.update_streak(cmd.streak);
        Ok(UserProgressDto::from(ledger.user()))
    }
);
