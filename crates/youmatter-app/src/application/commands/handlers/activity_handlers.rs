use crate::application::commands::engagement_commands::*;
use crate::application::dtos::{ActivityDto, InsuranceActivityDto};
use youmatter_domain::activity::Activity;
use youmatter_domain::insurance::InsuranceActivity;
use youmatter_domain::shared::{non_negative, ActivityId, DomainError, InsuranceActivityId};

// Logging an activity also grants its points as experience
ledger_handler!(
    LogActivityCommandHandler,
    LogActivityCommand,
    LogActivityResult,
    |ledger, cmd| {
        let points = u32::try_from(non_negative(cmd.points, "Activity points")?).map_err(|_| {
            DomainError::InvalidArgument(format!("Activity points too large: {}", cmd.points))
        })?;

        let mut activity = Activity::new(cmd.title, cmd.category, points)
            .with_description(cmd.description);
        activity.duration = cmd.duration;
        let id = activity.id.clone();

        ledger.grant_experience(cmd.points)?;
        ledger.log_activity(activity);

        ledger
            .activities()
            .activities()
            .find(|a| a.id == id)
            .map(ActivityDto::from)
            .ok_or_else(|| DomainError::NotFound(format!("Activity {id}")))
    }
);

ledger_handler!(
    CompleteActivityCommandHandler,
    CompleteActivityCommand,
    CompleteActivityResult,
    |ledger, cmd| { Ok(ledger.complete_activity(&ActivityId::from_string(&cmd.activity_id))) }
);

ledger_handler!(
    LogInsuranceActivityCommandHandler,
    LogInsuranceActivityCommand,
    LogInsuranceActivityResult,
    |ledger, cmd| {
        let activity = InsuranceActivity {
            id: InsuranceActivityId::new(),
            kind: cmd.kind,
            title: cmd.title,
            description: cmd.description,
            points: non_negative(cmd.points, "Insurance points")?,
            completed_at: None,
            policy_id: cmd.policy_id,
        };
        let id = activity.id.clone();
        ledger.log_insurance_activity(activity);

        ledger
            .insurance()
            .activities()
            .find(|a| a.id == id)
            .map(InsuranceActivityDto::from)
            .ok_or_else(|| DomainError::NotFound(format!("Insurance activity {id}")))
    }
);

ledger_handler!(
    ClearInsuranceActivitiesCommandHandler,
    ClearInsuranceActivitiesCommand,
    ClearInsuranceActivitiesResult,
    |ledger, _cmd| { Ok(ledger.clear_insurance_activities()) }
);
