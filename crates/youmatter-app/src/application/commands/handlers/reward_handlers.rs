use crate::application::commands::engagement_commands::*;
use crate::application::commands::progression_commands::*;
use crate::application::dtos::{RewardDto, TokenDto};
use youmatter_domain::reward::Reward;
use youmatter_domain::shared::{non_negative, DomainError};

ledger_handler!(
    GrantRewardCommandHandler,
    GrantRewardCommand,
    GrantRewardResult,
    |ledger, cmd| {
        let points = non_negative(cmd.points, "Reward points")?;
        ledger.grant_reward(Reward::new(cmd.title, cmd.description, points, cmd.reward_type));
        ledger
            .rewards()
            .rewards()
            .next()
            .map(RewardDto::from)
            .ok_or_else(|| DomainError::NotFound("Granted reward".to_string()))
    }
);

ledger_handler!(
    ClearRewardsCommandHandler,
    ClearRewardsCommand,
    ClearRewardsResult,
    |ledger, _cmd| {
        ledger.clear_rewards();
        Ok(())
    }
);

ledger_handler!(
    MintTokenCommandHandler,
    MintTokenCommand,
    MintTokenResult,
    |ledger, cmd| {
        let points = non_negative(cmd.points, "Token points")?;
        let token = ledger.mint_token(cmd.title, cmd.description, points);
        Ok(TokenDto::from(&token))
    }
);

ledger_handler!(
    ClearTokensCommandHandler,
    ClearTokensCommand,
    ClearTokensResult,
    |ledger, _cmd| {
        ledger.clear_tokens();
        Ok(())
    }
);
