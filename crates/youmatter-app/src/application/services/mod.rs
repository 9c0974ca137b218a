mod ledger_store;
mod reward_engine;

pub use ledger_store::LedgerStore;
pub use reward_engine::RewardEngine;
