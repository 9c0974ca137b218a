mod ledger;
mod value_objects;

pub use ledger::RewardLedger;
pub use value_objects::{Reward, RewardType};
