mod dashboard_dto;
mod engagement_dto;
mod progression_dto;

pub use dashboard_dto::*;
pub use engagement_dto::*;
pub use progression_dto::*;
