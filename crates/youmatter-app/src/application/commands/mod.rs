pub mod command_handler;
pub mod engagement_commands;
pub mod handlers;
pub mod progression_commands;

pub use command_handler::{Command, CommandHandler};
