pub mod actions;
pub mod bootstrap;
pub mod error;
pub mod state;
