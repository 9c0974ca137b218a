// Application layer around the progression ledger: commands, queries,
// reward engine, seeding and configuration

pub mod application;
pub mod presentation;
