pub mod ledger_queries;

pub use ledger_queries::LedgerQueryService;
