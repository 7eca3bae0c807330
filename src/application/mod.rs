//! Application Layer - the poll driver and outbox maintenance

pub mod indexer;
pub mod orchestrator;

pub use indexer::{build_index, IndexError, IndexSummary};
pub use orchestrator::{DashboardOrchestrator, OrchestratorError, OrchestratorStatus, TickOutcome};
