//! CLI command handlers. Each command is in its own file.

mod plan;
mod run;

pub use plan::run_plan;
pub use run::run_fetch;
