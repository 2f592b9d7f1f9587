//! Command handlers, one module per subcommand.

pub mod clean;
pub mod demo;
pub mod run_cmd;
pub mod stages;
