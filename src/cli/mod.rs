//! CLI command handlers
//!
//! Argument parsing, command routing and the script runner that drives a
//! session headlessly.

pub mod args;
pub mod help;
pub mod router;
pub mod script;

pub use args::{Cli, Commands};
pub use help::get_log_level;
pub use router::execute_command;
pub use script::{load_script, run_script, Script, ScriptReport};
