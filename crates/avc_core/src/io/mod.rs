//! External process execution.

mod runner;

pub use runner::{CommandOutput, CommandRunner, SystemRunner};
