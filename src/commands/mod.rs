//! CLI command implementations
//!
//! This module contains implementations of the commands supported
//! by the CLI application using the Command pattern.

pub mod command_traits;
pub mod convert_command;

pub use command_traits::{Command, CommandFactory};
pub use convert_command::ConvertCommand;

use clap::ArgMatches;
use crate::utils::logger::Logger;
use crate::coordinate::errors::ConvertResult;

/// Factory for creating command instances based on CLI arguments
///
/// This factory examines the command-line arguments and creates
/// the appropriate command instance for execution.
pub struct PolarkitCommandFactory;

impl PolarkitCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        PolarkitCommandFactory
    }
}

impl Default for PolarkitCommandFactory {
    fn default() -> Self {
        PolarkitCommandFactory::new()
    }
}

impl<'a> CommandFactory<'a> for PolarkitCommandFactory {
    fn create_command(&self, args: &ArgMatches, logger: &'a Logger) -> ConvertResult<Box<dyn Command + 'a>> {
        // The interactive session is the only operation
        Ok(Box::new(ConvertCommand::new(args, logger)?))
    }
}
