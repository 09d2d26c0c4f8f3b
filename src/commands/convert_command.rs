//! Interactive conversion command
//!
//! This module implements the command that runs the interactive
//! cylindrical-to-Cartesian session over the real console.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use clap::ArgMatches;
use log::info;

use crate::commands::command_traits::Command;
use crate::console::ConsoleSession;
use crate::coordinate::errors::{ConvertError, ConvertResult};
use crate::coordinate::CylindricalTransformer;
use crate::utils::logger::Logger;

/// Command for running the interactive conversion loop
pub struct ConvertCommand<'a> {
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> ConvertCommand<'a> {
    /// Create a new convert command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A new ConvertCommand instance or an error
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> ConvertResult<Self> {
        // The session itself takes no arguments; verbosity is already
        // applied to the global logger at startup
        let _ = args;
        Ok(ConvertCommand { logger })
    }

    /// Install the Ctrl-C handler backing graceful interrupt handling
    fn install_interrupt_flag() -> ConvertResult<Arc<AtomicBool>> {
        let interrupted = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&interrupted);

        ctrlc::set_handler(move || {
            flag.store(true, Ordering::SeqCst);
        })
        .map_err(|e| {
            ConvertError::GenericError(format!("Failed to install interrupt handler: {}", e))
        })?;

        Ok(interrupted)
    }
}

impl<'a> Command for ConvertCommand<'a> {
    fn execute(&self) -> ConvertResult<()> {
        self.logger.log("Starting interactive conversion session")?;
        info!("Starting interactive conversion session");

        let interrupted = Self::install_interrupt_flag()?;
        let transformer = CylindricalTransformer::default();

        let stdin = io::stdin();
        let stdout = io::stdout();
        let mut session =
            ConsoleSession::new(stdin.lock(), stdout.lock(), transformer, interrupted);

        session.run()?;

        info!("Conversion session finished");
        Ok(())
    }
}
