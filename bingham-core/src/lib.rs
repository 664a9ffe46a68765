//! Bingham Core - account rules and session registry for Bingham Bank
//!
//! - **domain**: Account kinds and their deposit/withdrawal rules, signup records
//! - **services**: Bank session state machine, form parsing, event logging
//! - **config**: settings.json and environment overrides
//!
//! All banking state lives in memory for one session. The only file the crate
//! writes is the event log.

pub mod config;
pub mod domain;
pub mod log_migrations;
pub mod services;

use std::path::Path;

use anyhow::{Context, Result};

use config::Config;
use services::BankService;

// Re-export commonly used types at crate root
pub use domain::result::{Error, OperationResult, Refusal};
pub use domain::{Account, AccountKind, AccountPolicy, Bvn, IdentityState, SignupRecord};
pub use services::{LogEntry, LogEvent, LoggingService};

/// Main context for a banking session
///
/// Holds the configuration, the bank service with all in-memory state, and
/// the event logger when logging is enabled.
pub struct BankContext {
    pub config: Config,
    pub bank: BankService,
    pub logger: Option<LoggingService>,
}

impl BankContext {
    /// Create a context rooted at the bank directory
    pub fn new(bank_dir: &Path, app_version: &str) -> Result<Self> {
        let config = Config::load(bank_dir)?;
        Self::with_config(bank_dir, config, app_version)
    }

    /// Create a context from an already resolved configuration
    ///
    /// A logger that fails to open is dropped rather than failing the session.
    pub fn with_config(bank_dir: &Path, config: Config, app_version: &str) -> Result<Self> {
        let logger = if config.logging_enabled {
            std::fs::create_dir_all(bank_dir)
                .with_context(|| format!("Failed to create bank directory: {:?}", bank_dir))?;
            LoggingService::new(bank_dir, app_version).ok()
        } else {
            None
        };

        Ok(Self {
            config,
            bank: BankService::new(),
            logger,
        })
    }

    /// Context with default configuration and no logger
    pub fn in_memory() -> Self {
        Self {
            config: Config::default(),
            bank: BankService::new(),
            logger: None,
        }
    }

    /// Log an event, ignoring any errors (logging should never break the app)
    pub fn log(&self, event: LogEvent) {
        if let Some(logger) = &self.logger {
            let _ = logger.log(event);
        }
    }

    /// Log the outcome of a session action, tagged with the current account type
    pub fn log_outcome<T>(&self, action: &str, outcome: &std::result::Result<T, Error>) {
        let mut event = match outcome {
            Ok(_) => LogEvent::new("action_completed").with_action(action),
            Err(e) => LogEvent::new("action_failed").with_action(action).with_error(e),
        };
        if let Some(account) = self.bank.current_account() {
            event = event.with_account_type(account.kind);
        }
        self.log(event);
    }
}
