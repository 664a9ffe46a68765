//! Service layer - business logic orchestration
//!
//! Services coordinate domain logic for a use case or feature area.

pub mod bank;
pub mod forms;
pub mod logging;

pub use bank::{AccountCreated, AccountRequest, BankService, SignupRequest};
pub use forms::{parse_age, parse_amount, parse_initial_balance, AccountForm, LoginForm, SignupForm};
pub use logging::{LogEntry, LogEvent, LoggingService};
