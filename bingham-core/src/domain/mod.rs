//! Core domain entities
//!
//! Pure data structures with their rules - no I/O or external dependencies.

mod account;
mod signup;
pub mod result;

pub use account::{
    Account, AccountKind, AccountPolicy, CHILDRENS_BONUS_RATE, SAVINGS_BONUS_RATE,
    SAVINGS_WITHDRAWAL_LIMIT, STUDENTS_DEPOSIT_LIMIT, STUDENTS_WITHDRAWAL_LIMIT,
};
pub use signup::{Bvn, IdentityState, SignupRecord, BVN_LENGTH, MINIMUM_SIGNUP_AGE};
