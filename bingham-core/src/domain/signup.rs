//! Signup record and BVN identifier

use std::fmt;

use serde::Serialize;

use super::account::Account;
use super::result::{Error, Result};

/// Minimum age accepted at signup
pub const MINIMUM_SIGNUP_AGE: u32 = 18;

/// Number of digits in a BVN
pub const BVN_LENGTH: usize = 10;

/// Bank verification number: exactly ten ASCII digits
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Bvn(String);

impl Bvn {
    pub fn parse(value: &str) -> Result<Self> {
        if value.len() != BVN_LENGTH || !value.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::validation("BVN must be exactly 10 digits."));
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Bvn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where an identity stands in the signup, login, create-account sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IdentityState {
    Unregistered,
    Registered,
    Active,
}

/// A signed-up identity and the account bound to it, if any
///
/// Name, age and password here are the signup values. The bound account
/// carries its own owner, age and password from the account-creation form.
#[derive(Debug, Clone, Serialize)]
pub struct SignupRecord {
    pub bvn: Bvn,
    pub name: String,
    pub age: u32,
    #[serde(skip_serializing)]
    password: String,
    pub account: Option<Account>,
}

impl SignupRecord {
    pub fn new(bvn: Bvn, name: impl Into<String>, age: u32, password: impl Into<String>) -> Self {
        Self {
            bvn,
            name: name.into(),
            age,
            password: password.into(),
            account: None,
        }
    }

    /// Exact comparison against the signup password
    pub fn password_matches(&self, candidate: &str) -> bool {
        self.password == candidate
    }

    pub fn state(&self) -> IdentityState {
        if self.account.is_some() {
            IdentityState::Active
        } else {
            IdentityState::Registered
        }
    }
}
