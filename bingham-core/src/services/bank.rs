//! Bank service - signup registry and the logged-in session
//!
//! Owns every signup record and the pointer to the current one. Operations on
//! the bound account require a login first, then an account.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::result::{Error, Result};
use crate::domain::{Account, AccountKind, Bvn, IdentityState, SignupRecord, MINIMUM_SIGNUP_AGE};

/// Signup input with numeric fields already parsed
#[derive(Debug, Clone)]
pub struct SignupRequest {
    pub name: String,
    pub age: u32,
    pub bvn: String,
    pub password: String,
}

/// Account-creation input with numeric fields already parsed
#[derive(Debug, Clone)]
pub struct AccountRequest {
    pub owner: String,
    pub age: u32,
    pub kind: AccountKind,
    pub initial_balance: Decimal,
    pub password: String,
}

/// Outcome of a successful create-account call
#[derive(Debug, Clone, Serialize)]
pub struct AccountCreated {
    pub kind: AccountKind,
    pub owner: String,
    pub balance: Decimal,
    /// True if an existing account on this identity was replaced
    pub replaced: bool,
}

impl AccountCreated {
    pub fn message(&self) -> String {
        format!("Created {} account for {}", self.kind.label(), self.owner)
    }
}

/// Registry of signed-up identities plus the current login
#[derive(Debug, Default)]
pub struct BankService {
    records: HashMap<Bvn, SignupRecord>,
    current: Option<Bvn>,
}

impl BankService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an identity
    ///
    /// Age is checked before the BVN. Signing up again with a known BVN
    /// replaces the earlier record, including any bound account.
    pub fn signup(&mut self, request: SignupRequest) -> Result<&SignupRecord> {
        if request.age < MINIMUM_SIGNUP_AGE {
            return Err(Error::validation("Age must be at least 18."));
        }
        let bvn = Bvn::parse(&request.bvn)?;

        let record = SignupRecord::new(bvn.clone(), request.name, request.age, request.password);
        self.records.insert(bvn.clone(), record);
        Ok(&self.records[&bvn])
    }

    /// Select the record for `bvn` as current if the password matches
    ///
    /// Leaves both the registry and the current login untouched on failure.
    pub fn login(&mut self, bvn: &str, password: &str) -> Result<&SignupRecord> {
        let key = Bvn::parse(bvn).map_err(|_| Error::InvalidCredentials)?;
        match self.records.get(&key) {
            Some(record) if record.password_matches(password) => {
                self.current = Some(key);
                Ok(record)
            }
            _ => Err(Error::InvalidCredentials),
        }
    }

    pub fn logout(&mut self) {
        self.current = None;
    }

    /// Create an account of the requested kind on the current identity
    pub fn create_account(&mut self, request: AccountRequest) -> Result<AccountCreated> {
        let record = self.current_record_mut()?;
        if request.initial_balance < Decimal::ZERO {
            return Err(Error::validation("Initial balance cannot be negative."));
        }
        let account = Account::new(
            request.kind,
            request.owner,
            request.age,
            request.initial_balance,
            request.password,
        );
        let created = AccountCreated {
            kind: account.kind,
            owner: account.owner.clone(),
            balance: account.balance(),
            replaced: record.account.is_some(),
        };
        record.account = Some(account);
        Ok(created)
    }

    /// Deposit into the current account, returning the new balance
    pub fn deposit(&mut self, amount: Decimal) -> Result<Decimal> {
        Ok(self.current_account_mut()?.deposit(amount)?)
    }

    /// Withdraw from the current account, returning the new balance
    pub fn withdraw(&mut self, amount: Decimal) -> Result<Decimal> {
        Ok(self.current_account_mut()?.withdraw(amount)?)
    }

    pub fn change_password(&mut self, old: &str, new: &str) -> Result<()> {
        self.current_account_mut()?.change_password(old, new)
    }

    pub fn balance(&self) -> Result<Decimal> {
        let record = self.current().ok_or(Error::NotLoggedIn)?;
        record
            .account
            .as_ref()
            .map(Account::balance)
            .ok_or(Error::NoAccount)
    }

    /// The logged-in record
    pub fn current(&self) -> Option<&SignupRecord> {
        self.current.as_ref().and_then(|bvn| self.records.get(bvn))
    }

    pub fn current_account(&self) -> Option<&Account> {
        self.current().and_then(|record| record.account.as_ref())
    }

    pub fn is_logged_in(&self) -> bool {
        self.current.is_some()
    }

    pub fn state_of(&self, bvn: &Bvn) -> IdentityState {
        self.records
            .get(bvn)
            .map(SignupRecord::state)
            .unwrap_or(IdentityState::Unregistered)
    }

    pub fn registered_count(&self) -> usize {
        self.records.len()
    }

    fn current_record_mut(&mut self) -> Result<&mut SignupRecord> {
        let bvn = self.current.as_ref().ok_or(Error::NotLoggedIn)?;
        self.records.get_mut(bvn).ok_or(Error::NotLoggedIn)
    }

    fn current_account_mut(&mut self) -> Result<&mut Account> {
        self.current_record_mut()?
            .account
            .as_mut()
            .ok_or(Error::NoAccount)
    }
}
