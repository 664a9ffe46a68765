//! Account domain model
//!
//! The four account kinds form a closed set. Deposit and withdrawal policy is
//! resolved by a single exhaustive match on [`AccountKind`].

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::result::{Error, Refusal, Result};

/// Savings deposit bonus: 0.5%
pub const SAVINGS_BONUS_RATE: Decimal = Decimal::from_parts(5, 0, 0, false, 3);
/// Savings withdrawal ceiling
pub const SAVINGS_WITHDRAWAL_LIMIT: Decimal = Decimal::from_parts(700_000, 0, 0, false, 0);
/// Children's deposit bonus: 0.7%
pub const CHILDRENS_BONUS_RATE: Decimal = Decimal::from_parts(7, 0, 0, false, 3);
/// Student's deposit ceiling
pub const STUDENTS_DEPOSIT_LIMIT: Decimal = Decimal::from_parts(50_000, 0, 0, false, 0);
/// Student's withdrawal ceiling
pub const STUDENTS_WITHDRAWAL_LIMIT: Decimal = Decimal::from_parts(2_000, 0, 0, false, 0);

/// Kind of account, chosen once at creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccountKind {
    Savings,
    Current,
    Childrens,
    Students,
}

impl AccountKind {
    pub const ALL: [AccountKind; 4] = [
        AccountKind::Savings,
        AccountKind::Current,
        AccountKind::Childrens,
        AccountKind::Students,
    ];

    /// Display label shown in menus and confirmations
    pub fn label(&self) -> &'static str {
        match self {
            AccountKind::Savings => "Savings",
            AccountKind::Current => "Current",
            AccountKind::Childrens => "Children's",
            AccountKind::Students => "Student's",
        }
    }

    /// Policy summary for display
    pub fn policy(&self) -> AccountPolicy {
        match self {
            AccountKind::Savings => AccountPolicy {
                deposit_bonus_rate: Some(SAVINGS_BONUS_RATE),
                deposit_limit: None,
                withdrawal_limit: Some(SAVINGS_WITHDRAWAL_LIMIT),
                withdrawals_allowed: true,
            },
            AccountKind::Current => AccountPolicy {
                deposit_bonus_rate: None,
                deposit_limit: None,
                withdrawal_limit: None,
                withdrawals_allowed: true,
            },
            AccountKind::Childrens => AccountPolicy {
                deposit_bonus_rate: Some(CHILDRENS_BONUS_RATE),
                deposit_limit: None,
                withdrawal_limit: None,
                withdrawals_allowed: false,
            },
            AccountKind::Students => AccountPolicy {
                deposit_bonus_rate: None,
                deposit_limit: Some(STUDENTS_DEPOSIT_LIMIT),
                withdrawal_limit: Some(STUDENTS_WITHDRAWAL_LIMIT),
                withdrawals_allowed: true,
            },
        }
    }
}

impl fmt::Display for AccountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AccountKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "savings" => Ok(AccountKind::Savings),
            "current" => Ok(AccountKind::Current),
            "children's" | "childrens" => Ok(AccountKind::Childrens),
            "student's" | "students" => Ok(AccountKind::Students),
            _ => Err(Error::validation(format!("Unknown account type: {}", s.trim()))),
        }
    }
}

/// Deposit and withdrawal rules of one account kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AccountPolicy {
    /// Bonus credited as a second increment on every deposit
    pub deposit_bonus_rate: Option<Decimal>,
    pub deposit_limit: Option<Decimal>,
    pub withdrawal_limit: Option<Decimal>,
    pub withdrawals_allowed: bool,
}

/// A bank account bound to a signed-up identity
#[derive(Debug, Clone, Serialize)]
pub struct Account {
    pub owner: String,
    pub age: u32,
    pub kind: AccountKind,
    balance: Decimal,
    #[serde(skip_serializing)]
    password: String,
}

impl Account {
    pub fn new(
        kind: AccountKind,
        owner: impl Into<String>,
        age: u32,
        balance: Decimal,
        password: impl Into<String>,
    ) -> Self {
        Self {
            owner: owner.into(),
            age,
            kind,
            balance,
            password: password.into(),
        }
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Deposit according to the account kind, returning the new balance
    pub fn deposit(&mut self, amount: Decimal) -> std::result::Result<Decimal, Refusal> {
        if amount < Decimal::ZERO {
            return Err(Refusal::NegativeAmount);
        }

        let bonus_rate = match self.kind {
            AccountKind::Savings => Some(SAVINGS_BONUS_RATE),
            AccountKind::Childrens => Some(CHILDRENS_BONUS_RATE),
            AccountKind::Current => None,
            AccountKind::Students => {
                if amount > STUDENTS_DEPOSIT_LIMIT {
                    return Err(Refusal::DepositLimitExceeded {
                        limit: STUDENTS_DEPOSIT_LIMIT,
                    });
                }
                None
            }
        };

        // Amount and bonus are two separate increments, both checked before
        // the balance changes
        let mut next = self
            .balance
            .checked_add(amount)
            .ok_or(Refusal::AmountTooLarge)?;
        if let Some(rate) = bonus_rate {
            next = amount
                .checked_mul(rate)
                .and_then(|bonus| next.checked_add(bonus))
                .ok_or(Refusal::AmountTooLarge)?;
        }

        self.balance = next;
        Ok(self.balance)
    }

    /// Withdraw according to the account kind, returning the new balance
    pub fn withdraw(&mut self, amount: Decimal) -> std::result::Result<Decimal, Refusal> {
        if amount < Decimal::ZERO {
            return Err(Refusal::NegativeAmount);
        }

        match self.kind {
            AccountKind::Savings if amount > SAVINGS_WITHDRAWAL_LIMIT => {
                Err(Refusal::WithdrawalLimitExceeded {
                    limit: SAVINGS_WITHDRAWAL_LIMIT,
                })
            }
            AccountKind::Students if amount > STUDENTS_WITHDRAWAL_LIMIT => {
                Err(Refusal::WithdrawalLimitExceeded {
                    limit: STUDENTS_WITHDRAWAL_LIMIT,
                })
            }
            AccountKind::Childrens => Err(Refusal::WithdrawalsNotPermitted),
            AccountKind::Savings | AccountKind::Current | AccountKind::Students => {
                self.debit(amount)
            }
        }
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = password.into();
    }

    /// Replace the password if `old` matches the stored one exactly
    pub fn change_password(&mut self, old: &str, new: impl Into<String>) -> Result<()> {
        if !self.check_password(old) {
            return Err(Error::IncorrectPassword);
        }
        self.password = new.into();
        Ok(())
    }

    /// Plain string equality, no hashing
    pub fn check_password(&self, candidate: &str) -> bool {
        self.password == candidate
    }

    fn debit(&mut self, amount: Decimal) -> std::result::Result<Decimal, Refusal> {
        if self.balance < amount {
            return Err(Refusal::InsufficientFunds);
        }
        self.balance -= amount;
        Ok(self.balance)
    }
}
