//! Form parsing - raw text fields into typed requests
//!
//! The terminal session collects every field as text. Malformed numbers come
//! back as validation errors instead of reaching the bank service.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::domain::result::{Error, Result};
use crate::domain::AccountKind;
use crate::services::bank::{AccountRequest, SignupRequest};

/// Parse an age field as a non-negative whole number
pub fn parse_age(text: &str) -> Result<u32> {
    text.trim()
        .parse::<u32>()
        .map_err(|_| Error::validation("Age must be a whole number."))
}

/// Parse a deposit or withdrawal amount
pub fn parse_amount(text: &str) -> Result<Decimal> {
    parse_non_negative(
        text,
        "Amount must be a number.",
        "Amount cannot be negative.",
    )
}

/// Parse the initial balance of a new account
pub fn parse_initial_balance(text: &str) -> Result<Decimal> {
    parse_non_negative(
        text,
        "Initial balance must be a number.",
        "Initial balance cannot be negative.",
    )
}

fn parse_non_negative(text: &str, not_a_number: &str, negative: &str) -> Result<Decimal> {
    let trimmed = text.trim();
    // Accept scientific notation the way float parsing would
    let value = Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| Error::validation(not_a_number))?;
    if value < Decimal::ZERO {
        return Err(Error::validation(negative));
    }
    Ok(value.normalize())
}

/// Sign-up screen fields
#[derive(Debug, Clone, Default)]
pub struct SignupForm {
    pub name: String,
    pub age: String,
    pub bvn: String,
    pub password: String,
}

impl SignupForm {
    pub fn parse(self) -> Result<SignupRequest> {
        Ok(SignupRequest {
            age: parse_age(&self.age)?,
            name: self.name,
            bvn: self.bvn.trim().to_string(),
            password: self.password,
        })
    }
}

/// Login screen fields
///
/// The name is collected but plays no part in authentication.
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub name: String,
    pub bvn: String,
    pub password: String,
}

impl LoginForm {
    /// BVN and password to hand to [`BankService::login`](crate::services::BankService::login)
    pub fn credentials(&self) -> (&str, &str) {
        (self.bvn.trim(), &self.password)
    }
}

/// Account-creation screen fields
#[derive(Debug, Clone, Default)]
pub struct AccountForm {
    pub owner: String,
    pub age: String,
    pub kind: String,
    pub initial_balance: String,
    pub password: String,
}

impl AccountForm {
    pub fn parse(self) -> Result<AccountRequest> {
        Ok(AccountRequest {
            age: parse_age(&self.age)?,
            kind: AccountKind::from_str(&self.kind)?,
            initial_balance: parse_initial_balance(&self.initial_balance)?,
            owner: self.owner,
            password: self.password,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_age() {
        assert_eq!(parse_age(" 18 "), Ok(18));
        assert_eq!(parse_age("0"), Ok(0));
        for bad in ["", "eighteen", "-1", "18.5"] {
            assert_eq!(
                parse_age(bad).unwrap_err().to_string(),
                "Age must be a whole number."
            );
        }
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("100"), Ok(Decimal::from(100)));
        assert_eq!(parse_amount(" 12.50 "), Ok(Decimal::new(125, 1)));
        assert_eq!(parse_amount("1e3"), Ok(Decimal::from(1000)));
        assert_eq!(parse_amount("0"), Ok(Decimal::ZERO));
    }

    #[test]
    fn test_parse_amount_errors() {
        assert_eq!(
            parse_amount("ten").unwrap_err().to_string(),
            "Amount must be a number."
        );
        assert_eq!(
            parse_amount("").unwrap_err().to_string(),
            "Amount must be a number."
        );
        assert_eq!(
            parse_amount("-5").unwrap_err().to_string(),
            "Amount cannot be negative."
        );
    }

    #[test]
    fn test_parse_initial_balance_errors() {
        assert_eq!(
            parse_initial_balance("lots").unwrap_err().to_string(),
            "Initial balance must be a number."
        );
        assert_eq!(
            parse_initial_balance("-0.01").unwrap_err().to_string(),
            "Initial balance cannot be negative."
        );
    }

    #[test]
    fn test_signup_form_parse() {
        let form = SignupForm {
            name: "Ada".to_string(),
            age: "21".to_string(),
            bvn: " 1234567890 ".to_string(),
            password: "pw".to_string(),
        };
        let request = form.parse().unwrap();
        assert_eq!(request.age, 21);
        assert_eq!(request.bvn, "1234567890");
    }

    #[test]
    fn test_account_form_parse() {
        let form = AccountForm {
            owner: "Ada".to_string(),
            age: "12".to_string(),
            kind: "Children's".to_string(),
            initial_balance: "250.75".to_string(),
            password: "pw".to_string(),
        };
        let request = form.parse().unwrap();
        assert_eq!(request.kind, AccountKind::Childrens);
        assert_eq!(request.initial_balance, Decimal::new(25075, 2));
        assert_eq!(request.age, 12);
    }

    #[test]
    fn test_account_form_unknown_type() {
        let form = AccountForm {
            kind: "Checking".to_string(),
            age: "30".to_string(),
            initial_balance: "0".to_string(),
            ..Default::default()
        };
        assert_eq!(
            form.parse().unwrap_err().to_string(),
            "Unknown account type: Checking"
        );
    }

    #[test]
    fn test_login_form_trims_bvn_only() {
        let form = LoginForm {
            name: "ignored".to_string(),
            bvn: " 1234567890\n".to_string(),
            password: " pw ".to_string(),
        };
        assert_eq!(form.credentials(), ("1234567890", " pw "));
    }
}
