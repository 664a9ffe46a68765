//! Integration tests for the signup → login → create-account flow
//!
//! Drives BankService the way the terminal session does: raw form text goes
//! through the form parsers, then into the service.
//!
//! Run with: cargo test --test session_flow_test -- --nocapture

use rust_decimal::Decimal;
use tempfile::TempDir;

use bingham_core::services::{AccountForm, BankService, LoggingService, LoginForm, SignupForm};
use bingham_core::{AccountKind, BankContext, Bvn, Error, IdentityState, OperationResult, Refusal};

// ============================================================================
// Test Helpers
// ============================================================================

const BVN: &str = "2233445566";

fn signup_form(age: &str, bvn: &str) -> SignupForm {
    SignupForm {
        name: "Tunde".to_string(),
        age: age.to_string(),
        bvn: bvn.to_string(),
        password: "open-sesame".to_string(),
    }
}

fn account_form(kind: &str, balance: &str) -> AccountForm {
    AccountForm {
        owner: "Tunde Bakare".to_string(),
        age: "25".to_string(),
        kind: kind.to_string(),
        initial_balance: balance.to_string(),
        password: "vault".to_string(),
    }
}

/// Bank with one identity signed up, logged in and holding an account
fn active_bank(kind: &str, balance: &str) -> BankService {
    let mut bank = BankService::new();
    bank.signup(signup_form("30", BVN).parse().unwrap()).unwrap();
    bank.login(BVN, "open-sesame").unwrap();
    bank.create_account(account_form(kind, balance).parse().unwrap())
        .unwrap();
    bank
}

fn amount(text: &str) -> Decimal {
    bingham_core::services::parse_amount(text).unwrap()
}

// ============================================================================
// State machine
// ============================================================================

#[test]
fn test_full_lifecycle_states() {
    let mut bank = BankService::new();
    let bvn = Bvn::parse(BVN).unwrap();
    assert_eq!(bank.state_of(&bvn), IdentityState::Unregistered);

    bank.signup(signup_form("18", BVN).parse().unwrap()).unwrap();
    assert_eq!(bank.state_of(&bvn), IdentityState::Registered);

    let login = LoginForm {
        name: "anything".to_string(),
        bvn: BVN.to_string(),
        password: "open-sesame".to_string(),
    };
    let (id, password) = login.credentials();
    bank.login(id, password).unwrap();
    assert!(bank.is_logged_in());
    assert_eq!(bank.state_of(&bvn), IdentityState::Registered);

    let created = bank
        .create_account(account_form("Savings", "1000").parse().unwrap())
        .unwrap();
    assert_eq!(created.message(), "Created Savings account for Tunde Bakare");
    assert_eq!(bank.state_of(&bvn), IdentityState::Active);
}

#[test]
fn test_signup_validation_messages() {
    let mut bank = BankService::new();

    let minor = bank.signup(signup_form("17", BVN).parse().unwrap()).unwrap_err();
    assert_eq!(minor.to_string(), "Age must be at least 18.");

    let bad_bvn = bank
        .signup(signup_form("40", "12a456789").parse().unwrap())
        .unwrap_err();
    assert_eq!(bad_bvn.to_string(), "BVN must be exactly 10 digits.");

    let bad_age = signup_form("old", BVN).parse().unwrap_err();
    assert_eq!(bad_age.to_string(), "Age must be a whole number.");

    assert_eq!(bank.registered_count(), 0);
}

#[test]
fn test_wrong_password_leaves_session_unauthenticated() {
    let mut bank = BankService::new();
    bank.signup(signup_form("30", BVN).parse().unwrap()).unwrap();

    assert_eq!(bank.login(BVN, "OPEN-SESAME").unwrap_err(), Error::InvalidCredentials);
    assert!(!bank.is_logged_in());
    assert_eq!(bank.registered_count(), 1);
    assert_eq!(
        bank.create_account(account_form("Current", "0").parse().unwrap())
            .unwrap_err(),
        Error::NotLoggedIn
    );
}

#[test]
fn test_login_then_operate_without_account() {
    let mut bank = BankService::new();
    bank.signup(signup_form("30", BVN).parse().unwrap()).unwrap();
    bank.login(BVN, "open-sesame").unwrap();

    for result in [bank.deposit(amount("10")), bank.withdraw(amount("10"))] {
        assert_eq!(result.unwrap_err().to_string(), "No account created.");
    }
    assert_eq!(
        bank.change_password("x", "y").unwrap_err().to_string(),
        "No account created."
    );
}

#[test]
fn test_two_identities_are_isolated() {
    let mut bank = active_bank("Current", "500");
    bank.signup(signup_form("50", "9999999999").parse().unwrap()).unwrap();
    bank.login("9999999999", "open-sesame").unwrap();

    assert_eq!(bank.deposit(amount("1")).unwrap_err(), Error::NoAccount);

    bank.login(BVN, "open-sesame").unwrap();
    assert_eq!(bank.balance(), Ok(amount("500")));
}

// ============================================================================
// Account rules through the session
// ============================================================================

#[test]
fn test_savings_rules() {
    let mut bank = active_bank("Savings", "0");

    assert_eq!(bank.deposit(amount("1000")), Ok(amount("1005")));
    assert!(matches!(
        bank.withdraw(amount("800000")),
        Err(Error::Refused(Refusal::WithdrawalLimitExceeded { .. }))
    ));
    assert_eq!(
        bank.withdraw(amount("500000")).unwrap_err(),
        Error::Refused(Refusal::InsufficientFunds)
    );
    assert_eq!(bank.balance(), Ok(amount("1005")));
}

#[test]
fn test_savings_large_balance_withdraw() {
    let mut bank = active_bank("Savings", "2000000");
    assert_eq!(bank.withdraw(amount("800000")).unwrap_err().to_string(),
        "Withdrawal failed. Exceeds limit or insufficient balance.");
    assert_eq!(bank.withdraw(amount("500000")), Ok(amount("1500000")));
}

#[test]
fn test_current_rules() {
    let mut bank = active_bank("Current", "100");

    assert_eq!(bank.withdraw(amount("100.01")).unwrap_err(), Error::Refused(Refusal::InsufficientFunds));
    assert_eq!(bank.withdraw(amount("40")), Ok(amount("60")));
    assert_eq!(bank.deposit(amount("1000000")), Ok(amount("1000060")));
}

#[test]
fn test_childrens_rules() {
    let mut bank = active_bank("Children's", "0");

    assert_eq!(bank.deposit(amount("1000")), Ok(amount("1007")));
    for value in ["0", "1", "1007", "5000"] {
        assert_eq!(
            bank.withdraw(amount(value)).unwrap_err(),
            Error::Refused(Refusal::WithdrawalsNotPermitted)
        );
    }
    assert_eq!(bank.balance(), Ok(amount("1007")));
}

#[test]
fn test_students_rules() {
    let mut bank = active_bank("Student's", "0");

    let refused = bank.deposit(amount("60000")).unwrap_err();
    assert_eq!(refused.to_string(), "Deposit failed. Exceeds limit.");
    assert_eq!(bank.balance(), Ok(Decimal::ZERO));

    assert_eq!(bank.deposit(amount("40000")), Ok(amount("40000")));
    assert!(bank.withdraw(amount("3000")).is_err());
    assert_eq!(bank.withdraw(amount("1500")), Ok(amount("38500")));
}

#[test]
fn test_bonus_is_two_sequential_increments() {
    let mut bank = active_bank("Savings", "0.1");
    // 0.1 + 0.3 + 0.3 * 0.005
    assert_eq!(bank.deposit(amount("0.3")), Ok(amount("0.4015")));
}

#[test]
fn test_recreate_account_replaces_silently() {
    let mut bank = active_bank("Children's", "900");
    let created = bank
        .create_account(account_form("Current", "5").parse().unwrap())
        .unwrap();

    assert!(created.replaced);
    assert_eq!(bank.current_account().map(|a| a.kind), Some(AccountKind::Current));
    assert_eq!(bank.withdraw(amount("5")), Ok(Decimal::ZERO));
}

// ============================================================================
// Passwords
// ============================================================================

#[test]
fn test_change_password_flow() {
    let mut bank = active_bank("Current", "0");

    assert_eq!(
        bank.change_password("open-sesame", "new").unwrap_err().to_string(),
        "Incorrect old password"
    );

    bank.change_password("vault", "new-vault").unwrap();
    let account = bank.current_account().unwrap();
    assert!(account.check_password("new-vault"));
    assert!(!account.check_password("vault"));

    // Signup password is unaffected
    bank.logout();
    bank.login(BVN, "open-sesame").unwrap();
}

// ============================================================================
// Context and logging
// ============================================================================

#[test]
fn test_outcomes_are_logged_without_user_data() {
    let temp_dir = TempDir::new().unwrap();
    let mut ctx = BankContext::in_memory();
    ctx.logger = Some(LoggingService::new(temp_dir.path(), "test").unwrap());

    let signup = ctx.bank.signup(signup_form("30", BVN).parse().unwrap()).map(|_| ());
    ctx.log_outcome("signup", &signup);
    let login = ctx.bank.login(BVN, "wrong").map(|_| ());
    ctx.log_outcome("login", &login);

    let logger = ctx.logger.as_ref().unwrap();
    let entries = logger.get_recent(10).unwrap();
    assert_eq!(entries.len(), 2);

    let errors = logger.get_errors(10).unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].action.as_deref(), Some("login"));
    assert_eq!(errors[0].error_category.as_deref(), Some("authentication"));

    let dump = serde_json::to_string(&entries).unwrap();
    assert!(!dump.contains(BVN));
    assert!(!dump.contains("Tunde"));
    assert!(!dump.contains("wrong"));
}

#[test]
fn test_operation_result_envelope() {
    let mut bank = active_bank("Student's", "0");
    let result: OperationResult<Decimal> = bank.deposit(amount("90000")).into();

    assert!(!result.success);
    assert_eq!(result.error.as_deref(), Some("Deposit failed. Exceeds limit."));
    assert_eq!(result.context.unwrap()["category"], "policy");
}
