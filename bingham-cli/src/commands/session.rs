//! Session command - interactive signup, login and account screens
//!
//! All state lives in the BankContext for the life of this process.

use anyhow::{bail, Result};
use colored::Colorize;
use dialoguer::{Input, Password, Select};

use bingham_core::services::{parse_amount, AccountForm, LoginForm, SignupForm};
use bingham_core::{AccountKind, BankContext, Error, LogEvent};

use super::get_context;
use crate::output;

const WELCOME_ITEMS: [&str; 3] = ["Login", "Sign Up", "Quit"];

const ACCOUNT_ITEMS: [&str; 6] = [
    "Create Account",
    "Deposit",
    "Withdraw",
    "Change Password",
    "Show Balance",
    "Log Out",
];

pub fn run() -> Result<()> {
    if atty::isnt(atty::Stream::Stdin) {
        bail!("A banking session needs an interactive terminal.");
    }

    let mut ctx = get_context()?;
    ctx.log(LogEvent::new("session_started"));

    println!();
    println!("{}", "WELCOME TO BINGHAM BANK".bold());

    loop {
        println!();
        let choice = Select::new()
            .with_prompt("Choose an option")
            .items(&WELCOME_ITEMS)
            .default(0)
            .interact()?;

        match choice {
            0 => {
                if login(&mut ctx)? {
                    account_screen(&mut ctx)?;
                }
            }
            1 => signup(&mut ctx)?,
            _ => break,
        }
    }

    ctx.log(LogEvent::new("session_ended"));
    Ok(())
}

fn prompt(label: &str) -> Result<String> {
    Ok(Input::<String>::new()
        .with_prompt(label)
        .allow_empty(true)
        .interact_text()?)
}

fn prompt_secret(label: &str) -> Result<String> {
    Ok(Password::new()
        .with_prompt(label)
        .allow_empty_password(true)
        .interact()?)
}

fn signup(ctx: &mut BankContext) -> Result<()> {
    println!();
    println!("{}", "Sign Up".bold());

    let form = SignupForm {
        name: prompt("Name")?,
        age: prompt("Age")?,
        bvn: prompt("BVN")?,
        password: prompt_secret("Password")?,
    };

    let outcome = form
        .parse()
        .and_then(|request| ctx.bank.signup(request).map(|_| ()));
    ctx.log_outcome("signup", &outcome);

    match outcome {
        Ok(()) => output::success("Sign up successful! Please log in to create an account."),
        Err(e) => output::error(&e.to_string()),
    }
    Ok(())
}

/// Returns true when the login succeeded
fn login(ctx: &mut BankContext) -> Result<bool> {
    println!();
    println!("{}", "Login".bold());

    let form = LoginForm {
        name: prompt("Name")?,
        bvn: prompt("Account Number")?,
        password: prompt_secret("Password")?,
    };

    let (bvn, password) = form.credentials();
    let outcome = ctx.bank.login(bvn, password).map(|_| ());
    ctx.log_outcome("login", &outcome);

    match outcome {
        Ok(()) => {
            output::success("Login successful!");
            Ok(true)
        }
        Err(e) => {
            output::error(&e.to_string());
            Ok(false)
        }
    }
}

fn account_screen(ctx: &mut BankContext) -> Result<()> {
    loop {
        println!();
        let choice = Select::new()
            .with_prompt("Account")
            .items(&ACCOUNT_ITEMS)
            .default(0)
            .interact()?;

        match choice {
            0 => create_account(ctx)?,
            1 => deposit(ctx)?,
            2 => withdraw(ctx)?,
            3 => change_password(ctx)?,
            4 => show_balance(ctx),
            _ => {
                ctx.bank.logout();
                ctx.log(LogEvent::new("action_completed").with_action("logout"));
                return Ok(());
            }
        }
    }
}

fn print_balance(ctx: &BankContext) {
    if let Ok(balance) = ctx.bank.balance() {
        output::info(&output::balance_line(&ctx.config.currency_symbol, balance));
    }
}

/// Report the missing account before any amount is asked for
fn require_account(ctx: &BankContext, action: &str) -> bool {
    if ctx.bank.current_account().is_some() {
        return true;
    }
    let outcome: std::result::Result<(), Error> = Err(Error::NoAccount);
    ctx.log_outcome(action, &outcome);
    output::error(&Error::NoAccount.to_string());
    false
}

fn create_account(ctx: &mut BankContext) -> Result<()> {
    let owner = prompt("Owner Name")?;
    let age = prompt("Age")?;

    let labels: Vec<&str> = AccountKind::ALL.iter().map(|k| k.label()).collect();
    let kind_index = Select::new()
        .with_prompt("Account Type")
        .items(&labels)
        .default(0)
        .interact()?;

    let form = AccountForm {
        owner,
        age,
        kind: labels[kind_index].to_string(),
        initial_balance: prompt("Initial Balance")?,
        password: prompt_secret("Password")?,
    };

    let outcome = form
        .parse()
        .and_then(|request| ctx.bank.create_account(request));
    ctx.log_outcome("create_account", &outcome);

    match outcome {
        Ok(created) => {
            if created.replaced {
                ctx.log(
                    LogEvent::new("account_replaced")
                        .with_action("create_account")
                        .with_account_type(created.kind),
                );
            }
            output::success(&created.message());
            print_balance(ctx);
        }
        Err(e) => output::error(&e.to_string()),
    }
    Ok(())
}

fn deposit(ctx: &mut BankContext) -> Result<()> {
    if !require_account(ctx, "deposit") {
        return Ok(());
    }

    let text = prompt("Deposit Amount")?;
    let outcome = parse_amount(&text).and_then(|amount| ctx.bank.deposit(amount).map(|_| amount));
    ctx.log_outcome("deposit", &outcome);

    match outcome {
        Ok(amount) => {
            output::success(&format!(
                "Deposited {}",
                output::money(&ctx.config.currency_symbol, amount)
            ));
            print_balance(ctx);
        }
        Err(e) => output::error(&e.to_string()),
    }
    Ok(())
}

fn withdraw(ctx: &mut BankContext) -> Result<()> {
    if !require_account(ctx, "withdraw") {
        return Ok(());
    }

    let text = prompt("Withdraw Amount")?;
    let outcome = parse_amount(&text).and_then(|amount| ctx.bank.withdraw(amount).map(|_| amount));
    ctx.log_outcome("withdraw", &outcome);

    match outcome {
        Ok(amount) => {
            output::success(&format!(
                "Withdrew {}",
                output::money(&ctx.config.currency_symbol, amount)
            ));
            print_balance(ctx);
        }
        Err(e) => output::error(&e.to_string()),
    }
    Ok(())
}

fn change_password(ctx: &mut BankContext) -> Result<()> {
    if !require_account(ctx, "change_password") {
        return Ok(());
    }

    let old = prompt_secret("Old Password")?;
    let new = prompt_secret("New Password")?;
    let outcome = ctx.bank.change_password(&old, &new);
    ctx.log_outcome("change_password", &outcome);

    match outcome {
        Ok(()) => output::success("Password changed successfully"),
        Err(e) => output::error(&e.to_string()),
    }
    Ok(())
}

fn show_balance(ctx: &BankContext) {
    match ctx.bank.balance() {
        Ok(balance) => output::info(&output::balance_line(&ctx.config.currency_symbol, balance)),
        Err(e) => output::error(&e.to_string()),
    }
}
