//! Account types command - show the rules of each account type

use anyhow::Result;
use bingham_core::{AccountKind, AccountPolicy};
use colored::Colorize;
use serde::Serialize;

use crate::output::{create_table, percent};

#[derive(Serialize)]
struct AccountTypeRow {
    label: &'static str,
    #[serde(flatten)]
    policy: AccountPolicy,
}

fn limit_text(limit: Option<rust_decimal::Decimal>) -> String {
    limit.map(|l| l.to_string()).unwrap_or_else(|| "none".to_string())
}

pub fn run(json: bool) -> Result<()> {
    let rows: Vec<AccountTypeRow> = AccountKind::ALL
        .iter()
        .map(|kind| AccountTypeRow {
            label: kind.label(),
            policy: kind.policy(),
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    println!("{}", "Account Types".bold());
    println!();

    let mut table = create_table();
    table.set_header(vec!["Type", "Deposit bonus", "Deposit limit", "Withdrawal limit"]);

    for row in &rows {
        let bonus = row
            .policy
            .deposit_bonus_rate
            .map(percent)
            .unwrap_or_else(|| "none".to_string());
        let withdrawal = if row.policy.withdrawals_allowed {
            limit_text(row.policy.withdrawal_limit)
        } else {
            "not allowed".to_string()
        };

        table.add_row(vec![
            row.label.to_string(),
            bonus,
            limit_text(row.policy.deposit_limit),
            withdrawal,
        ]);
    }

    println!("{}", table);
    Ok(())
}
