//! Output formatting utilities

use colored::Colorize;
use comfy_table::{presets::UTF8_FULL_CONDENSED, ContentArrangement, Table};
use rust_decimal::Decimal;

/// Print a success message
pub fn success(msg: &str) {
    println!("{}", msg.green());
}

/// Print an error message
pub fn error(msg: &str) {
    eprintln!("{}", msg.red());
}

/// Print an info message
pub fn info(msg: &str) {
    println!("{}", msg.cyan());
}

/// Create a styled table
pub fn create_table() -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Balance line shown after every change, two decimal places
pub fn balance_line(symbol: &str, balance: Decimal) -> String {
    format!("Balance: {}{:.2}", symbol, balance)
}

/// Amount as entered, for deposit and withdrawal confirmations
pub fn money(symbol: &str, amount: Decimal) -> String {
    format!("{}{}", symbol, amount.normalize())
}

/// Rate as a percentage, e.g. 0.005 -> "0.5%"
pub fn percent(rate: Decimal) -> String {
    format!("{}%", (rate * Decimal::ONE_HUNDRED).normalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balance_line_has_two_places() {
        assert_eq!(balance_line("$", Decimal::new(1005, 0)), "Balance: $1005.00");
        assert_eq!(balance_line("$", Decimal::new(3349665, 5)), "Balance: $33.50");
    }

    #[test]
    fn test_money_and_percent() {
        assert_eq!(money("$", Decimal::new(12500, 2)), "$125");
        assert_eq!(percent(Decimal::new(7, 3)), "0.7%");
    }
}
