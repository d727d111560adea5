//! Turns transactions and summary figures into display-ready strings.
//!
//! Everything here is pure. The UI layer only decides where these strings go.

use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy;

use crate::summary::Summary;
use crate::transaction::Transaction;
use crate::transaction::TransactionStatus;
use crate::transaction::TransactionType;

/// Shown in place of the latest recipient when the list is empty.
pub const NO_TRANSACTIONS: &str = "No transactions";
/// Shown in place of the latest date when the list is empty.
pub const NO_DATE: &str = "---";

const MAX_FRACTION_DIGITS: u32 = 3;

/// Formats a number with en-US digit grouping.
///
/// At most three fraction digits are kept, rounded half away from zero, and
/// trailing zeros are dropped: `1234567.8912` becomes `1,234,567.891`.
pub fn format_grouped(value: Decimal) -> String {
    let rounded = value
        .round_dp_with_strategy(MAX_FRACTION_DIGITS, RoundingStrategy::MidpointAwayFromZero)
        .normalize();

    let digits = rounded.abs().to_string();
    let (whole, fraction) = match digits.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (digits.as_str(), None),
    };

    let mut out = String::new();
    if rounded.is_sign_negative() && !rounded.is_zero() {
        out.push('-');
    }
    out.push_str(&group_thousands(whole));
    if let Some(fraction) = fraction {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Formats an amount followed by its currency code, e.g. `1,500 USD`.
pub fn format_money(value: Decimal, currency: &str) -> String {
    format!("{} {}", format_grouped(value), currency)
}

/// Uppercases the first character and leaves the rest alone.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// The color a status label is drawn in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumIs)]
pub enum StatusColor {
    Green,
    Red,
    Amber,
    Grey,
}

impl StatusColor {
    pub fn hex(&self) -> &'static str {
        match self {
            Self::Green => "#41BC3F",
            Self::Red => "#DC2626",
            Self::Amber => "#F59E0B",
            Self::Grey => "#6B7280",
        }
    }
}

impl From<&TransactionStatus> for StatusColor {
    fn from(status: &TransactionStatus) -> Self {
        match status {
            TransactionStatus::Success => Self::Green,
            TransactionStatus::Failed => Self::Red,
            TransactionStatus::Pending => Self::Amber,
            TransactionStatus::Unknown(_) => Self::Grey,
        }
    }
}

/// The icon shown next to a recipient, keyed by transaction type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeIcon {
    Wallet,
    MoneyBill,
    Bolt,
    CreditCard,
}

impl TypeIcon {
    /// Unknown types have no icon.
    pub fn for_type(kind: &TransactionType) -> Option<Self> {
        match kind {
            TransactionType::CashOut => Some(Self::Wallet),
            TransactionType::CashIn => Some(Self::MoneyBill),
            TransactionType::Utility => Some(Self::Bolt),
            TransactionType::Payment => Some(Self::CreditCard),
            TransactionType::Unknown(_) => None,
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Wallet => "👛",
            Self::MoneyBill => "💵",
            Self::Bolt => "⚡",
            Self::CreditCard => "💳",
        }
    }

    /// Accessible name for the icon.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Wallet => "wallet",
            Self::MoneyBill => "money bill",
            Self::Bolt => "bolt",
            Self::CreditCard => "credit card",
        }
    }
}

/// One row of the transaction list, fully formatted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionView {
    /// Stable list key, the transaction id.
    pub key: String,
    pub recipient: String,
    pub date: String,
    pub amount: String,
    pub status_label: String,
    pub status_color: StatusColor,
    pub icon: Option<TypeIcon>,
}

impl From<&Transaction> for TransactionView {
    fn from(tx: &Transaction) -> Self {
        Self {
            key: tx.id.to_string(),
            recipient: tx.recipient.clone(),
            date: tx.date.to_day_month_year(),
            amount: format_money(tx.amount, &tx.currency),
            status_label: capitalize_first(tx.status.as_str()),
            status_color: StatusColor::from(tx.status.kind()),
            icon: TypeIcon::for_type(&tx.kind),
        }
    }
}

/// The three summary cards, fully formatted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryView {
    pub total_count: String,
    pub balance: String,
    pub latest_recipient: String,
    pub latest_date: String,
}

impl From<&Summary<'_>> for SummaryView {
    fn from(summary: &Summary<'_>) -> Self {
        let (latest_recipient, latest_date) = match summary.latest {
            Some(tx) => (tx.recipient.clone(), tx.date.to_short_date()),
            None => (NO_TRANSACTIONS.to_string(), NO_DATE.to_string()),
        };

        Self {
            total_count: summary.count.to_string(),
            balance: format_money(summary.total_balance, summary.display_currency()),
            latest_recipient,
            latest_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tx(value: serde_json::Value) -> Transaction {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn groups_thousands() {
        assert_eq!(format_grouped(Decimal::from(0)), "0");
        assert_eq!(format_grouped(Decimal::from(999)), "999");
        assert_eq!(format_grouped(Decimal::from(1000)), "1,000");
        assert_eq!(format_grouped(Decimal::from(1234567)), "1,234,567");
        assert_eq!(format_grouped(Decimal::from(-1234567)), "-1,234,567");
    }

    #[test]
    fn keeps_at_most_three_fraction_digits() {
        assert_eq!(format_grouped(Decimal::new(12345, 1)), "1,234.5");
        assert_eq!(format_grouped(Decimal::new(12345678912, 4)), "1,234,567.891");
        assert_eq!(format_grouped(Decimal::new(10005, 4)), "1.001");
        assert_eq!(format_grouped(Decimal::new(150, 2)), "1.5");
        assert_eq!(format_grouped(Decimal::new(-4, 4)), "0");
    }

    #[test]
    fn money_appends_currency_code() {
        assert_eq!(format_money(Decimal::from(1500), "USD"), "1,500 USD");
    }

    #[test]
    fn capitalizes_only_the_first_letter() {
        assert_eq!(capitalize_first("success"), "Success");
        assert_eq!(capitalize_first("pENDING"), "PENDING");
        assert_eq!(capitalize_first("FAILED"), "FAILED");
        assert_eq!(capitalize_first(""), "");
    }

    #[test]
    fn status_colors() {
        let color = |s: &str| StatusColor::from(&TransactionStatus::parse(s));
        assert_eq!(color("SUCCESS").hex(), "#41BC3F");
        assert_eq!(color("failed").hex(), "#DC2626");
        assert_eq!(color("Pending").hex(), "#F59E0B");
        assert_eq!(color("chargeback").hex(), "#6B7280");
    }

    #[test]
    fn type_icons_and_unknown_types() {
        let icon = |s: &str| TypeIcon::for_type(&TransactionType::from(s.to_string()));
        assert_eq!(icon("cash_out"), Some(TypeIcon::Wallet));
        assert_eq!(icon("cash_in"), Some(TypeIcon::MoneyBill));
        assert_eq!(icon("utility"), Some(TypeIcon::Bolt));
        assert_eq!(icon("payment"), Some(TypeIcon::CreditCard));
        assert_eq!(icon("other"), None);
        assert_eq!(icon("PAYMENT"), None);
    }

    #[test]
    fn row_view() {
        let view = TransactionView::from(&tx(json!({
            "id": 12,
            "date": "2024-02-01T09:15:00Z",
            "amount": 2500.75,
            "currency": "KES",
            "type": "utility",
            "status": "pending",
            "recipient": "Power Co"
        })));

        assert_eq!(
            view,
            TransactionView {
                key: "12".to_string(),
                recipient: "Power Co".to_string(),
                date: "01 Feb 2024".to_string(),
                amount: "2,500.75 KES".to_string(),
                status_label: "Pending".to_string(),
                status_color: StatusColor::Amber,
                icon: Some(TypeIcon::Bolt),
            }
        );
    }

    #[test]
    fn empty_summary_view_uses_placeholders() {
        let view = SummaryView::from(&Summary::of(&[]));
        assert_eq!(view.total_count, "0");
        assert_eq!(view.balance, "0 USD");
        assert_eq!(view.latest_recipient, "No transactions");
        assert_eq!(view.latest_date, "---");
    }

    #[test]
    fn summary_view_uses_latest_transaction() {
        let list = vec![
            tx(json!({"id": 2, "date": "2024-02-01", "amount": 200, "currency": "USD",
                      "type": "cash_out", "status": "pending", "recipient": "Bob"})),
            tx(json!({"id": 1, "date": "2024-01-01", "amount": 1500, "currency": "USD",
                      "type": "cash_in", "status": "success", "recipient": "Alice"})),
        ];
        let view = SummaryView::from(&Summary::of(&list));
        assert_eq!(view.total_count, "2");
        assert_eq!(view.balance, "1,300 USD");
        assert_eq!(view.latest_recipient, "Bob");
        assert_eq!(view.latest_date, "2/1/2024");
    }
}
