//! The transaction record as delivered by the remote API.

use std::fmt;

use rust_decimal::Decimal;
use serde::Deserialize;
use serde::Deserializer;
use serde_json::Value;

use crate::tx_date::TxDate;

/// The identifier of a transaction. The API sends either a number or a string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum TransactionId {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => write!(f, "{}", s),
        }
    }
}

/// The kind of money movement. Matched on the exact wire string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, strum::EnumIs)]
pub enum TransactionType {
    CashIn,
    CashOut,
    Utility,
    Payment,
    /// Any type this client does not know about, kept verbatim.
    Unknown(String),
}

impl Default for TransactionType {
    fn default() -> Self {
        Self::Unknown(String::new())
    }
}

impl TransactionType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::CashIn => "cash_in",
            Self::CashOut => "cash_out",
            Self::Utility => "utility",
            Self::Payment => "payment",
            Self::Unknown(s) => s,
        }
    }
}

impl From<String> for TransactionType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "cash_in" => Self::CashIn,
            "cash_out" => Self::CashOut,
            "utility" => Self::Utility,
            "payment" => Self::Payment,
            _ => Self::Unknown(s),
        }
    }
}

/// The outcome of a transaction. Matched case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Hash, strum::EnumIs)]
pub enum TransactionStatus {
    Success,
    Failed,
    Pending,
    Unknown(String),
}

impl TransactionStatus {
    pub fn parse(s: &str) -> Self {
        if s.eq_ignore_ascii_case("success") {
            Self::Success
        } else if s.eq_ignore_ascii_case("failed") {
            Self::Failed
        } else if s.eq_ignore_ascii_case("pending") {
            Self::Pending
        } else {
            Self::Unknown(s.to_string())
        }
    }
}

/// A transaction status together with the text it was decoded from.
///
/// The text is kept because the status label shows the API's own casing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Status {
    kind: TransactionStatus,
    text: String,
}

impl Status {
    pub fn kind(&self) -> &TransactionStatus {
        &self.kind
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl Default for Status {
    fn default() -> Self {
        Self::from(String::new())
    }
}

impl From<String> for Status {
    fn from(text: String) -> Self {
        Self {
            kind: TransactionStatus::parse(&text),
            text,
        }
    }
}

impl From<&str> for Status {
    fn from(text: &str) -> Self {
        Self::from(text.to_string())
    }
}

/// Decodes a text field, falling back to the default for `null` or any
/// non-string value.
fn text_or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: From<String> + Default,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => T::from(s),
        _ => T::default(),
    })
}

fn amount_or_zero<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// A single recorded money movement.
///
/// Every field except `id` tolerates being absent, `null` or of the wrong
/// JSON type, so that one incomplete row does not fail decoding of the list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,
    #[serde(default)]
    pub date: TxDate,
    /// Non-negative magnitude. The direction comes from `kind`.
    #[serde(default, deserialize_with = "amount_or_zero")]
    pub amount: Decimal,
    #[serde(default, deserialize_with = "text_or_default")]
    pub currency: String,
    #[serde(rename = "type", default, deserialize_with = "text_or_default")]
    pub kind: TransactionType,
    #[serde(default, deserialize_with = "text_or_default")]
    pub status: Status,
    #[serde(default, deserialize_with = "text_or_default")]
    pub recipient: String,
}

impl Transaction {
    /// The contribution of this transaction to the running balance.
    pub fn signed_amount(&self) -> Decimal {
        match self.kind {
            TransactionType::CashIn => self.amount,
            TransactionType::CashOut => -self.amount,
            _ => Decimal::ZERO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_full_record() {
        let tx: Transaction = serde_json::from_value(json!({
            "id": 7,
            "date": "2024-02-01",
            "amount": 200.5,
            "currency": "USD",
            "type": "cash_out",
            "status": "Pending",
            "recipient": "Bob"
        }))
        .unwrap();

        assert_eq!(tx.id.to_string(), "7");
        assert_eq!(tx.date.to_day_month_year(), "01 Feb 2024");
        assert_eq!(tx.amount, Decimal::new(2005, 1));
        assert_eq!(tx.kind, TransactionType::CashOut);
        assert_eq!(tx.status.kind(), &TransactionStatus::Pending);
        assert_eq!(tx.status.as_str(), "Pending");
        assert_eq!(tx.recipient, "Bob");
    }

    #[test]
    fn string_ids_and_amounts_are_accepted() {
        let tx: Transaction = serde_json::from_value(json!({
            "id": "tx-42",
            "date": "2024-02-01",
            "amount": "12.30",
            "currency": "EUR",
            "type": "payment",
            "status": "success",
            "recipient": "Shop"
        }))
        .unwrap();

        assert_eq!(tx.id, TransactionId::Text("tx-42".to_string()));
        assert_eq!(tx.amount, Decimal::new(1230, 2));
    }

    #[test]
    fn type_matching_is_exact() {
        assert_eq!(TransactionType::from("cash_in".to_string()), TransactionType::CashIn);
        assert_eq!(
            TransactionType::from("Cash_In".to_string()),
            TransactionType::Unknown("Cash_In".to_string())
        );
        assert_eq!(TransactionType::from("refund".to_string()).as_str(), "refund");
    }

    #[test]
    fn status_matching_ignores_case() {
        for text in ["success", "SUCCESS", "Success"] {
            assert!(Status::from(text).kind().is_success());
        }
        assert!(Status::from("FaIlEd").kind().is_failed());
        assert_eq!(
            Status::from("reversed").kind(),
            &TransactionStatus::Unknown("reversed".to_string())
        );
    }

    #[test]
    fn missing_fields_degrade_instead_of_failing() {
        let tx: Transaction = serde_json::from_value(json!({ "id": 1 })).unwrap();
        assert!(matches!(tx.date, TxDate::Invalid(_)));
        assert_eq!(tx.amount, Decimal::ZERO);
        assert!(tx.kind.is_unknown());
        assert!(tx.status.kind().is_unknown());
    }

    #[test]
    fn null_fields_degrade_instead_of_failing() {
        let tx: Transaction = serde_json::from_value(json!({
            "id": 2,
            "date": null,
            "amount": null,
            "currency": null,
            "type": null,
            "status": null,
            "recipient": null
        }))
        .unwrap();
        assert!(matches!(tx.date, TxDate::Invalid(_)));
        assert_eq!(tx.amount, Decimal::ZERO);
        assert_eq!(tx.currency, "");
        assert!(tx.kind.is_unknown());
        assert!(tx.status.kind().is_unknown());
        assert_eq!(tx.recipient, "");
    }

    #[test]
    fn wrongly_typed_fields_degrade_instead_of_failing() {
        let tx: Transaction = serde_json::from_value(json!({
            "id": 3,
            "date": 1706745600000i64,
            "amount": "lots",
            "currency": 840,
            "type": ["cash_in"],
            "status": true,
            "recipient": {"name": "Alice"}
        }))
        .unwrap();
        assert_eq!(tx.date.to_day_month_year(), "01 Feb 2024");
        assert_eq!(tx.amount, Decimal::ZERO);
        assert_eq!(tx.currency, "");
        assert!(tx.kind.is_unknown());
        assert!(tx.status.kind().is_unknown());
        assert_eq!(tx.recipient, "");
    }

    #[test]
    fn only_cash_in_and_cash_out_move_the_balance() {
        let mut tx: Transaction = serde_json::from_value(json!({
            "id": 1, "amount": 10, "type": "cash_in"
        }))
        .unwrap();
        assert_eq!(tx.signed_amount(), Decimal::from(10));

        tx.kind = TransactionType::CashOut;
        assert_eq!(tx.signed_amount(), Decimal::from(-10));

        tx.kind = TransactionType::Utility;
        assert_eq!(tx.signed_amount(), Decimal::ZERO);
    }
}
