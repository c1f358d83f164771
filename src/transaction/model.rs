use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Transfer amount exactly as the caller submitted it.
///
/// Clients may post numbers or numeric strings. The raw JSON value is kept so
/// that block hashes cover what was actually submitted; `value()` gives the
/// integer used for balances, with anything unparseable counting as zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(Value);

impl Amount {
    pub fn raw(&self) -> &Value {
        &self.0
    }

    /// Integer value of the amount (leading-integer parse, `0` on garbage).
    pub fn value(&self) -> i64 {
        match &self.0 {
            Value::Number(n) => n
                .as_i64()
                .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64))
                .unwrap_or(0),
            Value::String(s) => parse_leading_int(s),
            _ => 0,
        }
    }
}

impl From<i64> for Amount {
    fn from(v: i64) -> Self {
        Amount(Value::from(v))
    }
}

impl From<&str> for Amount {
    fn from(v: &str) -> Self {
        Amount(Value::from(v))
    }
}

impl From<Value> for Amount {
    fn from(v: Value) -> Self {
        Amount(v)
    }
}

/// "  42abc" -> 42, "-7" -> -7, "abc" -> 0
fn parse_leading_int(s: &str) -> i64 {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut out: i64 = 0;
    for c in digits.chars() {
        let Some(d) = c.to_digit(10) else { break };
        out = out.saturating_mul(10).saturating_add(i64::from(d));
    }
    if negative { -out } else { out }
}

/// A transfer intent. `from == None` is a coinbase credit (no debited source).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub from: Option<String>,
    pub to: String,
    pub amount: Amount,
}

impl Transaction {
    pub fn new(from: Option<String>, to: impl Into<String>, amount: impl Into<Amount>) -> Self {
        Self {
            from,
            to: to.into(),
            amount: amount.into(),
        }
    }

    /// Transfer between two addresses.
    pub fn transfer(from: impl Into<String>, to: impl Into<String>, amount: impl Into<Amount>) -> Self {
        Self::new(Some(from.into()), to, amount)
    }

    /// Credit with no source (genesis allocation or miner reward).
    pub fn coinbase(to: impl Into<String>, amount: i64) -> Self {
        Self::new(None, to, amount)
    }

    pub fn is_coinbase(&self) -> bool {
        self.from.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::{Amount, Transaction};
    use serde_json::json;

    #[test]
    fn coinbase_serializes_with_null_source() {
        let tx = Transaction::coinbase("Bob", 1000);
        let s = serde_json::to_string(&tx).unwrap();
        assert_eq!(s, r#"{"from":null,"to":"Bob","amount":1000}"#);
        assert!(tx.is_coinbase());
    }

    #[test]
    fn string_amounts_are_kept_raw_but_parse_as_integers() {
        let tx: Transaction =
            serde_json::from_value(json!({"from": "Bob", "to": "Alice", "amount": "200"})).unwrap();
        assert_eq!(tx.amount.raw(), &json!("200"));
        assert_eq!(tx.amount.value(), 200);
        assert_eq!(
            serde_json::to_string(&tx).unwrap(),
            r#"{"from":"Bob","to":"Alice","amount":"200"}"#
        );
    }

    #[test]
    fn malformed_amounts_count_as_zero() {
        assert_eq!(Amount::from("abc").value(), 0);
        assert_eq!(Amount::from("").value(), 0);
        assert_eq!(Amount::from(json!(null)).value(), 0);
        assert_eq!(Amount::from(json!(true)).value(), 0);
        assert_eq!(Amount::from(json!([1, 2])).value(), 0);
    }

    #[test]
    fn leading_integer_parse() {
        assert_eq!(Amount::from(" 42abc").value(), 42);
        assert_eq!(Amount::from("-7").value(), -7);
        assert_eq!(Amount::from("12.9").value(), 12);
        assert_eq!(Amount::from(json!(12.9)).value(), 12);
    }
}
