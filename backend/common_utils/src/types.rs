use serde::{Deserialize, Serialize};

/// Amount in the smallest currency unit (cents for the currencies the
/// supported providers settle in).
#[derive(
    Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize,
)]
pub struct MinorUnit(i64);

impl MinorUnit {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn get_amount_as_i64(self) -> i64 {
        self.0
    }

    /// Renders the amount as a base-unit decimal string ("1050" -> "10.50")
    /// for providers that take major-unit amounts. Assumes a two-exponent
    /// currency, which holds for every currency the connectors accept.
    pub fn to_major_unit_string(self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        format!("{sign}{}.{:02}", abs / 100, abs % 100)
    }
}
