//! Payment attributes that validation rejections are tagged with

use crate::core::error::RequestError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed set of payment instruction fields that rules can reject
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentAttribute {
    Iban,
    Bic,
    Country,
    Currency,
    Amount,
    Creditor,
    Debtor,
}

impl PaymentAttribute {
    /// Every attribute, in declaration order
    pub const ALL: [PaymentAttribute; 7] = [
        PaymentAttribute::Iban,
        PaymentAttribute::Bic,
        PaymentAttribute::Country,
        PaymentAttribute::Currency,
        PaymentAttribute::Amount,
        PaymentAttribute::Creditor,
        PaymentAttribute::Debtor,
    ];

    /// Stable wire name of the attribute
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentAttribute::Iban => "iban",
            PaymentAttribute::Bic => "bic",
            PaymentAttribute::Country => "country",
            PaymentAttribute::Currency => "currency",
            PaymentAttribute::Amount => "amount",
            PaymentAttribute::Creditor => "creditor",
            PaymentAttribute::Debtor => "debtor",
        }
    }
}

impl fmt::Display for PaymentAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentAttribute {
    type Err = RequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|attribute| attribute.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| RequestError::UnknownAttribute {
                value: s.to_string(),
            })
    }
}
