//! Standard IBAN rules

use super::{ValidationRule, reject_if_invalid};
use crate::core::request::AttributeRequest;
use crate::core::validation::validators::{FieldCheck, iban_checksum, length_between};
use crate::facts::IbanValidationRequest;

const FIELD: &str = "IBAN";

pub struct IbanPresentRule;

impl ValidationRule<IbanValidationRequest> for IbanPresentRule {
    fn name(&self) -> &str {
        "IbanPresentRule"
    }

    fn evaluate(&self, request: &mut IbanValidationRequest) {
        if request.iban().is_none() {
            request.reject(self.name(), "IBAN is required");
        }
    }
}

pub struct IbanLengthRule {
    check: FieldCheck,
}

impl IbanLengthRule {
    pub fn new(min_length: usize, max_length: usize) -> Self {
        Self {
            check: Box::new(length_between(min_length, max_length)),
        }
    }
}

impl Default for IbanLengthRule {
    fn default() -> Self {
        Self::new(15, 34)
    }
}

impl ValidationRule<IbanValidationRequest> for IbanLengthRule {
    fn name(&self) -> &str {
        "IbanLengthRule"
    }

    fn evaluate(&self, request: &mut IbanValidationRequest) {
        reject_if_invalid(request, self.name(), IbanValidationRequest::iban, |iban| {
            (self.check)(FIELD, iban)
        });
    }
}

/// ISO 13616 check digit verification (mod 97)
pub struct IbanChecksumRule {
    check: FieldCheck,
}

impl IbanChecksumRule {
    pub fn new() -> Self {
        Self {
            check: Box::new(iban_checksum()),
        }
    }
}

impl Default for IbanChecksumRule {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidationRule<IbanValidationRequest> for IbanChecksumRule {
    fn name(&self) -> &str {
        "IbanChecksumRule"
    }

    fn evaluate(&self, request: &mut IbanValidationRequest) {
        reject_if_invalid(request, self.name(), IbanValidationRequest::iban, |iban| {
            (self.check)(FIELD, iban)
        });
    }
}
