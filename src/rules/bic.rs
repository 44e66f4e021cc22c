//! Standard BIC rules
//!
//! A BIC (ISO 9362) is a 4-letter institution code, a 2-letter country
//! code, a 2-character location code and an optional 3-character branch
//! code.

use super::{ValidationRule, reject_if_invalid};
use crate::core::request::AttributeRequest;
use crate::core::validation::validators::{
    FieldCheck, bic_pattern, in_list, length_one_of, matches,
};
use crate::facts::BicValidationRequest;

const FIELD: &str = "BIC";

/// Rejects a request whose BIC was never set
pub struct BicPresentRule;

impl ValidationRule<BicValidationRequest> for BicPresentRule {
    fn name(&self) -> &str {
        "BicPresentRule"
    }

    fn evaluate(&self, request: &mut BicValidationRequest) {
        if request.bic().is_none() {
            request.reject(self.name(), "BIC is required");
        }
    }
}

/// Rejects a BIC whose length is not one of the allowed lengths
pub struct BicLengthRule {
    check: FieldCheck,
}

impl BicLengthRule {
    pub fn new(allowed_lengths: Vec<usize>) -> Self {
        Self {
            check: Box::new(length_one_of(allowed_lengths)),
        }
    }
}

impl Default for BicLengthRule {
    fn default() -> Self {
        Self::new(vec![8, 11])
    }
}

impl ValidationRule<BicValidationRequest> for BicLengthRule {
    fn name(&self) -> &str {
        "BicLengthRule"
    }

    fn evaluate(&self, request: &mut BicValidationRequest) {
        reject_if_invalid(request, self.name(), BicValidationRequest::bic, |bic| {
            (self.check)(FIELD, bic)
        });
    }
}

/// Rejects a BIC that does not follow the ISO 9362 layout
pub struct BicFormatRule {
    check: FieldCheck,
}

impl BicFormatRule {
    pub fn new() -> Self {
        Self {
            check: Box::new(matches(
                bic_pattern(),
                "4 letters, a 2-letter country code, 2 letters or digits \
                 and an optional 3-character branch code",
            )),
        }
    }
}

impl Default for BicFormatRule {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidationRule<BicValidationRequest> for BicFormatRule {
    fn name(&self) -> &str {
        "BicFormatRule"
    }

    fn evaluate(&self, request: &mut BicValidationRequest) {
        reject_if_invalid(request, self.name(), BicValidationRequest::bic, |bic| {
            (self.check)(FIELD, bic)
        });
    }
}

/// Rejects a BIC whose country code is outside an allow-list
///
/// BICs too short to carry a country code are left to [`BicLengthRule`].
pub struct BicCountryRule {
    check: FieldCheck,
}

impl BicCountryRule {
    pub fn new(allowed_countries: Vec<String>) -> Self {
        Self {
            check: Box::new(in_list(allowed_countries)),
        }
    }
}

impl ValidationRule<BicValidationRequest> for BicCountryRule {
    fn name(&self) -> &str {
        "BicCountryRule"
    }

    fn evaluate(&self, request: &mut BicValidationRequest) {
        reject_if_invalid(request, self.name(), BicValidationRequest::bic, |bic| {
            match bic.get(4..6) {
                Some(country) => (self.check)("BIC country", country),
                None => Ok(()),
            }
        });
    }
}
