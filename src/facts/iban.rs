//! Validation request carrying an International Bank Account Number

use crate::core::attribute::PaymentAttribute;
use crate::core::error::RequestError;
use crate::core::request::{AttributeRequest, ValidationRequest};
use crate::core::validation::filters::strip_spaces;
use crate::impl_attribute_request;
use serde::Deserialize;

/// A validation request for an IBAN
///
/// IBANs are usually written in groups of four (`GB82 WEST 1234 ...`); the
/// spaces carry no meaning and are removed before the value is stored.
/// Rejections are always tagged with [`PaymentAttribute::Iban`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawIbanRequest")]
pub struct IbanValidationRequest {
    iban: Option<String>,
    request: ValidationRequest,
}

impl_attribute_request!(IbanValidationRequest, PaymentAttribute::Iban, iban);

impl IbanValidationRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_iban<'a>(raw: impl Into<Option<&'a str>>) -> Result<Self, RequestError> {
        let mut request = Self::new();
        request.set_iban(raw)?;
        Ok(request)
    }

    pub fn iban(&self) -> Option<&str> {
        self.iban.as_deref()
    }

    /// Strip spaces from `raw` and store it, replacing any previous IBAN
    pub fn set_iban<'a>(&mut self, raw: impl Into<Option<&'a str>>) -> Result<(), RequestError> {
        let raw = raw.into().ok_or(RequestError::MissingValue {
            attribute: Self::ATTRIBUTE,
        })?;
        self.iban = Some(strip_spaces(raw));
        Ok(())
    }
}

#[derive(Deserialize)]
struct RawIbanRequest {
    iban: Option<String>,
}

impl TryFrom<RawIbanRequest> for IbanValidationRequest {
    type Error = RequestError;

    fn try_from(raw: RawIbanRequest) -> Result<Self, Self::Error> {
        Self::with_iban(raw.iban.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::request::RequestReport;

    #[test]
    fn test_with_iban_strips_group_spaces() {
        let request = IbanValidationRequest::with_iban("GB82 WEST 1234 5698 7654 32")
            .expect("IBAN is present");
        assert_eq!(request.iban(), Some("GB82WEST12345698765432"));
    }

    #[test]
    fn test_set_iban_none_fails() {
        let mut request = IbanValidationRequest::new();
        assert_eq!(
            request.set_iban(None),
            Err(RequestError::MissingValue {
                attribute: PaymentAttribute::Iban
            })
        );
        assert_eq!(request.iban(), None);
    }

    #[test]
    fn test_reject_is_tagged_iban() {
        let mut request = IbanValidationRequest::new();
        request.reject("IbanChecksumRule", "check digits are incorrect");
        assert_eq!(request.rejections()[0].attribute, PaymentAttribute::Iban);
    }

    #[test]
    fn test_deserialize_missing_iban_fails() {
        assert!(serde_json::from_str::<IbanValidationRequest>("{}").is_err());
    }

    #[test]
    fn test_report_round_trip() {
        let mut request = IbanValidationRequest::with_iban("GB82 WEST 1234 5698 7654 33")
            .expect("IBAN is present");
        request.reject("IbanChecksumRule", "IBAN check digits are incorrect");
        let report = request.report();

        let json = serde_json::to_string(&report).expect("serialize should succeed");
        let back: RequestReport = serde_json::from_str(&json).expect("deserialize should succeed");

        assert_eq!(back, report);
        assert_eq!(back.attribute, PaymentAttribute::Iban);
        assert_eq!(back.value.as_deref(), Some("GB82WEST12345698765433"));
        assert_eq!(back.rejections.len(), 1);
    }
}
