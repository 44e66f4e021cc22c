//! Validation request carrying a Bank Identifier Code

use crate::core::attribute::PaymentAttribute;
use crate::core::error::RequestError;
use crate::core::request::{AttributeRequest, ValidationRequest};
use crate::core::validation::filters::strip_spaces;
use crate::impl_attribute_request;
use serde::Deserialize;

/// A validation request for a BIC
///
/// The BIC is stored with every space removed, whichever way it was set.
/// Rejections recorded through [`AttributeRequest::reject`] are always
/// tagged with [`PaymentAttribute::Bic`].
///
/// Deserializing reads `{"bic": "..."}` through [`set_bic`](Self::set_bic)
/// and requires a non-null `bic`. Outcomes are serialized through
/// [`AttributeRequest::report`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawBicRequest")]
pub struct BicValidationRequest {
    bic: Option<String>,
    request: ValidationRequest,
}

impl_attribute_request!(BicValidationRequest, PaymentAttribute::Bic, bic);

impl BicValidationRequest {
    /// Create a request with no BIC and no rejections
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a request from a raw BIC, normalized as by [`set_bic`](Self::set_bic)
    pub fn with_bic<'a>(raw: impl Into<Option<&'a str>>) -> Result<Self, RequestError> {
        let mut request = Self::new();
        request.set_bic(raw)?;
        Ok(request)
    }

    /// The normalized BIC, if one was set
    pub fn bic(&self) -> Option<&str> {
        self.bic.as_deref()
    }

    /// Strip spaces from `raw` and store it, replacing any previous BIC
    ///
    /// Fails without touching the request when `raw` is absent. Rejections
    /// recorded earlier are left as they are.
    pub fn set_bic<'a>(&mut self, raw: impl Into<Option<&'a str>>) -> Result<(), RequestError> {
        let raw = raw.into().ok_or(RequestError::MissingValue {
            attribute: Self::ATTRIBUTE,
        })?;
        self.bic = Some(strip_spaces(raw));
        Ok(())
    }
}

#[derive(Deserialize)]
struct RawBicRequest {
    bic: Option<String>,
}

impl TryFrom<RawBicRequest> for BicValidationRequest {
    type Error = RequestError;

    fn try_from(raw: RawBicRequest) -> Result<Self, Self::Error> {
        Self::with_bic(raw.bic.as_deref())
    }
}
