//! Core module containing the request types, attributes and errors

pub mod attribute;
pub mod error;
pub mod request;
pub mod validation;

pub use attribute::PaymentAttribute;
pub use error::{ConfigError, FactsError, FactsResult, RequestError};
pub use request::{AttributeRequest, Rejection, RequestReport, ValidationRequest};
