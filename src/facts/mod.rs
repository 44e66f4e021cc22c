//! Concrete validation requests, one per payment attribute
//!
//! Each request type owns its normalized value plus a base
//! [`ValidationRequest`](crate::core::request::ValidationRequest), and fixes
//! the attribute its rejections are tagged with.

pub mod bic;
pub mod iban;
pub mod macros;

pub use bic::BicValidationRequest;
pub use iban::IbanValidationRequest;
