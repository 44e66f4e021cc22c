//! # payment-facts
//!
//! Validation requests ("facts") handed to a payment rule evaluator.
//!
//! ## Features
//!
//! - **Append-only rejections**: rules record outcomes on the request, in order
//! - **Fixed attributes**: each request type tags its rejections with one
//!   payment attribute
//! - **Normalized payloads**: BIC and IBAN values are stored without spaces
//! - **Typed errors**: absent input is an explicit error, never a panic
//! - **Configurable rule sets**: standard BIC and IBAN rules loaded from YAML
//!
//! ## Quick Start
//!
//! ```rust
//! use payment_facts::prelude::*;
//!
//! # fn main() -> FactsResult<()> {
//! let mut request = BicValidationRequest::with_bic("ABCD GB2L XXX")?;
//! assert_eq!(request.bic(), Some("ABCDGB2LXXX"));
//!
//! let rules = RuleSet::bic_defaults(&RulesConfig::default());
//! assert!(rules.evaluate(&mut request));
//!
//! request.reject("BicLengthRule", "BIC must be 8 or 11 characters");
//! assert_eq!(request.rejections()[0].attribute, PaymentAttribute::Bic);
//! assert!(!request.is_valid());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod core;
pub mod facts;
pub mod rules;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        attribute::PaymentAttribute,
        error::{ConfigError, FactsError, FactsResult, RequestError},
        request::{AttributeRequest, Rejection, RequestReport, ValidationRequest},
    };

    // === Facts ===
    pub use crate::facts::{BicValidationRequest, IbanValidationRequest};

    // === Macros ===
    pub use crate::impl_attribute_request;

    // === Rules ===
    pub use crate::rules::{
        BicCountryRule, BicFormatRule, BicLengthRule, BicPresentRule, IbanChecksumRule,
        IbanLengthRule, IbanPresentRule, RuleSet, ValidationRule,
    };

    // === Config ===
    pub use crate::config::{BicRulesConfig, IbanRulesConfig, RulesConfig};
}
