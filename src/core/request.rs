//! Validation requests and the rejections recorded against them
//!
//! A [`ValidationRequest`] is the base carrier handed to a rule evaluator.
//! It starts with no rejections; every failing rule appends one
//! [`Rejection`] through [`ValidationRequest::reject`]. Rejections are never
//! removed or rewritten, and the request is valid iff none were recorded.
//!
//! Concrete request types (see [`crate::facts`]) embed a `ValidationRequest`
//! and implement [`AttributeRequest`], which fixes the [`PaymentAttribute`]
//! their two-argument `reject` tags rejections with.

use crate::core::attribute::PaymentAttribute;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A named rule's verdict that one attribute of a request is invalid
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rejection {
    /// Name of the rule that rejected the request
    pub rule_name: String,

    /// Human-readable explanation
    pub message: String,

    /// Payment attribute the rejection pertains to
    pub attribute: PaymentAttribute,
}

impl Rejection {
    pub fn new(
        rule_name: impl Into<String>,
        message: impl Into<String>,
        attribute: PaymentAttribute,
    ) -> Self {
        Self {
            rule_name: rule_name.into(),
            message: message.into(),
            attribute,
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.attribute, self.rule_name, self.message)
    }
}

/// Base validation request: an append-only, ordered list of rejections
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationRequest {
    rejections: Vec<Rejection>,
}

impl ValidationRequest {
    /// Create a request with no rejections
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `rule_name` rejected this request for `attribute`
    ///
    /// Always succeeds. Identical rejections are recorded as many times as
    /// they are reported.
    pub fn reject(
        &mut self,
        rule_name: impl Into<String>,
        message: impl Into<String>,
        attribute: PaymentAttribute,
    ) {
        let rejection = Rejection::new(rule_name, message, attribute);
        tracing::debug!(
            rule = %rejection.rule_name,
            attribute = %rejection.attribute,
            message = %rejection.message,
            "Validation request rejected"
        );
        self.rejections.push(rejection);
    }

    /// All rejections, in the order they were recorded
    pub fn rejections(&self) -> &[Rejection] {
        &self.rejections
    }

    pub fn rejection_count(&self) -> usize {
        self.rejections.len()
    }

    pub fn has_rejections(&self) -> bool {
        !self.rejections.is_empty()
    }

    /// A request is valid iff no rule rejected it
    pub fn is_valid(&self) -> bool {
        self.rejections.is_empty()
    }

    /// Rejections tagged with `attribute`, in recording order
    pub fn rejections_for(
        &self,
        attribute: PaymentAttribute,
    ) -> impl Iterator<Item = &Rejection> + '_ {
        self.rejections
            .iter()
            .filter(move |r| r.attribute == attribute)
    }

    /// Rejections grouped by attribute
    ///
    /// Keys appear in the order their first rejection was recorded.
    pub fn rejections_by_attribute(&self) -> IndexMap<PaymentAttribute, Vec<&Rejection>> {
        let mut grouped: IndexMap<PaymentAttribute, Vec<&Rejection>> = IndexMap::new();
        for rejection in &self.rejections {
            grouped.entry(rejection.attribute).or_default().push(rejection);
        }
        grouped
    }

    pub fn into_rejections(self) -> Vec<Rejection> {
        self.rejections
    }
}

/// A validation request whose rejections always concern one fixed attribute
///
/// Implementors only provide access to their embedded [`ValidationRequest`];
/// the two-argument [`reject`](AttributeRequest::reject) is derived from
/// [`ATTRIBUTE`](AttributeRequest::ATTRIBUTE), so a rejection can never be
/// attributed to another field through this trait. Use
/// [`impl_attribute_request!`](crate::impl_attribute_request) to generate
/// the implementation.
pub trait AttributeRequest {
    /// The attribute every rejection recorded through this type is tagged with
    const ATTRIBUTE: PaymentAttribute;

    fn request(&self) -> &ValidationRequest;

    fn request_mut(&mut self) -> &mut ValidationRequest;

    /// The normalized value under validation, if one was set
    fn value(&self) -> Option<&str>;

    /// Record a rejection against [`Self::ATTRIBUTE`]
    fn reject(&mut self, rule_name: impl Into<String>, message: impl Into<String>) {
        self.request_mut().reject(rule_name, message, Self::ATTRIBUTE);
    }

    fn rejections(&self) -> &[Rejection] {
        self.request().rejections()
    }

    fn has_rejections(&self) -> bool {
        self.request().has_rejections()
    }

    fn is_valid(&self) -> bool {
        self.request().is_valid()
    }

    /// Snapshot of the value and its rejections for reporting
    fn report(&self) -> RequestReport {
        RequestReport {
            attribute: Self::ATTRIBUTE,
            value: self.value().map(str::to_string),
            rejections: self.rejections().to_vec(),
        }
    }
}

/// Serializable outcome of validating one request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestReport {
    pub attribute: PaymentAttribute,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    #[serde(default)]
    pub rejections: Vec<Rejection>,
}

impl RequestReport {
    pub fn is_valid(&self) -> bool {
        self.rejections.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct CurrencyRequest {
        currency: Option<String>,
        request: ValidationRequest,
    }

    impl AttributeRequest for CurrencyRequest {
        const ATTRIBUTE: PaymentAttribute = PaymentAttribute::Currency;

        fn request(&self) -> &ValidationRequest {
            &self.request
        }

        fn request_mut(&mut self) -> &mut ValidationRequest {
            &mut self.request
        }

        fn value(&self) -> Option<&str> {
            self.currency.as_deref()
        }
    }

    #[test]
    fn test_new_request_is_valid() {
        let request = ValidationRequest::new();
        assert!(request.is_valid());
        assert!(!request.has_rejections());
        assert_eq!(request.rejection_count(), 0);
    }

    #[test]
    fn test_reject_appends_in_order() {
        let mut request = ValidationRequest::new();
        request.reject("A", "first", PaymentAttribute::Iban);
        request.reject("B", "second", PaymentAttribute::Bic);
        request.reject("C", "third", PaymentAttribute::Iban);

        let names: Vec<&str> = request
            .rejections()
            .iter()
            .map(|r| r.rule_name.as_str())
            .collect();
        assert_eq!(names, vec!["A", "B", "C"]);
        assert!(!request.is_valid());
    }

    #[test]
    fn test_reject_does_not_deduplicate() {
        let mut request = ValidationRequest::new();
        for _ in 0..3 {
            request.reject("Same", "same", PaymentAttribute::Amount);
        }
        assert_eq!(request.rejection_count(), 3);
    }

    #[test]
    fn test_rejections_for_filters_by_attribute() {
        let mut request = ValidationRequest::new();
        request.reject("A", "a", PaymentAttribute::Iban);
        request.reject("B", "b", PaymentAttribute::Bic);
        request.reject("C", "c", PaymentAttribute::Iban);

        let iban: Vec<&str> = request
            .rejections_for(PaymentAttribute::Iban)
            .map(|r| r.rule_name.as_str())
            .collect();
        assert_eq!(iban, vec!["A", "C"]);
        assert_eq!(request.rejections_for(PaymentAttribute::Debtor).count(), 0);
    }

    #[test]
    fn test_rejections_by_attribute_keeps_first_seen_order() {
        let mut request = ValidationRequest::new();
        request.reject("A", "a", PaymentAttribute::Country);
        request.reject("B", "b", PaymentAttribute::Bic);
        request.reject("C", "c", PaymentAttribute::Country);

        let grouped = request.rejections_by_attribute();
        let keys: Vec<_> = grouped.keys().copied().collect();
        assert_eq!(keys, vec![PaymentAttribute::Country, PaymentAttribute::Bic]);
        assert_eq!(grouped[&PaymentAttribute::Country].len(), 2);
    }

    #[test]
    fn test_attribute_request_two_argument_reject() {
        let mut request = CurrencyRequest::default();
        request.reject("CurrencyRule", "unknown currency");

        let mut expected = ValidationRequest::new();
        expected.reject("CurrencyRule", "unknown currency", PaymentAttribute::Currency);

        assert_eq!(request.rejections(), expected.rejections());
        assert!(request.has_rejections());
        assert!(!request.is_valid());
    }

    #[test]
    fn test_rejection_display() {
        let rejection = Rejection::new("BicLengthRule", "too short", PaymentAttribute::Bic);
        assert_eq!(rejection.to_string(), "[bic] BicLengthRule: too short");
    }

    #[test]
    fn test_request_serializes_as_list() {
        let mut request = ValidationRequest::new();
        request.reject("R1", "failed", PaymentAttribute::Bic);

        let json = serde_json::to_value(&request).expect("serialize should succeed");
        assert_eq!(
            json,
            serde_json::json!([{ "rule_name": "R1", "message": "failed", "attribute": "bic" }])
        );
    }

    #[test]
    fn test_report_snapshot() {
        let mut request = CurrencyRequest {
            currency: Some("EUR".to_string()),
            ..Default::default()
        };
        request.reject("CurrencyRule", "not accepted");

        let report = request.report();
        assert_eq!(report.attribute, PaymentAttribute::Currency);
        assert_eq!(report.value.as_deref(), Some("EUR"));
        assert_eq!(report.rejections, request.rejections());
        assert!(!report.is_valid());
    }

    #[test]
    fn test_report_round_trip() {
        let mut request = CurrencyRequest {
            currency: Some("EUR".to_string()),
            ..Default::default()
        };
        request.reject("CurrencyRule", "not accepted");
        request.reject("CurrencyRule", "not accepted");

        let report = request.report();
        let json = serde_json::to_string(&report).expect("serialize should succeed");
        let back: RequestReport = serde_json::from_str(&json).expect("deserialize should succeed");
        assert_eq!(back, report);
    }

    #[test]
    fn test_report_without_value_round_trip() {
        let report = CurrencyRequest::default().report();

        let json = serde_json::to_value(&report).expect("serialize should succeed");
        assert_eq!(json, serde_json::json!({ "attribute": "currency", "rejections": [] }));

        let back: RequestReport = serde_json::from_value(json).expect("deserialize should succeed");
        assert_eq!(back, report);
        assert!(back.is_valid());
    }
}
