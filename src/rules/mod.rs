//! Rules that reject validation requests, and an ordered set to run them
//!
//! A [`ValidationRule`] inspects one request type and records failures with
//! the request's own two-argument `reject`, so every rejection it produces
//! carries the request's fixed attribute. A [`RuleSet`] runs its rules in
//! insertion order; it has no matching logic and no scheduling.

pub mod bic;
pub mod iban;

pub use bic::{BicCountryRule, BicFormatRule, BicLengthRule, BicPresentRule};
pub use iban::{IbanChecksumRule, IbanLengthRule, IbanPresentRule};

use crate::config::RulesConfig;
use crate::core::request::AttributeRequest;
use crate::facts::{BicValidationRequest, IbanValidationRequest};

/// A rule that may reject requests of type `R`
pub trait ValidationRule<R>: Send + Sync {
    /// Rule name recorded on each rejection
    fn name(&self) -> &str;

    /// Check `request`, calling its `reject` for every failure found
    fn evaluate(&self, request: &mut R);
}

/// An ordered list of rules for one request type
pub struct RuleSet<R> {
    rules: Vec<Box<dyn ValidationRule<R>>>,
    stop_on_first_rejection: bool,
}

impl<R> Default for RuleSet<R> {
    fn default() -> Self {
        Self {
            rules: Vec::new(),
            stop_on_first_rejection: false,
        }
    }
}

impl<R: AttributeRequest> RuleSet<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stop after the first rule that adds a rejection
    pub fn stop_on_first_rejection(mut self, stop: bool) -> Self {
        self.stop_on_first_rejection = stop;
        self
    }

    pub fn add_rule(&mut self, rule: impl ValidationRule<R> + 'static) {
        self.rules.push(Box::new(rule));
    }

    pub fn with_rule(mut self, rule: impl ValidationRule<R> + 'static) -> Self {
        self.add_rule(rule);
        self
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|rule| rule.name()).collect()
    }

    /// Run every rule against `request` and report whether it is valid
    ///
    /// Rejections recorded before the call count against validity too.
    pub fn evaluate(&self, request: &mut R) -> bool {
        let span = tracing::debug_span!(
            "rule_set",
            attribute = %R::ATTRIBUTE,
            rules = self.rules.len()
        );
        let _enter = span.enter();

        for rule in &self.rules {
            let before = request.rejections().len();
            rule.evaluate(request);
            let added = request.rejections().len() - before;

            if added > 0 {
                tracing::debug!(rule = rule.name(), added, "Rule rejected request");
                if self.stop_on_first_rejection {
                    break;
                }
            }
        }

        let valid = request.is_valid();
        tracing::debug!(
            valid,
            rejections = request.rejections().len(),
            "Rule set evaluated"
        );
        valid
    }
}

impl RuleSet<BicValidationRequest> {
    /// The standard BIC rules: presence, length, format and, when an
    /// allow-list is configured, country
    pub fn bic_defaults(config: &RulesConfig) -> Self {
        let mut set = Self::new()
            .stop_on_first_rejection(config.stop_on_first_rejection)
            .with_rule(BicPresentRule)
            .with_rule(BicLengthRule::new(config.bic.allowed_lengths.clone()))
            .with_rule(BicFormatRule::new());

        if let Some(countries) = config.allowed_countries() {
            set.add_rule(BicCountryRule::new(countries.to_vec()));
        }
        tracing::info!(rules = ?set.rule_names(), "BIC rule set ready");
        set
    }
}

impl RuleSet<IbanValidationRequest> {
    /// The standard IBAN rules: presence, length and check digits
    pub fn iban_defaults(config: &RulesConfig) -> Self {
        let set = Self::new()
            .stop_on_first_rejection(config.stop_on_first_rejection)
            .with_rule(IbanPresentRule)
            .with_rule(IbanLengthRule::new(
                config.iban.min_length,
                config.iban.max_length,
            ))
            .with_rule(IbanChecksumRule::new());
        tracing::info!(rules = ?set.rule_names(), "IBAN rule set ready");
        set
    }
}

/// Run `check` on the value read by `value` and reject on failure
///
/// Unset values are skipped; presence is a rule of its own.
pub(crate) fn reject_if_invalid<R, F>(
    request: &mut R,
    rule_name: &str,
    value: fn(&R) -> Option<&str>,
    check: F,
) where
    R: AttributeRequest,
    F: FnOnce(&str) -> Result<(), String>,
{
    let outcome = value(request).map(check);
    if let Some(Err(message)) = outcome {
        request.reject(rule_name, message);
    }
}
