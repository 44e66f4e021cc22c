//! Macros for reducing boilerplate when defining validation requests

/// Macro to implement `AttributeRequest` for a request type
///
/// The type must hold its base request in a field named `request`; the
/// third argument names the `Option<String>` field holding the value.
///
/// # Example
/// ```rust
/// use payment_facts::prelude::*;
///
/// #[derive(Default)]
/// pub struct CurrencyValidationRequest {
///     currency: Option<String>,
///     request: ValidationRequest,
/// }
///
/// payment_facts::impl_attribute_request!(
///     CurrencyValidationRequest,
///     PaymentAttribute::Currency,
///     currency
/// );
///
/// let mut request = CurrencyValidationRequest::default();
/// request.reject("CurrencyRule", "unknown currency");
/// assert_eq!(request.rejections()[0].attribute, PaymentAttribute::Currency);
/// assert_eq!(request.report().value, None);
/// ```
#[macro_export]
macro_rules! impl_attribute_request {
    ($type:ident, $attribute:expr, $value:ident) => {
        impl $crate::core::request::AttributeRequest for $type {
            const ATTRIBUTE: $crate::core::attribute::PaymentAttribute = $attribute;

            fn request(&self) -> &$crate::core::request::ValidationRequest {
                &self.request
            }

            fn request_mut(&mut self) -> &mut $crate::core::request::ValidationRequest {
                &mut self.request
            }

            fn value(&self) -> Option<&str> {
                self.$value.as_deref()
            }
        }
    };
}
