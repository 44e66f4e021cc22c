//! Normalization filters and field validators
//!
//! Filters turn raw payment field input into the form that is stored on a
//! request. Validators check a normalized value and describe what is wrong
//! with it; rules turn those descriptions into rejections.

pub mod filters;
pub mod validators;
