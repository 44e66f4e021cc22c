//! Configuration loading and management for the standard rule sets

use crate::core::error::{ConfigError, FactsError, FactsResult};
use crate::core::validation::filters::uppercase;
use serde::{Deserialize, Serialize};
use std::path::Path;
use validator::{Validate, ValidationError};

/// Parameters of the BIC rules
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
#[validate(schema(function = "validate_bic_countries"))]
pub struct BicRulesConfig {
    /// Accepted BIC lengths (8 for a head office, 11 with a branch code)
    #[validate(length(min = 1))]
    pub allowed_lengths: Vec<usize>,

    /// Optional allow-list of ISO 3166 country codes
    pub allowed_countries: Option<Vec<String>>,
}

impl Default for BicRulesConfig {
    fn default() -> Self {
        Self {
            allowed_lengths: vec![8, 11],
            allowed_countries: None,
        }
    }
}

/// Parameters of the IBAN rules
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
#[validate(schema(function = "validate_iban_bounds"))]
pub struct IbanRulesConfig {
    #[validate(range(min = 5, max = 34))]
    pub min_length: usize,

    #[validate(range(min = 5, max = 34))]
    pub max_length: usize,
}

impl Default for IbanRulesConfig {
    fn default() -> Self {
        Self {
            min_length: 15,
            max_length: 34,
        }
    }
}

/// Complete configuration for the standard rule sets
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct RulesConfig {
    /// Stop evaluating a request after the first rule that rejects it
    pub stop_on_first_rejection: bool,

    #[validate(nested)]
    pub bic: BicRulesConfig,

    #[validate(nested)]
    pub iban: IbanRulesConfig,
}

impl RulesConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> FactsResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => FactsError::Config(ConfigError::FileNotFound {
                path: path.display().to_string(),
            }),
            _ => e.into(),
        })?;

        let config: Self = serde_yaml::from_str(&content).map_err(|e| ConfigError::ParseError {
            file: Some(path.display().to_string()),
            message: e.to_string(),
        })?;
        config.finish()
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> FactsResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.finish()
    }

    /// Country allow-list, if one is in force
    ///
    /// An empty list means no allow-list.
    pub fn allowed_countries(&self) -> Option<&[String]> {
        self.bic
            .allowed_countries
            .as_deref()
            .filter(|countries| !countries.is_empty())
    }

    fn finish(mut self) -> FactsResult<Self> {
        self.validate()?;

        if let Some(countries) = self.bic.allowed_countries.take() {
            if countries.is_empty() {
                tracing::warn!("Empty bic.allowed_countries, country allow-list disabled");
            } else {
                self.bic.allowed_countries =
                    Some(countries.iter().map(|c| uppercase(c)).collect());
            }
        }
        Ok(self)
    }
}

fn validate_bic_countries(config: &BicRulesConfig) -> Result<(), ValidationError> {
    let Some(countries) = &config.allowed_countries else {
        return Ok(());
    };

    let valid = countries.iter().all(|c| {
        let c = c.trim();
        c.len() == 2 && c.chars().all(|ch| ch.is_ascii_alphabetic())
    });
    if valid {
        Ok(())
    } else {
        Err(ValidationError::new("country_code")
            .with_message("allowed_countries must hold two-letter country codes".into()))
    }
}

fn validate_iban_bounds(config: &IbanRulesConfig) -> Result<(), ValidationError> {
    if config.min_length <= config.max_length {
        Ok(())
    } else {
        Err(ValidationError::new("length_bounds")
            .with_message("min_length must not exceed max_length".into()))
    }
}
