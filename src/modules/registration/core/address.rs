// Structured home address of a college member.
//
// Responsibilities
// - Hold the address parts as separate fields; a free-form string is never an address.
// - Check the shape of each part (non-blank, plausible postal code).
// - Convert raw JSON input, rejecting anything that is not an address object.

use crate::modules::registration::core::errors::ValidationError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
}

impl Address {
    pub fn new(
        street: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        postal_code: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        Self {
            street: street.into(),
            city: city.into(),
            state: state.into(),
            postal_code: postal_code.into(),
            country: country.into(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        for (part, value) in [
            ("street", &self.street),
            ("city", &self.city),
            ("state", &self.state),
            ("postal_code", &self.postal_code),
            ("country", &self.country),
        ] {
            if value.trim().is_empty() {
                return Err(ValidationError::InvalidHomeAddress(format!(
                    "{part} must not be blank"
                )));
            }
        }
        if !is_postal_code(&self.postal_code) {
            return Err(ValidationError::InvalidHomeAddress(format!(
                "malformed postal code {:?}",
                self.postal_code
            )));
        }
        Ok(())
    }

    /// Reads an address from untyped input. Strings, numbers and partial objects are rejected.
    pub fn from_json(value: &serde_json::Value) -> Result<Self, ValidationError> {
        if !value.is_object() {
            return Err(ValidationError::InvalidHomeAddress(format!(
                "expected a structured address, got {}",
                json_kind(value)
            )));
        }
        let address: Address = serde_json::from_value(value.clone())
            .map_err(|e| ValidationError::InvalidHomeAddress(e.to_string()))?;
        address.validate()?;
        Ok(address)
    }
}

fn is_postal_code(code: &str) -> bool {
    let code = code.trim();
    (3..=10).contains(&code.len())
        && code.chars().any(|c| c.is_ascii_alphanumeric())
        && code
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == ' ' || c == '-')
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
