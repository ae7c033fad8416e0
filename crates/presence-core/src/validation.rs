//! Validation utilities.

use crate::PresenceError;
use validator::{Validate, ValidationErrors};

/// Extension trait for validation.
pub trait ValidateExt: Validate {
    /// Validates the struct and returns a `PresenceError` on failure.
    fn validate_request(&self) -> Result<(), PresenceError> {
        self.validate().map_err(validation_errors_to_presence_error)
    }
}

impl<T: Validate> ValidateExt for T {}

/// Converts `validator::ValidationErrors` to a single `PresenceError::Validation`.
#[must_use]
pub fn validation_errors_to_presence_error(errors: ValidationErrors) -> PresenceError {
    let mut messages: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| {
                let message = error
                    .message
                    .as_ref()
                    .map_or_else(|| error.code.to_string(), ToString::to_string);
                format!("{}: {}", field, message)
            })
        })
        .collect();
    messages.sort();

    PresenceError::Validation(messages.join("; "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Probe {
        #[validate(length(min = 1, message = "must not be empty"))]
        name: String,
        #[validate(range(min = 1, max = 12))]
        month: u32,
    }

    #[test]
    fn test_valid_request_passes() {
        let probe = Probe { name: "x".to_string(), month: 3 };
        assert!(probe.validate_request().is_ok());
    }

    #[test]
    fn test_field_errors_are_joined() {
        let probe = Probe { name: String::new(), month: 13 };
        let err = probe.validate_request().unwrap_err();
        let PresenceError::Validation(message) = err else {
            panic!("expected validation error");
        };
        assert!(message.contains("name: must not be empty"));
        assert!(message.contains("month: range"));
    }
}
