use std::borrow::Cow;

use validator::ValidationError;

/// Rejects empty and whitespace-only text.
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(new_validation_error("blank", "Value cannot be empty"));
    }
    Ok(())
}

pub fn new_validation_error(code: &'static str, msg: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(msg));
    err
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_values_are_rejected() {
        assert!(validate_not_blank("").is_err());
        assert!(validate_not_blank(" \t\n").is_err());
        assert!(validate_not_blank("AI").is_ok());
    }
}
