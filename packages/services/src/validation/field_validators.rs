use super::active_model_validator::ValidationError;

pub struct FieldValidator;

impl FieldValidator {
    pub fn required(value: &str, field: &str) -> Option<ValidationError> {
        if value.trim().is_empty() {
            return Some(ValidationError::new(
                field,
                &format!("{} cannot be empty", field),
            ));
        }
        None
    }

    pub fn max_length(value: &str, limit: usize, field: &str) -> Option<ValidationError> {
        if value.chars().count() > limit {
            return Some(ValidationError::new(
                field,
                &format!("{} must be at most {} characters", field, limit),
            ));
        }
        None
    }

    /// Syntactic check only: exactly one `@`, a non-empty local part, a
    /// dotted domain and no whitespace. Deliverability is not our problem.
    pub fn email(value: &str, field: &str) -> Option<ValidationError> {
        if value.trim().is_empty() {
            return Some(ValidationError::new(
                field,
                &format!("{} cannot be empty", field),
            ));
        }

        let well_formed = match value.split_once('@') {
            Some((local, domain)) => {
                !local.is_empty()
                    && !domain.contains('@')
                    && domain.contains('.')
                    && !domain.starts_with('.')
                    && !domain.ends_with('.')
                    && !value.chars().any(char::is_whitespace)
            }
            None => false,
        };
        if !well_formed {
            return Some(ValidationError::new(
                field,
                &format!("{} format is invalid", field),
            ));
        }
        None
    }

    /// Letters, digits, hyphens and underscores only.
    pub fn slug(value: &str, field: &str) -> Option<ValidationError> {
        let ok = value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !ok {
            return Some(ValidationError::new(
                field,
                &format!("{} may only contain letters, digits, hyphens and underscores", field),
            ));
        }
        None
    }
}
