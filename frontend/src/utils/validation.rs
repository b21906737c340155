//! Client-side form rules. A failing rule blocks submission before any request is sent.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

pub fn required(field: &'static str, value: &str) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        Err(FieldError::new(field, format!("{} is required", field)))
    } else {
        Ok(())
    }
}

pub fn length_between(
    field: &'static str,
    value: &str,
    min: usize,
    max: usize,
) -> Result<(), FieldError> {
    let len = value.chars().count();
    if len < min {
        return Err(FieldError::new(
            field,
            format!("{} must be at least {} characters", field, min),
        ));
    }
    if len > max {
        return Err(FieldError::new(
            field,
            format!("{} must be at most {} characters", field, max),
        ));
    }
    Ok(())
}

pub fn max_length(field: &'static str, value: &str, max: usize) -> Result<(), FieldError> {
    length_between(field, value, 0, max)
}

pub fn email(field: &'static str, value: &str) -> Result<(), FieldError> {
    if is_email(value) {
        Ok(())
    } else {
        Err(FieldError::new(field, format!("{} is not a valid email", field)))
    }
}

fn is_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = value.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    !local.is_empty() && !domain.is_empty() && domain.split('.').all(|label| !label.is_empty())
}

/// Runs every check and keeps the failures, in field order.
pub fn collect(checks: impl IntoIterator<Item = Result<(), FieldError>>) -> Vec<FieldError> {
    checks.into_iter().filter_map(Result::err).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_rejects_blank_values() {
        assert!(required("email", "").is_err());
        assert!(required("email", "   ").is_err());
        assert!(required("email", "a").is_ok());
    }

    #[test]
    fn email_rule_follows_form_semantics() {
        assert!(email("email", "yoga@studio.com").is_ok());
        assert!(email("email", "yoga@studio").is_ok());
        assert!(email("email", "abc").is_err());
        assert!(email("email", "a@@b").is_err());
        assert!(email("email", "a@b.").is_err());
        assert!(email("email", "a b@c.d").is_err());
    }

    #[test]
    fn length_rules_count_characters() {
        assert!(length_between("firstName", "Ki", 3, 20).is_err());
        assert!(length_between("firstName", "Kim", 3, 20).is_ok());
        assert!(length_between("firstName", &"x".repeat(21), 3, 20).is_err());
        assert!(max_length("description", &"é".repeat(2000), 2000).is_ok());
        assert!(max_length("description", &"é".repeat(2001), 2000).is_err());
    }

    #[test]
    fn collect_keeps_only_failures() {
        let errors = collect([required("name", ""), required("date", "2025-01-01")]);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "name");
    }
}
