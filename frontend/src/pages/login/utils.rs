use crate::{
    api::LoginRequest,
    utils::validation::{self, FieldError},
};

pub const PASSWORD_MIN: usize = 3;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginFormState {
    pub email: String,
    pub password: String,
}

impl LoginFormState {
    pub fn validate(&self) -> Vec<FieldError> {
        validation::collect([
            validation::required("email", &self.email),
            validation::email("email", self.email.trim()),
            validation::required("password", &self.password),
            validation::length_between("password", &self.password, PASSWORD_MIN, usize::MAX),
        ])
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    pub fn to_request(&self) -> LoginRequest {
        LoginRequest {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(email: &str, password: &str) -> LoginFormState {
        LoginFormState {
            email: email.into(),
            password: password.into(),
        }
    }

    #[test]
    fn empty_form_is_invalid() {
        let errors = LoginFormState::default().validate();
        assert!(errors.iter().any(|e| e.field == "email"));
        assert!(errors.iter().any(|e| e.field == "password"));
    }

    #[test]
    fn rejects_malformed_email_and_short_password() {
        assert!(!form("yoga.studio.com", "test!1234").is_valid());
        assert!(!form("yoga@studio.com", "ab").is_valid());
        assert!(form("yoga@studio.com", "abc").is_valid());
    }

    #[test]
    fn request_trims_email_only() {
        let request = form(" yoga@studio.com ", " pass ").to_request();
        assert_eq!(request.email, "yoga@studio.com");
        assert_eq!(request.password, " pass ");
    }
}
